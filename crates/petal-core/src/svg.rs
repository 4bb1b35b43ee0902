//! SVG backend for [`Canvas`]

use crate::canvas::{Canvas, Paint, Stroke, TextAnchor, TextStyle};
use crate::colormap::Color;

/// Builds a standalone `<svg>` document from drawing calls
#[derive(Clone, Debug, Default)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    background: Option<Color>,
    body: String,
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the document and return it
    pub fn into_svg(self) -> String {
        let style = self
            .background
            .map(|c| format!(r#" style="background: {}""#, c.to_hex()))
            .unwrap_or_default();

        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\"{style} font-family=\"sans-serif\">\n{body}</svg>\n",
            w = num(self.width),
            h = num(self.height),
            style = style,
            body = self.body,
        )
    }
}

/// Shortest decimal form with at most three fractional digits
fn num(v: f64) -> String {
    let text = format!("{:.3}", v);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "" | "-" | "-0" => "0".to_string(),
        t => t.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn stroke_attrs(stroke: &Stroke) -> String {
    format!(
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color.to_hex(),
        num(stroke.width)
    )
}

fn paint_attrs(paint: &Paint) -> String {
    let fill = match paint.fill {
        Some(c) => format!(r#" fill="{}""#, c.to_hex()),
        None => r#" fill="none""#.to_string(),
    };
    let stroke = paint.stroke.as_ref().map(stroke_attrs).unwrap_or_default();
    fill + &stroke
}

impl Canvas for SvgCanvas {
    fn begin(&mut self, width: f64, height: f64, background: Color) {
        self.width = width;
        self.height = height;
        self.background = Some(background);
        self.body.clear();
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, paint: &Paint) {
        self.body.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>\n",
            num(cx),
            num(cy),
            num(r),
            paint_attrs(paint)
        ));
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &Stroke) {
        self.body.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>\n",
            num(x1),
            num(y1),
            num(x2),
            num(y2),
            stroke_attrs(stroke)
        ));
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint) {
        self.body.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>\n",
            num(x),
            num(y),
            num(width),
            num(height),
            paint_attrs(paint)
        ));
    }

    fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        let anchor = match style.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let dy = if style.dy_em != 0.0 {
            format!(" dy=\"{}em\"", num(style.dy_em))
        } else {
            String::new()
        };
        let transform = style
            .rotation
            .map(|deg| format!(" transform=\"rotate({})\"", num(deg)))
            .unwrap_or_default();

        self.body.push_str(&format!(
            "<text x=\"{}\" y=\"{}\"{} font-size=\"{}\" text-anchor=\"{}\"{}>{}</text>\n",
            num(x),
            num(y),
            dy,
            num(style.font_size),
            anchor,
            transform,
            escape(content)
        ));
    }
}
