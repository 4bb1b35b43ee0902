//! Drawing surface abstraction
//!
//! Charts never talk to an output format directly. They issue primitive
//! drawing calls against a [`Canvas`], which the caller supplies.

use crate::colormap::Color;

/// Horizontal text alignment relative to the anchor point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Stroke parameters for lines and outlines
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    /// Black stroke of the given width
    pub fn black(width: f64) -> Self {
        Self::new(Color::BLACK, width)
    }
}

/// Fill and outline for closed shapes
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Paint {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl Paint {
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// Text placement options
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub anchor: TextAnchor,
    /// Rotation in degrees about the surface origin, applied before placement
    pub rotation: Option<f64>,
    /// Baseline shift in em units
    pub dy_em: f64,
    pub font_size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            anchor: TextAnchor::Start,
            rotation: None,
            dy_em: 0.0,
            font_size: 12.0,
        }
    }
}

impl TextStyle {
    pub fn anchored(anchor: TextAnchor) -> Self {
        Self {
            anchor,
            ..Default::default()
        }
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn shifted(mut self, dy_em: f64) -> Self {
        self.dy_em = dy_em;
        self
    }

    pub fn sized(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }
}

/// A fixed-size drawing surface
pub trait Canvas {
    /// Start a surface of the given size filled with `background`
    fn begin(&mut self, width: f64, height: f64, background: Color);

    fn circle(&mut self, cx: f64, cy: f64, r: f64, paint: &Paint);

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &Stroke);

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint);

    fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle);
}

/// One recorded drawing call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Begin {
        width: f64,
        height: f64,
        background: Color,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        paint: Paint,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        paint: Paint,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        style: TextStyle,
    },
}

/// A canvas that keeps every call, for inspecting chart geometry
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }

    /// Text contents in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn begin(&mut self, width: f64, height: f64, background: Color) {
        self.commands.push(DrawCommand::Begin {
            width,
            height,
            background,
        });
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            cx,
            cy,
            r,
            paint: *paint,
        });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            stroke: *stroke,
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            paint: *paint,
        });
    }

    fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            content: content.to_string(),
            style: *style,
        });
    }
}
