//! The two charts and the axis drawing they share

mod boxplot;
mod scatter;

pub use boxplot::{render_boxplot, BoxplotModel};
pub use scatter::{render_scatterplot, ScatterplotScales};

use crate::axis::{AxisPosition, TickMark};
use crate::canvas::{Canvas, Stroke, TextAnchor, TextStyle};
use crate::config::{AxisLabel, LayoutConfig};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of tick marks outside the plot area
pub const TICK_SIZE: f64 = 6.0;

/// Distance from the axis line to tick labels
pub const TICK_PADDING: f64 = 9.0;

/// Chart identity, used for mount points and file names
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Scatterplot,
    Boxplot,
}

impl ChartKind {
    /// Both charts in page order
    pub const ALL: [ChartKind; 2] = [ChartKind::Scatterplot, ChartKind::Boxplot];

    /// Id of the page element the chart is placed in
    pub fn mount_id(&self) -> &'static str {
        match self {
            ChartKind::Scatterplot => "scatterplot",
            ChartKind::Boxplot => "boxplot",
        }
    }

    /// File name for the standalone SVG
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.mount_id())
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mount_id())
    }
}

/// Draw an axis line with its ticks and tick labels
///
/// `at` is the fixed coordinate of the axis line (x for vertical axes,
/// y for horizontal ones) and `span` its extent along the other coordinate.
pub(crate) fn draw_axis(
    canvas: &mut dyn Canvas,
    position: AxisPosition,
    at: f64,
    span: (f64, f64),
    ticks: &[TickMark],
    font_size: f64,
) {
    let stroke = Stroke::black(1.0);
    let k = position.outward();

    let (anchor, dy) = match position {
        AxisPosition::Left => (TextAnchor::End, 0.32),
        AxisPosition::Right => (TextAnchor::Start, 0.32),
        AxisPosition::Top => (TextAnchor::Middle, 0.0),
        AxisPosition::Bottom => (TextAnchor::Middle, 0.71),
    };
    let style = TextStyle::anchored(anchor).shifted(dy).sized(font_size);

    if position.is_vertical() {
        canvas.line(at, span.0, at, span.1, &stroke);
        for tick in ticks {
            canvas.line(at, tick.position, at + k * TICK_SIZE, tick.position, &stroke);
            canvas.text(at + k * TICK_PADDING, tick.position, &tick.label, &style);
        }
    } else {
        canvas.line(span.0, at, span.1, at, &stroke);
        for tick in ticks {
            canvas.line(tick.position, at, tick.position, at + k * TICK_SIZE, &stroke);
            canvas.text(tick.position, at + k * TICK_PADDING, &tick.label, &style);
        }
    }
}

/// Draw an axis title centered along the surface
pub(crate) fn draw_axis_label(
    canvas: &mut dyn Canvas,
    position: AxisPosition,
    label: &AxisLabel,
    layout: &LayoutConfig,
) {
    let style = TextStyle::anchored(TextAnchor::Middle);
    match position {
        AxisPosition::Bottom => {
            canvas.text(layout.width / 2.0, layout.height - label.offset, &label.text, &style)
        }
        AxisPosition::Top => canvas.text(layout.width / 2.0, label.offset, &label.text, &style),
        // Rotated text: x runs down the surface, y runs right
        AxisPosition::Left => canvas.text(
            -layout.height / 2.0,
            label.offset,
            &label.text,
            &style.rotated(-90.0),
        ),
        AxisPosition::Right => canvas.text(
            -layout.height / 2.0,
            layout.width - label.offset,
            &label.text,
            &style.rotated(-90.0),
        ),
    }
}
