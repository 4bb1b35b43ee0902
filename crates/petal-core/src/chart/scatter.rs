//! Scatterplot of petal length against petal width, colored by species

use super::{draw_axis, draw_axis_label};
use crate::axis::{linear_ticks, AxisPosition};
use crate::canvas::{Canvas, Paint, TextAnchor, TextStyle};
use crate::config::PetalConfig;
use crate::error::PetalResult;
use crate::scale::{LinearScale, OrdinalScale};
use petal_io::Dataset;

/// Scales shared by the points, the axes and the legend
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterplotScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub color: OrdinalScale,
}

impl ScatterplotScales {
    pub fn build(dataset: &Dataset, config: &PetalConfig) -> PetalResult<Self> {
        let layout = &config.layout;
        let chart = &config.scatterplot;
        let fields = &config.fields;

        let x = LinearScale::from_values(
            dataset.petal_lengths(),
            chart.x_padding,
            layout.x_range(),
            &fields.petal_length,
        )?;
        let y = LinearScale::from_values(
            dataset.petal_widths(),
            chart.y_padding,
            layout.y_range(),
            &fields.petal_width,
        )?;
        let color =
            OrdinalScale::from_categories(dataset.species(), chart.resolve_palette()?, &fields.species)?;

        Ok(Self { x, y, color })
    }
}

/// Draw the scatterplot onto `canvas`
///
/// All scales are built before the first drawing call, so a failure leaves
/// the canvas untouched. Records with a non-finite coordinate are skipped.
pub fn render_scatterplot(
    dataset: &Dataset,
    config: &PetalConfig,
    canvas: &mut dyn Canvas,
) -> PetalResult<ScatterplotScales> {
    let scales = ScatterplotScales::build(dataset, config)?;
    let layout = &config.layout;
    let chart = &config.scatterplot;
    let background = layout.background_color()?;

    canvas.begin(layout.width, layout.height, background);

    let mut skipped = 0usize;
    for record in dataset {
        if !(record.petal_length.is_finite() && record.petal_width.is_finite()) {
            skipped += 1;
            continue;
        }
        let Some(fill) = scales.color.color(&record.species) else {
            continue;
        };
        canvas.circle(
            scales.x.map(record.petal_length),
            scales.y.map(record.petal_width),
            chart.point_radius,
            &Paint::fill(fill),
        );
    }
    if skipped > 0 {
        tracing::debug!(skipped, "scatterplot skipped records without finite coordinates");
    }

    draw_axis(
        canvas,
        AxisPosition::Bottom,
        layout.height - layout.margin.bottom,
        layout.x_range(),
        &linear_ticks(&scales.x, layout.tick_count),
        layout.tick_font_size,
    );
    draw_axis(
        canvas,
        AxisPosition::Left,
        layout.margin.left,
        layout.y_range(),
        &linear_ticks(&scales.y, layout.tick_count),
        layout.tick_font_size,
    );
    draw_axis_label(canvas, AxisPosition::Bottom, &chart.x_label, layout);
    draw_axis_label(canvas, AxisPosition::Left, &chart.y_label, layout);

    // Legend: one swatch and label per color domain entry
    let legend = &chart.legend;
    let swatch_x = layout.width - legend.right_offset;
    let label_style = TextStyle::anchored(TextAnchor::Start).shifted(0.25);
    for (i, species) in scales.color.domain().iter().enumerate() {
        let row_y = legend.top + legend.row_step * i as f64;
        let fill = scales.color.palette().color(i);
        canvas.circle(swatch_x, row_y, legend.swatch_radius, &Paint::fill(fill));
        canvas.text(swatch_x + legend.text_gap, row_y, species, &label_style);
    }

    Ok(scales)
}
