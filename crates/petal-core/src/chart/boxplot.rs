//! Box-and-whisker chart of petal length per species

use super::{draw_axis, draw_axis_label};
use crate::axis::{band_ticks, linear_ticks, AxisPosition};
use crate::canvas::{Canvas, Paint, Stroke};
use crate::config::PetalConfig;
use crate::error::PetalResult;
use crate::pipeline::grouped_summary;
use crate::scale::{BandScale, LinearScale};
use petal_io::Dataset;
use petal_stats::GroupedSummary;

/// Everything the boxplot needs before it draws
#[derive(Clone, Debug, PartialEq)]
pub struct BoxplotModel {
    /// One band per species, in first-occurrence order
    pub x: BandScale,
    pub y: LinearScale,
    pub summaries: GroupedSummary,
}

impl BoxplotModel {
    pub fn build(dataset: &Dataset, config: &PetalConfig) -> PetalResult<Self> {
        let layout = &config.layout;
        let fields = &config.fields;

        let y = LinearScale::from_values(
            dataset.petal_lengths(),
            config.boxplot.y_padding,
            layout.y_range(),
            &fields.petal_length,
        )?;

        let summaries = grouped_summary(dataset)?;
        tracing::debug!(groups = summaries.len(), "computed grouped summary");

        let x = BandScale::from_categories(summaries.keys(), layout.x_range(), &fields.species)?;

        Ok(Self { x, y, summaries })
    }
}

/// Draw the boxplot onto `canvas`
///
/// For each group: a whisker between the fences at the band center, a box
/// from q1 to q3 across the band, and a heavier median line.
pub fn render_boxplot(
    dataset: &Dataset,
    config: &PetalConfig,
    canvas: &mut dyn Canvas,
) -> PetalResult<BoxplotModel> {
    let model = BoxplotModel::build(dataset, config)?;
    let layout = &config.layout;
    let chart = &config.boxplot;
    let background = layout.background_color()?;

    canvas.begin(layout.width, layout.height, background);

    let stroke = Stroke::black(chart.stroke_width);
    let median_stroke = Stroke::black(chart.median_stroke_width);
    let box_paint = Paint::fill(background).with_stroke(stroke);
    let bandwidth = model.x.bandwidth();

    for (key, summary) in model.summaries.iter() {
        let Some(left) = model.x.position(key) else {
            continue;
        };
        let center = left + bandwidth / 2.0;
        let fences = summary.fences(chart.whisker_coefficient);

        canvas.line(
            center,
            model.y.map(fences.lower),
            center,
            model.y.map(fences.upper),
            &stroke,
        );

        let top = model.y.map(summary.q3);
        let bottom = model.y.map(summary.q1);
        canvas.rect(left, top, bandwidth, bottom - top, &box_paint);

        let median = model.y.map(summary.median);
        canvas.line(left, median, left + bandwidth, median, &median_stroke);
    }

    draw_axis(
        canvas,
        AxisPosition::Bottom,
        layout.height - layout.margin.bottom,
        layout.x_range(),
        &band_ticks(&model.x),
        layout.tick_font_size,
    );
    draw_axis(
        canvas,
        AxisPosition::Left,
        layout.margin.left,
        layout.y_range(),
        &linear_ticks(&model.y, layout.tick_count),
        layout.tick_font_size,
    );
    draw_axis_label(canvas, AxisPosition::Bottom, &chart.x_label, layout);
    draw_axis_label(canvas, AxisPosition::Left, &chart.y_label, layout);

    Ok(model)
}
