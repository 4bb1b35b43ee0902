//! Load once, render each chart independently
//!
//! The dataset is loaded and coerced a single time and then shared by
//! reference with every chart. A chart that fails is recorded in the
//! report; the other charts still render.

use crate::chart::{render_boxplot, render_scatterplot, ChartKind};
use crate::config::PetalConfig;
use crate::error::{PetalError, PetalResult};
use crate::svg::SvgCanvas;
use petal_io::{load_dataset, CoercionWarning, Dataset};
use petal_stats::{GroupedSummary, StatsResult};

/// Outcome of rendering one chart
#[derive(Debug)]
pub struct ChartResult {
    pub kind: ChartKind,
    /// The standalone SVG document, or why it could not be drawn
    pub outcome: PetalResult<String>,
}

impl ChartResult {
    pub fn svg(&self) -> Option<&str> {
        self.outcome.as_ref().ok().map(String::as_str)
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Everything one run produced
#[derive(Debug)]
pub struct RenderReport {
    pub dataset: Dataset,
    /// Numeric fields that did not parse during load
    pub warnings: Vec<CoercionWarning>,
    /// One entry per chart, in page order
    pub charts: Vec<ChartResult>,
}

impl RenderReport {
    /// The SVG for `kind`, if it rendered
    pub fn svg(&self, kind: ChartKind) -> Option<&str> {
        self.charts
            .iter()
            .find(|c| c.kind == kind)
            .and_then(ChartResult::svg)
    }

    /// Charts that failed, with their errors
    pub fn failures(&self) -> impl Iterator<Item = (ChartKind, &PetalError)> {
        self.charts
            .iter()
            .filter_map(|c| c.outcome.as_ref().err().map(|e| (c.kind, e)))
    }

    /// Whether every chart rendered
    pub fn is_complete(&self) -> bool {
        self.charts.iter().all(ChartResult::is_ok)
    }
}

/// Quartiles of the length field per category
pub fn grouped_summary(dataset: &Dataset) -> StatsResult<GroupedSummary> {
    GroupedSummary::compute(dataset.iter(), |r| r.species.as_str(), |r| r.petal_length)
}

/// Render one chart to an SVG document
pub fn render_chart(kind: ChartKind, dataset: &Dataset, config: &PetalConfig) -> PetalResult<String> {
    let mut canvas = SvgCanvas::new();
    match kind {
        ChartKind::Scatterplot => {
            render_scatterplot(dataset, config, &mut canvas)?;
        }
        ChartKind::Boxplot => {
            render_boxplot(dataset, config, &mut canvas)?;
        }
    }
    Ok(canvas.into_svg())
}

/// Render every chart; one failing does not stop the others
pub fn render_charts(dataset: &Dataset, config: &PetalConfig) -> Vec<ChartResult> {
    ChartKind::ALL
        .iter()
        .map(|&kind| {
            let outcome = render_chart(kind, dataset, config);
            match &outcome {
                Ok(_) => tracing::info!(chart = %kind, "chart rendered"),
                Err(e) => tracing::warn!(chart = %kind, error = %e, "chart failed"),
            }
            ChartResult { kind, outcome }
        })
        .collect()
}

/// Validate `config`, load `path`, and render every chart
///
/// Fails only when the configuration is invalid or the dataset cannot be
/// loaded; chart failures are reported inside the [`RenderReport`].
pub fn run(path: &str, config: &PetalConfig) -> PetalResult<RenderReport> {
    config.validate()?;

    let loaded = load_dataset(path, &config.load_options())?;

    let charts = render_charts(&loaded.dataset, config);
    Ok(RenderReport {
        dataset: loaded.dataset,
        warnings: loaded.warnings,
        charts,
    })
}
