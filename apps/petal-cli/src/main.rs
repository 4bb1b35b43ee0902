//! petal - render the iris scatterplot and boxplot
//!
//! Loads a CSV file once, draws both charts and writes them into an HTML
//! page with one mount point per chart.

use std::path::PathBuf;

use clap::Parser;
use petal_core::{
    grouped_summary, run, write_svgs, ExportMetadata, HtmlPage, PetalConfig, RenderReport,
};
use petal_io::CoercionPolicy;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "petal")]
#[command(about = "Render a scatterplot and a boxplot of petal measurements")]
#[command(version)]
struct Cli {
    /// Input CSV file
    #[arg(default_value = "iris.csv")]
    input: PathBuf,

    /// Output HTML page
    #[arg(short, long, default_value = "charts.html")]
    output: PathBuf,

    /// Configuration file (TOML, or JSON with a .json extension)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Abort on the first numeric field that does not parse
    #[arg(long)]
    strict: bool,

    /// Also write each chart as a standalone SVG into this directory
    #[arg(long)]
    svg_dir: Option<PathBuf>,

    /// Print the per-species quartile summary as JSON
    #[arg(long)]
    summary: bool,

    /// Debug logging unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Per-species quartiles as pretty JSON, or `None` when they cannot be computed
///
/// A group with no finite lengths also fails the boxplot, which is reported
/// with the other chart failures, so here it only skips the summary.
fn summary_json(report: &RenderReport) -> Result<Option<String>, serde_json::Error> {
    match grouped_summary(&report.dataset) {
        Ok(summary) => serde_json::to_string_pretty(&summary).map(Some),
        Err(e) => {
            tracing::warn!(error = %e, "skipping summary");
            Ok(None)
        }
    }
}

/// One line naming every chart that failed
fn failure_message(report: &RenderReport) -> Option<String> {
    let failed: Vec<String> = report
        .failures()
        .map(|(kind, err)| format!("{kind}: {err}"))
        .collect();
    if failed.is_empty() {
        None
    } else {
        Some(format!("{} chart(s) failed: {}", failed.len(), failed.join("; ")))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => PetalConfig::load(path)?,
        None => PetalConfig::default(),
    };
    if cli.strict {
        config.coercion = CoercionPolicy::Strict;
    }

    let input = cli.input.to_string_lossy();
    let report = run(&input, &config)?;

    HtmlPage::from_report(&report, ExportMetadata::now()).write_to(&cli.output)?;

    if let Some(dir) = &cli.svg_dir {
        let written = write_svgs(&report, dir)?;
        tracing::info!(files = written.len(), dir = %dir.display(), "wrote standalone svgs");
    }

    if cli.summary {
        if let Some(json) = summary_json(&report)? {
            println!("{json}");
        }
    }

    match failure_message(&report) {
        Some(message) => Err(message.into()),
        None => Ok(()),
    }
}
