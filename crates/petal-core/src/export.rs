//! Page and file export
//!
//! Rendered charts are written either as one HTML page with a mount point
//! per chart, or as standalone SVG files.

use crate::chart::ChartKind;
use crate::error::{ExportError, ExportResult};
use crate::pipeline::RenderReport;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Provenance written into the page head
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Tool name and version
    pub generator: String,
    pub generated_at: DateTime<Utc>,
}

impl ExportMetadata {
    pub fn now() -> Self {
        Self {
            generator: format!("petal {}", env!("CARGO_PKG_VERSION")),
            generated_at: Utc::now(),
        }
    }
}

/// What a mount point holds
#[derive(Clone, Debug, PartialEq)]
enum Section {
    Chart(String),
    Failed(String),
}

/// HTML page with one mount point per chart
#[derive(Clone, Debug, PartialEq)]
pub struct HtmlPage {
    pub title: String,
    pub metadata: ExportMetadata,
    sections: Vec<(ChartKind, Section)>,
}

impl HtmlPage {
    pub fn new(title: impl Into<String>, metadata: ExportMetadata) -> Self {
        Self {
            title: title.into(),
            metadata,
            sections: Vec::new(),
        }
    }

    /// Page holding every chart of `report`, with a note for failed ones
    pub fn from_report(report: &RenderReport, metadata: ExportMetadata) -> Self {
        let mut page = Self::new("Iris petal measurements", metadata);
        for chart in &report.charts {
            match &chart.outcome {
                Ok(svg) => page.add_chart(chart.kind, svg.clone()),
                Err(e) => page.add_failure(chart.kind, e.to_string()),
            }
        }
        page
    }

    pub fn add_chart(&mut self, kind: ChartKind, svg: String) {
        self.sections.push((kind, Section::Chart(svg)));
    }

    pub fn add_failure(&mut self, kind: ChartKind, message: String) {
        self.sections.push((kind, Section::Failed(message)));
    }

    /// Number of mount points holding a chart
    pub fn chart_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|(_, s)| matches!(s, Section::Chart(_)))
            .count()
    }

    pub fn render(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!(
            "<meta name=\"generator\" content=\"{}\">\n",
            escape_html(&self.metadata.generator)
        ));
        html.push_str(&format!(
            "<meta name=\"created\" content=\"{}\">\n",
            self.metadata
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        html.push_str("</head>\n<body>\n");

        for (kind, section) in &self.sections {
            html.push_str(&format!("<div id=\"{}\">\n", kind.mount_id()));
            match section {
                Section::Chart(svg) => html.push_str(svg),
                Section::Failed(message) => html.push_str(&format!(
                    "<p class=\"error\">{} could not be drawn: {}</p>\n",
                    kind,
                    escape_html(message)
                )),
            }
            html.push_str("</div>\n");
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Write the page to `path`
    ///
    /// Fails with [`ExportError::NothingRendered`] when no chart rendered.
    pub fn write_to(&self, path: impl AsRef<Path>) -> ExportResult<()> {
        if self.chart_count() == 0 {
            return Err(ExportError::NothingRendered);
        }
        let path = path.as_ref();
        std::fs::write(path, self.render()).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), charts = self.chart_count(), "wrote page");
        Ok(())
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Write each rendered chart of `report` to `dir` as a standalone SVG
///
/// The directory is created if needed. Returns the written paths.
pub fn write_svgs(report: &RenderReport, dir: impl AsRef<Path>) -> ExportResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for chart in &report.charts {
        let Some(svg) = chart.svg() else {
            continue;
        };
        let path = dir.join(chart.kind.file_name());
        std::fs::write(&path, svg).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote svg");
        written.push(path);
    }
    Ok(written)
}
