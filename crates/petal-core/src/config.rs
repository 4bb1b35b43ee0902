//! Configuration for petal-core
//!
//! Every layout constant of the two charts lives here, with defaults that
//! reproduce the reference page: a 600x400 surface, fixed margins, padded
//! numeric domains and the category10 palette.

use crate::axis::DEFAULT_TICK_COUNT;
use crate::colormap::{get_palette, Color, Palette};
use crate::error::{validation, ConfigError, ConfigResult, PetalResult};
use crate::scale::Padding;
use petal_io::{CoercionPolicy, FieldNames, LoadOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_WIDTH: f64 = 600.0;
pub const DEFAULT_HEIGHT: f64 = 400.0;
pub const DEFAULT_BACKGROUND: &str = "#e9f7f2";

pub const SCATTERPLOT_X_PADDING: Padding = Padding::new(1.0, 1.0);
pub const SCATTERPLOT_Y_PADDING: Padding = Padding::new(0.1, 0.3);
pub const BOXPLOT_Y_PADDING: Padding = Padding::new(1.0, 1.0);

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetalConfig {
    /// Source column names
    pub fields: FieldNames,
    /// What to do with numeric fields that do not parse
    pub coercion: CoercionPolicy,
    /// Surface size, margins and background
    pub layout: LayoutConfig,
    pub scatterplot: ScatterplotConfig,
    pub boxplot: BoxplotConfig,
}

/// Space reserved around the plot area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 30.0,
            right: 30.0,
            bottom: 50.0,
            left: 50.0,
        }
    }
}

/// Surface configuration shared by both charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Hex background color, also used to fill boxplot boxes
    pub background: String,
    /// Approximate number of ticks on linear axes
    pub tick_count: usize,
    /// Font size of tick labels
    pub tick_font_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: Margin::default(),
            background: DEFAULT_BACKGROUND.to_string(),
            tick_count: DEFAULT_TICK_COUNT,
            tick_font_size: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Horizontal pixel range of the plot area, left to right
    pub fn x_range(&self) -> (f64, f64) {
        (self.margin.left, self.width - self.margin.right)
    }

    /// Vertical pixel range of the plot area, bottom to top
    pub fn y_range(&self) -> (f64, f64) {
        (self.height - self.margin.bottom, self.margin.top)
    }

    pub fn background_color(&self) -> ConfigResult<Color> {
        parse_color("layout.background", &self.background)
    }
}

/// An axis title
///
/// For a horizontal axis `offset` is the distance from the bottom edge of
/// the surface to the baseline. For a vertical axis it is the distance from
/// the left edge, and the text is rotated by -90 degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    pub offset: f64,
}

impl AxisLabel {
    pub fn new(text: impl Into<String>, offset: f64) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }
}

/// Scatterplot legend placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    /// Distance from the right edge of the surface to the swatch centers
    pub right_offset: f64,
    /// Horizontal gap between swatch center and label start
    pub text_gap: f64,
    /// Vertical position of the first row
    pub top: f64,
    /// Vertical distance between rows
    pub row_step: f64,
    pub swatch_radius: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            right_offset: 105.0,
            text_gap: 10.0,
            top: 10.0,
            row_step: 20.0,
            swatch_radius: 5.0,
        }
    }
}

/// Scatterplot configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterplotConfig {
    pub x_padding: Padding,
    pub y_padding: Padding,
    pub point_radius: f64,
    pub x_label: AxisLabel,
    pub y_label: AxisLabel,
    pub legend: LegendConfig,
    /// Built-in palette name
    pub palette: String,
    /// Explicit hex colors; when non-empty they replace `palette`
    pub colors: Vec<String>,
}

impl Default for ScatterplotConfig {
    fn default() -> Self {
        Self {
            x_padding: SCATTERPLOT_X_PADDING,
            y_padding: SCATTERPLOT_Y_PADDING,
            point_radius: 3.0,
            x_label: AxisLabel::new("Petal Length", 15.0),
            y_label: AxisLabel::new("Petal Width", 20.0),
            legend: LegendConfig::default(),
            palette: "category10".to_string(),
            colors: Vec::new(),
        }
    }
}

impl ScatterplotConfig {
    /// Resolve the category palette
    pub fn resolve_palette(&self) -> PetalResult<Palette> {
        if self.colors.is_empty() {
            return Ok(get_palette(&self.palette)?);
        }

        let colors = self
            .colors
            .iter()
            .map(|hex| parse_color("scatterplot.colors", hex))
            .collect::<ConfigResult<Vec<_>>>()?;
        Ok(Palette::new("custom", colors)?)
    }
}

/// Boxplot configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxplotConfig {
    pub y_padding: Padding,
    pub x_label: AxisLabel,
    pub y_label: AxisLabel,
    /// Multiple of the IQR that whiskers extend past the box
    pub whisker_coefficient: f64,
    /// Stroke width of boxes and whiskers
    pub stroke_width: f64,
    pub median_stroke_width: f64,
}

impl Default for BoxplotConfig {
    fn default() -> Self {
        Self {
            y_padding: BOXPLOT_Y_PADDING,
            x_label: AxisLabel::new("Species", 10.0),
            y_label: AxisLabel::new("Petal Length", 25.0),
            whisker_coefficient: petal_stats::TUKEY_COEFFICIENT,
            stroke_width: 1.0,
            median_stroke_width: 2.0,
        }
    }
}

fn parse_color(name: &str, hex: &str) -> ConfigResult<Color> {
    Color::from_hex(hex).ok_or_else(|| {
        ConfigError::OutOfRange(format!("{} must be a #rrggbb color, got '{}'", name, hex))
    })
}

impl PetalConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> ConfigResult<Self> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and validate a configuration file
    ///
    /// `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json(&text)?
        } else {
            Self::parse_toml(&text)?
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    #[cfg(feature = "toml-config")]
    fn parse_toml(text: &str) -> ConfigResult<Self> {
        Self::from_toml(text)
    }

    #[cfg(not(feature = "toml-config"))]
    fn parse_toml(_text: &str) -> ConfigResult<Self> {
        Err(ConfigError::Parse(
            "TOML configuration requires the toml-config feature".to_string(),
        ))
    }

    /// Options for loading the dataset
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            fields: self.fields.clone(),
            coercion: self.coercion,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        let layout = &self.layout;
        validation::validate_dimensions(layout.width, layout.height)?;

        let m = &layout.margin;
        for (name, value) in [
            ("margin.top", m.top),
            ("margin.right", m.right),
            ("margin.bottom", m.bottom),
            ("margin.left", m.left),
        ] {
            validation::validate_non_negative(name, value)?;
        }

        // Margins must leave a non-empty plot area
        if m.left + m.right >= layout.width || m.top + m.bottom >= layout.height {
            return Err(ConfigError::InvalidDimensions {
                width: layout.width,
                height: layout.height,
            });
        }

        layout.background_color()?;

        if layout.tick_count == 0 {
            return Err(ConfigError::OutOfRange(
                "tick_count must be positive".to_string(),
            ));
        }

        let s = &self.scatterplot;
        let b = &self.boxplot;
        for (name, value) in [
            ("scatterplot.x_padding.low", s.x_padding.low),
            ("scatterplot.x_padding.high", s.x_padding.high),
            ("scatterplot.y_padding.low", s.y_padding.low),
            ("scatterplot.y_padding.high", s.y_padding.high),
            ("scatterplot.point_radius", s.point_radius),
            ("boxplot.y_padding.low", b.y_padding.low),
            ("boxplot.y_padding.high", b.y_padding.high),
            ("boxplot.stroke_width", b.stroke_width),
            ("boxplot.median_stroke_width", b.median_stroke_width),
        ] {
            validation::validate_non_negative(name, value)?;
        }

        for hex in &s.colors {
            parse_color("scatterplot.colors", hex)?;
        }

        if !(b.whisker_coefficient.is_finite() && b.whisker_coefficient > 0.0) {
            return Err(ConfigError::OutOfRange(format!(
                "whisker_coefficient must be positive, got {}",
                b.whisker_coefficient
            )));
        }

        Ok(())
    }
}
