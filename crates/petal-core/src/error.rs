//! Error types for petal-core
//!
//! Provides error handling for:
//! - Dataset loading (wrapped from petal-io)
//! - Statistics (wrapped from petal-stats)
//! - Scale construction and rendering
//! - Export and configuration

use petal_io::IoError;
use petal_stats::StatsError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for petal operations
#[derive(Error, Debug)]
pub enum PetalError {
    /// Dataset loading errors
    #[error("Failed to load dataset: {0}")]
    DatasetLoad(#[from] IoError),

    /// Statistics errors
    #[error("Statistics failed: {0}")]
    Stats(#[from] StatsError),

    /// Rendering errors
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    /// Export errors
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to scales and drawing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// No finite values to derive a numeric domain from
    #[error("Cannot build a scale for '{field}': dataset has no finite values")]
    EmptyDataset { field: String },

    /// No categories to derive a categorical domain from
    #[error("Cannot build a categorical scale for '{field}': no categories")]
    EmptyDomain { field: String },

    /// A palette with no colors
    #[error("Palette '{name}' has no colors")]
    EmptyPalette { name: String },

    /// Unknown palette name
    #[error("Unknown palette: {name}")]
    UnknownPalette { name: String },
}

/// Errors related to export
#[derive(Error, Debug)]
pub enum ExportError {
    /// Output could not be written
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory could not be created
    #[error("Cannot create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Nothing to export
    #[error("No chart rendered successfully")]
    NothingRendered,
}

/// Errors related to configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Configuration text did not parse
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration file could not be read
    #[error("Cannot read {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// Surface dimensions are unusable
    #[error("Invalid dimensions: {width}x{height} (must be positive and leave room inside the margins)")]
    InvalidDimensions { width: f64, height: f64 },

    /// A value is out of its valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

/// Result type alias for petal operations
pub type PetalResult<T> = Result<T, PetalError>;

/// Result type alias for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Validation utilities
pub mod validation {
    use super::*;

    /// Validate surface dimensions
    pub fn validate_dimensions(width: f64, height: f64) -> ConfigResult<()> {
        const MAX_DIMENSION: f64 = 16384.0;

        let ok = |v: f64| v.is_finite() && v > 0.0 && v <= MAX_DIMENSION;
        if !ok(width) || !ok(height) {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    /// Validate that a value is finite and not negative
    pub fn validate_non_negative(name: &str, value: f64) -> ConfigResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::OutOfRange(format!(
                "{} must be a non-negative number, got {}",
                name, value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_petal_error_from_io() {
        let err: PetalError = IoError::FileNotFound("iris.csv".to_string()).into();
        assert!(matches!(err, PetalError::DatasetLoad(_)));
        assert!(err.to_string().contains("iris.csv"));
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError::EmptyDataset {
            field: "PetalLength".to_string(),
        };
        assert!(err.to_string().contains("PetalLength"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidDimensions {
            width: 0.0,
            height: 400.0,
        };
        assert!(err.to_string().contains("0x400"));
    }

    #[test]
    fn test_validate_dimensions() {
        assert!(validation::validate_dimensions(600.0, 400.0).is_ok());
        assert!(validation::validate_dimensions(0.0, 400.0).is_err());
        assert!(validation::validate_dimensions(600.0, f64::NAN).is_err());
        assert!(validation::validate_dimensions(20000.0, 400.0).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validation::validate_non_negative("pad", 0.0).is_ok());
        assert!(validation::validate_non_negative("pad", 0.3).is_ok());
        assert!(validation::validate_non_negative("pad", -1.0).is_err());
    }
}
