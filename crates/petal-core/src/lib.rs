//! petal-core - Chart engine for grouped observation data
//!
//! This crate turns a [`petal_io::Dataset`] into two static charts:
//!
//! - **Scatterplot**: one point per record, colored by category, with legend
//! - **Boxplot**: quartile box, median line and Tukey whiskers per category
//!
//! # Key Components
//!
//! - **Scales**: linear, band and ordinal-color mappings from data to pixels
//! - **Axes**: nice tick selection and labelling
//! - **Canvas**: the drawing capability charts render into; [`svg::SvgCanvas`]
//!   is the bundled backend
//! - **Pipeline**: load once, render each chart independently
//! - **Export**: HTML page with one mount point per chart

pub mod axis;
pub mod canvas;
pub mod chart;
pub mod colormap;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod scale;
pub mod svg;

pub use axis::*;
pub use canvas::*;
pub use chart::{render_boxplot, render_scatterplot, BoxplotModel, ChartKind, ScatterplotScales};
pub use colormap::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use pipeline::*;
pub use scale::*;
pub use svg::SvgCanvas;
