//! petal-stats - Descriptive statistics for chart construction
//!
//! This crate provides the small amount of statistics the charts need:
//!
//! - **Quantiles**: linear-interpolation (R-7) order statistics
//! - **Extent**: min/max over the finite values of a column
//! - **Grouped summary**: quartiles per category, in first-occurrence order
//!
//! Non-finite values (NaN from failed coercion, infinities) are excluded
//! from every statistic.

pub mod error;
pub mod extent;
pub mod grouped;
pub mod quantile;
pub mod summary;

pub use error::*;
pub use extent::*;
pub use grouped::*;
pub use quantile::*;
pub use summary::*;
