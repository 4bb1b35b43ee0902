//! petal-io - Data I/O for tabular observation data
//!
//! This crate turns a header-named, comma-separated file into a typed
//! [`Dataset`]:
//!
//! - **Reader**: the `DataReader` trait yields raw text rows
//! - **CSV**: the default reader, backed by the `csv` crate
//! - **Coercion**: converts the two numeric fields from text, with a
//!   configurable policy for values that do not parse
//!
//! # Design
//!
//! Rows are read once and coerced once. The resulting `Dataset` is
//! immutable and can be shared by reference between independent consumers.

pub mod coerce;
pub mod dataset;
pub mod loader;
pub mod reader;
pub mod schema;

#[cfg(feature = "csv")]
pub mod csv_reader;

pub use coerce::*;
pub use dataset::*;
pub use loader::*;
pub use reader::*;
pub use schema::*;
