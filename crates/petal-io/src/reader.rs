//! Data reader trait and common types
//!
//! The `DataReader` trait provides a uniform interface for pulling raw
//! text rows out of a tabular source. Typing happens later, in
//! [`crate::coerce`].

use crate::coerce::CoercionWarning;
use thiserror::Error;

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Row {line} has {actual} fields, expected at least {expected}")]
    ShortRow {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Coercion failed: {0}")]
    Coercion(CoercionWarning),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// One untyped row as it appeared in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the source (the header is line 1)
    pub line: usize,

    /// Field values in header order
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Get a field by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|s| s.as_str())
    }
}

/// Header plus every row of a tabular source, still as text
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, records: Vec<RawRecord>) -> Self {
        Self { headers, records }
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Trait for reading raw rows from a tabular source
///
/// Implementations read the whole source in one call; the datasets this
/// crate targets are small enough that streaming buys nothing.
pub trait DataReader: Send + Sync {
    /// Read the header and all rows
    fn read_table(&self) -> IoResult<RawTable>;

    /// Get the file path (if applicable)
    fn path(&self) -> Option<&str> {
        None
    }

    /// Get the format name
    fn format_name(&self) -> &'static str;
}

/// A boxed reader for dynamic dispatch
pub type BoxedReader = Box<dyn DataReader>;

/// Open a file and return an appropriate reader
///
/// The format is auto-detected from the file extension.
pub fn open_file(path: &str) -> IoResult<BoxedReader> {
    let extension = path
        .rsplit('.')
        .next()
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        #[cfg(feature = "csv")]
        "csv" => {
            use crate::csv_reader::CsvReader;
            Ok(Box::new(CsvReader::open(path)?))
        }

        #[cfg(feature = "csv")]
        "tsv" => {
            use crate::csv_reader::CsvReader;
            Ok(Box::new(CsvReader::open_with_delimiter(path, b'\t')?))
        }

        _ => Err(IoError::InvalidFormat(format!(
            "Unknown file extension: {}",
            extension
        ))),
    }
}

/// List supported file extensions
pub fn supported_extensions() -> Vec<&'static str> {
    let mut extensions = Vec::new();

    #[cfg(feature = "csv")]
    {
        extensions.push("csv");
        extensions.push("tsv");
    }

    extensions
}
