//! CSV file reader

use crate::reader::{DataReader, IoError, IoResult, RawRecord, RawTable};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// CSV file reader
pub struct CsvReader {
    path: String,
    delimiter: u8,
}

impl CsvReader {
    /// Open a comma-separated file
    pub fn open(path: &str) -> IoResult<Self> {
        Self::open_with_delimiter(path, b',')
    }

    /// Open a delimited file with a custom delimiter
    pub fn open_with_delimiter(path: &str, delimiter: u8) -> IoResult<Self> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }

        Ok(Self {
            path: path.to_string(),
            delimiter,
        })
    }

    fn open_source(&self) -> IoResult<BufReader<File>> {
        let file = File::open(&self.path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        Ok(BufReader::new(file))
    }
}

impl DataReader for CsvReader {
    fn read_table(&self) -> IoResult<RawTable> {
        read_delimited(self.open_source()?, self.delimiter)
    }

    fn path(&self) -> Option<&str> {
        Some(&self.path)
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

/// Read a header-named delimited source into a [`RawTable`]
///
/// Rows may be ragged; column presence is checked when records are
/// coerced, so a short row is reported with its line number there.
pub fn read_delimited<R: Read>(source: R, delimiter: u8) -> IoResult<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?
        .iter()
        .map(|s| s.trim().to_string())
        .collect::<Vec<_>>();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(IoError::InvalidFormat("missing header row".to_string()));
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
        // Blank trailing lines come through as a single empty field
        if record.len() == 1 && record.get(0).is_some_and(|s| s.trim().is_empty()) {
            continue;
        }
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(records.len() + 2);
        records.push(RawRecord::new(
            line,
            record.iter().map(|s| s.to_string()).collect(),
        ));
    }

    Ok(RawTable::new(headers, records))
}
