//! One-shot load: read, coerce, report

use crate::coerce::{coerce_table, Coerced, CoercionPolicy};
use crate::reader::{open_file, DataReader, IoResult};
use crate::schema::FieldNames;

/// Load options
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub fields: FieldNames,
    pub coercion: CoercionPolicy,
}

/// Open `path` by extension and load it as a [`crate::Dataset`]
pub fn load_dataset(path: &str, options: &LoadOptions) -> IoResult<Coerced> {
    let reader = open_file(path)?;
    load_from_reader(reader.as_ref(), options)
}

/// Load from an already-constructed reader
pub fn load_from_reader(reader: &dyn DataReader, options: &LoadOptions) -> IoResult<Coerced> {
    let table = reader.read_table()?;
    tracing::debug!(
        format = reader.format_name(),
        path = reader.path().unwrap_or("<memory>"),
        rows = table.len(),
        "read raw table"
    );

    let coerced = coerce_table(&table, &options.fields, options.coercion)?;
    tracing::info!(
        "Loaded {} records ({} coercion warnings)",
        coerced.dataset.len(),
        coerced.warnings.len()
    );

    Ok(coerced)
}
