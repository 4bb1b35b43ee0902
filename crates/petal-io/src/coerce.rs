//! Text-to-number coercion for the numeric schema columns
//!
//! Conversion follows unary-plus semantics: surrounding whitespace is
//! ignored, empty text is zero, `Infinity` is accepted, and `0x`/`0o`/`0b`
//! prefixed integers are read in their radix. Anything else is a failure,
//! handled according to [`CoercionPolicy`].

use crate::dataset::{Dataset, Record};
use crate::reader::{IoError, IoResult, RawTable};
use crate::schema::FieldNames;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do with a numeric field that does not parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoercionPolicy {
    /// Store NaN, record a warning, keep going
    #[default]
    Lenient,
    /// Abort the load on the first failure
    Strict,
}

/// A numeric field that could not be coerced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercionWarning {
    /// 1-based source line
    pub line: usize,
    /// Column name
    pub field: String,
    /// Offending text
    pub value: String,
}

impl fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: field '{}' has non-numeric value {:?}",
            self.line, self.field, self.value
        )
    }
}

/// Result of coercing a raw table
#[derive(Debug, Clone, Default)]
pub struct Coerced {
    pub dataset: Dataset,
    pub warnings: Vec<CoercionWarning>,
}

/// Parse text as a number, or `None` when it is not numeric
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let lower = s.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lower.strip_prefix(prefix) {
            // from_str_radix would also take a sign after the prefix
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
        }
    }

    // f64::from_str also takes "inf"/"nan" spellings, which are not numbers here
    if lower.contains("inf") || lower.contains("nan") {
        return None;
    }

    s.parse::<f64>().ok()
}

/// Coerce every row of `table` into a [`Record`]
pub fn coerce_table(
    table: &RawTable,
    names: &FieldNames,
    policy: CoercionPolicy,
) -> IoResult<Coerced> {
    let columns = names.resolve(table)?;
    let width = columns.required_width();

    let mut records = Vec::with_capacity(table.len());
    let mut warnings = Vec::new();

    for raw in &table.records {
        if raw.fields.len() < width {
            return Err(IoError::ShortRow {
                line: raw.line,
                expected: width,
                actual: raw.fields.len(),
            });
        }

        let mut numeric = |index: usize, field: &str| -> IoResult<f64> {
            let text = raw.get(index).unwrap_or_default();
            match parse_number(text) {
                Some(v) => Ok(v),
                None => {
                    let warning = CoercionWarning {
                        line: raw.line,
                        field: field.to_string(),
                        value: text.to_string(),
                    };
                    match policy {
                        CoercionPolicy::Strict => Err(IoError::Coercion(warning)),
                        CoercionPolicy::Lenient => {
                            tracing::warn!("{}", warning);
                            warnings.push(warning);
                            Ok(f64::NAN)
                        }
                    }
                }
            }
        };

        let petal_length = numeric(columns.petal_length, names.petal_length.as_str())?;
        let petal_width = numeric(columns.petal_width, names.petal_width.as_str())?;
        let species = raw.get(columns.species).unwrap_or_default().to_string();

        records.push(Record {
            petal_length,
            petal_width,
            species,
        });
    }

    Ok(Coerced {
        dataset: Dataset::new(records),
        warnings,
    })
}
