//! Column naming for the observation schema

use crate::reader::{IoError, IoResult, RawTable};
use serde::{Deserialize, Serialize};

/// Names of the source columns that feed a [`crate::Record`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    /// Numeric column plotted on the scatterplot x axis and summarized per group
    pub petal_length: String,

    /// Numeric column plotted on the scatterplot y axis
    pub petal_width: String,

    /// Categorical grouping column
    pub species: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            petal_length: "PetalLength".to_string(),
            petal_width: "PetalWidth".to_string(),
            species: "Species".to_string(),
        }
    }
}

impl FieldNames {
    /// Resolve the configured names against a table header
    pub fn resolve(&self, table: &RawTable) -> IoResult<ColumnIndices> {
        let find = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))
        };

        Ok(ColumnIndices {
            petal_length: find(&self.petal_length)?,
            petal_width: find(&self.petal_width)?,
            species: find(&self.species)?,
        })
    }
}

/// Header positions of the three schema columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub petal_length: usize,
    pub petal_width: usize,
    pub species: usize,
}

impl ColumnIndices {
    /// Minimum number of fields a row needs to cover every column
    pub fn required_width(&self) -> usize {
        self.petal_length.max(self.petal_width).max(self.species) + 1
    }
}
