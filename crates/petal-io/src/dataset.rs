//! Typed observation records

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One observation after coercion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub petal_length: f64,
    pub petal_width: f64,
    pub species: String,
}

impl Record {
    pub fn new(petal_length: f64, petal_width: f64, species: impl Into<String>) -> Self {
        Self {
            petal_length,
            petal_width,
            species: species.into(),
        }
    }
}

/// An ordered, immutable sequence of records
///
/// Position is the only identity a record has; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Petal length of every record, in order
    pub fn petal_lengths(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.petal_length).collect()
    }

    /// Petal width of every record, in order
    pub fn petal_widths(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.petal_width).collect()
    }

    /// Distinct species in first-occurrence order
    pub fn species(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.species.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_first_occurrence_order() {
        let ds: Dataset = vec![
            Record::new(4.7, 1.4, "versicolor"),
            Record::new(1.4, 0.2, "setosa"),
            Record::new(4.5, 1.5, "versicolor"),
            Record::new(6.0, 2.5, "virginica"),
            Record::new(1.3, 0.2, "setosa"),
        ]
        .into_iter()
        .collect();

        assert_eq!(ds.species(), vec!["versicolor", "setosa", "virginica"]);
        assert_eq!(ds.len(), 5);
    }

    #[test]
    fn test_column_extraction_keeps_order() {
        let ds = Dataset::new(vec![
            Record::new(1.0, 0.1, "a"),
            Record::new(2.0, 0.2, "a"),
        ]);
        assert_eq!(ds.petal_lengths(), vec![1.0, 2.0]);
        assert_eq!(ds.petal_widths(), vec![0.1, 0.2]);
    }

    #[test]
    fn test_empty_species_is_kept() {
        let ds = Dataset::new(vec![Record::new(1.0, 0.1, ""), Record::new(2.0, 0.2, "a")]);
        assert_eq!(ds.species(), vec!["", "a"]);
    }
}
