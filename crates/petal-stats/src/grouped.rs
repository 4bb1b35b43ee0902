//! Per-category quartile summaries
//!
//! Items are partitioned by a string key, values are pulled out of each
//! partition, and every partition is summarized. Key order is the order in
//! which keys first appear in the input.

use crate::error::{StatsError, StatsResult};
use crate::summary::GroupSummary;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Partition items by key, keeping first-occurrence key order
///
/// Every key the selector produces forms a group, the empty string
/// included.
pub fn partition_by<'a, T, I, K>(items: I, key: K) -> Vec<(&'a str, Vec<&'a T>)>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    K: Fn(&'a T) -> &'a str,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, Vec<&'a T>)> = Vec::new();

    for item in items {
        let k = key(item);
        let slot = *index.entry(k).or_insert_with(|| {
            groups.push((k, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(item);
    }

    groups
}

/// One key and its summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedSummary {
    pub key: String,
    #[serde(flatten)]
    pub summary: GroupSummary,
}

/// Ordered mapping from category key to [`GroupSummary`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedSummary {
    groups: Vec<KeyedSummary>,
}

impl GroupedSummary {
    /// Group `items` by `key` and summarize the `value` of each group
    ///
    /// Fails with [`StatsError::EmptyGroup`] when a group has no finite
    /// values.
    pub fn compute<'a, T, I, K, V>(items: I, key: K, value: V) -> StatsResult<Self>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        K: Fn(&'a T) -> &'a str,
        V: Fn(&T) -> f64,
    {
        let groups = partition_by(items, key)
            .into_iter()
            .map(|(k, members)| {
                let values: Vec<f64> = members.iter().map(|&m| value(m)).collect();
                GroupSummary::from_values(&values)
                    .map(|summary| KeyedSummary {
                        key: k.to_string(),
                        summary,
                    })
                    .ok_or_else(|| StatsError::EmptyGroup { key: k.to_string() })
            })
            .collect::<StatsResult<Vec<_>>>()?;

        Ok(Self { groups })
    }

    /// Look up a group by key
    pub fn get(&self, key: &str) -> Option<&GroupSummary> {
        self.groups
            .iter()
            .find(|g| g.key == key)
            .map(|g| &g.summary)
    }

    /// Keys in first-occurrence order
    pub fn keys(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.key.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupSummary)> {
        self.groups.iter().map(|g| (g.key.as_str(), &g.summary))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Obs {
        kind: String,
        value: f64,
    }

    fn obs(kind: &str, value: f64) -> Obs {
        Obs {
            kind: kind.to_string(),
            value,
        }
    }

    #[test]
    fn test_partition_preserves_first_occurrence() {
        let items = vec![obs("b", 1.0), obs("a", 2.0), obs("b", 3.0), obs("c", 4.0)];
        let groups = partition_by(&items, |o| o.kind.as_str());

        let keys: Vec<&str> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[1].value, 3.0);
    }

    #[test]
    fn test_grouped_summary() {
        let mut items: Vec<Obs> = (1..=10).map(|i| obs("x", i as f64)).collect();
        items.push(obs("y", 7.0));

        let summary = GroupedSummary::compute(&items, |o| o.kind.as_str(), |o| o.value).unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.keys(), vec!["x", "y"]);

        let x = summary.get("x").unwrap();
        assert!((x.q1 - 3.25).abs() < 1e-10);
        assert!((x.median - 5.5).abs() < 1e-10);
        assert!((x.q3 - 7.75).abs() < 1e-10);

        let y = summary.get("y").unwrap();
        assert_eq!((y.q1, y.median, y.q3), (7.0, 7.0, 7.0));
        assert!(summary.get("z").is_none());
    }

    #[test]
    fn test_empty_key_is_its_own_group() {
        let items = vec![obs("", 1.0), obs("a", 2.0), obs("", 3.0)];
        let summary = GroupedSummary::compute(&items, |o| o.kind.as_str(), |o| o.value).unwrap();

        assert_eq!(summary.keys(), vec!["", "a"]);
        assert_eq!(summary.get("").unwrap().count, 2);
    }

    #[test]
    fn test_group_without_finite_values() {
        let items = vec![obs("a", 1.0), obs("b", f64::NAN)];
        let err =
            GroupedSummary::compute(&items, |o| o.kind.as_str(), |o| o.value).unwrap_err();
        assert_eq!(
            err,
            StatsError::EmptyGroup {
                key: "b".to_string()
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<Obs> = Vec::new();
        let summary = GroupedSummary::compute(&items, |o| o.kind.as_str(), |o| o.value).unwrap();
        assert!(summary.is_empty());
    }

    #[test]
    fn test_serializes_in_order() {
        let items = vec![obs("b", 1.0), obs("a", 2.0)];
        let summary = GroupedSummary::compute(&items, |o| o.kind.as_str(), |o| o.value).unwrap();
        let json = serde_json::to_string(&summary).unwrap();

        let b = json.find("\"b\"").unwrap();
        let a = json.find("\"a\"").unwrap();
        assert!(b < a);
        assert!(json.contains("\"median\""));
    }
}
