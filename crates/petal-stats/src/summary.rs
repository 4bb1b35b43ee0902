//! Quartile summary for one group of values
//!
//! Provides:
//! - q1, median, q3 by linear interpolation
//! - interquartile range
//! - Tukey fences for whisker extents

use crate::quantile::{quantile_sorted, sorted_finite};
use serde::{Deserialize, Serialize};

/// Conventional whisker multiplier
pub const TUKEY_COEFFICIENT: f64 = 1.5;

/// Quartiles of one group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Number of finite values summarized
    pub count: usize,
    /// First quartile (25th percentile)
    pub q1: f64,
    /// Median (50th percentile)
    pub median: f64,
    /// Third quartile (75th percentile)
    pub q3: f64,
}

/// Whisker bounds `[q1 - k*IQR, q3 + k*IQR]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fences {
    pub lower: f64,
    pub upper: f64,
}

impl GroupSummary {
    /// Summarize values in any order; `None` when no value is finite
    pub fn from_values(values: &[f64]) -> Option<Self> {
        Self::from_sorted(&sorted_finite(values))
    }

    /// Summarize already-sorted finite values
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        Some(Self {
            count: sorted.len(),
            q1: quantile_sorted(sorted, 0.25)?,
            median: quantile_sorted(sorted, 0.5)?,
            q3: quantile_sorted(sorted, 0.75)?,
        })
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Whisker bounds for a given multiplier
    ///
    /// These are line extents only; no value is classified as an outlier.
    pub fn fences(&self, coefficient: f64) -> Fences {
        let reach = coefficient * self.iqr();
        Fences {
            lower: self.q1 - reach,
            upper: self.q3 + reach,
        }
    }

    /// Fences with the conventional 1.5 multiplier
    pub fn tukey_fences(&self) -> Fences {
        self.fences(TUKEY_COEFFICIENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_one_to_ten() {
        let data: Vec<f64> = (1..=10).rev().map(|x| x as f64).collect();
        let s = GroupSummary::from_values(&data).unwrap();

        assert_eq!(s.count, 10);
        assert!((s.q1 - 3.25).abs() < 1e-10);
        assert!((s.median - 5.5).abs() < 1e-10);
        assert!((s.q3 - 7.75).abs() < 1e-10);
        assert!((s.iqr() - 4.5).abs() < 1e-10);
    }

    #[test]
    fn test_summary_single_value() {
        let s = GroupSummary::from_values(&[4.2]).unwrap();
        assert_eq!(s.q1, 4.2);
        assert_eq!(s.median, 4.2);
        assert_eq!(s.q3, 4.2);
        assert_eq!(s.count, 1);
    }

    #[test]
    fn test_summary_all_equal_collapses_fences() {
        let s = GroupSummary::from_values(&[1.5, 1.5, 1.5, 1.5]).unwrap();
        assert_eq!(s.iqr(), 0.0);

        let f = s.tukey_fences();
        assert_eq!(f.lower, 1.5);
        assert_eq!(f.upper, 1.5);
    }

    #[test]
    fn test_summary_skips_nan() {
        let s = GroupSummary::from_values(&[1.0, f64::NAN, 3.0]).unwrap();
        assert_eq!(s.count, 2);
        assert_eq!(s.median, 2.0);
    }

    #[test]
    fn test_summary_empty() {
        assert!(GroupSummary::from_values(&[]).is_none());
        assert!(GroupSummary::from_values(&[f64::NAN]).is_none());
    }

    #[test]
    fn test_fences_custom_coefficient() {
        let s = GroupSummary {
            count: 4,
            q1: 2.0,
            median: 3.0,
            q3: 4.0,
        };
        let f = s.fences(1.0);
        assert_eq!(f.lower, 0.0);
        assert_eq!(f.upper, 6.0);

        let t = s.tukey_fences();
        assert_eq!(t.lower, -1.0);
        assert_eq!(t.upper, 7.0);
    }
}
