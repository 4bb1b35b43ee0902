//! Min/max extent of a numeric column

use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` covering the finite values of a column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Compute the extent, ignoring non-finite values
    ///
    /// Returns `None` when no finite value exists.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Self::new(v, v)),
                Some(e) => Some(Self::new(e.min.min(v), e.max.max(v))),
            })
    }

    /// Widen the interval: `[min - low, max + high]`
    pub fn padded(&self, low: f64, high: f64) -> Self {
        Self::new(self.min - low, self.max + high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_basic() {
        let e = Extent::of(vec![1.4, 6.9, 1.0, 4.5]).unwrap();
        assert_eq!(e, Extent::new(1.0, 6.9));
    }

    #[test]
    fn test_extent_ignores_nan() {
        let e = Extent::of(vec![f64::NAN, 2.0, f64::NAN]).unwrap();
        assert_eq!(e, Extent::new(2.0, 2.0));
    }

    #[test]
    fn test_extent_empty() {
        assert_eq!(Extent::of(Vec::<f64>::new()), None);
        assert_eq!(Extent::of(vec![f64::NAN, f64::INFINITY]), None);
    }

    #[test]
    fn test_padded() {
        let e = Extent::new(1.0, 6.9).padded(1.0, 1.0);
        assert!((e.min - 0.0).abs() < 1e-12);
        assert!((e.max - 7.9).abs() < 1e-12);
    }
}
