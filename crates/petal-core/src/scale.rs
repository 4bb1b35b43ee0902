//! Domain-to-pixel scales
//!
//! Three kinds of scale cover both charts:
//! - [`LinearScale`]: affine map from a padded numeric extent to pixels
//! - [`BandScale`]: categories split a pixel interval into equal bands
//! - [`OrdinalScale`]: categories map to palette colors
//!
//! Scales are built once per chart and never change afterwards.

use crate::colormap::{Color, Palette};
use crate::error::{RenderError, RenderResult};
use petal_stats::Extent;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Additive padding applied to a numeric extent: `[min - low, max + high]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub low: f64,
    pub high: f64,
}

impl Padding {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Affine mapping from `domain` to `range`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Build from data values: the domain is their padded finite extent
    ///
    /// `field` names the column in the error when no finite value exists.
    pub fn from_values(
        values: impl IntoIterator<Item = f64>,
        padding: Padding,
        range: (f64, f64),
        field: &str,
    ) -> RenderResult<Self> {
        let extent = Extent::of(values).ok_or_else(|| RenderError::EmptyDataset {
            field: field.to_string(),
        })?;
        let padded = extent.padded(padding.low, padding.high);
        Ok(Self::new((padded.min, padded.max), range))
    }

    /// Map a domain value to the range
    ///
    /// A zero-width domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Distinct values in first-occurrence order
pub fn distinct_in_order<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for v in values {
        let v = v.as_ref();
        if seen.insert(v.to_string()) {
            out.push(v.to_string());
        }
    }
    out
}

/// Categorical scale dividing a pixel interval into equal contiguous bands
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
}

impl BandScale {
    /// Build from category values; duplicates collapse to first occurrence
    pub fn from_categories<I, S>(categories: I, range: (f64, f64), field: &str) -> RenderResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domain = distinct_in_order(categories);
        if domain.is_empty() {
            return Err(RenderError::EmptyDomain {
                field: field.to_string(),
            });
        }
        Ok(Self { domain, range })
    }

    /// Width of each band
    pub fn bandwidth(&self) -> f64 {
        (self.range.1 - self.range.0) / self.domain.len() as f64
    }

    /// Start of the band for `category`
    pub fn position(&self, category: &str) -> Option<f64> {
        let index = self.domain.iter().position(|c| c == category)?;
        Some(self.range.0 + self.bandwidth() * index as f64)
    }

    /// Middle of the band for `category`
    pub fn center(&self, category: &str) -> Option<f64> {
        self.position(category).map(|x| x + self.bandwidth() / 2.0)
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Categorical scale assigning palette colors by domain index
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalScale {
    domain: Vec<String>,
    palette: Palette,
}

impl OrdinalScale {
    pub fn from_categories<I, S>(categories: I, palette: Palette, field: &str) -> RenderResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domain = distinct_in_order(categories);
        if domain.is_empty() {
            return Err(RenderError::EmptyDomain {
                field: field.to_string(),
            });
        }
        Ok(Self { domain, palette })
    }

    /// Color for `category`, or `None` when it is not in the domain
    pub fn color(&self, category: &str) -> Option<Color> {
        self.domain
            .iter()
            .position(|c| c == category)
            .map(|i| self.palette.color(i))
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::category10;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_linear_scale_padding_applied_before_mapping() {
        let scale =
            LinearScale::from_values(vec![1.0, 6.9], Padding::new(1.0, 1.0), (50.0, 570.0), "x")
                .unwrap();

        let (d0, d1) = scale.domain();
        assert!(close(d0, 0.0));
        assert!(close(d1, 7.9));

        let expected = 50.0 + (1.0 - 0.0) / 7.9 * (570.0 - 50.0);
        assert!(close(scale.map(1.0), expected));
        assert!(scale.map(1.0) > 50.0);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        let scale = LinearScale::new((0.0, 10.0), (350.0, 30.0));
        assert!(close(scale.map(0.0), 350.0));
        assert!(close(scale.map(10.0), 30.0));
        assert!(close(scale.map(5.0), 190.0));
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        let scale = LinearScale::new((2.0, 2.0), (0.0, 100.0));
        assert!(close(scale.map(2.0), 50.0));
    }

    #[test]
    fn test_linear_scale_ignores_nan_and_rejects_empty() {
        let scale =
            LinearScale::from_values(vec![f64::NAN, 2.0, 4.0], Padding::new(0.0, 0.0), (0.0, 1.0), "x")
                .unwrap();
        assert_eq!(scale.domain(), (2.0, 4.0));

        let err = LinearScale::from_values(Vec::new(), Padding::new(0.0, 0.0), (0.0, 1.0), "PetalWidth")
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::EmptyDataset {
                field: "PetalWidth".to_string()
            }
        );
    }

    #[test]
    fn test_band_scale() {
        let scale = BandScale::from_categories(
            ["setosa", "versicolor", "setosa", "virginica"],
            (50.0, 570.0),
            "Species",
        )
        .unwrap();

        assert_eq!(scale.domain(), &["setosa", "versicolor", "virginica"]);
        assert!(close(scale.bandwidth(), 520.0 / 3.0));
        assert!(close(scale.position("setosa").unwrap(), 50.0));
        assert!(close(scale.position("virginica").unwrap(), 50.0 + 2.0 * 520.0 / 3.0));
        assert!(close(scale.center("setosa").unwrap(), 50.0 + 260.0 / 3.0));
        assert!(scale.position("unknown").is_none());
    }

    #[test]
    fn test_band_scale_empty() {
        let err = BandScale::from_categories(Vec::<String>::new(), (0.0, 1.0), "Species").unwrap_err();
        assert!(matches!(err, RenderError::EmptyDomain { .. }));
    }

    #[test]
    fn test_ordinal_scale_wraps_palette() {
        let categories: Vec<String> = (0..12).map(|i| format!("c{i}")).collect();
        let scale = OrdinalScale::from_categories(&categories, category10(), "k").unwrap();

        assert_eq!(scale.color("c0").unwrap().to_hex(), "#1f77b4");
        assert_eq!(scale.color("c1").unwrap().to_hex(), "#ff7f0e");
        assert_eq!(scale.color("c10"), scale.color("c0"));
        assert!(scale.color("nope").is_none());
    }

    #[test]
    fn test_distinct_in_order() {
        assert_eq!(
            distinct_in_order(["b", "a", "b", "", "a"]),
            vec!["b".to_string(), "a".to_string(), "".to_string()]
        );
    }
}
