//! Linear-interpolation quantiles
//!
//! For `n` sorted values and probability `p`, the estimate sits at rank
//! `h = p * (n - 1)` and interpolates between `x[floor(h)]` and `x[ceil(h)]`.
//! This is the R-7 method (the default in R and NumPy).

use std::cmp::Ordering;

/// Sort finite values ascending, dropping NaN and infinities
pub fn sorted_finite(data: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Quantile of pre-sorted data
///
/// Returns `None` for empty input. The caller guarantees `sorted` is in
/// non-decreasing order and `p` lies in `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    match n {
        0 => None,
        1 => Some(sorted[0]),
        _ => {
            let h = p * (n - 1) as f64;
            let lo = h.floor() as usize;
            let hi = (lo + 1).min(n - 1);
            let frac = h - lo as f64;
            let a = sorted[lo];
            let b = sorted[hi];
            // Rounding in a + (b - a) * frac can overshoot b by an ulp
            Some((a + (b - a) * frac).min(b))
        }
    }
}
