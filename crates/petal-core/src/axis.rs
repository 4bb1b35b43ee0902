//! Axis ticks and labels
//!
//! Linear axes pick "nice" steps of 1, 2 or 5 times a power of ten so that
//! roughly the requested number of ticks fall inside the domain. Band axes
//! put one tick at the middle of every band.

use crate::scale::{BandScale, LinearScale};
use serde::{Deserialize, Serialize};

/// Default number of ticks requested from a linear axis
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Axis orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisPosition {
    Left,
    Right,
    Top,
    Bottom,
}

impl AxisPosition {
    /// Check if this is a vertical axis
    pub fn is_vertical(&self) -> bool {
        matches!(self, AxisPosition::Left | AxisPosition::Right)
    }

    /// Direction ticks point away from the plot: -1 for left/top, +1 otherwise
    pub fn outward(&self) -> f64 {
        match self {
            AxisPosition::Left | AxisPosition::Top => -1.0,
            AxisPosition::Right | AxisPosition::Bottom => 1.0,
        }
    }
}

/// A tick mark on an axis
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    /// Position along the axis in pixels
    pub position: f64,

    /// Label text
    pub label: String,
}

/// Step between nice ticks covering `[start, stop]` with about `count` ticks
///
/// Returns `None` for an empty or non-finite interval.
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let span = stop - start;
    if !span.is_finite() || span <= 0.0 || count == 0 {
        return None;
    }

    let rough = span / count as f64;
    let power = rough.log10().floor();
    let magnitude = 10f64.powf(power);
    let error = rough / magnitude;

    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    Some(factor * magnitude)
}

/// Nice tick values inside `[start, stop]`
pub fn tick_values(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let Some(step) = tick_step(start, stop, count) else {
        return Vec::new();
    };

    // Fractional steps are generated as integers over a divisor so that
    // 0.1 + 0.2 style drift never leaks into the labels.
    if step < 1.0 {
        let divisor = (1.0 / step).round();
        let mut first = (start * divisor).round();
        if first / divisor < start {
            first += 1.0;
        }
        let mut last = (stop * divisor).round();
        if last / divisor > stop {
            last -= 1.0;
        }
        let n = (last - first).max(-1.0) as i64;
        (0..=n).map(|i| (first + i as f64) / divisor).collect()
    } else {
        let mut first = (start / step).round();
        if first * step < start {
            first += 1.0;
        }
        let mut last = (stop / step).round();
        if last * step > stop {
            last -= 1.0;
        }
        let n = (last - first).max(-1.0) as i64;
        (0..=n).map(|i| (first + i as f64) * step).collect()
    }
}

/// Number of decimals needed to print multiples of `step` exactly
pub fn step_precision(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.abs().log10().floor()).max(0.0) as usize
}

/// Format a tick value with the precision implied by its step
pub fn format_tick(value: f64, step: f64) -> String {
    let text = format!("{:.*}", step_precision(step), value);
    // Avoid "-0" / "-0.0" for ticks that land on zero
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

/// Ticks for a linear scale
pub fn linear_ticks(scale: &LinearScale, count: usize) -> Vec<TickMark> {
    let (d0, d1) = scale.domain();
    let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
    let step = tick_step(lo, hi, count).unwrap_or(1.0);

    tick_values(lo, hi, count)
        .into_iter()
        .map(|value| TickMark {
            position: scale.map(value),
            label: format_tick(value, step),
        })
        .collect()
}

/// Ticks for a band scale, one per category at the band center
pub fn band_ticks(scale: &BandScale) -> Vec<TickMark> {
    scale
        .domain()
        .iter()
        .filter_map(|category| {
            scale.center(category).map(|position| TickMark {
                position,
                label: category.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(0.0, 7.9, 10), Some(1.0));
        assert!((tick_step(0.0, 2.8, 10).unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(tick_step(0.0, 100.0, 10), Some(10.0));
        assert_eq!(tick_step(0.0, 100.0, 5), Some(20.0));
        assert_eq!(tick_step(1.0, 1.0, 10), None);
        assert_eq!(tick_step(0.0, f64::NAN, 10), None);
    }

    #[test]
    fn test_tick_values_integer_step() {
        assert_eq!(
            tick_values(0.0, 7.9, 10),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]
        );
    }

    #[test]
    fn test_tick_values_fractional_step_is_exact() {
        let ticks = tick_values(0.0, 2.8, 10);
        assert_eq!(ticks.len(), 15);
        assert_eq!(ticks[1], 0.2);
        assert_eq!(ticks[3], 0.6);
        assert_eq!(ticks[14], 2.8);
    }

    #[test]
    fn test_tick_values_offset_interval() {
        let ticks = tick_values(0.05, 1.05, 5);
        assert_eq!(ticks, vec![0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(3.0, 1.0), "3");
        assert_eq!(format_tick(0.6, 0.2), "0.6");
        assert_eq!(format_tick(2.0, 0.2), "2.0");
        assert_eq!(format_tick(-0.0, 0.5), "0.0");
        assert_eq!(format_tick(0.05, 0.05), "0.05");
    }

    #[test]
    fn test_linear_ticks_positions() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        let ticks = linear_ticks(&scale, 5);

        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0].label, "0");
        assert_eq!(ticks[5].label, "10");
        assert!((ticks[1].position - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_band_ticks() {
        let scale = BandScale::from_categories(["a", "b"], (0.0, 100.0), "k").unwrap();
        let ticks = band_ticks(&scale);

        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[0].label, "a");
        assert!((ticks[0].position - 25.0).abs() < 1e-9);
        assert!((ticks[1].position - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_position() {
        assert!(AxisPosition::Left.is_vertical());
        assert!(!AxisPosition::Bottom.is_vertical());
        assert_eq!(AxisPosition::Left.outward(), -1.0);
        assert_eq!(AxisPosition::Bottom.outward(), 1.0);
    }
}
