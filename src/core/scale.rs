use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::core::padding::Padding;

/// Rounds half-way cases toward positive infinity (`-2.5` becomes `-2`).
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Largest sample; `NaN` if any sample is `NaN`, `-inf` for an empty series.
#[must_use]
pub fn series_max(values: &[f64]) -> f64 {
    values.iter().fold(f64::NEG_INFINITY, |acc, &value| {
        if acc.is_nan() || value.is_nan() {
            f64::NAN
        } else if value > acc {
            value
        } else {
            acc
        }
    })
}

/// Smallest sample; `NaN` if any sample is `NaN`, `+inf` for an empty series.
#[must_use]
pub fn series_min(values: &[f64]) -> f64 {
    values.iter().fold(f64::INFINITY, |acc, &value| {
        if acc.is_nan() || value.is_nan() {
            f64::NAN
        } else if value < acc {
            value
        } else {
            acc
        }
    })
}

/// Vertical value-to-pixel mapping for one render pass.
///
/// The mapping divides by the raw series range and adds `min` back as a pixel
/// offset instead of subtracting it first:
///
/// `y = height - (round(v / (max - min) * (height - 2p)) + 2p) + min`
///
/// This is not a min-max normalization. A flat series divides by zero and
/// yields non-finite coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    min: f64,
    max: f64,
    height: f64,
    padding_px: f64,
}

impl ValueScale {
    #[must_use]
    pub fn new(min: f64, max: f64, height: f64, padding_px: f64) -> Self {
        Self {
            min,
            max,
            height,
            padding_px,
        }
    }

    #[must_use]
    pub fn from_series(values: &[f64], viewport: Viewport, padding: Padding) -> Self {
        Self::new(
            series_min(values),
            series_max(values),
            viewport.height,
            padding.resolve_px(viewport.height),
        )
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn padding_px(self) -> f64 {
        self.padding_px
    }

    /// `true` when the range is zero or not finite and every mapped value will
    /// be non-finite.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        let range = self.max - self.min;
        !range.is_finite() || range == 0.0
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        let inset = self.padding_px * 2.0;
        let scaled = round_half_up(value / (self.max - self.min) * (self.height - inset));
        self.height - (scaled + inset) + self.min
    }
}

#[cfg(test)]
mod tests {
    use super::{ValueScale, round_half_up, series_max, series_min};

    #[test]
    fn half_way_rounds_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert!(round_half_up(f64::NAN).is_nan());
        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn extremes_propagate_nan_and_handle_empty() {
        assert!(series_max(&[1.0, f64::NAN, 3.0]).is_nan());
        assert!(series_min(&[1.0, f64::NAN, 3.0]).is_nan());
        assert_eq!(series_max(&[]), f64::NEG_INFINITY);
        assert_eq!(series_min(&[]), f64::INFINITY);
        assert_eq!(series_max(&[-1.0, 4.0, 2.0]), 4.0);
        assert_eq!(series_min(&[-1.0, 4.0, 2.0]), -1.0);
    }

    #[test]
    fn mapping_adds_min_as_offset() {
        let scale = ValueScale::new(10.0, 20.0, 50.0, 5.0);
        // round(10 / 10 * 40) = 40 -> 50 - (40 + 10) + 10
        assert_eq!(scale.value_to_pixel(10.0), 10.0);
        assert!(!scale.is_degenerate());
    }

    #[test]
    fn flat_range_is_degenerate() {
        let scale = ValueScale::new(5.0, 5.0, 50.0, 7.5);
        assert!(scale.is_degenerate());
        assert!(!scale.value_to_pixel(5.0).is_finite());
    }
}
