use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// Vertical inset reserved above and below the series line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Padding {
    /// Absolute pixel inset.
    Pixels(f64),
    /// Inset as a percentage of the canvas height (`15.0` means 15%).
    Percent(f64),
}

impl Default for Padding {
    fn default() -> Self {
        Self::Percent(15.0)
    }
}

impl Padding {
    /// Resolves the inset to pixels for a canvas of `height` pixels.
    #[must_use]
    pub fn resolve_px(self, height: f64) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::Percent(percent) => percent / 100.0 * height,
        }
    }
}

impl FromStr for Padding {
    type Err = ChartError;

    /// Anything containing `%` is a percentage and only its leading integer is
    /// read, so `"12.5%"` becomes `Percent(12.0)`. Other text must be a number.
    fn from_str(input: &str) -> ChartResult<Self> {
        if input.contains('%') {
            return leading_integer(input)
                .map(Self::Percent)
                .ok_or_else(|| ChartError::InvalidPadding(input.to_owned()));
        }

        input
            .trim()
            .parse::<f64>()
            .map(Self::Pixels)
            .map_err(|_| ChartError::InvalidPadding(input.to_owned()))
    }
}

fn leading_integer(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<f64>().ok().map(|value| sign * value)
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}"),
            Self::Percent(percent) => write!(f, "{percent}%"),
        }
    }
}

impl Serialize for Padding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Padding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PaddingVisitor)
    }
}

struct PaddingVisitor;

impl Visitor<'_> for PaddingVisitor {
    type Value = Padding;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a pixel number or a percentage string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Padding, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Padding, E> {
        Ok(Padding::Pixels(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Padding, E> {
        Ok(Padding::Pixels(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Padding, E> {
        Ok(Padding::Pixels(value as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_reads_leading_integer_only() {
        assert_eq!("15%".parse::<Padding>().expect("padding"), Padding::Percent(15.0));
        assert_eq!("12.5%".parse::<Padding>().expect("padding"), Padding::Percent(12.0));
        assert_eq!(" -4%".parse::<Padding>().expect("padding"), Padding::Percent(-4.0));
    }

    #[test]
    fn plain_number_is_pixels() {
        assert_eq!("7.5".parse::<Padding>().expect("padding"), Padding::Pixels(7.5));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("abc".parse::<Padding>().is_err());
        assert!("%".parse::<Padding>().is_err());
    }

    #[test]
    fn resolves_against_height() {
        assert_eq!(Padding::default().resolve_px(50.0), 7.5);
        assert_eq!(Padding::Pixels(4.0).resolve_px(50.0), 4.0);
    }
}
