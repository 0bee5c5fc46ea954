//! Magnitude text and color classification.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

/// Color bucket for a magnitude.
///
/// Buckets are opaque palette identifiers; hosts decide the actual color.
/// Magnitudes below 2 share [`MagnitudeBucket::One`], and everything outside
/// `0..10` lands in [`MagnitudeBucket::TenPlus`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum MagnitudeBucket {
    #[default]
    #[serde(rename = "magnitude1")]
    One,
    #[serde(rename = "magnitude2")]
    Two,
    #[serde(rename = "magnitude3")]
    Three,
    #[serde(rename = "magnitude4")]
    Four,
    #[serde(rename = "magnitude5")]
    Five,
    #[serde(rename = "magnitude6")]
    Six,
    #[serde(rename = "magnitude7")]
    Seven,
    #[serde(rename = "magnitude8")]
    Eight,
    #[serde(rename = "magnitude9")]
    Nine,
    #[serde(rename = "magnitude10plus")]
    TenPlus,
}

impl MagnitudeBucket {
    /// All buckets in ascending order.
    pub const ALL: [Self; 10] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::TenPlus,
    ];

    /// Classify an already-floored magnitude.
    pub const fn from_floor(floor: i64) -> Self {
        match floor {
            0 | 1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            6 => Self::Six,
            7 => Self::Seven,
            8 => Self::Eight,
            9 => Self::Nine,
            _ => Self::TenPlus,
        }
    }

    /// Numeric level, 1 through 10.
    pub const fn level(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::TenPlus => 10,
        }
    }

    /// Palette identifier, e.g. `"magnitude4"`.
    pub const fn palette_id(self) -> &'static str {
        match self {
            Self::One => "magnitude1",
            Self::Two => "magnitude2",
            Self::Three => "magnitude3",
            Self::Four => "magnitude4",
            Self::Five => "magnitude5",
            Self::Six => "magnitude6",
            Self::Seven => "magnitude7",
            Self::Eight => "magnitude8",
            Self::Nine => "magnitude9",
            Self::TenPlus => "magnitude10plus",
        }
    }
}

impl fmt::Display for MagnitudeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.palette_id())
    }
}

/// Classify a magnitude into its color bucket.
///
/// NaN floors to zero and lands in [`MagnitudeBucket::One`].
pub fn color_bucket(magnitude: f64) -> MagnitudeBucket {
    // `as` saturates out-of-range floats and maps NaN to 0.
    MagnitudeBucket::from_floor(magnitude.floor() as i64)
}

/// Format a magnitude with exactly one decimal digit.
///
/// Rounds half up on the shortest decimal representation of the value, so
/// `3.25` gives `"3.3"` and `0.15` gives `"0.2"`.
///
/// ```
/// use quake_core::format_magnitude;
///
/// assert_eq!(format_magnitude(3.25), "3.3");
/// assert_eq!(format_magnitude(2.0), "2.0");
/// assert_eq!(format_magnitude(7.849), "7.8");
/// ```
pub fn format_magnitude(magnitude: f64) -> String {
    let mut out = String::with_capacity(4);
    write_magnitude(magnitude, &mut out);
    out
}

/// Format a magnitude into `out`, replacing its contents.
pub fn write_magnitude(magnitude: f64, out: &mut String) {
    out.clear();

    if !magnitude.is_finite() {
        let _ = write!(out, "{magnitude}");
        return;
    }

    // f64 Display is the shortest round-trip form and never uses an exponent.
    let repr = magnitude.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let mut frac = frac_part.bytes().map(|b| b - b'0');
    digits.push(frac.next().unwrap_or(0));

    if frac.next().is_some_and(|d| d >= 5) {
        round_up(&mut digits);
    }

    if magnitude.is_sign_negative() && digits.iter().any(|&d| d != 0) {
        out.push('-');
    }

    let (whole, tenths) = digits.split_at(digits.len() - 1);
    out.extend(whole.iter().map(|&d| char::from(b'0' + d)));
    out.push('.');
    out.push(char::from(b'0' + tenths[0]));
}

fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_one_decimal_digit() {
        assert_eq!(format_magnitude(2.0), "2.0");
        assert_eq!(format_magnitude(7.2), "7.2");
        assert_eq!(format_magnitude(4.56), "4.6");
        assert_eq!(format_magnitude(4.54), "4.5");
        assert_eq!(format_magnitude(0.0), "0.0");
        assert_eq!(format_magnitude(12.0), "12.0");
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(format_magnitude(3.25), "3.3");
        assert_eq!(format_magnitude(0.15), "0.2");
        assert_eq!(format_magnitude(2.45), "2.5");
        assert_eq!(format_magnitude(6.05), "6.1");
    }

    #[test]
    fn carries_into_whole_part() {
        assert_eq!(format_magnitude(9.96), "10.0");
        assert_eq!(format_magnitude(0.95), "1.0");
        assert_eq!(format_magnitude(99.99), "100.0");
    }

    #[test]
    fn negative_values_keep_sign_unless_zero() {
        assert_eq!(format_magnitude(-0.56), "-0.6");
        assert_eq!(format_magnitude(-1.0), "-1.0");
        assert_eq!(format_magnitude(-0.04), "0.0");
        assert_eq!(format_magnitude(-0.0), "0.0");
    }

    #[test]
    fn tiny_values_do_not_use_exponent() {
        assert_eq!(format_magnitude(1e-7), "0.0");
        assert_eq!(format_magnitude(0.05), "0.1");
    }

    #[test]
    fn always_exactly_one_fraction_digit() {
        for i in -200..=1200_i32 {
            let m = f64::from(i) * 0.013;
            let text = format_magnitude(m);
            let (_, frac) = text.split_once('.').unwrap();
            assert_eq!(frac.len(), 1, "{m} formatted as {text}");
        }
    }

    #[test]
    fn non_finite_values_do_not_panic() {
        assert_eq!(format_magnitude(f64::NAN), "NaN");
        assert_eq!(format_magnitude(f64::INFINITY), "inf");
    }

    #[test]
    fn write_magnitude_replaces_contents() {
        let mut out = String::from("stale");
        write_magnitude(5.0, &mut out);
        assert_eq!(out, "5.0");
    }

    #[test]
    fn low_magnitudes_share_bucket_one() {
        assert_eq!(color_bucket(0.0), MagnitudeBucket::One);
        assert_eq!(color_bucket(0.9), MagnitudeBucket::One);
        assert_eq!(color_bucket(1.99), MagnitudeBucket::One);
    }

    #[test]
    fn middle_magnitudes_map_one_to_one() {
        for floor in 2..=9_i32 {
            let bucket = color_bucket(f64::from(floor) + 0.5);
            assert_eq!(bucket.level(), floor as u8);
        }
    }

    #[test]
    fn ten_plus_and_negative_share_top_bucket() {
        assert_eq!(color_bucket(10.0), MagnitudeBucket::TenPlus);
        assert_eq!(color_bucket(12.7), MagnitudeBucket::TenPlus);
        assert_eq!(color_bucket(f64::INFINITY), MagnitudeBucket::TenPlus);
        assert_eq!(color_bucket(-0.5), MagnitudeBucket::TenPlus);
        assert_eq!(color_bucket(f64::NEG_INFINITY), MagnitudeBucket::TenPlus);
    }

    #[test]
    fn nan_lands_in_bucket_one() {
        assert_eq!(color_bucket(f64::NAN), MagnitudeBucket::One);
    }

    #[test]
    fn bucket_is_monotonic_over_valid_range() {
        let mut previous = color_bucket(0.0);
        for tenth in 0..=150_i32 {
            let bucket = color_bucket(f64::from(tenth) / 10.0);
            assert!(bucket >= previous);
            previous = bucket;
        }
    }

    #[test]
    fn palette_ids_match_serde_names() {
        for bucket in MagnitudeBucket::ALL {
            let json = serde_json::to_value(bucket).unwrap();
            assert_eq!(json, bucket.palette_id());
            assert_eq!(bucket.to_string(), bucket.palette_id());
        }
    }
}
