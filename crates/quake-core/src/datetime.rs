//! Date and time-of-day formatting for epoch-millisecond timestamps.
//!
//! Locale and time zone are explicit configuration: callers pick a fixed
//! offset (UTC by default) or the runtime's local zone, and a `chrono`
//! locale for month names and the AM/PM marker.

use std::fmt::Write;

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use tracing::debug;

use crate::Result;
use crate::error::InvalidInputError;

pub use chrono::Locale;

/// Date pattern, rendered like `"Mar 03, 1984"`.
pub const DATE_PATTERN: &str = "%b %d, %Y";

/// Time pattern, rendered like `"4:30 PM"`.
pub const TIME_PATTERN: &str = "%-I:%M %p";

/// Territory picked for a bare language tag when it differs from the language code.
const DEFAULT_TERRITORIES: &[(&str, &str)] = &[
    ("en", "US"),
    ("ja", "JP"),
    ("zh", "CN"),
    ("ko", "KR"),
    ("uk", "UA"),
    ("sv", "SE"),
    ("da", "DK"),
    ("cs", "CZ"),
    ("el", "GR"),
    ("he", "IL"),
    ("hi", "IN"),
    ("ar", "SA"),
    ("ca", "ES"),
    ("nb", "NO"),
];

/// Time zone used to convert timestamps to wall-clock values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneSetting {
    /// A fixed UTC offset.
    Fixed(FixedOffset),
    /// The zone configured for the running process.
    Local,
}

impl Default for TimeZoneSetting {
    fn default() -> Self {
        Self::Fixed(utc_offset())
    }
}

/// Locale and time zone for date and time formatting.
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    /// Locale for month names and the AM/PM marker.
    pub locale: Locale,
    /// Zone used for the calendar date and wall-clock time.
    pub time_zone: TimeZoneSetting,
}

impl DisplayConfig {
    /// US English in UTC.
    pub fn utc() -> Self {
        Self {
            locale: Locale::en_US,
            time_zone: TimeZoneSetting::default(),
        }
    }

    /// Replace the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Replace the time zone.
    pub fn with_time_zone(mut self, time_zone: TimeZoneSetting) -> Self {
        self.time_zone = time_zone;
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::utc()
    }
}

/// Format the calendar date of `timestamp_millis`, e.g. `"Mar 03, 1984"`.
///
/// ```
/// use quake_core::{DisplayConfig, format_date};
///
/// assert_eq!(format_date(0, &DisplayConfig::utc()), "Jan 01, 1970");
/// ```
pub fn format_date(timestamp_millis: i64, config: &DisplayConfig) -> String {
    let mut out = String::new();
    write_date(timestamp_millis, config, &mut out);
    out
}

/// Format the wall-clock time of `timestamp_millis`, e.g. `"4:30 PM"`.
///
/// ```
/// use quake_core::{DisplayConfig, format_time};
///
/// assert_eq!(format_time(0, &DisplayConfig::utc()), "12:00 AM");
/// ```
pub fn format_time(timestamp_millis: i64, config: &DisplayConfig) -> String {
    let mut out = String::new();
    write_time(timestamp_millis, config, &mut out);
    out
}

/// Format the date into `out`, replacing its contents.
pub fn write_date(timestamp_millis: i64, config: &DisplayConfig, out: &mut String) {
    write_pattern(timestamp_millis, DATE_PATTERN, config, out);
}

/// Format the time into `out`, replacing its contents.
pub fn write_time(timestamp_millis: i64, config: &DisplayConfig, out: &mut String) {
    write_pattern(timestamp_millis, TIME_PATTERN, config, out);
}

fn write_pattern(timestamp_millis: i64, pattern: &str, config: &DisplayConfig, out: &mut String) {
    out.clear();

    let Some(instant) = DateTime::<Utc>::from_timestamp_millis(timestamp_millis) else {
        debug!(timestamp_millis, "timestamp out of calendar range");
        return;
    };

    let written = match config.time_zone {
        TimeZoneSetting::Fixed(offset) => write!(
            out,
            "{}",
            instant
                .with_timezone(&offset)
                .format_localized(pattern, config.locale)
        ),
        TimeZoneSetting::Local => write!(
            out,
            "{}",
            instant
                .with_timezone(&Local)
                .format_localized(pattern, config.locale)
        ),
    };

    if written.is_err() {
        out.clear();
        return;
    }

    // Locales without an AM/PM marker leave the pattern's separator behind.
    let len = out.trim_end().len();
    out.truncate(len);
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Parse a locale tag such as `"fr_FR"`, `"fr-FR"`, `"fr_FR.UTF-8"` or `"fr"`.
///
/// `"C"` and `"POSIX"` resolve to US English.
///
/// # Errors
///
/// Returns an error if the tag does not name a supported locale.
pub fn parse_locale(tag: &str) -> Result<Locale> {
    let base = tag.split(['.', '@']).next().unwrap_or_default();

    if base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
        return Ok(Locale::en_US);
    }

    let (language, territory) = match base.split_once(['_', '-']) {
        Some((language, territory)) => (
            language.to_ascii_lowercase(),
            territory.to_ascii_uppercase(),
        ),
        None => {
            let language = base.to_ascii_lowercase();
            let territory = DEFAULT_TERRITORIES
                .iter()
                .find(|(lang, _)| *lang == language)
                .map_or_else(
                    || language.to_ascii_uppercase(),
                    |(_, territory)| (*territory).to_string(),
                );
            (language, territory)
        }
    };

    let name = format!("{language}_{territory}");
    Locale::try_from(name.as_str()).map_err(|_| {
        InvalidInputError::Locale {
            value: tag.to_string(),
            reason: format!("'{name}' is not a known POSIX locale"),
        }
        .into()
    })
}

/// Parse a UTC offset such as `"+05:30"`, `"-0800"`, `"+9"`, `"Z"` or `"UTC"`.
///
/// # Errors
///
/// Returns an error if the offset is malformed or beyond ±23:59.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset> {
    let invalid = |reason: &str| InvalidInputError::UtcOffset {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(utc_offset());
    }

    let (sign, rest) = match trimmed.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => return Err(invalid("must start with '+' or '-'").into()),
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };

    let hours: i32 = hours.parse().map_err(|_| invalid("hours must be a number"))?;
    let minutes: i32 = minutes
        .parse()
        .map_err(|_| invalid("minutes must be a number"))?;

    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid("out of range").into());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| invalid("out of range").into())
}
