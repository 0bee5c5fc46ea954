//! Splitting feed location strings into an offset label and a primary place.

use serde::Serialize;
use tracing::debug;

use crate::localize::{self, Localizer, keys};

/// Separator between the offset and the primary place, as in `"21km NW of Alaska"`.
pub const LOCATION_SEPARATOR: &str = " of ";

/// Distance unit token marking a localizable offset.
pub const DISTANCE_UNIT: &str = "km";

/// A location split for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitLocation {
    /// Leading distance and direction, e.g. `"21km NW of "`.
    pub offset: String,
    /// Trailing place name, e.g. `"Alaska"`.
    pub primary: String,
}

/// Splits raw location strings, localizing the offset label.
///
/// Splitting never fails: strings that do not match the expected shape fall
/// back to an unlocalized or "near the" label.
///
/// # Example
///
/// ```
/// use quake_core::{LocationSplitter, StringCatalog};
///
/// let splitter = LocationSplitter::new(StringCatalog::english());
///
/// let split = splitter.split("21km NW of Alaska");
/// assert_eq!(split.offset, "21km NW of ");
/// assert_eq!(split.primary, "Alaska");
///
/// let split = splitter.split("Alaska");
/// assert_eq!(split.offset, "Near the");
/// assert_eq!(split.primary, "Alaska");
/// ```
#[derive(Debug, Clone)]
pub struct LocationSplitter<L> {
    localizer: L,
}

impl<L: Localizer> LocationSplitter<L> {
    /// Create a splitter backed by `localizer`.
    pub fn new(localizer: L) -> Self {
        Self { localizer }
    }

    /// Returns the localizer.
    pub fn localizer(&self) -> &L {
        &self.localizer
    }

    /// Split `raw` into an offset label and primary place.
    pub fn split(&self, raw: &str) -> SplitLocation {
        let mut split = SplitLocation::default();
        self.split_into(raw, &mut split.offset, &mut split.primary);
        split
    }

    /// Split `raw`, overwriting the two output buffers.
    pub fn split_into(&self, raw: &str, offset: &mut String, primary: &mut String) {
        offset.clear();
        primary.clear();

        match raw.split_once(LOCATION_SEPARATOR) {
            Some((offset_text, place)) => {
                self.write_offset(offset_text, offset);
                primary.push_str(place);
            }
            None => {
                offset.push_str(self.localizer.text(keys::NEAR_THE));
                primary.push_str(raw);
            }
        }
    }

    /// Localize a compass token. Unmapped tokens are returned unchanged.
    pub fn localize_direction<'a>(&'a self, token: &'a str) -> &'a str {
        self.localizer
            .lookup(&keys::direction(token))
            .unwrap_or(token)
    }

    fn write_offset(&self, offset_text: &str, out: &mut String) {
        let parts = offset_text
            .split_once(DISTANCE_UNIT)
            .map(|(distance, direction)| (distance.trim(), direction.trim()))
            .filter(|(distance, direction)| is_distance(distance) && is_direction(direction));

        let Some((distance, direction)) = parts else {
            debug!(offset = offset_text, "offset has no distance and direction");
            return write_verbatim(offset_text, out);
        };

        let localized = self.localizer.lookup(&keys::direction(direction));
        let template = self.localizer.text(keys::DISTANCE_DIRECTION_OF);

        // Nothing to translate: keep the feed's own spacing.
        let english_template = localize::english(keys::DISTANCE_DIRECTION_OF);
        if localized.is_none() && english_template == Some(template) {
            return write_verbatim(offset_text, out);
        }

        out.push_str(
            &template
                .replace("{distance}", distance)
                .replace("{direction}", localized.unwrap_or(direction)),
        );
    }
}

fn write_verbatim(offset_text: &str, out: &mut String) {
    out.push_str(offset_text);
    out.push_str(LOCATION_SEPARATOR);
}

/// A distance is a plain number such as `21` or `2.5`.
fn is_distance(text: &str) -> bool {
    !text.is_empty() && text.parse::<f64>().is_ok_and(f64::is_finite)
}

/// A direction is a single compass word such as `NW`.
fn is_direction(text: &str) -> bool {
    !text.is_empty() && !text.contains(char::is_whitespace)
}

impl Default for LocationSplitter<crate::StringCatalog> {
    fn default() -> Self {
        Self::new(crate::StringCatalog::english())
    }
}
