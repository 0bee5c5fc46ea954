//! Localized strings used when formatting locations.
//!
//! Strings are looked up by fixed keys through a [`Localizer`]. The
//! data-driven implementation is [`StringCatalog`], a flat key to string map
//! that can be loaded from JSON, so adding a locale never touches the
//! splitting logic.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::error::CatalogError;

/// Fixed catalog keys.
pub mod keys {
    /// Offset label used when a location has no `" of "` separator.
    pub const NEAR_THE: &str = "near_the";

    /// Template combining `{distance}` and `{direction}` into an offset label.
    pub const DISTANCE_DIRECTION_OF: &str = "distance_direction_of";

    /// Prefix of the per-token direction keys, e.g. `direction_NW`.
    pub const DIRECTION_PREFIX: &str = "direction_";

    /// The compass abbreviations found in feed location strings.
    pub const DIRECTION_TOKENS: [&str; 16] = [
        "N", "NE", "NW", "NNE", "NNW", "S", "SE", "SW", "SSE", "SSW", "E", "ENE", "ESE", "W",
        "WNW", "WSW",
    ];

    /// Catalog key for a direction token.
    pub fn direction(token: &str) -> String {
        format!("{DIRECTION_PREFIX}{token}")
    }
}

/// Built-in English strings. Direction tokens have no entry and pass through.
const ENGLISH: &[(&str, &str)] = &[
    (keys::NEAR_THE, "Near the"),
    (keys::DISTANCE_DIRECTION_OF, "{distance}km {direction} of "),
];

/// Returns the built-in English text for `key`.
pub fn english(key: &str) -> Option<&'static str> {
    ENGLISH
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
}

/// A provider of localized strings.
pub trait Localizer {
    /// Look up `key` for the current locale.
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Look up `key`, falling back to English and then to the key itself.
    fn text<'a>(&'a self, key: &'a str) -> &'a str {
        match self.lookup(key) {
            Some(text) => text,
            None => {
                debug!(key, "missing localized string, using fallback");
                english(key).unwrap_or(key)
            }
        }
    }
}

impl<L: Localizer + ?Sized> Localizer for &L {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}

/// A flat key to string catalog for one locale.
///
/// # Example
///
/// ```
/// use quake_core::{Localizer, StringCatalog};
///
/// let catalog = StringCatalog::from_json(r#"{"near_the": "Cerca de"}"#).unwrap();
/// assert_eq!(catalog.text("near_the"), "Cerca de");
/// // Keys missing from the catalog fall back to English.
/// assert_eq!(catalog.text("distance_direction_of"), "{distance}km {direction} of ");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringCatalog {
    entries: HashMap<String, String>,
}

impl StringCatalog {
    /// Create an empty catalog. Every lookup falls back to English.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English catalog.
    pub fn english() -> Self {
        ENGLISH.iter().copied().collect()
    }

    /// Parse a catalog from a JSON object of key to string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a flat JSON object of strings.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog = serde_json::from_str(json).map_err(|e| CatalogError::Malformed {
            reason: e.to_string(),
        })?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let catalog = Self::from_json(&json)?;
        debug!(path = %path.display(), entries = catalog.len(), "loaded string catalog");
        Ok(catalog)
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Localizer for StringCatalog {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}
