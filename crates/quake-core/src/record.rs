//! Earthquake record and the source boundary hosts read records through.

use serde::{Deserialize, Serialize};

/// A single earthquake event as supplied by the feed.
///
/// Records are plain values: equality is field equality, and nothing here
/// validates the magnitude or timestamp. Formatting falls back instead of
/// rejecting input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeRecord {
    magnitude: f64,
    location: String,
    timestamp_millis: i64,
    #[serde(default)]
    detail_url: String,
}

impl EarthquakeRecord {
    /// Create a new record.
    pub fn new(
        magnitude: f64,
        location: impl Into<String>,
        timestamp_millis: i64,
        detail_url: impl Into<String>,
    ) -> Self {
        Self {
            magnitude,
            location: location.into(),
            timestamp_millis,
            detail_url: detail_url.into(),
        }
    }

    /// Returns the magnitude.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Returns the raw location string, e.g. `"21km NW of Alaska"`.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the event time in milliseconds since the Unix epoch (UTC).
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }

    /// Returns the URL of the event's detail page.
    pub fn detail_url(&self) -> &str {
        &self.detail_url
    }
}

/// Indexed access to a backing collection of records.
pub trait RecordSource {
    /// Number of records available.
    fn record_count(&self) -> usize;

    /// Record at `index`, or `None` past the end.
    fn record_at(&self, index: usize) -> Option<&EarthquakeRecord>;

    /// Returns true if the source holds no records.
    fn is_empty_source(&self) -> bool {
        self.record_count() == 0
    }
}

impl RecordSource for [EarthquakeRecord] {
    fn record_count(&self) -> usize {
        self.len()
    }

    fn record_at(&self, index: usize) -> Option<&EarthquakeRecord> {
        self.get(index)
    }
}

impl RecordSource for Vec<EarthquakeRecord> {
    fn record_count(&self) -> usize {
        self.len()
    }

    fn record_at(&self, index: usize) -> Option<&EarthquakeRecord> {
        self.as_slice().get(index)
    }
}
