//! Feed document parsing.
//!
//! Two input shapes are understood: the USGS GeoJSON summary feed, which is
//! what the earthquake service publishes, and a plain JSON array of
//! [`EarthquakeRecord`] values.

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::Result;
use crate::error::FeedError;
use crate::record::EarthquakeRecord;

/// Shape of a feed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedFormat {
    /// USGS GeoJSON `FeatureCollection`.
    #[default]
    GeoJson,
    /// JSON array of records.
    Records,
}

impl FeedFormat {
    /// Parse `json` in this format.
    pub fn parse(self, json: &str) -> Result<Vec<EarthquakeRecord>> {
        match self {
            Self::GeoJson => parse_feed(json),
            Self::Records => parse_records(json),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    id: Option<String>,
    properties: Option<Properties>,
}

#[derive(Debug, Deserialize)]
struct Properties {
    mag: Option<f64>,
    place: Option<String>,
    time: Option<i64>,
    url: Option<String>,
}

/// Parse a USGS GeoJSON feed into records.
///
/// Features without a magnitude, place or time are skipped.
///
/// # Errors
///
/// Returns an error if the document is not JSON or has no `features` array.
#[instrument(skip(json), fields(bytes = json.len()))]
pub fn parse_feed(json: &str) -> Result<Vec<EarthquakeRecord>> {
    let collection: FeatureCollection = serde_json::from_str(json).map_err(malformed)?;
    let total = collection.features.len();

    let records: Vec<EarthquakeRecord> = collection
        .features
        .into_iter()
        .filter_map(|feature| {
            let Some(Properties {
                mag: Some(magnitude),
                place: Some(place),
                time: Some(time),
                url,
            }) = feature.properties
            else {
                debug!(id = ?feature.id, "skipping incomplete feature");
                return None;
            };
            Some(EarthquakeRecord::new(
                magnitude,
                place,
                time,
                url.unwrap_or_default(),
            ))
        })
        .collect();

    debug!(total, kept = records.len(), "parsed feed");
    Ok(records)
}

/// Parse a JSON array of records.
///
/// # Errors
///
/// Returns an error if the document is not a JSON array of records.
#[instrument(skip(json), fields(bytes = json.len()))]
pub fn parse_records(json: &str) -> Result<Vec<EarthquakeRecord>> {
    let records: Vec<EarthquakeRecord> = serde_json::from_str(json).map_err(malformed)?;
    debug!(count = records.len(), "parsed records");
    Ok(records)
}

fn malformed(err: serde_json::Error) -> FeedError {
    FeedError::Malformed {
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"{
        "type": "FeatureCollection",
        "metadata": {"title": "USGS Significant Earthquakes, Past Month", "count": 3},
        "features": [
            {
                "type": "Feature",
                "id": "us20004vvx",
                "properties": {
                    "mag": 7.2,
                    "place": "88km N of Yelizovo, Russia",
                    "time": 1454124312220,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/us20004vvx"
                },
                "geometry": {"type": "Point", "coordinates": [158.5463, 53.9776, 177]}
            },
            {
                "type": "Feature",
                "id": "us20004v1x",
                "properties": {"mag": null, "place": "Pacific-Antarctic Ridge", "time": 1453777820750}
            },
            {
                "type": "Feature",
                "id": "us20004uks",
                "properties": {"mag": 6.1, "place": "94km SSE of Taron, Papua New Guinea", "time": 1453631430230}
            }
        ]
    }"#;

    #[test]
    fn parses_usgs_features() {
        let records = parse_feed(FEED).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].magnitude(), 7.2);
        assert_eq!(records[0].location(), "88km N of Yelizovo, Russia");
        assert_eq!(records[0].timestamp_millis(), 1_454_124_312_220);
        assert!(records[0].detail_url().ends_with("us20004vvx"));

        assert_eq!(records[1].location(), "94km SSE of Taron, Papua New Guinea");
        assert_eq!(records[1].detail_url(), "");
    }

    #[test]
    fn empty_feature_list_is_ok() {
        let records = parse_feed(r#"{"features": []}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn feature_without_properties_is_skipped() {
        let records = parse_feed(r#"{"features": [{"id": "x"}]}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_features_is_an_error() {
        let err = parse_feed(r#"{"type": "FeatureCollection"}"#).unwrap_err();
        assert!(err.to_string().contains("malformed feed"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_feed("not json").is_err());
        assert!(parse_records("{").is_err());
    }

    #[test]
    fn parses_record_arrays() {
        let json = r#"[
            {"magnitude": 4.5, "location": "Alaska", "timestamp_millis": 0, "detail_url": ""},
            {"magnitude": 2.1, "location": "5km WSW of Cobb, CA", "timestamp_millis": 1000}
        ]"#;
        let records = FeedFormat::Records.parse(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].location(), "5km WSW of Cobb, CA");
    }

    #[test]
    fn default_format_is_geojson() {
        assert_eq!(FeedFormat::default(), FeedFormat::GeoJson);
        assert_eq!(FeedFormat::default().parse(FEED).unwrap().len(), 2);
    }
}
