//! Row presentation: one [`EarthquakeRecord`] in, one [`RenderedRow`] out.
//!
//! Hosts that recycle rows hand the previous row back to
//! [`RowPresenter::render`]; its string buffers are reused and every field is
//! overwritten, so nothing from the previous record survives.

use serde::Serialize;

use crate::datetime::{self, DisplayConfig};
use crate::localize::{Localizer, StringCatalog};
use crate::location::LocationSplitter;
use crate::magnitude::{self, MagnitudeBucket};
use crate::record::{EarthquakeRecord, RecordSource};

/// Display fields for one list row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    /// Magnitude with one decimal digit.
    pub magnitude: String,
    /// Color bucket for the magnitude.
    pub bucket: MagnitudeBucket,
    /// Distance and direction label, or the "near the" phrase.
    pub location_offset: String,
    /// Primary place name.
    pub primary_location: String,
    /// Calendar date.
    pub date: String,
    /// Time of day.
    pub time: String,
}

/// Formats records into rows.
///
/// # Example
///
/// ```
/// use quake_core::{EarthquakeRecord, MagnitudeBucket, RowPresenter};
///
/// let presenter = RowPresenter::default();
/// let record = EarthquakeRecord::new(7.2, "88km N of Yelizovo, Russia", 0, "");
///
/// let row = presenter.present(&record);
/// assert_eq!(row.magnitude, "7.2");
/// assert_eq!(row.bucket, MagnitudeBucket::Seven);
/// assert_eq!(row.location_offset, "88km N of ");
/// assert_eq!(row.primary_location, "Yelizovo, Russia");
/// assert_eq!(row.date, "Jan 01, 1970");
/// assert_eq!(row.time, "12:00 AM");
/// ```
#[derive(Debug, Clone)]
pub struct RowPresenter<L> {
    splitter: LocationSplitter<L>,
    config: DisplayConfig,
}

impl<L: Localizer> RowPresenter<L> {
    /// Create a presenter with the given strings and date/time settings.
    pub fn new(localizer: L, config: DisplayConfig) -> Self {
        Self {
            splitter: LocationSplitter::new(localizer),
            config,
        }
    }

    /// Returns the date/time settings.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Returns the location splitter.
    pub fn splitter(&self) -> &LocationSplitter<L> {
        &self.splitter
    }

    /// Render `record` into a new row.
    pub fn present(&self, record: &EarthquakeRecord) -> RenderedRow {
        self.render(record, None)
    }

    /// Render `record`, reusing `recycled` when the host has one.
    pub fn render(&self, record: &EarthquakeRecord, recycled: Option<RenderedRow>) -> RenderedRow {
        let mut row = recycled.unwrap_or_default();
        self.render_into(record, &mut row);
        row
    }

    /// Render `record` into `row`, overwriting every field.
    pub fn render_into(&self, record: &EarthquakeRecord, row: &mut RenderedRow) {
        magnitude::write_magnitude(record.magnitude(), &mut row.magnitude);
        row.bucket = magnitude::color_bucket(record.magnitude());
        self.splitter.split_into(
            record.location(),
            &mut row.location_offset,
            &mut row.primary_location,
        );
        datetime::write_date(record.timestamp_millis(), &self.config, &mut row.date);
        datetime::write_time(record.timestamp_millis(), &self.config, &mut row.time);
    }

    /// Render the record at `index` of `source`, or `None` past the end.
    pub fn render_at<S>(
        &self,
        source: &S,
        index: usize,
        recycled: Option<RenderedRow>,
    ) -> Option<RenderedRow>
    where
        S: RecordSource + ?Sized,
    {
        let record = source.record_at(index)?;
        Some(self.render(record, recycled))
    }
}

impl Default for RowPresenter<StringCatalog> {
    fn default() -> Self {
        Self::new(StringCatalog::english(), DisplayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimeZoneSetting;
    use crate::datetime::parse_utc_offset;
    use crate::localize::keys;

    // 1984-03-03T16:30:00Z
    const MARCH_1984: i64 = 447_179_400_000;

    fn records() -> Vec<EarthquakeRecord> {
        vec![
            EarthquakeRecord::new(7.25, "21km NW of Alaska", MARCH_1984, "https://a"),
            EarthquakeRecord::new(1.5, "Pacific-Antarctic Ridge", 0, "https://b"),
        ]
    }

    #[test]
    fn present_fills_every_field() {
        let presenter = RowPresenter::default();
        let row = presenter.present(&records()[0]);
        assert_eq!(
            row,
            RenderedRow {
                magnitude: "7.3".to_string(),
                bucket: MagnitudeBucket::Seven,
                location_offset: "21km NW of ".to_string(),
                primary_location: "Alaska".to_string(),
                date: "Mar 03, 1984".to_string(),
                time: "4:30 PM".to_string(),
            }
        );
    }

    #[test]
    fn recycled_row_has_no_residue() {
        let presenter = RowPresenter::default();
        let records = records();

        let first = presenter.render(&records[0], None);
        let second = presenter.render(&records[1], Some(first));

        assert_eq!(second, presenter.present(&records[1]));
        assert_eq!(second.magnitude, "1.5");
        assert_eq!(second.bucket, MagnitudeBucket::One);
        assert_eq!(second.location_offset, "Near the");
        assert_eq!(second.primary_location, "Pacific-Antarctic Ridge");
        assert_eq!(second.date, "Jan 01, 1970");
        assert_eq!(second.time, "12:00 AM");
    }

    #[test]
    fn render_is_idempotent_per_record() {
        let presenter = RowPresenter::default();
        let record = &records()[0];
        let once = presenter.present(record);
        let twice = presenter.render(record, Some(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn render_into_overwrites_garbage() {
        let presenter = RowPresenter::default();
        let mut row = RenderedRow {
            magnitude: "99.9".to_string(),
            bucket: MagnitudeBucket::TenPlus,
            location_offset: "x".repeat(64),
            primary_location: "y".repeat(64),
            date: "z".to_string(),
            time: "w".to_string(),
        };
        presenter.render_into(&records()[1], &mut row);
        assert_eq!(row, presenter.present(&records()[1]));
    }

    #[test]
    fn input_record_is_unchanged() {
        let presenter = RowPresenter::default();
        let record = records()[0].clone();
        let _ = presenter.present(&record);
        assert_eq!(record, records()[0]);
    }

    #[test]
    fn render_at_reads_from_source() {
        let presenter = RowPresenter::default();
        let records = records();

        let row = presenter.render_at(&records, 1, None).unwrap();
        assert_eq!(row.primary_location, "Pacific-Antarctic Ridge");
        assert!(presenter.render_at(&records, 2, Some(row)).is_none());
    }

    #[test]
    fn uses_configured_strings_and_zone() {
        let catalog: StringCatalog = [
            (keys::DISTANCE_DIRECTION_OF, "a {distance} km al {direction} de "),
            ("direction_NW", "noroeste"),
        ]
        .into_iter()
        .collect();
        let config = DisplayConfig::utc().with_time_zone(TimeZoneSetting::Fixed(
            parse_utc_offset("-08:00").unwrap(),
        ));
        let presenter = RowPresenter::new(&catalog, config);

        let row = presenter.present(&records()[0]);
        assert_eq!(row.location_offset, "a 21 km al noroeste de ");
        assert_eq!(row.date, "Mar 03, 1984");
        assert_eq!(row.time, "8:30 AM");
    }

    #[test]
    fn presenter_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RowPresenter<StringCatalog>>();
    }
}
