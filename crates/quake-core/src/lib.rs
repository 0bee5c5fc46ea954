//! quake-core - Earthquake list row formatting.
//!
//! Turns [`EarthquakeRecord`] values into display rows: magnitude text and
//! color bucket, split and localized location, date and time of day.
//! Hosts own the view recycling; everything here is a synchronous transform.

pub mod datetime;
pub mod error;
pub mod feed;
pub mod localize;
pub mod location;
pub mod magnitude;
pub mod presenter;
pub mod record;

pub use datetime::{DisplayConfig, TimeZoneSetting, format_date, format_time};
pub use error::Error;
pub use localize::{Localizer, StringCatalog};
pub use location::{LocationSplitter, SplitLocation};
pub use magnitude::{MagnitudeBucket, color_bucket, format_magnitude};
pub use presenter::{RenderedRow, RowPresenter};
pub use record::{EarthquakeRecord, RecordSource};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
