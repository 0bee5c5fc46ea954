//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use quake_core::{MagnitudeBucket, RenderedRow};

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print one list row: magnitude badge, location, date and time.
pub fn row(row: &RenderedRow) {
    let (r, g, b) = palette(row.bucket);
    println!(
        "{} {}{}  {} {}",
        format!(" {} ", row.magnitude)
            .bold()
            .white()
            .on_truecolor(r, g, b),
        row.location_offset.dimmed(),
        row.primary_location,
        row.date.dimmed(),
        row.time.dimmed(),
    );
}

/// Badge color for a magnitude bucket.
pub fn palette(bucket: MagnitudeBucket) -> (u8, u8, u8) {
    match bucket {
        MagnitudeBucket::One => (0x4A, 0x7B, 0xA7),
        MagnitudeBucket::Two => (0x04, 0xB4, 0xB3),
        MagnitudeBucket::Three => (0x10, 0xCA, 0xC9),
        MagnitudeBucket::Four => (0xF5, 0xA6, 0x23),
        MagnitudeBucket::Five => (0xFF, 0x7D, 0x50),
        MagnitudeBucket::Six => (0xFC, 0x66, 0x44),
        MagnitudeBucket::Seven => (0xE7, 0x5F, 0x40),
        MagnitudeBucket::Eight => (0xE1, 0x3A, 0x20),
        MagnitudeBucket::Nine => (0xD9, 0x32, 0x18),
        MagnitudeBucket::TenPlus => (0xC0, 0x38, 0x23),
    }
}
