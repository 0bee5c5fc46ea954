//! List command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use tracing::info;

use quake_core::RowPresenter;
use quake_core::feed::FeedFormat;

use crate::adapter::RowAdapter;
use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Feed document to read
    pub file: PathBuf,

    /// Shape of the feed document
    #[arg(long, value_enum, default_value_t = FeedKind::Geojson)]
    pub format: FeedKind,

    /// Print rows as JSON lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FeedKind {
    /// USGS GeoJSON summary feed
    Geojson,
    /// JSON array of records
    Records,
}

impl From<FeedKind> for FeedFormat {
    fn from(kind: FeedKind) -> Self {
        match kind {
            FeedKind::Geojson => FeedFormat::GeoJson,
            FeedKind::Records => FeedFormat::Records,
        }
    }
}

pub fn run(args: ListArgs, settings: &Settings) -> Result<()> {
    let json = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let records = FeedFormat::from(args.format)
        .parse(&json)
        .context("Failed to parse feed")?;

    info!(count = records.len(), file = %args.file.display(), "loaded feed");

    if records.is_empty() {
        eprintln!("{}", "No earthquakes found.".dimmed());
        return Ok(());
    }

    let presenter = RowPresenter::new(&settings.catalog, settings.display);
    let mut adapter = RowAdapter::new(&records, presenter);

    for index in 0..adapter.count() {
        let Some(row) = adapter.bind(index) else {
            break;
        };
        if args.json {
            output::json(row)?;
        } else {
            output::row(row);
        }
    }

    Ok(())
}
