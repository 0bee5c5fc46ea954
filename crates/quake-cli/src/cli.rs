//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::commands::Commands;

/// Earthquake list formatter.
#[derive(Parser, Debug)]
#[command(name = "quakes")]
#[command(author, version = env!("QUAKES_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub display: DisplayArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Locale, time zone and string settings shared by all commands.
#[derive(Args, Debug, Default)]
pub struct DisplayArgs {
    /// Locale tag, e.g. fr_FR (defaults to LC_ALL, then LANG, then en_US)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Fixed UTC offset for dates and times, e.g. +05:30 (defaults to UTC)
    #[arg(long, global = true, allow_hyphen_values = true, conflicts_with = "local_time")]
    pub utc_offset: Option<String>,

    /// Use the system time zone for dates and times
    #[arg(long, global = true)]
    pub local_time: bool,

    /// JSON string catalog for location labels
    #[arg(long, global = true)]
    pub strings: Option<PathBuf>,
}
