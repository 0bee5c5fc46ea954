//! Subcommand implementations.

mod list;
mod magnitude;
mod split;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Settings;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a feed document as a list of earthquakes
    List(list::ListArgs),

    /// Split a location string into offset and primary place
    Split(split::SplitArgs),

    /// Format a magnitude and show its color bucket
    Magnitude(magnitude::MagnitudeArgs),
}

pub fn handle(cmd: Commands, settings: &Settings) -> Result<()> {
    match cmd {
        Commands::List(args) => list::run(args, settings),
        Commands::Split(args) => split::run(args, settings),
        Commands::Magnitude(args) => magnitude::run(args),
    }
}
