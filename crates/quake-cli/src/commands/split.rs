//! Split command implementation.

use anyhow::Result;
use clap::Args;

use quake_core::LocationSplitter;

use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Location string, e.g. "21km NW of Alaska"
    pub location: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SplitArgs, settings: &Settings) -> Result<()> {
    let splitter = LocationSplitter::new(&settings.catalog);
    let split = splitter.split(&args.location);

    if args.json {
        return output::json(&split);
    }

    output::field("Offset", &split.offset);
    output::field("Place", &split.primary);

    Ok(())
}
