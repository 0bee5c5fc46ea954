//! Magnitude command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use quake_core::{MagnitudeBucket, color_bucket, format_magnitude};

use crate::output;

#[derive(Args, Debug)]
pub struct MagnitudeArgs {
    /// Magnitude value
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct MagnitudeOutput {
    magnitude: String,
    bucket: MagnitudeBucket,
}

pub fn run(args: MagnitudeArgs) -> Result<()> {
    let result = MagnitudeOutput {
        magnitude: format_magnitude(args.value),
        bucket: color_bucket(args.value),
    };

    if args.json {
        return output::json(&result);
    }

    output::field("Magnitude", &result.magnitude);
    output::field("Bucket", result.bucket.palette_id());

    Ok(())
}
