use std::path::Path;
use std::process::{Command, Output};

/// USGS GeoJSON fixture with two complete features and one without a magnitude.
pub const FEED: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "id": "us20004vvx",
            "properties": {
                "mag": 7.2,
                "place": "88km N of Yelizovo, Russia",
                "time": 1454124312220,
                "url": "https://earthquake.usgs.gov/earthquakes/eventpage/us20004vvx"
            }
        },
        {
            "type": "Feature",
            "id": "us20004v1x",
            "properties": {"mag": null, "place": "Pacific-Antarctic Ridge", "time": 1453777820750}
        },
        {
            "type": "Feature",
            "id": "us20004uks",
            "properties": {"mag": 1.4, "place": "Pacific-Antarctic Ridge", "time": 0}
        }
    ]
}"#;

/// Spanish string catalog fixture.
pub const SPANISH: &str = r#"{
    "near_the": "Cerca de",
    "distance_direction_of": "a {distance} km al {direction} de ",
    "direction_NW": "noroeste",
    "direction_N": "norte"
}"#;

/// Run the CLI binary with an isolated HOME and config directory.
pub fn run_cli(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quakes"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.env("LANG", "C");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("LC_ALL");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub fn run_cli_failure(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
