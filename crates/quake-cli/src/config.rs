//! Resolution of display settings from flags, environment and config files.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::{debug, info, warn};

use quake_core::datetime::{Locale, parse_locale, parse_utc_offset};
use quake_core::{DisplayConfig, StringCatalog, TimeZoneSetting};

use crate::cli::DisplayArgs;

/// Locale used when neither flags nor environment name one.
const DEFAULT_LOCALE: &str = "en_US";

/// Settings every command formats with.
#[derive(Debug)]
pub struct Settings {
    pub display: DisplayConfig,
    pub catalog: StringCatalog,
}

/// Resolve settings from command line arguments.
pub fn resolve(args: &DisplayArgs) -> Result<Settings> {
    let (tag, locale) = match &args.locale {
        Some(tag) => (
            tag.clone(),
            parse_locale(tag).context("Invalid --locale")?,
        ),
        None => environment_locale(),
    };

    let time_zone = if args.local_time {
        TimeZoneSetting::Local
    } else if let Some(offset) = &args.utc_offset {
        TimeZoneSetting::Fixed(parse_utc_offset(offset).context("Invalid --utc-offset")?)
    } else {
        TimeZoneSetting::default()
    };

    let catalog = load_catalog(args.strings.as_deref(), &tag)?;

    info!(locale = %tag, ?time_zone, entries = catalog.len(), "resolved display settings");

    Ok(Settings {
        display: DisplayConfig {
            locale,
            time_zone,
        },
        catalog,
    })
}

/// Pick the locale from `LC_ALL` or `LANG`, ignoring unsupported values.
fn environment_locale() -> (String, Locale) {
    let tag = ["LC_ALL", "LANG"]
        .into_iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty());

    if let Some(tag) = tag {
        match parse_locale(&tag) {
            Ok(locale) => return (tag, locale),
            Err(e) => warn!(error = %e, "ignoring locale from environment"),
        }
    }

    (DEFAULT_LOCALE.to_string(), Locale::en_US)
}

/// Load the string catalog: explicit path, then per-locale config file,
/// then built-in English.
fn load_catalog(explicit: Option<&Path>, tag: &str) -> Result<StringCatalog> {
    if let Some(path) = explicit {
        return StringCatalog::load(path)
            .with_context(|| format!("Failed to load strings from {}", path.display()));
    }

    match catalog_path(tag) {
        Some(path) if path.exists() => StringCatalog::load(&path)
            .with_context(|| format!("Failed to load strings from {}", path.display())),
        other => {
            debug!(path = ?other, "no string catalog for locale, using English");
            Ok(StringCatalog::english())
        }
    }
}

/// Per-locale catalog location, e.g. `~/.config/quakes/strings/fr_FR.json`.
fn catalog_path(tag: &str) -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "quakes")?;
    Some(
        dirs.config_dir()
            .join("strings")
            .join(format!("{}.json", catalog_name(tag))),
    )
}

/// Strip encoding and modifier suffixes: `fr-FR.UTF-8` becomes `fr_FR`.
fn catalog_name(tag: &str) -> String {
    tag.split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('-', "_")
}
