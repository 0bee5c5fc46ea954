//! Error types for quake-core.
//!
//! Formatting never fails. Errors only come from the edges that read
//! external input: string catalogs, feed documents and configuration values.

use thiserror::Error;

/// The unified error type for quake-core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A localization catalog could not be read or parsed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A feed document could not be parsed.
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    /// Configuration input validation errors (locale tag, UTC offset).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Localization catalog errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read '{path}': {message}")]
    Io { path: String, message: String },

    /// The catalog is not a flat JSON object of strings.
    #[error("malformed catalog: {reason}")]
    Malformed { reason: String },
}

/// Feed document errors.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The document is not valid JSON or does not have the expected shape.
    #[error("malformed feed: {reason}")]
    Malformed { reason: String },
}

/// Configuration input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Unknown or unsupported locale tag.
    #[error("invalid locale '{value}': {reason}")]
    Locale { value: String, reason: String },

    /// Malformed or out-of-range UTC offset.
    #[error("invalid UTC offset '{value}': {reason}")]
    UtcOffset { value: String, reason: String },
}
