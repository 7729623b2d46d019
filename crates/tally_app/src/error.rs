//! Application error types.

use thiserror::Error;

/// Errors surfaced by the counter application and its tooling.
///
/// The two context wiring defects (accessor without a provider, double
/// provide) are deliberately not here: they are programming errors and
/// fail fatally in `tally_core::context`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid headless config: {0}")]
    Config(String),

    #[error("no element with id '{0}'")]
    UnknownElement(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
