//! Error types for rinkside.

use thiserror::Error;

/// Errors that can occur while loading or importing events.
///
/// Querying and exporting never fail; these cover the edges where text
/// comes in from outside.
#[derive(Error, Debug)]
pub enum RinksideError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feed decode error: {0}")]
    Feed(#[from] serde_json::Error),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rinkside operations.
pub type RinksideResult<T> = Result<T, RinksideError>;
