//! Ambient error type for binaries that link this workspace.
//!
//! The parsing core has its own typed errors per layer (`DecodeError`,
//! `EventLogError`, `CoinError`, `ParserInvariantError` in `indexer-parser`
//! and `indexer-domain`) so that callers can match on `kind`. This crate's
//! `Error` is the coarser "something went wrong while wiring things up"
//! type used by the demo CLI only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors (missing/invalid environment variables)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors reading fixture files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors bubbled up from deeper layers
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config("ACCOUNT_ADDRESS_PREFIX not set".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: ACCOUNT_ADDRESS_PREFIX not set"
        );
    }
}
