//! Error types for the cookie rules.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when a caller breaks the rules' contract.
///
/// Running short of cookies is not an error; see [`crate::PurchaseOutcome`].
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("unknown generator kind: {0:?}")]
    UnknownGeneratorKind(String),

    #[error("purchase quantity must be at least 1")]
    ZeroQuantity,

    #[error("invalid session config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read session config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RulesError>;
