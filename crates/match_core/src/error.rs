use std::fmt;
use std::path::PathBuf;

/// Which identity map a registration targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    Rider,
    Driver,
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityKind::Rider => f.write_str("rider"),
            IdentityKind::Driver => f.write_str("driver"),
        }
    }
}

/// Errors returned by the matching service's public operations.
///
/// All variants are recoverable; none of them leave the service in a partially
/// updated state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("{kind} id already registered: {id}")]
    DuplicateId { kind: IdentityKind, id: String },

    #[error("Rider not found: {0}")]
    RiderNotFound(String),

    #[error("Driver not found: {0}")]
    DriverNotFound(String),

    #[error("No drivers available")]
    NoDriversAvailable,
}

/// Errors encountered while loading a [`crate::config::MatchingConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
