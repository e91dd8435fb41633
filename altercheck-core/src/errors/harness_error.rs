//! Run-level error aggregation.

use super::{ConfigError, FixtureError, StorageError};

/// Errors that abort a whole verification run (as opposed to failures
/// recorded inside a single fixture's report).
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Fixture error: {0}")]
    Fixture(#[from] FixtureError),
}
