//! Query specs: the name-keyed binding of source, fixture, and table.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One verification unit: a query source on disk, the fixture holding
/// its expected capture, and the table the statement must alter.
///
/// Fixtures are keyed by name, never by position, so reordering or
/// adding fixtures cannot misalign expected/actual pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Fixture name, shared by the query source and the expected capture.
    pub fixture: String,
    /// Path of the file holding the raw migration statement.
    pub source: PathBuf,
    /// Table whose post-migration state is dumped for comparison.
    pub target_table: String,
}

impl QuerySpec {
    pub fn new(
        fixture: impl Into<String>,
        source: impl Into<PathBuf>,
        target_table: impl Into<String>,
    ) -> Self {
        Self {
            fixture: fixture.into(),
            source: source.into(),
            target_table: target_table.into(),
        }
    }
}
