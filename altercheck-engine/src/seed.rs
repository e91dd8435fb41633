//! Seed database handling: one fresh, identically-seeded connection
//! per fixture, so ordering across fixtures cannot leak state.

use std::path::Path;

use altercheck_core::errors::StorageError;
use rusqlite::Connection;

/// A seed script and where it came from. Every [`SeedDatabase::connect`]
/// call opens a new in-memory database and replays the script into it,
/// so repeated connections are structurally identical.
#[derive(Debug, Clone)]
pub struct SeedDatabase {
    script: String,
    origin: String,
}

impl SeedDatabase {
    /// Read the seed script from a file.
    pub fn from_script_file(path: &Path) -> Result<Self, StorageError> {
        let script = std::fs::read_to_string(path).map_err(|e| StorageError::SeedFailed {
            origin: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            script,
            origin: path.display().to_string(),
        })
    }

    /// Build a seed from an inline script (for testing).
    pub fn from_script(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            origin: "<inline>".to_string(),
        }
    }

    /// Open a fresh connection seeded with the script.
    pub fn connect(&self) -> Result<Connection, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::OpenFailed {
            message: e.to_string(),
        })?;
        conn.execute_batch(&self.script)
            .map_err(|e| StorageError::SeedFailed {
                origin: self.origin.clone(),
                message: e.to_string(),
            })?;
        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = "CREATE TABLE person (id INTEGER, name TEXT);\n\
                          INSERT INTO person VALUES (1, 'Ann');";

    #[test]
    fn connects_with_seeded_rows() {
        let seed = SeedDatabase::from_script(SCRIPT);
        let conn = seed.connect().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM person", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn connections_are_isolated() {
        let seed = SeedDatabase::from_script(SCRIPT);
        let first = seed.connect().unwrap();
        first
            .execute_batch("INSERT INTO person VALUES (2, 'Bob');")
            .unwrap();

        let second = seed.connect().unwrap();
        let count: i64 = second
            .query_row("SELECT COUNT(*) FROM person", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn bad_script_is_a_seed_failure() {
        let seed = SeedDatabase::from_script("CREATE BOGUS;");
        let err = seed.connect().unwrap_err();
        assert!(matches!(err, StorageError::SeedFailed { .. }));
    }

    #[test]
    fn missing_script_file_is_a_seed_failure() {
        let err = SeedDatabase::from_script_file(Path::new("/nonexistent/seed.sql")).unwrap_err();
        assert!(matches!(err, StorageError::SeedFailed { .. }));
    }
}
