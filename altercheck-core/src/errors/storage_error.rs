//! Seed database and introspection errors.

/// Errors raised while opening or seeding a database connection, or
/// while dumping a table. Failures of the migration statement itself
/// are not storage errors: the executor captures those as data.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to open database: {message}")]
    OpenFailed { message: String },

    #[error("Failed to seed database from {origin}: {message}")]
    SeedFailed { origin: String, message: String },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },
}
