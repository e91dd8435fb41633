//! Expected-side (fixture) errors.

/// Errors raised by the fixture store. These are hard failures for the
/// fixture they name and never affect other fixtures.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// No serialized capture exists under the fixture name.
    #[error("Fixture '{name}' not found at {path}")]
    Missing { name: String, path: String },

    /// The fixture exists but does not decode into a valid capture
    /// shape (bad encoding or violated shape invariants).
    #[error("Fixture '{name}' is not a valid capture: {message}")]
    Corrupt { name: String, message: String },

    /// The fixture file could not be read or written.
    #[error("Fixture '{name}' I/O failed: {message}")]
    Io { name: String, message: String },
}
