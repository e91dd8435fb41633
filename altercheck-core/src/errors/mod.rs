//! Error handling for altercheck.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//! Database execution failures are never errors here: the executor
//! captures them as data (`Capture::error_message`).

pub mod config_error;
pub mod fixture_error;
pub mod harness_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use fixture_error::FixtureError;
pub use harness_error::HarnessError;
pub use storage_error::StorageError;
