//! Name-keyed expected-capture store: one JSON file per fixture.

use std::io;
use std::path::PathBuf;

use altercheck_core::capture::Capture;
use altercheck_core::errors::FixtureError;

/// Loads and saves serialized expected captures under a directory,
/// keyed by fixture name (`<dir>/<name>.json`).
#[derive(Debug, Clone)]
pub struct FixtureStore {
    dir: PathBuf,
}

impl FixtureStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the fixture file for `name`.
    pub fn fixture_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Load one expected capture. An absent file is `Missing`; a file
    /// that does not decode into a valid capture shape is `Corrupt`.
    pub fn load_one(&self, name: &str) -> Result<Capture, FixtureError> {
        let path = self.fixture_path(name);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FixtureError::Missing {
                    name: name.to_string(),
                    path: path.display().to_string(),
                });
            }
            Err(e) => {
                return Err(FixtureError::Io {
                    name: name.to_string(),
                    message: e.to_string(),
                });
            }
        };
        let capture: Capture =
            serde_json::from_str(&text).map_err(|e| FixtureError::Corrupt {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        capture.validate().map_err(|message| FixtureError::Corrupt {
            name: name.to_string(),
            message,
        })?;
        Ok(capture)
    }

    /// Load one expected capture per name, in order. The first missing
    /// or corrupt fixture fails the batch.
    pub fn load(&self, names: &[String]) -> Result<Vec<Capture>, FixtureError> {
        names.iter().map(|name| self.load_one(name)).collect()
    }

    /// Serialize a capture under `name`, creating the directory if
    /// needed. Refuses captures that violate the shape invariants.
    pub fn save(&self, name: &str, capture: &Capture) -> Result<(), FixtureError> {
        capture.validate().map_err(|message| FixtureError::Corrupt {
            name: name.to_string(),
            message,
        })?;
        let json = serde_json::to_string_pretty(capture).map_err(|e| FixtureError::Io {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        std::fs::create_dir_all(&self.dir).map_err(|e| FixtureError::Io {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        std::fs::write(self.fixture_path(name), json).map_err(|e| FixtureError::Io {
            name: name.to_string(),
            message: e.to_string(),
        })
    }
}
