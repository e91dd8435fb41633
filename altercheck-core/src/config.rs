//! Harness configuration loaded from `altercheck.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::query_spec::QuerySpec;

/// One fixture entry: the shared fixture name and the table the
/// statement is expected to alter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureEntry {
    pub name: String,
    pub target_table: String,
}

/// Harness configuration.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ALTERCHECK_*`)
/// 2. Config file (`altercheck.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// SQL script executed into a fresh connection before each fixture.
    pub seed_script: PathBuf,
    /// Directory holding one `<fixture>.sql` query source per fixture.
    pub queries_dir: PathBuf,
    /// Directory holding one `<fixture>.json` expected capture per fixture.
    pub fixtures_dir: PathBuf,
    /// Fixtures to evaluate, in declaration order.
    pub fixtures: Vec<FixtureEntry>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed_script: PathBuf::from("seed.sql"),
            queries_dir: PathBuf::from("queries"),
            fixtures_dir: PathBuf::from("fixtures"),
            fixtures: Vec::new(),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from a TOML file, apply `ALTERCHECK_*`
    /// environment overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config: Self = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::apply_env_overrides(&mut config);
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            fixtures = config.fixtures.len(),
            "loaded harness config"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(config: &mut Self) {
        if let Ok(value) = std::env::var("ALTERCHECK_SEED_SCRIPT") {
            config.seed_script = PathBuf::from(value);
        }
        if let Ok(value) = std::env::var("ALTERCHECK_QUERIES_DIR") {
            config.queries_dir = PathBuf::from(value);
        }
        if let Ok(value) = std::env::var("ALTERCHECK_FIXTURES_DIR") {
            config.fixtures_dir = PathBuf::from(value);
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fixtures.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "fixtures".to_string(),
                message: "at least one fixture is required".to_string(),
            });
        }
        for entry in &self.fixtures {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "fixtures.name".to_string(),
                    message: "fixture name must not be blank".to_string(),
                });
            }
            if entry.target_table.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "fixtures.target_table".to_string(),
                    message: format!("fixture '{}' has a blank target table", entry.name),
                });
            }
        }
        let mut names: Vec<&str> = self.fixtures.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        if names.len() != self.fixtures.len() {
            return Err(ConfigError::ValidationFailed {
                field: "fixtures".to_string(),
                message: "fixture names must be unique".to_string(),
            });
        }
        Ok(())
    }

    /// The query specs this configuration describes, in declaration
    /// order. Each fixture's source is `<queries_dir>/<name>.sql`.
    pub fn query_specs(&self) -> Vec<QuerySpec> {
        self.fixtures
            .iter()
            .map(|entry| {
                QuerySpec::new(
                    entry.name.clone(),
                    self.queries_dir.join(format!("{}.sql", entry.name)),
                    entry.target_table.clone(),
                )
            })
            .collect()
    }
}
