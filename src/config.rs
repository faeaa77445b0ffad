//! Configuration loading.
//!
//! Settings come from `config/config.toml` (optional) and `HARBOR__*`
//! environment variables, e.g. `HARBOR__MIGRATIONS__PATH=db/migrations`.
//!
//! ```toml
//! [migrations]
//! path = "db/migrations"
//! stub_path = "resources/stubs"
//! extension = "rs"
//! ```

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "config/config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct HarborConfig {
    #[serde(default)]
    pub migrations: MigrationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MigrationConfig {
    /// Directory new migrations are written to
    #[serde(default = "default_migrations_path")]
    pub path: PathBuf,
    /// Directory holding `blank.stub`, `create.stub` and `update.stub`;
    /// the bundled stubs are used when unset
    #[serde(default)]
    pub stub_path: Option<PathBuf>,
    /// Extension of generated files
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            path: default_migrations_path(),
            stub_path: None,
            extension: default_extension(),
        }
    }
}

fn default_migrations_path() -> PathBuf {
    PathBuf::from("migrations")
}

fn default_extension() -> String {
    crate::migration::DEFAULT_EXTENSION.to_string()
}

fn environment() -> Environment {
    Environment::with_prefix("HARBOR").separator("__")
}

impl HarborConfig {
    /// Load from `config/config.toml`, falling back to env vars.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load from `path` (optional) and `HARBOR__*` env vars.
    ///
    /// If the file exists but cannot be parsed, a warning is logged and only
    /// the environment is used.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(environment());

        let settings = match builder.build() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!(
                    "failed to load config file {}, falling back to env: {}",
                    path.display(),
                    err
                );
                Config::builder()
                    .add_source(environment())
                    .build()
                    .map_err(|env_err| {
                        ConfigError::Message(format!(
                            "Failed to load configuration from file and env: {}, then env-only error: {}",
                            err, env_err
                        ))
                    })?
            }
        };

        settings.try_deserialize::<HarborConfig>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = HarborConfig::default();
        assert_eq!(config.migrations.path, PathBuf::from("migrations"));
        assert_eq!(config.migrations.stub_path, None);
        assert_eq!(config.migrations.extension, "rs");
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = HarborConfig::load_from(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.migrations.path, PathBuf::from("migrations"));
        assert_eq!(config.migrations.extension, "rs");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("config.toml");
        fs::write(
            &file,
            r#"
            [migrations]
            path = "db/migrations"
            stub_path = "resources/stubs"
            extension = "sql"
            "#,
        )
        .unwrap();

        let config = HarborConfig::load_from(&file).unwrap();
        assert_eq!(config.migrations.path, PathBuf::from("db/migrations"));
        assert_eq!(config.migrations.stub_path, Some(PathBuf::from("resources/stubs")));
        assert_eq!(config.migrations.extension, "sql");
    }

    #[test]
    fn test_load_from_partial_section_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("config.toml");
        fs::write(&file, "[migrations]\npath = \"db\"\n").unwrap();

        let config = HarborConfig::load_from(&file).unwrap();
        assert_eq!(config.migrations.path, PathBuf::from("db"));
        assert_eq!(config.migrations.extension, "rs");
    }

    #[test]
    fn test_load_from_unparsable_file_falls_back() {
        // EDGE CASE: broken TOML is ignored with a warning
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("config.toml");
        fs::write(&file, "[migrations\npath = ").unwrap();

        let config = HarborConfig::load_from(&file).unwrap();
        assert_eq!(config.migrations.path, PathBuf::from("migrations"));
    }
}
