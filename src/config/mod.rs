#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Effective settings: the config file, then command line overrides on top.
#[derive(Debug, Clone)]
pub struct Settings {
    pub db_dir: String,
    pub log_json: bool,
    pub log_level: String,
    pub alternatives: usize,
}

impl Settings {
    pub fn resolve(
        file: Option<&TomlConfig>,
        db_dir: Option<String>,
        verbose: bool,
        log_json: bool,
    ) -> Self {
        let defaults = TomlConfig::default();
        let file = file.unwrap_or(&defaults);

        Self {
            db_dir: db_dir.unwrap_or_else(|| file.storage.db_dir.clone()),
            log_json: log_json || file.log_json(),
            log_level: if verbose {
                "debug".to_string()
            } else {
                file.log_level().to_string()
            },
            alternatives: file.alternatives(),
        }
    }
}

impl ConfigProvider for Settings {
    fn db_dir(&self) -> &str {
        &self.db_dir
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("db_dir", &self.db_dir)
    }
}
