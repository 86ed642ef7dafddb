use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use config::builder::DefaultState;
use serde::Deserialize;
use std::env;

use crate::template::{BindingResult, BindingStore, MatchingMode};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Ordered bindings; order decides which duplicate wins
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Matching mode name, passed to the engine as-is
    #[serde(default = "default_mode")]
    pub mode: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `pretty` or `json`
    #[serde(default)]
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// One binding as written in a config file.
///
/// Every field is optional here; missing pattern or value is reported by
/// the binding store when the settings are turned into bindings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BindingConfig {
    pub pattern: Option<String>,
    pub value: Option<String>,
    pub case_sensitive: Option<bool>,
}

fn default_mode() -> String {
    MatchingMode::DELETE_UNMATCHED.to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Self::defaults()?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // ENGINE_MODE, LOGGING_FORMAT, LOGGING_LEVEL
            .add_source(
                Environment::default()
                    .separator("_")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Build settings from an in-memory TOML document on top of the defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("engine.mode", default_mode())?
            .set_default("logging.format", "pretty")?
            .set_default("logging.level", default_level())
    }

    /// Turn the configured bindings into a store, in file order
    pub fn binding_store(&self) -> BindingResult<BindingStore> {
        let mut store = BindingStore::new();

        for binding in &self.bindings {
            store.store(
                binding.pattern.as_deref(),
                binding.value.as_deref(),
                binding.case_sensitive,
            )?;
        }

        tracing::debug!(bindings = store.len(), "Binding store loaded");

        Ok(store)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: default_level(),
        }
    }
}
