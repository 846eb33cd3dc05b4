//! # tempo-config
//!
//! Layered configuration loading for Tempo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Prefixed environment variables (`TEMPO_*` prefix, `__` as separator)
//! 2. Conventional environment variables (`NOTION_TOKEN`, `NOTION_DATABASE_ID`,
//!    `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_BASE_URL`)
//! 3. Project-level `.tempo/config.toml`
//! 4. User-level `~/.config/tempo/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TEMPO_NOTION__TOKEN` -> `notion.token`, `TEMPO_LLM__TIMEOUT_SECS`
//! -> `llm.timeout_secs`, etc. The conventional names map onto the same keys.
//!
//! # Usage
//!
//! ```no_run
//! use tempo_config::TempoConfig;
//!
//! let config = TempoConfig::load_with_dotenv().expect("config");
//! config.validate().expect("required settings present");
//! println!("model: {}", config.llm.model);
//! ```

mod error;
mod llm;
mod notion;

pub use error::ConfigError;
pub use llm::{DEFAULT_SYSTEM_PROMPT, LlmConfig};
pub use notion::{NotionConfig, PropertyNames};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Conventional environment names and the config keys they fill.
const CONVENTIONAL_ENV: [(&str, &str); 5] = [
    ("NOTION_TOKEN", "notion.token"),
    ("NOTION_DATABASE_ID", "notion.database_id"),
    ("OPENAI_API_KEY", "llm.api_key"),
    ("OPENAI_MODEL", "llm.model"),
    ("OPENAI_BASE_URL", "llm.base_url"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TempoConfig {
    #[serde(default)]
    pub notion: NotionConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

impl TempoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Searches the current directory and its parents for a `.env` file and
    /// silently continues when none exists.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".tempo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Conventional environment names
        figment = figment.merge(Self::conventional_env());

        // Layer 4: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("TEMPO_").split("__"))
    }

    /// Check that every value needed to talk to both services is present and sane.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for the first absent credential or
    /// identifier, or [`ConfigError::InvalidValue`] for an out-of-range setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notion.token.trim().is_empty() {
            return Err(ConfigError::Missing {
                field: "notion.token",
                env: "NOTION_TOKEN",
            });
        }
        if self.notion.database_id.trim().is_empty() {
            return Err(ConfigError::Missing {
                field: "notion.database_id",
                env: "NOTION_DATABASE_ID",
            });
        }
        if self.llm.api_key.trim().is_empty() {
            return Err(ConfigError::Missing {
                field: "llm.api_key",
                env: "OPENAI_API_KEY",
            });
        }
        if self.notion.timeout_secs == 0 {
            return Err(invalid("notion.timeout_secs", "must be at least 1 second"));
        }
        if self.llm.timeout_secs == 0 {
            return Err(invalid("llm.timeout_secs", "must be at least 1 second"));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(invalid("llm.temperature", "must be between 0.0 and 2.0"));
        }
        if self.llm.max_tokens == 0 {
            return Err(invalid("llm.max_tokens", "must be positive"));
        }
        Ok(())
    }

    fn conventional_env() -> Env {
        let names: Vec<&str> = CONVENTIONAL_ENV.iter().map(|(name, _)| *name).collect();
        Env::raw().only(&names).map(|key| {
            CONVENTIONAL_ENV
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map_or_else(|| key.into(), |(_, path)| (*path).into())
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tempo").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
