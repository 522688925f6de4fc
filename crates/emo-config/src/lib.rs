//! # emo-config
//!
//! Layered configuration loading for emotrace using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EMOTRACE_*` prefix, `__` as separator)
//! 2. An explicit file passed by the caller (the CLI's `--config`)
//! 3. Project-level `.emotrace/config.toml`
//! 4. User-level `~/.config/emotrace/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `EMOTRACE_TREND__CONCURRENCY` -> `trend.concurrency`,
//! `EMOTRACE_SESSION__API_KEY` -> `session.api_key`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use emo_config::EmoConfig;
//!
//! let cwd = std::env::current_dir().expect("cwd");
//! let config = EmoConfig::load_with_dotenv(&cwd, None).expect("config");
//! println!("window: {} days", config.trend.window_days);
//! ```

mod alerts;
mod error;
mod evidence;
mod session;
mod trend;

pub use alerts::AlertsConfig;
pub use error::ConfigError;
pub use evidence::EvidenceConfig;
pub use session::SessionConfig;
pub use trend::TrendConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "EMOTRACE_";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EmoConfig {
    #[serde(default)]
    pub trend: TrendConfig,
    #[serde(default)]
    pub evidence: EvidenceConfig,
    #[serde(default)]
    pub alerts: AlertsConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl EmoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering `explicit` above the discovered TOML files.
    ///
    /// A missing `explicit` file is an error; missing discovered files are not.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.display().to_string(),
                });
            }
        }
        let config: Self = Self::figment_with(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `dir/.env` into the process environment when it exists, then
    /// [`Self::load_from`].
    ///
    /// Variables already set in the environment win over the file.
    pub fn load_with_dotenv(dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = dir.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path).map_err(|source| ConfigError::Dotenv {
                path: env_path.display().to_string(),
                source,
            })?;
        }
        Self::load_from(explicit)
    }

    /// Build the default figment provider chain.
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the figment provider chain with an optional explicit file.
    pub fn figment_with(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".emotrace/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that load fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.trend.validate()?;
        self.evidence.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("emotrace").join("config.toml"))
    }
}
