//! `tick.toml` configuration.
//!
//! ```toml
//! [handlers]
//! registered = ["ACTION_1_handler"]
//!
//! [stories]
//! known = ["farewell_story"]
//!
//! [validation]
//! checks = ["intents", "actions"]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tick_analyze::Check;

/// Configuration file picked up from the working directory when `--config`
/// is not given.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "tick.toml";

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse '{path}': {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config '{path}': {message}")]
    Invalid { path: String, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct TickConfig {
    pub handlers: HandlersConfig,
    pub stories: StoriesConfig,
    pub validation: ValidationConfig,
}

/// Action handlers known to exist at runtime.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct HandlersConfig {
    pub registered: Vec<String>,
}

/// Stories actions may redirect to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct StoriesConfig {
    pub known: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ValidationConfig {
    /// Checks run when none are given on the command line. All when absent.
    pub checks: Option<Vec<Check>>,
}

/// Read and parse a config file.
pub(crate) fn read_config(path: &Path) -> Result<TickConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let config: TickConfig = toml::from_str(&content).map_err(|source| ConfigError::Toml {
        path: path.display().to_string(),
        source,
    })?;
    validate_config(path, &config)?;
    Ok(config)
}

fn validate_config(path: &Path, config: &TickConfig) -> Result<(), ConfigError> {
    if config.validation.checks.as_ref().is_some_and(Vec::is_empty) {
        return Err(ConfigError::Invalid {
            path: path.display().to_string(),
            message: "validation.checks must name at least one check".to_string(),
        });
    }
    Ok(())
}

/// Load the explicit config, else `./tick.toml` if present, else defaults.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<TickConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                tracing::debug!("no config file, using defaults");
                return Ok(TickConfig::default());
            }
            default
        }
    };

    let config = read_config(&path)?;
    tracing::debug!(
        path = %path.display(),
        handlers = config.handlers.registered.len(),
        stories = config.stories.known.len(),
        "config loaded"
    );
    Ok(config)
}
