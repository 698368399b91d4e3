//! Optional TOML settings file.
//!
//! ```toml
//! endpoint = "http://127.0.0.1:5000/predict"
//!
//! [logging]
//! level = "info"
//! file = "car-price.log"
//! console = true
//! ```
//!
//! Every key is optional. Command-line flags and `CAR_PRICE_API_URL` take
//! precedence over the endpoint given here.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub endpoint: Option<String>,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// Any `EnvFilter` directive, e.g. `"debug"` or `"price_http=debug"`.
    pub level: Option<String>,
    /// Append log records to this file.
    pub file: Option<PathBuf>,
    /// Write log records to stderr.
    pub console: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: None,
            file: None,
            console: true,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
