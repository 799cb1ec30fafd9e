//! Bridge configuration
//!
//! Built-in defaults, then the TOML file named by `REXX_RAYLIB_CONFIG`, then
//! individual environment overrides. Loaded once per process.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

use crate::marshal::IntegerMode;

pub const CONFIG_ENV: &str = "REXX_RAYLIB_CONFIG";
pub const LOG_LEVEL_ENV: &str = "REXX_RAYLIB_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "REXX_RAYLIB_LOG_FORMAT";
pub const LOG_FILE_ENV: &str = "REXX_RAYLIB_LOG_FILE";
pub const STRICT_KEYCODE_ENV: &str = "REXX_RAYLIB_STRICT_KEYCODE";
pub const STRICT_INTEGERS_ENV: &str = "REXX_RAYLIB_STRICT_INTEGERS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub marshal: MarshalConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MarshalConfig {
    /// Reject integer arguments that are not entirely a base-10 integer
    #[serde(default)]
    pub strict_integers: bool,

    /// Fail `IsKeyDown` on an unusable keycode instead of polling key 0
    #[serde(default)]
    pub strict_keycode: bool,
}

impl MarshalConfig {
    pub fn integer_mode(&self) -> IntegerMode {
        if self.strict_integers {
            IntegerMode::Strict
        } else {
            IntegerMode::Lenient
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human-readable
    Pretty,
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    Stdout,
    #[default]
    Stderr,
    /// Daily rolling files
    #[serde(untagged)]
    File { directory: String, prefix: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    #[serde(default)]
    pub output: LogOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            output: LogOutput::default(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown names fall back to `WARN`
    pub fn level(&self) -> Level {
        match self.level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "error" => Level::ERROR,
            _ => Level::WARN,
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

impl Config {
    pub fn from_toml(source: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&source, path)
    }

    /// Defaults, the optional config file, then environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path))?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Apply `REXX_RAYLIB_*` overrides read through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            self.logging.level = level;
        }

        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            self.logging.format = match format.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => LogFormat::Compact,
            };
        }

        if let Some(directory) = lookup(LOG_FILE_ENV) {
            self.logging.output = LogOutput::File {
                directory,
                prefix: "rexx-raylib".to_string(),
            };
        }

        if let Some(flag) = lookup(STRICT_KEYCODE_ENV) {
            self.marshal.strict_keycode = is_truthy(&flag);
        }

        if let Some(flag) = lookup(STRICT_INTEGERS_ENV) {
            self.marshal.strict_integers = is_truthy(&flag);
        }
    }
}

fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
}

struct Loaded {
    config: Config,
    error: Option<String>,
}

static GLOBAL: Lazy<Loaded> = Lazy::new(|| match Config::load() {
    Ok(config) => Loaded { config, error: None },
    Err(err) => Loaded {
        config: Config::default(),
        error: Some(err.to_string()),
    },
});

/// Process-wide configuration, loaded on first use
///
/// A broken config file never fails a host call; defaults are used instead
/// and the problem is reported by [`load_error`].
pub fn global() -> &'static Config {
    &GLOBAL.config
}

/// Why the global configuration fell back to defaults, if it did
pub fn load_error() -> Option<&'static str> {
    GLOBAL.error.as_deref()
}
