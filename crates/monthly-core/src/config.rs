//! TOML-based configuration.
//!
//! Stores the defaults used when building a month from the CLI:
//! - Weekend pattern (integer code or binary string)
//! - Label locale
//! - Default datebook file
//!
//! Configuration is stored at `~/.config/monthly/config.toml` unless an
//! explicit path is given.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::activity::raw_datebook;
use crate::engine::EngineOptions;
use crate::error::{ConfigError, CoreError, Result};
use crate::labels::Locale;
use crate::weekend::{WeekendConfig, WeekendSet};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyConfig {
    #[serde(default)]
    pub weekend: WeekendConfig,
    #[serde(default)]
    pub locale: Locale,
    /// Datebook JSON file loaded when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datebook: Option<PathBuf>,
}

/// Returns `~/.config/monthly[-dev]/` based on MONTHLY_ENV.
///
/// Set MONTHLY_ENV=dev to use the development directory.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MONTHLY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("monthly-dev")
    } else {
        base_dir.join("monthly")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl MonthlyConfig {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let new_value = match part {
                "weekend" => match value.parse::<WeekendConfig>() {
                    Ok(WeekendConfig::Code(code)) => serde_json::Value::from(code),
                    Ok(WeekendConfig::Pattern(p)) => serde_json::Value::String(p),
                    Err(never) => match never {},
                },
                "locale" => {
                    let locale = value.parse::<Locale>().map_err(|message| {
                        ConfigError::InvalidValue {
                            key: key.to_string(),
                            message,
                        }
                    })?;
                    serde_json::Value::String(locale.to_string())
                }
                "datebook" => serde_json::Value::String(value.to_string()),
                _ => return Err(unknown()),
            };
            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// Default config file location.
    pub fn default_path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`, or write and return defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed or holds an
    /// invalid weekend value, or if the defaults cannot be written.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: MonthlyConfig = toml::from_str(&content).map_err(|e| {
                    ConfigError::LoadFailed {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    }
                })?;
                cfg.validate()?;
                debug!(path = %path.display(), "loaded config");
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Reject values the engine would refuse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        WeekendSet::resolve(&self.weekend).map(|_| ())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid; the
    /// config is left unchanged in that case.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: MonthlyConfig = serde_json::from_value(json)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Engine options for `reference`, reading the configured datebook file
    /// when `datebook` is not given.
    pub fn engine_options(
        &self,
        reference: Option<chrono::NaiveDate>,
        datebook: Option<&Path>,
    ) -> Result<EngineOptions> {
        let datebook = match datebook.or(self.datebook.as_deref()) {
            Some(path) => read_datebook(path)?,
            None => Vec::new(),
        };
        Ok(EngineOptions {
            reference,
            weekend: self.weekend.clone(),
            datebook,
        })
    }
}

/// Read a datebook JSON file into raw, unvalidated entries.
pub fn read_datebook(path: &Path) -> Result<Vec<crate::activity::RawActivity>> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    raw_datebook(&value).map_err(CoreError::from)
}
