//! Configuration loader for utilkit
//!
//! Layers, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. a JSON file, from [`ConfigLoader::file`] or `UTILKIT_CONFIG`
//! 3. `UTILKIT_LOCALE`, `UTILKIT_CURRENCY`, `UTILKIT_BYTE_BASE`,
//!    `UTILKIT_BYTE_DECIMALS` and `UTILKIT_LOG`

use crate::config::{Config, LogFilter};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use utilkit_core::{
    constants::{
        UTILKIT_BYTE_BASE_VAR, UTILKIT_BYTE_DECIMALS_VAR, UTILKIT_CONFIG_VAR,
        UTILKIT_CURRENCY_VAR, UTILKIT_LOCALE_VAR, UTILKIT_LOG_VAR,
    },
    Error, Result, ResultExt,
};

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Builds a validated [`Config`].
pub struct ConfigLoader {
    /// Explicit config file, taking precedence over `UTILKIT_CONFIG`
    file: Option<PathBuf>,
    env: EnvLookup,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("file", &self.file)
            .finish_non_exhaustive()
    }
}

impl ConfigLoader {
    /// Create a loader that reads the process environment
    pub fn new() -> Self {
        Self {
            file: None,
            env: Box::new(|key| std::env::var(key).ok()),
        }
    }

    /// Load this file instead of the one named by `UTILKIT_CONFIG`
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Replace the environment lookup
    pub fn env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = Box::new(lookup);
        self
    }

    /// Load the configuration
    pub fn load(self) -> Result<Config> {
        let path = self
            .file
            .clone()
            .or_else(|| self.var(UTILKIT_CONFIG_VAR).map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::read_file(&path)?,
            None => Config::default(),
        };
        self.apply_env(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.env)(key).filter(|value| !value.trim().is_empty())
    }

    fn read_file(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system(path, "read config file", e))?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            Error::configuration(format!("invalid config file {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    fn apply_env(&self, config: &mut Config) -> Result<()> {
        if let Some(locale) = self.var(UTILKIT_LOCALE_VAR) {
            config.currency.locale = locale;
        }
        if let Some(currency) = self.var(UTILKIT_CURRENCY_VAR) {
            config.currency.currency = currency.to_ascii_uppercase();
        }
        if let Some(base) = self.parsed(UTILKIT_BYTE_BASE_VAR)? {
            config.bytes.base = base;
        }
        if let Some(decimals) = self.parsed(UTILKIT_BYTE_DECIMALS_VAR)? {
            config.bytes.decimals = decimals;
        }
        if let Some(filter) = self.var(UTILKIT_LOG_VAR) {
            config.log_filter = LogFilter(filter);
        }
        Ok(())
    }

    fn parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let Some(raw) = self.var(key) else {
            return Ok(None);
        };
        let value: T = raw
            .trim()
            .parse()
            .map_err(|e: T::Err| Error::configuration(format!("invalid value '{raw}': {e}")))
            .with_context(|| format!("environment variable {key}"))?;
        tracing::debug!(variable = key, "applied environment override");
        Ok(Some(value))
    }
}
