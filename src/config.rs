//! Tool configuration, read from a TOML file.

use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::log::LogLevel;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "utprofile.toml";

/// Profile files are recognized by this file name pattern by default.
pub const DEFAULT_PROFILE_PATTERN: &str = r"_utprofile\.ya?ml$";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Regex matched against file names when scanning directories.
    pub profile_pattern: String,
    /// Directory names never descended into.
    pub skip_dirs: Vec<String>,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_pattern: DEFAULT_PROFILE_PATTERN.to_owned(),
            skip_dirs: vec![".git".to_owned(), "target".to_owned()],
            log_level: LogLevel::Normal,
        }
    }
}

impl Config {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_owned(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_owned(),
            message: e.to_string(),
        })
    }

    /// Load `path` if given, else `utprofile.toml` if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Compiled profile file name pattern.
    pub fn profile_regex(&self) -> Result<Regex> {
        Regex::new(&self.profile_pattern).map_err(|source| Error::ProfilePattern {
            pattern: self.profile_pattern.clone(),
            source,
        })
    }
}
