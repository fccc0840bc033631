//! Settings.
//!
//! Reads the optional `config.toml` and applies environment overrides.
//!
//! ```toml
//! gcloud = "/opt/google-cloud-sdk/bin/gcloud"
//! editor = "code --wait"
//! not_found_codes = [1]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Error, Result};

/// Settings file contents. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Program used for secret store operations.
    pub gcloud: Option<String>,
    /// Editor command line.
    pub editor: Option<String>,
    /// Tool exit codes that mean "not found".
    pub not_found_codes: Option<Vec<i32>>,
}

/// Effective settings after defaults and overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub gcloud: String,
    pub editor: String,
    pub not_found_codes: Vec<i32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gcloud: constants::DEFAULT_GCLOUD.to_string(),
            editor: constants::DEFAULT_EDITOR.to_string(),
            not_found_codes: constants::DEFAULT_NOT_FOUND_CODES.to_vec(),
        }
    }
}

impl Config {
    /// Default settings file location: `<config_dir>/gsm/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gsm").join(constants::CONFIG_FILE))
    }

    /// Load the settings file.
    ///
    /// `GSM_CONFIG` names an explicit file, which must exist. Otherwise the
    /// default location is used when present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` for an explicit path that does not exist,
    /// `ConfigError::ReadFile` or `ConfigError::Parse` for unreadable files.
    pub fn load() -> Result<Self> {
        match std::env::var_os("GSM_CONFIG") {
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(ConfigError::Missing(path.display().to_string()).into());
                }
                Self::from_file(&path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a settings file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn settings(self) -> Result<Settings> {
        self.settings_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Priority: environment, file, default.
    pub fn settings_with(self, lookup: impl Fn(&str) -> Option<String>) -> Result<Settings> {
        let defaults = Settings::default();

        let gcloud = lookup("GSM_GCLOUD")
            .filter(|v| !v.is_empty())
            .or(self.gcloud)
            .unwrap_or(defaults.gcloud);

        let editor = lookup("EDITOR")
            .filter(|v| !v.trim().is_empty())
            .or(self.editor)
            .unwrap_or(defaults.editor);

        let not_found_codes = match lookup("GSM_NOT_FOUND_CODES") {
            Some(raw) => parse_codes(&raw)?,
            None => self.not_found_codes.unwrap_or(defaults.not_found_codes),
        };

        let settings = Settings {
            gcloud,
            editor,
            not_found_codes,
        };
        debug!(
            gcloud = %settings.gcloud,
            editor = %settings.editor,
            not_found_codes = ?settings.not_found_codes,
            "settings resolved"
        );
        Ok(settings)
    }
}

fn parse_codes(raw: &str) -> Result<Vec<i32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>().map_err(|_| {
                Error::from(ConfigError::InvalidValue {
                    field: "GSM_NOT_FOUND_CODES",
                    reason: format!("not an exit code: {}", s),
                })
            })
        })
        .collect()
}
