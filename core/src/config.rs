// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::Locale;

/// The name of the Vigil application.
pub const APP_NAME: &str = "vigil";

/// User id used when none is configured.
pub const DEFAULT_USER_ID: &str = "local";

/// Configuration for the Vigil application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Directory for storing application state.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// The user whose routine is shown.
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Locale of season names.
    #[serde(default)]
    pub locale: Locale,

    /// Hosted backend for routine items. Local storage is used when absent.
    #[serde(default)]
    pub remote: Option<RemoteConfig>,

    /// Feed of the daily readings.
    #[serde(default)]
    pub readings: Option<ReadingsConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: None,
            user_id: default_user_id(),
            locale: Locale::default(),
            remote: None,
            readings: None,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        // Normalize state directory
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(
                    expand_path(a)
                        .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
                );
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        }

        if self.user_id.trim().is_empty() {
            return Err("user_id must not be empty".into());
        }

        if let Some(remote) = &self.remote {
            if remote.url.trim().is_empty() {
                return Err("remote.url must not be empty".into());
            }
        }

        Ok(())
    }
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

/// Hosted backend configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the backend, e.g. `https://example.supabase.co`.
    pub url: String,

    /// API key sent with every request.
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in seconds.
    #[serde(default = "RemoteConfig::default_timeout")]
    pub timeout_secs: u64,
}

impl RemoteConfig {
    const fn default_timeout() -> u64 {
        30
    }
}

/// Daily readings feed configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ReadingsConfig {
    /// Endpoint queried with `?date=YYYY-MM-DD`.
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "ReadingsConfig::default_timeout")]
    pub timeout_secs: u64,
}

impl ReadingsConfig {
    pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

    const fn default_timeout() -> u64 {
        Self::DEFAULT_TIMEOUT_SECS
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle state directories
    let state_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_STATE_HOME/", "${XDG_STATE_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in state_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_state_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_local_dir();
    state_dir.ok_or_else(|| "User-specific state directory not found".into())
}
