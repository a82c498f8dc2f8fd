// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use tusk_remote::RemoteConfig;

/// The name of the Tusk application.
pub const APP_NAME: &str = "tusk";

/// File name of the JSON task cache inside the state directory.
const CACHE_FILE: &str = "tasks.json";

/// Configuration for the Tusk application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Backend server configuration.
    pub remote: RemoteConfig,

    /// Directory for storing application state (the local task cache).
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Identifier recorded as `last_updated_by` on edits from this device.
    #[serde(default)]
    pub device_id: Option<String>,
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
                Err(e) => tracing::warn!("Failed to get state directory: {e}"),
            },
        };

        // Every device needs a stable authorship id
        if self.device_id.is_none() {
            self.device_id = Some(Uuid::new_v4().to_string());
        }

        Ok(())
    }

    /// Path of the JSON task cache, once a state directory is known.
    #[must_use]
    pub fn cache_file(&self) -> Option<PathBuf> {
        self.state_dir.as_ref().map(|d| d.join(CACHE_FILE))
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

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or("User-specific state directory not found".into())
}

#[cfg(test)]
mod tests {
    use tusk_remote::AuthMethod;

    use super::*;

    #[test]
    fn test_parse_config_from_toml() {
        let raw = r#"
            device_id = "kitchen-tablet"

            [remote]
            base_url = "https://hive.example.com"

            [remote.auth]
            type = "bearer"
            token = "secret"
        "#;

        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.remote.base_url, "https://hive.example.com");
        assert_eq!(config.device_id.as_deref(), Some("kitchen-tablet"));
        assert_eq!(config.state_dir, None);
        match config.remote.auth {
            AuthMethod::Bearer { ref token } => assert_eq!(token, "secret"),
            ref other => panic!("expected bearer auth, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_defaults_device_id() {
        let raw = r#"
            [remote]
            base_url = "https://hive.example.com"
        "#;

        let mut config: Config = toml::from_str(raw).unwrap();
        config.normalize().unwrap();
        assert!(config.device_id.is_some());
    }

    #[test]
    fn test_normalize_expands_home_prefix() {
        let home = get_home_dir().unwrap();
        let raw = r#"
            state_dir = "~/tusk-state"

            [remote]
            base_url = "https://hive.example.com"
        "#;

        let mut config: Config = toml::from_str(raw).unwrap();
        config.normalize().unwrap();
        assert_eq!(config.state_dir, Some(home.join("tusk-state")));
    }

    #[test]
    fn test_cache_file_lives_under_state_dir() {
        let raw = r#"
            state_dir = "/var/lib/tusk"

            [remote]
            base_url = "https://hive.example.com"
        "#;

        let mut config: Config = toml::from_str(raw).unwrap();
        config.normalize().unwrap();
        assert_eq!(
            config.cache_file(),
            Some(PathBuf::from("/var/lib/tusk/tasks.json"))
        );
    }
}
