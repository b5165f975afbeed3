//! Client configuration: backend server URL and the persisted session token.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Persisted session file contents.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    token: String,
}

/// Application configuration wrapper.
///
/// Holds the backend URL, the bearer token of the current session, and the
/// path the token is persisted to between launches so a restart can restore
/// the session without re-authenticating.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    token: Option<String>,
    session_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("EVORG_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let app = AppConfig::builder()
            .server_url(server_url)
            .build()
            .unwrap_or_default();
        let session_path = dirs::config_dir().map(|dir| dir.join("evorg").join("session.toml"));
        let mut config = Self {
            app,
            token: None,
            session_path,
        };
        config.restore_session();
        config
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration without session persistence (tests, tooling).
    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self {
            app,
            token: None,
            session_path: None,
        })
    }

    /// Set the session token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the session token
    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    /// Clear the token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Override the session file location.
    pub fn set_session_path(&mut self, path: Option<PathBuf>) {
        self.session_path = path;
    }

    /// Load a previously persisted token, if any.
    pub fn restore_session(&mut self) {
        let Some(path) = self.session_path.clone() else {
            return;
        };
        match read_session_file(&path) {
            Ok(Some(token)) => {
                tracing::debug!("restored persisted session token");
                self.token = Some(token);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("failed to restore session file: {}", e),
        }
    }

    /// Persist the current token, or remove the session file when there is
    /// no token. Failures are logged; persistence is best effort.
    pub fn persist_session(&self) {
        let Some(path) = self.session_path.as_deref() else {
            return;
        };
        let result = match self.token.as_ref() {
            Some(token) => write_session_file(path, token),
            None => remove_session_file(path),
        };
        if let Err(e) = result {
            tracing::warn!("failed to persist session file: {}", e);
        }
    }
}

fn read_session_file(path: &Path) -> Result<Option<String>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let session: SessionFile = toml::from_str(&contents).map_err(|e| e.to_string())?;
    Ok(Some(session.token))
}

fn write_session_file(path: &Path, token: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    let session = SessionFile {
        token: token.to_string(),
    };
    let contents = toml::to_string(&session).map_err(|e| e.to_string())?;
    fs::write(path, contents).map_err(|e| e.to_string())
}

fn remove_session_file(path: &Path) -> Result<(), String> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    fn test_config() -> Config {
        Config::with_builder(
            AppConfig::builder().server_url("http://127.0.0.1:3000".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_api_url() {
        let config = test_config();
        let url = config.api_url("/api/auth/signin");
        assert_eq!(url, "http://127.0.0.1:3000/api/auth/signin");
    }

    #[test]
    fn test_set_and_clear_token() {
        let mut config = test_config();
        config.set_token(Some("test_token".to_string()));
        assert_eq!(config.get_token(), Some(&"test_token".to_string()));
        config.clear_token();
        assert!(config.get_token().is_none());
    }

    #[test]
    fn test_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let mut config = test_config();
        config.set_session_path(Some(path.clone()));
        config.set_token(Some("persisted".to_string()));
        config.persist_session();

        let mut restored = test_config();
        restored.set_session_path(Some(path.clone()));
        restored.restore_session();
        assert_eq!(restored.get_token(), Some(&"persisted".to_string()));

        // Clearing the token removes the file on the next persist.
        config.clear_token();
        config.persist_session();
        assert!(!path.exists());
    }

    #[test]
    fn test_restore_without_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config();
        config.set_session_path(Some(dir.path().join("missing.toml")));
        config.restore_session();
        assert!(config.get_token().is_none());
    }
}
