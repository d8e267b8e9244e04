//! Configuration module for the ad launcher
//!
//! Runtime settings come from environment variables with defaults from
//! utils/constants.rs. Credentials come from a local JSON file.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::{
    mask_secret, AD_ACCOUNT_PREFIX, DEFAULT_CREDENTIALS_PATH, DEFAULT_GRAPH_API_VERSION,
    DEFAULT_GRAPH_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, ENV_CREDENTIALS_PATH,
    ENV_GRAPH_API_VERSION, ENV_GRAPH_BASE_URL, ENV_REQUEST_TIMEOUT_SECS,
};

/// Runtime configuration for one launch
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Path of the credentials JSON file
    pub credentials_path: PathBuf,
    /// Graph API host, without trailing slash
    pub graph_base_url: String,
    /// Graph API version segment (e.g. `v21.0`)
    pub api_version: String,
    /// Timeout applied to each create request
    pub request_timeout: Duration,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            graph_base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            api_version: DEFAULT_GRAPH_API_VERSION.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl LauncherConfig {
    /// Build config from environment, falling back to defaults
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let credentials_path = std::env::var(ENV_CREDENTIALS_PATH)
            .map(PathBuf::from)
            .unwrap_or(defaults.credentials_path);

        let graph_base_url = std::env::var(ENV_GRAPH_BASE_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.graph_base_url);
        if !graph_base_url.starts_with("http://") && !graph_base_url.starts_with("https://") {
            return Err(AppError::invalid_config(format!(
                "{} must be an http(s) URL, got {:?}",
                ENV_GRAPH_BASE_URL, graph_base_url
            )));
        }

        let api_version = std::env::var(ENV_GRAPH_API_VERSION).unwrap_or(defaults.api_version);

        let request_timeout = match std::env::var(ENV_REQUEST_TIMEOUT_SECS) {
            Ok(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or_else(|| {
                    AppError::invalid_config(format!(
                        "{} must be a positive integer, got {:?}",
                        ENV_REQUEST_TIMEOUT_SECS, raw
                    ))
                })?,
            Err(_) => defaults.request_timeout,
        };

        Ok(Self {
            credentials_path,
            graph_base_url,
            api_version,
            request_timeout,
        })
    }
}

/// Ad account node id, always in `act_<number>` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdAccountId(String);

impl AdAccountId {
    /// Accepts both `act_123` and bare `123`
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        let digits = raw.strip_prefix(AD_ACCOUNT_PREFIX).unwrap_or(raw);
        if digits.is_empty() {
            return Err(AppError::invalid_credentials("ad_account_id is empty"));
        }
        Ok(Self(format!("{}{}", AD_ACCOUNT_PREFIX, digits)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdAccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
struct CredentialsFile {
    access_token: String,
    ad_account_id: String,
}

/// API credentials. The token is never logged.
#[derive(Clone)]
pub struct Credentials {
    pub access_token: String,
    pub ad_account_id: AdAccountId,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &mask_secret(&self.access_token))
            .field("ad_account_id", &self.ad_account_id)
            .finish()
    }
}

impl Credentials {
    /// Read and parse the credentials file
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::missing_credentials(path, e))?;
        let credentials = Self::from_json(&raw)?;
        info!(
            "🔑 Credentials loaded from {} (account {}, token hidden)",
            path.display(),
            credentials.ad_account_id
        );
        Ok(credentials)
    }

    /// Parse credentials from the file's JSON text
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let file: CredentialsFile = serde_json::from_str(raw)
            .map_err(|e| AppError::invalid_credentials(format!("Malformed credentials file: {}", e)))?;

        let access_token = file.access_token.trim().to_string();
        if access_token.is_empty() {
            return Err(AppError::invalid_credentials("access_token is empty"));
        }

        Ok(Self {
            access_token,
            ad_account_id: AdAccountId::parse(&file.ad_account_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;

    #[test]
    fn test_account_id_prefix_added_once() {
        assert_eq!(AdAccountId::parse("123456").unwrap().as_str(), "act_123456");
        assert_eq!(AdAccountId::parse("act_123456").unwrap().as_str(), "act_123456");
        assert_eq!(AdAccountId::parse(" act_9 ").unwrap().as_str(), "act_9");
    }

    #[test]
    fn test_account_id_empty() {
        assert!(AdAccountId::parse("").is_err());
        assert!(AdAccountId::parse("act_").is_err());
    }

    #[test]
    fn test_credentials_from_json() {
        let creds =
            Credentials::from_json(r#"{"access_token": "EAAGtoken1234", "ad_account_id": "42"}"#)
                .unwrap();
        assert_eq!(creds.access_token, "EAAGtoken1234");
        assert_eq!(creds.ad_account_id.as_str(), "act_42");
    }

    #[test]
    fn test_credentials_missing_field() {
        let err = Credentials::from_json(r#"{"access_token": "abc"}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidCredentials);
        assert!(err.message.contains("ad_account_id"));
    }

    #[test]
    fn test_credentials_malformed_json() {
        let err = Credentials::from_json("not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidCredentials);
    }

    #[test]
    fn test_credentials_empty_token() {
        let err = Credentials::from_json(r#"{"access_token": " ", "ad_account_id": "1"}"#)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidCredentials);
    }

    #[test]
    fn test_credentials_debug_masks_token() {
        let creds = Credentials::from_json(
            r#"{"access_token": "EAAGsupersecret9876", "ad_account_id": "act_1"}"#,
        )
        .unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("****9876"));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("ads_launcher_does_not_exist.json");
        let err = Credentials::load(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissingCredentials);
    }

    #[test]
    fn test_default_config() {
        let config = LauncherConfig::default();
        assert_eq!(config.credentials_path, PathBuf::from("config/credentials.json"));
        assert_eq!(config.graph_base_url, "https://graph.facebook.com");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
