//! Connection settings for the analysis API, from defaults or the environment.

use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "TRIZ_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "TRIZ_API_TIMEOUT_SECS";
pub const ENV_TOKEN: &str = "TRIZ_API_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Sent as a bearer token when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL '{0}': expected an http(s) URL with a host")]
    InvalidBaseUrl(String),
    #[error("invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

impl ClientConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_BASE_URL) {
            config = config.with_base_url(url)?;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidTimeout(raw))?;
            config = config.with_timeout_secs(secs);
        }
        config.token = get(ENV_TOKEN);
        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let parsed = parse_base_url(&url)?;
        self.base_url = parsed.as_str().trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The base URL, parsed, with a trailing slash so paths join below it.
    pub fn base(&self) -> Result<Url, ConfigError> {
        parse_base_url(&self.base_url)
    }

    /// Absolute URL for an API path such as `/triz/principles/`.
    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        join_endpoint(&self.base()?, path)
    }
}

pub(crate) fn join_endpoint(base: &Url, path: &str) -> Result<Url, ConfigError> {
    base.join(path.trim_start_matches('/'))
        .map_err(|_| ConfigError::InvalidBaseUrl(format!("{base}{path}")))
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = || ConfigError::InvalidBaseUrl(raw.to_string());
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().map_or(true, str::is_empty) {
        return Err(invalid());
    }
    // The parser reads `http:host` and `http:///host` as `http://host/`.
    let authority = trimmed.get(url.scheme().len()..).unwrap_or_default();
    match authority.strip_prefix("://") {
        Some(rest) if !rest.starts_with('/') => {}
        _ => return Err(invalid()),
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid());
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
