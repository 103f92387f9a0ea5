//! Provider configuration, built by the caller and handed to the client.

use std::time::Duration;

use thiserror::Error;

pub const API_KEY_ENV: &str = "MAILGUN_API_KEY";
pub const API_BASE_ENV: &str = "MAILGUN_API_BASE";
pub const DEFAULT_API_BASE: &str = "https://api.mailgun.net";
pub const EU_API_BASE: &str = "https://api.eu.mailgun.net";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Mailgun API key is missing; set MAILGUN_API_KEY or pass --api-key")]
    MissingApiKey,
    #[error("invalid API base URL '{0}': expected http:// or https://")]
    InvalidApiBase(String),
    #[error("HTTP client initialization failed: {source}")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },
}

impl ConfigError {
    pub(crate) fn http_client(source: reqwest::Error) -> Self {
        Self::HttpClient { source }
    }
}

/// Credentials and endpoint for the verification provider.
#[derive(Clone)]
pub struct ProviderConfig {
    api_key: String,
    api_base: String,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ProviderConfig {
    /// Builds a configuration against [`DEFAULT_API_BASE`]. A missing or
    /// blank key is rejected.
    pub fn new(api_key: Option<&str>) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        Ok(Self {
            api_key: api_key.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(60),
        })
    }

    pub fn with_api_base(mut self, api_base: &str) -> Result<Self, ConfigError> {
        let trimmed = api_base.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidApiBase(api_base.to_string()));
        }
        self.api_base = trimmed.to_string();
        Ok(self)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_key_is_rejected() {
        assert!(matches!(
            ProviderConfig::new(None),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            ProviderConfig::new(Some("   ")),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn key_is_trimmed_and_default_base_used() {
        let cfg = ProviderConfig::new(Some("  key-123 ")).unwrap();
        assert_eq!(cfg.api_key(), "key-123");
        assert_eq!(cfg.api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn api_base_trailing_slash_stripped() {
        let cfg = ProviderConfig::new(Some("k"))
            .unwrap()
            .with_api_base("https://api.eu.mailgun.net/")
            .unwrap();
        assert_eq!(cfg.api_base(), EU_API_BASE);
    }

    #[test]
    fn api_base_requires_scheme() {
        let err = ProviderConfig::new(Some("k"))
            .unwrap()
            .with_api_base("api.mailgun.net")
            .expect_err("scheme required");
        assert!(matches!(err, ConfigError::InvalidApiBase(_)));
    }

    #[test]
    fn debug_output_redacts_key() {
        let cfg = ProviderConfig::new(Some("secret-key")).unwrap();
        assert!(!format!("{cfg:?}").contains("secret-key"));
    }
}
