use esign_core::{EsignError, Result};

use crate::config::ClientConfig;

/// eSignLive API client handle: a `reqwest` client carrying the resolved
/// authentication headers on every request, plus the configuration it was
/// built from.
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Client for the default deployment (`us_11`, sandbox).
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key)?)
    }

    /// Wrap an already-resolved configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(config.headers().clone())
            .build()
            .map_err(|e| EsignError::Http(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &'static str {
        self.config.url()
    }

    /// Underlying HTTP client, for issuing requests against
    /// [`base_url`](Self::base_url).
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}
