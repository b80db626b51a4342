use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::str::FromStr;
use tracing::debug;

use esign_core::{Environment, EsignError, RegionVersion, Result};

/// Environment used when the builder is not given one.
pub const DEFAULT_ENVIRONMENT: Environment = Environment::Sandbox;

/// Region/version used when the builder is not given one.
pub const DEFAULT_URL_VERSION: RegionVersion = RegionVersion::Us11;

/// Resolved client configuration: the authentication headers, the chosen
/// deployment, and its base URL.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    headers: HeaderMap,
    environment: Environment,
    url_version: RegionVersion,
    url: &'static str,
    api_key: String,
}

impl ClientConfig {
    /// Configuration for `api_key` against the default deployment
    /// (`us_11`, sandbox).
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            api_key: api_key.into(),
            environment: None,
            url_version: None,
        }
    }

    /// Headers attached to every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn url_version(&self) -> RegionVersion {
        self.url_version
    }

    /// Base URL of the resolved deployment. Empty for the two regions
    /// without a sandbox (`aus`, `eu`).
    pub fn url(&self) -> &'static str {
        self.url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Re-resolve the base URL for a different deployment without
    /// rebuilding the headers. Only the stored URL changes; the region and
    /// environment accessors keep reporting the construction inputs.
    pub fn resolve_url(
        &mut self,
        url_version: RegionVersion,
        environment: Environment,
    ) -> &'static str {
        self.url = url_version.endpoint(environment);
        debug!(region = %url_version, environment = %environment, url = self.url, "re-resolved base url");
        self.url
    }

    /// String-typed variant of [`resolve_url`](Self::resolve_url).
    /// Validates both identifiers the same way construction does.
    pub fn resolve_url_str(&mut self, url_version: &str, environment: &str) -> Result<&'static str> {
        let url_version = RegionVersion::from_str(url_version)?;
        let environment = Environment::from_str(environment)?;
        Ok(self.resolve_url(url_version, environment))
    }
}

/// Builder for [`ClientConfig`]. Region and environment arrive as raw
/// strings and are validated against the supported deployments at
/// [`build`](Self::build) time.
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    api_key: String,
    environment: Option<String>,
    url_version: Option<String>,
}

impl ClientConfigBuilder {
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn url_version(mut self, url_version: impl Into<String>) -> Self {
        self.url_version = Some(url_version.into());
        self
    }

    /// Validate the deployment identifiers and resolve the configuration.
    /// The region/version is checked before the environment.
    pub fn build(self) -> Result<ClientConfig> {
        let url_version = match self.url_version {
            Some(v) => RegionVersion::from_str(&v)?,
            None => DEFAULT_URL_VERSION,
        };
        let environment = match self.environment {
            Some(e) => Environment::from_str(&e)?,
            None => DEFAULT_ENVIRONMENT,
        };

        let headers = auth_headers(&self.api_key)?;
        let url = url_version.endpoint(environment);
        debug!(region = %url_version, environment = %environment, url, "resolved eSignLive endpoint");

        Ok(ClientConfig {
            headers,
            environment,
            url_version,
            url,
            api_key: self.api_key,
        })
    }
}

/// Fixed header set: JSON content type plus the `Authorization` scheme the
/// service expects.
///
/// The api key is embedded verbatim after the literal `Basic `: keys are
/// issued by the service already encoded, and the upstream contract does
/// not apply a further base64 pass.
fn auth_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let authorization = HeaderValue::from_str(&format!("Basic {api_key}"))
        .map_err(|e| EsignError::Header(e.to_string()))?;
    headers.insert(AUTHORIZATION, authorization);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_headers_contents() {
        let headers = auth_headers("ABC123").unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[AUTHORIZATION], "Basic ABC123");
    }

    #[test]
    fn test_auth_headers_rejects_control_bytes() {
        assert!(matches!(
            auth_headers("bad\nkey"),
            Err(EsignError::Header(_))
        ));
    }
}
