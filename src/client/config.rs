//! Client configuration.

use std::time::Duration;

use crate::auth::{Credential, EnvironmentProvider};
use crate::{Error, Result};

use super::Client;

/// Default API root, including the version segment.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Bearer credential.
    pub credential: Credential,
    /// Base URL for API requests, without trailing slash.
    pub base_url: String,
    /// Sent as `OpenAI-Organization` when set.
    pub organization: Option<String>,
    /// Sent as `OpenAI-Project` when set.
    pub project: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
            organization: None,
            project: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Builder for [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    credential: Option<Credential>,
    base_url: Option<String>,
    organization: Option<String>,
    project: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Set API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credential = Some(Credential::api_key(key));
        self
    }

    /// Read the API key from `OPENAI_API_KEY`.
    pub fn from_env(mut self) -> Result<Self> {
        self.credential = Some(EnvironmentProvider::new().resolve()?);
        Ok(self)
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn organization(mut self, org: impl Into<String>) -> Self {
        self.organization = Some(org.into());
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build_config(self) -> Result<ClientConfig> {
        let credential = self
            .credential
            .ok_or_else(|| Error::auth("no API key configured"))?;
        if credential.is_empty() {
            return Err(Error::auth("API key is empty"));
        }

        let mut config = ClientConfig::new(credential);
        if let Some(url) = self.base_url {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        config.organization = self.organization;
        config.project = self.project;
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        Ok(config)
    }

    pub fn build(self) -> Result<Client> {
        Client::new(self.build_config()?)
    }
}
