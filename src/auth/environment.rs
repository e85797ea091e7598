//! Environment variable credential provider.

use super::Credential;
use crate::config::ConfigError;

pub const DEFAULT_ENV_VAR: &str = "OPENAI_API_KEY";

/// Provider that reads the API key from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvironmentProvider {
    env_var: String,
}

impl EnvironmentProvider {
    /// Create provider using default OPENAI_API_KEY.
    pub fn new() -> Self {
        Self {
            env_var: DEFAULT_ENV_VAR.to_string(),
        }
    }

    /// Create provider with custom environment variable.
    pub fn from_var(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
        }
    }

    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    pub fn resolve(&self) -> Result<Credential, ConfigError> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolve through an arbitrary lookup instead of the process environment.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<Credential, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(&self.env_var)
            .map(Credential::api_key)
            .filter(|cred| !cred.is_empty())
            .ok_or_else(|| ConfigError::MissingCredential {
                var: self.env_var.clone(),
            })
    }
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}
