//! Server configuration loaded from the environment.
//!
//! ```rust,no_run
//! use vector_store_mcp::Config;
//!
//! # fn example() -> Result<(), vector_store_mcp::ConfigError> {
//! dotenvy::dotenv().ok();
//! let config = Config::from_env()?;
//! println!("{}", config.client.base_url);
//! # Ok(())
//! # }
//! ```

pub mod env;

use std::time::Duration;

use thiserror::Error;

use crate::auth::EnvironmentProvider;
use crate::client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use env::EnvSource;

pub const DEFAULT_STORE_NAME: &str = "local_knowledge";
pub const DEFAULT_FILE_PATTERNS: &[&str] = &["*.txt", "*.pdf", "*.docx", "*.md"];
pub const DEFAULT_MAX_RESULTS: u32 = 5;
/// Upper bound the search endpoint accepts for `max_num_results`.
pub const MAX_RESULTS_LIMIT: u32 = 50;

const BASE_URL_VARS: &[&str] = &["OPENAI_BASE_URL", "OPENAI_API_BASE"];
const ORGANIZATION_VARS: &[&str] = &["OPENAI_ORG_ID", "OPENAI_ORGANIZATION"];
const PROJECT_VARS: &[&str] = &["OPENAI_PROJECT_ID"];
const TIMEOUT_VAR: &str = "VECTOR_STORE_MCP_TIMEOUT_SECS";
const DEFAULT_STORE_VAR: &str = "VECTOR_STORE_MCP_DEFAULT_STORE";
const MAX_RESULTS_VAR: &str = "VECTOR_STORE_MCP_MAX_RESULTS";

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required credential variable is unset or blank
    #[error("Missing credential: {var} is not set")]
    MissingCredential {
        /// Variable that was consulted
        var: String,
    },

    /// Invalid configuration value
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The key with invalid value
        key: String,
        /// Error message
        message: String,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Defaults applied when a tool call omits an optional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefaults {
    pub store_name: String,
    pub file_patterns: Vec<String>,
    pub max_results: u32,
}

impl Default for ToolDefaults {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            file_patterns: DEFAULT_FILE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Complete process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub defaults: ToolDefaults,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_source(&EnvSource::process())
    }

    pub fn from_source(source: &EnvSource) -> ConfigResult<Self> {
        let credential = EnvironmentProvider::new().resolve_with(|key| source.get(key))?;

        let mut client = ClientConfig::new(credential);
        client.base_url = source
            .first_of(BASE_URL_VARS)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        client.organization = source.first_of(ORGANIZATION_VARS);
        client.project = source.first_of(PROJECT_VARS);
        client.timeout = source
            .parse::<u64>(TIMEOUT_VAR)?
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        let mut defaults = ToolDefaults::default();
        if let Some(name) = source.get(DEFAULT_STORE_VAR) {
            defaults.store_name = name;
        }
        if let Some(max) = source.parse::<u32>(MAX_RESULTS_VAR)? {
            if max == 0 || max > MAX_RESULTS_LIMIT {
                return Err(ConfigError::InvalidValue {
                    key: MAX_RESULTS_VAR.to_string(),
                    message: format!("must be between 1 and {}", MAX_RESULTS_LIMIT),
                });
            }
            defaults.max_results = max;
        }

        Ok(Self { client, defaults })
    }
}
