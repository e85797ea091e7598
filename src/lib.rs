//! # vector-store-mcp
//!
//! MCP server that turns a local directory into a hosted vector store and
//! answers similarity queries against it.
//!
//! Embedding, chunking and search run on the remote service. This crate
//! enumerates local files, uploads them through the Files API, groups them
//! into a vector store, and skips the upload entirely when an existing store
//! already holds the same set of file names.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vector_store_mcp::{BuildRequest, Client, Config, IndexService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vector_store_mcp::Error> {
//!     let config = Config::from_env()?;
//!     let client = Client::new(config.client.clone())?;
//!     let service = IndexService::new(Arc::new(client), config.defaults);
//!
//!     let outcome = service.build(BuildRequest::new("./docs")).await;
//!     println!("{}", outcome.message);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod auth;
pub mod client;
pub mod config;
pub mod index;
pub mod observability;
pub mod server;

pub use auth::{Credential, EnvironmentProvider};
pub use client::{
    Client, ClientBuilder, ClientConfig, File, FilesClient, SearchHit, SearchRequest, VectorStore,
    VectorStoreFile, VectorStoresClient,
};
pub use config::{Config, ConfigError, ToolDefaults};
pub use index::{
    BuildOutcome, BuildRequest, BuildStats, IndexService, ListOutcome, LocalFileSet, QueryHit,
    QueryOutcome, QueryRequest, RemoteIndexApi, Status, StoreSummary,
};
pub use server::VectorStoreServer;

/// Error type for vector-store-mcp operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// API returned an error response.
    #[error("API error (HTTP {status}): {message}", status = status.map(|s| s.to_string()).unwrap_or_else(|| "unknown".into()))]
    Api {
        message: String,
        status: Option<u16>,
        error_type: Option<String>,
    },

    /// Authentication failed or no credential is available.
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// Network connectivity or request failed.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Glob pattern could not be compiled.
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// API rate limit exceeded.
    #[error("Rate limit exceeded{}", match retry_after {
        Some(d) => format!(", retry in {:.0}s", d.as_secs_f64()),
        None => String::new(),
    })]
    RateLimit {
        retry_after: Option<std::time::Duration>,
    },

    /// Request parameters are invalid.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// MCP transport failed.
    #[error("MCP error: {0}")]
    Mcp(String),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The addressed remote resource does not exist (404)
    NotFound,
    /// Authentication or authorization failures (401, 403)
    Authorization,
    /// Configuration or invalid input
    Configuration,
    /// Network, rate limit, or server errors that may succeed on retry
    Transient,
    /// Remote rejections that will fail the same way again
    Permanent,
    /// Local failures (IO, JSON, transport)
    Internal,
}

impl Error {
    pub fn auth(message: impl Into<String>) -> Self {
        Error::Auth {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Api {
                status: Some(404), ..
            } => ErrorCategory::NotFound,

            Error::Auth { .. }
            | Error::Api {
                status: Some(401 | 403),
                ..
            } => ErrorCategory::Authorization,

            Error::Config(_) | Error::Pattern(_) | Error::InvalidRequest(_) => {
                ErrorCategory::Configuration
            }

            Error::Network(_) | Error::RateLimit { .. } => ErrorCategory::Transient,
            Error::Api {
                status: Some(408 | 409 | 500..=599),
                ..
            } => ErrorCategory::Transient,

            Error::Api { .. } => ErrorCategory::Permanent,

            Error::Io(_) | Error::Json(_) | Error::Mcp(_) => ErrorCategory::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    pub fn is_authorization_error(&self) -> bool {
        self.category() == ErrorCategory::Authorization
    }

    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Transient
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => *status,
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn retry_after(&self) -> Option<std::time::Duration> {
        match self {
            Error::RateLimit { retry_after } => *retry_after,
            _ => None,
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::MissingCredential { var } => {
                Error::auth(format!("{} not set", var))
            }
            config::ConfigError::InvalidValue { key, message } => {
                Error::Config(format!("Invalid value for {}: {}", key, message))
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
