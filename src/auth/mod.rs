//! Credential resolution for the remote API.

mod credential;
mod environment;

pub use credential::Credential;
pub use environment::{DEFAULT_ENV_VAR, EnvironmentProvider};
