//! Environment variable lookup.
//!
//! Environment variables are read, never written: mutating the process
//! environment is not thread-safe, so tests build an [`EnvSource`] from
//! explicit pairs instead.

use std::collections::HashMap;
use std::str::FromStr;

use super::{ConfigError, ConfigResult};

#[derive(Debug, Clone)]
pub enum EnvSource {
    /// The live process environment.
    Process,
    /// A fixed set of variables.
    Fixed(HashMap<String, String>),
}

impl EnvSource {
    pub fn process() -> Self {
        Self::Process
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self::Fixed(pairs.into_iter().collect())
    }

    /// Get a variable; empty values count as unset.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match self {
            Self::Process => std::env::var(key).ok(),
            Self::Fixed(vars) => vars.get(key).cloned(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Get the first set variable among fallback keys.
    pub fn first_of(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.get(key))
    }

    pub fn parse<T>(&self, key: &str) -> ConfigResult<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|e: T::Err| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: e.to_string(),
                }),
        }
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::process()
    }
}
