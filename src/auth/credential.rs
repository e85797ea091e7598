//! Credential types.

use secrecy::{ExposeSecret, SecretString};

/// Bearer API key for the remote API.
///
/// The key is zeroized on drop and never printed by `Debug`.
#[derive(Clone, Debug)]
pub struct Credential {
    api_key: SecretString,
}

impl Credential {
    /// Create API Key credential.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(key.into()),
        }
    }

    pub fn expose(&self) -> &str {
        self.api_key.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.api_key.expose_secret().trim().is_empty()
    }

    /// Header carrying this credential on every request.
    pub fn auth_header(&self) -> (&'static str, String) {
        (
            "Authorization",
            format!("Bearer {}", self.api_key.expose_secret()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header() {
        let cred = Credential::api_key("sk-test");
        let (name, value) = cred.auth_header();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer sk-test");
    }

    #[test]
    fn test_debug_is_redacted() {
        let cred = Credential::api_key("sk-very-secret");
        let debug = format!("{:?}", cred);
        assert!(!debug.contains("sk-very-secret"));
    }

    #[test]
    fn test_blank_key_is_empty() {
        assert!(Credential::api_key("  ").is_empty());
        assert!(!Credential::api_key("sk").is_empty());
    }
}
