//! Remote error bodies.

use std::time::Duration;

use serde::Deserialize;

use crate::Error;

/// Error body returned by the API: `{"error": {"message", "type", "code"}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default)]
    pub param: Option<String>,
}

impl ErrorResponse {
    pub fn into_error(self, status: u16) -> Error {
        Error::Api {
            message: self.error.message,
            status: Some(status),
            error_type: self.error.error_type,
        }
    }
}

/// Convert a non-success response into an [`Error`].
///
/// Undecodable bodies keep their raw text as the message.
pub(crate) async fn from_response(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();

    if status == 429 {
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        return Error::RateLimit { retry_after };
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return Error::Network(e),
    };
    parse_error_body(status, &body)
}

pub(crate) fn parse_error_body(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => parsed.into_error(status),
        Err(_) => Error::Api {
            message: if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body.trim().to_string()
            },
            status: Some(status),
            error_type: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_structured_error() {
        let body = r#"{"error": {"message": "No vector store found with id 'vs_x'.", "type": "invalid_request_error", "param": null, "code": null}}"#;
        let err = parse_error_body(404, body);
        match err {
            Error::Api {
                message,
                status,
                error_type,
            } => {
                assert!(message.contains("vs_x"));
                assert_eq!(status, Some(404));
                assert_eq!(error_type.as_deref(), Some("invalid_request_error"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_raw_error() {
        let err = parse_error_body(502, "Bad Gateway");
        assert!(err.is_retryable());
        assert!(err.to_string().contains("Bad Gateway"));

        let err = parse_error_body(500, "");
        assert!(err.to_string().contains("HTTP 500"));
    }
}
