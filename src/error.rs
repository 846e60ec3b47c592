//! Error types for the RevenueCat API client.
//!
//! Every failure of a call is reported as exactly one [`Error`] value. The
//! client never retries and never swallows a failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized `Result` type for RevenueCat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all RevenueCat API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The request body could not be encoded as JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Transport failure before a complete response was obtained
    /// (DNS, connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status of 400 or above.
    #[error("API error: status={status}, code={:?}, message={}", .error.code, .error.message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Decoded error payload
        error: ApiErrorBody,
    },

    /// The API answered with an error status, but its body was not a
    /// valid error payload.
    #[error("API error: status={status}, undecodable error body: {source}")]
    MalformedErrorBody {
        /// HTTP status code
        status: u16,
        /// Raw response body, lossily decoded as UTF-8
        body: String,
        /// Decoding failure
        #[source]
        source: serde_json::Error,
    },

    /// A successful response body did not match the expected shape.
    #[error("failed to deserialize response body: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error payload returned by the RevenueCat API.
///
/// v1 endpoints answer with `code` and `message`; v2 endpoints add
/// `object`, `type`, `param`, `doc_url` and `retryable`. Fields absent
/// from the payload decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Numeric error code (v1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Object discriminator, always `"error"` on v2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Error category (v2), e.g. `resource_missing`
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Offending parameter, if any (v2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Link to the documentation for this error (v2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    /// Whether the server considers the request safe to repeat (v2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

impl Error {
    /// HTTP status of the response, for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::MalformedErrorBody { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The decoded API error payload, if this is an [`Error::Api`].
    pub fn api_error(&self) -> Option<&ApiErrorBody> {
        match self {
            Error::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Returns `true` if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the server rejected the credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } | Error::MalformedErrorBody { status, .. } => {
                (400..500).contains(status)
            }
            Error::Serialization(_) | Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }

    /// Returns `true` if repeating the call could succeed.
    ///
    /// The client itself never retries; this only classifies the failure.
    /// An explicit `retryable` flag in the payload wins over the status.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(err) => err.is_timeout() || err.is_connect(),
            Error::Api { status, error } => error
                .retryable
                .unwrap_or(*status == 429 || *status >= 500),
            Error::MalformedErrorBody { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, body: serde_json::Value) -> Error {
        Error::Api {
            status,
            error: serde_json::from_value(body).unwrap(),
        }
    }

    #[test]
    fn test_decode_v1_error_body() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"code":7225,"message":"Invalid API key"}"#).unwrap();
        assert_eq!(body.code, Some(7225));
        assert_eq!(body.message, "Invalid API key");
        assert_eq!(body.error_type, None);
    }

    #[test]
    fn test_decode_v2_error_body() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{
                "object": "error",
                "type": "resource_missing",
                "param": "project_id",
                "message": "Project not found",
                "retryable": false,
                "doc_url": "https://errors.rev.cat/resource-missing"
            }"#,
        )
        .unwrap();
        assert_eq!(body.object.as_deref(), Some("error"));
        assert_eq!(body.error_type.as_deref(), Some("resource_missing"));
        assert_eq!(body.param.as_deref(), Some("project_id"));
        assert_eq!(body.retryable, Some(false));
        assert_eq!(body.code, None);
    }

    #[test]
    fn test_error_classification() {
        let not_found = api(404, serde_json::json!({"code": 404, "message": "not found"}));
        assert!(not_found.is_not_found());
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());
        assert_eq!(not_found.status(), Some(404));
        assert_eq!(not_found.api_error().unwrap().message, "not found");

        let unauthorized = api(401, serde_json::json!({"message": "bad key"}));
        assert!(unauthorized.is_auth_error());

        let unavailable = api(503, serde_json::json!({"message": "down"}));
        assert!(unavailable.is_server_error());
        assert!(unavailable.is_retryable());
    }

    #[test]
    fn test_retryable_flag_overrides_status() {
        let err = api(
            500,
            serde_json::json!({"message": "broken", "retryable": false}),
        );
        assert!(!err.is_retryable());

        let err = api(
            409,
            serde_json::json!({"message": "busy", "retryable": true}),
        );
        assert!(err.is_retryable());
    }

    #[test]
    fn test_local_errors_have_no_status() {
        let err = Error::Config("missing key".into());
        assert_eq!(err.status(), None);
        assert!(err.is_client_error());
        assert!(!err.is_retryable());
        assert!(err.api_error().is_none());
    }
}
