use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Error envelope returned by the service in place of a normal payload
/// whenever the HTTP status is outside the success range.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// Echo of the request path that failed
    pub request: String,

    /// Human-readable error message
    pub error: String,

    /// Optional numeric error code
    #[serde(default)]
    pub code: Option<i32>,
}

/// Status-code category of a service error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    /// Any other non-success status (e.g. 5xx). The service does not
    /// distinguish further, so neither do we.
    Other,
}

impl ServiceErrorKind {
    /// Map an HTTP status code to its error category
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ServiceErrorKind::BadRequest,
            401 => ServiceErrorKind::Unauthorized,
            403 => ServiceErrorKind::Forbidden,
            404 => ServiceErrorKind::NotFound,
            _ => ServiceErrorKind::Other,
        }
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServiceErrorKind::BadRequest => "bad request",
            ServiceErrorKind::Unauthorized => "unauthorized",
            ServiceErrorKind::Forbidden => "forbidden",
            ServiceErrorKind::NotFound => "not found",
            ServiceErrorKind::Other => "service error",
        };
        f.write_str(s)
    }
}

/// Main error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Dispatch was attempted before authentication populated the transport
    #[error("invalid client: no authenticated transport configured")]
    InvalidClient,

    /// Error reported by the service through its error envelope
    #[error("{kind} (HTTP {status}): {message} [{request}]")]
    Service {
        kind: ServiceErrorKind,
        status: u16,
        request: String,
        message: String,
        code: Option<i32>,
    },

    /// Non-success response whose body did not parse as an error envelope
    #[error("HTTP {status} with malformed error body: {body}")]
    MalformedResponse { status: u16, body: String },

    /// Successful response whose body did not decode into the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request building error
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// HTTP transport error (DNS, connect, timeout, TLS)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Local file missing or unreadable during multipart upload construction
    #[error("upload file error: {0}")]
    Upload(#[source] std::io::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Build a classified service error from a parsed envelope
    pub fn from_envelope(status: u16, envelope: ErrorEnvelope) -> Self {
        Error::Service {
            kind: ServiceErrorKind::from_status(status),
            status,
            request: envelope.request,
            message: envelope.error,
            code: envelope.code,
        }
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Service {
                kind: ServiceErrorKind::NotFound,
                ..
            }
        )
    }

    /// Check if this error is an authorization failure (401)
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Error::Service {
                kind: ServiceErrorKind::Unauthorized,
                ..
            }
        )
    }

    /// Get the HTTP status code if the service answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } => Some(*status),
            Error::MalformedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ServiceErrorKind::from_status(400), ServiceErrorKind::BadRequest);
        assert_eq!(ServiceErrorKind::from_status(401), ServiceErrorKind::Unauthorized);
        assert_eq!(ServiceErrorKind::from_status(403), ServiceErrorKind::Forbidden);
        assert_eq!(ServiceErrorKind::from_status(404), ServiceErrorKind::NotFound);
        assert_eq!(ServiceErrorKind::from_status(500), ServiceErrorKind::Other);
        assert_eq!(ServiceErrorKind::from_status(502), ServiceErrorKind::Other);
    }

    #[test]
    fn test_envelope_deserialization() {
        let json = r#"{"request": "/statuses/show.json", "error": "No status found with that ID."}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.request, "/statuses/show.json");
        assert_eq!(envelope.error, "No status found with that ID.");
        assert!(envelope.code.is_none());
    }

    #[test]
    fn test_envelope_with_code() {
        let json = r#"{"request": "/users/show.json", "error": "Not authorized", "code": 179}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.code, Some(179));
    }

    #[test]
    fn test_error_from_envelope() {
        let envelope = ErrorEnvelope {
            request: "/statuses/show.json".to_string(),
            error: "No status found with that ID.".to_string(),
            code: None,
        };

        let error = Error::from_envelope(404, envelope);
        assert!(error.is_not_found());
        assert_eq!(error.status_code(), Some(404));
        assert!(error.to_string().contains("No status found"));
    }

    #[test]
    fn test_error_unauthorized() {
        let envelope = ErrorEnvelope {
            request: "/account/verify_credentials.json".to_string(),
            error: "Could not authenticate you.".to_string(),
            code: None,
        };

        let error = Error::from_envelope(401, envelope);
        assert!(error.is_unauthorized());
        assert!(!error.is_not_found());
    }
}
