//! Atlas client error types.

use crate::domain::InvalidPoint;

/// Errors that can occur when calling the Atlas API.
///
/// Every failed call returns exactly one of these variants; the client
/// never retries silently and never returns a partially-populated
/// response.
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    /// HTTP transport failed (connection refused, DNS failure, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid or missing API key (HTTP 401/403)
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// The requested resource does not exist (HTTP 404)
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Parameters rejected before the request was sent, by the server
    /// (HTTP 400/422), or a response body that does not match the
    /// documented shape. `body` carries a snippet of the offending
    /// response, when there is one.
    #[error("validation error: {message}")]
    Validation {
        message: String,
        body: Option<String>,
    },

    /// Rate limited by the Atlas API (HTTP 429)
    #[error("rate limited by the Atlas API")]
    RateLimited,

    /// Any other non-2xx response
    #[error("API error {status}: {message}")]
    Service { status: u16, message: String },
}

impl AtlasError {
    /// Build a client-side validation error (no response body involved).
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        AtlasError::Validation {
            message: message.into(),
            body: None,
        }
    }
}

impl From<InvalidPoint> for AtlasError {
    fn from(err: InvalidPoint) -> Self {
        AtlasError::invalid(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AtlasError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized (invalid API key)");

        let err = AtlasError::Service {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = AtlasError::NotFound {
            message: "city not covered".into(),
        };
        assert_eq!(err.to_string(), "not found: city not covered");
    }

    #[test]
    fn validation_keeps_body_snippet() {
        let err = AtlasError::Validation {
            message: "missing field `city`".into(),
            body: Some("{\"request\":{}}".into()),
        };
        assert!(err.to_string().contains("missing field `city`"));
        match err {
            AtlasError::Validation { body, .. } => assert!(body.unwrap().contains("request")),
            _ => unreachable!(),
        }
    }

    #[test]
    fn invalid_point_maps_to_validation() {
        let err: AtlasError = crate::domain::Point::new(91.0, 0.0).unwrap_err().into();
        assert!(matches!(err, AtlasError::Validation { .. }));
    }
}
