//! Error types for the Polygon REST layer.

use thiserror::Error;

/// A specialized `Result` type for REST operations.
pub type RestResult<T> = Result<T, RestError>;

/// The error type for REST layer failures.
///
/// `Display` output is written to be forwarded to callers as-is. In
/// particular, [`RestError::Status`] displays the upstream response body
/// verbatim, which is where Polygon puts its error detail.
#[derive(Error, Debug)]
pub enum RestError {
    /// A required parameter was absent or empty.
    #[error("missing required parameter: {name}")]
    MissingParameter {
        /// Name of the parameter as the endpoint expects it.
        name: &'static str,
    },

    /// The HTTP request could not be completed.
    #[error("request failed")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("{body}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Response body as text.
        body: String,
    },

    /// The response body was not valid UTF-8.
    #[error("response body is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    /// The response body was not valid JSON, or a request could not be
    /// rendered as JSON.
    #[error("response body is not valid JSON")]
    Json(#[from] serde_json::Error),
}

impl RestError {
    /// Creates a missing-parameter error.
    #[must_use]
    pub fn missing_parameter(name: &'static str) -> Self {
        Self::MissingParameter { name }
    }

    /// Creates an error from a non-success upstream response.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// The HTTP status code, if this error came from an upstream response.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_display() {
        let err = RestError::missing_parameter("ticker");
        assert_eq!(err.to_string(), "missing required parameter: ticker");
    }

    #[test]
    fn test_status_displays_body_verbatim() {
        let err = RestError::status(401, r#"{"status":"ERROR","message":"Unknown API Key"}"#);
        assert_eq!(
            err.to_string(),
            r#"{"status":"ERROR","message":"Unknown API Key"}"#
        );
        assert_eq!(err.status_code(), Some(401));
    }

    #[test]
    fn test_decode_errors_have_distinct_messages() {
        let utf8 = std::str::from_utf8(&[0xff, 0xfe]).unwrap_err();
        assert!(RestError::from(utf8).to_string().contains("UTF-8"));

        let json = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(RestError::from(json).to_string().contains("JSON"));

        let utf8 = std::str::from_utf8(&[0xff]).unwrap_err();
        assert_eq!(RestError::from(utf8).status_code(), None);
    }
}
