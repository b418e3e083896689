//! Custom error types for code-answer
//!
//! Uses thiserror for ergonomic error definitions with automatic
//! Display and Error trait implementations.

use thiserror::Error;

/// Application-specific errors for code-answer
#[derive(Error, Debug)]
pub enum AnswerError {
    /// Could not reach the remote host at all
    #[error("{url}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Remote host answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// Any other transport failure while requesting a page
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A URL could not be parsed or built
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A CSS selector failed to parse
    #[error("Selector error: {0}")]
    Selector(String),

    /// The question link pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Answer count outside the accepted range
    #[error("Invalid answer count: {0}. Must be between 1 and 10")]
    InvalidCount(String),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnswerError {
    /// Whether the error came from an HTTP error status rather than transport
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AnswerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = AnswerError::Status {
            url: "https://example.com".to_string(),
            status: 429,
        };
        assert!(err.is_status());
        assert_eq!(err.to_string(), "HTTP 429 from https://example.com");
    }

    #[test]
    fn test_invalid_count_display() {
        let err = AnswerError::InvalidCount("11".to_string());
        assert!(!err.is_status());
        assert!(err.to_string().contains("between 1 and 10"));
    }
}
