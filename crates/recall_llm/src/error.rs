//! Error types for recall operations.

use thiserror::Error;

/// Errors surfaced by configuration, transports and assistant operations.
///
/// Malformed partial data (unparseable stream lines, unparseable flashcard
/// JSON) never shows up here: it is skipped by the reader and extractor.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing API key, unknown backend name or invalid endpoint.
    #[error("config error: {0}")]
    Config(String),

    /// Backend answered with a non-2xx status.
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Backend reported an error inside a successful response stream.
    #[error("backend error mid-stream: {0}")]
    Stream(String),

    /// Network or transport failure before a status was available.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A successful response body that is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for failures that happened while talking to a backend.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Stream(_) | Self::Request(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = Error::config("GEMINI_API_KEY not set");
        assert_eq!(err.to_string(), "config error: GEMINI_API_KEY not set");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_status_error_carries_code_and_body() {
        let err = Error::Status {
            status: 503,
            body: "model \"llama3.2\" not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("model \"llama3.2\" not found"));
        assert!(err.is_transport());
    }

    #[test]
    fn test_stream_error_is_transport() {
        let err = Error::Stream("model runner has unexpectedly stopped".to_string());
        assert!(err.to_string().contains("unexpectedly stopped"));
        assert!(err.is_transport());
    }

    #[test]
    fn test_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_err);
        assert!(matches!(err, Error::Json(_)));
    }
}
