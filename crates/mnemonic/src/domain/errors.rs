//! Domain Errors
//!
//! One error type per external call, plus the session-level wrapper.

use thiserror::Error;

/// Text shown in place of a verse when the lookup service answers non-2xx
pub const LOOKUP_FAILED_SENTINEL: &str = "Error: API request failed";

/// Verse lookup errors
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Request failed: {0}")]
    Transport(String),

    /// Display is the sentinel string on purpose; see `LookupFailurePolicy`.
    #[error("Error: API request failed")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Completion (prompt rewriting) errors
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Completion API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Completion API returned no choices")]
    NoChoices,
}

/// Image generation errors
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Image API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Image API returned no images")]
    NoImage,
}

/// Console I/O errors
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O error: {0}")]
    Io(String),

    #[error("Console input closed")]
    Closed,
}

/// Errors that can't be fixed at runtime, reported before any request is made
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing OpenAI API key")]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Anything that ends a session early
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Verse lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Prompt rewrite failed: {0}")]
    Rewrite(#[from] RewriteError),

    #[error(transparent)]
    Console(#[from] ConsoleError),
}

impl LookupError {
    pub fn is_status(&self) -> bool {
        matches!(self, LookupError::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_displays_sentinel() {
        let err = LookupError::Status {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), LOOKUP_FAILED_SENTINEL);
        assert!(err.is_status());
    }

    #[test]
    fn test_session_error_wraps_source() {
        let err: SessionError = RewriteError::NoChoices.into();
        assert_eq!(
            err.to_string(),
            "Prompt rewrite failed: Completion API returned no choices"
        );
    }
}
