//! Error types for the parser client.

use thiserror::Error;

/// Result type for parse service operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// A failed submission to the parsing service.
///
/// The form treats every variant the same way ("submission failed"); the
/// split exists only so logs say what actually went wrong.
#[derive(Debug, Error)]
pub enum ParserError {
    /// Network error (connection failed, timeout, undecodable body)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the parse service
    #[error("Parse service returned {status}: {message}")]
    Api { status: u16, message: String },
}
