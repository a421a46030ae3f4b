//! Error types for rapid_summarizer
//!
//! Empty input is not an error: it is answered with a sentinel summary.
//! Everything below is surfaced to the caller as a typed error.

use thiserror::Error;

/// Errors produced while configuring or running the summarizer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizeError {
    /// The configuration failed validation (or could not be parsed)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The input could not be decoded into text
    #[error("tokenization failed: {0}")]
    Tokenization(String),

    /// An unexpected numeric failure inside the ranking pipeline
    #[error("internal computation error: {0}")]
    Computation(String),
}

impl SummarizeError {
    /// Create an invalid-configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a tokenization error
    pub fn tokenization(msg: impl Into<String>) -> Self {
        Self::Tokenization(msg.into())
    }

    /// Create an internal computation error
    pub fn computation(msg: impl Into<String>) -> Self {
        Self::Computation(msg.into())
    }

    /// Short, stable identifier for the error class (used in CLI/JSON output)
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "invalid_config",
            Self::Tokenization(_) => "tokenization",
            Self::Computation(_) => "computation",
        }
    }
}

impl From<std::str::Utf8Error> for SummarizeError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::tokenization(format!(
            "input is not valid UTF-8 (first invalid byte at offset {})",
            err.valid_up_to()
        ))
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_config(err.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizeError>;
