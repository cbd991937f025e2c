//! Error types for Squaregram operations.
//!
//! This module provides the main error type [`SquaregramError`]. Rendering
//! itself never validates its input: mismatched list lengths are silently
//! truncated. Errors only come from reading sources, parsing them, and from
//! colors the plotting surface cannot understand.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for Squaregram operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the byte span of the offending TOML together
/// with the source text, which is enough for rich error reporting.
#[derive(Debug, Error)]
pub enum SquaregramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Parse {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Color error: {0}")]
    Color(String),
}

impl SquaregramError {
    /// Create a new `Parse` error from a TOML error and its source.
    pub fn new_parse_error(err: &toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            message: err.message().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }
}
