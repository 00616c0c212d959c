//! Error types for Canvasmark operations.
//!
//! This module provides the main error type [`CanvasmarkError`] which wraps
//! the failures that can occur around the outline pipeline. Containment
//! resolution and rendering themselves cannot fail.

use std::io;

use thiserror::Error;

use canvasmark_parser::error::ParseError;

/// The main error type for Canvasmark operations.
///
/// The `Parse` variant keeps the canvas source next to its diagnostics so
/// that callers can show the offending snippets.
#[derive(Debug, Error)]
pub enum CanvasmarkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CanvasmarkError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
