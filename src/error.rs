//! Error types for conversion operations

use std::fmt;

/// Errors that can occur during HTML to JSX conversion
#[derive(Debug)]
pub enum ConversionError {
    /// The DOM provider returned a tree without the expected fragment root
    ParseError(String),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConversionError {}
