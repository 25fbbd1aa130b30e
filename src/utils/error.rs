//! Error handling for grid-table extraction
//!
//! This module provides a unified error type and result type for all
//! extraction operations.

use std::fmt;

/// Extraction error type
#[derive(Debug, Clone)]
pub enum ExtractError {
    /// Structural parse error - input does not form a well-formed grid table
    StructuralParse {
        message: String,
        line: Option<usize>,
    },
    /// Shape mismatch - a body row's column count disagrees with the expected shape
    ShapeMismatch {
        message: String,
        row: Option<usize>,
    },
    /// IO error (for file operations)
    Io { message: String },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::StructuralParse { message, line } => {
                if let Some(l) = line {
                    write!(f, "Structural parse error at line {}: {}", l, message)
                } else {
                    write!(f, "Structural parse error: {}", message)
                }
            }
            ExtractError::ShapeMismatch { message, row } => {
                if let Some(r) = row {
                    write!(f, "Shape mismatch at body row {}: {}", r, message)
                } else {
                    write!(f, "Shape mismatch: {}", message)
                }
            }
            ExtractError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

// Convenience constructors for errors
impl ExtractError {
    pub fn structural(message: impl Into<String>) -> Self {
        ExtractError::StructuralParse {
            message: message.into(),
            line: None,
        }
    }

    pub fn structural_at(message: impl Into<String>, line: usize) -> Self {
        ExtractError::StructuralParse {
            message: message.into(),
            line: Some(line),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        ExtractError::ShapeMismatch {
            message: message.into(),
            row: None,
        }
    }

    pub fn shape_at(message: impl Into<String>, row: usize) -> Self {
        ExtractError::ShapeMismatch {
            message: message.into(),
            row: Some(row),
        }
    }
}
