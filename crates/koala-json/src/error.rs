//! Errors returned by the JSON parse boundary.

use serde_json::error::Category;
use thiserror::Error;

/// Why a JSON document was rejected.
///
/// Line and column are 1-based and point at the byte where parsing stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The input is not well-formed JSON, or nests deeper than the
    /// recursion limit.
    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        /// Line of the offending byte.
        line: usize,
        /// Column of the offending byte.
        column: usize,
        /// Parser diagnostic.
        message: String,
    },

    /// The input ended in the middle of a value.
    #[error("unexpected end of input at line {line}, column {column}")]
    UnexpectedEof {
        /// Last line of the input.
        line: usize,
        /// Column just past the last byte.
        column: usize,
    },

    /// The input is well-formed but does not match the requested type.
    #[error("invalid data at line {line}, column {column}: {message}")]
    Data {
        /// Line of the offending value.
        line: usize,
        /// Column of the offending value.
        column: usize,
        /// Deserializer diagnostic.
        message: String,
    },

    /// The input is longer than `ParseOptions::max_input_len`.
    #[error("input is {len} bytes, limit is {max}")]
    TooLarge {
        /// Input length in bytes.
        len: usize,
        /// Configured limit in bytes.
        max: usize,
    },
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        let (line, column) = (err.line(), err.column());
        match err.classify() {
            Category::Eof => Self::UnexpectedEof { line, column },
            Category::Data => Self::Data {
                line,
                column,
                message: err.to_string(),
            },
            // Slices never produce I/O errors.
            Category::Syntax | Category::Io => Self::Syntax {
                line,
                column,
                message: err.to_string(),
            },
        }
    }
}

/// Result alias for this crate.
pub type JsonResult<T> = Result<T, JsonError>;
