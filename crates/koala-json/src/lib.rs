//! JSON parse boundary.
//!
//! Every entry point takes an explicit [`ParseOptions`]; there is no
//! process-wide debug switch. Parsing never panics: malformed input,
//! truncated input, and input nested past `serde_json`'s recursion limit
//! all come back as a [`JsonError`].
//!
//! ```
//! use koala_json::{ParseOptions, parse};
//!
//! let value = parse(b"[1,2,3]", &ParseOptions::default()).unwrap();
//! assert_eq!(value, serde_json::json!([1, 2, 3]));
//! assert!(parse(b"", &ParseOptions::quiet()).is_err());
//! ```

mod error;

pub use error::{JsonError, JsonResult};
use serde::de::DeserializeOwned;

const LOG_TARGET: &str = "koala::json";

/// Default for [`ParseOptions::max_input_len`]: 64 MiB.
pub const DEFAULT_MAX_INPUT_LEN: usize = 64 * 1024 * 1024;

/// Options for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Emit `log::debug!` records about the parse.
    pub debug: bool,
    /// Longest input accepted, in bytes.
    pub max_input_len: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            debug: false,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl ParseOptions {
    /// No logging and the default size limit. Used by the fuzz target.
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            debug: false,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }

    /// Set [`ParseOptions::debug`].
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set [`ParseOptions::max_input_len`].
    #[must_use]
    pub const fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }
}

/// Parse `bytes` as a JSON document.
///
/// # Errors
///
/// Returns [`JsonError::TooLarge`] for oversized input, otherwise the
/// parser's error.
pub fn parse(bytes: &[u8], options: &ParseOptions) -> JsonResult<serde_json::Value> {
    parse_as(bytes, options)
}

/// [`parse`] for text input.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_str(text: &str, options: &ParseOptions) -> JsonResult<serde_json::Value> {
    parse(text.as_bytes(), options)
}

/// Parse `bytes` and deserialize the document into `T`.
///
/// # Errors
///
/// Same as [`parse`], plus [`JsonError::Data`] when the document does not
/// match `T`.
pub fn parse_as<T: DeserializeOwned>(bytes: &[u8], options: &ParseOptions) -> JsonResult<T> {
    if bytes.len() > options.max_input_len {
        return Err(JsonError::TooLarge {
            len: bytes.len(),
            max: options.max_input_len,
        });
    }
    if options.debug {
        log::debug!(target: LOG_TARGET, "parsing {} bytes", bytes.len());
    }

    let result = serde_json::from_slice(bytes).map_err(JsonError::from);
    if options.debug
        && let Err(err) = &result
    {
        log::debug!(target: LOG_TARGET, "rejected: {err}");
    }
    result
}
