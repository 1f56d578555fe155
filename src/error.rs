//! Unified error types for commentpack.
//!
//! Parsing a comment line never fails: unrecognized input degrades to the
//! `Unknown` / `Anonymous` sentinels. Errors only come from the layers around
//! the parser: loading configuration, reading input files and writing
//! output.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for commentpack operations.
///
/// # Example
///
/// ```rust
/// use commentpack::error::Result;
/// use commentpack::ParsedComment;
///
/// fn my_function() -> Result<Vec<ParsedComment>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, CommentpackError>;

/// The error type for all commentpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CommentpackError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing/serialization error.
    ///
    /// Raised while loading a JSON config, serializing the analysis payload,
    /// or reading analysis results.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The parser configuration is unusable.
    ///
    /// This occurs when:
    /// - The platform catalog is empty
    /// - A catalog entry is empty or duplicated
    /// - No username rules are configured
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// A format name or file extension was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected (e.g., "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for CommentpackError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        CommentpackError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl CommentpackError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        CommentpackError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        CommentpackError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, CommentpackError::Io(_))
    }

    /// Returns `true` if this is a JSON error.
    pub fn is_json(&self) -> bool {
        matches!(self, CommentpackError::Json(_))
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, CommentpackError::InvalidConfig { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, CommentpackError::InvalidFormat { .. })
    }
}
