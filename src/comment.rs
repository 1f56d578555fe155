//! The normalized record produced for every comment line.
//!
//! # Examples
//!
//! ```
//! use commentpack::ParsedComment;
//!
//! let comment = ParsedComment::new("Facebook", "@john_doe", "loved this product!");
//! assert_eq!(comment.platform(), "Facebook");
//! assert!(comment.has_platform());
//! assert!(comment.has_username());
//! ```
//!
//! Records serialize to exactly the shape the analysis backend expects:
//!
//! ```
//! use commentpack::ParsedComment;
//!
//! let comment = ParsedComment::new("TikTok", "@Sarah", "too pricey");
//! let json = serde_json::to_string(&comment)?;
//! assert_eq!(json, r#"{"platform":"TikTok","username":"@Sarah","text":"too pricey"}"#);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// Platform sentinel used when no catalog name appears in a line.
pub const UNKNOWN_PLATFORM: &str = "Unknown";

/// Username sentinel used when no identity token is found.
///
/// Unlike detected usernames it carries no `@` prefix.
pub const ANONYMOUS: &str = "Anonymous";

/// A comment line decomposed into platform, author and body.
///
/// | Field | Description |
/// |-------|-------------|
/// | `platform` | A catalog name, or [`UNKNOWN_PLATFORM`] |
/// | `username` | `@`-prefixed identity, or [`ANONYMOUS`] |
/// | `text` | Whatever is left after stripping; may be empty |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedComment {
    /// Detected platform name.
    pub platform: String,

    /// Detected author handle.
    pub username: String,

    /// Remaining comment body with platform and username tokens removed.
    pub text: String,
}

impl ParsedComment {
    /// Creates a record from its three parts.
    pub fn new(
        platform: impl Into<String>,
        username: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            username: username.into(),
            text: text.into(),
        }
    }

    /// Creates a record with both sentinels and the given text.
    ///
    /// ```
    /// use commentpack::ParsedComment;
    ///
    /// let comment = ParsedComment::unattributed("nice");
    /// assert_eq!(comment.platform(), "Unknown");
    /// assert_eq!(comment.username(), "Anonymous");
    /// ```
    pub fn unattributed(text: impl Into<String>) -> Self {
        Self::new(UNKNOWN_PLATFORM, ANONYMOUS, text)
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if a catalog platform was detected.
    pub fn has_platform(&self) -> bool {
        self.platform != UNKNOWN_PLATFORM
    }

    /// Returns `true` if a username was detected.
    pub fn has_username(&self) -> bool {
        self.username != ANONYMOUS
    }

    /// Returns `true` if nothing is left of the comment body.
    ///
    /// Such records are dropped from a batch before submission.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl Default for ParsedComment {
    fn default() -> Self {
        Self::unattributed("")
    }
}

impl std::fmt::Display for ParsedComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} | {}", self.platform, self.username, self.text)
    }
}
