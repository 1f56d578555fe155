//! Built-in platforms and the ordered platform catalog.
//!
//! The catalog drives two steps of line parsing: detecting which platform a
//! line mentions, and stripping platform names out of the comment body. Both
//! steps walk the catalog in its configured order.
//!
//! # Example
//!
//! ```rust
//! use commentpack::platform::{PlatformCatalog, PlatformPrecedence};
//!
//! let catalog = PlatformCatalog::default();
//! assert_eq!(catalog.detect("seen on TikTok", PlatformPrecedence::First), Some("TikTok"));
//! assert_eq!(catalog.strip("TikTok, great"), ", great");
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CommentpackError, Result};

/// Social-media platforms recognized out of the box.
///
/// The variant order is the default catalog order.
///
/// ```rust
/// use commentpack::platform::Platform;
/// use std::str::FromStr;
///
/// assert_eq!(Platform::from_str("yt").unwrap(), Platform::YouTube);
/// assert_eq!(Platform::YouTube.name(), "YouTube");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Platform {
    #[serde(alias = "fb")]
    Facebook,
    #[serde(alias = "tt")]
    TikTok,
    #[serde(alias = "twitter")]
    X,
    #[serde(alias = "ig")]
    Instagram,
    #[serde(alias = "yt")]
    YouTube,
    #[serde(alias = "li")]
    LinkedIn,
}

impl Platform {
    /// Returns the exact spelling matched in comment lines.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::TikTok => "TikTok",
            Platform::X => "X",
            Platform::Instagram => "Instagram",
            Platform::YouTube => "YouTube",
            Platform::LinkedIn => "LinkedIn",
        }
    }

    /// Returns all platform names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &[
            "facebook", "fb", "tiktok", "tt", "x", "twitter", "instagram", "ig", "youtube", "yt",
            "linkedin", "li",
        ]
    }

    /// Returns all built-in platforms in default catalog order.
    pub fn all() -> &'static [Platform] {
        &[
            Platform::Facebook,
            Platform::TikTok,
            Platform::X,
            Platform::Instagram,
            Platform::YouTube,
            Platform::LinkedIn,
        ]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "facebook" | "fb" => Ok(Platform::Facebook),
            "tiktok" | "tt" => Ok(Platform::TikTok),
            "x" | "twitter" => Ok(Platform::X),
            "instagram" | "ig" => Ok(Platform::Instagram),
            "youtube" | "yt" => Ok(Platform::YouTube),
            "linkedin" | "li" => Ok(Platform::LinkedIn),
            _ => Err(format!(
                "Unknown platform: '{}'. Expected one of: {}",
                s,
                Platform::all_names().join(", ")
            )),
        }
    }
}

/// How to pick a platform when a line mentions several catalog names.
///
/// `First` picks the earliest matching entry in catalog order. `Last` picks
/// the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformPrecedence {
    #[default]
    First,
    Last,
}

impl std::fmt::Display for PlatformPrecedence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformPrecedence::First => write!(f, "first"),
            PlatformPrecedence::Last => write!(f, "last"),
        }
    }
}

impl std::str::FromStr for PlatformPrecedence {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(PlatformPrecedence::First),
            "last" => Ok(PlatformPrecedence::Last),
            _ => Err(format!(
                "Unknown precedence: '{}'. Expected one of: first, last",
                s
            )),
        }
    }
}

/// Ordered list of platform names used for detection and stripping.
///
/// Matching is case-sensitive and exact: `"tiktok"` does not match an entry
/// spelled `"TikTok"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformCatalog {
    names: Vec<String>,
}

impl Default for PlatformCatalog {
    fn default() -> Self {
        Self {
            names: Platform::all().iter().map(|p| p.name().to_string()).collect(),
        }
    }
}

impl PlatformCatalog {
    /// Builds a catalog from names in the given order.
    ///
    /// Call [`validate`](Self::validate) before parsing with a catalog that
    /// came from user input.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma-separated list such as `"Facebook, Reddit"`.
    pub fn from_list(list: &str) -> Result<Self> {
        let catalog = Self::new(list.split(',').map(str::trim).filter(|s| !s.is_empty()));
        catalog.validate()?;
        Ok(catalog)
    }

    /// Rejects catalogs that would make parsing meaningless.
    ///
    /// An empty name is a substring of every line, so it is refused along
    /// with duplicates and an empty catalog.
    pub fn validate(&self) -> Result<()> {
        if self.names.is_empty() {
            return Err(CommentpackError::invalid_config("platform catalog is empty"));
        }

        let mut seen = HashSet::new();
        for name in &self.names {
            if name.trim().is_empty() {
                return Err(CommentpackError::invalid_config(
                    "platform catalog contains an empty name",
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(CommentpackError::invalid_config(format!(
                    "platform '{}' is listed more than once",
                    name
                )));
            }
        }

        Ok(())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns `true` if `token` is exactly one of the catalog names.
    pub fn contains(&self, token: &str) -> bool {
        self.names.iter().any(|name| name == token)
    }

    /// Finds the platform a line mentions.
    ///
    /// ```rust
    /// use commentpack::platform::{PlatformCatalog, PlatformPrecedence};
    ///
    /// let catalog = PlatformCatalog::default();
    /// let line = "Facebook post shared on LinkedIn";
    /// assert_eq!(catalog.detect(line, PlatformPrecedence::First), Some("Facebook"));
    /// assert_eq!(catalog.detect(line, PlatformPrecedence::Last), Some("LinkedIn"));
    /// assert_eq!(catalog.detect("no platform", PlatformPrecedence::First), None);
    /// ```
    pub fn detect(&self, line: &str, precedence: PlatformPrecedence) -> Option<&str> {
        let mut matches = self
            .names
            .iter()
            .filter(|name| line.contains(name.as_str()))
            .map(String::as_str);

        match precedence {
            PlatformPrecedence::First => matches.next(),
            PlatformPrecedence::Last => matches.last(),
        }
    }

    /// Removes the first occurrence of every catalog name, in order.
    ///
    /// The remainder is trimmed after each removal. Names other than the
    /// detected platform are stripped too.
    pub fn strip(&self, text: &str) -> String {
        let mut remainder = text.to_string();
        for name in &self.names {
            remainder = remainder.replacen(name.as_str(), "", 1).trim().to_string();
        }
        remainder
    }
}
