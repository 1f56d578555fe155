//! Filter parsed comments by platform and author.
//!
//! # Examples
//!
//! ```
//! use commentpack::core::filter::{FilterConfig, apply_filters};
//! use commentpack::ParsedComment;
//!
//! let comments = vec![
//!     ParsedComment::new("TikTok", "@sarah", "too pricey"),
//!     ParsedComment::new("Instagram", "@amy", "want one"),
//!     ParsedComment::new("TikTok", "@bob", "love it"),
//! ];
//!
//! let config = FilterConfig::new().with_platform("tiktok");
//! let filtered = apply_filters(comments, &config);
//!
//! assert_eq!(filtered.len(), 2);
//! ```
//!
//! # Behavior Notes
//!
//! - Platform matching is case-insensitive for ASCII characters
//! - Username matching ignores a leading `@` and ASCII case
//! - Multiple filters are combined with AND logic

use crate::ParsedComment;

/// Criteria for narrowing a batch of comments.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Keep only comments from this platform.
    pub platform: Option<String>,

    /// Keep only comments by this user.
    pub username: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all comments pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the platform filter. `"Unknown"` selects unattributed comments.
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Sets the username filter.
    ///
    /// `"sarah"`, `"@Sarah"` and `"SARAH"` all match `@Sarah`.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.platform.is_some() || self.username.is_some()
    }

    fn matches(&self, comment: &ParsedComment) -> bool {
        if let Some(ref platform) = self.platform {
            if !comment.platform.eq_ignore_ascii_case(platform) {
                return false;
            }
        }

        if let Some(ref username) = self.username {
            let wanted = username.trim_start_matches('@');
            let actual = comment.username.trim_start_matches('@');
            if !actual.eq_ignore_ascii_case(wanted) {
                return false;
            }
        }

        true
    }
}

/// Keeps only the comments that match every active filter.
///
/// If no filters are active, returns the input unchanged.
pub fn apply_filters(comments: Vec<ParsedComment>, config: &FilterConfig) -> Vec<ParsedComment> {
    if !config.is_active() {
        return comments;
    }

    comments
        .into_iter()
        .filter(|comment| config.matches(comment))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ParsedComment> {
        vec![
            ParsedComment::new("TikTok", "@Sarah", "too pricey"),
            ParsedComment::new("Instagram", "@amy", "want one"),
            ParsedComment::new("TikTok", "@bob", "love it"),
            ParsedComment::unattributed("no idea"),
        ]
    }

    #[test]
    fn test_filter_by_platform() {
        let filtered = apply_filters(sample(), &FilterConfig::new().with_platform("TIKTOK"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|c| c.platform == "TikTok"));
    }

    #[test]
    fn test_filter_unknown_platform() {
        let filtered = apply_filters(sample(), &FilterConfig::new().with_platform("unknown"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "no idea");
    }

    #[test]
    fn test_filter_by_username_ignores_at_and_case() {
        for wanted in ["sarah", "@Sarah", "SARAH"] {
            let filtered = apply_filters(sample(), &FilterConfig::new().with_username(wanted));
            assert_eq!(filtered.len(), 1, "filter {wanted}");
            assert_eq!(filtered[0].username, "@Sarah");
        }
    }

    #[test]
    fn test_combined_filters() {
        let config = FilterConfig::new().with_platform("TikTok").with_username("bob");
        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "love it");
    }

    #[test]
    fn test_inactive_filter_keeps_order() {
        let filtered = apply_filters(sample(), &FilterConfig::new());
        assert_eq!(filtered, sample());
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterConfig::new().is_active());
        assert!(FilterConfig::new().with_platform("X").is_active());
        assert!(FilterConfig::new().with_username("amy").is_active());
    }
}
