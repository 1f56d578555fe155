//! Configuration for the comment-line parser.
//!
//! [`ParserConfig`] is a plain serde struct so it can be built in code or
//! loaded from a JSON file. Every field has a default, so a config file only
//! needs the keys it changes.
//!
//! # Example
//!
//! ```rust
//! use commentpack::config::ParserConfig;
//! use commentpack::platform::{PlatformCatalog, PlatformPrecedence};
//!
//! let config = ParserConfig::new()
//!     .with_platforms(PlatformCatalog::new(["Reddit", "Twitch"]))
//!     .with_precedence(PlatformPrecedence::Last);
//!
//! assert!(config.validate().is_ok());
//! ```
//!
//! Loading from JSON:
//!
//! ```rust
//! use commentpack::config::ParserConfig;
//!
//! let config = ParserConfig::from_json_str(r#"{"platforms": ["Reddit"]}"#)?;
//! assert_eq!(config.platforms.names(), ["Reddit"]);
//! # Ok::<(), commentpack::CommentpackError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CommentpackError, Result};
use crate::parsing::UsernameRule;
use crate::platform::{PlatformCatalog, PlatformPrecedence};

/// Settings that shape how a line is decomposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Ordered platform catalog used for detection and stripping.
    pub platforms: PlatformCatalog,

    /// Tie-break when several catalog names appear (default: first).
    pub precedence: PlatformPrecedence,

    /// Username rules, tried in order (default: handle, capitalized_word).
    pub username_rules: Vec<UsernameRule>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            platforms: PlatformCatalog::default(),
            precedence: PlatformPrecedence::default(),
            username_rules: UsernameRule::all().to_vec(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Sets the platform catalog.
    #[must_use]
    pub fn with_platforms(mut self, platforms: PlatformCatalog) -> Self {
        self.platforms = platforms;
        self
    }

    /// Sets the platform tie-break.
    #[must_use]
    pub fn with_precedence(mut self, precedence: PlatformPrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// Sets the ordered username rules.
    #[must_use]
    pub fn with_username_rules(mut self, rules: Vec<UsernameRule>) -> Self {
        self.username_rules = rules;
        self
    }

    /// Checks the catalog and rule list.
    pub fn validate(&self) -> Result<()> {
        self.platforms.validate()?;
        if self.username_rules.is_empty() {
            return Err(CommentpackError::invalid_config(
                "at least one username rule is required",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.platforms.len(), 6);
        assert_eq!(config.precedence, PlatformPrecedence::First);
        assert_eq!(
            config.username_rules,
            vec![UsernameRule::Handle, UsernameRule::CapitalizedWord]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::new()
            .with_precedence(PlatformPrecedence::Last)
            .with_username_rules(vec![UsernameRule::Handle]);
        assert_eq!(config.precedence, PlatformPrecedence::Last);
        assert_eq!(config.username_rules, vec![UsernameRule::Handle]);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ParserConfig::from_json_str(r#"{"precedence": "last"}"#).unwrap();
        assert_eq!(config.precedence, PlatformPrecedence::Last);
        assert_eq!(config.platforms, PlatformCatalog::default());
    }

    #[test]
    fn test_from_json_full() {
        let json = r#"{
            "platforms": ["Reddit", "Twitch"],
            "precedence": "first",
            "username_rules": ["capitalized_word"]
        }"#;
        let config = ParserConfig::from_json_str(json).unwrap();
        assert_eq!(config.platforms.names(), ["Reddit", "Twitch"]);
        assert_eq!(config.username_rules, vec![UsernameRule::CapitalizedWord]);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let err = ParserConfig::from_json_str(r#"{"platforms": []}"#).unwrap_err();
        assert!(err.is_invalid_config());

        let err = ParserConfig::from_json_str(r#"{"username_rules": []}"#).unwrap_err();
        assert!(err.is_invalid_config());

        let err = ParserConfig::from_json_str("not json").unwrap_err();
        assert!(err.is_json());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"platforms": ["Mastodon"]}}"#).unwrap();

        let config = ParserConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.platforms.names(), ["Mastodon"]);
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = ParserConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ParserConfig::new().with_precedence(PlatformPrecedence::Last);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"precedence\":\"last\""));
        assert!(json.contains("\"username_rules\":[\"handle\",\"capitalized_word\"]"));
        let parsed: ParserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
