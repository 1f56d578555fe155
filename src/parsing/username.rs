//! Username detection rules.
//!
//! Each [`UsernameRule`] pairs a pattern with a normalization step. The
//! parser tries the configured rules in order and stops at the first rule
//! that finds an acceptable token.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::platform::PlatformCatalog;

static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UsernameRule::Handle.pattern()).unwrap());

static CAPITALIZED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UsernameRule::CapitalizedWord.pattern()).unwrap());

/// A heuristic for spotting the comment author in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsernameRule {
    /// `@`-prefixed handle at the start of a word.
    /// Example: `Facebook @john_doe, loved it` → `@john_doe`
    Handle,
    /// Capitalized word of two or more characters, no `@`.
    /// Example: `TikTok Sarah not interested` → `@Sarah`
    ///
    /// Words spelled exactly like a catalog platform are skipped.
    CapitalizedWord,
}

/// A username located by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameMatch<'a> {
    /// Rule that produced the match.
    pub rule: UsernameRule,
    /// Matched slice of the line, including the whitespace it consumed.
    pub raw: &'a str,
    /// Byte offset of `raw` in the line.
    pub start: usize,
    /// Byte offset just past `raw`.
    pub end: usize,
    /// Normalized username, always `@`-prefixed.
    pub username: String,
}

impl UsernameMatch<'_> {
    /// Returns `line` with this match cut out at its own position.
    ///
    /// `line` must be the string the match was found in.
    pub fn remove_from(&self, line: &str) -> String {
        format!("{}{}", &line[..self.start], &line[self.end..])
    }
}

impl UsernameRule {
    /// Returns the regex pattern for this rule.
    ///
    /// Group 1 captures the token without the leading whitespace.
    pub fn pattern(self) -> &'static str {
        match self {
            UsernameRule::Handle => r"(?:^|\s)(@[A-Za-z0-9_]+)",
            UsernameRule::CapitalizedWord => r"(?:^|\s)([A-Z][A-Za-z0-9_]+)",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            UsernameRule::Handle => &HANDLE_RE,
            UsernameRule::CapitalizedWord => &CAPITALIZED_RE,
        }
    }

    /// Returns all rules in default order.
    pub fn all() -> &'static [UsernameRule] {
        &[UsernameRule::Handle, UsernameRule::CapitalizedWord]
    }

    /// Prefixes `@` when the token does not already carry it.
    pub fn normalize(self, token: &str) -> String {
        let token = token.trim();
        if token.starts_with('@') {
            token.to_string()
        } else {
            format!("@{token}")
        }
    }

    /// Finds the leftmost acceptable token for this rule.
    pub fn find<'a>(self, line: &'a str, catalog: &PlatformCatalog) -> Option<UsernameMatch<'a>> {
        self.regex().captures_iter(line).find_map(|caps| {
            let whole = caps.get(0)?;
            let raw = whole.as_str();
            let token = caps.get(1).map_or(raw, |m| m.as_str()).trim();

            if self == UsernameRule::CapitalizedWord && catalog.contains(token) {
                return None;
            }

            Some(UsernameMatch {
                rule: self,
                raw,
                start: whole.start(),
                end: whole.end(),
                username: self.normalize(token),
            })
        })
    }
}

impl std::fmt::Display for UsernameRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsernameRule::Handle => write!(f, "handle"),
            UsernameRule::CapitalizedWord => write!(f, "capitalized_word"),
        }
    }
}

/// Runs `rules` in order and returns the first match.
pub fn extract_username<'a>(
    line: &'a str,
    rules: &[UsernameRule],
    catalog: &PlatformCatalog,
) -> Option<UsernameMatch<'a>> {
    rules.iter().find_map(|rule| rule.find(line, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PlatformCatalog {
        PlatformCatalog::default()
    }

    #[test]
    fn test_handle_rule() {
        let m = UsernameRule::Handle
            .find("Facebook @john_doe, loved it", &catalog())
            .unwrap();
        assert_eq!(m.username, "@john_doe");
        assert_eq!(m.raw, " @john_doe");
    }

    #[test]
    fn test_handle_at_line_start_has_no_leading_space() {
        let m = UsernameRule::Handle.find("@amy great", &catalog()).unwrap();
        assert_eq!(m.raw, "@amy");
        assert_eq!(m.username, "@amy");
    }

    #[test]
    fn test_handle_requires_word_start() {
        assert!(UsernameRule::Handle.find("mail me at bob@example", &catalog()).is_none());
    }

    #[test]
    fn test_capitalized_rule_skips_catalog_names() {
        let m = UsernameRule::CapitalizedWord
            .find("TikTok Sarah not interested", &catalog())
            .unwrap();
        assert_eq!(m.username, "@Sarah");
        assert_eq!(m.raw, " Sarah");
    }

    #[test]
    fn test_match_removed_at_its_own_position() {
        let line = "loved it on YouTube You guys rock";
        let m = UsernameRule::CapitalizedWord.find(line, &catalog()).unwrap();
        assert_eq!(m.username, "@You");
        assert_eq!(&line[m.start..m.end], " You");
        assert_eq!(m.remove_from(line), "loved it on YouTube guys rock");
    }

    #[test]
    fn test_capitalized_rule_needs_two_chars() {
        assert!(UsernameRule::CapitalizedWord.find("I X a", &catalog()).is_none());
    }

    #[test]
    fn test_capitalized_rule_only_catalog_names() {
        assert!(
            UsernameRule::CapitalizedWord
                .find("Instagram YouTube", &catalog())
                .is_none()
        );
    }

    #[test]
    fn test_capitalized_rule_stops_at_punctuation() {
        let m = UsernameRule::CapitalizedWord
            .find("thanks Mike's team", &catalog())
            .unwrap();
        assert_eq!(m.username, "@Mike");
        assert_eq!(m.raw, " Mike");
    }

    #[test]
    fn test_extract_prefers_handle_over_capitalized() {
        let m = extract_username("Great product @bob", UsernameRule::all(), &catalog()).unwrap();
        assert_eq!(m.rule, UsernameRule::Handle);
        assert_eq!(m.username, "@bob");
    }

    #[test]
    fn test_extract_respects_rule_order() {
        let rules = [UsernameRule::CapitalizedWord, UsernameRule::Handle];
        let m = extract_username("Great product @bob", &rules, &catalog()).unwrap();
        assert_eq!(m.username, "@Great");
    }

    #[test]
    fn test_extract_none() {
        assert!(extract_username("all lowercase here", UsernameRule::all(), &catalog()).is_none());
        assert!(extract_username("", UsernameRule::all(), &catalog()).is_none());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(UsernameRule::CapitalizedWord.normalize("Sarah"), "@Sarah");
        assert_eq!(UsernameRule::Handle.normalize(" @sam "), "@sam");
    }

    #[test]
    fn test_rule_serde() {
        let json = serde_json::to_string(&UsernameRule::CapitalizedWord).unwrap();
        assert_eq!(json, "\"capitalized_word\"");
        let rule: UsernameRule = serde_json::from_str("\"handle\"").unwrap();
        assert_eq!(rule, UsernameRule::Handle);
    }
}
