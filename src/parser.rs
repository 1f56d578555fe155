//! Heuristic comment-line parser.
//!
//! [`LineCommentParser`] turns one raw line of pasted text into a
//! [`ParsedComment`]. Parsing is total: any input, including an empty string,
//! yields a record. Missing information falls back to the `Unknown` /
//! `Anonymous` sentinels.
//!
//! # Example
//!
//! ```rust
//! use commentpack::parser::LineCommentParser;
//!
//! let parser = LineCommentParser::new();
//!
//! let comment = parser.parse_line("Facebook @john_doe, loved this product!");
//! assert_eq!(comment.platform, "Facebook");
//! assert_eq!(comment.username, "@john_doe");
//! assert_eq!(comment.text, "loved this product!");
//!
//! // Whole paste: one record per non-empty line, in input order
//! let batch = parser.parse_batch("TikTok Sarah too pricey\nInstagram\nlove it");
//! assert_eq!(batch.len(), 2);
//! ```
//!
//! # Steps
//!
//! 1. Detect the platform on the original line.
//! 2. Find a username with the configured rules and cut it out where it
//!    matched.
//! 3. Strip every catalog name (first occurrence each).
//! 4. Drop commas and trim.

use std::path::Path;
use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::comment::{ANONYMOUS, ParsedComment, UNKNOWN_PLATFORM};
use crate::config::ParserConfig;
use crate::error::Result;
use crate::parsing::extract_username;

static DEFAULT_PARSER: LazyLock<LineCommentParser> = LazyLock::new(LineCommentParser::new);

/// Parses a single line with the default configuration.
///
/// ```rust
/// use commentpack::parse_comment;
///
/// let comment = parse_comment("just a plain comment with no metadata");
/// assert_eq!(comment.platform, "Unknown");
/// assert_eq!(comment.username, "Anonymous");
/// ```
pub fn parse_comment(line: &str) -> ParsedComment {
    DEFAULT_PARSER.parse_line(line)
}

/// Stateless line parser over a fixed [`ParserConfig`].
///
/// The parser holds no mutable state, so one instance can be shared across
/// threads and reused for any number of lines.
#[derive(Debug, Clone, Default)]
pub struct LineCommentParser {
    config: ParserConfig,
}

impl LineCommentParser {
    /// Creates a parser with the built-in catalog and rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser from a validated configuration.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Decomposes one line into platform, username and text.
    pub fn parse_line(&self, line: &str) -> ParsedComment {
        let catalog = &self.config.platforms;

        let platform = catalog
            .detect(line, self.config.precedence)
            .unwrap_or(UNKNOWN_PLATFORM)
            .to_string();

        let (username, remainder) =
            match extract_username(line, &self.config.username_rules, catalog) {
                Some(found) => {
                    trace!(rule = %found.rule, username = %found.username, "username matched");
                    let remainder = found.remove_from(line).trim().to_string();
                    (found.username, remainder)
                }
                None => (ANONYMOUS.to_string(), line.to_string()),
            };

        let text = catalog.strip(&remainder).replace(',', "").trim().to_string();

        ParsedComment {
            platform,
            username,
            text,
        }
    }

    /// Parses every line of `content`, keeping records with empty text.
    ///
    /// Lines are split on `\n`; a trailing `\r` is removed by trimming.
    pub fn parse_lines(&self, content: &str) -> Vec<ParsedComment> {
        content.split('\n').map(|line| self.parse_line(line)).collect()
    }

    /// Parses a pasted block into a submission-ready batch.
    ///
    /// Records whose text ends up empty are discarded; the rest keep their
    /// input order.
    pub fn parse_batch(&self, content: &str) -> Vec<ParsedComment> {
        let mut total = 0usize;
        let batch: Vec<ParsedComment> = content
            .split('\n')
            .inspect(|_| total += 1)
            .map(|line| self.parse_line(line))
            .filter(|comment| !comment.is_empty())
            .collect();

        debug!(
            lines = total,
            kept = batch.len(),
            discarded = total - batch.len(),
            "parsed comment batch"
        );
        batch
    }

    /// Reads a UTF-8 text file and parses it with [`parse_batch`](Self::parse_batch).
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<ParsedComment>> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading comment file");
        let content = std::fs::read_to_string(path)?;
        Ok(self.parse_batch(&content))
    }
}
