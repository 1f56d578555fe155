//! # Commentpack
//!
//! Turn pasted social-media comments into clean `{platform, username, text}`
//! records, ready to be submitted to a sentiment / purchase-intent analysis
//! service.
//!
//! ## Overview
//!
//! Each line of free text is decomposed heuristically:
//! - **platform** - first catalog name found in the line (Facebook, TikTok,
//!   X, Instagram, YouTube, LinkedIn by default), or `Unknown`
//! - **username** - an `@handle`, else a capitalized word, normalized to
//!   start with `@`; `Anonymous` when nothing matches
//! - **text** - what remains after the tokens above and all commas are
//!   stripped
//!
//! ## Quick Start
//!
//! ```rust
//! use commentpack::prelude::*;
//!
//! let parser = LineCommentParser::new();
//!
//! let pasted = "Facebook @john_doe, loved this product!\n\
//!               TikTok Sarah not interested, too pricey\n\
//!               Instagram";
//!
//! let batch = parser.parse_batch(pasted);
//! assert_eq!(batch.len(), 2);
//! assert_eq!(batch[1].username, "@Sarah");
//! assert_eq!(batch[1].text, "not interested too pricey");
//!
//! let payload = to_json(&batch)?;
//! assert!(payload.contains("\"comments\""));
//! # Ok::<(), CommentpackError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`LineCommentParser`](parser::LineCommentParser), [`parse_comment`]
//! - [`platform`] - [`Platform`](platform::Platform), [`PlatformCatalog`](platform::PlatformCatalog), [`PlatformPrecedence`](platform::PlatformPrecedence)
//! - [`parsing`] - ordered [`UsernameRule`](parsing::UsernameRule)s
//! - [`config`] - [`ParserConfig`](config::ParserConfig)
//! - [`core`] - filtering, batch statistics and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`analysis`] - request payload, service results and dashboard totals
//! - [`error`] - [`CommentpackError`], [`Result`]

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod comment;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod platform;

// Re-export the main types at the crate root for convenience
pub use comment::{ANONYMOUS, ParsedComment, UNKNOWN_PLATFORM};
pub use error::{CommentpackError, Result};
pub use parser::parse_comment;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use commentpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ParsedComment;

    pub use crate::error::{CommentpackError, Result};

    pub use crate::config::ParserConfig;
    pub use crate::parser::{LineCommentParser, parse_comment};
    pub use crate::parsing::UsernameRule;
    pub use crate::platform::{Platform, PlatformCatalog, PlatformPrecedence};

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::processor::BatchStats;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    pub use crate::core::output::{to_json, to_jsonl, to_text, write_json, write_jsonl, write_text};

    pub use crate::format::OutputFormat;

    pub use crate::analysis::{AnalysisRequest, CommentAnalysis, PlatformSummary, summarize};
}
