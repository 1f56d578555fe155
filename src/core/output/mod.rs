//! Output format writers.
//!
//! - [`write_json`] / [`to_json`] - Analysis request payload `{"comments": [...]}`
//! - [`write_jsonl`] / [`to_jsonl`] - One record per line
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_text`] / [`to_text`] - `platform | username | text` review lines
//!
//! # Example
//!
//! ```rust
//! use commentpack::core::output::{to_json, to_text};
//! use commentpack::ParsedComment;
//!
//! let comments = vec![ParsedComment::new("TikTok", "@Sarah", "too pricey")];
//!
//! let payload = to_json(&comments)?;
//! assert!(payload.contains("\"comments\""));
//! assert_eq!(to_text(&comments), "TikTok | @Sarah | too pricey");
//! # Ok::<(), commentpack::CommentpackError>(())
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod json_writer;
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
pub use json_writer::{to_json, write_json};
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::{to_text, write_text};
