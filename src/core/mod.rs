//! Batch processing around the line parser.
//!
//! This module contains:
//! - [`filter`] - Comment filtering by platform and username
//! - [`processor`] - Batch statistics
//! - [`output`] - Format writers (JSON payload, JSONL, CSV, text)

pub mod filter;
pub mod output;
pub mod processor;

pub use filter::{FilterConfig, apply_filters};
pub use processor::{BatchStats, count_lines};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
pub use output::{to_json, to_jsonl, to_text, write_json, write_jsonl, write_text};
