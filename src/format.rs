//! Output format selection.
//!
//! # Example
//!
//! ```rust
//! use commentpack::format::{OutputFormat, to_format_string};
//! use commentpack::ParsedComment;
//!
//! let comments = vec![ParsedComment::new("TikTok", "@Sarah", "too pricey")];
//!
//! let text = to_format_string(&comments, OutputFormat::Text)?;
//! assert_eq!(text, "TikTok | @Sarah | too pricey");
//!
//! let format = OutputFormat::from_path("batch.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok::<(), commentpack::CommentpackError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::ParsedComment;
use crate::error::CommentpackError;

/// Output format for a parsed batch.
///
/// - [`Json`](OutputFormat::Json) - Analysis request payload, ready to submit
/// - [`Jsonl`](OutputFormat::Jsonl) - One record per line
/// - [`Csv`](OutputFormat::Csv) - Semicolon-delimited table
/// - [`Text`](OutputFormat::Text) - `platform | username | text` review lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    #[default]
    Json,
    Jsonl,
    Csv,
    Text,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson", "csv", "text", "txt"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Json,
            OutputFormat::Jsonl,
            OutputFormat::Csv,
            OutputFormat::Text,
        ]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Text => "text/plain",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self, CommentpackError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            "txt" => Ok(OutputFormat::Text),
            _ => Err(CommentpackError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: json, jsonl, csv, txt",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Text => write!(f, "Text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

#[cfg(not(feature = "csv-output"))]
fn csv_disabled() -> CommentpackError {
    CommentpackError::invalid_format(
        "output",
        "Output format CSV requires the 'csv-output' feature to be enabled",
    )
}

/// Writes comments to a file in the specified format.
pub fn write_to_format(
    comments: &[ParsedComment],
    path: &str,
    format: OutputFormat,
) -> Result<(), CommentpackError> {
    match format {
        OutputFormat::Json => crate::core::output::write_json(comments, path),
        OutputFormat::Jsonl => crate::core::output::write_jsonl(comments, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(comments, path),
        #[cfg(not(feature = "csv-output"))]
        OutputFormat::Csv => Err(csv_disabled()),
        OutputFormat::Text => crate::core::output::write_text(comments, path),
    }
}

/// Converts comments to a string in the specified format.
pub fn to_format_string(
    comments: &[ParsedComment],
    format: OutputFormat,
) -> Result<String, CommentpackError> {
    match format {
        OutputFormat::Json => crate::core::output::to_json(comments),
        OutputFormat::Jsonl => crate::core::output::to_jsonl(comments),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(comments),
        #[cfg(not(feature = "csv-output"))]
        OutputFormat::Csv => Err(csv_disabled()),
        OutputFormat::Text => Ok(crate::core::output::to_text(comments)),
    }
}
