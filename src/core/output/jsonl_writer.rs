//! JSON Lines (JSONL) output writer.
//!
//! One record per line, handy for piping a batch into other tools.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::ParsedComment;
use crate::error::Result;

/// Writes comments to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"platform":"TikTok","username":"@Sarah","text":"too pricey"}
/// {"platform":"Unknown","username":"Anonymous","text":"nice"}
/// ```
pub fn write_jsonl(comments: &[ParsedComment], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for comment in comments {
        let line = serde_json::to_string(comment)?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts comments to a JSONL string.
pub fn to_jsonl(comments: &[ParsedComment]) -> Result<String> {
    let mut output = String::new();
    for comment in comments {
        output.push_str(&serde_json::to_string(comment)?);
        output.push('\n');
    }
    Ok(output)
}
