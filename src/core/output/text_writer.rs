//! Plain text review format.
//!
//! One `platform | username | text` line per comment. This is the format a
//! user reviews (and can edit) before submitting a batch.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::ParsedComment;
use crate::error::Result;

/// Writes comments as `platform | username | text` lines.
pub fn write_text(comments: &[ParsedComment], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for comment in comments {
        writeln!(writer, "{comment}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts comments to review lines joined by `\n`.
pub fn to_text(comments: &[ParsedComment]) -> String {
    comments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text() {
        let comments = vec![
            ParsedComment::new("Facebook", "@john_doe", "loved this product!"),
            ParsedComment::unattributed("meh"),
        ];
        assert_eq!(
            to_text(&comments),
            "Facebook | @john_doe | loved this product!\nUnknown | Anonymous | meh"
        );
    }

    #[test]
    fn test_to_text_empty() {
        assert_eq!(to_text(&[]), "");
    }
}
