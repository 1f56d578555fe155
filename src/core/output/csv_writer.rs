//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::ParsedComment;
use crate::error::Result;

const HEADER: [&str; 3] = ["Platform", "Username", "Text"];

/// Writes comments to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Platform`, `Username`, `Text`
/// - Encoding: UTF-8
pub fn write_csv(comments: &[ParsedComment], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(comments, file)
}

/// Converts comments to a CSV string.
pub fn to_csv(comments: &[ParsedComment]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(comments, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(comments: &[ParsedComment], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for comment in comments {
        writer.write_record([&comment.platform, &comment.username, &comment.text])?;
    }

    writer.flush()?;
    Ok(())
}
