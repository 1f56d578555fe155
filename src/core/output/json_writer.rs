//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::ParsedComment;
use crate::analysis::AnalysisRequest;
use crate::error::Result;

/// Writes the analysis request payload to a JSON file.
///
/// # Format
/// ```json
/// {
///   "comments": [
///     {"platform": "Facebook", "username": "@john_doe", "text": "loved this product!"}
///   ]
/// }
/// ```
pub fn write_json(comments: &[ParsedComment], output_path: &str) -> Result<()> {
    let json = to_json(comments)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts comments to the analysis request payload.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(comments: &[ParsedComment]) -> Result<String> {
    let request = AnalysisRequest::from(comments);
    Ok(serde_json::to_string_pretty(&request)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_json_payload_shape() {
        let comments = vec![
            ParsedComment::new("Facebook", "@john_doe", "loved this product!"),
            ParsedComment::unattributed("meh"),
        ];

        let json = to_json(&comments).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let items = value["comments"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["platform"], "Facebook");
        assert_eq!(items[0]["username"], "@john_doe");
        assert_eq!(items[0]["text"], "loved this product!");
        assert_eq!(items[1]["username"], "Anonymous");
    }

    #[test]
    fn test_to_json_empty() {
        let json = to_json(&[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["comments"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_write_json() {
        let comments = vec![ParsedComment::new("X", "@sam", "nice")];

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_json(&comments, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains(r#""username": "@sam""#));
    }
}
