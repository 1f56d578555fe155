use std::collections::BTreeMap;

use crate::ParsedComment;

/// Counts describing how a pasted block turned into a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Lines in the input, including blank ones.
    pub total_lines: usize,
    /// Records kept for submission.
    pub kept: usize,
    /// Lines whose text came out empty.
    pub discarded: usize,
    /// Kept records per detected platform.
    pub by_platform: BTreeMap<String, usize>,
}

impl BatchStats {
    /// Builds stats for a batch that came from `total_lines` input lines.
    ///
    /// Records with empty text count as discarded even when the caller kept
    /// them, so the numbers match what [`parse_batch`] would submit.
    ///
    /// [`parse_batch`]: crate::parser::LineCommentParser::parse_batch
    pub fn from_records(total_lines: usize, records: &[ParsedComment]) -> Self {
        let mut by_platform = BTreeMap::new();
        let mut kept = 0;
        for record in records.iter().filter(|r| !r.is_empty()) {
            kept += 1;
            *by_platform.entry(record.platform.clone()).or_insert(0) += 1;
        }

        Self {
            total_lines,
            kept,
            discarded: total_lines.saturating_sub(kept),
            by_platform,
        }
    }

    /// Percentage of input lines that were dropped.
    pub fn discard_ratio(&self) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        (self.discarded as f64 / self.total_lines as f64) * 100.0
    }
}

/// Number of lines [`parse_batch`](crate::parser::LineCommentParser::parse_batch) sees in `content`.
pub fn count_lines(content: &str) -> usize {
    content.split('\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_records() {
        let records = vec![
            ParsedComment::new("TikTok", "@a", "one"),
            ParsedComment::new("TikTok", "@b", "two"),
            ParsedComment::unattributed("three"),
        ];
        let stats = BatchStats::from_records(4, &records);
        assert_eq!(stats.kept, 3);
        assert_eq!(stats.discarded, 1);
        assert_eq!(stats.by_platform.get("TikTok"), Some(&2));
        assert_eq!(stats.by_platform.get("Unknown"), Some(&1));
        assert!((stats.discard_ratio() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_ignore_empty_records() {
        let records = vec![
            ParsedComment::new("Instagram", "Anonymous", ""),
            ParsedComment::new("TikTok", "@a", "one"),
            ParsedComment::unattributed(""),
        ];
        let stats = BatchStats::from_records(3, &records);
        assert_eq!(stats.kept, 1);
        assert_eq!(stats.discarded, 2);
        assert_eq!(stats.by_platform.get("Instagram"), None);
        assert_eq!(stats.by_platform.len(), 1);
    }

    #[test]
    fn test_empty_stats() {
        let stats = BatchStats::from_records(0, &[]);
        assert_eq!(stats.discard_ratio(), 0.0);
        assert!(stats.by_platform.is_empty());
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 1);
        assert_eq!(count_lines("a\nb"), 2);
        assert_eq!(count_lines("a\nb\n"), 3);
    }
}
