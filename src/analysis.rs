//! Wire types for the external sentiment service, plus dashboard totals.
//!
//! The analysis engine itself lives elsewhere. This module only describes
//! what is sent to it ([`AnalysisRequest`]), what comes back
//! ([`CommentAnalysis`]), and how results roll up into per-platform
//! counters ([`PlatformSummary`], [`DashboardTotals`]).
//!
//! # Example
//!
//! ```rust
//! use commentpack::analysis::{CommentAnalysis, DashboardTotals, summarize};
//!
//! let results: Vec<CommentAnalysis> = serde_json::from_str(r#"[
//!     {"platform": "TikTok", "username": "@Sarah", "comment": "too pricey",
//!      "sentiment": "Negative", "purchase_intent": "No"},
//!     {"platform": "TikTok", "username": "@bob", "comment": "love it",
//!      "sentiment": "Positive", "confidence": 0.93, "purchase_intent": "Yes"}
//! ]"#)?;
//!
//! let summaries = summarize(&results);
//! assert_eq!(summaries[0].total_comments, 2);
//!
//! let totals = DashboardTotals::from_summaries(&summaries);
//! assert_eq!(totals.positive_comments, 1);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::ParsedComment;
use crate::error::Result;

/// Body of the batch submission: `{"comments": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub comments: Vec<ParsedComment>,
}

impl From<&[ParsedComment]> for AnalysisRequest {
    fn from(comments: &[ParsedComment]) -> Self {
        Self {
            comments: comments.to_vec(),
        }
    }
}

impl From<Vec<ParsedComment>> for AnalysisRequest {
    fn from(comments: Vec<ParsedComment>) -> Self {
        Self { comments }
    }
}

/// One analyzed comment as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAnalysis {
    pub platform: String,
    pub username: String,
    pub comment: String,
    /// Free-form label, usually `Positive` or `Negative`.
    pub sentiment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// `Yes` when the commenter intends to buy.
    pub purchase_intent: String,
}

impl CommentAnalysis {
    pub fn sentiment(&self) -> Sentiment {
        Sentiment::classify(&self.sentiment)
    }

    /// Returns `true` if the service flagged a purchase intent.
    pub fn wants_to_buy(&self) -> bool {
        self.purchase_intent.trim().eq_ignore_ascii_case("yes")
    }
}

/// Coarse sentiment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Other,
}

impl Sentiment {
    /// Buckets a service label, ignoring ASCII case and surrounding space.
    pub fn classify(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("positive") {
            Sentiment::Positive
        } else if label.eq_ignore_ascii_case("negative") {
            Sentiment::Negative
        } else {
            Sentiment::Other
        }
    }
}

/// Per-platform counters in the dashboard feed shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSummary {
    pub platform: String,
    pub total_comments: u64,
    pub positive_comments: u64,
    pub negative_comments: u64,
}

/// Groups results by platform, in the order platforms first appear.
pub fn summarize(results: &[CommentAnalysis]) -> Vec<PlatformSummary> {
    let mut summaries: Vec<PlatformSummary> = Vec::new();

    for result in results {
        let index = match summaries.iter().position(|s| s.platform == result.platform) {
            Some(index) => index,
            None => {
                summaries.push(PlatformSummary {
                    platform: result.platform.clone(),
                    ..PlatformSummary::default()
                });
                summaries.len() - 1
            }
        };

        let summary = &mut summaries[index];
        summary.total_comments += 1;
        match result.sentiment() {
            Sentiment::Positive => summary.positive_comments += 1,
            Sentiment::Negative => summary.negative_comments += 1,
            Sentiment::Other => {}
        }
    }

    summaries
}

/// Counts results whose purchase intent is `Yes`.
pub fn purchase_intent_count(results: &[CommentAnalysis]) -> usize {
    results.iter().filter(|r| r.wants_to_buy()).count()
}

/// Parses the service response body (a JSON array of results).
pub fn results_from_json(json: &str) -> Result<Vec<CommentAnalysis>> {
    Ok(serde_json::from_str(json)?)
}

/// Totals across every platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardTotals {
    pub total_comments: u64,
    pub positive_comments: u64,
    pub negative_comments: u64,
}

impl DashboardTotals {
    pub fn from_summaries(summaries: &[PlatformSummary]) -> Self {
        summaries.iter().fold(Self::default(), |acc, s| Self {
            total_comments: acc.total_comments + s.total_comments,
            positive_comments: acc.positive_comments + s.positive_comments,
            negative_comments: acc.negative_comments + s.negative_comments,
        })
    }

    /// Share of positive comments as a percentage.
    pub fn positive_ratio(&self) -> f64 {
        if self.total_comments == 0 {
            return 0.0;
        }
        (self.positive_comments as f64 / self.total_comments as f64) * 100.0
    }
}
