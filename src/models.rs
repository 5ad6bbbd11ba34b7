//! Data models for article analysis results.
//!
//! This module defines the two structures every other layer agrees on:
//! - [`ProcessingStatus`]: the closed set of terminal outcomes for one article
//! - [`AnalysisResult`]: the per-URL report returned by the analyzer
//!
//! The serialized field names (`url`, `status`, `score`, `words_count`) are
//! the wire shape consumed by the HTTP front end and the CLI report.

use serde::Serialize;
use std::fmt;

/// Terminal outcome of analyzing a single article.
///
/// Exactly one status applies per result. The enum is closed on purpose:
/// every failure path in the pipeline must map to one of these variants, and
/// exhaustive matches keep that mapping honest at compile time.
///
/// `Unexpected` is reserved for analysis tasks that die outside the normal
/// error taxonomy (a panic caught at the join handle); the pipeline's own
/// errors never produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    /// Article fetched, sanitized, and scored.
    Ok,
    /// The URL was malformed or the HTTP fetch failed (non-2xx, DNS, refused).
    FetchError,
    /// No sanitizer for the site, or the article body was not recognized.
    ParsingError,
    /// One of the two per-article timeout scopes expired.
    Timeout,
    /// The analysis task failed outside the closed taxonomy.
    Unexpected,
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProcessingStatus::Ok => "OK",
            ProcessingStatus::FetchError => "FETCH_ERROR",
            ProcessingStatus::ParsingError => "PARSING_ERROR",
            ProcessingStatus::Timeout => "TIMEOUT",
            ProcessingStatus::Unexpected => "UNEXPECTED",
        };
        f.write_str(s)
    }
}

/// Per-URL analysis report.
///
/// Invariant: `score` and `words_count` are populated together and only when
/// `status` is [`ProcessingStatus::Ok`]. The two constructors are the only
/// ways the rest of the crate builds a result, which keeps the invariant
/// structural rather than conventional.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// The article URL exactly as requested.
    pub url: String,
    /// Terminal status for this URL.
    pub status: ProcessingStatus,
    /// Jaundice rate in [0, 100], present iff `status` is `OK`.
    pub score: Option<f64>,
    /// Number of normalized words scored, present iff `status` is `OK`.
    pub words_count: Option<usize>,
}

impl AnalysisResult {
    /// Build a successful result with its score and word count.
    pub fn ok(url: String, score: f64, words_count: usize) -> Self {
        Self {
            url,
            status: ProcessingStatus::Ok,
            score: Some(score),
            words_count: Some(words_count),
        }
    }

    /// Build a failed result; both optional fields stay absent.
    pub fn failed(url: String, status: ProcessingStatus) -> Self {
        debug_assert!(status != ProcessingStatus::Ok);
        Self {
            url,
            status,
            score: None,
            words_count: None,
        }
    }

    /// True when the score/word-count pair is consistent with the status.
    pub fn is_consistent(&self) -> bool {
        match self.status {
            ProcessingStatus::Ok => self.score.is_some() && self.words_count.is_some(),
            _ => self.score.is_none() && self.words_count.is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let cases = [
            (ProcessingStatus::Ok, "\"OK\""),
            (ProcessingStatus::FetchError, "\"FETCH_ERROR\""),
            (ProcessingStatus::ParsingError, "\"PARSING_ERROR\""),
            (ProcessingStatus::Timeout, "\"TIMEOUT\""),
            (ProcessingStatus::Unexpected, "\"UNEXPECTED\""),
        ];
        for (status, expected) in cases {
            assert_eq!(serde_json::to_string(&status).unwrap(), expected);
            assert_eq!(format!("\"{}\"", status), expected);
        }
    }

    #[test]
    fn test_ok_result_serialization() {
        let result = AnalysisResult::ok("https://inosmi.ru/a".to_string(), 33.33, 3);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["url"], "https://inosmi.ru/a");
        assert_eq!(json["status"], "OK");
        assert_eq!(json["score"], 33.33);
        assert_eq!(json["words_count"], 3);
        assert!(result.is_consistent());
    }

    #[test]
    fn test_failed_result_has_null_fields() {
        let result =
            AnalysisResult::failed("retyui.com".to_string(), ProcessingStatus::FetchError);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "FETCH_ERROR");
        assert!(json["score"].is_null());
        assert!(json["words_count"].is_null());
        assert!(result.is_consistent());
    }
}
