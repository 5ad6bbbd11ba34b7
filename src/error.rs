//! The closed failure taxonomy for article analysis.
//!
//! Every way a single article's analysis can fail is a variant of
//! [`AnalyzeError`], and [`AnalyzeError::status`] maps each variant to its
//! terminal [`ProcessingStatus`]. Because both sides are closed enums and the
//! mapping is an exhaustive match, adding a failure mode without deciding its
//! classification does not compile.

use crate::models::ProcessingStatus;
use std::fmt;
use thiserror::Error;

/// Which of the two per-article deadlines expired.
///
/// The two scopes have independent budgets; keeping the marker in the error
/// means a timeout is always attributed to the scope that actually ran out,
/// never to an enclosing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutScope {
    /// Scope A: fetching the article HTML.
    Fetch,
    /// Scope B: tokenizing, normalizing, and scoring the article text.
    Calc,
}

impl fmt::Display for TimeoutScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeoutScope::Fetch => f.write_str("fetch"),
            TimeoutScope::Calc => f.write_str("calc"),
        }
    }
}

/// Raised by a sanitizer when the HTML does not match the article structure
/// it knows how to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("article structure not recognized")]
pub struct ArticleNotFound;

/// Everything that can go wrong while analyzing one article.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The requested URL could not be parsed (missing scheme, garbage input).
    #[error("invalid article URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP fetch failed: connection refused, DNS failure, non-2xx status.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// No sanitizer is registered for the article's site.
    #[error("no sanitizer registered for site {site}")]
    UnknownSite {
        /// Site key derived from the URL host.
        site: String,
    },

    /// The registered sanitizer did not recognize the article layout.
    #[error(transparent)]
    ArticleNotFound(#[from] ArticleNotFound),

    /// One of the two timeout scopes expired before its stage finished.
    #[error("{scope} deadline exceeded")]
    Deadline {
        /// The scope whose budget ran out.
        scope: TimeoutScope,
    },
}

impl AnalyzeError {
    /// Classify this error as the terminal status reported for the article.
    pub fn status(&self) -> ProcessingStatus {
        match self {
            AnalyzeError::InvalidUrl(_) | AnalyzeError::Fetch(_) => ProcessingStatus::FetchError,
            AnalyzeError::UnknownSite { .. } | AnalyzeError::ArticleNotFound(_) => {
                ProcessingStatus::ParsingError
            }
            AnalyzeError::Deadline { .. } => ProcessingStatus::Timeout,
        }
    }
}
