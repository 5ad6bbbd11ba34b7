//! The per-article analysis pipeline and the batch orchestrator.
//!
//! One article moves through fetch → sanitize → tokenize/score, with two
//! independent deadlines: scope A covers the network fetch, scope B covers
//! the CPU-bound text work. Every failure along the way classifies into
//! exactly one terminal status, and a batch runs many articles concurrently
//! without letting one article's failure touch its siblings.

use crate::error::{AnalyzeError, TimeoutScope};
use crate::fetch::fetch;
use crate::lexicon::Lexicon;
use crate::models::{AnalysisResult, ProcessingStatus};
use crate::morph::Morph;
use crate::sanitizers::{site_key, SanitizerRegistry};
use crate::text_tools::{calculate_jaundice_rate, split_by_words};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{error, info, instrument, warn};
use url::Url;

/// Default budget for scope A, the article fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(1500);
/// Default budget for scope B, tokenizing and scoring.
pub const DEFAULT_CALC_TIMEOUT: Duration = Duration::from_millis(3000);

/// How many articles are analyzed at once in a batch.
const MAX_CONCURRENT_ANALYSES: usize = 12;

/// Analyzes articles against a charged-word lexicon.
///
/// Holds the injected collaborators: the HTTP client, the sanitizer registry,
/// the morphological normalizer, the lexicon, and the two deadlines. All
/// shared pieces sit behind `Arc`, so cloning an `Analyzer` is cheap and each
/// spawned analysis task gets its own handle.
#[derive(Clone)]
pub struct Analyzer {
    client: Client,
    sanitizers: Arc<SanitizerRegistry>,
    morph: Arc<dyn Morph>,
    lexicon: Arc<Lexicon>,
    fetch_timeout: Duration,
    calc_timeout: Duration,
}

impl Analyzer {
    /// Build an analyzer with the default timeout budgets.
    pub fn new(
        sanitizers: Arc<SanitizerRegistry>,
        morph: Arc<dyn Morph>,
        lexicon: Arc<Lexicon>,
    ) -> Self {
        Self {
            client: Client::new(),
            sanitizers,
            morph,
            lexicon,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            calc_timeout: DEFAULT_CALC_TIMEOUT,
        }
    }

    /// Override the fetch (scope A) budget.
    pub fn fetch_timeout(mut self, budget: Duration) -> Self {
        self.fetch_timeout = budget;
        self
    }

    /// Override the compute (scope B) budget.
    pub fn calc_timeout(mut self, budget: Duration) -> Self {
        self.calc_timeout = budget;
        self
    }

    /// Analyze one article and report its terminal status.
    ///
    /// Always returns a result; every error is classified, logged, and folded
    /// into the status. The elapsed time covers the whole pipeline for this
    /// article.
    #[instrument(level = "info", skip_all, fields(%url))]
    pub async fn process_article(&self, url: &str) -> AnalysisResult {
        let started = Instant::now();
        let outcome = self.run_pipeline(url).await;
        let elapsed_secs = started.elapsed().as_secs_f64();

        match outcome {
            Ok((score, words_count)) => {
                info!(score, words_count, elapsed_secs, "Analysis finished");
                AnalysisResult::ok(url.to_string(), score, words_count)
            }
            Err(e) => {
                let status = e.status();
                warn!(%status, error = %e, elapsed_secs, "Analysis failed");
                AnalysisResult::failed(url.to_string(), status)
            }
        }
    }

    /// The state machine: fetch under scope A, sanitize, then tokenize and
    /// score under scope B. Sanitizing is synchronous and cheap, so it runs
    /// between the scopes without a budget of its own.
    async fn run_pipeline(&self, url: &str) -> Result<(f64, usize), AnalyzeError> {
        let parsed = Url::parse(url)?;

        let html = timeout(self.fetch_timeout, fetch(&self.client, &parsed))
            .await
            .map_err(|_| AnalyzeError::Deadline {
                scope: TimeoutScope::Fetch,
            })??;

        let site = site_key(&parsed).unwrap_or_default();
        let sanitizer = self
            .sanitizers
            .get(&site)
            .ok_or_else(|| AnalyzeError::UnknownSite { site: site.clone() })?;
        let text = sanitizer.sanitize(&html, true)?;

        let (score, words_count) = timeout(self.calc_timeout, async {
            let words = split_by_words(self.morph.as_ref(), &text).await;
            let score = calculate_jaundice_rate(&words, &self.lexicon);
            (score, words.len())
        })
        .await
        .map_err(|_| AnalyzeError::Deadline {
            scope: TimeoutScope::Calc,
        })?;

        Ok((score, words_count))
    }

    /// Analyze a batch of URLs concurrently.
    ///
    /// Spawns one task per URL (at most [`MAX_CONCURRENT_ANALYSES`] in flight)
    /// and joins each task's own result, so there is no shared mutable result
    /// collection to corrupt. A task that panics is caught at its join handle
    /// and reported as [`ProcessingStatus::Unexpected`]; siblings keep
    /// running. Results come back in input order, one per requested URL.
    #[instrument(level = "info", skip_all, fields(urls = urls.len()))]
    pub async fn analyze_batch(&self, urls: &[String]) -> Vec<AnalysisResult> {
        let mut indexed: Vec<(usize, AnalysisResult)> =
            stream::iter(urls.iter().cloned().enumerate())
                .map(|(index, url)| {
                    let analyzer = self.clone();
                    async move {
                        let task_url = url.clone();
                        let handle =
                            tokio::spawn(
                                async move { analyzer.process_article(&task_url).await },
                            );
                        match handle.await {
                            Ok(result) => (index, result),
                            Err(e) => {
                                error!(index, %url, error = %e, "Analysis task died");
                                (index, AnalysisResult::failed(url, ProcessingStatus::Unexpected))
                            }
                        }
                    }
                })
                .buffer_unordered(MAX_CONCURRENT_ANALYSES)
                .collect()
                .await;

        indexed.sort_by_key(|(index, _)| *index);
        indexed.into_iter().map(|(_, result)| result).collect()
    }
}
