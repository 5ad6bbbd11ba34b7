//! # Jaundice Rate
//!
//! Scores news articles for sensationalism: the share of an article's
//! normalized words that appear in a lexicon of emotionally charged words.
//!
//! ## Features
//!
//! - Batch-analyzes article URLs concurrently, one independent result per URL
//! - Two independent deadlines per article: one for the network fetch, one
//!   for tokenizing and scoring
//! - Pluggable per-site sanitizers that strip page chrome before scoring
//! - Closed status taxonomy (OK, FETCH_ERROR, PARSING_ERROR, TIMEOUT) so a
//!   failing article never disturbs its siblings
//! - Optional HTTP API returning the batch report as JSON
//!
//! ## Usage
//!
//! ```sh
//! jaundice_rate https://inosmi.ru/20230213/luna-260489924.html
//! jaundice_rate --serve --port 8080
//! ```
//!
//! ## Architecture
//!
//! Per article the pipeline is: fetch (scope A) → sanitize → tokenize,
//! normalize, and score (scope B). The batch orchestrator fans articles out
//! over concurrent tasks (12 at a time) and joins their results in input
//! order.

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod analyzer;
mod cli;
mod error;
mod fetch;
mod lexicon;
mod models;
mod morph;
mod sanitizers;
mod server;
mod text_tools;

use analyzer::Analyzer;
use cli::Cli;
use lexicon::load_charged_words;
use morph::{DictMorph, Morph};
use sanitizers::SanitizerRegistry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("jaundice_rate starting up");

    let args = Cli::parse();
    debug!(?args.dict_dir, ?args.lemmas, serve = args.serve, "Parsed CLI arguments");

    // --- Collaborators: normalizer, lexicon, sanitizers ---
    let morph: Arc<dyn Morph> = match &args.lemmas {
        Some(path) => Arc::new(DictMorph::load(path).await?),
        None => {
            info!("No lemma dictionary supplied; normalization falls back to case folding");
            Arc::new(DictMorph::new())
        }
    };

    let lexicon = match load_charged_words(&args.dict_dir).await {
        Ok(lexicon) => Arc::new(lexicon),
        Err(e) => {
            error!(
                dict_dir = %args.dict_dir.display(),
                error = %e,
                "Failed to load charged-word lexicon (check --dict-dir)"
            );
            return Err(e);
        }
    };

    let sanitizers = Arc::new(SanitizerRegistry::with_defaults());
    info!(
        charged_words = lexicon.len(),
        sanitizers = sanitizers.len(),
        "Collaborators initialized"
    );

    let analyzer = Analyzer::new(sanitizers, morph, lexicon)
        .fetch_timeout(Duration::from_millis(args.fetch_timeout_ms))
        .calc_timeout(Duration::from_millis(args.calc_timeout_ms));

    // --- Serve or run one batch ---
    if args.serve {
        return server::serve(analyzer, args.port).await;
    }

    if args.urls.is_empty() {
        error!("No article URLs given (pass URLs as arguments, or --serve)");
        return Err("no article URLs given".into());
    }

    let results = analyzer.analyze_batch(&args.urls).await;
    for result in &results {
        println!("URL: {}", result.url);
        println!("Status: {}", result.status);
        match (result.score, result.words_count) {
            (Some(score), Some(words_count)) => {
                println!("Score: {score}");
                println!("Words in article: {words_count}");
            }
            _ => {
                println!("Score: -");
                println!("Words in article: -");
            }
        }
        println!();
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        articles = results.len(),
        "Execution complete"
    );

    Ok(())
}
