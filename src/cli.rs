//! Command-line interface definitions.
//!
//! All options can be provided as flags; the server port also falls back to
//! the `PORT` environment variable.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the jaundice-rate analyzer.
///
/// # Examples
///
/// ```sh
/// # Analyze a few articles and print the report
/// jaundice_rate https://inosmi.ru/20230213/luna-260489924.html
///
/// # Run the HTTP API instead
/// jaundice_rate --serve --port 8080
///
/// # Use a full lemma dictionary and custom deadlines
/// jaundice_rate --lemmas ./ru_lemmas.tsv --fetch-timeout-ms 3000 <url>...
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Article URLs to analyze
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Directory holding negative_words.txt and positive_words.txt
    #[arg(short, long, default_value = "charged_dict")]
    pub dict_dir: PathBuf,

    /// Lemma dictionary (TSV: inflected form, TAB, lemma)
    #[arg(short, long)]
    pub lemmas: Option<PathBuf>,

    /// Budget for fetching one article, in milliseconds
    #[arg(long, default_value_t = 1500)]
    pub fetch_timeout_ms: u64,

    /// Budget for tokenizing and scoring one article, in milliseconds
    #[arg(long, default_value_t = 3000)]
    pub calc_timeout_ms: u64,

    /// Run the HTTP API server instead of a one-shot batch
    #[arg(long)]
    pub serve: bool,

    /// Port for the HTTP API server
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_urls_and_defaults() {
        let cli = Cli::parse_from([
            "jaundice_rate",
            "https://inosmi.ru/a.html",
            "https://inosmi.ru/b.html",
        ]);

        assert_eq!(cli.urls.len(), 2);
        assert_eq!(cli.dict_dir, PathBuf::from("charged_dict"));
        assert_eq!(cli.fetch_timeout_ms, 1500);
        assert_eq!(cli.calc_timeout_ms, 3000);
        assert!(!cli.serve);
    }

    #[test]
    fn test_cli_serve_flags() {
        let cli = Cli::parse_from(["jaundice_rate", "--serve", "--port", "9090"]);

        assert!(cli.serve);
        assert_eq!(cli.port, 9090);
        assert!(cli.urls.is_empty());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "jaundice_rate",
            "-d",
            "/tmp/dict",
            "-l",
            "/tmp/lemmas.tsv",
            "https://inosmi.ru/a.html",
        ]);

        assert_eq!(cli.dict_dir, PathBuf::from("/tmp/dict"));
        assert_eq!(cli.lemmas, Some(PathBuf::from("/tmp/lemmas.tsv")));
    }
}
