//! Sanitizer for inosmi.ru articles.
//!
//! inosmi.ru marks the article body with `div.article__text` and the headline
//! with `h1.article__title`. Everything else on the page (navigation, promo
//! blocks, comment widgets) is chrome and never reaches the scorer.

use crate::error::ArticleNotFound;
use crate::sanitizers::Sanitize;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

static HEADLINE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1.article__title").unwrap());
static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.article__text").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Extractor for the inosmi.ru article template.
pub struct InosmiSanitizer;

impl Sanitize for InosmiSanitizer {
    fn sanitize(&self, html: &str, plaintext: bool) -> Result<String, ArticleNotFound> {
        let document = Html::parse_document(html);

        // An article page without the body block is some other page type.
        if document.select(&BODY_SELECTOR).next().is_none() {
            return Err(ArticleNotFound);
        }

        let mut output = String::new();
        for element in document
            .select(&HEADLINE_SELECTOR)
            .chain(document.select(&BODY_SELECTOR))
        {
            let chunk = if plaintext {
                element.text().collect::<Vec<_>>().join(" ")
            } else {
                element.html()
            };
            output.push_str(&chunk);
            output.push('\n');
        }

        if plaintext {
            output = WHITESPACE.replace_all(output.trim(), " ").to_string();
        }
        debug!(bytes = output.len(), plaintext, "Sanitized inosmi article");
        Ok(output)
    }
}
