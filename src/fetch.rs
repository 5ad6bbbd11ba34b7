//! HTML retrieval for a single article URL.
//!
//! One GET per call; redirects, TLS, and connection pooling belong to the
//! reqwest client the caller hands in. The deadline around a fetch is owned
//! by the analyzer's fetch scope, not by this module.

use crate::error::AnalyzeError;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

/// Fetch the raw HTML of an article.
///
/// Non-2xx responses, connection failures, and DNS errors all surface as
/// [`AnalyzeError::Fetch`].
#[instrument(level = "debug", skip_all, fields(url = %url))]
pub async fn fetch(client: &Client, url: &Url) -> Result<String, AnalyzeError> {
    let response = client.get(url.clone()).send().await?;
    let response = response.error_for_status()?;
    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched article HTML");
    Ok(body)
}
