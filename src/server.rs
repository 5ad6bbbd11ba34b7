//! HTTP front end for batch analysis.
//!
//! One endpoint: `GET /?urls=<a>,<b>,...` analyzes the listed articles and
//! returns a JSON array of per-URL results. The URL-count limit lives here,
//! in the service surface — the core batch orchestrator accepts any list.

use crate::analyzer::Analyzer;
use crate::models::AnalysisResult;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::error::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Most URLs accepted in a single request.
const MAX_URLS_PER_REQUEST: usize = 10;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    analyzer: Analyzer,
}

/// Query parameters of the analysis endpoint.
#[derive(Debug, Deserialize)]
struct AnalyzeParams {
    urls: Option<String>,
}

/// Build the router with the analysis endpoint and request tracing.
pub fn create_router(analyzer: Analyzer) -> Router {
    Router::new()
        .route("/", get(analyze_articles))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { analyzer })
}

/// Bind and serve the API until the process is stopped.
pub async fn serve(analyzer: Analyzer, port: u16) -> Result<(), Box<dyn Error>> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "API server listening");
    axum::serve(listener, create_router(analyzer)).await?;
    Ok(())
}

/// GET / — analyze a comma-separated list of article URLs.
async fn analyze_articles(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Json<Vec<AnalysisResult>>, (StatusCode, Json<serde_json::Value>)> {
    let urls: Vec<String> = params
        .urls
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect();

    if urls.is_empty() {
        return Err(bad_request("no urls in request"));
    }
    if urls.len() > MAX_URLS_PER_REQUEST {
        return Err(bad_request(&format!(
            "too many urls in request, should be {MAX_URLS_PER_REQUEST} or less"
        )));
    }

    let results = state.analyzer.analyze_batch(&urls).await;
    Ok(Json(results))
}

fn bad_request(message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::morph::DictMorph;
    use crate::sanitizers::SanitizerRegistry;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let analyzer = Analyzer::new(
            Arc::new(SanitizerRegistry::with_defaults()),
            Arc::new(DictMorph::new()),
            Arc::new(Lexicon::empty()),
        );
        create_router(analyzer)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_urls_is_client_error() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "no urls in request");
    }

    #[tokio::test]
    async fn test_more_than_ten_urls_is_rejected() {
        let urls: Vec<String> = (0..11).map(|i| format!("https://inosmi.ru/{i}")).collect();
        let uri = format!("/?urls={}", urls.join(","));
        let response = test_router()
            .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "too many urls in request, should be 10 or less");
    }

    #[tokio::test]
    async fn test_exactly_ten_urls_is_accepted() {
        // Bare domains fail fast as FETCH_ERROR without touching the network.
        let urls: Vec<String> = (0..10).map(|i| format!("inosmi-{i}")).collect();
        let uri = format!("/?urls={}", urls.join(","));
        let response = test_router()
            .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let results = body.as_array().unwrap();
        assert_eq!(results.len(), 10);
        for result in results {
            assert_eq!(result["status"], "FETCH_ERROR");
            assert!(result["score"].is_null());
        }
    }

    #[tokio::test]
    async fn test_result_array_matches_requested_urls() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/?urls=retyui.com,also-bare")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let results = body.as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["url"], "retyui.com");
        assert_eq!(results[1]["url"], "also-bare");
    }
}
