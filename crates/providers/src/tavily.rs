//! Tavily web-search client.
//!
//! `POST {api_url}/search` with the API key in the JSON body; the answer is a
//! list of `results`, each with a `content` snippet.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use weatherwear_core::error::SearchError;
use weatherwear_core::search::{SearchHit, WebSearch};

pub struct TavilyClient {
    base_url: String,
    api_key: Option<String>,
    max_results: u32,
    search_depth: String,
    client: reqwest::Client,
}

impl TavilyClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            max_results: 5,
            search_depth: "basic".into(),
            client: builder.build().unwrap_or_default(),
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_search_depth(mut self, depth: impl Into<String>) -> Self {
        self.search_depth = depth.into();
        self
    }
}

#[async_trait]
impl WebSearch for TavilyClient {
    fn name(&self) -> &str {
        "tavily"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SearchError::NotConfigured("no Tavily API key set".into()))?;

        let body = SearchRequest {
            api_key,
            query,
            max_results: self.max_results,
            search_depth: &self.search_depth,
        };

        debug!(query = %query, "Sending search request");

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %message, "Search API returned error");
            return Err(SearchError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        debug!(hits = parsed.results.len(), "Search completed");
        Ok(parsed.results)
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: u32,
    search_depth: &'a str,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_hits_in_order() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_partial_json(serde_json::json!({
                "api_key": "tvly-test",
                "query": "what is the  Mumbai weather ?",
                "max_results": 3
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "query": "what is the  Mumbai weather ?",
                "results": [
                    { "title": "Mumbai Weather", "url": "https://example.com/a", "content": "31°C and humid" },
                    { "title": "Forecast", "url": "https://example.com/b", "content": "Light showers by evening" }
                ]
            })))
            .mount(&server)
            .await;

        let client = TavilyClient::new(server.uri(), Some("tvly-test".into()), None).with_max_results(3);
        let hits = client.search("what is the  Mumbai weather ?").await.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].content, "31°C and humid");
        assert_eq!(hits[1].title, "Forecast");
    }

    #[tokio::test]
    async fn missing_results_field_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = TavilyClient::new(server.uri(), Some("k".into()), None);
        assert!(client.search("anything").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(432).set_body_string("plan limit"))
            .mount(&server)
            .await;

        let client = TavilyClient::new(server.uri(), Some("k".into()), None);
        let err = client.search("anything").await.unwrap_err();
        assert!(matches!(err, SearchError::Api { status_code: 432, .. }));
    }

    #[tokio::test]
    async fn missing_key_is_not_configured() {
        let client = TavilyClient::new("http://127.0.0.1:9", None, None);
        let err = client.search("anything").await.unwrap_err();
        assert!(matches!(err, SearchError::NotConfigured(_)));
    }
}
