use crate::prelude::*;
use std::time::Duration;

use numclass_core::fact::{extract_fact, fact_url, DEFAULT_FACT_API_URL, FALLBACK_FACT};

/// Trivia service settings shared by `serve` and `classify`
#[derive(Debug, Clone, clap::Args)]
pub struct FactOptions {
    /// Base URL of the Numbers API compatible trivia service
    #[arg(long, env = "FACT_API_URL", default_value = DEFAULT_FACT_API_URL)]
    pub fact_api_url: String,

    /// Timeout for a single trivia lookup, in milliseconds
    #[arg(long, env = "FACT_TIMEOUT_MS", default_value = "5000")]
    pub fact_timeout_ms: u64,
}

impl FactOptions {
    pub fn client(&self) -> Result<FactClient> {
        FactClient::new(
            self.fact_api_url.clone(),
            Duration::from_millis(self.fact_timeout_ms),
        )
    }
}

/// HTTP client for the trivia collaborator
///
/// Cheap to clone; every clone shares the same connection pool.
#[derive(Debug, Clone)]
pub struct FactClient {
    http: reqwest::Client,
    base_url: String,
}

impl FactClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("numclass/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build trivia HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the trivia string for `n`
    pub async fn fetch(&self, n: i64) -> Result<String, Error> {
        let url = fact_url(&self.base_url, n);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(f!("Failed to fetch {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(f!("Failed to read body from {url}: {e}")))?;

        extract_fact(&body).ok_or(Error::NoFact(n))
    }

    /// Fetch the trivia string for `n`, substituting the fallback on any failure
    pub async fn fetch_or_fallback(&self, n: i64) -> String {
        match self.fetch(n).await {
            Ok(fact) => fact,
            Err(e) => {
                log::warn!("Error fetching fun fact: {e}");
                FALLBACK_FACT.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, fact_stub, spawn_stub};
    use axum::{http::StatusCode, routing::get, Json, Router};

    #[tokio::test]
    async fn test_fetch_plain_text_fact() {
        let base = spawn_stub(fact_stub()).await;
        let client = FactClient::new(base, Duration::from_secs(2)).unwrap();

        assert_eq!(client.fetch(42).await.unwrap(), "42 is a number with a fact.");
    }

    #[tokio::test]
    async fn test_fetch_negative_number_path() {
        let base = spawn_stub(fact_stub()).await;
        let client = FactClient::new(base, Duration::from_secs(2)).unwrap();

        assert_eq!(client.fetch(-7).await.unwrap(), "-7 is a number with a fact.");
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let router = Router::new().route(
            "/{n}/math",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_stub(router).await;
        let client = FactClient::new(base, Duration::from_secs(2)).unwrap();

        match client.fetch(6).await {
            Err(Error::Status { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_json_object_is_no_fact() {
        let router = Router::new().route(
            "/{n}/math",
            get(|| async { Json(serde_json::json!({ "text": "6 is perfect." })) }),
        );
        let base = spawn_stub(router).await;
        let client = FactClient::new(base, Duration::from_secs(2)).unwrap();

        assert!(matches!(client.fetch(6).await, Err(Error::NoFact(6))));
        assert_eq!(client.fetch_or_fallback(6).await, FALLBACK_FACT);
    }

    #[tokio::test]
    async fn test_fetch_plain_text_number_is_no_fact() {
        let router = Router::new().route("/{n}/math", get(|| async { "42" }));
        let base = spawn_stub(router).await;
        let client = FactClient::new(base, Duration::from_secs(2)).unwrap();

        assert!(matches!(client.fetch(42).await, Err(Error::NoFact(42))));
    }

    #[tokio::test]
    async fn test_fetch_or_fallback_unreachable() {
        let client = FactClient::new(closed_port_url().await, Duration::from_secs(2)).unwrap();

        assert!(matches!(client.fetch(6).await, Err(Error::Network(_))));
        assert_eq!(client.fetch_or_fallback(6).await, FALLBACK_FACT);
    }

    #[tokio::test]
    async fn test_fetch_or_fallback_timeout() {
        let router = Router::new().route(
            "/{n}/math",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "too late"
            }),
        );
        let base = spawn_stub(router).await;
        let client = FactClient::new(base, Duration::from_millis(100)).unwrap();

        assert_eq!(client.fetch_or_fallback(6).await, FALLBACK_FACT);
    }
}
