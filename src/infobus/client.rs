//! Infobús HTTP client.
//!
//! Issues single GET requests against the configured API base URL and hands
//! back either the parsed JSON body or a [`FetchError`]. Nothing in here
//! retries or caches.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{FetchError, InfobusError};
use crate::core::config::InfobusConfig;

/// Fixed per-request timeout.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of redirects followed per request.
const MAX_REDIRECTS: usize = 10;

/// Path of the next-trips endpoint, relative to the base URL.
pub const NEXT_TRIPS_PATH: &str = "/next-trips/";

/// Outcome of one upstream call.
pub type UpstreamResult = Result<Value, FetchError>;

/// Infobús API client.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct InfobusClient {
    http: reqwest::Client,
    base_url: String,
}

impl InfobusClient {
    /// Create a new client from configuration.
    pub fn new(config: &InfobusConfig) -> Result<Self, InfobusError> {
        Self::with_timeout(config, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    fn with_timeout(config: &InfobusConfig, timeout: Duration) -> Result<Self, InfobusError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{path}` with `params` as the query string.
    ///
    /// Never fails in the `?` sense: every transport, status and decoding
    /// problem comes back as `Err(FetchError)` for the caller to render.
    #[instrument(skip(self, params), fields(base = %self.base_url))]
    pub async fn fetch(&self, path: &str, params: &[(&str, &str)]) -> UpstreamResult {
        let url = format!("{}{}", self.base_url, path);

        match self.try_fetch(&url, params).await {
            Ok(body) => {
                debug!("Upstream request to {} succeeded", url);
                Ok(body)
            }
            Err(err) => {
                let err = FetchError::from(err);
                warn!(kind = %err.kind, "Upstream request to {} failed: {}", url, err.message);
                Err(err)
            }
        }
    }

    /// Fetch the next arrivals at a stop.
    ///
    /// `timestamp` is forwarded verbatim; the upstream expects ISO 8601.
    pub async fn next_trips(&self, stop_id: &str, timestamp: &str) -> UpstreamResult {
        self.fetch(
            NEXT_TRIPS_PATH,
            &[("stop_id", stop_id), ("timestamp", timestamp)],
        )
        .await
    }

    async fn try_fetch(&self, url: &str, params: &[(&str, &str)]) -> reqwest::Result<Value> {
        let response = self
            .http
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        response.json::<Value>().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infobus::FailureKind;
    use crate::infobus::test_support::{spawn_upstream, unreachable_base_url};
    use axum::{
        Json, Router,
        extract::{Path, Query},
        http::{HeaderMap as AxumHeaders, StatusCode},
        response::Redirect,
        routing::get,
    };
    use serde_json::json;
    use std::collections::HashMap;

    fn config_for(base_url: &str) -> InfobusConfig {
        InfobusConfig {
            base_url: base_url.to_string(),
            user_agent: "transit-test/0.1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_parsed_body() {
        let app = Router::new().route(
            "/api/next-trips/",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                Json(json!({
                    "stop_id": q.get("stop_id"),
                    "timestamp": q.get("timestamp"),
                    "next_arrivals": []
                }))
            }),
        );
        let base = spawn_upstream(app).await;
        let client = InfobusClient::new(&config_for(&format!("{base}/api"))).unwrap();

        let body = client
            .next_trips("bUCR_0_01", "2025-06-01T08:30:00")
            .await
            .unwrap();

        assert_eq!(body["stop_id"], "bUCR_0_01");
        assert_eq!(body["timestamp"], "2025-06-01T08:30:00");
        assert_eq!(body["next_arrivals"], json!([]));
    }

    #[tokio::test]
    async fn test_fetch_sends_fixed_headers() {
        let app = Router::new().route(
            "/echo",
            get(|headers: AxumHeaders| async move {
                let header = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string)
                };
                Json(json!({
                    "user_agent": header("user-agent"),
                    "accept": header("accept"),
                }))
            }),
        );
        let base = spawn_upstream(app).await;
        let client = InfobusClient::new(&config_for(&base)).unwrap();

        let body = client.fetch("/echo", &[]).await.unwrap();

        assert_eq!(body["user_agent"], "transit-test/0.1");
        assert_eq!(body["accept"], "application/json");
    }

    #[tokio::test]
    async fn test_fetch_trims_trailing_slash_from_base() {
        let app = Router::new().route("/api/ping", get(|| async { Json(json!({"ok": true})) }));
        let base = spawn_upstream(app).await;
        let client = InfobusClient::new(&config_for(&format!("{base}/api/"))).unwrap();

        assert_eq!(client.base_url(), format!("{base}/api"));
        assert!(client.fetch("/ping", &[]).await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_follows_redirects() {
        let app = Router::new()
            .route("/old", get(|| async { Redirect::temporary("/new") }))
            .route("/new", get(|| async { Json(json!({"moved": true})) }));
        let base = spawn_upstream(app).await;
        let client = InfobusClient::new(&config_for(&base)).unwrap();

        let body = client.fetch("/old", &[]).await.unwrap();
        assert_eq!(body["moved"], true);
    }

    #[tokio::test]
    async fn test_fetch_redirect_limit_is_error_value() {
        let app = Router::new().route(
            "/hop/{n}",
            get(|Path(n): Path<u32>| async move { Redirect::temporary(&format!("/hop/{}", n + 1)) }),
        );
        let base = spawn_upstream(app).await;
        let client = InfobusClient::new(&config_for(&base)).unwrap();

        let err = client.fetch("/hop/0", &[]).await.unwrap_err();

        assert_eq!(err.kind, FailureKind::TooManyRedirects);
        assert!(err.to_string().starts_with("TooManyRedirects: "));
    }

    #[tokio::test]
    async fn test_fetch_slow_upstream_is_timeout() {
        let app = Router::new().route(
            "/next-trips/",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"next_arrivals": []}))
            }),
        );
        let base = spawn_upstream(app).await;
        let client =
            InfobusClient::with_timeout(&config_for(&base), Duration::from_millis(100)).unwrap();

        let err = client.next_trips("stop", "ts").await.unwrap_err();

        assert_eq!(err.kind, FailureKind::Timeout);
        assert!(err.to_string().starts_with("TimeoutError: "));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_error_value() {
        let app = Router::new().route(
            "/next-trips/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_upstream(app).await;
        let client = InfobusClient::new(&config_for(&base)).unwrap();

        let err = client.next_trips("stop", "2025-01-01T00:00:00").await.unwrap_err();

        assert_eq!(err.kind, FailureKind::HttpStatus);
        assert!(err.to_string().starts_with("HTTPStatusError: "));
        assert!(err.message.contains("500"));
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_error_value() {
        let base = spawn_upstream(Router::new()).await;
        let client = InfobusClient::new(&config_for(&base)).unwrap();

        let err = client.fetch("/missing", &[]).await.unwrap_err();
        assert_eq!(err.kind, FailureKind::HttpStatus);
        assert!(err.message.contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_is_error_value() {
        let app = Router::new().route("/next-trips/", get(|| async { "<html>not json</html>" }));
        let base = spawn_upstream(app).await;
        let client = InfobusClient::new(&config_for(&base)).unwrap();

        let err = client.next_trips("stop", "ts").await.unwrap_err();
        assert_eq!(err.kind, FailureKind::Decode);
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_error_value() {
        let base = unreachable_base_url().await;
        let client = InfobusClient::new(&config_for(&base)).unwrap();

        let err = client.next_trips("stop", "ts").await.unwrap_err();
        assert_eq!(err.kind, FailureKind::Connect);
        assert!(err.to_string().starts_with("ConnectError: "));
    }

    #[tokio::test]
    async fn test_fetch_invalid_base_url_is_error_value() {
        let client = InfobusClient::new(&config_for("not a url")).unwrap();

        let err = client.fetch("/next-trips/", &[]).await.unwrap_err();
        assert_eq!(err.kind, FailureKind::Request);
    }

    #[test]
    fn test_invalid_user_agent_fails_construction() {
        let config = InfobusConfig {
            base_url: "http://localhost".to_string(),
            user_agent: "bad\nagent".to_string(),
        };
        assert!(InfobusClient::new(&config).is_err());
    }
}
