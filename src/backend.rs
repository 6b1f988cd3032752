use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Used when `LEGALBOT_API_URL` is not set at all.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/chat";

pub const UNREACHABLE_MESSAGE: &str =
    "No se pudo contactar el backend. Se usará la respuesta simulada.";

/// Request body expected by the legal chat backend.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    question: &'a str,
    strict: bool,
    citations: bool,
}

/// Body of the backend's `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendHealth {
    #[serde(default)]
    pub status: String,
    /// Legal codes the backend has a retrieval index for.
    #[serde(default)]
    pub indexes: Vec<String>,
}

#[derive(Debug, Error)]
enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend answered HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("backend body is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Recovered backend failure. Routes the question to the local mock answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ErrorMarker {
    pub message: String,
}

impl ErrorMarker {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn unreachable() -> Self {
        Self::new(UNREACHABLE_MESSAGE)
    }
}

/// Turn the raw `LEGALBOT_API_URL` value into the URL to use.
///
/// Unset falls back to [`DEFAULT_API_URL`]; set-but-blank disables the backend.
pub fn api_url_from_override(value: Option<&str>) -> Option<String> {
    match value.map(str::trim) {
        None => Some(DEFAULT_API_URL.to_string()),
        Some("") => None,
        Some(url) => Some(url.to_string()),
    }
}

pub struct BackendClient {
    client: reqwest::Client,
    url: String,
}

impl BackendClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        // No timeout: a single best-effort attempt with transport defaults
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Read `LEGALBOT_API_URL` once. `Ok(None)` means the backend is disabled.
    pub fn from_env() -> Result<Option<Self>> {
        let raw = dotenv::var("LEGALBOT_API_URL").ok();
        api_url_from_override(raw.as_deref())
            .map(Self::new)
            .transpose()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the question once. Every failure collapses into an [`ErrorMarker`].
    pub async fn send(
        &self,
        question: &str,
        strict: bool,
        want_citations: bool,
    ) -> Result<Value, ErrorMarker> {
        match self.try_send(question, strict, want_citations).await {
            Ok(payload) => {
                debug!(url = %self.url, "backend payload received");
                Ok(payload)
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "backend unreachable, using mock answer");
                Err(ErrorMarker::unreachable())
            }
        }
    }

    /// Health endpoint living next to the chat endpoint, e.g. `/api/chat` -> `/api/health`.
    fn health_endpoint(&self) -> String {
        let base = self.url.trim_end_matches('/');
        let prefix = base.strip_suffix("/chat").unwrap_or(base);
        format!("{}/health", prefix)
    }

    /// One best-effort health check. `None` when the backend cannot be reached.
    pub async fn health(&self) -> Option<BackendHealth> {
        let endpoint = self.health_endpoint();
        match self.try_health(&endpoint).await {
            Ok(health) => {
                debug!(url = %endpoint, status = %health.status, indexes = health.indexes.len(), "backend health");
                Some(health)
            }
            Err(e) => {
                warn!(url = %endpoint, error = %e, "backend health check failed");
                None
            }
        }
    }

    async fn try_health(&self, endpoint: &str) -> Result<BackendHealth, BackendError> {
        let resp = self.client.get(endpoint).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn try_send(
        &self,
        question: &str,
        strict: bool,
        want_citations: bool,
    ) -> Result<Value, BackendError> {
        let body = ChatRequest {
            question,
            strict,
            citations: want_citations,
        };

        let resp = self.client.post(&self.url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{spawn_stub, unreachable_url};

    #[test]
    fn test_api_url_default_when_unset() {
        assert_eq!(api_url_from_override(None).as_deref(), Some(DEFAULT_API_URL));
    }

    #[test]
    fn test_api_url_blank_disables_backend() {
        assert_eq!(api_url_from_override(Some("")), None);
        assert_eq!(api_url_from_override(Some("   ")), None);
    }

    #[test]
    fn test_api_url_explicit_override() {
        assert_eq!(
            api_url_from_override(Some(" https://legal.example/api/chat ")).as_deref(),
            Some("https://legal.example/api/chat")
        );
    }

    #[tokio::test]
    async fn test_send_posts_question_and_flags() {
        let mut stub = spawn_stub(200, r#"{"answer":"ok"}"#).await;
        let client = BackendClient::new(stub.url.clone()).unwrap();

        let payload = client.send("¿Qué es el fuero?", true, false).await.unwrap();
        assert_eq!(payload, serde_json::json!({"answer": "ok"}));

        let request = stub.requests.recv().await.unwrap();
        assert_eq!(request.path, "/api/chat");
        let sent: Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({
                "question": "¿Qué es el fuero?",
                "strict": true,
                "citations": false,
            })
        );
    }

    #[tokio::test]
    async fn test_send_passes_payload_through_unvalidated() {
        let stub = spawn_stub(200, r#"[1, "two", null]"#).await;
        let client = BackendClient::new(stub.url.clone()).unwrap();

        let payload = client.send("q", false, false).await.unwrap();
        assert_eq!(payload, serde_json::json!([1, "two", null]));
    }

    #[tokio::test]
    async fn test_send_http_error_is_marker() {
        let stub = spawn_stub(500, r#"{"detail":"boom"}"#).await;
        let client = BackendClient::new(stub.url.clone()).unwrap();

        let err = client.send("q", true, true).await.unwrap_err();
        assert_eq!(err, ErrorMarker::unreachable());
    }

    #[tokio::test]
    async fn test_send_client_error_is_marker() {
        let stub = spawn_stub(404, "not found").await;
        let client = BackendClient::new(stub.url.clone()).unwrap();

        assert_eq!(
            client.send("q", true, true).await.unwrap_err().message,
            UNREACHABLE_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_send_non_json_success_is_marker() {
        let stub = spawn_stub(200, "<html>gateway</html>").await;
        let client = BackendClient::new(stub.url.clone()).unwrap();

        assert_eq!(
            client.send("q", true, true).await.unwrap_err(),
            ErrorMarker::unreachable()
        );
    }

    #[tokio::test]
    async fn test_send_connection_refused_is_marker() {
        let client = BackendClient::new(unreachable_url()).unwrap();
        assert_eq!(
            client.send("q", true, true).await.unwrap_err(),
            ErrorMarker::unreachable()
        );
    }

    #[test]
    fn test_health_endpoint_next_to_chat() {
        let client = BackendClient::new("http://localhost:8000/api/chat/").unwrap();
        assert_eq!(client.health_endpoint(), "http://localhost:8000/api/health");

        let client = BackendClient::new("https://legal.example/bot").unwrap();
        assert_eq!(client.health_endpoint(), "https://legal.example/bot/health");
    }

    #[tokio::test]
    async fn test_health_reports_indexes() {
        let mut stub = spawn_stub(
            200,
            r#"{"status": "ok", "indexes": ["codigo_penal", "codigo_civil"]}"#,
        )
        .await;
        let client = BackendClient::new(stub.url.clone()).unwrap();

        let health = client.health().await.unwrap();
        assert_eq!(
            health,
            BackendHealth {
                status: "ok".to_string(),
                indexes: vec!["codigo_penal".to_string(), "codigo_civil".to_string()],
            }
        );
        assert_eq!(stub.requests.recv().await.unwrap().path, "/api/health");
    }

    #[tokio::test]
    async fn test_health_failures_collapse_to_none() {
        let stub = spawn_stub(500, r#"{"detail": "no indexes"}"#).await;
        assert!(BackendClient::new(stub.url.clone()).unwrap().health().await.is_none());

        let stub = spawn_stub(200, "not json").await;
        assert!(BackendClient::new(stub.url.clone()).unwrap().health().await.is_none());

        let client = BackendClient::new(unreachable_url()).unwrap();
        assert!(client.health().await.is_none());
    }
}
