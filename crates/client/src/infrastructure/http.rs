//! Backend HTTP adapter built on reqwest.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::ports::outbound::{ApiError, RawApiPort, TokenProvider};

/// Reqwest-backed [`RawApiPort`] implementation.
///
/// Normalizes every failure into [`ApiError`]: non-2xx responses are
/// expected to carry a JSON body with a `detail` string; absence of a
/// parseable body falls back to a generic message plus the status
/// code. No retries anywhere - every call is attempted exactly once.
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    tokens: Option<Arc<dyn TokenProvider>>,
}

impl HttpApiClient {
    /// Create an unauthenticated client (gameplay endpoints).
    pub fn new(config: &ClientConfig) -> Self {
        Self::build(config, None)
    }

    /// Create a client that attaches `Authorization: Bearer ...` from
    /// the given provider whenever a token is cached (admin endpoints).
    pub fn with_token_provider(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        Self::build(config, Some(tokens))
    }

    fn build(config: &ClientConfig, tokens: Option<Arc<dyn TokenProvider>>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.as_ref().and_then(|t| t.token()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail: error_detail(status.as_u16(), &body),
            });
        }
        Ok(response)
    }

    async fn send_json(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = self.send(request).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Extract the `detail` string from an error body, or fall back to a
/// generic message carrying the HTTP status.
fn error_detail(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| format!("Request failed (HTTP {})", status))
}

#[async_trait::async_trait]
impl RawApiPort for HttpApiClient {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.send_json(self.client.get(self.url(path))).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send_json(self.client.post(self.url(path)).json(body))
            .await
    }

    async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        self.send_json(self.client.post(self.url(path))).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send_json(self.client.put(self.url(path)).json(body))
            .await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send_json(self.client.delete(self.url(path))).await
    }

    async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(self.client.get(self.url(path))).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn post_file(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);
        self.send_json(self.client.post(self.url(path)).multipart(form))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detail_prefers_server_message() {
        assert_eq!(
            error_detail(400, r#"{"detail": "World not found"}"#),
            "World not found"
        );
    }

    #[test]
    fn error_detail_falls_back_to_status() {
        assert_eq!(error_detail(500, "<html>oops</html>"), "Request failed (HTTP 500)");
        assert_eq!(error_detail(502, ""), "Request failed (HTTP 502)");
        // A JSON body without a detail field is still a fallback.
        assert_eq!(error_detail(400, r#"{"error": "x"}"#), "Request failed (HTTP 400)");
    }

    #[test]
    fn urls_join_without_double_slash() {
        let client = HttpApiClient::new(&ClientConfig::new("http://game.example/"));
        assert_eq!(client.url("/api/npc/talk"), "http://game.example/api/npc/talk");
    }
}
