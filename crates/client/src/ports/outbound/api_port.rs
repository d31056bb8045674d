//! Raw API Port - Object-safe HTTP boundary
//!
//! The application layer works with typed wrappers, but the boundary
//! itself is an object-safe trait over JSON values so it can be stored
//! behind `Arc<dyn ...>` and mocked in tests.

use serde_json::Value;

/// Single failure shape for every backend interaction.
///
/// Two of the variants carry server intent: [`ApiError::Status`] wraps
/// the backend's `detail` string for a non-2xx response, and
/// [`ApiError::Unauthorized`] marks an expired or missing bearer token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx response; `detail` comes from the error body when the
    /// backend provided one.
    #[error("{detail}")]
    Status { status: u16, detail: String },
    /// 401 response; the cached credential is no longer valid.
    #[error("authentication expired, please log in again")]
    Unauthorized,
    /// The response body did not match the expected schema.
    #[error("failed to parse response: {0}")]
    Parse(String),
    /// The request payload could not be serialized.
    #[error("failed to serialize request: {0}")]
    Serialize(String),
}

/// Object-safe boundary implemented by HTTP adapters.
///
/// Paths are absolute (`/api/...`); authentication is an adapter
/// construction concern, not a per-call parameter.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// POST with an empty body, JSON response expected.
    async fn post_empty(&self, path: &str) -> Result<Value, ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn delete(&self, path: &str) -> Result<Value, ApiError>;

    /// Download an opaque payload (PNG character cards).
    async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError>;

    /// Upload one file as a multipart form (card import, images).
    async fn post_file(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, ApiError>;
}
