//! Client configuration.

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default overall request timeout in seconds.
///
/// Narrative actions go through an LLM server-side and can be slow.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Connection settings for the backend API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// Overall per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create config from environment variables.
    ///
    /// Uses `REVERIE_API_URL` and `REVERIE_REQUEST_TIMEOUT_SECS`,
    /// falling back to defaults if not set.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("REVERIE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = std::env::var("REVERIE_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            timeout_secs,
            ..Self::new(&base_url)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://game.example/");
        assert_eq!(config.base_url, "http://game.example");
    }

    #[test]
    fn default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
