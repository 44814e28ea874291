//! Gateway configuration resolved at build time.
//!
//! Browser builds have no process environment, so overrides are baked in
//! with `option_env!` when the wasm bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Fixed settings for the shared [`Gateway`](super::gateway::Gateway).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// URL prefix every API path is resolved under, without a trailing `/`.
    pub base_url: String,
    /// In-flight requests older than this are abandoned and reported as timeouts.
    pub timeout: Duration,
    /// Value of the default `Content-Type` header.
    pub content_type: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            content_type: DEFAULT_CONTENT_TYPE.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `TUTOR_API_BASE_URL`: default `http://127.0.0.1:5000/api`
    /// - `TUTOR_API_TIMEOUT_MS`: default 10000
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TUTOR_API_BASE_URL"), option_env!("TUTOR_API_TIMEOUT_MS"))
    }

    fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        let base_url = base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or(defaults.base_url, |v| v.trim_end_matches('/').to_owned());
        let timeout = parse_timeout_ms(timeout_ms).unwrap_or(defaults.timeout);
        Self { base_url, timeout, content_type: defaults.content_type }
    }

    /// Resolve an API path (`/course/42`) against the base address.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

fn parse_timeout_ms(raw: Option<&str>) -> Option<Duration> {
    let raw = raw?;
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Some(Duration::from_millis(ms)),
        _ => {
            log::warn!("ignoring invalid TUTOR_API_TIMEOUT_MS value: {raw}");
            None
        }
    }
}
