use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::status::StatusPolicy;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Client-wide settings.
///
/// Can be built in code or read from a JSON file:
/// ```json
/// {
///   "base_url": "https://api.example.com/v1/",
///   "status_policy": "exact_ok_for_get",
///   "timeout_ms": 1500
/// }
/// ```
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base that relative targets are joined onto.
    pub base_url: Option<Url>,
    pub status_policy: StatusPolicy,
    /// Whole-exchange timeout in milliseconds for the reqwest transport.
    /// `None` disables it.
    pub timeout_ms: Option<u64>,
    /// Connect timeout in milliseconds for the reqwest transport. `None`
    /// disables it.
    pub connect_timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            status_policy: StatusPolicy::default(),
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            connect_timeout_ms: Some(DEFAULT_CONNECT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read client config '{path}'"))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse client config '{path}'"))
    }

    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout_ms = timeout.map(duration_ms);
        self
    }

    pub fn connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout_ms = timeout.map(duration_ms);
        self
    }

    pub(crate) fn timeout_duration(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub(crate) fn connect_timeout_duration(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }
}

/// Whole milliseconds, rounding any sub-millisecond remainder up so a
/// non-zero duration never becomes a zero timeout.
fn duration_ms(d: Duration) -> u64 {
    let ms = d.as_millis() + u128::from(d.subsec_nanos() % 1_000_000 != 0);
    u64::try_from(ms).unwrap_or(u64::MAX)
}
