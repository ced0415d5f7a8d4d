//! Upstream data-source configuration.

use serde::{Deserialize, Serialize};

/// Default FDSN event service base URL.
fn default_seismic_base_url() -> String {
    "https://earthquake.usgs.gov/fdsnws/event/1".to_string()
}

/// Default volcano list endpoint.
fn default_volcano_url() -> String {
    "https://volcanoes.usgs.gov/vsc/api/volcanoApi/volcanoesGVP".to_string()
}

/// Default HTTP timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

/// Default user agent sent on upstream requests.
fn default_user_agent() -> String {
    "geohazard-gateway/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL of the FDSN event service (no trailing slash).
    #[serde(default = "default_seismic_base_url")]
    pub seismic_base_url: String,

    /// Full URL of the volcano list endpoint.
    #[serde(default = "default_volcano_url")]
    pub volcano_url: String,

    /// Per-request timeout. The upstream services publish no latency
    /// guarantees, so requests must not suspend unboundedly.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent on upstream requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            seismic_base_url: default_seismic_base_url(),
            volcano_url: default_volcano_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}
