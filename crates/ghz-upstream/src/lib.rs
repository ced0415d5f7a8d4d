//! # ghz-upstream
//!
//! HTTP clients for the two upstream data sources of the Geohazard Gateway:
//! - the FDSN event service (seismic events, GeoJSON)
//! - the volcano service (flat record array, no server-side filtering)
//!
//! Both clients share one [`UpstreamClient`]. Any failure — transport,
//! non-success status, or a body that fails typed decode — surfaces as an
//! [`UpstreamError`]; there is no retry, caching, or partial fallback here.

pub mod seismic;
pub mod volcano;

mod error;
mod http;

pub use error::UpstreamError;
pub use seismic::{EventOrder, SeismicQuery, SpatialFilter};

use ghz_config::UpstreamConfig;

/// HTTP client for querying the upstream data sources.
pub struct UpstreamClient {
    http: reqwest::Client,
    seismic_base_url: String,
    volcano_url: String,
}

impl UpstreamClient {
    /// Create a client from upstream configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(config.user_agent.clone())
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            seismic_base_url: config.seismic_base_url.clone(),
            volcano_url: config.volcano_url.clone(),
        }
    }
}

impl Default for UpstreamClient {
    fn default() -> Self {
        Self::new(&UpstreamConfig::default())
    }
}
