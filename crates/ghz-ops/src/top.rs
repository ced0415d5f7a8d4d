//! The `top` operation: largest events in a period.

use ghz_core::responses::TopResponse;
use ghz_upstream::{EventOrder, SeismicQuery, UpstreamClient};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::OpsError;
use crate::validate;

const fn default_min_magnitude() -> f64 {
    5.0
}

const fn default_limit() -> u32 {
    10
}

/// Lookback period for `top`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Day,
    #[default]
    Week,
    Month,
}

impl Period {
    /// Lookback window length in days.
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for `top`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TopInput {
    #[serde(default)]
    pub period: Period,
    #[serde(default = "default_min_magnitude")]
    pub min_magnitude: f64,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for TopInput {
    fn default() -> Self {
        Self {
            period: Period::default(),
            min_magnitude: default_min_magnitude(),
            limit: default_limit(),
        }
    }
}

fn build_query(input: &TopInput) -> Result<SeismicQuery, OpsError> {
    validate::check_min_magnitude(input.min_magnitude)?;
    validate::check_limit(input.limit)?;

    Ok(SeismicQuery {
        lookback_days: input.period.days(),
        min_magnitude: input.min_magnitude,
        max_magnitude: None,
        spatial: None,
        order: EventOrder::Magnitude,
        limit: input.limit,
    })
}

/// Fetch the largest events of the period, by magnitude descending.
///
/// # Errors
///
/// Returns [`OpsError::InvalidInput`] for out-of-bounds parameters (before
/// any upstream request), or the upstream failure otherwise.
pub async fn top(client: &UpstreamClient, input: &TopInput) -> Result<TopResponse, OpsError> {
    let query = build_query(input)?;
    let events = client.fetch_events(&query).await?;

    Ok(TopResponse {
        period: input.period.to_string(),
        min_magnitude: input.min_magnitude,
        count: events.len(),
        events,
    })
}
