//! The `search` operation: parametric seismic event search.

use ghz_core::GeoPoint;
use ghz_core::responses::{SearchFilters, SearchResponse};
use ghz_upstream::{EventOrder, SeismicQuery, SpatialFilter, UpstreamClient};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OpsError;
use crate::validate;

const fn default_radius_km() -> f64 {
    500.0
}

const fn default_min_magnitude() -> f64 {
    4.0
}

const fn default_days() -> u32 {
    7
}

const fn default_limit() -> u32 {
    20
}

/// Parameters for `search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchInput {
    /// Spatial center latitude; ignored unless `longitude` is also set.
    pub latitude: Option<f64>,
    /// Spatial center longitude; ignored unless `latitude` is also set.
    pub longitude: Option<f64>,
    /// Spatial radius; only applied when a complete center is supplied.
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
    #[serde(default = "default_min_magnitude")]
    pub min_magnitude: f64,
    pub max_magnitude: Option<f64>,
    /// Lookback window in days.
    #[serde(default = "default_days")]
    pub days: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            radius_km: default_radius_km(),
            min_magnitude: default_min_magnitude(),
            max_magnitude: None,
            days: default_days(),
            limit: default_limit(),
        }
    }
}

/// Validate the input and build the outbound query.
///
/// The spatial filter is attached only when BOTH latitude and longitude are
/// present. One without the other never produces a partial filter: the
/// incomplete coordinate is dropped and the search runs unfiltered, matching
/// the event service's both-or-neither contract.
fn build_query(input: &SearchInput) -> Result<SeismicQuery, OpsError> {
    validate::check_magnitude_bounds(input.min_magnitude, input.max_magnitude)?;
    validate::check_limit(input.limit)?;

    if !validate::DAYS_RANGE.contains(&input.days) {
        return Err(OpsError::invalid(
            "days",
            format!(
                "must be within [{}, {}], got {}",
                validate::DAYS_RANGE.start(),
                validate::DAYS_RANGE.end(),
                input.days
            ),
        ));
    }

    let spatial = match (input.latitude, input.longitude) {
        (Some(latitude), Some(longitude)) => {
            validate::check_latitude(latitude)?;
            validate::check_longitude(longitude)?;
            if !input.radius_km.is_finite()
                || input.radius_km <= 0.0
                || input.radius_km > validate::MAX_SEARCH_RADIUS_KM
            {
                return Err(OpsError::invalid(
                    "radius_km",
                    format!(
                        "must be within (0, {}], got {}",
                        validate::MAX_SEARCH_RADIUS_KM,
                        input.radius_km
                    ),
                ));
            }
            Some(SpatialFilter {
                center: GeoPoint::new(latitude, longitude),
                radius_km: input.radius_km,
            })
        }
        _ => None,
    };

    Ok(SeismicQuery {
        lookback_days: input.days,
        min_magnitude: input.min_magnitude,
        max_magnitude: input.max_magnitude,
        spatial,
        order: EventOrder::Time,
        limit: input.limit,
    })
}

/// Search seismic events, newest first.
///
/// # Errors
///
/// Returns [`OpsError::InvalidInput`] for out-of-bounds parameters (before
/// any upstream request), or the upstream failure otherwise.
pub async fn search(
    client: &UpstreamClient,
    input: &SearchInput,
) -> Result<SearchResponse, OpsError> {
    let query = build_query(input)?;
    let events = client.fetch_events(&query).await?;

    Ok(SearchResponse {
        filters: SearchFilters {
            center: query.spatial.map(|s| s.center),
            radius_km: query.spatial.map(|s| s.radius_km),
            min_magnitude: input.min_magnitude,
            max_magnitude: input.max_magnitude,
            days: input.days,
            limit: input.limit,
        },
        count: events.len(),
        events,
    })
}
