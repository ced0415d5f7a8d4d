//! The `report` operation: a combined seismic + volcanic hazard assessment
//! for a point and radius.
//!
//! The two upstream fetches run concurrently and the report suspends until
//! both complete; the first failure aborts the whole report. There is no
//! quakes-only or volcanoes-only degraded mode.

use chrono::{DateTime, Utc};
use ghz_core::geo::GeoPoint;
use ghz_core::models::{RankedVolcano, SeismicEvent, VolcanoRecord};
use ghz_core::rank::rank_by_distance;
use ghz_core::responses::{ReportResponse, RiskSummary};
use ghz_core::risk::{SIGNIFICANT_MAGNITUDE, classify};
use ghz_upstream::{EventOrder, SeismicQuery, SpatialFilter, UpstreamClient};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OpsError;
use crate::validate;

/// Lookback window for the seismic side of a report.
const LOOKBACK_DAYS: u32 = 30;
/// Minimum magnitude fetched; low so minor activity informs the counts.
const MIN_MAGNITUDE: f64 = 2.0;
/// Cap on events fetched, strongest first.
const EVENT_LIMIT: u32 = 50;
/// Cap on events echoed back in the response.
const EVENT_PREVIEW_CAP: usize = 15;
/// Cap on nearby volcanoes ranked and returned.
const VOLCANO_CAP: usize = 20;

/// Accepted radius range for a report, in kilometers.
const RADIUS_RANGE: std::ops::RangeInclusive<f64> = 50.0..=1000.0;

const fn default_radius_km() -> f64 {
    300.0
}

/// Parameters for `report`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportInput {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
}

impl ReportInput {
    fn validate(&self) -> Result<GeoPoint, OpsError> {
        validate::check_latitude(self.latitude)?;
        validate::check_longitude(self.longitude)?;
        if !self.radius_km.is_finite() || !RADIUS_RANGE.contains(&self.radius_km) {
            return Err(OpsError::invalid(
                "radius_km",
                format!(
                    "must be within [{}, {}], got {}",
                    RADIUS_RANGE.start(),
                    RADIUS_RANGE.end(),
                    self.radius_km
                ),
            ));
        }
        Ok(GeoPoint::new(self.latitude, self.longitude))
    }
}

/// Produce a geohazard report for a point and radius.
///
/// # Errors
///
/// Returns [`OpsError::InvalidInput`] for out-of-bounds parameters (before
/// any upstream request). Either upstream failing fails the whole report.
pub async fn report(
    client: &UpstreamClient,
    input: &ReportInput,
) -> Result<ReportResponse, OpsError> {
    let center = input.validate()?;

    let query = SeismicQuery {
        lookback_days: LOOKBACK_DAYS,
        min_magnitude: MIN_MAGNITUDE,
        max_magnitude: None,
        spatial: Some(SpatialFilter {
            center,
            radius_km: input.radius_km,
        }),
        order: EventOrder::Magnitude,
        limit: EVENT_LIMIT,
    };

    let (events, volcanoes) =
        tokio::try_join!(client.fetch_events(&query), client.fetch_volcanoes())?;
    tracing::debug!(
        events = events.len(),
        volcanoes = volcanoes.len(),
        "report upstream fetches complete"
    );

    Ok(shape(center, input.radius_km, events, &volcanoes, Utc::now()))
}

/// Shape the fetched data into the report response. Pure.
fn shape(
    center: GeoPoint,
    radius_km: f64,
    events: Vec<SeismicEvent>,
    volcanoes: &[VolcanoRecord],
    fetched_at: DateTime<Utc>,
) -> ReportResponse {
    let ranked = rank_by_distance(volcanoes, center, radius_km, VOLCANO_CAP);

    let significant = events
        .iter()
        .filter(|event| event.magnitude >= SIGNIFICANT_MAGNITUDE)
        .count();
    let level = classify(u32::try_from(significant).unwrap_or(u32::MAX));

    let nearby_volcanoes: Vec<RankedVolcano> = ranked
        .into_iter()
        .map(|entry| RankedVolcano {
            distance_km: round_tenth(entry.distance_km),
            volcano: entry.volcano,
        })
        .collect();

    ReportResponse {
        location: center,
        radius_km,
        risk: RiskSummary {
            level,
            total_events: events.len(),
            significant_events: significant,
            nearby_volcano_count: nearby_volcanoes.len(),
        },
        recent_events: events.into_iter().take(EVENT_PREVIEW_CAP).collect(),
        nearby_volcanoes,
        sources: vec![
            "USGS Earthquake Hazards Program (FDSN event service)".to_string(),
            "USGS Volcano Hazards Program".to_string(),
        ],
        fetched_at,
    }
}

/// Round to one decimal place for presentation. The unrounded distance
/// drives filtering and ordering.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
