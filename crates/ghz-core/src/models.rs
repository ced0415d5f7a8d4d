//! Typed records decoded from the two upstream sources.
//!
//! These are immutable once constructed: derived views (distance-augmented
//! volcanoes, response previews) are new values, never in-place mutations.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A single seismic event from the event service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SeismicEvent {
    /// Upstream event identifier (e.g., `us7000abcd`).
    pub id: String,
    pub magnitude: f64,
    /// Magnitude scale (e.g., `mww`, `mb`, `ml`).
    pub magnitude_type: String,
    /// Human-readable location description.
    pub place: String,
    /// Origin time.
    pub time: DateTime<Utc>,
    /// Hypocenter depth in kilometers.
    pub depth_km: f64,
    pub longitude: f64,
    pub latitude: f64,
    /// Whether the event generated a tsunami warning.
    pub tsunami: bool,
    /// PAGER alert level (`green`, `yellow`, `orange`, `red`) when issued.
    pub alert: Option<String>,
    /// Upstream significance score.
    pub significance: Option<i64>,
    /// Number of felt reports submitted.
    pub felt_reports: Option<i64>,
    /// Upstream detail page URL.
    pub url: String,
}

impl SeismicEvent {
    /// Epicenter as a geographic point.
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// A volcano record from the volcano service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VolcanoRecord {
    /// Upstream volcano number.
    pub id: i64,
    pub name: String,
    pub country: String,
    pub subregion: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Summit elevation in meters; negative for submarine volcanoes.
    pub elevation_m: f64,
    /// Responsible observatory abbreviation, when assigned.
    pub observatory: Option<String>,
    pub webpage: Option<String>,
}

impl VolcanoRecord {
    /// Summit location as a geographic point.
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// A volcano plus its derived distance from a query center.
///
/// Exists only for the lifetime of one ranking computation; the source
/// record is cloned, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RankedVolcano {
    #[serde(flatten)]
    pub volcano: VolcanoRecord,
    /// Great-circle distance from the query center, in kilometers.
    pub distance_km: f64,
}
