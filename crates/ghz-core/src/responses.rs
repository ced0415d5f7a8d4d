//! Response shapes returned by the gateway operations.
//!
//! One struct per operation. Raw upstream payloads are never echoed back
//! unmodified; every operation reshapes into these types.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::models::{RankedVolcano, SeismicEvent, VolcanoRecord};
use crate::risk::RiskLevel;

/// An upstream data source, as listed by `overview`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SourceInfo {
    pub name: String,
    pub description: String,
    pub url: String,
}

/// One gateway operation, as listed by `overview`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OperationInfo {
    pub name: String,
    pub description: String,
    /// Parameter summary with defaults, human readable.
    pub parameters: String,
}

/// Response from `overview`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OverviewResponse {
    pub name: String,
    pub version: String,
    pub sources: Vec<SourceInfo>,
    pub operations: Vec<OperationInfo>,
}

/// Response from `lookup`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LookupResponse {
    pub event: SeismicEvent,
}

/// The filters a `search` call actually applied, echoed in its response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SearchFilters {
    /// Spatial center; present only when the caller supplied both
    /// latitude and longitude.
    pub center: Option<GeoPoint>,
    pub radius_km: Option<f64>,
    pub min_magnitude: f64,
    pub max_magnitude: Option<f64>,
    pub days: u32,
    pub limit: u32,
}

/// Response from `search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SearchResponse {
    pub filters: SearchFilters,
    pub count: usize,
    pub events: Vec<SeismicEvent>,
}

/// Response from `top`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TopResponse {
    pub period: String,
    pub min_magnitude: f64,
    pub count: usize,
    pub events: Vec<SeismicEvent>,
}

/// Response from `volcano_search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VolcanoSearchResponse {
    pub country: Option<String>,
    pub name: Option<String>,
    pub count: usize,
    pub volcanoes: Vec<VolcanoRecord>,
}

/// Risk block inside a `report` response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RiskSummary {
    pub level: RiskLevel,
    /// Total seismic events returned for the window.
    pub total_events: usize,
    /// Events at or above the significance magnitude.
    pub significant_events: usize,
    /// Volcanoes within the query radius, after the ranking cap.
    pub nearby_volcano_count: usize,
}

/// Response from `report`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReportResponse {
    pub location: GeoPoint,
    pub radius_km: f64,
    pub risk: RiskSummary,
    /// Preview of the strongest recent events, capped.
    pub recent_events: Vec<SeismicEvent>,
    /// Nearest volcanoes within the radius, distances rounded to 0.1 km.
    pub nearby_volcanoes: Vec<RankedVolcano>,
    /// Attribution for the upstream sources consulted.
    pub sources: Vec<String>,
    pub fetched_at: DateTime<Utc>,
}
