//! The `overview` operation: a static catalog of the gateway's operations
//! and upstream sources. Makes no upstream call and never fails.

use ghz_core::responses::{OperationInfo, OverviewResponse, SourceInfo};

/// Describe the gateway: its upstream sources and the operations it exposes.
#[must_use]
pub fn overview() -> OverviewResponse {
    OverviewResponse {
        name: "geohazard-gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sources: vec![
            SourceInfo {
                name: "USGS Earthquake Hazards Program".to_string(),
                description: "FDSN event service; seismic events as GeoJSON".to_string(),
                url: "https://earthquake.usgs.gov/fdsnws/event/1".to_string(),
            },
            SourceInfo {
                name: "USGS Volcano Hazards Program".to_string(),
                description: "Global volcano list; no server-side filtering".to_string(),
                url: "https://volcanoes.usgs.gov/vsc/api/volcanoApi/volcanoesGVP".to_string(),
            },
        ],
        operations: vec![
            OperationInfo {
                name: "overview".to_string(),
                description: "This catalog".to_string(),
                parameters: "none".to_string(),
            },
            OperationInfo {
                name: "lookup".to_string(),
                description: "Fetch one seismic event by its upstream id".to_string(),
                parameters: "event_id".to_string(),
            },
            OperationInfo {
                name: "search".to_string(),
                description: "Parametric seismic event search, newest first".to_string(),
                parameters: "latitude?, longitude?, radius_km=500, min_magnitude=4, \
                             max_magnitude?, days=7, limit=20"
                    .to_string(),
            },
            OperationInfo {
                name: "top".to_string(),
                description: "Largest events in a period, by magnitude".to_string(),
                parameters: "period(day|week|month)=week, min_magnitude=5, limit=10".to_string(),
            },
            OperationInfo {
                name: "volcano_search".to_string(),
                description: "Volcanoes by country and/or name substring".to_string(),
                parameters: "country?, name?, limit=20".to_string(),
            },
            OperationInfo {
                name: "report".to_string(),
                description: "Combined seismic + volcanic hazard assessment for a point"
                    .to_string(),
                parameters: "latitude, longitude, radius_km=300 (50..=1000)".to_string(),
            },
        ],
    }
}
