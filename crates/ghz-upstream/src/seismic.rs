//! FDSN event service client and outbound query construction.
//!
//! The event service takes its filters as query-string parameters. Time
//! windows are serialized as absolute UTC timestamps computed at request
//! time, so two calls issued seconds apart may see slightly different
//! windows — accepted behavior, not a bug.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use ghz_core::{GeoPoint, SeismicEvent};

use crate::error::UpstreamError;
use crate::http::{check_response, decode_json};
use crate::UpstreamClient;

/// Ordering of returned events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOrder {
    /// Newest first.
    Time,
    /// Largest magnitude first.
    Magnitude,
}

impl EventOrder {
    const fn as_param(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Magnitude => "magnitude",
        }
    }
}

/// A complete spatial filter: center point plus radius.
///
/// The event service rejects a latitude without a longitude (and vice
/// versa), so a partial center cannot be represented — callers either
/// attach a whole filter or none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialFilter {
    pub center: GeoPoint,
    pub radius_km: f64,
}

/// Filters for one event-service query.
#[derive(Debug, Clone, PartialEq)]
pub struct SeismicQuery {
    /// Window start, expressed as days before the request time.
    pub lookback_days: u32,
    pub min_magnitude: f64,
    pub max_magnitude: Option<f64>,
    pub spatial: Option<SpatialFilter>,
    pub order: EventOrder,
    /// Maximum number of events to return.
    pub limit: u32,
}

impl SeismicQuery {
    /// Serialize to the event service's query-string pairs.
    ///
    /// Always emits `format`, `starttime`, `orderby`, `minmagnitude`, and
    /// `limit`; `maxmagnitude` and the spatial triple only when set.
    #[must_use]
    pub fn params(&self, now: DateTime<Utc>) -> Vec<(&'static str, String)> {
        let start = now - Duration::days(i64::from(self.lookback_days));

        let mut params = vec![
            ("format", "geojson".to_string()),
            (
                "starttime",
                start.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
            ("orderby", self.order.as_param().to_string()),
            ("minmagnitude", self.min_magnitude.to_string()),
            ("limit", self.limit.to_string()),
        ];

        if let Some(max) = self.max_magnitude {
            params.push(("maxmagnitude", max.to_string()));
        }

        if let Some(spatial) = self.spatial {
            params.push(("latitude", spatial.center.latitude.to_string()));
            params.push(("longitude", spatial.center.longitude.to_string()));
            params.push(("maxradiuskm", spatial.radius_km.to_string()));
        }

        params
    }
}

// ── GeoJSON decode ─────────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct FeatureCollection {
    metadata: CollectionMetadata,
    features: Vec<Feature>,
}

#[derive(serde::Deserialize)]
struct CollectionMetadata {
    count: u32,
}

#[derive(serde::Deserialize)]
struct Feature {
    id: String,
    properties: FeatureProperties,
    geometry: FeatureGeometry,
}

#[derive(serde::Deserialize)]
struct FeatureProperties {
    mag: f64,
    #[serde(rename = "magType")]
    mag_type: String,
    place: String,
    /// Origin time, epoch milliseconds.
    time: i64,
    /// 0 or 1.
    tsunami: u8,
    alert: Option<String>,
    sig: Option<i64>,
    felt: Option<i64>,
    url: String,
}

#[derive(serde::Deserialize)]
struct FeatureGeometry {
    /// `[longitude, latitude, depth_km]`.
    coordinates: [f64; 3],
}

impl Feature {
    fn into_event(self) -> Result<SeismicEvent, UpstreamError> {
        let [longitude, latitude, depth_km] = self.geometry.coordinates;
        let time = DateTime::from_timestamp_millis(self.properties.time)
            .ok_or_else(|| UpstreamError::Malformed("event time out of range".to_string()))?;

        Ok(SeismicEvent {
            id: self.id,
            magnitude: self.properties.mag,
            magnitude_type: self.properties.mag_type,
            place: self.properties.place,
            time,
            depth_km,
            longitude,
            latitude,
            tsunami: self.properties.tsunami != 0,
            alert: self.properties.alert,
            significance: self.properties.sig,
            felt_reports: self.properties.felt,
            url: self.properties.url,
        })
    }
}

impl UpstreamClient {
    /// Fetch events matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the HTTP request fails, the service
    /// returns a non-success status, or the response cannot be decoded.
    pub async fn fetch_events(
        &self,
        query: &SeismicQuery,
    ) -> Result<Vec<SeismicEvent>, UpstreamError> {
        let url = format!("{}/query", self.seismic_base_url);
        let params = query.params(Utc::now());
        tracing::debug!(url = %url, params = params.len(), "issuing seismic query");

        let resp = check_response(self.http.get(&url).query(&params).send().await?).await?;
        let data: FeatureCollection = decode_json(resp).await?;
        tracing::debug!(count = data.metadata.count, "seismic query returned");

        data.features.into_iter().map(Feature::into_event).collect()
    }

    /// Fetch a single event by its upstream identifier.
    ///
    /// The `eventid` query returns one GeoJSON feature rather than a
    /// collection. An unknown id surfaces as the service's non-success
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the HTTP request fails, the service
    /// returns a non-success status, or the response cannot be decoded.
    pub async fn fetch_event(&self, event_id: &str) -> Result<SeismicEvent, UpstreamError> {
        let url = format!(
            "{}/query?format=geojson&eventid={}",
            self.seismic_base_url,
            urlencoding::encode(event_id)
        );
        tracing::debug!(url = %url, "issuing event lookup");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let feature: Feature = decode_json(resp).await?;
        feature.into_event()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const COLLECTION_FIXTURE: &str = r#"{
        "type": "FeatureCollection",
        "metadata": {"generated": 1700000000000, "count": 2},
        "features": [
            {
                "type": "Feature",
                "id": "us7000aaaa",
                "properties": {
                    "mag": 6.1,
                    "magType": "mww",
                    "place": "120 km S of Tokyo, Japan",
                    "time": 1699999000000,
                    "tsunami": 1,
                    "alert": "green",
                    "sig": 572,
                    "felt": 1200,
                    "url": "https://example.test/us7000aaaa"
                },
                "geometry": {"type": "Point", "coordinates": [139.65, 34.6, 42.3]}
            },
            {
                "type": "Feature",
                "id": "us7000bbbb",
                "properties": {
                    "mag": 4.4,
                    "magType": "mb",
                    "place": "near the coast",
                    "time": 1699990000000,
                    "tsunami": 0,
                    "alert": null,
                    "sig": null,
                    "felt": null,
                    "url": "https://example.test/us7000bbbb"
                },
                "geometry": {"type": "Point", "coordinates": [-70.1, -33.4, 10.0]}
            }
        ]
    }"#;

    fn query() -> SeismicQuery {
        SeismicQuery {
            lookback_days: 7,
            min_magnitude: 4.0,
            max_magnitude: None,
            spatial: None,
            order: EventOrder::Time,
            limit: 20,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn lookup(params: &[(&'static str, String)], key: &str) -> Option<String> {
        params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn params_always_include_window_order_and_limit() {
        let params = query().params(fixed_now());

        assert_eq!(lookup(&params, "format").as_deref(), Some("geojson"));
        assert_eq!(
            lookup(&params, "starttime").as_deref(),
            Some("2024-06-08T12:00:00Z")
        );
        assert_eq!(lookup(&params, "orderby").as_deref(), Some("time"));
        assert_eq!(lookup(&params, "minmagnitude").as_deref(), Some("4"));
        assert_eq!(lookup(&params, "limit").as_deref(), Some("20"));
    }

    #[test]
    fn params_omit_spatial_filter_when_absent() {
        let params = query().params(fixed_now());

        assert_eq!(lookup(&params, "latitude"), None);
        assert_eq!(lookup(&params, "longitude"), None);
        assert_eq!(lookup(&params, "maxradiuskm"), None);
    }

    #[test]
    fn params_include_complete_spatial_filter() {
        let mut q = query();
        q.spatial = Some(SpatialFilter {
            center: GeoPoint::new(35.68, 139.65),
            radius_km: 300.0,
        });
        let params = q.params(fixed_now());

        assert_eq!(lookup(&params, "latitude").as_deref(), Some("35.68"));
        assert_eq!(lookup(&params, "longitude").as_deref(), Some("139.65"));
        assert_eq!(lookup(&params, "maxradiuskm").as_deref(), Some("300"));
    }

    #[test]
    fn params_include_max_magnitude_only_when_set() {
        let mut q = query();
        assert_eq!(lookup(&q.params(fixed_now()), "maxmagnitude"), None);

        q.max_magnitude = Some(7.5);
        assert_eq!(
            lookup(&q.params(fixed_now()), "maxmagnitude").as_deref(),
            Some("7.5")
        );
    }

    #[test]
    fn magnitude_order_serializes_as_magnitude() {
        let mut q = query();
        q.order = EventOrder::Magnitude;
        assert_eq!(
            lookup(&q.params(fixed_now()), "orderby").as_deref(),
            Some("magnitude")
        );
    }

    #[test]
    fn starttime_reflects_lookback_days() {
        let mut q = query();
        q.lookback_days = 30;
        assert_eq!(
            lookup(&q.params(fixed_now()), "starttime").as_deref(),
            Some("2024-05-16T12:00:00Z")
        );
    }

    #[test]
    fn decodes_feature_collection() {
        let data: FeatureCollection = serde_json::from_str(COLLECTION_FIXTURE).unwrap();
        assert_eq!(data.metadata.count, 2);
        assert_eq!(data.features.len(), 2);

        let events: Vec<SeismicEvent> = data
            .features
            .into_iter()
            .map(|f| f.into_event().unwrap())
            .collect();

        let first = &events[0];
        assert_eq!(first.id, "us7000aaaa");
        assert_eq!(first.magnitude, 6.1);
        assert_eq!(first.magnitude_type, "mww");
        assert!(first.tsunami);
        assert_eq!(first.alert.as_deref(), Some("green"));
        assert_eq!(first.significance, Some(572));
        assert_eq!(first.longitude, 139.65);
        assert_eq!(first.latitude, 34.6);
        assert_eq!(first.depth_km, 42.3);
        assert_eq!(first.time.timestamp_millis(), 1_699_999_000_000);

        let second = &events[1];
        assert!(!second.tsunami);
        assert_eq!(second.alert, None);
        assert_eq!(second.felt_reports, None);
    }

    #[test]
    fn decodes_single_feature() {
        let raw = serde_json::to_string(&serde_json::json!({
            "type": "Feature",
            "id": "us7000cccc",
            "properties": {
                "mag": 5.0,
                "magType": "mww",
                "place": "somewhere",
                "time": 1699999000000i64,
                "tsunami": 0,
                "alert": null,
                "sig": 385,
                "felt": null,
                "url": "https://example.test/us7000cccc"
            },
            "geometry": {"type": "Point", "coordinates": [10.0, 20.0, 5.0]}
        }))
        .unwrap();

        let feature: Feature = serde_json::from_str(&raw).unwrap();
        let event = feature.into_event().unwrap();
        assert_eq!(event.id, "us7000cccc");
        assert_eq!(event.latitude, 20.0);
        assert_eq!(event.significance, Some(385));
    }

    #[test]
    fn missing_required_field_fails_decode() {
        // No `mag` in properties.
        let raw = r#"{
            "type": "Feature",
            "id": "x",
            "properties": {
                "magType": "mb",
                "place": "p",
                "time": 1,
                "tsunami": 0,
                "alert": null,
                "sig": null,
                "felt": null,
                "url": "u"
            },
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0, 0.0]}
        }"#;

        assert!(serde_json::from_str::<Feature>(raw).is_err());
    }
}
