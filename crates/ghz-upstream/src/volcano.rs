//! Volcano service client.
//!
//! The volcano source exposes no server-side filtering at all: the only
//! request it supports is an unconditional full-list fetch. Country, name,
//! and radius filtering all happen locally (`ghz_core::rank`).

use ghz_core::VolcanoRecord;

use crate::error::UpstreamError;
use crate::http::{check_response, decode_json};
use crate::UpstreamClient;

#[derive(serde::Deserialize)]
struct VolcanoRow {
    vnum: i64,
    #[serde(rename = "vName")]
    name: String,
    country: String,
    subregion: String,
    latitude: f64,
    longitude: f64,
    elevation_m: f64,
    #[serde(rename = "obsAbbr")]
    observatory: Option<String>,
    webpage: Option<String>,
}

impl From<VolcanoRow> for VolcanoRecord {
    fn from(row: VolcanoRow) -> Self {
        Self {
            id: row.vnum,
            name: row.name,
            country: row.country,
            subregion: row.subregion,
            latitude: row.latitude,
            longitude: row.longitude,
            elevation_m: row.elevation_m,
            observatory: row.observatory,
            webpage: row.webpage,
        }
    }
}

impl UpstreamClient {
    /// Fetch the complete volcano list.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the HTTP request fails, the service
    /// returns a non-success status, or the response cannot be decoded.
    pub async fn fetch_volcanoes(&self) -> Result<Vec<VolcanoRecord>, UpstreamError> {
        tracing::debug!(url = %self.volcano_url, "issuing volcano list fetch");

        let resp = check_response(self.http.get(&self.volcano_url).send().await?).await?;
        let rows: Vec<VolcanoRow> = decode_json(resp).await?;
        tracing::debug!(count = rows.len(), "volcano list returned");

        Ok(rows.into_iter().map(VolcanoRecord::from).collect())
    }
}
