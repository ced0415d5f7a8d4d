//! The `volcano_search` operation: text search over the volcano list.
//!
//! The volcano source has no server-side filtering, so this fetches the
//! full list and filters locally.

use ghz_core::rank::filter_by_text;
use ghz_core::responses::VolcanoSearchResponse;
use ghz_upstream::UpstreamClient;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OpsError;
use crate::validate;

const fn default_limit() -> u32 {
    20
}

/// Parameters for `volcano_search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VolcanoSearchInput {
    /// Case-insensitive country substring.
    pub country: Option<String>,
    /// Case-insensitive name substring. ANDed with `country` when both set.
    pub name: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for VolcanoSearchInput {
    fn default() -> Self {
        Self {
            country: None,
            name: None,
            limit: default_limit(),
        }
    }
}

fn validate_input(input: &VolcanoSearchInput) -> Result<(), OpsError> {
    validate::check_limit(input.limit)?;

    let country = input.country.as_deref().map(str::trim).unwrap_or_default();
    let name = input.name.as_deref().map(str::trim).unwrap_or_default();
    if country.is_empty() && name.is_empty() {
        return Err(OpsError::invalid(
            "country",
            "at least one of country or name must be supplied",
        ));
    }
    Ok(())
}

/// Search volcanoes by country and/or name substring.
///
/// # Errors
///
/// Returns [`OpsError::InvalidInput`] when neither filter is supplied or the
/// limit is out of bounds (before any upstream request), or the upstream
/// failure otherwise.
pub async fn volcano_search(
    client: &UpstreamClient,
    input: &VolcanoSearchInput,
) -> Result<VolcanoSearchResponse, OpsError> {
    validate_input(input)?;

    let volcanoes = client.fetch_volcanoes().await?;
    let matched = filter_by_text(
        &volcanoes,
        input.country.as_deref().map(str::trim).filter(|c| !c.is_empty()),
        input.name.as_deref().map(str::trim).filter(|n| !n.is_empty()),
        input.limit as usize,
    );

    Ok(VolcanoSearchResponse {
        country: input.country.clone(),
        name: input.name.clone(),
        count: matched.len(),
        volcanoes: matched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_at_least_one_filter() {
        let input = VolcanoSearchInput::default();
        assert!(validate_input(&input).is_err());

        let input = VolcanoSearchInput {
            country: Some("  ".to_string()),
            name: None,
            ..VolcanoSearchInput::default()
        };
        assert!(validate_input(&input).is_err());

        let input = VolcanoSearchInput {
            country: Some("Japan".to_string()),
            ..VolcanoSearchInput::default()
        };
        assert!(validate_input(&input).is_ok());

        let input = VolcanoSearchInput {
            name: Some("fuji".to_string()),
            ..VolcanoSearchInput::default()
        };
        assert!(validate_input(&input).is_ok());
    }

    #[tokio::test]
    async fn missing_filters_fail_before_any_fetch() {
        let client = UpstreamClient::default();
        let err = volcano_search(&client, &VolcanoSearchInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, OpsError::InvalidInput { .. }));
    }
}
