//! The `lookup` operation: fetch one seismic event by its upstream id.

use ghz_core::responses::LookupResponse;
use ghz_upstream::UpstreamClient;

use crate::error::OpsError;

/// Fetch a single event by its upstream identifier.
///
/// # Errors
///
/// Returns [`OpsError::InvalidInput`] for an empty id, or the upstream
/// failure when the fetch does not succeed (an unknown id surfaces as the
/// event service's non-success status).
pub async fn lookup(client: &UpstreamClient, event_id: &str) -> Result<LookupResponse, OpsError> {
    let event_id = event_id.trim();
    if event_id.is_empty() {
        return Err(OpsError::invalid("event_id", "must not be empty"));
    }

    let event = client.fetch_event(event_id).await?;
    Ok(LookupResponse { event })
}
