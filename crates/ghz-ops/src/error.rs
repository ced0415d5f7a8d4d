//! Operation error types.

use ghz_upstream::UpstreamError;
use thiserror::Error;

/// Errors raised by gateway operations.
#[derive(Debug, Error)]
pub enum OpsError {
    /// A caller-supplied parameter is outside its declared bounds.
    /// Raised before any upstream request is issued.
    #[error("invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// An upstream source failed; the whole operation fails with it.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl OpsError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
