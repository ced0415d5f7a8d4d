//! Upstream error types.

use thiserror::Error;

/// Errors that can occur when talking to an upstream data source.
///
/// `Http` and `Status` mean the source was unavailable or refused the
/// request; `Malformed` means it answered successfully but the body did not
/// match the expected shape. All three fail the calling operation — nothing
/// downgrades to a partial or empty result.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP transport error (connect, timeout, TLS).
    #[error("upstream transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status code.
    #[error("upstream error ({status}): {message}")]
    Status {
        /// HTTP status code returned by the source.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Upstream returned a success status but the body failed typed decode.
    #[error("malformed upstream response: {0}")]
    Malformed(String),
}
