//! Shared HTTP response helpers for upstream clients.
//!
//! Centralizes the status-code check (non-success → [`UpstreamError::Status`])
//! so the source modules stay focused on request construction and response
//! mapping.

use crate::error::UpstreamError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise consumes the body
/// into an [`UpstreamError::Status`].
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, UpstreamError> {
    if !resp.status().is_success() {
        return Err(UpstreamError::Status {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a successful response body into `T`.
///
/// Goes through `text()` + `serde_json` so a body that does not match the
/// expected shape maps to [`UpstreamError::Malformed`] rather than a
/// transport error.
pub async fn decode_json<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, UpstreamError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| UpstreamError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(503, "service unavailable");
        let err = check_response(resp).await.unwrap_err();
        match err {
            UpstreamError::Status { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "service unavailable");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_client_error() {
        let resp = mock_response(400, "bad eventid");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Status { status: 400, .. }));
    }

    #[tokio::test]
    async fn decode_json_maps_bad_body_to_malformed() {
        #[derive(Debug, serde::Deserialize)]
        struct Expected {
            #[allow(dead_code)]
            count: u32,
        }

        let resp = mock_response(200, r#"{"unexpected": true}"#);
        let err = decode_json::<Expected>(resp).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Malformed(_)));
    }

    #[tokio::test]
    async fn decode_json_accepts_matching_body() {
        #[derive(serde::Deserialize)]
        struct Expected {
            count: u32,
        }

        let resp = mock_response(200, r#"{"count": 3}"#);
        let decoded = decode_json::<Expected>(resp).await.unwrap();
        assert_eq!(decoded.count, 3);
    }
}
