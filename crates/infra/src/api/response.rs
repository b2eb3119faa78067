//! Response contract enforcement
//!
//! [`expect`] checks a response status against the set an endpoint accepts.
//! [`decode`] reads and parses a JSON body. Both take the response by value,
//! so its body is released exactly once on every path.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use super::errors::ApiError;

/// Validate the status of `result` against `accepted`.
///
/// Transport errors pass through unchanged. An accepted status returns the
/// response untouched. Anything else becomes [`ApiError::UnexpectedStatus`]
/// carrying the status, the accepted set, the response headers and, for
/// statuses of 400 and above, up to 8 KiB of body text.
pub async fn expect(
    result: Result<Response, ApiError>,
    accepted: &[StatusCode],
) -> Result<Response, ApiError> {
    let response = result?;
    let status = response.status();

    if accepted.contains(&status) {
        return Ok(response);
    }

    let headers = response.headers().clone();
    let body = if status.as_u16() >= 400 {
        Some(read_error_body(response).await)
    } else {
        None
    };

    let expected = accepted.iter().map(StatusCode::as_u16).collect::<Vec<_>>();
    warn!(%status, ?expected, "response status outside the accepted set");

    Err(ApiError::UnexpectedStatus { status, expected, body, headers })
}

/// Longest error body kept for diagnostics, in bytes.
const ERROR_BODY_LIMIT: usize = 8 * 1024;

/// Read at most [`ERROR_BODY_LIMIT`] bytes of an error body.
///
/// Best effort; a read failure keeps what arrived so far, since the status
/// alone is still a useful diagnostic.
async fn read_error_body(mut response: Response) -> String {
    let mut body = Vec::new();
    let mut truncated = false;

    while let Ok(Some(chunk)) = response.chunk().await {
        let room = ERROR_BODY_LIMIT - body.len();
        if chunk.len() > room {
            body.extend_from_slice(&chunk[..room]);
            truncated = true;
            break;
        }
        body.extend_from_slice(&chunk);
    }

    let mut text = String::from_utf8_lossy(&body).into_owned();
    if truncated {
        text.push_str("... (truncated)");
    }
    text
}

/// Read the whole body and decode it as JSON into `T`.
pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|err| ApiError::Network(format!("failed to read response body: {err}")))?;

    serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
}
