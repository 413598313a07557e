//! Outbound GraphQL request to the vehicle position endpoint.

use bytes::Bytes;
use http::Method;
use http::header::{ACCEPT, CONTENT_TYPE};
use realtime::{HttpRequest, Result, decode, transport};

/// Media type of the GraphQL request body.
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Post `payload` to `endpoint` and return the response text.
///
/// No retries are attempted; the caller decides when to try again.
///
/// # Errors
///
/// Returns `Error::Transport` when the request cannot be built, the exchange
/// fails, or the server replies with a non-success status. Returns
/// `Error::Decode` when the body is not valid UTF-8.
pub async fn fetch_feed(provider: &impl HttpRequest, endpoint: &str, payload: Bytes) -> Result<String> {
    let request = http::Request::builder()
        .method(Method::POST)
        .uri(endpoint)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, JSON_UTF8)
        .body(payload)
        .map_err(|e| transport!("building vehicle positions request: {e}"))?;

    let response = HttpRequest::fetch(provider, request)
        .await
        .map_err(|e| transport!("vehicle positions request failed: {e:#}"))?;

    let status = response.status();
    if !status.is_success() {
        return Err(transport!(
            "unexpected status {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ));
    }

    String::from_utf8(response.into_body().to_vec())
        .map_err(|e| decode!("vehicle positions response is not UTF-8: {e}"))
}
