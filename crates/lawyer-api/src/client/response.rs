//! Turning non-2xx replies into [`ApiError::Status`].

use serde_json::Value;

use crate::ApiError;

/// Text shown when `/ask` fails without a usable `detail`.
pub(crate) fn ask_fallback(status: u16) -> String {
    format!("An error occurred on the server (status: {status}).")
}

/// Text shown when an upload or session call fails without a usable `detail`.
pub(crate) fn upload_fallback(status: u16) -> String {
    format!("HTTP error! status: {status}")
}

/// Pull the user-facing message out of an error body.
///
/// A string `detail` is used verbatim; any other JSON value (FastAPI's
/// validation errors are arrays of objects) is serialized. Bodies that are
/// not JSON, or carry no `detail`, yield `None`.
pub(crate) fn detail_from_body(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    match json.get("detail")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Consume a failed response into an [`ApiError::Status`].
pub(crate) async fn status_error(
    response: reqwest::Response,
    fallback: fn(u16) -> String,
) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let detail = detail_from_body(&body).unwrap_or_else(|| fallback(status));
    ApiError::Status { status, detail }
}

/// Map a transport failure to something a person can act on.
pub(crate) fn network_error(err: reqwest::Error, base_url: &str) -> ApiError {
    if err.is_timeout() {
        ApiError::Network(format!("Request to {base_url} timed out"))
    } else if err.is_connect() {
        ApiError::Network(format!("Could not connect to {base_url}"))
    } else {
        ApiError::Network(err.to_string())
    }
}
