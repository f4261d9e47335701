//! Error mapping helpers for the HTTP gateway.

use http::StatusCode;

use crate::api::error::StorefrontError;

/// Maps a `reqwest` transport failure into a storefront error.
pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> StorefrontError {
    if error.is_decode() {
        return StorefrontError::Decode {
            message: format!("{operation}: {error}"),
        };
    }

    StorefrontError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps a non-success HTTP status into a storefront error.
pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> StorefrontError {
    let message = maybe_message
        .or_else(|| status.canonical_reason().map(ToOwned::to_owned))
        .unwrap_or_else(|| "unknown error".to_owned());

    StorefrontError::Api {
        status: status.as_u16(),
        message: format!("{operation} failed: {message}"),
    }
}

/// Extracts a human-readable message from an error body.
///
/// The backend reports failures as `{ "message": ... }` or `{ "error": ... }`.
pub(super) fn extract_api_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    ["message", "error"]
        .into_iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
}
