//! Translation of failed backend calls into [`ServiceError`].
//!
//! Total over its inputs: whatever the body contains, a domain error comes out.

use models::ErrorInfo;
use reqwest::StatusCode;
use tracing::warn;

use crate::errors::ServiceError;

/// Longest slice of an error body written to the log.
const LOGGED_BODY_CHARS: usize = 512;

/// Translate a non-2xx response.
///
/// `raw_message` is the status line used when the body carries no usable message,
/// e.g. `404 Not Found from GET http://product:7001/product/2`.
pub fn translate_status(status: StatusCode, body: &str, raw_message: &str) -> ServiceError {
    match status {
        StatusCode::NOT_FOUND => ServiceError::NotFound(error_message(body, raw_message)),
        StatusCode::UNPROCESSABLE_ENTITY => ServiceError::InvalidInput(error_message(body, raw_message)),
        other => {
            warn!(status = other.as_u16(), "got an unexpected HTTP error, will rethrow it");
            warn!(body = %truncate_for_log(body), "error body");
            ServiceError::unexpected(Some(other.as_u16()), raw_message)
        }
    }
}

/// Translate a failure that produced no usable response: timeout, refused
/// connection, or a body that did not decode.
pub fn translate_transport(err: &reqwest::Error) -> ServiceError {
    let status = err.status().map(|s| s.as_u16());
    let message = if err.is_timeout() {
        format!("timed out: {err}")
    } else {
        err.to_string()
    };
    warn!(error = %message, "got an unexpected error, will rethrow it");
    ServiceError::unexpected(status, message)
}

/// Status line in the form reported when a body has no message.
pub fn raw_status_line(status: StatusCode, method: &str, url: &str) -> String {
    format!(
        "{} {} from {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status"),
        method,
        url
    )
}

fn truncate_for_log(body: &str) -> &str {
    match body.char_indices().nth(LOGGED_BODY_CHARS) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

fn error_message(body: &str, raw_message: &str) -> String {
    serde_json::from_str::<ErrorInfo>(body)
        .ok()
        .and_then(|info| info.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| raw_message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "404 Not Found from GET http://localhost:7001/product/2";

    #[test]
    fn not_found_uses_body_message() {
        let body = r#"{"timestamp":"2024-03-01T10:15:30Z","path":"/product/2","httpStatus":"NOT_FOUND","message":"No product found for productId: 2"}"#;
        assert_eq!(
            translate_status(StatusCode::NOT_FOUND, body, RAW),
            ServiceError::NotFound("No product found for productId: 2".into())
        );
    }

    #[test]
    fn unprocessable_entity_is_invalid_input() {
        let body = r#"{"message":"Invalid productId: -1"}"#;
        assert_eq!(
            translate_status(StatusCode::UNPROCESSABLE_ENTITY, body, "raw"),
            ServiceError::InvalidInput("Invalid productId: -1".into())
        );
    }

    #[test]
    fn epoch_timestamp_keeps_the_body_message() {
        let body = r#"{"timestamp":1709284530.123,"path":"/product/2","httpStatus":"NOT_FOUND","message":"No product found for productId: 2"}"#;
        assert_eq!(
            translate_status(StatusCode::NOT_FOUND, body, RAW),
            ServiceError::NotFound("No product found for productId: 2".into())
        );
    }

    #[test]
    fn null_fields_keep_the_body_message() {
        let body = r#"{"timestamp":null,"path":null,"httpStatus":null,"message":"Invalid productId: -1"}"#;
        assert_eq!(
            translate_status(StatusCode::UNPROCESSABLE_ENTITY, body, RAW),
            ServiceError::InvalidInput("Invalid productId: -1".into())
        );
    }

    #[test]
    fn long_bodies_are_truncated_for_logging() {
        let body = "é".repeat(LOGGED_BODY_CHARS * 4);
        assert_eq!(truncate_for_log(&body).chars().count(), LOGGED_BODY_CHARS);
        assert_eq!(truncate_for_log("short"), "short");
    }

    #[test]
    fn unparseable_body_falls_back_to_raw_message() {
        assert_eq!(
            translate_status(StatusCode::NOT_FOUND, "<html>nope</html>", RAW),
            ServiceError::NotFound(RAW.into())
        );
        assert_eq!(
            translate_status(StatusCode::NOT_FOUND, "", RAW),
            ServiceError::NotFound(RAW.into())
        );
    }

    #[test]
    fn body_without_message_falls_back_to_raw_message() {
        let body = r#"{"path":"/product/2","httpStatus":"NOT_FOUND"}"#;
        assert_eq!(
            translate_status(StatusCode::NOT_FOUND, body, RAW),
            ServiceError::NotFound(RAW.into())
        );
    }

    #[test]
    fn other_statuses_are_unexpected_with_status() {
        let raw = "503 Service Unavailable from GET http://x/product/1";
        let body = r#"{"message":"down for maintenance"}"#;
        assert_eq!(
            translate_status(StatusCode::SERVICE_UNAVAILABLE, body, raw),
            ServiceError::unexpected(Some(503), raw)
        );
        assert!(matches!(
            translate_status(StatusCode::BAD_REQUEST, "", "raw"),
            ServiceError::Unexpected { status: Some(400), .. }
        ));
    }

    #[test]
    fn raw_status_line_format() {
        assert_eq!(
            raw_status_line(StatusCode::NOT_FOUND, "GET", "http://localhost:7001/product/2"),
            RAW
        );
    }
}
