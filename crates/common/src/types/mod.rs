use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Upper snake case status name as carried in the `httpStatus` field of error bodies,
/// e.g. `NOT_FOUND` or `UNPROCESSABLE_ENTITY`.
pub fn status_name(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect(),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_names_match_error_body_convention() {
        assert_eq!(status_name(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(status_name(StatusCode::UNPROCESSABLE_ENTITY), "UNPROCESSABLE_ENTITY");
        assert_eq!(status_name(StatusCode::INTERNAL_SERVER_ERROR), "INTERNAL_SERVER_ERROR");
        assert_eq!(status_name(StatusCode::BAD_REQUEST), "BAD_REQUEST");
    }

    #[test]
    fn unknown_status_falls_back_to_code() {
        let odd = StatusCode::from_u16(599).unwrap();
        assert_eq!(status_name(odd), "599");
    }
}
