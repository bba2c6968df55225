use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Error body returned by a failing service.
///
/// All fields are optional on decode: a backend body is only ever mined for its
/// `message`, and a partially filled body must still yield that message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub http_status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorInfo {
    pub fn new(http_status: impl Into<String>, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Some(Utc::now()),
            path: Some(path.into()),
            http_status: Some(http_status.into()),
            message: Some(message.into()),
        }
    }
}

/// Accepts an RFC 3339 string or epoch seconds (fractional allowed); any other
/// shape becomes `None` instead of failing the whole body.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => DateTime::parse_from_rfc3339(&s).ok().map(|t| t.with_timezone(&Utc)),
        Value::Number(n) => n.as_f64().and_then(|secs| {
            let whole = secs.trunc() as i64;
            let nanos = ((secs - secs.trunc()) * 1e9).round() as u32;
            DateTime::from_timestamp(whole, nanos.min(999_999_999))
        }),
        _ => None,
    })
}
