use thiserror::Error;

/// Domain errors surfaced by the composite layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The requested product does not exist upstream.
    #[error("not found: {0}")]
    NotFound(String),
    /// A backend rejected the request as malformed or out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Any other backend failure: 5xx, timeout, connection failure, undecodable body.
    /// `status` is `None` when no HTTP response was received.
    #[error("unexpected error: {message}")]
    Unexpected { status: Option<u16>, message: String },
    /// Write operation without a backing implementation.
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

impl ServiceError {
    pub fn unexpected(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Unexpected { status, message: message.into() }
    }

    pub fn not_implemented(operation: &str) -> Self {
        Self::NotImplemented(format!("{operation} is not implemented yet"))
    }

    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Unexpected { .. } => "unexpected",
            Self::NotImplemented(_) => "not_implemented",
        }
    }

    /// Message without the kind prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(m) | Self::InvalidInput(m) | Self::NotImplemented(m) => m,
            Self::Unexpected { message, .. } => message,
        }
    }
}
