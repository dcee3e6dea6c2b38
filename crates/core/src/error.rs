use serde_json::Value;

/// Failure reported by (or while talking to) an upstream service.
///
/// Client crates convert their transport-specific errors into this type at
/// the [`crate::services`] trait boundary so the pipeline never sees
/// `reqwest` directly.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request never produced a usable HTTP response (DNS, TLS, reset, ...).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status code.
    #[error("{service} API error ({status})")]
    Http {
        service: &'static str,
        status: u16,
        /// Response body, parsed as JSON when possible, otherwise a JSON string.
        body: Value,
    },

    /// The service answered 2xx but its envelope carried a non-zero error code.
    #[error("{message}")]
    Rejected { code: i64, message: String },

    /// The response was well-formed HTTP but not the shape we expect.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ServiceError {
    /// Payload to hand back to API callers.
    ///
    /// Raw upstream bodies are passed through as-is; everything else is
    /// reduced to its display message.
    pub fn detail(&self) -> Value {
        match self {
            ServiceError::Http { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Video generation timed out")]
    Timeout { attempts: u32 },

    #[error("A generation is already in progress")]
    Busy,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Message or upstream body describing this error for API callers.
    pub fn detail(&self) -> Value {
        match self {
            CoreError::Validation(msg) => Value::String(msg.clone()),
            CoreError::Service(err) => err.detail(),
            other => Value::String(other.to_string()),
        }
    }
}
