use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use vidgen_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "error": ..., "code": ... }`
/// bodies. Only prompt validation is a 400; every other failure, including
/// a body that cannot be read, is a 500 carrying the underlying message (or
/// the upstream body) so the form can show it.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vidgen_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be read as the expected JSON.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error): (StatusCode, &str, Value) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(_) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", core.detail())
                }
                CoreError::Busy => (StatusCode::CONFLICT, "CONFLICT", core.detail()),
                CoreError::Service(err) => {
                    tracing::error!(error = %err, detail = %err.detail(), "Upstream service error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "UPSTREAM_ERROR",
                        core.detail(),
                    )
                }
                CoreError::Timeout { attempts } => {
                    tracing::error!(attempts, "Video generation timed out");
                    (StatusCode::INTERNAL_SERVER_ERROR, "TIMEOUT", core.detail())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        core.detail(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::InvalidBody(msg) => {
                tracing::warn!(error = %msg, "Unreadable request body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INVALID_BODY",
                    Value::String(msg.clone()),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    Value::String(msg.clone()),
                )
            }
        };

        let body = json!({
            "error": error,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
