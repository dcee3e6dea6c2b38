//! Handler for the one-shot video generation endpoint.
//!
//! Routes:
//! - `POST /api/video` — enhance the prompt, generate a video, wait for it

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use vidgen_core::generation::GenerationRequest;
pub use vidgen_core::generation::ENHANCED_PROMPT_HEADER;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of `POST /api/video`.
#[derive(Debug, Deserialize)]
pub struct GenerateVideoInput {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// POST /api/video
///
/// Runs the whole generation synchronously and answers with a one-element
/// JSON array holding the video URL. The enhanced prompt travels in the
/// `x-enhanced-prompt` header. A missing or blank prompt is rejected with a
/// 400 before any upstream call; a body that is not `{ "prompt": string }`
/// JSON is a 500 like any other failure.
pub async fn generate_video(
    State(state): State<AppState>,
    payload: Result<Json<GenerateVideoInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| AppError::InvalidBody(rejection.body_text()))?;
    let request = GenerationRequest::new(input.prompt.unwrap_or_default())?;

    // Run detached: a client disconnect must not abort in-flight upstream calls.
    let pipeline = state.pipeline.clone();
    let outcome = tokio::spawn(async move { pipeline.run(&request).await })
        .await
        .map_err(|e| AppError::InternalError(format!("Generation task failed: {e}")))??;

    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(ENHANCED_PROMPT_HEADER),
        header_value(outcome.enhanced_prompt.text()),
    );

    Ok((headers, Json(vec![outcome.video.url])))
}

/// Control characters (newlines in particular) are not allowed in header
/// values; they are replaced by spaces. Non-ASCII text is sent as raw UTF-8.
fn header_value(text: &str) -> HeaderValue {
    let sanitized: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    HeaderValue::from_bytes(sanitized.as_bytes()).unwrap_or(HeaderValue::from_static(""))
}
