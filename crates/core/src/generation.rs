//! Generation workflow types, constants and validation.
//!
//! A request flows through three steps: the prompt is enhanced, the enhanced
//! text is submitted as a [`VideoJob`], and the job is polled until it
//! resolves into a [`VideoResult`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Polling defaults
// ---------------------------------------------------------------------------

/// Fixed delay between two status checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Maximum number of status checks before giving up (~60 seconds).
pub const MAX_POLL_ATTEMPTS: u32 = 30;

// ---------------------------------------------------------------------------
// Prompt enhancement
// ---------------------------------------------------------------------------

/// System instruction sent with every enhancement request.
pub const ENHANCE_SYSTEM_INSTRUCTION: &str = "You are a creative assistant that enhances video \
generation prompts. Make the prompt more detailed and descriptive for better video generation \
results. Focus on visual elements, lighting, atmosphere, and actions. Keep the enhanced prompt \
concise but rich in detail.";

/// Output budget for the enhancement completion.
pub const MAX_ENHANCEMENT_TOKENS: u32 = 200;

/// Build the user message asking for an enhanced version of `prompt`.
pub fn enhancement_user_message(prompt: &str) -> String {
    format!("Enhance this video generation prompt: \"{prompt}\"")
}

/// Message returned when a request arrives without a usable prompt.
pub const PROMPT_REQUIRED: &str = "Prompt is required";

/// Response header carrying the prompt actually sent to the video service.
pub const ENHANCED_PROMPT_HEADER: &str = "x-enhanced-prompt";

/// Identifier the video service assigns to a generation task.
pub type JobId = i64;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A validated user prompt. Only constructible through [`GenerationRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    prompt: String,
}

impl GenerationRequest {
    /// Validate and wrap a prompt. Empty and whitespace-only input is rejected.
    pub fn new(prompt: impl Into<String>) -> Result<Self, CoreError> {
        let prompt = prompt.into();
        validate_prompt(&prompt)?;
        Ok(Self { prompt })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// A prompt must contain at least one non-whitespace character.
pub fn validate_prompt(prompt: &str) -> Result<(), CoreError> {
    if prompt.trim().is_empty() {
        return Err(CoreError::Validation(PROMPT_REQUIRED.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Enhanced prompt
// ---------------------------------------------------------------------------

/// Where the text of an [`EnhancedPrompt`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptSource {
    /// Rewritten by the completion service.
    Enhanced,
    /// Enhancement failed; the user's prompt is used unchanged.
    Original,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnhancedPrompt {
    text: String,
    source: PromptSource,
}

impl EnhancedPrompt {
    pub fn enhanced(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: PromptSource::Enhanced,
        }
    }

    /// Fall back to the request's own prompt.
    pub fn original(request: &GenerationRequest) -> Self {
        Self {
            text: request.prompt.clone(),
            source: PromptSource::Original,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> PromptSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == PromptSource::Original
    }
}

// ---------------------------------------------------------------------------
// Job, status, result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoJob {
    pub id: JobId,
}

/// Status of a job as reported by a single status check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoStatus {
    /// Still being generated.
    Pending,
    /// Finished; the video is downloadable at `url`.
    Ready { url: String },
    /// A status code we have no mapping for. Polled like [`VideoStatus::Pending`].
    Unknown(i64),
}

impl VideoStatus {
    pub fn ready_url(&self) -> Option<&str> {
        match self {
            VideoStatus::Ready { url } => Some(url),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    pub url: String,
}

/// Everything a successful generation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub enhanced_prompt: EnhancedPrompt,
    pub job: VideoJob,
    pub video: VideoResult,
}
