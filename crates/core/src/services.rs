//! Seams to the two upstream services.
//!
//! The pipeline only talks to these traits; `vidgen-openai` and
//! `vidgen-pixverse` provide the HTTP implementations and tests plug in
//! scripted fakes.

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::generation::{VideoJob, VideoStatus};

/// Rewrites a prompt into a more visually descriptive one.
#[async_trait]
pub trait PromptEnhancer: Send + Sync {
    /// Returns the rewritten prompt. Implementations return the raw model
    /// output; trimming and fallback are handled by the caller.
    async fn enhance(&self, prompt: &str) -> Result<String, ServiceError>;
}

/// Text-to-video generation service with asynchronous jobs.
#[async_trait]
pub trait VideoService: Send + Sync {
    /// Start a generation task for `prompt`.
    async fn submit(&self, prompt: &str) -> Result<VideoJob, ServiceError>;

    /// Check the status of a previously submitted job once.
    async fn status(&self, job: &VideoJob) -> Result<VideoStatus, ServiceError>;
}
