use std::sync::Arc;

use vidgen_core::error::CoreError;
use vidgen_core::generation::{GenerationOutcome, GenerationRequest};
use vidgen_core::services::{PromptEnhancer, VideoService};

use crate::enhance::enhance_prompt;
use crate::poll::{poll_until_ready, PollConfig};

/// Enhance → submit → poll, one request at a time.
///
/// Holds only shared, immutable handles, so one pipeline serves every
/// request concurrently; each [`GenerationPipeline::run`] owns its own job
/// and attempt counter.
#[derive(Clone)]
pub struct GenerationPipeline {
    enhancer: Arc<dyn PromptEnhancer>,
    videos: Arc<dyn VideoService>,
    poll: PollConfig,
}

impl GenerationPipeline {
    pub fn new(enhancer: Arc<dyn PromptEnhancer>, videos: Arc<dyn VideoService>) -> Self {
        Self {
            enhancer,
            videos,
            poll: PollConfig::default(),
        }
    }

    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    pub fn poll_config(&self) -> &PollConfig {
        &self.poll
    }

    /// Run a full generation.
    ///
    /// Enhancement failures are absorbed; submission and polling errors are
    /// returned unchanged and no partial result is produced.
    pub async fn run(&self, request: &GenerationRequest) -> Result<GenerationOutcome, CoreError> {
        let enhanced_prompt = enhance_prompt(self.enhancer.as_ref(), request).await;
        tracing::info!(
            enhanced_prompt = %enhanced_prompt.text(),
            fallback = enhanced_prompt.is_fallback(),
            "Enhanced prompt",
        );

        let job = self.videos.submit(enhanced_prompt.text()).await?;
        tracing::info!(job_id = job.id, "Video generation started");

        let video = poll_until_ready(self.videos.as_ref(), &job, &self.poll).await?;
        tracing::info!(job_id = job.id, url = %video.url, "Video generated");

        Ok(GenerationOutcome {
            enhanced_prompt,
            job,
            video,
        })
    }
}
