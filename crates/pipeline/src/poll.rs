//! Bounded, fixed-cadence status polling.

use std::time::Duration;

use vidgen_core::error::CoreError;
use vidgen_core::generation::{
    VideoJob, VideoResult, VideoStatus, MAX_POLL_ATTEMPTS, POLL_INTERVAL,
};
use vidgen_core::services::VideoService;

/// How often and how many times a job is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Delay between two status checks.
    pub interval: Duration,
    /// Total number of status checks before timing out.
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL,
            max_attempts: MAX_POLL_ATTEMPTS,
        }
    }
}

impl PollConfig {
    /// Upper bound on the time spent sleeping between checks.
    pub fn ceiling(&self) -> Duration {
        self.interval * self.max_attempts.saturating_sub(1)
    }
}

/// Check `job` until it is ready.
///
/// - Ready with a URL: returns immediately.
/// - Status check error: returned immediately, nothing more is sent.
/// - Anything else is waited out; after `max_attempts` checks the call fails
///   with [`CoreError::Timeout`]. No sleep follows the final check.
pub async fn poll_until_ready(
    service: &dyn VideoService,
    job: &VideoJob,
    config: &PollConfig,
) -> Result<VideoResult, CoreError> {
    for attempt in 1..=config.max_attempts {
        match service.status(job).await? {
            VideoStatus::Ready { url } => {
                tracing::debug!(job_id = job.id, attempt, "Video ready");
                return Ok(VideoResult { url });
            }
            VideoStatus::Pending => {
                tracing::debug!(
                    job_id = job.id,
                    attempt,
                    max_attempts = config.max_attempts,
                    "Video still generating",
                );
            }
            VideoStatus::Unknown(code) => {
                tracing::debug!(
                    job_id = job.id,
                    attempt,
                    status_code = code,
                    "Unrecognised video status, still waiting",
                );
            }
        }

        if attempt < config.max_attempts {
            tokio::time::sleep(config.interval).await;
        }
    }

    tracing::warn!(
        job_id = job.id,
        attempts = config.max_attempts,
        "Video generation timed out",
    );
    Err(CoreError::Timeout {
        attempts: config.max_attempts,
    })
}
