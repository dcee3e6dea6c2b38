//! [`VideoService`] backed by the Pixverse open API.

use async_trait::async_trait;
use vidgen_core::error::ServiceError;
use vidgen_core::generation::{VideoJob, VideoStatus};
use vidgen_core::services::VideoService;

use crate::api::{
    GenerateResp, PixverseApi, VideoResultResp, STATUS_GENERATING, STATUS_SUCCESS,
};

const SUBMIT_FAILED: &str = "Failed to generate video";
const STATUS_FAILED: &str = "Failed to check video status";

#[async_trait]
impl VideoService for PixverseApi {
    async fn submit(&self, prompt: &str) -> Result<VideoJob, ServiceError> {
        let envelope = self.generate_text_video(prompt).await?;
        envelope.check(SUBMIT_FAILED)?;
        let resp: GenerateResp = envelope.decode()?;
        tracing::debug!(video_id = resp.video_id, "Pixverse accepted generation task");
        Ok(VideoJob { id: resp.video_id })
    }

    async fn status(&self, job: &VideoJob) -> Result<VideoStatus, ServiceError> {
        let envelope = self.get_video_result(job.id).await?;
        envelope.check(STATUS_FAILED)?;
        let resp: VideoResultResp = envelope.decode()?;
        tracing::debug!(video_id = job.id, status = ?resp.status, "Pixverse status");
        Ok(to_status(resp))
    }
}

/// Map a result payload onto [`VideoStatus`].
///
/// Only "success with a URL" counts as ready. Every other code, including
/// Pixverse's failure codes, is reported as pending or unknown and left to
/// the poll budget. A payload without a status is still pending.
pub fn to_status(resp: VideoResultResp) -> VideoStatus {
    match resp.status {
        Some(STATUS_SUCCESS) => match resp.url.filter(|url| !url.is_empty()) {
            Some(url) => VideoStatus::Ready { url },
            None => VideoStatus::Pending,
        },
        Some(STATUS_GENERATING) | None => VideoStatus::Pending,
        Some(other) => VideoStatus::Unknown(other),
    }
}
