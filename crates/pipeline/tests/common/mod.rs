//! Scripted stand-ins for the upstream services.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use vidgen_core::error::ServiceError;
use vidgen_core::generation::{VideoJob, VideoStatus};
use vidgen_core::services::{PromptEnhancer, VideoService};

pub const VIDEO_URL: &str = "https://cdn.example/video.mp4";

/// Enhancer that always gives the same answer and counts calls.
pub struct FakeEnhancer {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl FakeEnhancer {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PromptEnhancer for FakeEnhancer {
    async fn enhance(&self, _prompt: &str) -> Result<String, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(ServiceError::Transport)
    }
}

/// Video service replaying a fixed submission result and status sequence.
///
/// Once the status script is exhausted every further check reports pending.
pub struct ScriptedVideos {
    submit_reply: Mutex<Option<Result<VideoJob, ServiceError>>>,
    statuses: Mutex<VecDeque<Result<VideoStatus, ServiceError>>>,
    submitted: Mutex<Vec<String>>,
    polled: Mutex<Vec<i64>>,
    status_calls: AtomicUsize,
}

impl ScriptedVideos {
    pub fn new(
        submit_reply: Result<VideoJob, ServiceError>,
        statuses: Vec<Result<VideoStatus, ServiceError>>,
    ) -> Self {
        Self {
            submit_reply: Mutex::new(Some(submit_reply)),
            statuses: Mutex::new(statuses.into()),
            submitted: Mutex::new(Vec::new()),
            polled: Mutex::new(Vec::new()),
            status_calls: AtomicUsize::new(0),
        }
    }

    /// Job `id` whose status turns ready after `pending` pending checks.
    pub fn ready_after(id: i64, pending: usize) -> Self {
        let mut statuses: Vec<_> = (0..pending).map(|_| Ok(VideoStatus::Pending)).collect();
        statuses.push(Ok(VideoStatus::Ready {
            url: VIDEO_URL.to_string(),
        }));
        Self::new(Ok(VideoJob { id }), statuses)
    }

    pub fn submitted_prompts(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn polled_ids(&self) -> Vec<i64> {
        self.polled.lock().unwrap().clone()
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoService for ScriptedVideos {
    async fn submit(&self, prompt: &str) -> Result<VideoJob, ServiceError> {
        self.submitted.lock().unwrap().push(prompt.to_string());
        self.submit_reply
            .lock()
            .unwrap()
            .take()
            .expect("submit called more than once")
    }

    async fn status(&self, job: &VideoJob) -> Result<VideoStatus, ServiceError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.polled.lock().unwrap().push(job.id);
        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(VideoStatus::Pending))
    }
}
