#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use vidgen_api::config::{OpenAiConfig, PixverseConfig, ServerConfig};
use vidgen_api::router::build_app_router;
use vidgen_api::state::AppState;
use vidgen_core::error::ServiceError;
use vidgen_core::generation::{VideoJob, VideoStatus};
use vidgen_core::services::{PromptEnhancer, VideoService};
use vidgen_pipeline::{GenerationPipeline, PollConfig};

pub const VIDEO_URL: &str = "https://cdn.example/video.mp4";

/// Build a test `ServerConfig` with safe defaults.
///
/// The upstream sections are never used: tests inject fakes directly into
/// the pipeline.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        openai: OpenAiConfig {
            api_key: String::new(),
            base_url: "http://127.0.0.1:1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
        },
        pixverse: PixverseConfig {
            api_key: String::new(),
            base_url: "http://127.0.0.1:1".to_string(),
        },
    }
}

/// Build the full application router around the given services.
///
/// Polling runs without delay so timeouts resolve instantly; the attempt
/// count keeps its production value.
pub fn build_test_app(enhancer: Arc<FakeEnhancer>, videos: Arc<FakeVideos>) -> Router {
    let config = test_config();
    let pipeline = GenerationPipeline::new(enhancer, videos).with_poll_config(PollConfig {
        interval: Duration::ZERO,
        ..PollConfig::default()
    });

    let state = AppState {
        config: Arc::new(config.clone()),
        pipeline,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

pub struct FakeEnhancer {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl FakeEnhancer {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
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

/// Video service with a fixed submission result and a status script.
///
/// Once the script runs out every check reports pending.
pub struct FakeVideos {
    submit_reply: Result<VideoJob, (i64, String)>,
    statuses: Mutex<VecDeque<VideoStatus>>,
    submitted: Mutex<Vec<String>>,
    status_calls: AtomicUsize,
}

impl FakeVideos {
    pub fn ready_after(pending: usize) -> Arc<Self> {
        let mut statuses: VecDeque<_> = (0..pending).map(|_| VideoStatus::Pending).collect();
        statuses.push_back(VideoStatus::Ready {
            url: VIDEO_URL.to_string(),
        });
        Arc::new(Self {
            submit_reply: Ok(VideoJob { id: 42 }),
            statuses: Mutex::new(statuses),
            submitted: Mutex::new(Vec::new()),
            status_calls: AtomicUsize::new(0),
        })
    }

    pub fn never_ready() -> Arc<Self> {
        Arc::new(Self {
            submit_reply: Ok(VideoJob { id: 42 }),
            statuses: Mutex::new(VecDeque::new()),
            submitted: Mutex::new(Vec::new()),
            status_calls: AtomicUsize::new(0),
        })
    }

    pub fn rejecting(code: i64, message: &str) -> Arc<Self> {
        Arc::new(Self {
            submit_reply: Err((code, message.to_string())),
            statuses: Mutex::new(VecDeque::new()),
            submitted: Mutex::new(Vec::new()),
            status_calls: AtomicUsize::new(0),
        })
    }

    pub fn submitted_prompts(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoService for FakeVideos {
    async fn submit(&self, prompt: &str) -> Result<VideoJob, ServiceError> {
        self.submitted.lock().unwrap().push(prompt.to_string());
        self.submit_reply
            .clone()
            .map_err(|(code, message)| ServiceError::Rejected { code, message })
    }

    async fn status(&self, _job: &VideoJob) -> Result<VideoStatus, ServiceError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(VideoStatus::Pending))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
