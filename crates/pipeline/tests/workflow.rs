//! End-to-end pipeline behaviour against scripted services.

mod common;

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use common::{FakeEnhancer, ScriptedVideos, VIDEO_URL};
use vidgen_core::error::{CoreError, ServiceError};
use vidgen_core::generation::{GenerationRequest, PromptSource, VideoJob};
use vidgen_pipeline::{GenerationPipeline, PollConfig};

fn instant_polling() -> PollConfig {
    PollConfig {
        interval: Duration::ZERO,
        max_attempts: 30,
    }
}

fn pipeline(enhancer: &Arc<FakeEnhancer>, videos: &Arc<ScriptedVideos>) -> GenerationPipeline {
    GenerationPipeline::new(enhancer.clone(), videos.clone()).with_poll_config(instant_polling())
}

#[tokio::test]
async fn runs_enhance_submit_poll_in_order() {
    let enhancer = Arc::new(FakeEnhancer::replying("a fluffy orange cat in golden sunlight"));
    let videos = Arc::new(ScriptedVideos::ready_after(42, 0));

    let outcome = pipeline(&enhancer, &videos)
        .run(&GenerationRequest::new("a cat").unwrap())
        .await
        .unwrap();

    assert_eq!(outcome.video.url, VIDEO_URL);
    assert_eq!(outcome.job, VideoJob { id: 42 });
    assert_eq!(
        outcome.enhanced_prompt.text(),
        "a fluffy orange cat in golden sunlight"
    );
    assert_eq!(outcome.enhanced_prompt.source(), PromptSource::Enhanced);
    assert_eq!(enhancer.calls(), 1);
    assert_eq!(
        videos.submitted_prompts(),
        vec!["a fluffy orange cat in golden sunlight".to_string()]
    );
    assert_eq!(videos.polled_ids(), vec![42]);
}

#[tokio::test]
async fn enhancement_failure_still_submits_original_prompt() {
    let enhancer = Arc::new(FakeEnhancer::failing("upstream unavailable"));
    let videos = Arc::new(ScriptedVideos::ready_after(42, 2));

    let outcome = pipeline(&enhancer, &videos)
        .run(&GenerationRequest::new("a cat").unwrap())
        .await
        .unwrap();

    assert_eq!(outcome.enhanced_prompt.text(), "a cat");
    assert!(outcome.enhanced_prompt.is_fallback());
    assert_eq!(videos.submitted_prompts(), vec!["a cat".to_string()]);
    assert_eq!(outcome.video.url, VIDEO_URL);
}

#[tokio::test]
async fn rejected_submission_never_polls() {
    let enhancer = Arc::new(FakeEnhancer::replying("a fluffy cat"));
    let videos = Arc::new(ScriptedVideos::new(
        Err(ServiceError::Rejected {
            code: 500043,
            message: "All Credits have been used up".into(),
        }),
        vec![],
    ));

    let err = pipeline(&enhancer, &videos)
        .run(&GenerationRequest::new("a cat").unwrap())
        .await
        .unwrap_err();

    assert_matches!(err, CoreError::Service(ServiceError::Rejected { code: 500043, .. }));
    assert_eq!(err.to_string(), "All Credits have been used up");
    assert_eq!(videos.status_calls(), 0);
}

#[tokio::test]
async fn timeout_propagates_as_error() {
    let enhancer = Arc::new(FakeEnhancer::replying("a fluffy cat"));
    let videos = Arc::new(ScriptedVideos::new(Ok(VideoJob { id: 42 }), vec![]));

    let err = pipeline(&enhancer, &videos)
        .run(&GenerationRequest::new("a cat").unwrap())
        .await
        .unwrap_err();

    assert_matches!(err, CoreError::Timeout { attempts: 30 });
    assert_eq!(videos.status_calls(), 30);
}

#[test]
fn default_pipeline_uses_fixed_cadence() {
    let enhancer = Arc::new(FakeEnhancer::replying("x"));
    let videos = Arc::new(ScriptedVideos::ready_after(1, 0));
    let pipeline = GenerationPipeline::new(enhancer, videos);
    assert_eq!(pipeline.poll_config(), &PollConfig::default());
}
