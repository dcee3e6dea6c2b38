use vidgen_core::generation::{EnhancedPrompt, GenerationRequest};
use vidgen_core::services::PromptEnhancer;

/// Enhance the request's prompt, never failing.
///
/// The model output is trimmed. A transport error, an upstream error or an
/// empty completion all fall back to the original prompt; the failure is
/// only logged.
pub async fn enhance_prompt(
    enhancer: &dyn PromptEnhancer,
    request: &GenerationRequest,
) -> EnhancedPrompt {
    match enhancer.enhance(request.prompt()).await {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                tracing::warn!("Prompt enhancement returned no text, using original prompt");
                EnhancedPrompt::original(request)
            } else {
                EnhancedPrompt::enhanced(trimmed)
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Prompt enhancement failed, using original prompt");
            EnhancedPrompt::original(request)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use vidgen_core::error::ServiceError;
    use vidgen_core::generation::PromptSource;

    struct Replies(Result<&'static str, &'static str>);

    #[async_trait]
    impl PromptEnhancer for Replies {
        async fn enhance(&self, _prompt: &str) -> Result<String, ServiceError> {
            self.0
                .map(str::to_owned)
                .map_err(|e| ServiceError::Transport(e.to_string()))
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("a cat").unwrap()
    }

    #[tokio::test]
    async fn output_is_trimmed() {
        let prompt =
            enhance_prompt(&Replies(Ok("\n  a fluffy orange cat in golden sunlight  ")), &request())
                .await;
        assert_eq!(prompt.text(), "a fluffy orange cat in golden sunlight");
        assert_eq!(prompt.source(), PromptSource::Enhanced);
    }

    #[tokio::test]
    async fn error_falls_back_to_original() {
        let prompt = enhance_prompt(&Replies(Err("connection reset")), &request()).await;
        assert_eq!(prompt.text(), "a cat");
        assert!(prompt.is_fallback());
    }

    #[tokio::test]
    async fn blank_output_falls_back_to_original() {
        let prompt = enhance_prompt(&Replies(Ok("   \n")), &request()).await;
        assert_eq!(prompt.text(), "a cat");
        assert!(prompt.is_fallback());
    }
}
