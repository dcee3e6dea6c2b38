//! [`PromptEnhancer`] backed by a chat completion.

use async_trait::async_trait;
use vidgen_core::error::ServiceError;
use vidgen_core::generation::{
    enhancement_user_message, ENHANCE_SYSTEM_INSTRUCTION, MAX_ENHANCEMENT_TOKENS,
};
use vidgen_core::services::PromptEnhancer;

use crate::api::{ChatApi, ChatMessage};

#[async_trait]
impl PromptEnhancer for ChatApi {
    async fn enhance(&self, prompt: &str) -> Result<String, ServiceError> {
        let messages = [
            ChatMessage::system(ENHANCE_SYSTEM_INSTRUCTION),
            ChatMessage::user(enhancement_user_message(prompt)),
        ];

        let response = self
            .create_completion(&messages, MAX_ENHANCEMENT_TOKENS)
            .await?;

        tracing::debug!(model = %self.model(), choices = response.choices.len(), "Received completion");

        response
            .first_content()
            .map(str::to_owned)
            .ok_or_else(|| {
                ServiceError::UnexpectedResponse("completion contained no message content".into())
            })
    }
}
