//! OpenAI chat-completions client.
//!
//! Provides the REST wrapper ([`api::ChatApi`]) and its
//! [`vidgen_core::services::PromptEnhancer`] implementation.

pub mod api;
mod enhancer;

pub use api::{ChatApi, OpenAiApiError};
