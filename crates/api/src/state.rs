use std::sync::Arc;

use vidgen_openai::ChatApi;
use vidgen_pipeline::GenerationPipeline;
use vidgen_pixverse::PixverseApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Enhance → submit → poll workflow shared by all requests.
    pub pipeline: GenerationPipeline,
}

impl AppState {
    /// Wire the upstream HTTP clients from configuration.
    ///
    /// Both clients share one connection pool. Missing API keys are only
    /// warned about; the affected calls fail upstream.
    pub fn from_config(config: ServerConfig) -> Self {
        if config.openai.api_key.is_empty() {
            tracing::warn!("OPENAI_API_KEY is not set, prompts will not be enhanced");
        }
        if config.pixverse.api_key.is_empty() {
            tracing::warn!("PIXVERSE_API_KEY is not set, video generation will fail");
        }

        let http = reqwest::Client::new();

        let enhancer = ChatApi::with_client(
            http.clone(),
            config.openai.base_url.clone(),
            config.openai.api_key.clone(),
            config.openai.model.clone(),
        );
        let videos = PixverseApi::with_client(
            http,
            config.pixverse.base_url.clone(),
            config.pixverse.api_key.clone(),
        );

        Self {
            config: Arc::new(config),
            pipeline: GenerationPipeline::new(Arc::new(enhancer), Arc::new(videos)),
        }
    }
}
