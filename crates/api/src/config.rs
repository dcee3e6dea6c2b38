/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`). Must stay above the
    /// ~60 second polling ceiling of a generation.
    pub request_timeout_secs: u64,
    /// Prompt enhancement service.
    pub openai: OpenAiConfig,
    /// Video generation service.
    pub pixverse: PixverseConfig,
}

/// Default request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            openai: OpenAiConfig::from_env(),
            pixverse: PixverseConfig::from_env(),
        }
    }
}

/// Credentials and endpoint of the chat-completion service.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// May be empty; calls then fail upstream and enhancement falls back.
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl OpenAiConfig {
    /// | Env Var           | Default                      |
    /// |-------------------|------------------------------|
    /// | `OPENAI_API_KEY`  | empty                        |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com/v1`  |
    /// | `OPENAI_MODEL`    | `gpt-3.5-turbo`              |
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| vidgen_openai::api::DEFAULT_BASE_URL.into()),
            model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| vidgen_openai::api::DEFAULT_MODEL.into()),
        }
    }
}

/// Credentials and endpoint of the video generation service.
#[derive(Debug, Clone)]
pub struct PixverseConfig {
    /// May be empty; generation requests then fail upstream.
    pub api_key: String,
    pub base_url: String,
}

impl PixverseConfig {
    /// | Env Var             | Default                                   |
    /// |---------------------|-------------------------------------------|
    /// | `PIXVERSE_API_KEY`  | empty                                     |
    /// | `PIXVERSE_BASE_URL` | `https://app-api.pixverse.ai/openapi/v2`  |
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("PIXVERSE_API_KEY").unwrap_or_default(),
            base_url: std::env::var("PIXVERSE_BASE_URL")
                .unwrap_or_else(|_| vidgen_pixverse::api::DEFAULT_BASE_URL.into()),
        }
    }
}
