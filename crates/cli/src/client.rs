//! HTTP client for the generation endpoint of a running server.

use serde::Deserialize;
use serde_json::Value;
use vidgen_core::generation::ENHANCED_PROMPT_HEADER;

/// Default server the CLI talks to.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// A finished generation as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub video_url: String,
    /// Value of the `x-enhanced-prompt` header, if the server sent one.
    pub enhanced_prompt: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network or connection failure.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    ///
    /// `message` is the `error` field of the body when present; objects are
    /// rendered as compact JSON.
    #[error("Server returned {status}")]
    Server { status: u16, message: Option<String> },

    /// A 2xx response that is not a non-empty array of URLs.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ClientError {
    /// Message suitable for the form's error panel, if one is available.
    pub fn display_message(&self) -> Option<String> {
        match self {
            ClientError::Server { message, .. } => message.clone(),
            ClientError::Request(_) | ClientError::UnexpectedResponse(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<Value>,
}

/// Posts prompts to `{server}/api/video`.
#[derive(Debug, Clone)]
pub struct GenerateClient {
    client: reqwest::Client,
    server_url: String,
}

impl GenerateClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            server_url: server_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Run one generation and wait for its outcome.
    ///
    /// The server holds the request open for the whole generation, so this
    /// may take a minute.
    pub async fn generate(&self, prompt: &str) -> Result<Generated, ClientError> {
        let url = format!("{}/api/video", self.server_url);
        tracing::debug!(%url, "Submitting prompt");

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "prompt": prompt }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.error)
                .and_then(|error| match error {
                    Value::String(s) => Some(s),
                    Value::Null => None,
                    other => Some(other.to_string()),
                });
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let enhanced_prompt = response
            .headers()
            .get(ENHANCED_PROMPT_HEADER)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

        let urls: Vec<String> = response
            .json()
            .await
            .map_err(|e| ClientError::UnexpectedResponse(e.to_string()))?;
        let video_url = urls
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::UnexpectedResponse("empty URL list".into()))?;

        Ok(Generated {
            video_url,
            enhanced_prompt,
        })
    }
}
