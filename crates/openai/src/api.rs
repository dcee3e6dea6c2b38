//! REST client for the OpenAI chat-completions endpoint.
//!
//! Only the non-streaming `POST /chat/completions` call is wrapped; it is all
//! prompt enhancement needs.

use serde::{Deserialize, Serialize};
use vidgen_core::error::ServiceError;

/// Public OpenAI API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Model used for prompt enhancement unless configured otherwise.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

const SERVICE_NAME: &str = "OpenAI";

/// HTTP client for the chat-completions API.
#[derive(Debug, Clone)]
pub struct ChatApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
}

/// Subset of the chat-completion response we read.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if the model produced any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// Errors from the OpenAI REST layer.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiApiError {
    /// The HTTP request failed or the body could not be decoded.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// OpenAI returned a non-2xx status code.
    #[error("OpenAI API error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

impl From<OpenAiApiError> for ServiceError {
    fn from(err: OpenAiApiError) -> Self {
        match err {
            OpenAiApiError::Request(e) if e.is_decode() => {
                ServiceError::UnexpectedResponse(e.to_string())
            }
            OpenAiApiError::Request(e) => ServiceError::Transport(e.to_string()),
            OpenAiApiError::ApiError { status, body } => ServiceError::Http {
                service: SERVICE_NAME,
                status,
                body: serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)),
            },
        }
    }
}

impl ChatApi {
    /// Create a client against the public API.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), DEFAULT_BASE_URL, api_key, model)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Point the client at another API root (proxies, mock servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request a single chat completion.
    ///
    /// Sends `POST /chat/completions` with a `Bearer` token.
    pub async fn create_completion(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<ChatCompletionResponse, OpenAiApiError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, OpenAiApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(OpenAiApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, OpenAiApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
