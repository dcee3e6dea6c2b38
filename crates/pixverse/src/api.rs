//! REST client for the Pixverse open API.
//!
//! Wraps text-to-video submission and result lookup. Every Pixverse response
//! uses the same `{ ErrCode, ErrMsg, Resp }` envelope; an HTTP 200 with a
//! non-zero `ErrCode` is still a failure.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use vidgen_core::error::ServiceError;
use vidgen_core::generation::JobId;

/// Public Pixverse open API root.
pub const DEFAULT_BASE_URL: &str = "https://app-api.pixverse.ai/openapi/v2";

/// `Resp.status` value of a finished video.
pub const STATUS_SUCCESS: i64 = 1;
/// `Resp.status` value of a video still being generated.
pub const STATUS_GENERATING: i64 = 5;

const SERVICE_NAME: &str = "Pixverse";

/// HTTP client for a Pixverse account.
#[derive(Debug, Clone)]
pub struct PixverseApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    params: VideoParams,
}

/// Generation parameters sent alongside every prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoParams {
    pub aspect_ratio: String,
    /// Clip length in seconds.
    pub duration: u32,
    pub model: String,
    pub motion_mode: String,
    pub negative_prompt: String,
    pub quality: String,
    pub seed: i64,
    pub water_mark: bool,
}

impl Default for VideoParams {
    fn default() -> Self {
        Self {
            aspect_ratio: "16:9".into(),
            duration: 5,
            model: "v3.5".into(),
            motion_mode: "normal".into(),
            negative_prompt: String::new(),
            quality: "540p".into(),
            seed: 0,
            water_mark: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct TextToVideoRequest<'a> {
    #[serde(flatten)]
    params: &'a VideoParams,
    prompt: &'a str,
}

/// The `{ ErrCode, ErrMsg, Resp }` wrapper around every response.
///
/// `Resp` is kept as raw JSON until `ErrCode` has been checked, because
/// error responses carry an empty or partial payload.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(rename = "ErrCode")]
    pub err_code: i64,
    #[serde(rename = "ErrMsg", default)]
    pub err_msg: String,
    #[serde(rename = "Resp", default)]
    pub resp: Option<serde_json::Value>,
}

impl Envelope {
    /// Fail with the service's own message when `ErrCode` is non-zero.
    pub fn check(&self, fallback_message: &str) -> Result<(), ServiceError> {
        if self.err_code == 0 {
            return Ok(());
        }
        let message = if self.err_msg.is_empty() {
            fallback_message.to_string()
        } else {
            self.err_msg.clone()
        };
        Err(ServiceError::Rejected {
            code: self.err_code,
            message,
        })
    }

    /// Decode `Resp` into the payload type of the call.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ServiceError> {
        let resp = self.resp.ok_or_else(|| {
            ServiceError::UnexpectedResponse("Pixverse response has no Resp payload".into())
        })?;
        serde_json::from_value(resp)
            .map_err(|e| ServiceError::UnexpectedResponse(format!("Pixverse Resp: {e}")))
    }
}

/// `Resp` of a successful submission.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResp {
    pub video_id: JobId,
}

/// `Resp` of a result lookup.
///
/// Every field is optional and mistyped values read as absent: a lookup
/// only fails on its envelope, never on the shape of an in-progress payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoResultResp {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<JobId>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub status: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| v.as_i64()))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(|v| v.as_str().map(str::to_owned)))
}

/// Errors from the Pixverse REST layer.
#[derive(Debug, thiserror::Error)]
pub enum PixverseApiError {
    /// The HTTP request failed or the body could not be decoded.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Pixverse returned a non-2xx status code.
    #[error("Pixverse API error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

impl From<PixverseApiError> for ServiceError {
    fn from(err: PixverseApiError) -> Self {
        match err {
            PixverseApiError::Request(e) if e.is_decode() => {
                ServiceError::UnexpectedResponse(e.to_string())
            }
            PixverseApiError::Request(e) => ServiceError::Transport(e.to_string()),
            PixverseApiError::ApiError { status, body } => ServiceError::Http {
                service: SERVICE_NAME,
                status,
                body: serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)),
            },
        }
    }
}

impl PixverseApi {
    /// Create a client against the public API with the default parameters.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), DEFAULT_BASE_URL, api_key)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            params: VideoParams::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_params(mut self, params: VideoParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &VideoParams {
        &self.params
    }

    /// Queue a text-to-video generation.
    ///
    /// Sends `POST /video/text/generate`. Each call carries a fresh
    /// `Ai-trace-id` so Pixverse support can correlate it.
    pub async fn generate_text_video(&self, prompt: &str) -> Result<Envelope, PixverseApiError> {
        let body = TextToVideoRequest {
            params: &self.params,
            prompt,
        };

        let response = self
            .client
            .post(format!("{}/video/text/generate", self.base_url))
            .header("API-KEY", &self.api_key)
            .header("Ai-trace-id", trace_id())
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Look up the current state of a video.
    ///
    /// Sends `GET /video/result/{video_id}`.
    pub async fn get_video_result(&self, video_id: JobId) -> Result<Envelope, PixverseApiError> {
        let response = self
            .client
            .get(format!("{}/video/result/{}", self.base_url, video_id))
            .header("API-KEY", &self.api_key)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, PixverseApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(PixverseApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PixverseApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Millisecond Unix timestamp, unique enough per call.
fn trace_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
