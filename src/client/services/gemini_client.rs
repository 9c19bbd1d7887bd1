use anyhow::Context;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use url::Url;

use crate::client::config::ClientConfig;
use crate::client::services::generation_service::GenerativeModel;
use crate::common::error::GenerationError;
use crate::common::protocol::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};

/// Client for the hosted Gemini `generateContent` REST endpoint
pub struct GeminiClient {
    http: Client,
    endpoint: Url,
    api_key: String,
    project_id: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("failed to build HTTP client")?;
        let endpoint = endpoint_for(&config.api_base_url, &config.model)
            .with_context(|| format!("invalid model name '{}'", config.model))?;

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
            project_id: config.project_id.clone(),
            model: config.model.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut request = self
            .http
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt));
        if let Some(project) = &self.project_id {
            request = request.header("x-goog-user-project", project);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                warn!("[GEMINI] request to {} timed out", self.model);
            } else if e.is_connect() {
                warn!("[GEMINI] unable to reach {}", self.endpoint.host_str().unwrap_or("model service"));
            }
            GenerationError::from(e)
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("[GEMINI] HTTP {} with {} byte body", status, body.len());
        interpret_response(status, &body)
    }
}

/// `{base}/models/{model}:generateContent`
pub fn endpoint_for(base: &Url, model: &str) -> Result<Url, url::ParseError> {
    base.join(&format!("models/{}:generateContent", model))
}

/// Maps a raw HTTP status and body to the generated text or an error.
pub fn interpret_response(status: u16, body: &str) -> Result<String, GenerationError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(GenerationError::Status { status, message });
    }

    let parsed: GenerateContentResponse = serde_json::from_str(body)?;
    if let Some(reason) = parsed.block_reason() {
        if parsed.candidates.is_empty() {
            return Err(GenerationError::Blocked(reason.to_string()));
        }
    }
    parsed.text().ok_or(GenerationError::EmptyResponse)
}
