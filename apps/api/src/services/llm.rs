use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::schema::SchemaViolation;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model declined to answer: {0}")]
    Declined(String),

    #[error("model returned empty content")]
    EmptyContent,

    #[error("model returned malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model output does not match schema: {0}")]
    Schema(#[from] SchemaViolation),
}

/// A text model that can be constrained to answer with JSON.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send one prompt and return the model's JSON answer, unvalidated.
    async fn generate_json(
        &self,
        prompt: &str,
        response_schema: &Value,
    ) -> std::result::Result<Value, GenerationError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

impl GenerateContentResponse {
    fn into_text(self) -> std::result::Result<String, GenerationError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GenerationError::Declined(format!("prompt blocked ({})", reason)));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::Declined("no candidates returned".to_string()))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return match candidate.finish_reason.as_deref() {
                Some("STOP") | None => Err(GenerationError::EmptyContent),
                Some(reason) => Err(GenerationError::Declined(format!(
                    "generation stopped ({})",
                    reason
                ))),
            };
        }

        Ok(text)
    }
}

/// Client for a Gemini-style `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .build()
            .map_err(|e| ApiError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            config.llm_base_url.trim_end_matches('/'),
            config.llm_model
        );

        info!("Using generative model endpoint: {}", endpoint);

        Ok(Self {
            client,
            api_key: config.llm_api_key.clone(),
            endpoint,
        })
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_json(
        &self,
        prompt: &str,
        response_schema: &Value,
    ) -> std::result::Result<Value, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema,
            },
        };

        debug!("Sending prompt ({} chars) to model", prompt.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Model API returned {}: {}", status, body);
            let message = serde_json::from_str::<GoogleError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body.into_text()?;

        Ok(serde_json::from_str(strip_json_fences(&text))?)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}
