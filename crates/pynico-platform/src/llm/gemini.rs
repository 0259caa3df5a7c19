//! Google Gemini adapter.
//!
//! Speaks the `generateContent` REST API.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use serde_json::{json, Value};

use pynico_core::ports::ChatPort;
use pynico_types::{
    ChatError, Result,
    config::GeminiConfig,
    message::Message,
};

pub struct GeminiProvider {
    config: GeminiConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url().trim_end_matches('/'),
            self.config.model
        )
    }

    async fn generate(&self, history: &[Message], text: &str) -> Result<String> {
        let body = build_request_body(&self.config.system_instruction, history, text);

        let response = Request::post(&self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ChatError::remote(error_message(status, &text)));
        }

        let data: ApiResponse = response
            .json()
            .await
            .map_err(|e| ChatError::remote(e.to_string()))?;

        parse_reply(data)
    }
}

#[async_trait(?Send)]
impl ChatPort for GeminiProvider {
    async fn send_message(&self, history: &[Message], text: &str) -> Result<String> {
        if self.config.api_key.is_empty() {
            return Err(ChatError::Config("Gemini API key is not set".to_string()));
        }

        let request = self.generate(history, text);
        let timeout = TimeoutFuture::new(self.config.request_timeout_ms);
        futures::pin_mut!(request, timeout);

        match future::select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ChatError::Timeout(self.config.request_timeout_ms)),
        }
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub candidates: Vec<ApiCandidate>,
    #[serde(rename = "promptFeedback", default)]
    pub prompt_feedback: Option<ApiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCandidate {
    #[serde(default)]
    pub content: Option<ApiContent>,
    #[serde(rename = "finishReason", default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiContent {
    #[serde(default)]
    pub parts: Vec<ApiPart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPromptFeedback {
    #[serde(rename = "blockReason", default)]
    pub block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

// ─── Serialization helpers ───────────────────────────────────

/// Prior turns become `contents`, the new user turn goes last.
pub(crate) fn build_request_body(system_instruction: &str, history: &[Message], text: &str) -> Value {
    let mut contents: Vec<Value> = history
        .iter()
        .map(|m| content_to_json(m.role.as_str(), &m.text))
        .collect();
    contents.push(content_to_json("user", text));

    let mut body = json!({ "contents": contents });
    if !system_instruction.is_empty() {
        body["systemInstruction"] = json!({ "parts": [{ "text": system_instruction }] });
    }
    body
}

fn content_to_json(role: &str, text: &str) -> Value {
    json!({
        "role": role,
        "parts": [{ "text": text }],
    })
}

/// Concatenated text parts of the first candidate.
pub(crate) fn parse_reply(data: ApiResponse) -> Result<String> {
    if let Some(reason) = data.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ChatError::remote(format!("Prompt blocked: {}", reason)));
    }

    let candidate = data
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ChatError::remote("No candidates in response"))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(ChatError::remote(format!("Empty response (finish reason: {})", reason)));
    }
    Ok(text)
}

pub(crate) fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => format!("HTTP {}: {}", status, parsed.error.message),
        Err(_) => format!("HTTP {}: {}", status, body),
    }
}
