use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::config::Config;
use crate::llm::media::InlineImage;
use crate::llm::ModelRequest;
use crate::utils::http::get_http_client;
use crate::utils::timing::log_llm_timing;

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    #[allow(dead_code)]
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

const GEMINI_RETRY_BASE_DELAY_MS: u64 = 900;

/// Client for the `generateContent` endpoint of the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    top_k: i32,
    top_p: f32,
    max_output_tokens: i32,
    safety_profile: String,
    max_attempts: usize,
}

impl GeminiClient {
    pub fn from_config(config: &Config) -> Self {
        GeminiClient {
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.clone(),
            temperature: config.gemini_temperature,
            top_k: config.gemini_top_k,
            top_p: config.gemini_top_p,
            max_output_tokens: config.gemini_max_output_tokens,
            safety_profile: config.gemini_safety_settings.clone(),
            max_attempts: config.gemini_max_retry_attempts.max(1),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn redact_api_key(&self, text: &str) -> String {
        let key = self.api_key.trim();
        if key.is_empty() {
            return text.to_string();
        }
        text.replace(key, "[redacted]")
    }

    fn build_payload(&self, request: &ModelRequest) -> Value {
        json!({
            "contents": [{ "role": "user", "parts": build_gemini_parts(&request.text, &request.images) }],
            "generationConfig": {
                "temperature": self.temperature,
                "topK": self.top_k,
                "topP": self.top_p,
                "maxOutputTokens": self.max_output_tokens,
            },
            "safetySettings": build_safety_settings(&self.safety_profile),
        })
    }

    pub async fn generate(&self, request: &ModelRequest) -> Result<String> {
        if !self.is_configured() {
            return Err(anyhow!("Gemini API key is not configured"));
        }
        let payload = self.build_payload(request);
        let metadata = json!({ "images": request.images.len(), "operation": request.operation });

        log_llm_timing("gemini", &self.model, request.operation, Some(metadata), || async move {
            let response = self.call_api(payload, request.operation).await?;
            extract_text_from_response(response)
        })
        .await
    }

    async fn call_api(&self, payload: Value, operation: &str) -> Result<GeminiResponse> {
        let client = get_http_client();
        let url = self.endpoint();

        if tracing::enabled!(tracing::Level::DEBUG) {
            let payload_summary = summarize_gemini_payload(&payload);
            debug!(target: "llm.gemini", model = %self.model, operation = operation, payload = %payload_summary);
        }

        let mut attempt = 0usize;
        loop {
            attempt += 1;
            let response = match client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&payload)
                .send()
                .await
            {
                Ok(response) => response,
                Err(err) => {
                    let err_text = self.redact_api_key(&err.to_string());
                    let should_retry =
                        gemini_should_retry_error(&err) && attempt < self.max_attempts;
                    warn!(
                        "Gemini request failed to send: {} (timeout={}, connect={}, retrying={})",
                        err_text,
                        err.is_timeout(),
                        err.is_connect(),
                        should_retry
                    );
                    if should_retry {
                        tokio::time::sleep(gemini_retry_delay(attempt)).await;
                        continue;
                    }
                    return Err(anyhow!("Gemini request failed: {}", err_text));
                }
            };

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                let (message, body_summary) = summarize_error_body(&body);
                let should_retry =
                    gemini_should_retry_status(status) && attempt < self.max_attempts;
                warn!(
                    "Gemini API error: status={}, body={}, retrying={}",
                    status,
                    self.redact_api_key(&body_summary),
                    should_retry
                );
                if should_retry {
                    tokio::time::sleep(gemini_retry_delay(attempt)).await;
                    continue;
                }
                let detail = self.redact_api_key(&message.unwrap_or(body_summary));
                return Err(anyhow!(
                    "Gemini request failed with status {}: {}",
                    status,
                    detail
                ));
            }

            let value = response.json::<GeminiResponse>().await?;
            if tracing::enabled!(tracing::Level::DEBUG) {
                debug!(target: "llm.gemini", model = %self.model, response = %summarize_gemini_response(&value));
            }
            return Ok(value);
        }
    }
}

fn gemini_should_retry_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

fn gemini_should_retry_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
        || status.is_server_error()
}

fn gemini_retry_delay(attempt: usize) -> Duration {
    let attempt = attempt.max(1) as u64;
    Duration::from_millis(GEMINI_RETRY_BASE_DELAY_MS.saturating_mul(attempt))
}

fn build_safety_settings(profile: &str) -> Vec<Value> {
    let threshold = match profile {
        "standard" => "BLOCK_MEDIUM_AND_ABOVE",
        "permissive" => "OFF",
        _ => {
            warn!(
                "Unknown GEMINI_SAFETY_SETTINGS value '{}', using standard defaults.",
                profile
            );
            "BLOCK_MEDIUM_AND_ABOVE"
        }
    };

    vec![
        json!({ "category": "HARM_CATEGORY_HARASSMENT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": threshold }),
    ]
}

fn build_gemini_parts(text: &str, images: &[InlineImage]) -> Vec<Value> {
    let mut parts = vec![json!({ "text": text })];
    for image in images {
        parts.push(json!({
            "inlineData": {
                "mimeType": image.mime_type,
                "data": image.data
            }
        }));
    }
    parts
}

fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

fn summarize_gemini_parts(parts: &[Value]) -> Vec<Value> {
    parts
        .iter()
        .map(|part| {
            if let Some(text) = part.get("text").and_then(|value| value.as_str()) {
                json!({ "text": truncate_for_log(text, 200) })
            } else if let Some(inline_data) = part.get("inlineData") {
                let mime_type = inline_data
                    .get("mimeType")
                    .and_then(|value| value.as_str())
                    .unwrap_or("unknown");
                let data_len = inline_data
                    .get("data")
                    .and_then(|value| value.as_str())
                    .map(|value| value.len())
                    .unwrap_or(0);
                json!({ "inlineData": { "mimeType": mime_type, "dataLen": data_len } })
            } else {
                json!({ "unknownPart": true })
            }
        })
        .collect()
}

fn summarize_gemini_payload(payload: &Value) -> Value {
    let mut summary = Map::new();

    if let Some(contents) = payload.get("contents").and_then(|value| value.as_array()) {
        let summarized: Vec<Value> = contents
            .iter()
            .map(|content| {
                let parts = content
                    .get("parts")
                    .and_then(|value| value.as_array())
                    .map(|parts| summarize_gemini_parts(parts))
                    .unwrap_or_default();
                json!({ "role": content.get("role").cloned().unwrap_or(json!("user")), "parts": parts })
            })
            .collect();
        summary.insert("contents".to_string(), Value::Array(summarized));
    }

    if let Some(config) = payload.get("generationConfig") {
        summary.insert("generationConfig".to_string(), config.clone());
    }

    if let Some(safety) = payload
        .get("safetySettings")
        .and_then(|value| value.as_array())
    {
        summary.insert("safetySettingsCount".to_string(), json!(safety.len()));
    }

    Value::Object(summary)
}

fn summarize_gemini_response(response: &GeminiResponse) -> Value {
    let candidates = response.candidates.as_deref().unwrap_or(&[]);
    let mut text_parts = 0usize;
    let mut text_preview = None;
    for part in candidates
        .iter()
        .filter_map(|candidate| candidate.content.as_ref())
        .filter_map(|content| content.parts.as_ref())
        .flatten()
    {
        if let GeminiPart::Text { text } = part {
            text_parts += 1;
            if text_preview.is_none() && !text.trim().is_empty() {
                text_preview = Some(truncate_for_log(text, 200));
            }
        }
    }

    json!({
        "candidates": candidates.len(),
        "textParts": text_parts,
        "textPreview": text_preview,
        "finishReasons": candidates.iter().filter_map(|c| c.finish_reason.clone()).collect::<Vec<_>>(),
    })
}

fn summarize_error_body(body: &str) -> (Option<String>, String) {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return (None, "empty response body".to_string());
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        let message = value
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .map(|v| v.to_string())
            .or_else(|| {
                value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(|v| v.to_string())
            });
        return (message, truncate_for_log(&value.to_string(), 2000));
    }

    (None, truncate_for_log(trimmed, 2000))
}

fn extract_text_from_response(response: GeminiResponse) -> Result<String> {
    let block_reason = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.clone());

    let mut finish_reason = None;
    let mut text_parts = Vec::new();
    for candidate in response.candidates.unwrap_or_default() {
        if finish_reason.is_none() {
            finish_reason = candidate.finish_reason.clone();
        }
        let parts = candidate
            .content
            .and_then(|content| content.parts)
            .unwrap_or_default();
        for part in parts {
            if let GeminiPart::Text { text } = part {
                if !text.trim().is_empty() {
                    text_parts.push(text);
                }
            }
        }
    }

    if text_parts.is_empty() {
        if let Some(reason) = block_reason {
            return Err(anyhow!("Gemini blocked the prompt: {}", reason));
        }
        return Err(anyhow!(
            "Gemini returned no text (finish reason: {})",
            finish_reason.unwrap_or_else(|| "unknown".to_string())
        ));
    }

    Ok(text_parts.join("\n"))
}
