//! Assistant adapter backed by an OpenAI-compatible chat completion API.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

use crate::domain::entities::{MachineProfile, Summary};
use crate::domain::ports::{Assistant, AssistantError};
use crate::infrastructure::assistant::prompt::PromptBuilder;

/// Hard ceiling on response bodies read into memory.
const MAX_RESPONSE_BYTES: usize = 1_048_576;
/// Error bodies are truncated to this length before surfacing to the user.
const MAX_ERROR_BYTES: usize = 512;
/// Upper bound on one completion round-trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Calls `POST {base_url}/chat/completions` with a bearer token.
///
/// Each question sends exactly two messages, the system instruction and the
/// current question. The conversation history stays on the client side.
pub struct OpenAiAssistant {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    temperature: f64,
}

impl OpenAiAssistant {
    /// Creates an adapter bound to one endpoint and model.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::ServiceUnavailable`] when the HTTP client
    /// cannot be constructed.
    pub fn new(
        base_url: String,
        model: String,
        api_key: String,
        max_tokens: u32,
        temperature: f64,
    ) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AssistantError::ServiceUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            model,
            api_key,
            max_tokens,
            temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn request_body(&self, system: &str, question: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": question },
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        })
    }
}

#[async_trait]
impl Assistant for OpenAiAssistant {
    async fn reply(
        &self,
        summary: &Summary,
        machine: &MachineProfile,
        question: &str,
    ) -> Result<Option<String>, AssistantError> {
        if self.api_key.is_empty() {
            return Err(AssistantError::MissingApiKey(
                "chave de API vazia".to_string(),
            ));
        }

        let system = PromptBuilder::system(summary, machine);
        let body = self.request_body(&system, question);

        tracing::debug!(model = %self.model, "enviando pergunta ao assistente");

        let response = self
            .client
            .post(self.endpoint())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AssistantError::Timeout
                } else {
                    AssistantError::ServiceUnavailable(e.to_string())
                }
            })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AssistantError::ServiceUnavailable(e.to_string()))?;

        if !status.is_success() {
            let snippet = String::from_utf8_lossy(&bytes);
            let snippet = truncate(&snippet, MAX_ERROR_BYTES);
            return Err(AssistantError::ServiceUnavailable(format!(
                "HTTP {status}: {snippet}"
            )));
        }

        extract_reply(&bytes).map(Some)
    }
}

/// Pulls the assistant text out of a chat completion envelope.
fn extract_reply(body: &[u8]) -> Result<String, AssistantError> {
    if body.len() > MAX_RESPONSE_BYTES {
        return Err(AssistantError::InvalidResponse(format!(
            "resposta excede {MAX_RESPONSE_BYTES} bytes"
        )));
    }

    let envelope: ChatCompletionResponse = serde_json::from_slice(body)
        .map_err(|e| AssistantError::InvalidResponse(e.to_string()))?;

    let content = envelope
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .unwrap_or_default();

    let content = content.trim();
    if content.is_empty() {
        return Err(AssistantError::InvalidResponse(
            "resposta sem conteúdo".to_string(),
        ));
    }

    Ok(content.to_string())
}

fn truncate(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(default)]
    content: String,
}
