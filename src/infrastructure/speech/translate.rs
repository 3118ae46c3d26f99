//! Speech synthesis through the public translate TTS endpoint.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::ports::{SpeechError, SpeechSynthesizer};

const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_tts";
/// The endpoint rejects long inputs, so the text is cut at a word boundary.
const MAX_TEXT_CHARS: usize = 200;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches an MP3 rendition of a short Portuguese text.
pub struct TranslateTtsSynthesizer {
    client: Client,
    endpoint: String,
    language: String,
}

impl TranslateTtsSynthesizer {
    /// Creates a synthesizer for the given language tag, e.g. `pt-BR`.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::ServiceUnavailable`] when the HTTP client
    /// cannot be constructed.
    pub fn new(language: String) -> Result<Self, SpeechError> {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string(), language)
    }

    /// Same as [`TranslateTtsSynthesizer::new`] with a custom endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::ServiceUnavailable`] when the HTTP client
    /// cannot be constructed.
    pub fn with_endpoint(endpoint: String, language: String) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SpeechError::ServiceUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            language: language.to_lowercase(),
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for TranslateTtsSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechError::EmptyText);
        }
        let text = truncate_to_words(text, MAX_TEXT_CHARS);

        tracing::debug!(chars = text.chars().count(), "sintetizando fala");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", self.language.as_str()),
                ("client", "tw-ob"),
            ])
            .send()
            .await
            .map_err(|e| SpeechError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::ServiceUnavailable(format!("HTTP {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::ServiceUnavailable(e.to_string()))?;

        if bytes.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }

        Ok(bytes.to_vec())
    }
}

/// Cuts `text` to at most `max_chars` characters, preferring a word boundary.
fn truncate_to_words(text: &str, max_chars: usize) -> &str {
    let mut cut = text.len();
    let mut seen = 0usize;
    for (idx, _) in text.char_indices() {
        if seen == max_chars {
            cut = idx;
            break;
        }
        seen += 1;
    }
    if cut == text.len() {
        return text;
    }

    match text[..cut].rfind(char::is_whitespace) {
        Some(ws) if ws > 0 => text[..ws].trim_end(),
        _ => &text[..cut],
    }
}
