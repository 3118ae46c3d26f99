//! Fallback synthesizer used when speech is disabled.

use async_trait::async_trait;

use crate::domain::ports::{SpeechError, SpeechSynthesizer};

/// Synthesizer that refuses every request with [`SpeechError::Disabled`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSynthesizer;

impl NoopSynthesizer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechSynthesizer for NoopSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, SpeechError> {
        Err(SpeechError::Disabled)
    }
}
