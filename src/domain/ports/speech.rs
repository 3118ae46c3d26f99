use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("síntese de voz desativada")]
    Disabled,
    #[error("serviço de síntese indisponível: {0}")]
    ServiceUnavailable(String),
    #[error("o serviço devolveu áudio vazio")]
    EmptyAudio,
    #[error("texto vazio, nada a sintetizar")]
    EmptyText,
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Turn a plain natural-language string into audio bytes (MP3).
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis is disabled, the text is empty,
    /// the remote service fails, or it answers with no audio.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError>;
}
