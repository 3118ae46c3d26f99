use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::machine::MachineProfile;
use crate::domain::entities::summary::Summary;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("serviço do assistente indisponível: {0}")]
    ServiceUnavailable(String),
    #[error("resposta inválida do assistente: {0}")]
    InvalidResponse(String),
    #[error("chave de API ausente na variável {0}")]
    MissingApiKey(String),
    #[error("tempo de resposta esgotado")]
    Timeout,
}

#[async_trait]
pub trait Assistant: Send + Sync {
    /// Answer a support question with the current occurrence summary and
    /// machine data as context.
    ///
    /// `Ok(None)` means no provider is configured; callers show a notice
    /// instead of an answer. Only the current question travels to the
    /// provider, never the conversation log.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError` if the remote service is unreachable, the
    /// response cannot be decoded, the API key is missing, or the call
    /// times out.
    async fn reply(
        &self,
        summary: &Summary,
        machine: &MachineProfile,
        question: &str,
    ) -> Result<Option<String>, AssistantError>;
}
