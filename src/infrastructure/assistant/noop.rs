//! Fallback assistant used when no provider is configured.

use async_trait::async_trait;

use crate::domain::entities::{MachineProfile, Summary};
use crate::domain::ports::{Assistant, AssistantError};

/// Assistant that never answers.
///
/// Returning `Ok(None)` lets callers print the not-configured notice instead
/// of treating the absence of a provider as a failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAssistant;

impl NoopAssistant {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Assistant for NoopAssistant {
    async fn reply(
        &self,
        _summary: &Summary,
        _machine: &MachineProfile,
        _question: &str,
    ) -> Result<Option<String>, AssistantError> {
        Ok(None)
    }
}
