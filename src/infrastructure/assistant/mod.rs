//! Adapters for the [`Assistant`] port.

pub mod noop;
pub mod openai;
pub mod prompt;

pub use noop::NoopAssistant;
pub use openai::OpenAiAssistant;
pub use prompt::PromptBuilder;

use crate::application::config::AssistantConfig;
use crate::domain::ports::Assistant;

/// Builds the assistant described by the configuration.
///
/// The API key is read from the environment variable named in
/// `config.api_key_env`, never from the configuration file. Any missing
/// piece degrades to the noop assistant so the rest of the application
/// keeps running without a provider.
#[must_use]
pub fn create_assistant(config: &AssistantConfig) -> Box<dyn Assistant> {
    if !config.enabled {
        return Box::new(NoopAssistant::new());
    }

    match config.provider.as_str() {
        "openai" => {
            let api_key = match std::env::var(&config.api_key_env) {
                Ok(key) if !key.trim().is_empty() => key,
                _ => {
                    tracing::warn!(
                        env = %config.api_key_env,
                        "chave de API ausente, assistente desativado"
                    );
                    return Box::new(NoopAssistant::new());
                }
            };

            match OpenAiAssistant::new(
                config.base_url.clone(),
                config.model.clone(),
                api_key,
                config.max_tokens,
                config.temperature,
            ) {
                Ok(assistant) => Box::new(assistant),
                Err(e) => {
                    tracing::warn!(error = %e, "falha ao criar o assistente, usando noop");
                    Box::new(NoopAssistant::new())
                }
            }
        }
        "noop" => Box::new(NoopAssistant::new()),
        other => {
            tracing::warn!(provider = %other, "provedor de assistente desconhecido, usando noop");
            Box::new(NoopAssistant::new())
        }
    }
}
