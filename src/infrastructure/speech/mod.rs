//! Adapters for the [`SpeechSynthesizer`] port.

pub mod noop;
pub mod translate;

pub use noop::NoopSynthesizer;
pub use translate::TranslateTtsSynthesizer;

use crate::application::config::SpeechConfig;
use crate::domain::ports::SpeechSynthesizer;

/// Builds the synthesizer described by the configuration.
#[must_use]
pub fn create_speech_synthesizer(config: &SpeechConfig) -> Box<dyn SpeechSynthesizer> {
    if !config.enabled {
        return Box::new(NoopSynthesizer::new());
    }

    match TranslateTtsSynthesizer::new(config.language.clone()) {
        Ok(synth) => Box::new(synth),
        Err(e) => {
            tracing::warn!(error = %e, "falha ao criar o sintetizador de voz, usando noop");
            Box::new(NoopSynthesizer::new())
        }
    }
}
