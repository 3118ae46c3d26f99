pub mod assistant;
pub mod speech;

pub use assistant::{Assistant, AssistantError};
pub use speech::{SpeechError, SpeechSynthesizer};
