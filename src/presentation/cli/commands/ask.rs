use std::path::Path;

use anyhow::Context as _;
use colored::Colorize;

use crate::application::services::session::ChatSession;
use crate::domain::entities::MachineProfile;
use crate::domain::ports::{Assistant, SpeechError, SpeechSynthesizer};
use crate::domain::simulation::SimulationRun;

const DEFAULT_AUDIO_PATH: &str = "resposta.mp3";

/// Sends one question to the assistant and prints the exchange.
///
/// With `speak`, the reply is also synthesized to an MP3 file. Synthesis
/// being disabled or failing is reported but never fails the command;
/// only a file write error does.
///
/// # Errors
///
/// Returns an error if the synthesized audio cannot be written to disk.
pub async fn run_ask(
    assistant: &dyn Assistant,
    synthesizer: &dyn SpeechSynthesizer,
    run: &SimulationRun,
    machine: &MachineProfile,
    question: &str,
    speak: bool,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let mut session = ChatSession::new(assistant, run.summary, machine.clone());

    println!("{} {question}", "Você:".bold().yellow());
    let answer = session.ask(question).await;
    println!("{} {answer}", "EVA:".bold().cyan());

    if speak {
        speak_reply(synthesizer, &answer, out).await?;
    }

    Ok(())
}

async fn speak_reply(
    synthesizer: &dyn SpeechSynthesizer,
    text: &str,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    match synthesizer.synthesize(text).await {
        Ok(audio) => {
            let path = out.unwrap_or_else(|| Path::new(DEFAULT_AUDIO_PATH));
            std::fs::write(path, &audio)
                .with_context(|| format!("falha ao gravar o áudio em {}", path.display()))?;
            println!(
                "{} {}",
                "🔊 Áudio gravado em".green(),
                path.display()
            );
        }
        Err(SpeechError::Disabled) => {
            println!("{}", "Síntese de voz desativada na configuração".yellow());
        }
        Err(e) => {
            tracing::warn!("falha na síntese de voz: {e}");
            println!("{}", "⚠ Síntese de voz falhou".yellow());
        }
    }
    Ok(())
}
