#![allow(clippy::expect_used)]

use std::sync::Mutex;

use async_trait::async_trait;

use seep::application::config::{AssistantConfig, SimulationConfig};
use seep::application::services::SimulatorService;
use seep::application::services::session::{ChatSession, NOT_CONFIGURED_NOTICE};
use seep::domain::entities::{ChatRole, MachineProfile, Summary};
use seep::domain::ports::{Assistant, AssistantError};
use seep::domain::value_objects::SeriesMode;
use seep::infrastructure::assistant::create_assistant;

// ---------------------------------------------------------------------------
// RecordingAssistant
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct RecordedCall {
    question: String,
    summary_total: u64,
    machine_id: String,
}

struct RecordingAssistant {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingAssistant {
    const fn new() -> Self {
        Self {
            calls: Mutex::new(vec![]),
        }
    }

    fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl Assistant for RecordingAssistant {
    async fn reply(
        &self,
        summary: &Summary,
        machine: &MachineProfile,
        question: &str,
    ) -> Result<Option<String>, AssistantError> {
        self.calls.lock().expect("lock").push(RecordedCall {
            question: question.to_string(),
            summary_total: summary.total,
            machine_id: machine.machine_id.clone(),
        });
        Ok(Some(format!("resposta para: {question}")))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn demo_summary() -> Summary {
    SimulatorService::new(SimulationConfig::default())
        .run()
        .expect("demo run")
        .summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn conversation_flow_keeps_order_and_context() {
    let assistant = RecordingAssistant::new();
    let mut session = ChatSession::new(&assistant, demo_summary(), MachineProfile::default());

    session.ask("há vazamento agora?").await;
    session.ask("qual peça troco primeiro?").await;

    let entries = session.conversation().entries();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].role, ChatRole::User);
    assert_eq!(entries[0].text, "há vazamento agora?");
    assert_eq!(entries[1].role, ChatRole::Assistant);
    assert_eq!(entries[1].text, "resposta para: há vazamento agora?");
    assert_eq!(entries[2].text, "qual peça troco primeiro?");
    assert_eq!(entries[3].text, "resposta para: qual peça troco primeiro?");

    // each call carried the bound summary and machine, and only the
    // current question, never the log
    let calls = assistant.recorded_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].question, "há vazamento agora?");
    assert_eq!(calls[0].summary_total, 268);
    assert_eq!(calls[0].machine_id, "A2203");
    assert_eq!(calls[1].question, "qual peça troco primeiro?");
    assert_eq!(calls[1].summary_total, 268);
}

#[tokio::test]
async fn regenerated_summary_reaches_the_next_question() {
    let assistant = RecordingAssistant::new();
    let mut session = ChatSession::new(&assistant, demo_summary(), MachineProfile::default());
    session.ask("primeira").await;

    let seeded = SimulatorService::new(SimulationConfig {
        mode: SeriesMode::Parametric,
        seed: Some(5),
        ..SimulationConfig::default()
    })
    .run()
    .expect("seeded run");
    session.set_summary(seeded.summary);
    session.ask("segunda").await;

    let calls = assistant.recorded_calls();
    assert_eq!(calls[0].summary_total, 268);
    assert_eq!(calls[1].summary_total, seeded.summary.total);
    // the log survived the rebind
    assert_eq!(session.conversation().len(), 4);
}

#[tokio::test]
async fn disabled_assistant_config_yields_the_notice() {
    let assistant = create_assistant(&AssistantConfig::default());
    let mut session =
        ChatSession::new(assistant.as_ref(), demo_summary(), MachineProfile::default());

    let answer = session.ask("tem alguém?").await;
    assert_eq!(answer, NOT_CONFIGURED_NOTICE);
    assert_eq!(session.conversation().len(), 2);
}

#[tokio::test]
async fn unknown_provider_falls_back_to_the_notice() {
    let config = AssistantConfig {
        enabled: true,
        provider: "acme".to_string(),
        ..AssistantConfig::default()
    };
    let assistant = create_assistant(&config);
    let mut session =
        ChatSession::new(assistant.as_ref(), demo_summary(), MachineProfile::default());

    assert_eq!(session.ask("oi").await, NOT_CONFIGURED_NOTICE);
}
