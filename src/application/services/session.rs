use crate::domain::entities::conversation::Conversation;
use crate::domain::entities::machine::MachineProfile;
use crate::domain::entities::summary::Summary;
use crate::domain::ports::assistant::Assistant;

/// Shown instead of an answer when no assistant provider is configured.
pub const NOT_CONFIGURED_NOTICE: &str = "[Assistente IA não configurado]";

/// One support conversation bound to a simulation summary.
///
/// Owns the in-memory log and turns every assistant outcome into a chat
/// entry: the reply text, a configuration notice, or the failure as
/// user-visible text. Asking never fails the hosting process.
pub struct ChatSession<'a> {
    assistant: &'a dyn Assistant,
    summary: Summary,
    machine: MachineProfile,
    conversation: Conversation,
}

impl<'a> ChatSession<'a> {
    #[must_use]
    pub fn new(assistant: &'a dyn Assistant, summary: Summary, machine: MachineProfile) -> Self {
        Self {
            assistant,
            summary,
            machine,
            conversation: Conversation::new(),
        }
    }

    /// Sends one question, appends both sides to the log and returns the
    /// assistant's entry text. Only the current question travels to the
    /// provider; the log stays local.
    pub async fn ask(&mut self, question: &str) -> String {
        self.conversation.push_user(question);
        let text = match self
            .assistant
            .reply(&self.summary, &self.machine, question)
            .await
        {
            Ok(Some(reply)) => reply,
            Ok(None) => NOT_CONFIGURED_NOTICE.to_string(),
            Err(e) => {
                tracing::warn!("falha ao chamar o assistente: {e}");
                format!("[Erro ao chamar o assistente: {e}]")
            }
        };
        self.conversation.push_assistant(text.clone());
        text
    }

    pub fn clear(&mut self) {
        self.conversation.clear();
    }

    /// Rebinds the session to a regenerated summary, keeping the log.
    pub fn set_summary(&mut self, summary: Summary) {
        self.summary = summary;
    }

    #[must_use]
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    #[must_use]
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    #[must_use]
    pub fn machine(&self) -> &MachineProfile {
        &self.machine
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::entities::conversation::ChatRole;
    use crate::domain::entities::series::OccurrenceSeries;
    use crate::domain::ports::assistant::AssistantError;
    use async_trait::async_trait;
    use chrono::Utc;

    fn summary() -> Summary {
        let series = OccurrenceSeries::anchored(&[2, 5, 3], Utc::now()).expect("series");
        Summary::of(&series)
    }

    struct EchoAssistant;

    #[async_trait]
    impl Assistant for EchoAssistant {
        async fn reply(
            &self,
            _summary: &Summary,
            _machine: &MachineProfile,
            question: &str,
        ) -> Result<Option<String>, AssistantError> {
            Ok(Some(format!("echo: {question}")))
        }
    }

    struct SilentAssistant;

    #[async_trait]
    impl Assistant for SilentAssistant {
        async fn reply(
            &self,
            _summary: &Summary,
            _machine: &MachineProfile,
            _question: &str,
        ) -> Result<Option<String>, AssistantError> {
            Ok(None)
        }
    }

    struct FailingAssistant;

    #[async_trait]
    impl Assistant for FailingAssistant {
        async fn reply(
            &self,
            _summary: &Summary,
            _machine: &MachineProfile,
            _question: &str,
        ) -> Result<Option<String>, AssistantError> {
            Err(AssistantError::ServiceUnavailable("API down".into()))
        }
    }

    #[tokio::test]
    async fn ask_appends_question_and_reply() {
        let assistant = EchoAssistant;
        let mut session = ChatSession::new(&assistant, summary(), MachineProfile::default());

        let answer = session.ask("há risco?").await;
        assert_eq!(answer, "echo: há risco?");

        let entries = session.conversation().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].role, ChatRole::User);
        assert_eq!(entries[0].text, "há risco?");
        assert_eq!(entries[1].role, ChatRole::Assistant);
        assert_eq!(entries[1].text, "echo: há risco?");
    }

    #[tokio::test]
    async fn unconfigured_assistant_yields_notice_entry() {
        let assistant = SilentAssistant;
        let mut session = ChatSession::new(&assistant, summary(), MachineProfile::default());

        let answer = session.ask("alguém aí?").await;
        assert_eq!(answer, NOT_CONFIGURED_NOTICE);
        assert_eq!(session.conversation().len(), 2);
    }

    #[tokio::test]
    async fn assistant_failure_becomes_visible_text_not_error() {
        let assistant = FailingAssistant;
        let mut session = ChatSession::new(&assistant, summary(), MachineProfile::default());

        let answer = session.ask("e agora?").await;
        assert!(answer.starts_with("[Erro ao chamar o assistente:"));
        assert!(answer.contains("API down"));

        // the failure still lands in the log as a normal entry
        let last = session.conversation().last().expect("entry");
        assert_eq!(last.role, ChatRole::Assistant);
    }

    #[tokio::test]
    async fn clear_resets_the_log() {
        let assistant = EchoAssistant;
        let mut session = ChatSession::new(&assistant, summary(), MachineProfile::default());
        session.ask("uma").await;
        session.ask("duas").await;
        assert_eq!(session.conversation().len(), 4);

        session.clear();
        assert!(session.conversation().is_empty());
    }

    #[tokio::test]
    async fn multiple_questions_keep_order() {
        let assistant = EchoAssistant;
        let mut session = ChatSession::new(&assistant, summary(), MachineProfile::default());
        session.ask("primeira").await;
        session.ask("segunda").await;

        let entries = session.conversation().entries();
        assert_eq!(entries[0].text, "primeira");
        assert_eq!(entries[2].text, "segunda");
    }

    #[tokio::test]
    async fn set_summary_keeps_the_log() {
        let assistant = EchoAssistant;
        let mut session = ChatSession::new(&assistant, summary(), MachineProfile::default());
        session.ask("antes").await;

        let series = OccurrenceSeries::anchored(&[9, 9, 9], Utc::now()).expect("series");
        session.set_summary(Summary::of(&series));

        assert_eq!(session.summary().max, 9);
        assert_eq!(session.conversation().len(), 2);
    }
}
