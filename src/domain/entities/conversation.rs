use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "Você"),
            Self::Assistant => write!(f, "EVA"),
        }
    }
}

/// One message of the support conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub timestamp: DateTime<Utc>,
    pub role: ChatRole,
    pub text: String,
}

/// Session-scoped conversation log.
///
/// Lives only in process memory for the duration of a session; nothing is
/// persisted and nothing here is sent back to the assistant as context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    entries: Vec<ChatEntry>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(ChatRole::User, text.into());
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.push(ChatRole::Assistant, text.into());
    }

    fn push(&mut self, role: ChatRole, text: String) {
        self.entries.push(ChatEntry {
            timestamp: Utc::now(),
            role,
            text,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Most recent entry, if any.
    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert_eq!(conversation.len(), 0);
        assert!(conversation.last().is_none());
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut conversation = Conversation::new();
        conversation.push_user("pergunta");
        conversation.push_assistant("resposta");

        let entries = conversation.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].role, ChatRole::User);
        assert_eq!(entries[0].text, "pergunta");
        assert_eq!(entries[1].role, ChatRole::Assistant);
        assert_eq!(entries[1].text, "resposta");
    }

    #[test]
    fn clear_empties_the_log() {
        let mut conversation = Conversation::new();
        conversation.push_user("a");
        conversation.push_assistant("b");
        conversation.clear();
        assert!(conversation.is_empty());
    }

    #[test]
    fn role_display_uses_chat_labels() {
        assert_eq!(ChatRole::User.to_string(), "Você");
        assert_eq!(ChatRole::Assistant.to_string(), "EVA");
    }

    #[test]
    fn serde_roundtrip() {
        let mut conversation = Conversation::new();
        conversation.push_user("há vazamento?");
        conversation.push_assistant("isolar a área primeiro");

        let json = serde_json::to_string(&conversation).expect("serialize");
        let back: Conversation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(conversation, back);
    }
}
