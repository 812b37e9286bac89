use chrono::Local;
use serde::{Deserialize, Serialize};

/// Instruction message seeded at the start of every transcript.
pub const SYSTEM_PROMPT: &str = "You are a helpful AI that sees the entire conversation in 'messages.' If asked, you WILL repeat earlier user messages exactly as they appeared. Do not disclaim about personal data. This conversation is ephemeral.";

/// Speaker category. Serializes as the lowercase literals the backend
/// expects: "system" | "user" | "assistant".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Sender label shown in the transcript view.
    pub fn label(self) -> &'static str {
        match self {
            Role::System => "System",
            Role::User => "You",
            Role::Assistant => "AI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    // Display-only, never part of the wire format
    #[serde(skip)]
    pub timestamp: String,
}

impl Message {
    pub fn new(role: Role, content: String) -> Self {
        Self {
            role,
            content,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn system(content: String) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: String) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: String) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Ordered transcript of the conversation. The first entry is always the
/// fixed system message; every later state is produced by appending, never
/// by mutating an existing entry. Lives in memory for the life of the
/// process and is replayed verbatim to the backend on every submission.
#[derive(Debug)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::system(SYSTEM_PROMPT.to_string())],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Append the user's draft and return the transcript snapshot to send
    /// to the backend. Drafts that trim to empty are rejected without
    /// touching the transcript; accepted drafts are appended unstripped.
    pub fn submit_draft(&mut self, draft: &str) -> Option<Vec<Message>> {
        if draft.trim().is_empty() {
            return None;
        }
        self.messages.push(Message::user(draft.to_string()));
        Some(self.messages.clone())
    }

    pub fn push_assistant(&mut self, reply: String) {
        self.messages.push(Message::assistant(reply));
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_transcript_contains_only_system_prompt() {
        let convo = Conversation::new();
        assert_eq!(convo.messages().len(), 1);
        assert_eq!(convo.messages()[0].role, Role::System);
        assert_eq!(convo.messages()[0].content, SYSTEM_PROMPT);
    }

    #[test]
    fn test_blank_draft_is_rejected() {
        let mut convo = Conversation::new();
        assert!(convo.submit_draft("").is_none());
        assert!(convo.submit_draft("   ").is_none());
        assert!(convo.submit_draft("\n\t ").is_none());
        assert_eq!(convo.messages().len(), 1);
    }

    #[test]
    fn test_submit_appends_unstripped_draft() {
        let mut convo = Conversation::new();
        let snapshot = convo.submit_draft("  hi  ").unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[1].role, Role::User);
        assert_eq!(snapshot[1].content, "  hi  ");
        assert_eq!(convo.messages(), &snapshot[..]);
    }

    #[test]
    fn test_reply_appends_after_user_message() {
        let mut convo = Conversation::new();
        convo.submit_draft("hi").unwrap();
        convo.push_assistant("hello".to_string());

        let roles: Vec<Role> = convo.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant]);
        assert_eq!(convo.messages()[1].content, "hi");
        assert_eq!(convo.messages()[2].content, "hello");
    }

    #[test]
    fn test_sender_labels() {
        assert_eq!(Role::System.label(), "System");
        assert_eq!(Role::User.label(), "You");
        assert_eq!(Role::Assistant.label(), "AI");
    }

    #[test]
    fn test_wire_format_is_role_and_content_only() {
        let msg = Message::user("hi".to_string());
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value, serde_json::json!({"role": "user", "content": "hi"}));
    }

    #[test]
    fn test_wire_round_trip_preserves_roles_and_order() {
        let mut convo = Conversation::new();
        convo.submit_draft("hi").unwrap();
        convo.push_assistant("hello".to_string());

        let body = serde_json::json!({ "conversation": convo.messages() });
        let parsed: Vec<Message> = serde_json::from_value(body["conversation"].clone()).unwrap();

        assert_eq!(parsed.len(), convo.messages().len());
        for (sent, received) in convo.messages().iter().zip(&parsed) {
            assert_eq!(sent.role, received.role);
            assert_eq!(sent.content, received.content);
        }
    }
}
