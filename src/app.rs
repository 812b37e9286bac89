use std::collections::VecDeque;

use tui_textarea::TextArea;

use crate::conversation::{Conversation, Message};

fn draft_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text("Type your message...");
    textarea
}

/// UI state: the transcript, the draft input, and the submission queue.
///
/// Submissions are serialized through `pending`: while a request is in
/// flight, later drafts wait in the queue and their `user` message is
/// appended only when they are dispatched. Every outgoing snapshot
/// therefore contains all prior appends, including earlier replies.
pub struct App {
    pub conversation: Conversation,
    pub textarea: TextArea<'static>,
    pub scroll_offset: u16,
    pub in_flight: bool,
    pending: VecDeque<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            conversation: Conversation::new(),
            textarea: draft_textarea(),
            scroll_offset: 0,
            in_flight: false,
            pending: VecDeque::new(),
        }
    }

    /// Take the current draft and queue it for submission. Returns the
    /// transcript snapshot to send when a request can start immediately;
    /// `None` when the draft is blank or another request is in flight.
    pub fn submit(&mut self) -> Option<Vec<Message>> {
        let draft = self.textarea.lines().join("\n");
        if draft.trim().is_empty() {
            return None;
        }
        self.textarea = draft_textarea();
        self.pending.push_back(draft);
        self.dispatch_next()
    }

    /// Append the backend's reply and, if a submission is waiting, return
    /// the next snapshot to send.
    pub fn apply_reply(&mut self, reply: String) -> Option<Vec<Message>> {
        self.conversation.push_assistant(reply);
        self.in_flight = false;
        self.dispatch_next()
    }

    fn dispatch_next(&mut self) -> Option<Vec<Message>> {
        if self.in_flight {
            return None;
        }
        let draft = self.pending.pop_front()?;
        // Queued drafts are never blank, so this always appends.
        let snapshot = self.conversation.submit_draft(&draft)?;
        self.in_flight = true;
        Some(snapshot)
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
