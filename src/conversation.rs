//! Conversation Log
//!
//! Message history behind the chat and document-chat panels. Edits are
//! two-phase: `begin_edit` stages a truncated copy that the UI shows while
//! the request is in flight; `commit_edit` makes it canonical and appends
//! the new reply, `rollback_edit` restores the log as it was.

use crate::error::ChatError;
use crate::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    /// Status lines (upload results, welcome text)
    System,
    Error,
}

impl Role {
    pub fn class(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
            Role::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    /// Stable render key, unique within a log
    pub key: u64,
    pub role: Role,
    pub text: String,
    /// Server-assigned history index; only indexed user entries are editable
    pub index: Option<usize>,
    /// Reply was augmented by a web search
    pub searched: bool,
    /// Play the typing reveal when first shown
    pub reveal: bool,
    /// Source line above the text (document chat: "Based on N document(s)")
    pub context: Option<String>,
    pub time: String,
}

impl ChatEntry {
    pub fn is_editable(&self) -> bool {
        self.role == Role::User && self.index.is_some()
    }
}

#[derive(Debug, Clone)]
struct StagedEdit {
    /// Log position of the edited entry
    position: usize,
    entries: Vec<ChatEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    entries: Vec<ChatEntry>,
    staged: Option<StagedEdit>,
    next_key: u64,
}

impl ConversationLog {
    /// New log, optionally seeded with an assistant welcome message
    pub fn new(welcome: Option<&str>) -> Self {
        let mut log = Self::default();
        log.reset(welcome);
        log
    }

    /// Clear everything (including a staged edit) and re-seed the welcome
    pub fn reset(&mut self, welcome: Option<&str>) {
        self.entries.clear();
        self.staged = None;
        if let Some(text) = welcome {
            self.push(Role::Assistant, text, None, false, false);
        }
    }

    /// Entries as displayed: the staged edit while one is in flight
    pub fn entries(&self) -> &[ChatEntry] {
        match &self.staged {
            Some(staged) => &staged.entries,
            None => &self.entries,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    #[cfg(test)]
    pub fn edit_in_flight(&self) -> bool {
        self.staged.is_some()
    }

    fn push(&mut self, role: Role, text: &str, index: Option<usize>, searched: bool, reveal: bool) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        self.entries.push(ChatEntry {
            key,
            role,
            text: text.to_string(),
            index,
            searched,
            reveal,
            context: None,
            time: format::now_short_time(),
        });
        key
    }

    pub fn push_user(&mut self, text: &str) -> u64 {
        self.push(Role::User, text, None, false, false)
    }

    /// Fresh replies are revealed; restored history is not
    pub fn push_assistant(&mut self, text: &str, index: Option<usize>, searched: bool, reveal: bool) -> u64 {
        self.push(Role::Assistant, text, index, searched, reveal)
    }

    pub fn push_system(&mut self, text: &str) -> u64 {
        self.push(Role::System, text, None, false, false)
    }

    pub fn push_error(&mut self, text: &str) -> u64 {
        self.push(Role::Error, text, None, false, false)
    }

    /// Back-fill the server index of a user entry once the reply echoes it
    pub fn assign_index(&mut self, key: u64, index: usize) -> bool {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => {
                entry.index = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn annotate(&mut self, key: u64, context: String) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.context = Some(context);
        }
    }

    /// The reveal has played; re-renders show the final text directly
    pub fn mark_revealed(&mut self, key: u64) {
        for list in [Some(&mut self.entries), self.staged.as_mut().map(|s| &mut s.entries)]
            .into_iter()
            .flatten()
        {
            if let Some(entry) = list.iter_mut().find(|e| e.key == key) {
                entry.reveal = false;
            }
        }
    }

    /// Validate and stage an edit of the user message with server `index`.
    /// The staged view shows the new text and hides everything after it.
    pub fn begin_edit(&mut self, index: usize, content: &str) -> Result<(), ChatError> {
        if self.staged.is_some() {
            return Err(ChatError::EditInFlight);
        }
        if index < 1 {
            return Err(ChatError::InvalidIndex(index));
        }
        if content.trim().is_empty() {
            return Err(ChatError::EmptyContent);
        }
        let position = self
            .entries
            .iter()
            .position(|e| e.index == Some(index))
            .ok_or(ChatError::InvalidIndex(index))?;
        if self.entries[position].role != Role::User {
            return Err(ChatError::NotEditable);
        }

        let mut entries = self.entries[..=position].to_vec();
        entries[position].text = content.to_string();
        self.staged = Some(StagedEdit { position, entries });
        Ok(())
    }

    /// Server accepted the edit: the staged log becomes canonical and the
    /// regenerated reply is appended. Returns the reply's key.
    pub fn commit_edit(&mut self, response: &str, ai_index: Option<usize>) -> Option<u64> {
        let staged = self.staged.take()?;
        self.entries = staged.entries;
        Some(self.push_assistant(response, ai_index, false, true))
    }

    /// Server rejected the edit or the request failed: restore the log.
    /// Returns the log position of the entry that was being edited.
    pub fn rollback_edit(&mut self) -> Option<usize> {
        self.staged.take().map(|s| s.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Welcome (no index), then user/assistant pairs indexed 1..=2n
    fn log_with_pairs(n: usize) -> ConversationLog {
        let mut log = ConversationLog::new(Some("Hello!"));
        for i in 0..n {
            let key = log.push_user(&format!("question {}", i));
            log.assign_index(key, 2 * i + 1);
            log.push_assistant(&format!("answer {}", i), Some(2 * i + 2), false, false);
        }
        log
    }

    #[test]
    fn test_welcome_seeded() {
        let log = ConversationLog::new(Some("Hello!"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].role, Role::Assistant);
        assert!(!log.entries()[0].reveal);
        assert!(ConversationLog::new(None).is_empty());
    }

    #[test]
    fn test_edit_truncates_later_messages_and_appends_reply() {
        let mut log = log_with_pairs(3); // indices 1..=6
        log.begin_edit(3, "new question").unwrap();

        // Staged view: nothing after index 3 is visible
        assert!(log.entries().iter().all(|e| e.index.map_or(true, |i| i <= 3)));
        assert_eq!(log.entries().last().unwrap().text, "new question");

        let key = log.commit_edit("fresh answer", Some(4)).unwrap();
        let entries = log.entries();
        assert!(entries.iter().all(|e| e.index.map_or(true, |i| i <= 4)));
        let last = entries.last().unwrap();
        assert_eq!(last.key, key);
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.text, "fresh answer");
        assert!(last.reveal);
        assert_eq!(entries[entries.len() - 2].index, Some(3));
        assert!(!log.edit_in_flight());
    }

    #[test]
    fn test_rollback_restores_log() {
        let mut log = log_with_pairs(2);
        let before = log.entries().to_vec();

        log.begin_edit(1, "changed").unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.rollback_edit(), Some(1));
        assert_eq!(log.entries(), before.as_slice());
    }

    #[test]
    fn test_edit_rejects_bad_index() {
        let mut log = log_with_pairs(1);
        assert_eq!(log.begin_edit(0, "x"), Err(ChatError::InvalidIndex(0)));
        assert_eq!(log.begin_edit(9, "x"), Err(ChatError::InvalidIndex(9)));
        assert_eq!(log.begin_edit(2, "x"), Err(ChatError::NotEditable));
        assert_eq!(log.begin_edit(1, "   "), Err(ChatError::EmptyContent));
        assert!(!log.edit_in_flight());
    }

    #[test]
    fn test_second_edit_rejected_while_in_flight() {
        let mut log = log_with_pairs(2);
        log.begin_edit(1, "a").unwrap();
        assert_eq!(log.begin_edit(1, "b"), Err(ChatError::EditInFlight));
    }

    #[test]
    fn test_unindexed_user_message_not_editable() {
        let mut log = ConversationLog::new(None);
        log.push_user("pending");
        assert!(!log.entries()[0].is_editable());

        let key = log.entries()[0].key;
        log.assign_index(key, 1);
        assert!(log.entries()[0].is_editable());
    }

    #[test]
    fn test_keys_unique_across_reset() {
        let mut log = log_with_pairs(1);
        let old_keys: Vec<u64> = log.entries().iter().map(|e| e.key).collect();
        log.reset(Some("Hello again"));
        assert!(!old_keys.contains(&log.entries()[0].key));
    }

    #[test]
    fn test_annotate_sets_context() {
        let mut log = ConversationLog::new(None);
        let key = log.push_assistant("answer", None, false, true);
        log.annotate(key, "Based on 2 document(s)".into());
        assert_eq!(log.entries()[0].context.as_deref(), Some("Based on 2 document(s)"));
    }

    #[test]
    fn test_mark_revealed() {
        let mut log = ConversationLog::new(None);
        let key = log.push_assistant("hi", Some(2), false, true);
        log.mark_revealed(key);
        assert!(!log.entries()[0].reveal);
    }
}
