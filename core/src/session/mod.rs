pub mod context;
pub mod history;

pub use context::{ConversationContext, field_name};
pub use history::{DEFAULT_MAX_HISTORY, History, HistoryEntry};

use crate::slots::Slots;

/// All mutable state of one user session. Owned by a single orchestrator and
/// mutated only between turns.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub context: ConversationContext,
    pub history: History,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl Session {
    pub fn new(max_history: usize) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            context: ConversationContext::new(),
            history: History::with_capacity(max_history),
        }
    }

    /// Merges a turn's extraction and records the resulting snapshot.
    pub fn record_turn(&mut self, utterance: &str, extracted: Slots) -> Slots {
        self.context.update(extracted);
        let snapshot = self.context.slots().clone();
        self.history
            .push(HistoryEntry::new(utterance, snapshot.clone()));
        snapshot
    }
}
