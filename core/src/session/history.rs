use crate::slots::Slots;
use serde::Serialize;
use std::collections::VecDeque;

pub const DEFAULT_MAX_HISTORY: usize = 5;

/// One past turn: what the user said and the merged slots after that turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    #[serde(rename = "user")]
    pub utterance: String,
    pub slots: Slots,
}

impl HistoryEntry {
    pub fn new(utterance: impl Into<String>, slots: Slots) -> Self {
        Self {
            utterance: utterance.into(),
            slots,
        }
    }
}

/// FIFO-bounded turn history; the oldest entry is evicted first.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        self.truncate();
    }

    /// Drops the oldest entries until at most `capacity` remain.
    pub fn truncate(&mut self) {
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Oldest-first view of the retained entries.
    pub fn recent(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::new(format!("turn {n}"), Slots::default())
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut history = History::default();
        for n in 0..12 {
            history.push(entry(n));
            assert!(history.len() <= DEFAULT_MAX_HISTORY);
        }
        assert_eq!(history.len(), DEFAULT_MAX_HISTORY);
    }

    #[test]
    fn evicts_oldest_first() {
        let mut history = History::default();
        for n in 0..7 {
            history.push(entry(n));
        }
        let utterances: Vec<_> = history
            .recent()
            .into_iter()
            .map(|e| e.utterance)
            .collect();
        assert_eq!(
            utterances,
            vec!["turn 2", "turn 3", "turn 4", "turn 5", "turn 6"]
        );
    }

    #[test]
    fn zero_capacity_keeps_latest_turn() {
        let mut history = History::with_capacity(0);
        history.push(entry(1));
        history.push(entry(2));
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.recent()[0].utterance, "turn 2");
    }

    #[test]
    fn serializes_as_user_and_slots() {
        let e = HistoryEntry::new(
            "remote only",
            Slots {
                remote: Some(true),
                ..Default::default()
            },
        );
        assert_eq!(
            serde_json::to_string(&e).unwrap(),
            r#"{"user":"remote only","slots":{"remote":true}}"#
        );
    }
}
