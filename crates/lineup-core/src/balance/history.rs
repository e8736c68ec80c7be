//! Bounded log of past matches.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::Split;

/// Maximum number of past matches remembered.
pub const HISTORY_CAP: usize = 10;

/// One recorded match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub split: Split,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Past matches, oldest first, never longer than [`HISTORY_CAP`].
///
/// Entries are only ever appended or evicted (FIFO), never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a match, evicting the oldest entries beyond the cap.
    pub fn push(&mut self, split: Split, recorded_at: Option<DateTime<Utc>>) {
        self.entries.push_back(HistoryEntry { split, recorded_at });
        while self.entries.len() > HISTORY_CAP {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently recorded match.
    pub fn latest(&self) -> Option<&Split> {
        self.entries.back().map(|e| &e.split)
    }

    /// Entries oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Splits newest to oldest, as the scorer walks them.
    pub fn recent_first(&self) -> impl Iterator<Item = &Split> {
        self.entries.iter().rev().map(|e| &e.split)
    }
}

impl From<Vec<HistoryEntry>> for History {
    /// Keeps only the newest [`HISTORY_CAP`] entries.
    fn from(mut entries: Vec<HistoryEntry>) -> Self {
        if entries.len() > HISTORY_CAP {
            entries.drain(..entries.len() - HISTORY_CAP);
        }
        Self {
            entries: entries.into(),
        }
    }
}

impl From<History> for Vec<HistoryEntry> {
    fn from(history: History) -> Self {
        history.entries.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Identity;
    use std::collections::BTreeSet;

    fn split(n: usize) -> Split {
        let a: BTreeSet<Identity> = [Identity::new(format!("p{n}"))].into_iter().collect();
        Split::new(a, BTreeSet::new())
    }

    #[test]
    fn test_push_keeps_order() {
        let mut history = History::new();
        history.push(split(1), None);
        history.push(split(2), None);

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest(), Some(&split(2)));
        let recent: Vec<_> = history.recent_first().cloned().collect();
        assert_eq!(recent, vec![split(2), split(1)]);
    }

    #[test]
    fn test_eviction_is_fifo() {
        let mut history = History::new();
        for n in 0..(HISTORY_CAP + 3) {
            history.push(split(n), None);
            assert!(history.len() <= HISTORY_CAP);
        }

        assert_eq!(history.len(), HISTORY_CAP);
        // Oldest three evicted
        assert_eq!(history.iter().next().map(|e| &e.split), Some(&split(3)));
        assert_eq!(history.latest(), Some(&split(HISTORY_CAP + 2)));
    }

    #[test]
    fn test_from_vec_truncates_to_newest() {
        let entries: Vec<_> = (0..15)
            .map(|n| HistoryEntry {
                split: split(n),
                recorded_at: None,
            })
            .collect();
        let history = History::from(entries);

        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history.iter().next().map(|e| &e.split), Some(&split(5)));
        assert_eq!(history.latest(), Some(&split(14)));
    }

    #[test]
    fn test_serde_shape() {
        let mut history = History::new();
        history.push(split(1), None);

        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "team_a": ["p1"], "team_b": [] }])
        );

        let parsed: History = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, history);
    }
}
