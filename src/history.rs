//! Append-only log of decision points.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::strategy::Action;

/// Snapshot taken each time the advisor makes a recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Cards in the player's hand at the decision.
    pub player_hand: Vec<Card>,
    /// The dealer's up-card.
    pub dealer_up_card: Card,
    /// The recommended action.
    pub recommended_action: Action,
    /// Running count at the decision.
    pub running_count: f64,
    /// True count at the decision.
    pub true_count: f64,
}

/// Decision history for a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Returns all entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterates over the entries, oldest first.
    pub fn iter(&self) -> core::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no decision has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = core::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
