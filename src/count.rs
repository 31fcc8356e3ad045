//! Running and true count tracking.

use crate::card::{Card, DECK_SIZE};
use crate::error::CardError;

/// Returns the count weight of a card.
#[must_use]
pub const fn weight(card: Card) -> f64 {
    match card {
        Card::Two | Card::Seven => 0.5,
        Card::Three | Card::Four | Card::Six => 1.0,
        Card::Five => 1.5,
        Card::Eight => 0.0,
        Card::Nine => -0.5,
        Card::Ten | Card::Jack | Card::Queen | Card::King | Card::Ace => -1.0,
    }
}

/// Tracks the running count and the number of cards seen since the last reset.
///
/// The tracker lives for the whole session and survives across rounds.
#[derive(Debug, Clone, PartialEq)]
pub struct CountTracker {
    running_count: f64,
    cards_played: u32,
    decks: u8,
}

impl CountTracker {
    /// Creates a fresh tracker for a shoe of `decks` decks.
    #[must_use]
    pub const fn new(decks: u8) -> Self {
        Self {
            running_count: 0.0,
            cards_played: 0,
            decks,
        }
    }

    /// Parses a card token and records it.
    ///
    /// Returns the parsed card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCard`] if the token is not a rank. The
    /// count is left untouched in that case.
    pub fn update(&mut self, token: &str) -> Result<Card, CardError> {
        let card = token.parse::<Card>().inspect_err(|_| {
            log::warn!("ignoring invalid card {token:?}");
        })?;
        self.record(card);
        Ok(card)
    }

    /// Records a card that has been seen.
    pub fn record(&mut self, card: Card) {
        self.running_count += weight(card);
        self.cards_played = self.cards_played.saturating_add(1);
        log::debug!(
            "counted {card}: running {:.1} after {} cards",
            self.running_count,
            self.cards_played
        );
    }

    /// Clears the running count and the cards seen. The deck count is kept.
    pub fn reset(&mut self) {
        self.running_count = 0.0;
        self.cards_played = 0;
        log::info!("count reset");
    }

    /// Returns the running count.
    #[must_use]
    pub const fn running_count(&self) -> f64 {
        self.running_count
    }

    /// Returns the number of cards seen since the last reset.
    #[must_use]
    pub const fn cards_played(&self) -> u32 {
        self.cards_played
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Estimates the decks left in the shoe, never less than one.
    #[must_use]
    pub fn remaining_decks(&self) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "deck size is a small constant"
        )]
        let seen = f64::from(self.cards_played) / DECK_SIZE as f64;
        (f64::from(self.decks) - seen).max(1.0)
    }

    /// Returns the running count normalized by the remaining decks.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        self.running_count / self.remaining_decks()
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_cmp, reason = "expected counts are exactly representable")]

    use super::*;

    fn record_many(tracker: &mut CountTracker, card: Card, times: usize) {
        for _ in 0..times {
            tracker.record(card);
        }
    }

    #[test]
    fn one_deck_is_balanced() {
        let mut tracker = CountTracker::new(1);
        for _ in 0..4 {
            for card in Card::ALL {
                tracker.record(card);
            }
        }
        assert_eq!(tracker.running_count(), 0.0);
        assert_eq!(tracker.cards_played(), 52);
    }

    #[test]
    fn true_count_divides_by_remaining_decks() {
        let mut tracker = CountTracker::new(6);
        record_many(&mut tracker, Card::Five, 4);
        record_many(&mut tracker, Card::Eight, 48);
        assert_eq!(tracker.running_count(), 6.0);
        assert_eq!(tracker.remaining_decks(), 5.0);
        assert_eq!(tracker.true_count(), 1.2);
    }

    #[test]
    fn remaining_decks_floor_at_one() {
        let mut tracker = CountTracker::new(2);
        record_many(&mut tracker, Card::Five, 2);
        record_many(&mut tracker, Card::Eight, 98);
        assert_eq!(tracker.remaining_decks(), 1.0);
        assert_eq!(tracker.true_count(), 3.0);
    }

    #[test]
    fn invalid_token_leaves_count_untouched() {
        let mut tracker = CountTracker::new(6);
        tracker.update("5").unwrap();
        assert_eq!(tracker.update("X"), Err(CardError::InvalidCard));
        assert_eq!(tracker.running_count(), 1.5);
        assert_eq!(tracker.cards_played(), 1);
    }

    #[test]
    fn update_accepts_lowercase_faces() {
        let mut tracker = CountTracker::new(6);
        assert_eq!(tracker.update("k"), Ok(Card::King));
        assert_eq!(tracker.running_count(), -1.0);
    }

    #[test]
    fn reset_keeps_decks() {
        let mut tracker = CountTracker::new(8);
        record_many(&mut tracker, Card::Nine, 9);
        assert_eq!(tracker.running_count(), -4.5);
        tracker.reset();
        assert_eq!(tracker.running_count(), 0.0);
        assert_eq!(tracker.cards_played(), 0);
        assert_eq!(tracker.decks(), 8);
        assert_eq!(tracker.true_count(), 0.0);
    }
}
