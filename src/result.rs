//! Round settlement types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Final state of one player hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSummary {
    /// The hand index (1 for the second hand of a split).
    pub hand_index: usize,
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// The hand's value.
    pub value: u8,
    /// Whether the hand went over 21.
    pub bust: bool,
    /// Whether the hand was doubled.
    pub doubled: bool,
}

/// Snapshot emitted when a round ends.
///
/// Values only; wins, losses and payouts are not computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    /// Player hands (two after a split).
    pub hands: Vec<HandSummary>,
    /// Dealer cards, up-card first.
    pub dealer_cards: Vec<Card>,
    /// The dealer's final value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Insurance decision, if insurance was offered.
    pub insurance_taken: Option<bool>,
    /// Running count after the round.
    pub running_count: f64,
    /// True count after the round.
    pub true_count: f64,
    /// Cards seen since the last reset.
    pub cards_played: u32,
}
