//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for &card in cards {
        if card.is_ace() {
            aces = aces.saturating_add(1);
        }
        value = value.saturating_add(card.points());
    }

    let mut soft = false;
    for _ in 0..aces {
        if value.saturating_add(10) <= BLACKJACK {
            value += 10;
            soft = true;
        }
    }

    (value, soft)
}

/// Computes the best value of a set of cards.
///
/// Every ace starts at 1 and is raised to 11 while that keeps the total at
/// 21 or less. The total is not capped, so a busted hand reports its real
/// value. An empty slice is worth 0.
///
/// ```
/// use countjack::{Card, calculate_value};
///
/// assert_eq!(calculate_value(&[Card::Ace, Card::Ace, Card::Nine]), 21);
/// assert_eq!(calculate_value(&[Card::Ten, Card::Nine, Card::Five]), 24);
/// ```
#[must_use]
pub fn calculate_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the cards hold an ace counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand can still take actions.
    Active,
    /// Player has stood.
    Stand,
    /// Player doubled and received one card.
    Doubled,
    /// Hand is over 21.
    Bust,
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
    from_split: bool,
}

impl Hand {
    /// Creates a hand holding the dealt cards.
    #[must_use]
    pub fn new(cards: &[Card]) -> Self {
        let mut hand = Self {
            cards: Vec::with_capacity(cards.len() + 2),
            status: HandStatus::Active,
            from_split: false,
        };
        for &card in cards {
            hand.add_card(card);
        }
        hand
    }

    /// Creates a new hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card) -> Self {
        Self {
            cards: alloc::vec![card],
            status: HandStatus::Active,
            from_split: true,
        }
    }

    /// Adds a card to the hand, marking it bust when it passes 21.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        if self.value() > BLACKJACK {
            self.status = HandStatus::Bust;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status. A bust hand stays bust.
    pub fn set_status(&mut self, status: HandStatus) {
        if self.status != HandStatus::Bust {
            self.status = status;
        }
    }

    /// Returns whether this hand is from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        calculate_value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.status == HandStatus::Bust
    }

    /// Returns whether the hand is a pair of two identical ranks.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0] == self.cards[1]
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Splits a pair into two one-card hands.
    ///
    /// Returns `None` if the hand is not a pair.
    #[must_use]
    pub fn split(&self) -> Option<(Self, Self)> {
        if !self.is_pair() {
            return None;
        }
        Some((
            Self::from_split(self.cards[0]),
            Self::from_split(self.cards[1]),
        ))
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand, up-card first.
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        calculate_value(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
