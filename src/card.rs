//! Card ranks as observed at the table.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// A card rank.
///
/// Suits never matter for counting or strategy, so a card is just its rank.
/// Parsing is case-insensitive over the tokens `2`..`10`, `J`, `Q`, `K`, `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Card {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Card {
    /// Every rank, in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the point value with an ace counted as 1.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 1,
        }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    /// Returns the normalized token for this rank.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|card| card.token().eq_ignore_ascii_case(token))
            .ok_or(CardError::InvalidCard)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_case_insensitively() {
        assert_eq!("a".parse::<Card>(), Ok(Card::Ace));
        assert_eq!("K".parse::<Card>(), Ok(Card::King));
        assert_eq!(" q ".parse::<Card>(), Ok(Card::Queen));
        assert_eq!("10".parse::<Card>(), Ok(Card::Ten));
    }

    #[test]
    fn rejects_tokens_outside_the_rank_set() {
        for token in ["1", "11", "T", "", "joker", "0"] {
            assert_eq!(token.parse::<Card>(), Err(CardError::InvalidCard));
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for card in Card::ALL {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }
}
