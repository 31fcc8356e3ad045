//! Round inputs and the effects a step produces.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::result::Settlement;
use crate::strategy::Action;

/// An answer to a [`Prompt`](super::Prompt).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// The player's cards and the dealer's up-card.
    Deal {
        /// The player's initial cards.
        player: Vec<Card>,
        /// The dealer's up-card.
        dealer_up: Card,
    },
    /// The insurance decision.
    Insurance(bool),
    /// An action token typed by the operator.
    Action(String),
    /// A single card token.
    Card(String),
    /// A list of card tokens.
    Cards(Vec<String>),
}

impl Input {
    /// Builds an [`Input::Action`].
    #[must_use]
    pub fn action(token: impl Into<String>) -> Self {
        Self::Action(token.into())
    }

    /// Builds an [`Input::Card`].
    #[must_use]
    pub fn card(token: impl Into<String>) -> Self {
        Self::Card(token.into())
    }

    /// Builds an [`Input::Cards`].
    #[must_use]
    pub fn cards<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Cards(tokens.into_iter().map(Into::into).collect())
    }
}

/// Something to show the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// A recommendation for the hand in play.
    Decision {
        /// Index of the hand.
        hand_index: usize,
        /// Cards in the hand.
        cards: Vec<Card>,
        /// The hand's value.
        hand_value: u8,
        /// The recommended action.
        recommended: Action,
        /// Running count at the decision.
        running_count: f64,
        /// True count at the decision.
        true_count: f64,
    },
    /// A split hand after its automatic card.
    SplitHand {
        /// Index of the hand.
        hand_index: usize,
        /// The hand's value.
        hand_value: u8,
        /// The recommended action.
        recommended: Action,
    },
    /// The round is over.
    Settlement(Settlement),
}

/// A recoverable condition or an informational message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A card token was rejected and not counted.
    InvalidCard {
        /// The rejected token.
        token: String,
    },
    /// An action token was not understood; the recommendation was used.
    UnrecognizedAction {
        /// The rejected token.
        token: String,
        /// The action played instead.
        substituted: Action,
    },
    /// The dealer shows an ace but the table offers no insurance.
    InsuranceUnavailable,
    /// The operator answered the insurance offer.
    Insurance {
        /// Whether insurance was taken.
        taken: bool,
    },
    /// The player holds a pair.
    Pair,
    /// The pair was split into two hands.
    Split,
    /// A hand went over 21.
    Bust {
        /// Index of the hand.
        hand_index: usize,
        /// The busted value.
        value: u8,
    },
    /// The dealer stood on a soft 17.
    DealerStandsOnSoft17,
}

/// An effect produced by a round step.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A display record.
    Record(Record),
    /// A notice.
    Notice(Notice),
}

impl From<Record> for Event {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Notice> for Event {
    fn from(notice: Notice) -> Self {
        Self::Notice(notice)
    }
}
