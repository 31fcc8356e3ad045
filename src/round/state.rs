//! Round state types.

use crate::strategy::Action;

/// Why a card is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRequest {
    /// The automatic second card of a split hand.
    Split {
        /// Index of the split hand.
        hand_index: usize,
    },
    /// A card for a hit.
    Hit {
        /// Index of the hand being hit.
        hand_index: usize,
    },
    /// The single card of a double.
    Double {
        /// Index of the doubled hand.
        hand_index: usize,
    },
    /// A card the dealer draws.
    Dealer,
}

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player's cards and the dealer's up-card.
    AwaitingPlayerHand,
    /// The dealer shows an ace and insurance is offered.
    InsuranceOffer,
    /// The player holds a pair and must choose how to play it.
    PairCheck {
        /// Recommendation used if the choice is not understood.
        recommended: Action,
    },
    /// Waiting for the operator's action on a hand.
    PlayerAction {
        /// Index of the hand being played.
        hand_index: usize,
        /// The advisor's recommendation.
        recommended: Action,
    },
    /// Waiting for a card for one of the player's hands.
    PlayerCard(CardRequest),
    /// Waiting for cards dealt to other seated players.
    OtherPlayersCards,
    /// Waiting for dealer cards exposed before the draw.
    DealerExposedCards,
    /// The dealer draws until reaching 17.
    DealerDraw,
    /// The round has been settled.
    Settled,
}

/// The input a round is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// The player's cards and the dealer's up-card.
    PlayerHand,
    /// Whether to take insurance.
    Insurance,
    /// How to play a pair: split, double, hit or stand.
    PairChoice {
        /// The advisor's recommendation for the pair's total.
        recommended: Action,
    },
    /// Hit, stand or double on a hand.
    Action {
        /// Index of the hand being played.
        hand_index: usize,
        /// The advisor's recommendation.
        recommended: Action,
    },
    /// A single card.
    Card(CardRequest),
    /// Cards seen at other seats, possibly none.
    OtherPlayersCards,
    /// Dealer cards already exposed, possibly none.
    DealerCards,
}

impl RoundState {
    /// Returns the prompt for this state, or `None` once settled.
    #[must_use]
    pub const fn prompt(self) -> Option<Prompt> {
        Some(match self {
            Self::AwaitingPlayerHand => Prompt::PlayerHand,
            Self::InsuranceOffer => Prompt::Insurance,
            Self::PairCheck { recommended } => Prompt::PairChoice { recommended },
            Self::PlayerAction {
                hand_index,
                recommended,
            } => Prompt::Action {
                hand_index,
                recommended,
            },
            Self::PlayerCard(request) => Prompt::Card(request),
            Self::OtherPlayersCards => Prompt::OtherPlayersCards,
            Self::DealerExposedCards => Prompt::DealerCards,
            Self::DealerDraw => Prompt::Card(CardRequest::Dealer),
            Self::Settled => return None,
        })
    }
}
