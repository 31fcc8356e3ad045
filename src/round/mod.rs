//! Round state machine.
//!
//! A [`Round`] walks one hand of blackjack from the deal to settlement. Each
//! call to [`Round::step`] consumes one operator [`Input`], mutates the
//! [`Session`] count, and returns the [`Event`]s to display. The machine
//! never blocks; [`Round::prompt`] tells the caller what to ask for next.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::history::HistoryEntry;
use crate::result::Settlement;
use crate::session::Session;
use crate::strategy::{Action, recommend};

mod actions;
pub mod dealer;
mod deal;
pub mod event;
mod insurance;
pub mod state;

pub use event::{Event, Input, Notice, Record};
pub use state::{CardRequest, Prompt, RoundState};

/// One round at the table.
#[derive(Debug, Clone)]
pub struct Round {
    state: RoundState,
    /// Player hands (two after a split).
    hands: Vec<Hand>,
    dealer_hand: DealerHand,
    insurance_taken: Option<bool>,
    settlement: Option<Settlement>,
}

impl Round {
    /// Creates a round waiting for the player's hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RoundState::AwaitingPlayerHand,
            hands: Vec::new(),
            dealer_hand: DealerHand::new(),
            insurance_taken: None,
            settlement: None,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns what the round is waiting for, or `None` once settled.
    #[must_use]
    pub const fn prompt(&self) -> Option<Prompt> {
        self.state.prompt()
    }

    /// Returns the player's hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the insurance decision, if insurance was offered.
    #[must_use]
    pub const fn insurance_taken(&self) -> Option<bool> {
        self.insurance_taken
    }

    /// Returns the settlement once the round is over.
    #[must_use]
    pub const fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }

    /// Returns whether the round has been settled.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self.state, RoundState::Settled)
    }

    /// Applies one operator input.
    ///
    /// Invalid card tokens and unrecognized actions are not errors: they are
    /// reported as [`Notice`]s and the round either re-prompts or falls back
    /// to the recommendation.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::RoundOver`] after settlement,
    /// [`RoundError::EmptyHand`] if the deal has no player cards, and
    /// [`RoundError::UnexpectedInput`] if the input does not answer the
    /// current prompt. The session is untouched in every error case.
    pub fn step(&mut self, session: &mut Session, input: Input) -> Result<Vec<Event>, RoundError> {
        let mut events = Vec::new();

        match (self.state, input) {
            (RoundState::Settled, _) => return Err(RoundError::RoundOver),
            (RoundState::AwaitingPlayerHand, Input::Deal { player, dealer_up }) => {
                self.deal(session, &player, dealer_up, &mut events)?;
            }
            (RoundState::InsuranceOffer, Input::Insurance(taken)) => {
                self.decide_insurance(session, taken, &mut events)?;
            }
            (RoundState::PairCheck { recommended }, Input::Action(token)) => {
                self.play_pair(session, &token, recommended, &mut events)?;
            }
            (
                RoundState::PlayerAction {
                    hand_index,
                    recommended,
                },
                Input::Action(token),
            ) => self.act(session, hand_index, &token, recommended, &mut events)?,
            (RoundState::PlayerCard(request), Input::Card(token)) => {
                self.receive_player_card(session, request, &token, &mut events)?;
            }
            (RoundState::OtherPlayersCards, Input::Cards(tokens)) => {
                self.receive_other_cards(session, &tokens, &mut events);
            }
            (RoundState::DealerExposedCards, Input::Cards(tokens)) => {
                self.receive_dealer_cards(session, &tokens, &mut events);
            }
            (RoundState::DealerDraw, Input::Card(token)) => {
                self.receive_dealer_draw(session, &token, &mut events);
            }
            (state, _) => {
                log::debug!("input does not answer {state:?}");
                return Err(RoundError::UnexpectedInput);
            }
        }

        Ok(events)
    }

    fn transition(&mut self, state: RoundState) {
        log::debug!("round {:?} -> {state:?}", self.state);
        self.state = state;
    }

    fn up_card(&self) -> Result<Card, RoundError> {
        self.dealer_hand
            .up_card()
            .ok_or(RoundError::UnexpectedInput)
    }

    /// Counts a card token, reporting it when it is not a card.
    fn read_card(session: &mut Session, token: &str, events: &mut Vec<Event>) -> Option<Card> {
        session.count_mut().update(token).ok().or_else(|| {
            events.push(
                Notice::InvalidCard {
                    token: String::from(token),
                }
                .into(),
            );
            None
        })
    }

    /// Parses an operator action, falling back to the recommendation.
    fn read_action(
        token: &str,
        allowed: &[Action],
        recommended: Action,
        events: &mut Vec<Event>,
    ) -> Action {
        match token.parse::<Action>() {
            Ok(action) if allowed.contains(&action) => action,
            _ => {
                log::warn!("unrecognized action {token:?}, playing {recommended}");
                events.push(
                    Notice::UnrecognizedAction {
                        token: String::from(token),
                        substituted: recommended,
                    }
                    .into(),
                );
                recommended
            }
        }
    }

    /// Recommends an action for a hand and logs the decision point.
    fn enter_decision(
        &mut self,
        session: &mut Session,
        hand_index: usize,
        events: &mut Vec<Event>,
    ) -> Result<(), RoundError> {
        let up_card = self.up_card()?;
        let hand = self
            .hands
            .get(hand_index)
            .ok_or(RoundError::UnexpectedInput)?;

        if hand.status() != HandStatus::Active {
            return self.next_hand(session, hand_index, events);
        }

        let hand_value = hand.value();
        let running_count = session.count().running_count();
        let true_count = session.count().true_count();
        let recommended = recommend(hand_value, up_card, true_count);

        session.history_mut().push(HistoryEntry {
            player_hand: hand.cards().to_vec(),
            dealer_up_card: up_card,
            recommended_action: recommended,
            running_count,
            true_count,
        });
        events.push(
            Record::Decision {
                hand_index,
                cards: hand.cards().to_vec(),
                hand_value,
                recommended,
                running_count,
                true_count,
            }
            .into(),
        );

        self.transition(RoundState::PlayerAction {
            hand_index,
            recommended,
        });
        Ok(())
    }

    /// Moves on after a hand finishes.
    fn next_hand(
        &mut self,
        session: &mut Session,
        hand_index: usize,
        events: &mut Vec<Event>,
    ) -> Result<(), RoundError> {
        let next = hand_index + 1;
        if next < self.hands.len() {
            self.enter_decision(session, next, events)
        } else {
            self.transition(RoundState::OtherPlayersCards);
            Ok(())
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
