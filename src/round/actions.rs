extern crate alloc;

use alloc::vec::Vec;

use crate::error::RoundError;
use crate::hand::HandStatus;
use crate::session::Session;
use crate::strategy::{Action, recommend};

use super::{CardRequest, Event, Notice, Record, Round, RoundState};

impl Round {
    /// Plays the operator's action on a hand. Split is not available here.
    pub(super) fn act(
        &mut self,
        session: &mut Session,
        hand_index: usize,
        token: &str,
        recommended: Action,
        events: &mut Vec<Event>,
    ) -> Result<(), RoundError> {
        let action = Self::read_action(
            token,
            &[Action::Hit, Action::Stand, Action::Double],
            recommended,
            events,
        );

        match action {
            Action::Hit => {
                self.transition(RoundState::PlayerCard(CardRequest::Hit { hand_index }));
            }
            Action::Double => {
                self.transition(RoundState::PlayerCard(CardRequest::Double { hand_index }));
            }
            Action::Stand | Action::Split => {
                self.hands
                    .get_mut(hand_index)
                    .ok_or(RoundError::UnexpectedInput)?
                    .set_status(HandStatus::Stand);
                self.next_hand(session, hand_index, events)?;
            }
        }

        Ok(())
    }

    /// Adds a requested card to a player hand.
    ///
    /// An invalid token leaves the round waiting for the same card.
    pub(super) fn receive_player_card(
        &mut self,
        session: &mut Session,
        request: CardRequest,
        token: &str,
        events: &mut Vec<Event>,
    ) -> Result<(), RoundError> {
        let (CardRequest::Split { hand_index }
        | CardRequest::Hit { hand_index }
        | CardRequest::Double { hand_index }) = request
        else {
            return Err(RoundError::UnexpectedInput);
        };
        let up_card = self.up_card()?;
        if hand_index >= self.hands.len() {
            return Err(RoundError::UnexpectedInput);
        }

        let Some(card) = Self::read_card(session, token, events) else {
            return Ok(());
        };

        let hand = &mut self.hands[hand_index];
        hand.add_card(card);
        let value = hand.value();
        if hand.is_bust() {
            events.push(Notice::Bust { hand_index, value }.into());
        }

        match request {
            CardRequest::Split { .. } => {
                let recommended = recommend(value, up_card, session.count().true_count());
                events.push(
                    Record::SplitHand {
                        hand_index,
                        hand_value: value,
                        recommended,
                    }
                    .into(),
                );
                if hand_index + 1 < self.hands.len() {
                    self.transition(RoundState::PlayerCard(CardRequest::Split {
                        hand_index: hand_index + 1,
                    }));
                    Ok(())
                } else {
                    self.enter_decision(session, 0, events)
                }
            }
            CardRequest::Hit { .. } => {
                if hand.is_bust() {
                    self.next_hand(session, hand_index, events)
                } else {
                    self.enter_decision(session, hand_index, events)
                }
            }
            CardRequest::Double { .. } => {
                hand.set_status(HandStatus::Doubled);
                self.next_hand(session, hand_index, events)
            }
            CardRequest::Dealer => Err(RoundError::UnexpectedInput),
        }
    }
}
