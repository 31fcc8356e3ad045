extern crate alloc;

use alloc::vec::Vec;

use crate::error::RoundError;
use crate::hand::HandStatus;
use crate::session::Session;
use crate::strategy::{Action, recommend};

use super::{CardRequest, Event, Notice, Round, RoundState};

impl Round {
    /// Records the operator's insurance answer. The answer is advisory and
    /// does not touch the count.
    pub(super) fn decide_insurance(
        &mut self,
        session: &mut Session,
        taken: bool,
        events: &mut Vec<Event>,
    ) -> Result<(), RoundError> {
        self.insurance_taken = Some(taken);
        events.push(Notice::Insurance { taken }.into());
        self.check_pair(session, events)
    }

    /// Offers the pair choice when the opening hand is a pair, otherwise
    /// starts the action loop on the only hand.
    pub(super) fn check_pair(
        &mut self,
        session: &mut Session,
        events: &mut Vec<Event>,
    ) -> Result<(), RoundError> {
        let up_card = self.up_card()?;
        let Some(hand) = self.hands.first() else {
            return Err(RoundError::EmptyHand);
        };

        if !hand.is_pair() {
            return self.enter_decision(session, 0, events);
        }

        events.push(Notice::Pair.into());
        let recommended = recommend(hand.value(), up_card, session.count().true_count());
        self.transition(RoundState::PairCheck { recommended });
        Ok(())
    }

    /// Plays the operator's choice for a pair.
    pub(super) fn play_pair(
        &mut self,
        session: &mut Session,
        token: &str,
        recommended: Action,
        events: &mut Vec<Event>,
    ) -> Result<(), RoundError> {
        let action = Self::read_action(
            token,
            &[Action::Split, Action::Double, Action::Hit, Action::Stand],
            recommended,
            events,
        );

        match action {
            Action::Split => {
                let (first, second) = self
                    .hands
                    .first()
                    .and_then(crate::hand::Hand::split)
                    .ok_or(RoundError::UnexpectedInput)?;
                self.hands = alloc::vec![first, second];
                events.push(Notice::Split.into());
                self.transition(RoundState::PlayerCard(CardRequest::Split { hand_index: 0 }));
            }
            Action::Double => {
                self.transition(RoundState::PlayerCard(CardRequest::Double { hand_index: 0 }));
            }
            Action::Hit => {
                self.transition(RoundState::PlayerCard(CardRequest::Hit { hand_index: 0 }));
            }
            Action::Stand => {
                if let Some(hand) = self.hands.first_mut() {
                    hand.set_status(HandStatus::Stand);
                }
                self.next_hand(session, 0, events)?;
            }
        }

        Ok(())
    }
}
