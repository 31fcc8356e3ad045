extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::session::Session;
use crate::strategy::insurance_offered;

use super::{Event, Notice, Round, RoundState};

impl Round {
    /// Takes the opening cards, counts them, and offers insurance if the
    /// dealer shows an ace.
    pub(super) fn deal(
        &mut self,
        session: &mut Session,
        player: &[Card],
        dealer_up: Card,
        events: &mut Vec<Event>,
    ) -> Result<(), RoundError> {
        if player.is_empty() {
            return Err(RoundError::EmptyHand);
        }

        session.count_mut().record(dealer_up);
        self.dealer_hand.add_card(dealer_up);

        for &card in player {
            session.count_mut().record(card);
        }
        self.hands = alloc::vec![Hand::new(player)];

        if dealer_up.is_ace() {
            if insurance_offered(dealer_up, session.options()) {
                self.transition(RoundState::InsuranceOffer);
                return Ok(());
            }
            events.push(Notice::InsuranceUnavailable.into());
        }

        self.check_pair(session, events)
    }
}
