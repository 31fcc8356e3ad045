//! The dealer's draw procedure and round settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::{DealerHand, HandStatus};
use crate::options::TableOptions;
use crate::result::{HandSummary, Settlement};
use crate::session::Session;

use super::{Event, Notice, Record, Round, RoundState};

/// Total at which the dealer stops drawing.
pub const DEALER_STANDS_AT: u8 = 17;

/// Returns whether the dealer must take another card.
///
/// Softness plays no part: the dealer draws below 17 and stops at 17 or more.
#[must_use]
pub fn must_draw(hand: &DealerHand) -> bool {
    hand.value() < DEALER_STANDS_AT
}

/// Returns whether the finished hand is a soft 17 the table lets the dealer
/// stand on.
///
/// Checked only after drawing has stopped, so it never changes the draw.
#[must_use]
pub fn stands_on_soft_17(hand: &DealerHand, options: &TableOptions) -> bool {
    options.stand_on_soft_17 && hand.value() == DEALER_STANDS_AT && hand.is_soft()
}

impl Round {
    /// Counts cards seen at other seats. They never join a hand.
    pub(super) fn receive_other_cards(
        &mut self,
        session: &mut Session,
        tokens: &[String],
        events: &mut Vec<Event>,
    ) {
        for token in tokens {
            Self::read_card(session, token, events);
        }
        self.transition(RoundState::DealerExposedCards);
    }

    /// Counts the dealer cards already exposed and adds them to the dealer's
    /// hand, then starts the dealer's draw.
    pub(super) fn receive_dealer_cards(
        &mut self,
        session: &mut Session,
        tokens: &[String],
        events: &mut Vec<Event>,
    ) {
        for token in tokens {
            if let Some(card) = Self::read_card(session, token, events) {
                self.dealer_hand.add_card(card);
            }
        }
        self.play_dealer(session, events);
    }

    /// Adds one dealer draw. An invalid token asks for the card again.
    pub(super) fn receive_dealer_draw(
        &mut self,
        session: &mut Session,
        token: &str,
        events: &mut Vec<Event>,
    ) {
        if let Some(card) = Self::read_card(session, token, events) {
            self.dealer_hand.add_card(card);
        }
        self.play_dealer(session, events);
    }

    fn play_dealer(&mut self, session: &Session, events: &mut Vec<Event>) {
        if must_draw(&self.dealer_hand) {
            self.transition(RoundState::DealerDraw);
        } else {
            self.settle(session, events);
        }
    }

    fn settle(&mut self, session: &Session, events: &mut Vec<Event>) {
        if stands_on_soft_17(&self.dealer_hand, session.options()) {
            events.push(Notice::DealerStandsOnSoft17.into());
        }

        let hands = self
            .hands
            .iter()
            .enumerate()
            .map(|(hand_index, hand)| HandSummary {
                hand_index,
                cards: hand.cards().to_vec(),
                value: hand.value(),
                bust: hand.is_bust(),
                doubled: hand.status() == HandStatus::Doubled,
            })
            .collect();

        let settlement = Settlement {
            hands,
            dealer_cards: self.dealer_hand.cards().to_vec(),
            dealer_value: self.dealer_hand.value(),
            dealer_bust: self.dealer_hand.is_bust(),
            insurance_taken: self.insurance_taken,
            running_count: session.count().running_count(),
            true_count: session.count().true_count(),
            cards_played: session.count().cards_played(),
        };

        log::info!(
            "round settled: dealer {}, running {:.1}, true {:.2}",
            settlement.dealer_value,
            settlement.running_count,
            settlement.true_count
        );

        events.push(Record::Settlement(settlement.clone()).into());
        self.settlement = Some(settlement);
        self.transition(RoundState::Settled);
    }
}
