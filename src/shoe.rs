//! A simulated shoe and an operator that plays from it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::driver::Operator;
use crate::round::{Input, Prompt};
use crate::strategy::Action;

/// A shuffled multi-deck shoe.
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe with the given seed.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create_shoe(decks, &mut rng);
        Self { cards, decks, rng }
    }

    /// Creates and shuffles a shoe with the specified number of decks.
    fn create_shoe(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for _suit in 0..4 {
                cards.extend(Card::ALL);
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Refills and reshuffles the shoe.
    pub fn reshuffle(&mut self) {
        self.cards = Self::create_shoe(self.decks, &mut self.rng);
    }

    /// Returns whether the played share of the shoe has reached `penetration`.
    ///
    /// A penetration of 0 disables reshuffling.
    #[must_use]
    pub fn needs_reshuffle(&self, penetration: f64) -> bool {
        if penetration == 0.0 {
            return false;
        }

        let total_cards = self.decks as usize * DECK_SIZE;
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (self.cards.len() as f64 / total_cards as f64);

        used_ratio >= penetration
    }

    /// Draws a card from the shoe.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

/// An operator that deals from a [`Shoe`] and follows the advisor.
///
/// It declines insurance, splits aces and eights, reports no other players
/// and exposes the dealer's hole card before the draw. It stops answering
/// when the shoe runs out.
pub struct Autopilot<'a> {
    shoe: &'a mut Shoe,
    /// Rank of the opening pair, if the last deal was one.
    pair: Option<Card>,
}

impl<'a> Autopilot<'a> {
    /// Creates an operator dealing from `shoe`.
    pub const fn new(shoe: &'a mut Shoe) -> Self {
        Self { shoe, pair: None }
    }

    fn draw_token(&mut self) -> Option<String> {
        self.shoe.draw().map(|card| String::from(card.token()))
    }

    /// Picks the play for an opening pair.
    #[must_use]
    pub const fn pair_play(card: Card, recommended: Action) -> Action {
        match card {
            Card::Ace | Card::Eight => Action::Split,
            _ => recommended,
        }
    }
}

impl Operator for Autopilot<'_> {
    fn respond(&mut self, prompt: &Prompt) -> Option<Input> {
        Some(match *prompt {
            Prompt::PlayerHand => {
                let first = self.shoe.draw()?;
                let dealer_up = self.shoe.draw()?;
                let second = self.shoe.draw()?;
                self.pair = (first == second).then_some(first);
                Input::Deal {
                    player: alloc::vec![first, second],
                    dealer_up,
                }
            }
            Prompt::Insurance => Input::Insurance(false),
            Prompt::PairChoice { recommended } => {
                let action = self
                    .pair
                    .map_or(recommended, |card| Self::pair_play(card, recommended));
                Input::action(action.name())
            }
            Prompt::Action { recommended, .. } => Input::action(recommended.name()),
            Prompt::Card(_) => Input::Card(self.draw_token()?),
            Prompt::OtherPlayersCards => Input::Cards(Vec::new()),
            Prompt::DealerCards => Input::Cards(alloc::vec![self.draw_token()?]),
        })
    }
}
