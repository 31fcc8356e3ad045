//! Session state shared across rounds.

use crate::card::Card;
use crate::count::CountTracker;
use crate::error::{CardError, ConfigurationError};
use crate::history::History;
use crate::options::TableOptions;

/// Everything that outlives a single round: the table rules, the count and
/// the decision history.
///
/// Rounds borrow the session mutably for each step, so independent sessions
/// can run side by side.
#[derive(Debug, Clone)]
pub struct Session {
    options: TableOptions,
    count: CountTracker,
    history: History,
}

impl Session {
    /// Starts a session.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NoDecks`] if the options have no decks.
    pub fn new(options: TableOptions) -> Result<Self, ConfigurationError> {
        options.validate()?;
        log::info!(
            "session started: {} decks, stand on soft 17: {}, insurance: {}",
            options.decks,
            options.stand_on_soft_17,
            options.insurance
        );
        Ok(Self {
            options,
            count: CountTracker::new(options.decks),
            history: History::new(),
        })
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the count for the shoe.
    #[must_use]
    pub const fn count(&self) -> &CountTracker {
        &self.count
    }

    pub(crate) const fn count_mut(&mut self) -> &mut CountTracker {
        &mut self.count
    }

    /// Counts a card token seen outside a round, such as a burn card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCard`] if the token is not a rank.
    pub fn update(&mut self, token: &str) -> Result<Card, CardError> {
        self.count.update(token)
    }

    /// Counts a card seen outside a round.
    pub fn record(&mut self, card: Card) {
        self.count.record(card);
    }

    /// Returns the decision history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    pub(crate) const fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Clears the count for a fresh shoe. History is kept.
    pub fn reset(&mut self) {
        self.count.reset();
    }
}
