//! Table configuration options.

use crate::error::ConfigurationError;

/// Configuration for an advisor session.
///
/// Set once when the session starts. Use the builder pattern to customize:
///
/// ```
/// use countjack::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(8)
///     .with_stand_on_soft_17(true)
///     .with_insurance(false);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Whether insurance is offered.
    pub insurance: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            stand_on_soft_17: false,
            insurance: true,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use countjack::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use countjack::TableOptions;
    ///
    /// let options = TableOptions::default().with_stand_on_soft_17(true);
    /// assert!(options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether insurance is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use countjack::TableOptions;
    ///
    /// let options = TableOptions::default().with_insurance(false);
    /// assert!(!options.insurance);
    /// ```
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }

    /// Checks that the options describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NoDecks`] if the shoe has no decks.
    pub const fn validate(&self) -> Result<(), ConfigurationError> {
        if self.decks == 0 {
            return Err(ConfigurationError::NoDecks);
        }
        Ok(())
    }
}
