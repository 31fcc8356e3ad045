//! Count-aware playing decisions.

use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::calculate_value;
use crate::options::TableOptions;

/// A playing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current total.
    Stand,
    /// Take exactly one more card and finish the hand.
    Double,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    /// Returns the action's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::Double => "Double",
            Self::Split => "Split",
        }
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        [
            (Self::Hit, "h"),
            (Self::Stand, "s"),
            (Self::Double, "d"),
            (Self::Split, "p"),
        ]
        .into_iter()
        .find(|(action, short)| {
            token.eq_ignore_ascii_case(action.name()) || token.eq_ignore_ascii_case(short)
        })
        .map(|(action, _)| action)
        .ok_or(ActionError::Unrecognized)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recommends an action for a hand total against the dealer's up-card.
///
/// Pairs are not handled here; the split decision is left to the operator.
///
/// ```
/// use countjack::{Action, Card, recommend};
///
/// assert_eq!(recommend(16, Card::Ten, 2.0), Action::Stand);
/// assert_eq!(recommend(16, Card::Ten, 1.0), Action::Hit);
/// assert_eq!(recommend(11, Card::Six, 1.0), Action::Double);
/// ```
#[must_use]
pub fn recommend(player_value: u8, dealer_up_card: Card, true_count: f64) -> Action {
    let dealer = calculate_value(&[dealer_up_card]);
    let stand_or_hit = |stand: bool| if stand { Action::Stand } else { Action::Hit };
    let double_or_hit = |double: bool| if double { Action::Double } else { Action::Hit };

    match player_value {
        17.. => Action::Stand,
        15 | 16 => stand_or_hit((2..=6).contains(&dealer) || (dealer == 10 && true_count >= 2.0)),
        14 => stand_or_hit((2..=6).contains(&dealer)),
        12 | 13 => stand_or_hit((4..=6).contains(&dealer)),
        11 => double_or_hit(true_count >= 1.0),
        10 => double_or_hit(true_count >= 2.0),
        9 => double_or_hit((3..=6).contains(&dealer) && true_count >= 1.0),
        _ => Action::Hit,
    }
}

/// Returns whether insurance should be offered for this up-card.
///
/// Insurance is a plain yes/no for the operator; the count does not weigh in.
#[must_use]
pub const fn insurance_offered(dealer_up_card: Card, options: &TableOptions) -> bool {
    options.insurance && dealer_up_card.is_ace()
}

#[cfg(test)]
mod tests {
    use super::*;

    use Card::{Ace, Five, Four, Seven, Six, Ten, Three, Two};

    #[test]
    fn seventeen_and_up_always_stand() {
        for value in 17..=21 {
            assert_eq!(recommend(value, Ace, -5.0), Action::Stand);
        }
    }

    #[test]
    fn stiff_sixteen_deviates_on_count_against_ten() {
        assert_eq!(recommend(16, Ten, 2.0), Action::Stand);
        assert_eq!(recommend(16, Ten, 1.0), Action::Hit);
        assert_eq!(recommend(15, Card::King, 2.5), Action::Stand);
        assert_eq!(recommend(15, Seven, 5.0), Action::Hit);
        assert_eq!(recommend(16, Six, -3.0), Action::Stand);
    }

    #[test]
    fn twelve_through_fourteen_follow_dealer_bust_cards() {
        assert_eq!(recommend(14, Two, 0.0), Action::Stand);
        assert_eq!(recommend(14, Seven, 0.0), Action::Hit);
        assert_eq!(recommend(13, Three, 0.0), Action::Hit);
        assert_eq!(recommend(13, Four, 0.0), Action::Stand);
        assert_eq!(recommend(12, Six, 0.0), Action::Stand);
        assert_eq!(recommend(12, Ace, 0.0), Action::Hit);
    }

    #[test]
    fn doubles_depend_on_count() {
        assert_eq!(recommend(11, Six, 0.0), Action::Hit);
        assert_eq!(recommend(11, Six, 1.0), Action::Double);
        assert_eq!(recommend(10, Ace, 2.0), Action::Double);
        assert_eq!(recommend(10, Five, 1.9), Action::Hit);
        assert_eq!(recommend(9, Three, 1.0), Action::Double);
        assert_eq!(recommend(9, Two, 3.0), Action::Hit);
        assert_eq!(recommend(9, Six, 0.5), Action::Hit);
    }

    #[test]
    fn low_totals_hit() {
        for value in 0..=8 {
            assert_eq!(recommend(value, Six, 10.0), Action::Hit);
        }
    }

    #[test]
    fn ace_up_card_counts_as_eleven() {
        assert_eq!(recommend(16, Ace, 3.0), Action::Hit);
    }

    #[test]
    fn parses_actions() {
        assert_eq!("hit".parse::<Action>(), Ok(Action::Hit));
        assert_eq!("S".parse::<Action>(), Ok(Action::Stand));
        assert_eq!(" Double ".parse::<Action>(), Ok(Action::Double));
        assert_eq!("p".parse::<Action>(), Ok(Action::Split));
        assert_eq!("surrender".parse::<Action>(), Err(ActionError::Unrecognized));
    }

    #[test]
    fn insurance_needs_ace_and_table_rule() {
        let options = TableOptions::default();
        assert!(insurance_offered(Ace, &options));
        assert!(!insurance_offered(Ten, &options));
        assert!(!insurance_offered(Ace, &options.with_insurance(false)));
    }
}
