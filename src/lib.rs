//! A card-counting blackjack advisor with optional `no_std` support.
//!
//! The crate tracks the running and true count of a live shoe and recommends
//! hit, stand or double for each hand against the dealer's up-card. A
//! [`Round`] sequences one hand at the table: insurance offer, pair and split
//! handling, the action loop, and the dealer's draw. Count and history live
//! in a [`Session`] that every round borrows.
//!
//! # Example
//!
//! ```
//! use countjack::{Action, Card, Input, Round, Session, TableOptions};
//!
//! let mut session = Session::new(TableOptions::default()).unwrap();
//! let mut round = Round::new();
//! round
//!     .step(
//!         &mut session,
//!         Input::Deal {
//!             player: vec![Card::Ten, Card::Six],
//!             dealer_up: Card::Five,
//!         },
//!     )
//!     .unwrap();
//! assert_eq!(
//!     round.prompt(),
//!     Some(countjack::Prompt::Action {
//!         hand_index: 0,
//!         recommended: Action::Stand,
//!     })
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod count;
pub mod driver;
pub mod error;
pub mod hand;
pub mod history;
pub mod options;
pub mod result;
pub mod round;
pub mod session;
pub mod shoe;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE};
pub use count::CountTracker;
pub use driver::{LogSink, Operator, Sink, play_round};
pub use error::{ActionError, CardError, ConfigurationError, RoundError};
pub use hand::{DealerHand, Hand, HandStatus, calculate_value};
pub use history::{History, HistoryEntry};
pub use options::TableOptions;
pub use result::{HandSummary, Settlement};
pub use round::dealer;
pub use round::{CardRequest, Event, Input, Notice, Prompt, Record, Round, RoundState};
pub use session::Session;
pub use shoe::{Autopilot, Shoe};
pub use strategy::{Action, insurance_offered, recommend};
