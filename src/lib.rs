//! A terminal blackjack game against a scripted dealer.
//!
//! The game core is `no_std` compatible: [`Card`], [`Deck`], the hand
//! evaluator in [`hand`], and the [`Round`] state machine that deals,
//! runs the player's and the dealer's turns, and settles a wager. With the
//! `std` feature, [`Session`] wraps rounds in the interactive betting loop.
//!
//! # Example
//!
//! ```
//! use bjterm::{Card, Deck, Outcome, Round, Suit};
//!
//! let deck = Deck::from(vec![
//!     Card::new(Suit::Spades, 1),
//!     Card::new(Suit::Hearts, 13),
//!     Card::new(Suit::Clubs, 10),
//!     Card::new(Suit::Clubs, 6),
//!     Card::new(Suit::Diamonds, 5),
//! ]);
//! let mut round = Round::from_deck(deck);
//! round.stand().unwrap();
//! round.dealer_play().unwrap();
//!
//! let result = round.showdown(10.0).unwrap();
//! assert_eq!(result.outcome, Outcome::Push);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
#[cfg(feature = "std")]
pub mod session;
pub mod wager;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::SessionError;
pub use error::{ActionError, OptionsError, ShowdownError, WagerError};
pub use game::{DEALER_STANDS_ON, Round, RoundState};
pub use hand::{BLACKJACK, Hand};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
#[cfg(feature = "std")]
pub use session::Session;
