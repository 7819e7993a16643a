//! A single-table blackjack simulator with optional `no_std` support.
//!
//! The core is the hand valuation and settlement engine: [`Hand`] computes
//! every reachable total of a hand holding soft aces and answers the
//! hit/split/double questions, [`Player`] keeps the betting account that
//! stakes those hands, and [`settle`] resolves a finished round into pushes,
//! losses, wins, and blackjacks. [`Table`] sequences whole rounds against a
//! [`Shoe`] and talks to the people playing through a [`Console`].
//!
//! # Example
//!
//! ```
//! use bjsim::{Card, Hand, HandOutcome, Rank, Suit, settle};
//!
//! let mut player = Hand::with_bet(10);
//! assert!(player.hit(Card::new(Rank::Ace, Suit::Spades)));
//! assert!(player.hit(Card::new(Rank::King, Suit::Hearts)));
//! assert_eq!(player.totals(false), [11, 21]);
//!
//! let mut dealer = Hand::new();
//! assert!(dealer.hit(Card::new(Rank::Ten, Suit::Clubs)));
//! assert!(dealer.hit(Card::new(Rank::Nine, Suit::Clubs)));
//!
//! assert_eq!(settle::classify(&player, &dealer), Ok(HandOutcome::Blackjack));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod settle;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{
    ActionError, BetError, CardError, Quit, RoundError, ShoeError, ShowdownError, TableError,
};
pub use game::{
    Console, Move, PlayerSummary, RoundEnd, Table, TableEvent, TableStats, dealer_play,
};
pub use hand::{BLACKJACK, Hand, HandStatus};
pub use options::{RoundingMode, SplitMatch, TableOptions, TableRules};
pub use player::Player;
pub use result::{HandOutcome, HandResult, PlayerResult, RoundResult};
pub use shoe::Shoe;
