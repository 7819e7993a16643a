//! The prompt and display collaborator.

use crate::card::Card;
use crate::error::Quit;
use crate::hand::Hand;
use crate::player::Player;
use crate::result::HandResult;
use crate::shoe::Shoe;

use super::state::{Move, TableStats};

/// Something for the console to show.
#[derive(Debug, Clone, Copy)]
pub enum TableEvent<'a> {
    /// A round is about to start.
    RoundStarted {
        /// The game number, starting at 1.
        game: u32,
        /// The round number across the session, starting at 1.
        round: u32,
    },
    /// The shoe before the round (debug view).
    Shoe(&'a Shoe),
    /// Every hand right after the deal, dealer included (debug view).
    Dealt {
        /// The players.
        players: &'a [Player],
        /// The dealer.
        dealer: &'a Player,
    },
    /// The dealer's up card.
    DealerShows {
        /// The dealer.
        dealer: &'a Player,
        /// The face-up card.
        card: Card,
    },
    /// A hand's current state.
    Hand {
        /// The hand's owner.
        player: &'a Player,
        /// The hand.
        hand: &'a Hand,
    },
    /// A hand reached blackjack and stands.
    Blackjack {
        /// The hand's owner.
        player: &'a Player,
    },
    /// The dealer plays out and bets are settled.
    Settling,
    /// A hand was settled.
    Outcome {
        /// The hand's owner, cash already credited.
        player: &'a Player,
        /// The settlement.
        result: &'a HandResult,
    },
    /// The last input was not usable; ask again.
    Retry,
    /// The shoe ran out and the round was abandoned.
    OutOfCards,
    /// Table statistics.
    Stats(&'a TableStats),
}

/// Reads decisions from, and shows the table to, the people playing.
///
/// Every prompt may return [`Quit`] to end the session.
pub trait Console {
    /// Asks a player for a wager between `min` and `max` by `step`.
    ///
    /// # Errors
    ///
    /// Returns [`Quit`] if the player leaves.
    fn bet(&mut self, player: &Player, min: u64, max: u64, step: u64) -> Result<u64, Quit>;

    /// Asks a player for the next move on a hand.
    ///
    /// # Errors
    ///
    /// Returns [`Quit`] if the player leaves.
    fn next_move(&mut self, player: &Player, hand: &Hand) -> Result<Move, Quit>;

    /// Asks whether to start another game with a fresh shoe.
    ///
    /// # Errors
    ///
    /// Returns [`Quit`] if the player leaves.
    fn continue_play(&mut self, game: u32) -> Result<bool, Quit>;

    /// Shows an event.
    fn event(&mut self, event: TableEvent<'_>);
}
