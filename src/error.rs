//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when building a card from symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank symbol is not one of `A`, `2`..`9`, `T`, `J`, `Q`, `K`.
    #[error("invalid rank symbol {0:?}")]
    InvalidRank(char),
    /// Suit symbol is not one of `D`, `C`, `H`, `S`.
    #[error("invalid suit symbol {0:?}")]
    InvalidSuit(char),
}

/// Errors that can occur when building or dealing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// A shoe needs at least one deck.
    #[error("a shoe needs at least one deck")]
    NoDecks,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe ({requested} requested, {remaining} remaining)")]
    Exhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the shoe.
        remaining: usize,
    },
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Hand not owned by the player.
    #[error("hand not found")]
    HandNotFound,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during fund-affecting player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Hand not owned by the player.
    #[error("hand not found")]
    HandNotFound,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Maximum splits reached.
    #[error("maximum splits reached")]
    MaxSplitsReached,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// No outcome matched the pair of hands.
    #[error("no outcome for player total {player} against dealer total {dealer}")]
    Unresolved {
        /// The player's best total.
        player: u16,
        /// The dealer's best total.
        dealer: u16,
    },
}

/// Errors that end a session at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The table was opened without players.
    #[error("no players at the table")]
    NoPlayers,
    /// The table minimum bet is above the table maximum.
    #[error("minimum bet {min} is above maximum bet {max}")]
    InvalidBetLimits {
        /// The table minimum.
        min: u64,
        /// The table maximum.
        max: u64,
    },
    /// The shoe could not be built.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
    /// The shoe ran out before any bet was ever resolved.
    #[error("the shoe ran out of cards before any bet was resolved")]
    ShoeExhausted,
    /// Settlement hit an unresolved pair of hands.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}

/// The player asked to leave the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("player quit")]
pub struct Quit;

/// Errors that stop a round without settling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A player left the table; stakes were refunded.
    #[error(transparent)]
    Quit(#[from] Quit),
    /// Settlement hit an unresolved pair of hands.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
