//! Moves, round endings, and table statistics.

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

use crate::result::RoundResult;

/// A player decision, decoded once from the raw move token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Take another card.
    Hit,
    /// Keep the hand as it is.
    Stand,
    /// Double the bet, take one card, and stand.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Show the table statistics.
    ShowStats,
    /// Unrecognized input; ask again.
    Retry,
}

impl Move {
    /// Decodes a move token (`h`, `s`, `d`, `p`, `m`).
    ///
    /// Anything else decodes to [`Move::Retry`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::Move;
    ///
    /// assert_eq!(Move::from_token("P"), Move::Split);
    /// assert_eq!(Move::from_token("x"), Move::Retry);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "h" | "H" => Self::Hit,
            "s" | "S" => Self::Stand,
            "d" | "D" => Self::Double,
            "p" | "P" => Self::Split,
            "m" | "M" => Self::ShowStats,
            _ => Self::Retry,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEnd {
    /// Every hand was settled.
    Settled(RoundResult),
    /// The shoe ran out; every stake was refunded.
    Aborted,
}

/// A player's standing at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    /// The player's name.
    pub name: String,
    /// The player's cash.
    pub cash: u64,
    /// Hands held in the current round.
    pub hands: usize,
}

/// Statistics for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStats {
    /// Games started (one per shoe).
    pub games: u32,
    /// Rounds settled across all games.
    pub rounds: u32,
    /// Every player, including those who went broke.
    pub players: Vec<PlayerSummary>,
}

impl TableStats {
    /// Returns the combined cash of every player.
    #[must_use]
    pub fn total_cash(&self) -> u64 {
        self.players.iter().map(|player| player.cash).sum()
    }

    /// Returns the combined number of hands in play.
    #[must_use]
    pub fn total_hands(&self) -> usize {
        self.players.iter().map(|player| player.hands).sum()
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for player in &self.players {
            writeln!(
                f,
                "{}: {} hand(s) [Cash: {}]",
                player.name, player.hands, player.cash
            )?;
        }
        write!(
            f,
            "You played {} game(s) and {} round(s).",
            self.games, self.rounds
        )
    }
}
