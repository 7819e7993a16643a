//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Tie: both bust, both blackjack, or equal totals. The stake is returned.
    Push,
    /// Dealer collects the stake.
    DealerWins,
    /// Player has blackjack against a non-blackjack dealer.
    Blackjack,
    /// Player beats the dealer or the dealer busts.
    PlayerWins,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this hand.
    pub bet: u64,
    /// The amount credited back to the player, stake included.
    pub payout: u64,
    /// The player's best total (0 when bust).
    pub player_total: u16,
}

/// Result for a single player after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's seat at the table.
    pub seat: usize,
    /// The player's name.
    pub name: String,
    /// Results for each hand (multiple if split).
    pub hands: Vec<HandResult>,
    /// Total payout for all hands.
    pub total_payout: u64,
    /// Net result (positive = profit, negative = loss).
    pub net: i64,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player.
    pub players: Vec<PlayerResult>,
    /// The dealer's final best total (0 when bust).
    pub dealer_total: u16,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Stakes collected by the dealer.
    pub dealer_take: u64,
}
