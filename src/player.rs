//! Player betting accounts.

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{ActionError, BetError};
use crate::hand::{Hand, HandStatus};
use crate::options::TableRules;

/// A player's cash, configured wager, and the hands staked this round.
///
/// Hands are addressed by index; index 0 is the main hand. Every
/// fund-affecting action goes through the player so that cash and
/// `total_bet` stay in step with the hands' bets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    cash: u64,
    bet: u64,
    total_bet: u64,
    hands: Vec<Hand>,
    rules: TableRules,
}

impl Player {
    /// Creates a player under the default split and double rules.
    #[must_use]
    pub fn new(name: impl Into<String>, cash: u64) -> Self {
        Self::with_rules(name, cash, TableRules::default())
    }

    /// Creates a player under the given split and double rules.
    #[must_use]
    pub fn with_rules(name: impl Into<String>, cash: u64, rules: TableRules) -> Self {
        Self {
            name: name.into(),
            cash,
            bet: 0,
            total_bet: 0,
            hands: Vec::new(),
            rules,
        }
    }

    /// Adds a hand and returns it.
    pub fn add_hand(&mut self, hand: Hand) -> &mut Hand {
        self.hands.push(hand);
        let last = self.hands.len() - 1;
        &mut self.hands[last]
    }

    /// Returns whether any owned hand is still in play.
    #[must_use]
    pub fn has_live_hands(&self) -> bool {
        self.hands
            .iter()
            .any(|hand| hand.status() == HandStatus::Play)
    }

    /// Returns the first hand while any hand is still in play.
    #[must_use]
    pub fn main_hand(&self) -> Option<&Hand> {
        if self.has_live_hands() {
            self.hands.first()
        } else {
            None
        }
    }

    /// Stakes the configured wager on the given hand.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving cash untouched, if the hand is not owned or
    /// the wager exceeds the player's cash.
    pub fn place_bet(&mut self, index: usize) -> Result<(), BetError> {
        let bet = self.bet;
        let cash = self.cash;
        let hand = self.hands.get_mut(index).ok_or(BetError::HandNotFound)?;
        if cash < bet {
            return Err(BetError::InsufficientFunds);
        }

        hand.set_bet(bet);
        self.cash -= bet;
        self.total_bet += bet;
        Ok(())
    }

    /// Returns whether the given hand may double down.
    #[must_use]
    pub fn can_double_bet(&self, index: usize) -> bool {
        self.check_double(index).is_ok()
    }

    fn check_double(&self, index: usize) -> Result<u64, ActionError> {
        let hand = self.hands.get(index).ok_or(ActionError::HandNotFound)?;
        if !hand.can_double_under(self.rules.double_after_split) {
            return Err(ActionError::CannotDouble);
        }
        if self.cash < hand.bet() {
            return Err(ActionError::InsufficientFunds);
        }
        Ok(hand.bet())
    }

    /// Doubles the bet on the given hand, staking the same amount again.
    ///
    /// # Errors
    ///
    /// Returns an error, with no mutation, if the hand is not owned, cannot
    /// double, or the player cannot cover the extra stake.
    pub fn double_bet(&mut self, index: usize) -> Result<(), ActionError> {
        let stake = self.check_double(index)?;
        let double_after_split = self.rules.double_after_split;
        if !self.hands[index].double_bet_under(double_after_split) {
            return Err(ActionError::CannotDouble);
        }

        self.cash -= stake;
        self.total_bet += stake;
        Ok(())
    }

    /// Returns whether the given hand may be split.
    #[must_use]
    pub fn can_split_hand(&self, index: usize) -> bool {
        self.check_split(index).is_ok()
    }

    fn check_split(&self, index: usize) -> Result<u64, ActionError> {
        let hand = self.hands.get(index).ok_or(ActionError::HandNotFound)?;
        if !hand.can_split_by(self.rules.split_match) {
            return Err(ActionError::CannotSplit);
        }
        if self.hands.len() > usize::from(self.rules.max_splits) {
            return Err(ActionError::MaxSplitsReached);
        }
        if self.cash < hand.bet() {
            return Err(ActionError::InsufficientFunds);
        }
        Ok(hand.bet())
    }

    /// Splits the given hand and registers the new hand after the others.
    ///
    /// Returns the index of the new hand.
    ///
    /// # Errors
    ///
    /// Returns an error, with no mutation, if the hand is not owned, is not a
    /// pair, the split limit is reached, or the player cannot cover the stake.
    pub fn split_hand(&mut self, index: usize) -> Result<usize, ActionError> {
        let stake = self.check_split(index)?;
        let split = self.hands[index]
            .split_by(self.rules.split_match)
            .ok_or(ActionError::CannotSplit)?;

        self.hands.push(split);
        self.cash -= stake;
        self.total_bet += stake;
        log::debug!("{} split hand {index} for {stake}", self.name);
        Ok(self.hands.len() - 1)
    }

    /// Credits winnings to the player.
    pub const fn won_bet(&mut self, amount: u64) {
        self.cash += amount;
    }

    /// Returns every stake placed this round to the player's cash.
    ///
    /// Returns the refunded amount.
    pub const fn refund(&mut self) -> u64 {
        let refund = self.total_bet;
        self.cash += refund;
        self.total_bet = 0;
        refund
    }

    /// Throws away the hands of the previous round.
    pub fn start_new_round(&mut self) {
        self.hands.clear();
    }

    /// Clears the wager and the staked total before the next round.
    pub const fn reset_bets(&mut self) {
        self.bet = 0;
        self.total_bet = 0;
    }

    /// Stands on every owned hand.
    pub fn end_round(&mut self) {
        for hand in &mut self.hands {
            hand.stand();
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's cash.
    #[must_use]
    pub const fn cash(&self) -> u64 {
        self.cash
    }

    /// Returns the wager staked on each new hand.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Sets the wager staked on each new hand.
    pub const fn set_bet(&mut self, bet: u64) {
        self.bet = bet;
    }

    /// Returns the total staked across this round's hands.
    #[must_use]
    pub const fn total_bet(&self) -> u64 {
        self.total_bet
    }

    /// Returns the owned hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub(crate) fn hands_mut(&mut self) -> &mut [Hand] {
        &mut self.hands
    }

    /// Returns the hand at the given index.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    /// Returns the hand at the given index mutably.
    pub fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    /// Returns the rules this player's account enforces.
    #[must_use]
    pub const fn rules(&self) -> TableRules {
        self.rules
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} hand(s) [Cash: {}]",
            self.name,
            self.hands.len(),
            self.cash
        )
    }
}
