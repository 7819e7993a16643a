//! Hand valuation and per-hand state.

use core::fmt;

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::options::SplitMatch;

/// Highest total a hand can reach without busting.
pub const BLACKJACK: u16 = 21;

/// Folds every card's value options into the set of reachable totals.
///
/// Duplicates are dropped after each card, so `k` aces yield at most `k + 1`
/// sums instead of `2^k`.
fn fold_totals(cards: &[Card]) -> Vec<u16> {
    let mut totals = alloc::vec![0];

    for card in cards {
        let values = card.values();
        let mut next = Vec::with_capacity(totals.len() * values.len());
        for value in values {
            next.extend(totals.iter().map(|total| total + value));
        }
        next.sort_unstable();
        next.dedup();
        totals = next;
    }

    totals
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is still in play.
    Play,
    /// Hand is done for the round.
    Stand,
}

/// A hand of cards along with its bet and split lineage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
    /// Bet amount for this hand.
    bet: u64,
    /// Whether this hand took part in a split.
    is_split: bool,
    /// Whether this hand descends from a split pair of aces.
    ace_split: bool,
}

impl Hand {
    /// Creates a new empty hand with no bet.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_bet(0)
    }

    /// Creates a new empty hand carrying the given bet.
    #[must_use]
    pub const fn with_bet(bet: u64) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Play,
            bet,
            is_split: false,
            ace_split: false,
        }
    }

    /// Adds a card to the hand if it is still in play.
    ///
    /// Returns `false`, leaving the hand untouched, when the hand stands.
    #[must_use = "a standing hand silently rejects the card"]
    pub fn hit(&mut self, card: Card) -> bool {
        if self.status != HandStatus::Play {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Returns whether the hand can take another card.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        !self.is_bust() && self.status != HandStatus::Stand
    }

    /// Returns whether every total of the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.totals(true).is_empty()
    }

    /// Returns the best total that does not bust, or 0 for a bust hand.
    #[must_use]
    pub fn max_total(&self) -> u16 {
        self.totals(true).last().copied().unwrap_or(0)
    }

    /// Returns whether the hand totals 21 without descending from split aces.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.max_total() == BLACKJACK && !self.ace_split
    }

    /// Stands on the hand. Standing cannot be undone.
    pub const fn stand(&mut self) {
        self.status = HandStatus::Stand;
    }

    /// Returns whether the hand holds a pair of identical rank symbols.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.can_split_by(SplitMatch::Symbol)
    }

    /// Returns whether the hand holds a pair under the given matching rule.
    #[must_use]
    pub fn can_split_by(&self, split_match: SplitMatch) -> bool {
        let [first, second] = self.cards.as_slice() else {
            return false;
        };
        match split_match {
            SplitMatch::Symbol => first.rank == second.rank,
            SplitMatch::Value => first.rank.base_value() == second.rank.base_value(),
        }
    }

    /// Splits a pair of identical rank symbols.
    ///
    /// See [`Hand::split_by`].
    #[must_use]
    pub fn split(&mut self) -> Option<Self> {
        self.split_by(SplitMatch::Symbol)
    }

    /// Splits the pair, moving the second card into a new hand.
    ///
    /// The new hand carries the same bet. Both hands are marked as split, and
    /// both inherit the ace-split lineage when the pair was two aces. Returns
    /// `None` without touching the hand when it cannot be split.
    #[must_use]
    pub fn split_by(&mut self, split_match: SplitMatch) -> Option<Self> {
        if !self.can_split_by(split_match) {
            return None;
        }

        let card = self.cards.pop()?;
        if card.is_ace() && self.has_aces() {
            self.ace_split = true;
        }
        self.is_split = true;

        Some(Self {
            cards: alloc::vec![card],
            status: HandStatus::Play,
            bet: self.bet,
            is_split: true,
            ace_split: self.ace_split,
        })
    }

    /// Returns whether the hand may double down, barring split hands.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.can_double_under(false)
    }

    /// Returns whether the hand may double down.
    ///
    /// Only two-card hands may double; split hands only when
    /// `double_after_split` is set.
    #[must_use]
    pub fn can_double_under(&self, double_after_split: bool) -> bool {
        self.cards.len() == 2 && (!self.is_split || double_after_split)
    }

    /// Doubles the bet if [`Hand::can_double`] allows it.
    #[must_use]
    pub fn double_bet(&mut self) -> bool {
        self.double_bet_under(false)
    }

    /// Doubles the bet if [`Hand::can_double_under`] allows it.
    #[must_use]
    pub fn double_bet_under(&mut self, double_after_split: bool) -> bool {
        if !self.can_double_under(double_after_split) {
            return false;
        }
        self.bet *= 2;
        true
    }

    /// Returns whether the hand holds at least one ace.
    #[must_use]
    pub fn has_aces(&self) -> bool {
        self.cards.iter().any(|card| card.rank == Rank::Ace)
    }

    /// Returns every reachable total, ascending.
    ///
    /// With `filtered` set, totals over 21 are dropped; an empty result then
    /// means the hand is bust. An empty hand totals `[0]`.
    #[must_use]
    pub fn totals(&self, filtered: bool) -> Vec<u16> {
        let mut totals = fold_totals(&self.cards);
        if filtered {
            totals.retain(|&total| total <= BLACKJACK);
        }
        totals
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    pub(crate) const fn set_bet(&mut self, bet: u64) {
        self.bet = bet;
    }

    /// Returns whether this hand took part in a split.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.is_split
    }

    /// Returns whether this hand descends from a split pair of aces.
    #[must_use]
    pub const fn is_ace_split(&self) -> bool {
        self.ace_split
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comment = if self.is_bust() {
            "Done Busted!"
        } else if self.is_blackjack() {
            "BLACKJACK!"
        } else {
            "Keep it steady mate!"
        };

        f.write_str("[")?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("] (")?;
        for (index, total) in self.totals(false).iter().enumerate() {
            if index > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "{total}")?;
        }
        write!(f, ") {{{comment}}}")
    }
}
