//! The multi-deck shoe cards are dealt from.

use core::fmt;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// A shoe of one or more shuffled decks.
///
/// Cards are dealt from the top and returned to the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    decks: u8,
    cards: VecDeque<Card>,
}

impl Shoe {
    /// Creates and shuffles a shoe with the specified number of decks.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::NoDecks`] if `decks` is zero.
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Result<Self, ShoeError> {
        if decks == 0 {
            return Err(ShoeError::NoDecks);
        }

        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        cards.shuffle(rng);
        log::debug!("shuffled a shoe of {decks} deck(s)");

        Ok(Self {
            decks,
            cards: cards.into(),
        })
    }

    /// Creates a shoe that deals the given cards in order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            decks: cards.len().div_ceil(DECK_SIZE) as u8,
            cards: cards.into(),
        }
    }

    /// Deals `count` cards from the top of the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`], dealing nothing, if fewer than
    /// `count` cards remain.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, ShoeError> {
        if self.cards.len() < count {
            return Err(ShoeError::Exhausted {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// Deals a single card from the top of the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe is empty.
    pub fn deal_one(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop_front().ok_or(ShoeError::Exhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// Puts a card back at the bottom of the shoe.
    pub fn return_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Returns the number of decks the shoe started with.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, top first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl fmt::Display for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.decks == 1 { "" } else { "s" };
        write!(f, "[{} deck{plural} to start]", self.decks)?;
        for (index, card) in self.cards.iter().enumerate() {
            if index % 13 == 0 {
                f.write_str("\n")?;
            } else {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
