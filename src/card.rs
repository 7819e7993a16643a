//! Card types and the rank value table.

use core::fmt;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Every suit, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Parses a suit from its one-letter symbol (`D`, `C`, `H`, `S`).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for any other symbol.
    pub const fn from_symbol(symbol: char) -> Result<Self, CardError> {
        match symbol {
            'D' => Ok(Self::Diamonds),
            'C' => Ok(Self::Clubs),
            'H' => Ok(Self::Hearts),
            'S' => Ok(Self::Spades),
            other => Err(CardError::InvalidSuit(other)),
        }
    }

    /// Returns the one-letter symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace, worth 1 or 11.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

// Indexed by `Rank as usize`.
const RANK_VALUES: [&[u16]; 13] = [
    &[1, 11],
    &[2],
    &[3],
    &[4],
    &[5],
    &[6],
    &[7],
    &[8],
    &[9],
    &[10],
    &[10],
    &[10],
    &[10],
];

const RANK_SYMBOLS: [char; 13] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];

impl Rank {
    /// Every rank, in deck-building order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Parses a rank from its symbol (`A`, `2`..`9`, `T`, `J`, `Q`, `K`).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] for any other symbol.
    pub fn from_symbol(symbol: char) -> Result<Self, CardError> {
        RANK_SYMBOLS
            .iter()
            .position(|&s| s == symbol)
            .map(|index| Self::ALL[index])
            .ok_or(CardError::InvalidRank(symbol))
    }

    /// Returns the symbol of the rank.
    #[must_use]
    pub const fn symbol(self) -> char {
        RANK_SYMBOLS[self as usize]
    }

    /// Returns every point value the rank can take.
    ///
    /// Aces yield `[1, 11]`; every other rank yields a single value, with
    /// tens and face cards worth 10.
    #[must_use]
    pub const fn values(self) -> &'static [u16] {
        RANK_VALUES[self as usize]
    }

    /// Returns the lowest point value of the rank.
    #[must_use]
    pub const fn base_value(self) -> u16 {
        self.values()[0]
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Builds a card from its rank and suit symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if either symbol is not part of the fixed sets.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Card, CardError, Rank, Suit};
    ///
    /// assert_eq!(Card::parse('T', 'H'), Ok(Card::new(Rank::Ten, Suit::Hearts)));
    /// assert_eq!(Card::parse('1', 'H'), Err(CardError::InvalidRank('1')));
    /// ```
    pub fn parse(rank: char, suit: char) -> Result<Self, CardError> {
        Ok(Self::new(Rank::from_symbol(rank)?, Suit::from_symbol(suit)?))
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// Returns every point value the card can take.
    #[must_use]
    pub const fn values(&self) -> &'static [u16] {
        self.rank.values()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.rank.symbol(), self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
