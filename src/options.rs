//! Table configuration options.

/// How the two cards of a pair are compared when splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplitMatch {
    /// Both cards must carry the same rank symbol (a ten and a jack may not split).
    #[default]
    Symbol,
    /// Both cards must be worth the same points (any two ten-value cards may split).
    Value,
}

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// The split and double rules a player's account enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableRules {
    /// Maximum number of splits per round (3 splits leave 4 hands).
    pub max_splits: u8,
    /// How pairs are matched for splitting.
    pub split_match: SplitMatch,
    /// Whether a hand created by a split may double down.
    pub double_after_split: bool,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            max_splits: 3,
            split_match: SplitMatch::Symbol,
            double_after_split: false,
        }
    }
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_blackjack_pays(1.2)
///     .with_double_after_split(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of decks in a shoe.
    pub decks: u8,
    /// Cash each player starts with.
    pub starting_cash: u64,
    /// Minimum bet on a single hand.
    pub min_bet: u64,
    /// Maximum bet on a single hand.
    pub max_bet: u64,
    /// Allowed bet increments.
    pub bet_step: u64,
    /// The dealer draws until reaching this total.
    pub dealer_stay: u16,
    /// Maximum number of splits allowed.
    pub max_splits: u8,
    /// How pairs are matched for splitting.
    pub split_match: SplitMatch,
    /// Whether double down is allowed after split.
    pub double_after_split: bool,
    /// Whether split aces receive only one card.
    pub split_aces_receive_one_card: bool,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            starting_cash: 1000,
            min_bet: 5,
            max_bet: 100,
            bet_step: 1,
            dealer_stay: 17,
            max_splits: 3,
            split_match: SplitMatch::Symbol,
            double_after_split: false,
            split_aces_receive_one_card: true,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl TableOptions {
    /// Returns the split and double rules handed to each player.
    #[must_use]
    pub const fn rules(&self) -> TableRules {
        TableRules {
            max_splits: self.max_splits,
            split_match: self.split_match,
            double_after_split: self.double_after_split,
        }
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the cash each player starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_cash(250);
    /// assert_eq!(options.starting_cash, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_cash(mut self, cash: u64) -> Self {
        self.starting_cash = cash;
        self
    }

    /// Sets the bet bounds and increment.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_bet_limits(10, 500, 5);
    /// assert_eq!((options.min_bet, options.max_bet, options.bet_step), (10, 500, 5));
    /// ```
    #[must_use]
    pub const fn with_bet_limits(mut self, min: u64, max: u64, step: u64) -> Self {
        self.min_bet = min;
        self.max_bet = max;
        self.bet_step = step;
        self
    }

    /// Sets the dealer's stand threshold.
    #[must_use]
    pub const fn with_dealer_stay(mut self, stay: u16) -> Self {
        self.dealer_stay = stay;
        self
    }

    /// Sets the maximum number of splits allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_splits(1);
    /// assert_eq!(options.rules().max_splits, 1);
    /// ```
    #[must_use]
    pub const fn with_max_splits(mut self, splits: u8) -> Self {
        self.max_splits = splits;
        self
    }

    /// Sets how pairs are matched for splitting.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{SplitMatch, TableOptions};
    ///
    /// let options = TableOptions::default().with_split_match(SplitMatch::Value);
    /// assert_eq!(options.split_match, SplitMatch::Value);
    /// ```
    #[must_use]
    pub const fn with_split_match(mut self, split_match: SplitMatch) -> Self {
        self.split_match = split_match;
        self
    }

    /// Sets whether double down is allowed after split.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets whether split aces receive only one card.
    #[must_use]
    pub const fn with_split_aces_receive_one_card(mut self, one_card: bool) -> Self {
        self.split_aces_receive_one_card = one_card;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}
