//! Table engine and round flow.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{Quit, RoundError, ShoeError, ShowdownError, TableError};
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::player::Player;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod bet;
pub mod console;
mod dealer;
pub mod state;

pub use console::{Console, TableEvent};
pub use dealer::dealer_play;
pub use state::{Move, PlayerSummary, RoundEnd, TableStats};

/// Why a round stopped before settlement.
#[derive(Debug)]
enum Abort {
    Quit,
    Shoe(ShoeError),
    Showdown(ShowdownError),
}

impl From<Quit> for Abort {
    fn from(_: Quit) -> Self {
        Self::Quit
    }
}

impl From<ShoeError> for Abort {
    fn from(err: ShoeError) -> Self {
        Self::Shoe(err)
    }
}

impl From<ShowdownError> for Abort {
    fn from(err: ShowdownError) -> Self {
        Self::Showdown(err)
    }
}

/// Adds a card to a hand, putting it back in the shoe if the hand stands.
fn take(hand: &mut Hand, card: Card, shoe: &mut Shoe) {
    if !hand.hit(card) {
        shoe.return_card(card);
    }
}

/// Returns the dealer's hand, opening one if the round has none yet.
fn main_hand_mut(dealer: &mut Player) -> &mut Hand {
    if dealer.hands().is_empty() {
        dealer.add_hand(Hand::new());
    }
    &mut dealer.hands_mut()[0]
}

/// A single blackjack table: the shoe, the dealer, and the seated players.
///
/// The table sequences each round (bets, deal, play, settlement) and keeps
/// the session statistics. Prompts and rendering go through a [`Console`].
pub struct Table {
    /// Table options.
    pub options: TableOptions,
    /// Cards in the shoe.
    pub shoe: Shoe,
    /// The house, collecting lost stakes.
    dealer: Player,
    /// Players still able to bet.
    players: Vec<Player>,
    /// Players who ran out of cash.
    losers: Vec<Player>,
    /// Games started.
    games: u32,
    /// Rounds settled.
    rounds: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Opens a table with one player per name and a shuffled shoe.
    ///
    /// Each player starts with `options.starting_cash`.
    ///
    /// # Errors
    ///
    /// Returns an error if no names are given, the minimum bet is above the
    /// maximum, or the options ask for a shoe of zero decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), ["Ada", "Grace"], 42).unwrap();
    /// assert_eq!(table.players().len(), 2);
    /// assert_eq!(table.shoe.len(), 52);
    /// ```
    pub fn new<I, S>(options: TableOptions, names: I, seed: u64) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if options.min_bet > options.max_bet {
            return Err(TableError::InvalidBetLimits {
                min: options.min_bet,
                max: options.max_bet,
            });
        }

        let rules = options.rules();
        let players: Vec<Player> = names
            .into_iter()
            .map(|name| Player::with_rules(name, options.starting_cash, rules))
            .collect();
        if players.is_empty() {
            return Err(TableError::NoPlayers);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(options.decks, &mut rng)?;

        Ok(Self {
            options,
            shoe,
            dealer: Player::with_rules("Dealer", 0, rules),
            players,
            losers: Vec::new(),
            games: 0,
            rounds: 0,
            rng,
        })
    }

    /// Plays games until the players quit, run out of cash, or decline a new
    /// shoe. Shows and returns the final statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out before any bet is resolved or a
    /// settlement cannot be resolved.
    pub fn play<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<TableStats, TableError> {
        let outcome = self.play_games(console);
        let stats = self.stats();
        console.event(TableEvent::Stats(&stats));
        outcome.map(|()| stats)
    }

    fn play_games<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), TableError> {
        loop {
            if self.games > 0 {
                match console.continue_play(self.games + 1) {
                    Ok(true) => {}
                    Ok(false) | Err(Quit) => return Ok(()),
                }
            }

            self.start_game()?;
            while self.can_play() {
                match self.play_round(console) {
                    Ok(RoundEnd::Settled(_)) => {}
                    Ok(RoundEnd::Aborted) if self.rounds == 0 => {
                        return Err(TableError::ShoeExhausted);
                    }
                    Ok(RoundEnd::Aborted) => break,
                    Err(RoundError::Quit(_)) => return Ok(()),
                    Err(RoundError::Showdown(err)) => return Err(err.into()),
                }
            }

            if self.players.is_empty() {
                log::info!("every player is out of cash");
                return Ok(());
            }
        }
    }

    /// Starts a new game with a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the options ask for a shoe of zero decks.
    pub fn start_game(&mut self) -> Result<(), ShoeError> {
        // The shoe built by `new` serves the first game.
        if self.games > 0 {
            self.shoe = Shoe::new(self.options.decks, &mut self.rng)?;
        }
        self.games += 1;
        log::info!("starting game {}", self.games);
        Ok(())
    }

    /// Returns whether another round can start on the current shoe.
    #[must_use]
    pub fn can_play(&self) -> bool {
        !self.shoe.is_empty() && !self.players.is_empty()
    }

    /// Plays one round: bets, the deal, every player's hands, the dealer's
    /// hand, and settlement.
    ///
    /// If the shoe runs out mid-round every stake is refunded and
    /// [`RoundEnd::Aborted`] is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a player quits (stakes are refunded first) or a
    /// settlement cannot be resolved.
    pub fn play_round<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<RoundEnd, RoundError> {
        console.event(TableEvent::RoundStarted {
            game: self.games.max(1),
            round: self.rounds + 1,
        });
        console.event(TableEvent::Shoe(&self.shoe));

        self.reset_round();
        match self.run_round(console) {
            Ok(result) => Ok(RoundEnd::Settled(result)),
            Err(Abort::Shoe(err)) => {
                log::warn!("round abandoned: {err}");
                console.event(TableEvent::OutOfCards);
                self.refund_round();
                Ok(RoundEnd::Aborted)
            }
            Err(Abort::Quit) => {
                self.refund_round();
                Err(Quit.into())
            }
            Err(Abort::Showdown(err)) => {
                self.refund_round();
                Err(err.into())
            }
        }
    }

    fn run_round<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<RoundResult, Abort> {
        self.place_bets(console)?;
        self.initial_deal()?;
        console.event(TableEvent::Dealt {
            players: &self.players,
            dealer: &self.dealer,
        });

        let dealer_blackjack = self.dealer.main_hand().is_some_and(Hand::is_blackjack);
        if !dealer_blackjack {
            self.play_hands(console)?;
        }

        self.finish_round(console)
    }

    /// Throws away the previous round's hands and clears every wager.
    fn reset_round(&mut self) {
        for player in self.players.iter_mut().chain(core::iter::once(&mut self.dealer)) {
            player.start_new_round();
            player.reset_bets();
        }
    }

    /// Returns every stake placed this round.
    fn refund_round(&mut self) {
        for player in &mut self.players {
            let refund = player.refund();
            if refund > 0 {
                log::info!("refunded {refund} to {}", player.name());
            }
        }
    }

    /// Deals two cards to every player, then two to the dealer.
    fn initial_deal(&mut self) -> Result<(), ShoeError> {
        for player in self.players.iter_mut().chain(core::iter::once(&mut self.dealer)) {
            let cards = self.shoe.deal(2)?;
            let hand = main_hand_mut(player);
            for card in cards {
                take(hand, card, &mut self.shoe);
            }
        }
        Ok(())
    }

    /// Returns the session statistics.
    #[must_use]
    pub fn stats(&self) -> TableStats {
        TableStats {
            games: self.games,
            rounds: self.rounds,
            players: self
                .players
                .iter()
                .chain(&self.losers)
                .map(|player| PlayerSummary {
                    name: player.name().to_string(),
                    cash: player.cash(),
                    hands: player.hands().len(),
                })
                .collect(),
        }
    }

    /// Returns the players still able to bet.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the players who ran out of cash.
    #[must_use]
    pub fn losers(&self) -> &[Player] {
        &self.losers
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the number of games started.
    #[must_use]
    pub const fn games(&self) -> u32 {
        self.games
    }

    /// Returns the number of rounds settled.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }
}
