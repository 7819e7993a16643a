use crate::error::Quit;
use crate::hand::Hand;

use super::{Console, Table, TableEvent};

/// Returns whether `amount` lies within `min..=max` on the `step` grid.
const fn is_valid_bet(amount: u64, min: u64, max: u64, step: u64) -> bool {
    if amount < min || amount > max {
        return false;
    }
    step <= 1 || (amount - min) % step == 0
}

impl Table {
    /// Returns the wager bounds for a player with the given cash.
    ///
    /// Players short of the table minimum may still bet everything they have.
    #[must_use]
    pub fn bet_limits(&self, cash: u64) -> (u64, u64) {
        (self.options.min_bet.min(cash), self.options.max_bet.min(cash))
    }

    /// Opens a hand for every player and asks for a wager until one can be
    /// staked. The dealer opens an empty hand too.
    pub(super) fn place_bets<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), Quit> {
        let step = self.options.bet_step;

        for seat in 0..self.players.len() {
            let (min, max) = self.bet_limits(self.players[seat].cash());
            self.players[seat].add_hand(Hand::new());
            loop {
                let amount = console.bet(&self.players[seat], min, max, step)?;
                if is_valid_bet(amount, min, max, step) {
                    let player = &mut self.players[seat];
                    player.set_bet(amount);
                    match player.place_bet(0) {
                        Ok(()) => {
                            log::debug!("{} bets {amount}", player.name());
                            break;
                        }
                        Err(err) => log::debug!("{} cannot stake {amount}: {err}", player.name()),
                    }
                }
                console.event(TableEvent::Retry);
            }
        }

        self.dealer.add_hand(Hand::new());
        Ok(())
    }
}
