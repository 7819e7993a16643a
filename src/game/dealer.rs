use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::result::RoundResult;
use crate::settle;
use crate::shoe::Shoe;

use super::{Abort, Console, Table, TableEvent, main_hand_mut, take};

/// Draws for the dealer until the hand busts or reaches `stay`, then
/// freezes it.
///
/// Returns the cards drawn.
///
/// # Errors
///
/// Returns an error if the shoe runs out while the dealer must draw.
pub fn dealer_play(hand: &mut Hand, shoe: &mut Shoe, stay: u16) -> Result<Vec<Card>, ShoeError> {
    let mut drawn = Vec::new();

    while !hand.is_bust() && hand.max_total() < stay {
        let card = shoe.deal_one()?;
        take(hand, card, shoe);
        drawn.push(card);
    }

    hand.stand();
    Ok(drawn)
}

impl Table {
    /// Plays out the dealer's hand, settles every bet, and retires players
    /// who are out of cash.
    pub(super) fn finish_round<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<RoundResult, Abort> {
        console.event(TableEvent::Settling);

        let stay = self.options.dealer_stay;
        let drawn = dealer_play(main_hand_mut(&mut self.dealer), &mut self.shoe, stay)?;
        if !drawn.is_empty() {
            log::debug!("dealer draws {} card(s)", drawn.len());
        }
        if let Some(hand) = self.dealer.hand(0) {
            console.event(TableEvent::Hand {
                player: &self.dealer,
                hand,
            });
        }

        for player in &mut self.players {
            player.end_round();
        }

        let dealer_hand = main_hand_mut(&mut self.dealer);
        let result = settle::resolve(dealer_hand, &self.players, &self.options)?;
        settle::apply(&result, &mut self.players, &mut self.dealer);
        self.rounds += 1;
        log::info!(
            "round {} settled, dealer {}",
            self.rounds,
            if result.dealer_bust {
                "busts"
            } else {
                "stands"
            }
        );

        for player_result in &result.players {
            let player = &self.players[player_result.seat];
            for hand_result in &player_result.hands {
                console.event(TableEvent::Outcome {
                    player,
                    result: hand_result,
                });
            }
        }

        let (broke, solvent): (Vec<_>, Vec<_>) = self
            .players
            .drain(..)
            .partition(|player| player.cash() == 0);
        for player in &broke {
            log::info!("{} is out of cash", player.name());
        }
        self.players = solvent;
        self.losers.extend(broke);

        Ok(result)
    }
}
