use crate::card::Card;
use crate::hand::Hand;

use super::state::Move;
use super::{Abort, Console, Table, TableEvent, take};

/// What to do with the card drawn ahead of a decision.
enum Resolution {
    /// The hand is settled for this decision; the card was used or returned.
    Done,
    /// Ask again, keeping the card.
    Again,
}

impl Table {
    /// Plays every hand of every player in seat order.
    ///
    /// Hands opened by a split are appended and played after the others.
    pub(super) fn play_hands<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), Abort> {
        if let Some(&card) = self.dealer.hand(0).and_then(|hand| hand.cards().first()) {
            console.event(TableEvent::DealerShows {
                dealer: &self.dealer,
                card,
            });
        }

        for seat in 0..self.players.len() {
            let mut index = 0;
            while index < self.players[seat].hands().len() {
                self.play_hand(console, seat, index)?;
                index += 1;
            }
        }
        Ok(())
    }

    fn show_hand<C: Console + ?Sized>(&self, console: &mut C, seat: usize, index: usize) {
        let player = &self.players[seat];
        if let Some(hand) = player.hand(index) {
            console.event(TableEvent::Hand { player, hand });
        }
    }

    fn play_hand<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        seat: usize,
        index: usize,
    ) -> Result<(), Abort> {
        self.show_hand(console, seat, index);

        while self.players[seat].hand(index).is_some_and(Hand::can_hit) {
            if self.players[seat].hand(index).is_some_and(Hand::is_blackjack) {
                console.event(TableEvent::Blackjack {
                    player: &self.players[seat],
                });
                if let Some(hand) = self.players[seat].hand_mut(index) {
                    hand.stand();
                }
                break;
            }

            // A hand that may still draw needs a card available before the
            // decision; running out here abandons the round.
            let card = self.shoe.deal_one()?;
            loop {
                let player = &self.players[seat];
                let Some(hand) = player.hand(index) else {
                    self.shoe.return_card(card);
                    return Ok(());
                };
                let Ok(decision) = console.next_move(player, hand) else {
                    self.shoe.return_card(card);
                    return Err(Abort::Quit);
                };
                match self.apply_move(console, seat, index, decision, card)? {
                    Resolution::Done => break,
                    Resolution::Again => {}
                }
            }

            self.show_hand(console, seat, index);
        }

        Ok(())
    }

    fn apply_move<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        seat: usize,
        index: usize,
        decision: Move,
        card: Card,
    ) -> Result<Resolution, Abort> {
        let player = &mut self.players[seat];

        match decision {
            Move::Hit => {
                if let Some(hand) = player.hand_mut(index) {
                    take(hand, card, &mut self.shoe);
                }
                Ok(Resolution::Done)
            }
            Move::Stand => {
                if let Some(hand) = player.hand_mut(index) {
                    hand.stand();
                }
                self.shoe.return_card(card);
                Ok(Resolution::Done)
            }
            Move::Double => match player.double_bet(index) {
                Ok(()) => {
                    log::debug!("{} doubles hand {index}", player.name());
                    if let Some(hand) = player.hand_mut(index) {
                        take(hand, card, &mut self.shoe);
                        hand.stand();
                    }
                    Ok(Resolution::Done)
                }
                Err(err) => {
                    log::debug!("{} cannot double: {err}", player.name());
                    console.event(TableEvent::Retry);
                    Ok(Resolution::Again)
                }
            },
            Move::Split => match player.split_hand(index) {
                Ok(split) => {
                    self.shoe.return_card(card);
                    self.deal_split_aces(seat, index, split)?;
                    Ok(Resolution::Done)
                }
                Err(err) => {
                    log::debug!("{} cannot split: {err}", player.name());
                    console.event(TableEvent::Retry);
                    Ok(Resolution::Again)
                }
            },
            Move::ShowStats => {
                let stats = self.stats();
                console.event(TableEvent::Stats(&stats));
                Ok(Resolution::Again)
            }
            Move::Retry => {
                console.event(TableEvent::Retry);
                Ok(Resolution::Again)
            }
        }
    }

    /// Gives each hand of a split ace pair one card and stands both, when
    /// the table deals split aces a single card.
    fn deal_split_aces(&mut self, seat: usize, index: usize, split: usize) -> Result<(), Abort> {
        let player = &mut self.players[seat];
        let aces = player.hand(index).is_some_and(Hand::is_ace_split);
        if !aces || !self.options.split_aces_receive_one_card {
            return Ok(());
        }

        let cards = self.shoe.deal(2)?;
        for (target, card) in [index, split].into_iter().zip(cards) {
            if let Some(hand) = player.hand_mut(target) {
                take(hand, card, &mut self.shoe);
                hand.stand();
            }
        }
        Ok(())
    }
}
