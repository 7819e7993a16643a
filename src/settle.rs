//! Round settlement: classifies finished hands and computes payouts.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::error::ShowdownError;
use crate::hand::Hand;
use crate::options::{RoundingMode, TableOptions};
use crate::player::Player;
use crate::result::{HandOutcome, HandResult, PlayerResult, RoundResult};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> u64 {
    match mode {
        RoundingMode::Up => amount.ceil() as u64,
        RoundingMode::Down => amount.floor() as u64,
        RoundingMode::Nearest => amount.round() as u64,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> u64 {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as u64,
        RoundingMode::Down => libm::floor(amount) as u64,
        RoundingMode::Nearest => libm::round(amount) as u64,
    }
}

/// Classifies a finished player hand against the dealer's finished hand.
///
/// Rules are checked in order: push (both bust, both blackjack, or equal
/// best totals), dealer wins (player bust, dealer blackjack, or a lower
/// total against a standing dealer), player blackjack, player wins.
///
/// # Errors
///
/// Returns [`ShowdownError::Unresolved`] if no rule matches.
pub fn classify(player: &Hand, dealer: &Hand) -> Result<HandOutcome, ShowdownError> {
    let player_total = player.max_total();
    let dealer_total = dealer.max_total();

    if (player.is_bust() && dealer.is_bust())
        || (player.is_blackjack() && dealer.is_blackjack())
        || player_total == dealer_total
    {
        return Ok(HandOutcome::Push);
    }

    if player.is_bust()
        || dealer.is_blackjack()
        || (!dealer.is_bust() && player_total < dealer_total)
    {
        return Ok(HandOutcome::DealerWins);
    }

    if player.is_blackjack() {
        return Ok(HandOutcome::Blackjack);
    }

    if dealer.is_bust() || player_total > dealer_total {
        return Ok(HandOutcome::PlayerWins);
    }

    Err(ShowdownError::Unresolved {
        player: player_total,
        dealer: dealer_total,
    })
}

/// Returns the amount credited to the player for an outcome, stake included.
///
/// A push returns the stake, a win pays double, and a blackjack pays the
/// stake plus `blackjack_pays` times the stake, rounded per the options.
#[must_use]
pub fn payout(outcome: HandOutcome, bet: u64, options: &TableOptions) -> u64 {
    match outcome {
        HandOutcome::Push => bet,
        HandOutcome::DealerWins => 0,
        HandOutcome::Blackjack => {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let winnings = (bet as f64) * options.blackjack_pays;
            bet + round_amount(winnings, options.rounding_blackjack)
        }
        HandOutcome::PlayerWins => bet * 2,
    }
}

/// Resolves every player hand against the dealer's hand.
///
/// Nothing is credited; see [`apply`].
///
/// # Errors
///
/// Returns an error if any pair of hands cannot be classified.
pub fn resolve(
    dealer: &Hand,
    players: &[Player],
    options: &TableOptions,
) -> Result<RoundResult, ShowdownError> {
    let mut results = Vec::with_capacity(players.len());
    let mut dealer_take = 0;

    for (seat, player) in players.iter().enumerate() {
        let mut hands = Vec::with_capacity(player.hands().len());
        let mut total_payout = 0;
        let mut total_bet = 0;

        for (hand_index, hand) in player.hands().iter().enumerate() {
            let outcome = classify(hand, dealer).inspect_err(|err| {
                log::error!("{} hand {hand_index}: {err}", player.name());
            })?;
            let bet = hand.bet();
            let paid = payout(outcome, bet, options);
            log::debug!(
                "{} hand {hand_index}: {outcome:?} on {bet}, paying {paid}",
                player.name()
            );

            if outcome == HandOutcome::DealerWins {
                dealer_take += bet;
            }
            total_payout += paid;
            total_bet += bet;

            hands.push(HandResult {
                hand_index,
                outcome,
                bet,
                payout: paid,
                player_total: hand.max_total(),
            });
        }

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in i64")]
        let net = total_payout as i64 - total_bet as i64;

        results.push(PlayerResult {
            seat,
            name: player.name().to_string(),
            hands,
            total_payout,
            net,
        });
    }

    Ok(RoundResult {
        players: results,
        dealer_total: dealer.max_total(),
        dealer_bust: dealer.is_bust(),
        dealer_blackjack: dealer.is_blackjack(),
        dealer_take,
    })
}

/// Credits a resolved round: payouts to the players, lost stakes to the dealer.
pub fn apply(result: &RoundResult, players: &mut [Player], dealer: &mut Player) {
    for player_result in &result.players {
        if let Some(player) = players.get_mut(player_result.seat) {
            player.won_bet(player_result.total_payout);
        }
    }
    dealer.won_bet(result.dealer_take);
}
