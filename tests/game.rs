//! Table round flow tests.

use std::collections::VecDeque;

use bjsim::{
    Card, Console, Hand, HandOutcome, Move, Player, Quit, Rank, RoundEnd, RoundError, Shoe, Suit,
    Table, TableError, TableEvent, TableOptions,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Replays scripted answers and records the events it is shown.
#[derive(Default)]
struct Script {
    bets: VecDeque<u64>,
    moves: VecDeque<Move>,
    answers: VecDeque<bool>,
    asked_games: Vec<u32>,
    events: Vec<&'static str>,
}

impl Script {
    fn new(bets: &[u64], moves: &[Move]) -> Self {
        Self {
            bets: bets.iter().copied().collect(),
            moves: moves.iter().copied().collect(),
            ..Self::default()
        }
    }

    fn saw(&self, label: &str) -> bool {
        self.events.iter().any(|&event| event == label)
    }
}

impl Console for Script {
    fn bet(&mut self, _player: &Player, _min: u64, _max: u64, _step: u64) -> Result<u64, Quit> {
        self.bets.pop_front().ok_or(Quit)
    }

    fn next_move(&mut self, _player: &Player, _hand: &Hand) -> Result<Move, Quit> {
        self.moves.pop_front().ok_or(Quit)
    }

    fn continue_play(&mut self, game: u32) -> Result<bool, Quit> {
        self.asked_games.push(game);
        self.answers.pop_front().ok_or(Quit)
    }

    fn event(&mut self, event: TableEvent<'_>) {
        let label = match event {
            TableEvent::RoundStarted { .. } => "round",
            TableEvent::Shoe(_) => "shoe",
            TableEvent::Dealt { .. } => "dealt",
            TableEvent::DealerShows { .. } => "dealer-shows",
            TableEvent::Hand { .. } => "hand",
            TableEvent::Blackjack { .. } => "blackjack",
            TableEvent::Settling => "settling",
            TableEvent::Outcome { .. } => "outcome",
            TableEvent::Retry => "retry",
            TableEvent::OutOfCards => "out-of-cards",
            TableEvent::Stats(_) => "stats",
        };
        self.events.push(label);
    }
}

fn table_with(options: TableOptions, cards: &[Card]) -> Table {
    let mut table = Table::new(options, ["Ann"], 1).expect("table opens");
    table.shoe = Shoe::from_cards(cards.to_vec());
    table
}

fn table(cards: &[Card]) -> Table {
    table_with(TableOptions::default().with_starting_cash(100), cards)
}

fn settled(end: RoundEnd) -> Vec<HandOutcome> {
    let RoundEnd::Settled(result) = end else {
        panic!("round was not settled");
    };
    result.players[0]
        .hands
        .iter()
        .map(|hand| hand.outcome)
        .collect()
}

#[test]
fn new_table_requires_players() {
    let names: [&str; 0] = [];
    assert!(matches!(
        Table::new(TableOptions::default(), names, 1),
        Err(TableError::NoPlayers)
    ));
    assert!(matches!(
        Table::new(TableOptions::default().with_decks(0), ["Ann"], 1),
        Err(TableError::Shoe(_))
    ));
}

#[test]
fn new_table_seats_players_with_starting_cash() {
    let options = TableOptions::default().with_decks(2).with_starting_cash(250);
    let table = Table::new(options, ["Ann", "Bob"], 9).expect("table opens");
    assert_eq!(table.shoe.len(), 104);
    assert_eq!(table.players().len(), 2);
    assert!(table.players().iter().all(|player| player.cash() == 250));
    assert_eq!(table.dealer().cash(), 0);
    assert_eq!(table.bet_limits(250), (5, 100));
    assert_eq!(table.bet_limits(3), (3, 3));
}

#[test]
fn stand_returns_the_pending_card() {
    let mut table = table(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
    ]);
    let mut console = Script::new(&[10], &[Move::Stand]);

    let end = table.play_round(&mut console).expect("round plays");
    assert_eq!(settled(end), [HandOutcome::PlayerWins]);
    assert_eq!(table.players()[0].cash(), 110);
    assert_eq!(table.rounds(), 1);
    assert_eq!(table.shoe.len(), 1);
    assert!(console.saw("dealer-shows"));
    assert!(console.saw("outcome"));
}

#[test]
fn dealer_blackjack_skips_player_decisions() {
    let mut table = table(&[
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::King, Suit::Clubs),
    ]);
    let mut console = Script::new(&[10], &[Move::Hit]);

    let end = table.play_round(&mut console).expect("round plays");
    assert_eq!(settled(end), [HandOutcome::DealerWins]);
    assert_eq!(console.moves.len(), 1);
    assert!(!console.saw("dealer-shows"));
    assert_eq!(table.players()[0].cash(), 90);
    assert_eq!(table.dealer().cash(), 10);
}

#[test]
fn hitting_past_twenty_one_loses() {
    let mut table = table(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::King, Suit::Spades),
    ]);
    let mut console = Script::new(&[10], &[Move::Hit]);

    let end = table.play_round(&mut console).expect("round plays");
    assert_eq!(settled(end), [HandOutcome::DealerWins]);
    assert!(table.players()[0].hands()[0].is_bust());
    assert_eq!(table.players()[0].cash(), 90);
    assert!(table.shoe.is_empty());
}

#[test]
fn double_takes_one_card_and_stands() {
    let mut table = table(&[
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Nine, Suit::Spades),
    ]);
    let mut console = Script::new(&[10], &[Move::Double]);

    let end = table.play_round(&mut console).expect("round plays");
    assert_eq!(settled(end), [HandOutcome::PlayerWins]);
    let hand = &table.players()[0].hands()[0];
    assert_eq!(hand.bet(), 20);
    assert_eq!(hand.max_total(), 20);
    assert_eq!(table.players()[0].cash(), 120);
}

#[test]
fn split_eights_play_as_two_hands() {
    let mut table = table(&[
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Two, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Three, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Four, Suit::Spades),
    ]);
    let mut console = Script::new(
        &[10],
        &[Move::Split, Move::Hit, Move::Stand, Move::Hit, Move::Stand],
    );

    let end = table.play_round(&mut console).expect("round plays");
    assert_eq!(settled(end), [HandOutcome::PlayerWins, HandOutcome::Push]);
    assert!(console.moves.is_empty());
    assert_eq!(table.players()[0].cash(), 110);

    let left: Vec<Card> = table.shoe.cards().copied().collect();
    assert_eq!(
        left,
        [
            card(Rank::Two, Suit::Spades),
            card(Rank::Three, Suit::Spades),
            card(Rank::Four, Suit::Spades),
        ]
    );
}

#[test]
fn split_aces_get_one_card_each() {
    let mut table = table(&[
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Diamonds),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
        card(Rank::King, Suit::Hearts),
        card(Rank::Nine, Suit::Hearts),
    ]);
    let mut console = Script::new(&[10], &[Move::Split]);

    let end = table.play_round(&mut console).expect("round plays");
    assert_eq!(
        settled(end),
        [HandOutcome::PlayerWins, HandOutcome::PlayerWins]
    );
    let hands = table.players()[0].hands();
    assert_eq!(hands[0].max_total(), 21);
    assert!(!hands[0].is_blackjack());
    assert_eq!(hands[1].max_total(), 20);
    assert_eq!(table.players()[0].cash(), 120);
    assert_eq!(table.shoe.len(), 1);
}

#[test]
fn natural_blackjack_pays_three_to_two() {
    let mut table = table(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Spades),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
    ]);
    let mut console = Script::new(&[10], &[]);

    let end = table.play_round(&mut console).expect("round plays");
    assert_eq!(settled(end), [HandOutcome::Blackjack]);
    assert!(console.saw("blackjack"));
    assert_eq!(table.players()[0].cash(), 115);
}

#[test]
fn refused_moves_ask_again() {
    let mut table = table(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
    ]);
    let mut console = Script::new(&[10], &[Move::Split, Move::Retry, Move::ShowStats, Move::Stand]);

    let end = table.play_round(&mut console).expect("round plays");
    assert_eq!(settled(end), [HandOutcome::DealerWins]);
    assert_eq!(
        console.events.iter().filter(|&&label| label == "retry").count(),
        2
    );
    assert!(console.saw("stats"));
    assert_eq!(table.players()[0].cash(), 90);
    assert_eq!(table.shoe.len(), 1);
}

#[test]
fn bets_outside_the_limits_are_asked_again() {
    let mut table = table(&[
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::King, Suit::Clubs),
    ]);
    let mut console = Script::new(&[1000, 2, 7], &[]);

    table.play_round(&mut console).expect("round plays");
    assert_eq!(
        console.events.iter().filter(|&&label| label == "retry").count(),
        2
    );
    assert_eq!(table.players()[0].hands()[0].bet(), 7);
    assert_eq!(table.players()[0].total_bet(), 7);
    assert_eq!(table.players()[0].cash(), 93);
}

#[test]
fn inverted_bet_limits_are_rejected() {
    let options = TableOptions::default().with_bet_limits(50, 10, 1);
    assert!(matches!(
        Table::new(options, ["Ann"], 1),
        Err(TableError::InvalidBetLimits { min: 50, max: 10 })
    ));
}

#[test]
fn running_out_mid_round_refunds_every_stake() {
    let mut table = table(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
    ]);
    let mut console = Script::new(&[10], &[Move::Stand]);

    let end = table.play_round(&mut console).expect("round aborts cleanly");
    assert_eq!(end, RoundEnd::Aborted);
    assert!(console.saw("out-of-cards"));
    assert_eq!(table.players()[0].cash(), 100);
    assert_eq!(table.players()[0].total_bet(), 0);
    assert_eq!(table.rounds(), 0);
}

#[test]
fn play_reports_a_shoe_too_small_for_any_round() {
    let mut table = table(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
    ]);
    let mut console = Script::new(&[10], &[]);

    assert_eq!(table.play(&mut console), Err(TableError::ShoeExhausted));
    assert!(console.saw("stats"));
    assert_eq!(table.players()[0].cash(), 100);
}

#[test]
fn quitting_at_the_first_bet_ends_the_session() {
    let mut table = Table::new(TableOptions::default(), ["Ann"], 5).expect("table opens");
    let mut console = Script::new(&[], &[]);

    let stats = table.play(&mut console).expect("quit is not an error");
    assert_eq!(stats.games, 1);
    assert_eq!(stats.rounds, 0);
    assert_eq!(stats.total_cash(), 1000);
    assert_eq!(
        stats.to_string(),
        "Ann: 1 hand(s) [Cash: 1000]\nYou played 1 game(s) and 0 round(s)."
    );
}

#[test]
fn quitting_mid_hand_refunds_the_stake() {
    let mut table = table(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
    ]);
    let mut console = Script::new(&[10], &[]);

    let stats = table.play(&mut console).expect("quit is not an error");
    assert_eq!(stats.rounds, 0);
    assert_eq!(table.players()[0].cash(), 100);
}

#[test]
fn quitting_at_a_decision_puts_the_drawn_card_back() {
    let mut table = table(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
    ]);
    let mut console = Script::new(&[10], &[]);

    assert_eq!(
        table.play_round(&mut console),
        Err(RoundError::Quit(Quit))
    );
    let left: Vec<Card> = table.shoe.cards().copied().collect();
    assert_eq!(left, [card(Rank::Five, Suit::Spades)]);
    assert_eq!(table.players()[0].cash(), 100);
    assert_eq!(table.players()[0].total_bet(), 0);
}

#[test]
fn rounds_continue_while_the_shoe_lasts() {
    let mut table = table(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Seven, Suit::Spades),
    ]);
    let mut console = Script::new(&[10, 10], &[Move::Stand, Move::Stand]);

    let stats = table.play(&mut console).expect("session ends on quit");
    assert_eq!(stats.games, 1);
    assert_eq!(stats.rounds, 2);
    assert_eq!(stats.total_cash(), 120);
    assert!(console.asked_games.is_empty());
}

#[test]
fn a_new_game_reshuffles_a_full_shoe() {
    let mut table = table(&[
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::King, Suit::Clubs),
    ]);
    let mut console = Script::new(&[10], &[]);
    console.answers.push_back(true);

    let stats = table.play(&mut console).expect("session ends on quit");
    assert_eq!(console.asked_games, [2]);
    assert_eq!(stats.games, 2);
    assert_eq!(stats.rounds, 1);
    assert_eq!(table.shoe.len(), 52);
    assert_eq!(table.players()[0].cash(), 90);
}

#[test]
fn declining_a_new_game_ends_the_session() {
    let mut table = table(&[
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::King, Suit::Clubs),
    ]);
    let mut console = Script::new(&[10], &[]);
    console.answers.push_back(false);

    let stats = table.play(&mut console).expect("session ends");
    assert_eq!(console.asked_games, [2]);
    assert_eq!(stats.games, 1);
    assert!(table.shoe.is_empty());
}

#[test]
fn broke_players_leave_the_table() {
    let options = TableOptions::default().with_starting_cash(10);
    let mut table = table_with(
        options,
        &[
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::King, Suit::Clubs),
            card(Rank::Two, Suit::Clubs),
        ],
    );
    let mut console = Script::new(&[10, 10], &[]);

    let stats = table.play(&mut console).expect("session ends");
    assert!(table.players().is_empty());
    assert_eq!(table.losers().len(), 1);
    assert_eq!(stats.rounds, 1);
    assert_eq!(stats.players[0].cash, 0);
    assert_eq!(console.bets.len(), 1);
    assert!(console.asked_games.is_empty());
}
