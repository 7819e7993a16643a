//! Line-oriented terminal console.

use core::fmt::Display;
use std::io::{BufRead, Write};

use bjsim::{Console, Hand, HandOutcome, Move, Player, Quit, TableEvent};

const INSTRUCTIONS: &str = "
For instructions, press i.
For statistics on the current game, press m.
To quit, press q.

These are the actions you can perform on each hand:
 [h]it => press h
 [s]tand => press s
 [d]ouble => press d
 s[p]lit => press p

Blackjack pays 3:2, rounded down to the whole dollar.

Have Fun!!
";

pub struct Terminal<R, W> {
    input: R,
    output: W,
    debug: bool,
    closed: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub const fn new(input: R, output: W, debug: bool) -> Self {
        Self {
            input,
            output,
            debug,
            closed: false,
        }
    }

    /// Writes a message. Once a write fails every later prompt quits.
    pub fn say(&mut self, message: impl Display) {
        if self.closed {
            return;
        }
        let written = writeln!(self.output, "\n{message}").and_then(|()| self.output.flush());
        if let Err(err) = written {
            log::warn!("terminal output closed: {err}");
            self.closed = true;
        }
    }

    pub fn welcome(&mut self) {
        self.say("Welcome to BlackJack!\nFor instructions, press i.\nTo quit, press q.");
    }

    /// Prompts until a line is entered. An empty line yields `default`.
    fn prompt(&mut self, message: &str, default: &str) -> Result<String, Quit> {
        loop {
            self.say(message);
            if self.closed {
                return Err(Quit);
            }
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Err(Quit),
                Ok(_) => {}
            }

            let line = line.trim();
            match line.to_ascii_lowercase().as_str() {
                "q" => return Err(Quit),
                "i" => self.say(INSTRUCTIONS),
                "" => return Ok(default.to_string()),
                _ => return Ok(line.to_string()),
            }
        }
    }

    /// Prompts until `accept` returns a value.
    fn prompt_with<T>(
        &mut self,
        message: &str,
        default: &str,
        accept: impl Fn(&str) -> Option<T>,
    ) -> Result<T, Quit> {
        loop {
            let answer = self.prompt(message, default)?;
            if let Some(value) = accept(&answer) {
                return Ok(value);
            }
            self.say("Please try again!");
        }
    }

    fn prompt_positive(&mut self, message: &str, default: u64) -> Result<u64, Quit> {
        self.prompt_with(message, &default.to_string(), |answer| {
            answer.parse::<u64>().ok().filter(|&value| value > 0)
        })
    }

    pub fn shoe_size(&mut self) -> Result<u8, Quit> {
        self.prompt_with("Number of decks at table? [1]", "1", |answer| {
            answer.parse::<u8>().ok().filter(|&value| value > 0)
        })
    }

    pub fn default_cash(&mut self, current: u64) -> Result<u64, Quit> {
        self.prompt_positive(&format!("How much cash per player? [{current}]"), current)
    }

    pub fn player_count(&mut self) -> Result<u8, Quit> {
        self.prompt_with("Number of players? [1]", "1", |answer| {
            answer.parse::<u8>().ok().filter(|&value| value > 0)
        })
    }

    pub fn player_name(&mut self, seat: u8) -> Result<String, Quit> {
        let default = format!("Player {seat}");
        self.prompt(&format!("Player Name? [{default}]"), &default)
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn bet(&mut self, player: &Player, min: u64, max: u64, step: u64) -> Result<u64, Quit> {
        let message = format!(
            "{}, what is your initial bet? [{min}...{max}] by {step}? [{min}]",
            player.name()
        );
        self.prompt_with(&message, &min.to_string(), |answer| {
            answer.parse::<u64>().ok()
        })
    }

    fn next_move(&mut self, player: &Player, hand: &Hand) -> Result<Move, Quit> {
        let mut options = String::from("You can [h]it");
        options.push_str("\nor [s]tand");
        if hand.can_double_under(player.rules().double_after_split) {
            options.push_str("\nor [d]ouble down");
        }
        if hand.can_split_by(player.rules().split_match) {
            options.push_str("\nor s[p]lit");
        }
        self.say(options);

        let answer = self.prompt("What would you like to do? [h]:", "h")?;
        Ok(Move::from_token(&answer))
    }

    fn continue_play(&mut self, game: u32) -> Result<bool, Quit> {
        let message =
            format!("Would you like to continue playing? [no]\n This will be game {game}");
        self.prompt_with(&message, "no", |answer| {
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => Some(true),
                "n" | "no" => Some(false),
                _ => None,
            }
        })
    }

    fn event(&mut self, event: TableEvent<'_>) {
        match event {
            TableEvent::RoundStarted { game, round } => {
                self.say(format!("\n\n\n-------Game {game}, Round {round}------"));
            }
            TableEvent::Shoe(shoe) if self.debug => self.say(shoe),
            TableEvent::Dealt { players, dealer } if self.debug => {
                for player in players.iter().chain([dealer]) {
                    for hand in player.hands() {
                        self.say(format!("{player} ------ {hand}"));
                    }
                }
            }
            TableEvent::Shoe(_) | TableEvent::Dealt { .. } => {}
            TableEvent::DealerShows { dealer, card } => {
                self.say(format!("{} has: {card}\n", dealer.name()));
            }
            TableEvent::Hand { player, hand } => {
                self.say(format!("{} has hand: {hand}.", player.name()));
            }
            TableEvent::Blackjack { .. } => self.say("Nice job with the BJ! Let's stay put."),
            TableEvent::Settling => {
                self.say("\n ---------------- TIME TO SETTLE ---------------- \n");
            }
            TableEvent::Outcome { player, result } => {
                let name = player.name();
                let cash = player.cash();
                let message = match result.outcome {
                    HandOutcome::Push => {
                        format!("Oh, darn! {name} doesn't get anything that round! Now at ${cash}.")
                    }
                    HandOutcome::DealerWins => {
                        format!("Looks like the dealer got this one! {name} is left with ${cash}")
                    }
                    HandOutcome::Blackjack => format!(
                        "CONGRATULATIONS! {name} is paid ${} on ${} and now has ${cash}!",
                        result.payout, result.bet
                    ),
                    HandOutcome::PlayerWins => format!("A normal win. Now {name} has ${cash}"),
                };
                self.say(message);
            }
            TableEvent::Retry => self.say("Please try again!"),
            TableEvent::OutOfCards => {
                self.say("---Dealer ran out of cards this round! The round could not be completed; bets are returned.---\n");
            }
            TableEvent::Stats(stats) => self.say(stats),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use bjsim::{Card, HandResult, Player, Rank, Suit};

    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    fn output(terminal: Terminal<Cursor<&[u8]>, Vec<u8>>) -> String {
        String::from_utf8(terminal.output).expect("utf-8 output")
    }

    #[test]
    fn closed_output_quits_at_the_next_prompt() {
        let mut terminal = Terminal::new(Cursor::new(&b"3\n"[..]), ClosedPipe, false);
        assert_eq!(terminal.shoe_size(), Err(Quit));
    }

    #[test]
    fn empty_answer_takes_the_default() {
        let mut terminal = Terminal::new(Cursor::new(&b"\n7\n"[..]), Vec::new(), false);
        assert_eq!(terminal.shoe_size(), Ok(1));
        assert_eq!(terminal.player_count(), Ok(7));
        assert_eq!(terminal.shoe_size(), Err(Quit));
    }

    #[test]
    fn help_mentions_blackjack_rounding() {
        let mut terminal = Terminal::new(Cursor::new(&b"i\nq\n"[..]), Vec::new(), false);
        assert_eq!(terminal.player_count(), Err(Quit));
        assert!(output(terminal).contains("rounded down to the whole dollar"));
    }

    #[test]
    fn blackjack_outcome_shows_the_payout() {
        let mut terminal = Terminal::new(Cursor::new(&b""[..]), Vec::new(), false);
        let player = Player::new("Ann", 112);
        let result = HandResult {
            hand_index: 0,
            outcome: HandOutcome::Blackjack,
            bet: 5,
            payout: 12,
            player_total: 21,
        };
        terminal.event(TableEvent::Outcome {
            player: &player,
            result: &result,
        });
        terminal.event(TableEvent::DealerShows {
            dealer: &player,
            card: Card::new(Rank::Ace, Suit::Spades),
        });

        let shown = output(terminal);
        assert!(shown.contains("Ann is paid $12 on $5 and now has $112!"));
        assert!(shown.contains("Ann has: A(S)"));
    }
}
