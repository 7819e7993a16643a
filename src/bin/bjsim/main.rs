//! Terminal blackjack.

mod cli;
mod terminal;

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{Quit, Table, TableOptions};
use clap::Parser;

use crate::terminal::Terminal;

struct Setup {
    options: TableOptions,
    names: Vec<String>,
}

fn setup<R, W>(
    terminal: &mut Terminal<R, W>,
    args: &cli::Args,
    mut options: TableOptions,
) -> Result<Setup, Quit>
where
    R: io::BufRead,
    W: io::Write,
{
    let decks = match args.decks {
        Some(decks) => decks,
        None => terminal.shoe_size()?,
    };
    options = options.with_decks(decks);

    let cash = terminal.default_cash(options.starting_cash)?;
    options = options.with_starting_cash(cash);

    let count = match args.players {
        Some(count) => count,
        None => terminal.player_count()?,
    };
    let mut names = Vec::with_capacity(usize::from(count));
    for seat in 1..=count {
        names.push(terminal.player_name(seat)?);
    }

    Ok(Setup { options, names })
}

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout(), args.debug);
    terminal.welcome();

    let mut options = TableOptions::default();
    match args.cash {
        Some(cash) if cash > 0 => options = options.with_starting_cash(cash.unsigned_abs()),
        Some(_) => terminal.say(format!(
            "Incorrect amount of cash to begin game. Defaulting to ${}.",
            options.starting_cash
        )),
        None => {}
    }

    let Ok(Setup { options, names }) = setup(&mut terminal, &args, options) else {
        return Ok(());
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::debug!("shuffling with seed {seed}");

    let mut table = Table::new(options, names, seed)?;
    table.play(&mut terminal)?;
    Ok(())
}
