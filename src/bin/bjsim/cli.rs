use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "bjsim", version, about = "Play blackjack at a single terminal table")]
pub struct Args {
    /// Set the player's starting cash
    #[arg(short, long, allow_negative_numbers = true)]
    pub cash: Option<i64>,

    /// Debug mode; shows the shoe and the dealer's hand
    #[arg(short, long)]
    pub debug: bool,

    /// Seed for the shuffle (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of decks in the shoe (prompted for when omitted)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    pub decks: Option<u8>,

    /// Number of players (prompted for when omitted)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    pub players: Option<u8>,
}
