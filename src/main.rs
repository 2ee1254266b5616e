//! Hot-seat console game for 2-5 players at one terminal.

use clap::Parser;

use kitten_rules::io::{ConsoleInput, ConsoleOutput};
use kitten_rules::session::{GameOutcome, GameSession, TableBuilder};

/// An Exploding Kittens-style card game, played hot-seat.
#[derive(Parser, Debug)]
#[command(name = "kitten-rules")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=5))]
    players: u8,

    /// Random seed (default: from system entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Opening hand size, counting the guaranteed Defuse
    #[arg(long, default_value_t = 5)]
    hand_size: usize,

    /// Turn cap before the session gives up
    #[arg(long, default_value_t = 500)]
    max_turns: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    println!("Seed: {}", seed);

    let state = TableBuilder::new()
        .player_count(args.players as usize)
        .starting_hand_size(args.hand_size)
        .build(seed);

    let mut input = ConsoleInput::stdio();
    let mut output = ConsoleOutput::stdout();
    let outcome = GameSession::new(state, &mut input, &mut output)
        .with_max_turns(args.max_turns)
        .run();

    if outcome == GameOutcome::TurnLimit {
        println!("Turn cap reached, nobody wins.");
    }
}
