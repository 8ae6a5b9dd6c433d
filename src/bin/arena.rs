use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::ai::{SearchEngine, Strength};
use connect_four::arena::play_match;
use connect_four::game::Player;

/// Pit two engine strengths against each other.
#[derive(Parser)]
#[command(name = "arena", about = "Play Connect Four engines against each other")]
struct Cli {
    /// Strength of the Red (first) engine
    #[arg(long, default_value = "hard")]
    red: Strength,

    /// Strength of the Yellow (second) engine
    #[arg(long, default_value = "random")]
    yellow: Strength,

    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Seed for reproducible matches
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum nodes per search
    #[arg(long)]
    node_limit: Option<u64>,
}

fn engine(
    player: Player,
    strength: Strength,
    seed: Option<u64>,
    node_limit: Option<u64>,
) -> SearchEngine {
    let engine = match seed {
        Some(seed) => SearchEngine::with_seed(player, strength, seed),
        None => SearchEngine::new(player, strength),
    };
    engine.with_node_limit(node_limit)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.games == 0 {
        bail!("--games must be at least 1");
    }
    if cli.node_limit == Some(0) {
        bail!("--node-limit must be at least 1");
    }

    let mut red = engine(Player::Red, cli.red, cli.seed, cli.node_limit);
    let mut yellow = engine(
        Player::Yellow,
        cli.yellow,
        cli.seed.map(|seed| seed.wrapping_add(1)),
        cli.node_limit,
    );

    println!("{} (Red) vs {} (Yellow), {} games", cli.red, cli.yellow, cli.games);
    println!("-------------------------------------------");

    let tally = play_match(&mut red, &mut yellow, cli.games);

    println!(
        "Red wins: {} ({:.1}%)",
        tally.red_wins,
        tally.win_rate(Player::Red) * 100.0
    );
    println!(
        "Yellow wins: {} ({:.1}%)",
        tally.yellow_wins,
        tally.win_rate(Player::Yellow) * 100.0
    );
    println!("Draws: {} ({:.1}%)", tally.draws, tally.draw_rate() * 100.0);

    Ok(())
}
