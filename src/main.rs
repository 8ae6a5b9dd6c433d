use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::ai::Strength;
use connect_four::config::AppConfig;
use connect_four::game::{Board, GameStatus, Player};

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the engine strength: random, easy, medium, hard or master
    #[arg(long)]
    strength: Option<Strength>,

    /// Override the engine's random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer move first
    #[arg(long)]
    play_second: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(strength) = cli.strength {
        config.engine.strength = strength;
    }
    if cli.seed.is_some() {
        config.engine.seed = cli.seed;
    }
    if cli.play_second {
        config.game.human_player = Player::Yellow;
    }

    let human = config.game.human_player;
    let mut engine = config.engine.build(human.opponent());
    let mut board = Board::new();

    println!("WELCOME TO CONNECT FOUR.");
    println!("You play {} ({}).", human.name(), human.glyph());
    println!(
        "The computer plays {} ({}) at {} strength.",
        human.opponent().name(),
        human.opponent().glyph(),
        engine.strength()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut to_move = Player::Red;

    while !board.is_terminal() {
        if to_move == human {
            println!("{board}");
            if !play_human_move(&mut lines, &mut board, human)? {
                println!("Goodbye.");
                return Ok(());
            }
        } else {
            let column = engine.find_best_move(&mut board);
            board
                .drop_piece(column, to_move)
                .with_context(|| format!("engine chose column {column}"))?;
            println!("The computer dropped in column {column}.");
        }
        to_move = to_move.opponent();
    }

    println!("FINAL BOARD:");
    println!("{board}");
    match board.status() {
        GameStatus::Won(winner) if winner == human => println!("You won!"),
        GameStatus::Won(_) => println!("The computer won."),
        _ => println!("The game ended in a draw."),
    }

    Ok(())
}

/// Prompt until the human makes a legal move. Returns false on end of input.
fn play_human_move(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    board: &mut Board,
    human: Player,
) -> Result<bool> {
    loop {
        print!("Select a column to drop a piece in [1, 7]: ");
        io::stdout().flush().context("flushing stdout")?;

        let Some(line) = lines.next() else {
            return Ok(false);
        };
        let line = line.context("reading input")?;

        let column = match line.trim().parse::<usize>() {
            Ok(column) => column,
            Err(_) => {
                println!("Please enter a number from 1 to 7.");
                continue;
            }
        };

        match board.drop_piece(column, human) {
            Ok(_) => return Ok(true),
            Err(err) => println!("Invalid move: {err}."),
        }
    }
}
