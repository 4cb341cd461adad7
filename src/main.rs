//! Awale-Engine: a minimax player for a three-seed Mancala variant.
//!
//! ## Usage
//!
//! - `awale-engine` - Play against the arbiter on stdin/stdout
//! - `awale-engine play --depth 6` - Same, with an explicit search depth
//! - `awale-engine analyze STATE A 0 0 0 1:2,2,2;...` - Score a position
//! - `awale-engine demo --seed 7` - Watch the engine play a random opponent
//!
//! Diagnostics go to stderr (`-v`, `-vv` or `RUST_LOG`); stdout carries only
//! protocol output.

use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use awale_engine::arbiter::ArbiterSession;
use awale_engine::board::{Board, Player};
use awale_engine::constants::SEARCH_DEPTH;
use awale_engine::playout::{leader, random_action};
use awale_engine::search::{best_move_at_depth, pick_best, search_root};
use awale_engine::snapshot::Snapshot;
use awale_engine::sowing::{apply_action, is_terminal};

/// Awale-Engine: a minimax player for a three-seed Mancala variant
#[derive(Parser)]
#[command(name = "awale-engine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the arbiter over stdin/stdout
    Play {
        /// Search depth in plies
        #[arg(short, long, default_value_t = SEARCH_DEPTH)]
        depth: u32,
        /// Search on a single thread
        #[arg(long)]
        sequential: bool,
    },
    /// Print the score of every legal action in a STATE position
    Analyze {
        /// The position, e.g. `STATE A 0 0 0 1:2,2,2;2:2,2,2;...`
        #[arg(required = true, num_args = 1..)]
        state: Vec<String>,
        /// Search depth in plies
        #[arg(short, long, default_value_t = SEARCH_DEPTH)]
        depth: u32,
    },
    /// Play the engine (A) against a random opponent (B)
    Demo {
        /// Seed for the random opponent
        #[arg(short, long, default_value_t = 1)]
        seed: u64,
        /// Search depth in plies
        #[arg(short, long, default_value_t = 4)]
        depth: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Some(Commands::Play { depth, sequential }) => run_session(depth, !sequential),
        Some(Commands::Analyze { state, depth }) => analyze(&state.join(" "), depth),
        Some(Commands::Demo { seed, depth }) => {
            run_demo(seed, depth);
            Ok(())
        }
        None => run_session(SEARCH_DEPTH, true),
    }
}

fn run_session(depth: u32, parallel: bool) -> anyhow::Result<()> {
    let mut session = ArbiterSession::with_depth(depth).parallel(parallel);
    session.run(io::stdin().lock(), io::stdout().lock())
}

fn analyze(state: &str, depth: u32) -> anyhow::Result<()> {
    let snap: Snapshot = state
        .parse()
        .with_context(|| format!("invalid position {state:?}"))?;
    println!("{}", snap.board);

    let scored = search_root(&snap.board, snap.to_move, depth);
    for (action, score) in &scored {
        println!("{action:>5} {score:>6}");
    }
    match pick_best(scored) {
        Some((action, score)) => println!("best: {action} ({score})"),
        None => println!("best: none, {} has no legal move", snap.to_move),
    }
    Ok(())
}

fn run_demo(seed: u64, depth: u32) {
    println!("Awale-Engine: engine (A, depth {depth}) vs random (B, seed {seed})\n");

    let mut rng = fastrand::Rng::with_seed(seed);
    let mut board = Board::new();
    let mut to_move = Player::A;

    while !is_terminal(&board) {
        let action = match to_move {
            Player::A => best_move_at_depth(&board, to_move, depth).map(|(a, _)| a),
            Player::B => random_action(&board, to_move, &mut rng),
        };
        let Some(action) = action else {
            println!("{to_move} has no legal move");
            break;
        };
        let outcome = apply_action(&mut board, to_move, &action);
        println!(
            "{:>3}. {to_move} {action:<4} captures {:>2}{}",
            board.ply,
            outcome.captured,
            if outcome.famine > 0 { " (famine)" } else { "" }
        );
        to_move = to_move.opponent();
    }

    println!("\n{board}");
    match leader(&board) {
        Some(p) => println!("Winner: {p}"),
        None => println!("Draw"),
    }
}
