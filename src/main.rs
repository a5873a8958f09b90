#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use fleetgrid::{
    apply_abilities, init_logging, place_fleet, run_guess_loop, Board, DebugView, GameSession,
    LineSource, LoopOutcome, RandomShooter, ABILITIES, FLEET,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Skip printing the raw setup boards.
    #[arg(long, global = true)]
    hide_setup: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Guess cells typed on standard input (the default).
    Play,
    /// Let a random shooter play the session.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut board = Board::new();
    place_fleet(&mut board, &FLEET)?;
    if !cli.hide_setup {
        write!(out, "{}", DebugView(&board))?;
    }

    apply_abilities(&mut board, &ABILITIES)?;
    if !cli.hide_setup {
        write!(out, "\n{}", DebugView(&board))?;
    }

    let mut session = GameSession::new(board);
    let outcome = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let stdin = io::stdin();
            let mut source = LineSource::new(stdin.lock());
            run_guess_loop(&mut session, &mut source, &mut out)?
        }
        Commands::Auto { seed } => {
            let rng = if let Some(s) = seed {
                writeln!(out, "Using fixed seed: {} (game will be reproducible)", s)?;
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut source = RandomShooter::new(rng);
            run_guess_loop(&mut session, &mut source, &mut out)?
        }
    };

    if let LoopOutcome::InputClosed(summary) = outcome {
        log::info!(
            "input closed after {} attempts with {} ship cells left",
            summary.attempts,
            summary.remaining
        );
    }
    Ok(())
}
