use std::io;

use fleetgrid::{run_guess_loop, setup_board, GameSession, RandomShooter, ABILITIES, FLEET};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    fleetgrid::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let board = setup_board(&FLEET, &ABILITIES)?;
    let mut session = GameSession::new(board);
    let mut shooter = RandomShooter::new(SmallRng::seed_from_u64(seed));
    let outcome = run_guess_loop(&mut session, &mut shooter, &mut io::sink())?;

    let result = json!({
        "seed": seed,
        "summary": outcome.summary(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
