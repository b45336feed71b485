//! Play Indigo against the computer in the terminal.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use indigo::console::StdConsole;
use indigo::{Game, GameOptions};

#[derive(Parser)]
#[command(name = "indigo", about = "Play the Indigo card game against the computer")]
struct Args {
    /// Seed for the shuffle and the computer's choices (default: current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Do not print the computer's hand before its moves
    #[arg(long)]
    hide_computer_hand: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    #[expect(
        clippy::cast_possible_truncation,
        reason = "the low bits of the clock are enough for a seed"
    )]
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    });
    log::info!("seed {seed}");

    let options = GameOptions::default().with_reveal_computer_hand(!args.hide_computer_hand);
    let mut game = Game::new(options, seed);

    match indigo::session::run(&mut game, &mut StdConsole::stdio()) {
        Ok(end) => {
            log::debug!("session ended: {end:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
