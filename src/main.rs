mod config;
mod error;
mod game;
mod geometry;
mod input;
mod render;
mod snake;
mod state;
mod term;

use std::process::exit;
use std::sync::mpsc;

use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::game::GameLoop;
use crate::state::GameState;
use crate::term::TermManager;

fn main() {
    init_tracing();

    match run() {
        Ok(score) => println!("Thanks for playing! Final score: {}", score),
        Err(err) => {
            tracing::error!(%err, "fatal");
            eprintln!("snake: {}", err);
            exit(1);
        }
    }
}

fn run() -> Result<u32> {
    // Dropping the loop (and the terminal it owns) restores the terminal
    // before main prints anything.
    let term = TermManager::setup()?;

    let (tx, rx) = mpsc::channel();
    input::spawn_reader(tx)?;

    let mut game = GameLoop::new(GameState::new(), term, rx, config::TICK_INTERVAL);
    game.run()?;
    Ok(game.state().score())
}

// Logs go to stderr so they never end up on the game screen, e.g.
// `RUST_LOG=debug snake 2> snake.log`. Silent unless RUST_LOG is set.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(%info, "panic");
        default_hook(info);
    }));
}
