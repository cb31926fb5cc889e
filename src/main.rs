use std::fs::OpenOptions;
use std::io::{stdout, BufWriter};
use std::path::Path;
use std::sync::Mutex;

use rand::thread_rng;

use grid_invaders::config::GameConfig;
use grid_invaders::constants::CONFIG_FILE;
use grid_invaders::display::TerminalDisplay;
use grid_invaders::error::GameError;
use grid_invaders::game::Game;
use grid_invaders::input::TerminalInput;

/// Route `tracing` output to a file; the terminal belongs to the game.
/// Without a log file no subscriber is installed.
fn init_logging(log_file: Option<&Path>) -> Result<(), GameError> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), GameError> {
    let config = GameConfig::load(CONFIG_FILE)?;
    init_logging(config.log_file.as_deref())?;
    tracing::info!(
        path = CONFIG_FILE,
        width = config.width,
        height = config.height,
        tick_interval_ms = config.tick_interval_ms,
        "configuration loaded"
    );

    let mut display = TerminalDisplay::new(BufWriter::new(stdout()));
    display.enter()?;

    let mut game = Game::new(&config, display, TerminalInput, thread_rng());
    let result = game.run();

    // Restore before printing the score.  Panics are covered by the
    // display's `Drop`.
    let mut display = game.into_display();
    let restored = display.restore();

    let score = result?;
    restored?;
    println!("Game Over! Score: {score}");
    Ok(())
}
