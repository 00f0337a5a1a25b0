//! Detective Quest: Mystery Mansion
//!
//! Walk the mansion, collect clues, accuse the culprit.

use detective_quest::console::{App, Theme};
use detective_quest::game::{Game, GameConfig};
use std::io::{self, stdout};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never mix with the game text
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut game = Game::new(GameConfig::default())?;

    let report = {
        let mut app = App::new(io::stdin().lock(), stdout().lock(), Theme::detect());
        app.run(&mut game)?
    };
    tracing::info!(outcome = ?report.outcome(), clues = report.clues.len(), "session over");

    println!("\nObrigado por jogar Detective Quest!");

    Ok(())
}
