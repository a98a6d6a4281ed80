use std::io;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rookery_play::{Session, SessionConfig};

/// Build the session configuration from command-line flags.
///
/// Unknown flags are reported and skipped.
fn config_from_args(args: impl Iterator<Item = String>) -> SessionConfig {
    let mut config = SessionConfig::default();
    for arg in args {
        match arg.as_str() {
            "--clear" => config.clear_screen = true,
            "--no-hints" => config.show_legal_moves = false,
            other => warn!(flag = other, "ignoring unknown flag"),
        }
    }
    config
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = config_from_args(std::env::args().skip(1));
    info!(?config, "rookery starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    match session.run().context("game session failed")? {
        Some(outcome) => info!(%outcome, "game over"),
        None => info!("left before the game finished"),
    }
    Ok(())
}
