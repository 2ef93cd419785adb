//! Headless PerfectFit runner (default binary).
//!
//! Plays seeded games with the greedy policy and prints one JSON summary line per
//! game on stdout (plus observation lines with `--observe`). Logs go to stderr;
//! set `RUST_LOG=debug` to see every turn.

use std::io::{self, Write};

use anyhow::Result;

use perfect_fit::adapter::to_json_line;
use perfect_fit::autoplay::play_game;
use perfect_fit::config::RunConfig;
use perfect_fit::core::GameState;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = RunConfig::from_env().with_args(&args)?;
    tracing::info!(?config, "starting autoplay");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for game in 0..config.games {
        let mut state = GameState::new(config.seed.wrapping_add(game));
        let observe = config.observe;
        let summary = play_game(&mut state, config.max_turns, |obs| {
            if observe {
                writeln!(out, "{}", to_json_line(&obs)?)?;
            }
            Ok(())
        })?;
        writeln!(out, "{}", to_json_line(&summary)?)?;
    }

    out.flush()?;
    Ok(())
}
