use std::time::Instant;

use anyhow::{bail, Context, Result};
use connectx::config::{BoardKind, GameConfig};
use connectx::outcome::GameOutcome;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

const GAMES: u64 = 50;

/// Play one random game to the end and return its outcome.
fn play_random(config: &GameConfig, seed: u64) -> Result<GameOutcome> {
    let mut game = config.new_game()?;
    let mut rng = StdRng::seed_from_u64(seed);

    loop {
        let legal = game.legal_columns();
        let col = *legal
            .choose(&mut rng)
            .context("no legal column left before the game ended")?;
        if let Some(outcome) = game.play(col)? {
            return Ok(outcome);
        }
    }
}

fn profile(config: &GameConfig) -> Result<Vec<GameOutcome>> {
    let start = Instant::now();
    let outcomes = (0..GAMES)
        .map(|seed| play_random(config, seed))
        .collect::<Result<Vec<_>>>()?;
    let elapsed = start.elapsed();

    let ties = outcomes.iter().filter(|o| o.is_tie()).count();
    info!(
        kind = ?config.kind,
        rows = config.rows,
        columns = config.columns,
        games = GAMES,
        ties,
        ?elapsed,
        "profiled random games"
    );
    println!(
        "{:?} {}x{} K={}: {} games in {:.2?} ({} ties)",
        config.kind, config.rows, config.columns, config.win_length, GAMES, elapsed, ties
    );

    Ok(outcomes)
}

fn run() -> Result<()> {
    let shapes = [(6, 7, 4, 2), (10, 12, 5, 3), (15, 15, 5, 10)];

    for (rows, columns, win_length, players) in shapes {
        let config = GameConfig::new(rows, columns, win_length, players);
        let dense = profile(&config.clone().with_kind(BoardKind::Dense))?;
        let sparse = profile(&config.with_kind(BoardKind::Sparse))?;
        if dense != sparse {
            bail!("dense and sparse boards disagree on a {}x{} board", rows, columns);
        }
    }

    Ok(())
}

#[cfg_attr(feature = "hotpath", hotpath::main)]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
