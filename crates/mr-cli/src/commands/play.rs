//! Interactive play on stdin/stdout.

use std::io;

use mr_core::{Game, GameConfig};

use crate::console::{ConsoleObserver, StdinSource};

/// Play an interactive game seeded with `seed`.
pub fn run(seed: u64) -> Result<(), String> {
    let config = GameConfig::default().with_seed(seed);
    let mut game = Game::new(config).map_err(|e| format!("failed to start game: {e}"))?;

    let stdin = io::stdin();
    let mut source = StdinSource::new(stdin.lock());
    let mut observer = ConsoleObserver::interactive();

    super::run_session(&mut game, &mut source, &mut observer)?;
    Ok(())
}
