//! Automated demo runs driven by the autopilot.

use mr_core::{Autopilot, Game, GameConfig};

use crate::console::ConsoleObserver;

/// Let the autopilot play up to `turns` turns.
pub fn run(seed: u64, turns: u32) -> Result<(), String> {
    let config = GameConfig::default()
        .with_seed(seed)
        .with_max_turns(turns);
    let mut game = Game::new(config).map_err(|e| format!("failed to start demo: {e}"))?;

    // Pilot rolls come from their own stream, offset from the game seed.
    let mut pilot = Autopilot::new(seed.wrapping_add(1));
    let mut observer = ConsoleObserver::demo();

    let outcome = super::run_session(&mut game, &mut pilot, &mut observer)?;
    log::info!("demo finished: {outcome} after {} turns", game.turns());
    Ok(())
}
