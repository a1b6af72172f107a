//! Configuration for a Maze Runner game.

use crate::error::{GameError, GameResult};
use crate::geometry::BOARD_SIZE;

/// Configuration for a single game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible placement, chases, and relic draws.
    pub seed: u64,
    /// Number of treasure tiles placed at setup.
    pub treasures: usize,
    /// Number of trap tiles placed at setup.
    pub traps: usize,
    /// Health the player starts with.
    pub starting_health: i32,
    /// Health cap for healing effects.
    pub max_health: i32,
    /// Chance that an ambient event fires on an empty tile.
    pub ambient_chance: f64,
    /// Stop after this many completed turns. Only the demo driver sets it.
    pub max_turns: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            treasures: 4,
            traps: 5,
            starting_health: 5,
            max_health: 7,
            ambient_chance: 0.3,
            max_turns: None,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of treasures placed at setup.
    pub fn with_treasures(mut self, treasures: usize) -> Self {
        self.treasures = treasures;
        self
    }

    /// Set the number of traps placed at setup.
    pub fn with_traps(mut self, traps: usize) -> Self {
        self.traps = traps;
        self
    }

    /// Set the ambient event chance (clamped to 0.0-1.0).
    pub fn with_ambient_chance(mut self, chance: f64) -> Self {
        self.ambient_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Cap the session at a number of completed turns.
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    /// Number of tiles drawn at setup: guardian, treasures, traps, and exit.
    pub fn placements(&self) -> usize {
        1 + self.treasures + self.traps + 1
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> GameResult<()> {
        if self.starting_health <= 0 {
            return Err(GameError::InvalidConfig(
                "starting health must be positive".to_string(),
            ));
        }
        if self.max_health < self.starting_health {
            return Err(GameError::InvalidConfig(format!(
                "max health {} is below starting health {}",
                self.max_health, self.starting_health
            )));
        }
        if !(0.0..=1.0).contains(&self.ambient_chance) {
            return Err(GameError::InvalidConfig(format!(
                "ambient chance {} is outside 0.0-1.0",
                self.ambient_chance
            )));
        }
        // One tile is reserved for the player's start.
        let available = (BOARD_SIZE * BOARD_SIZE) as usize - 1;
        if self.placements() > available {
            return Err(GameError::NotEnoughTiles {
                requested: self.placements(),
                available,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.treasures, 4);
        assert_eq!(cfg.traps, 5);
        assert_eq!(cfg.starting_health, 5);
        assert_eq!(cfg.max_health, 7);
        assert!((cfg.ambient_chance - 0.3).abs() < f64::EPSILON);
        assert!(cfg.max_turns.is_none());
        assert_eq!(cfg.placements(), 11);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(7)
            .with_treasures(2)
            .with_traps(1)
            .with_max_turns(60);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.treasures, 2);
        assert_eq!(cfg.traps, 1);
        assert_eq!(cfg.max_turns, Some(60));
    }

    #[test]
    fn ambient_chance_clamped() {
        let cfg = GameConfig::default().with_ambient_chance(2.5);
        assert!((cfg.ambient_chance - 1.0).abs() < f64::EPSILON);
        let cfg = GameConfig::default().with_ambient_chance(-1.0);
        assert!(cfg.ambient_chance.abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_overfull_board() {
        let cfg = GameConfig::default().with_traps(60);
        assert!(matches!(
            cfg.validate(),
            Err(GameError::NotEnoughTiles { available: 48, .. })
        ));
    }

    #[test]
    fn rejects_inverted_health() {
        let cfg = GameConfig {
            max_health: 3,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));

        let cfg = GameConfig {
            starting_health: 0,
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
