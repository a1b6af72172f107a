//! A simple automated player for demo runs.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::engine::{Command, CommandSource};
use crate::geometry::{Direction, nearest_position, within_bounds};
use crate::world::World;

/// Plays the game without user input.
///
/// Fires the mystic pulse once, then walks toward the nearest remaining
/// treasure, or the exit once every treasure is gone. Distance-reducing
/// moves are tried in random order before the rest of the direction table.
#[derive(Debug)]
pub struct Autopilot {
    rng: StdRng,
    pulse_used: bool,
}

impl Autopilot {
    /// Create an autopilot with its own seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            pulse_used: false,
        }
    }

    /// Choose the next command for `world`.
    pub fn choose(&mut self, world: &World) -> Command {
        let player = &world.player;
        if player.pulse_available && !self.pulse_used {
            self.pulse_used = true;
            return Command::Pulse;
        }

        let target = nearest_position(player.position, &world.treasures).unwrap_or(world.exit);
        let here = player.position;

        let mut moves = Vec::with_capacity(4);
        if target.row < here.row {
            moves.push(Direction::North);
        }
        if target.row > here.row {
            moves.push(Direction::South);
        }
        if target.col < here.col {
            moves.push(Direction::West);
        }
        if target.col > here.col {
            moves.push(Direction::East);
        }
        moves.shuffle(&mut self.rng);
        for direction in Direction::ALL {
            if !moves.contains(&direction) {
                moves.push(direction);
            }
        }

        moves
            .into_iter()
            .find(|d| within_bounds(here.offset(*d)))
            .map(Command::Move)
            .unwrap_or(Command::Quit)
    }
}

impl CommandSource for Autopilot {
    fn next_command(&mut self, world: &World) -> Option<String> {
        Some(self.choose(world).to_string())
    }
}
