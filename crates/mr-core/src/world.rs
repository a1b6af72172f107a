//! World state: the player, the guardian, and the special tiles.

use log::debug;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::GameResult;
use crate::geometry::{BOARD_SIZE, Position, random_positions, within_bounds};
use crate::guardian::Guardian;
use crate::player::Player;

/// What occupies a tile, from the engine's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Nothing of note.
    Empty,
    /// The player.
    Player,
    /// The guardian.
    Guardian,
    /// An uncollected relic.
    Treasure,
    /// An untriggered snare.
    Trap,
    /// The way out.
    Exit,
}

impl Tile {
    /// Short description used when the player steps onto the tile.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Treasure => "a glittering relic",
            Self::Trap => "an ancient snare",
            Self::Guardian => "the stone guardian",
            Self::Exit => "the shimmering exit",
            Self::Empty | Self::Player => "something unsettling",
        }
    }

    /// Whether the tile is hidden from the player until the final reveal.
    pub fn is_hidden(self) -> bool {
        matches!(
            self,
            Self::Guardian | Self::Treasure | Self::Trap | Self::Exit
        )
    }
}

/// A snapshot of the board for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Vec<Tile>>,
}

impl Board {
    /// The tile at `position`, or `None` off the board.
    pub fn get(&self, position: Position) -> Option<Tile> {
        if !within_bounds(position) {
            return None;
        }
        Some(self.cells[position.row as usize][position.col as usize])
    }

    /// Rows from north to south.
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.cells
    }

    fn paint(&mut self, position: Position, tile: Tile) {
        if within_bounds(position) {
            self.cells[position.row as usize][position.col as usize] = tile;
        }
    }
}

/// The full game world for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// The explorer.
    pub player: Player,
    /// The pursuer.
    pub guardian: Guardian,
    /// Uncollected treasure tiles, in placement order.
    pub treasures: Vec<Position>,
    /// Untriggered trap tiles, in placement order.
    pub traps: Vec<Position>,
    /// The exit tile.
    pub exit: Position,
}

impl World {
    /// Lay out a fresh world.
    ///
    /// The player starts at the centre. The guardian, treasures, traps, and
    /// exit are drawn in that order from the remaining tiles, all distinct.
    pub fn generate(config: &GameConfig, rng: &mut StdRng) -> GameResult<Self> {
        config.validate()?;
        let start = Position::center();
        let drawn = random_positions(rng, config.placements(), &[start])?;

        let treasure_end = 1 + config.treasures;
        let trap_end = treasure_end + config.traps;
        let world = Self {
            player: Player::new(start, config.starting_health),
            guardian: Guardian::new(drawn[0]),
            treasures: drawn[1..treasure_end].to_vec(),
            traps: drawn[treasure_end..trap_end].to_vec(),
            exit: drawn[trap_end],
        };
        debug!(
            "world generated: guardian {}, exit {}, {} treasures, {} traps",
            world.guardian.position,
            world.exit,
            world.treasures.len(),
            world.traps.len()
        );
        Ok(world)
    }

    /// What the player would run into at `position`.
    ///
    /// The guardian hides anything beneath it; the exit comes before
    /// treasures and traps.
    pub fn tile_at(&self, position: Position) -> Tile {
        if position == self.guardian.position {
            Tile::Guardian
        } else if position == self.exit {
            Tile::Exit
        } else if self.treasures.contains(&position) {
            Tile::Treasure
        } else if self.traps.contains(&position) {
            Tile::Trap
        } else {
            Tile::Empty
        }
    }

    /// Remove a resolved treasure or trap so it cannot trigger again.
    pub fn consume_tile(&mut self, position: Position) {
        self.treasures.retain(|p| *p != position);
        self.traps.retain(|p| *p != position);
    }

    /// Paint the current state onto a board snapshot.
    pub fn board(&self) -> Board {
        let size = BOARD_SIZE as usize;
        let mut board = Board {
            cells: vec![vec![Tile::Empty; size]; size],
        };
        for &p in &self.treasures {
            board.paint(p, Tile::Treasure);
        }
        for &p in &self.traps {
            board.paint(p, Tile::Trap);
        }
        board.paint(self.guardian.position, Tile::Guardian);
        board.paint(self.exit, Tile::Exit);
        board.paint(self.player.position, Tile::Player);
        board
    }
}
