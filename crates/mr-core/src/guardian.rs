//! The stone guardian and its chase heuristic.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::geometry::{Position, within_bounds};

/// The pursuer. It cannot be defeated, only evaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guardian {
    /// Current tile.
    pub position: Position,
}

impl Guardian {
    /// Create a guardian at `position`.
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Take one greedy step toward `target`, never onto `occupied` tiles.
    ///
    /// Candidates are one row step and one column step toward the target.
    /// When already on the target all four neighbours are candidates. The
    /// candidates are shuffled and the first legal one is taken; with none
    /// legal the guardian stays put. Returns whether it moved.
    pub fn chase(&mut self, target: Position, occupied: &[Position], rng: &mut StdRng) -> bool {
        let here = self.position;
        let mut candidates = Vec::with_capacity(4);

        let dr = (target.row - here.row).signum();
        if dr != 0 {
            candidates.push(Position::new(here.row + dr, here.col));
        }
        let dc = (target.col - here.col).signum();
        if dc != 0 {
            candidates.push(Position::new(here.row, here.col + dc));
        }
        if candidates.is_empty() {
            candidates.extend(here.neighbors());
        }

        candidates.shuffle(rng);
        match candidates
            .into_iter()
            .find(|c| within_bounds(*c) && !occupied.contains(c))
        {
            Some(next) => {
                self.position = next;
                true
            }
            None => false,
        }
    }
}
