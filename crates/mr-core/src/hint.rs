//! Compass hints toward tiles the player cannot see.

use crate::geometry::Position;

/// Vertical component of a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    /// Toward row 0.
    North,
    /// Away from row 0.
    South,
}

/// Horizontal component of a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    /// Toward column 0.
    West,
    /// Away from column 0.
    East,
}

/// Rough compass heading from one tile to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    /// North/south component, if the rows differ.
    pub vertical: Option<Vertical>,
    /// West/east component, if the columns differ.
    pub horizontal: Option<Horizontal>,
}

impl Heading {
    /// The heading from `origin` toward `target`.
    pub fn between(origin: Position, target: Position) -> Self {
        let vertical = match target.row.cmp(&origin.row) {
            std::cmp::Ordering::Less => Some(Vertical::North),
            std::cmp::Ordering::Greater => Some(Vertical::South),
            std::cmp::Ordering::Equal => None,
        };
        let horizontal = match target.col.cmp(&origin.col) {
            std::cmp::Ordering::Less => Some(Horizontal::West),
            std::cmp::Ordering::Greater => Some(Horizontal::East),
            std::cmp::Ordering::Equal => None,
        };
        Self {
            vertical,
            horizontal,
        }
    }

    /// Whether origin and target are the same tile.
    pub fn is_here(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }

    /// Build a sentence fragment such as `"pulls toward the north and east"`.
    pub fn phrase(&self, subject: &str, preposition: &str) -> String {
        if self.is_here() {
            format!("{subject} right beside you")
        } else {
            format!("{subject} {preposition} the {self}")
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vertical = self.vertical.map(|v| match v {
            Vertical::North => "north",
            Vertical::South => "south",
        });
        let horizontal = self.horizontal.map(|h| match h {
            Horizontal::West => "west",
            Horizontal::East => "east",
        });
        match (vertical, horizontal) {
            (Some(v), Some(h)) => write!(f, "{v} and {h}"),
            (Some(v), None) => write!(f, "{v}"),
            (None, Some(h)) => write!(f, "{h}"),
            (None, None) => write!(f, "here"),
        }
    }
}
