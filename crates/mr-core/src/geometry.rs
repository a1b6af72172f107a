//! Grid geometry for the maze.
//!
//! The maze is a fixed square board addressed by `(row, col)`. Row 0 is the
//! northern edge and column 0 the western edge. Everything here is a pure
//! function of its inputs apart from [`random_positions`], which draws from
//! the caller's RNG.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Width and height of the board.
pub const BOARD_SIZE: i32 = 7;

/// A tile coordinate. Compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index, growing southward.
    pub row: i32,
    /// Column index, growing eastward.
    pub col: i32,
}

impl Position {
    /// Create a position from a row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The centre tile of the board.
    pub const fn center() -> Self {
        Self::new(BOARD_SIZE / 2, BOARD_SIZE / 2)
    }

    /// The neighbouring position one step in `direction`. Not bounds-checked.
    pub fn offset(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// The four orthogonal neighbours, in direction table order.
    pub fn neighbors(self) -> [Position; 4] {
        Direction::ALL.map(|d| self.offset(d))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Up, bound to `w`.
    North,
    /// Down, bound to `s`.
    South,
    /// Left, bound to `a`.
    West,
    /// Right, bound to `d`.
    East,
}

impl Direction {
    /// All directions in key table order: w, s, a, d.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Row and column offset of a single step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::West => (0, -1),
            Self::East => (0, 1),
        }
    }

    /// The key that issues this move.
    pub fn key(self) -> char {
        match self {
            Self::North => 'w',
            Self::South => 's',
            Self::West => 'a',
            Self::East => 'd',
        }
    }

    /// Look up a direction by its key (case-insensitive).
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Self::North),
            's' => Some(Self::South),
            'a' => Some(Self::West),
            'd' => Some(Self::East),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => write!(f, "north"),
            Self::South => write!(f, "south"),
            Self::West => write!(f, "west"),
            Self::East => write!(f, "east"),
        }
    }
}

/// Whether both coordinates lie on the board.
pub fn within_bounds(position: Position) -> bool {
    (0..BOARD_SIZE).contains(&position.row) && (0..BOARD_SIZE).contains(&position.col)
}

/// Sum of the absolute coordinate differences.
pub fn manhattan_distance(a: Position, b: Position) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// The target closest to `origin`. Ties go to the earliest target.
pub fn nearest_position<'a, I>(origin: Position, targets: I) -> Option<Position>
where
    I: IntoIterator<Item = &'a Position>,
{
    targets
        .into_iter()
        .copied()
        .min_by_key(|&target| manhattan_distance(origin, target))
}

/// Every board position in row-major order.
pub fn all_positions() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
}

/// Draw `count` distinct positions uniformly at random, skipping `exclude`.
///
/// Positions are returned in draw order, so callers can slice the result
/// into roles.
pub fn random_positions(
    rng: &mut StdRng,
    count: usize,
    exclude: &[Position],
) -> GameResult<Vec<Position>> {
    let available = all_positions().filter(|p| !exclude.contains(p)).count();
    if count > available {
        return Err(GameError::NotEnoughTiles {
            requested: count,
            available,
        });
    }

    let mut positions = Vec::with_capacity(count);
    while positions.len() < count {
        let candidate = Position::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        );
        if exclude.contains(&candidate) || positions.contains(&candidate) {
            continue;
        }
        positions.push(candidate);
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn center_is_three_three() {
        assert_eq!(Position::center(), Position::new(3, 3));
    }

    #[test]
    fn bounds_edges() {
        assert!(within_bounds(Position::new(0, 0)));
        assert!(within_bounds(Position::new(6, 6)));
        assert!(!within_bounds(Position::new(-1, 0)));
        assert!(!within_bounds(Position::new(0, 7)));
        assert!(!within_bounds(Position::new(7, 3)));
    }

    #[test]
    fn offsets_follow_key_table() {
        let p = Position::new(3, 3);
        assert_eq!(p.offset(Direction::North), Position::new(2, 3));
        assert_eq!(p.offset(Direction::South), Position::new(4, 3));
        assert_eq!(p.offset(Direction::West), Position::new(3, 2));
        assert_eq!(p.offset(Direction::East), Position::new(3, 4));
        assert_eq!(
            Position::new(0, 0).offset(Direction::North),
            Position::new(-1, 0)
        );
    }

    #[test]
    fn direction_keys() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_key(dir.key()), Some(dir));
        }
        assert_eq!(Direction::from_key('W'), Some(Direction::North));
        assert_eq!(Direction::from_key('x'), None);
    }

    #[test]
    fn nearest_prefers_first_on_tie() {
        let origin = Position::new(3, 3);
        let targets = [
            Position::new(0, 0),
            Position::new(3, 5),
            Position::new(5, 3),
        ];
        assert_eq!(
            nearest_position(origin, &targets),
            Some(Position::new(3, 5))
        );
    }

    #[test]
    fn nearest_of_nothing() {
        assert_eq!(nearest_position(Position::new(1, 1), &[]), None);
    }

    #[test]
    fn all_positions_covers_board() {
        let all: Vec<_> = all_positions().collect();
        assert_eq!(all.len(), 49);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[48], Position::new(6, 6));
    }

    #[test]
    fn random_positions_are_distinct_and_excluded() {
        let mut rng = StdRng::seed_from_u64(3);
        let exclude = [Position::center()];
        let positions = random_positions(&mut rng, 20, &exclude).unwrap();
        assert_eq!(positions.len(), 20);
        for (i, p) in positions.iter().enumerate() {
            assert!(within_bounds(*p));
            assert!(!exclude.contains(p));
            assert!(!positions[i + 1..].contains(p), "duplicate {p}");
        }
    }

    #[test]
    fn random_positions_can_fill_board() {
        let mut rng = StdRng::seed_from_u64(0);
        let positions = random_positions(&mut rng, 48, &[Position::center()]).unwrap();
        assert_eq!(positions.len(), 48);
    }

    #[test]
    fn random_positions_rejects_overdraw() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = random_positions(&mut rng, 49, &[Position::center()]).unwrap_err();
        assert!(matches!(
            err,
            GameError::NotEnoughTiles {
                requested: 49,
                available: 48
            }
        ));
    }

    #[test]
    fn random_positions_reproducible() {
        let a = random_positions(&mut StdRng::seed_from_u64(11), 6, &[]).unwrap();
        let b = random_positions(&mut StdRng::seed_from_u64(11), 6, &[]).unwrap();
        assert_eq!(a, b);
    }

    fn any_position() -> impl Strategy<Value = Position> {
        (-3i32..10, -3i32..10).prop_map(|(row, col)| Position::new(row, col))
    }

    proptest! {
        #[test]
        fn bounds_match_coordinate_ranges(p in any_position()) {
            let expected = (0..7).contains(&p.row) && (0..7).contains(&p.col);
            prop_assert_eq!(within_bounds(p), expected);
        }

        #[test]
        fn distance_is_symmetric(a in any_position(), b in any_position()) {
            prop_assert_eq!(manhattan_distance(a, b), manhattan_distance(b, a));
        }

        #[test]
        fn distance_zero_iff_equal(a in any_position(), b in any_position()) {
            prop_assert_eq!(manhattan_distance(a, b) == 0, a == b);
        }

        #[test]
        fn nearest_is_minimal(
            origin in any_position(),
            targets in proptest::collection::vec(any_position(), 1..8),
        ) {
            let nearest = nearest_position(origin, &targets).unwrap();
            let best = manhattan_distance(origin, nearest);
            prop_assert!(targets.iter().all(|t| manhattan_distance(origin, *t) >= best));
            let first = targets
                .iter()
                .find(|t| manhattan_distance(origin, **t) == best)
                .copied();
            prop_assert_eq!(Some(nearest), first);
        }
    }
}
