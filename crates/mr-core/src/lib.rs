//! Core rules for Maze Runner, a turn-based escape game on a 7x7 grid.
//!
//! The player gathers relics, dodges traps, and looks for the exit while a
//! stone guardian closes in. This crate holds the grid geometry, the
//! entities, relic and ambient effects, and the turn engine. It does no
//! I/O: frontends feed commands through [`CommandSource`] and watch turns
//! through [`TurnObserver`].

pub mod ambient;
pub mod autopilot;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod geometry;
pub mod guardian;
pub mod hint;
pub mod player;
pub mod relic;
pub mod world;

pub use autopilot::Autopilot;
pub use config::GameConfig;
pub use engine::{Command, CommandSource, Game, GamePhase, Outcome, TurnObserver, TurnReport};
pub use error::{GameError, GameResult};
pub use event::GameEvent;
pub use geometry::{BOARD_SIZE, Direction, Position};
pub use world::{Board, Tile, World};
