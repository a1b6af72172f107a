//! The turn engine.
//!
//! A [`Game`] owns the world and the RNG and advances one command at a time.
//! Commands come from a [`CommandSource`] (console input or the demo
//! autopilot); a [`TurnObserver`] sees every turn so a frontend can render
//! it. Each accepted command runs the same pipeline: player action, tile
//! resolution, victory check, guardian turn, defeat check, turn limit.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ambient::roll_ambient;
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::event::GameEvent;
use crate::geometry::{Direction, all_positions, manhattan_distance, nearest_position, within_bounds};
use crate::hint::Heading;
use crate::relic::draw_relic;
use crate::world::{Tile, World};

/// Damage dealt whenever the guardian reaches the player.
const GUARDIAN_DAMAGE: i32 = 2;
/// Score for picking up a treasure.
const TREASURE_SCORE: u32 = 15;
/// Score for escaping.
const VICTORY_SCORE: u32 = 25;

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move one tile.
    Move(Direction),
    /// Use the mystic pulse.
    Pulse,
    /// Give up.
    Quit,
}

impl Command {
    /// Parse a single-character command, ignoring case and surrounding
    /// whitespace.
    pub fn parse(input: &str) -> GameResult<Self> {
        let token = input.trim();
        let mut chars = token.chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return Err(GameError::UnknownCommand(token.to_string()));
        };
        match key.to_ascii_lowercase() {
            'p' => Ok(Self::Pulse),
            'q' => Ok(Self::Quit),
            other => Direction::from_key(other)
                .map(Self::Move)
                .ok_or_else(|| GameError::UnknownCommand(token.to_string())),
        }
    }

    /// The key that issues this command.
    pub fn key(self) -> char {
        match self {
            Self::Move(direction) => direction.key(),
            Self::Pulse => 'p',
            Self::Quit => 'q',
        }
    }
}

impl std::str::FromStr for Command {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Reached the exit carrying at least one relic.
    Victory,
    /// Health dropped to zero.
    Defeat,
    /// The player quit.
    Quit,
    /// The automated session used up its turns.
    TurnLimit,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Victory => write!(f, "victory"),
            Self::Defeat => write!(f, "defeat"),
            Self::Quit => write!(f, "quit"),
            Self::TurnLimit => write!(f, "turn limit"),
        }
    }
}

/// Where the engine is in its command cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the next command.
    AwaitingCommand,
    /// A command is being resolved.
    Resolving,
    /// The game has ended.
    Over(Outcome),
}

/// Everything that happened while resolving one command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnReport {
    /// Events in the order they happened.
    pub events: Vec<GameEvent>,
    /// Whether the command used up a turn (false for wall bumps).
    pub turn_consumed: bool,
    /// Set when this command ended the game.
    pub outcome: Option<Outcome>,
}

/// Supplies raw command tokens to the engine.
pub trait CommandSource {
    /// The next command token, or `None` once input is exhausted.
    fn next_command(&mut self, world: &World) -> Option<String>;
}

/// Hooks a frontend uses to follow a game driven by [`Game::play`].
pub trait TurnObserver {
    /// Called before each command is requested.
    fn before_command(&mut self, _game: &Game) {}

    /// Called after a command was resolved.
    fn after_turn(&mut self, _game: &Game, _command: &str, _report: &TurnReport) {}

    /// Called when a command token could not be parsed.
    fn on_rejected(&mut self, _game: &Game, _command: &str, _error: &GameError) {}
}

impl TurnObserver for () {}

enum Resolution {
    Rejected,
    Continue,
    Ended(Outcome),
}

/// A running game session.
pub struct Game {
    config: GameConfig,
    world: World,
    rng: StdRng,
    phase: GamePhase,
    turns: u32,
}

impl Game {
    /// Start a new game with a freshly generated world.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let world = World::generate(&config, &mut rng)?;
        Ok(Self {
            config,
            world,
            rng,
            phase: GamePhase::AwaitingCommand,
            turns: 0,
        })
    }

    /// Start a game in a prepared world.
    pub fn with_world(config: GameConfig, world: World) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            world,
            rng,
            phase: GamePhase::AwaitingCommand,
            turns: 0,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Completed turns so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// How the game ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Parse and resolve a raw command token.
    pub fn submit(&mut self, input: &str) -> GameResult<TurnReport> {
        let command = Command::parse(input)?;
        self.step(command)
    }

    /// Resolve one command.
    pub fn step(&mut self, command: Command) -> GameResult<TurnReport> {
        if let GamePhase::Over(outcome) = self.phase {
            return Err(GameError::GameOver(outcome));
        }
        self.phase = GamePhase::Resolving;
        debug!("turn {}: resolving '{command}'", self.turns + 1);

        let mut events = Vec::new();
        let resolution = match command {
            Command::Quit => {
                events.push(GameEvent::Quit);
                Resolution::Ended(Outcome::Quit)
            }
            Command::Pulse => self.pulse(&mut events),
            Command::Move(direction) => self.advance(direction, &mut events),
        };

        let mut report = TurnReport {
            events,
            turn_consumed: !matches!(resolution, Resolution::Rejected),
            outcome: None,
        };
        match resolution {
            Resolution::Ended(outcome) => {
                info!(
                    "game over: {outcome} after {} turns, score {}",
                    self.turns, self.world.player.score
                );
                self.phase = GamePhase::Over(outcome);
                report.outcome = Some(outcome);
            }
            Resolution::Rejected | Resolution::Continue => {
                self.phase = GamePhase::AwaitingCommand;
            }
        }
        Ok(report)
    }

    /// Drive the game from `source` until it ends.
    ///
    /// Exhausted input counts as quitting. Unparseable tokens are reported to
    /// the observer and the loop asks again.
    pub fn play<S, O>(&mut self, source: &mut S, observer: &mut O) -> GameResult<Outcome>
    where
        S: CommandSource + ?Sized,
        O: TurnObserver + ?Sized,
    {
        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
            observer.before_command(self);

            let Some(token) = source.next_command(&self.world) else {
                let report = self.step(Command::Quit)?;
                observer.after_turn(self, "q", &report);
                continue;
            };
            match self.submit(&token) {
                Ok(report) => observer.after_turn(self, &token, &report),
                Err(err @ GameError::UnknownCommand(_)) => {
                    observer.on_rejected(self, &token, &err);
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn pulse(&mut self, events: &mut Vec<GameEvent>) -> Resolution {
        let player = &mut self.world.player;
        if player.pulse_available {
            player.pulse_available = false;
            let origin = player.position;
            events.push(GameEvent::PulseUnleashed);
            match nearest_position(origin, &self.world.treasures) {
                Some(relic) => events.push(GameEvent::PulseRelic {
                    heading: Heading::between(origin, relic),
                    distance: manhattan_distance(origin, relic),
                }),
                None => events.push(GameEvent::PulseNoRelics),
            }
            events.push(GameEvent::PulseExit {
                heading: Heading::between(origin, self.world.exit),
                distance: manhattan_distance(origin, self.world.exit),
            });
            let guardian = self.world.guardian.position;
            events.push(GameEvent::PulseGuardian {
                heading: Heading::between(origin, guardian),
                distance: manhattan_distance(origin, guardian),
            });
        } else {
            events.push(GameEvent::PulseSpent);
        }

        self.guardian_turn(events);
        if !self.world.player.is_alive() {
            return Resolution::Ended(Outcome::Defeat);
        }
        self.complete_turn(events)
    }

    fn advance(&mut self, direction: Direction, events: &mut Vec<GameEvent>) -> Resolution {
        let destination = self.world.player.position.offset(direction);
        if !within_bounds(destination) {
            events.push(GameEvent::WallBump);
            return Resolution::Rejected;
        }
        self.world.player.step(direction);

        let tile = self.world.tile_at(destination);
        if tile == Tile::Empty {
            if let Some(event) = roll_ambient(&mut self.world, &self.config, &mut self.rng) {
                events.push(GameEvent::Ambient(event));
            }
        } else {
            events.push(GameEvent::Encounter(tile));
            self.resolve_tile(tile, events);
            if !self.world.player.is_alive() {
                return Resolution::Ended(Outcome::Defeat);
            }
        }

        if destination == self.world.exit {
            if self.world.player.inventory.is_empty() {
                events.push(GameEvent::PortalRejected);
            } else {
                self.world.player.score += VICTORY_SCORE;
                events.push(GameEvent::Victory);
                return Resolution::Ended(Outcome::Victory);
            }
        }

        self.guardian_turn(events);
        if !self.world.player.is_alive() {
            return Resolution::Ended(Outcome::Defeat);
        }
        self.complete_turn(events)
    }

    fn resolve_tile(&mut self, tile: Tile, events: &mut Vec<GameEvent>) {
        let position = self.world.player.position;
        let player = &mut self.world.player;
        match tile {
            Tile::Treasure => {
                let relic = draw_relic(&mut self.rng);
                player.score += TREASURE_SCORE;
                events.push(GameEvent::RelicFound(relic.clone()));
                events.push(player.apply_relic(&relic, self.config.max_health));
                player.inventory.push(relic);
                self.world.consume_tile(position);
            }
            Tile::Trap => {
                if player.shield_charges > 0 {
                    player.shield_charges -= 1;
                    events.push(GameEvent::TrapAbsorbed);
                } else {
                    player.take_damage(1);
                    events.push(GameEvent::TrapSprung);
                }
                self.world.consume_tile(position);
            }
            Tile::Exit => events.push(GameEvent::ExitHums),
            Tile::Guardian => {
                player.take_damage(GUARDIAN_DAMAGE);
                events.push(GameEvent::GuardianCrush);
                self.world.consume_tile(position);
            }
            Tile::Empty | Tile::Player => {}
        }
    }

    fn guardian_turn(&mut self, events: &mut Vec<GameEvent>) {
        let steps = 1 + (self.world.player.relic_count() / 2) as u32;
        if steps > 1 {
            events.push(GameEvent::GuardianSurge { steps });
        }

        for _ in 0..steps {
            let target = self.world.player.position;
            self.world
                .guardian
                .chase(target, &self.world.traps, &mut self.rng);
            debug!("guardian moves to {}", self.world.guardian.position);

            if self.world.guardian.position == self.world.player.position {
                if self.world.player.blink_available {
                    self.blink_escape(events);
                } else {
                    self.world.player.take_damage(GUARDIAN_DAMAGE);
                    events.push(GameEvent::GuardianCaught);
                }
                break;
            }
        }
    }

    fn blink_escape(&mut self, events: &mut Vec<GameEvent>) {
        let world = &mut self.world;
        world.player.blink_available = false;

        let safe: Vec<_> = all_positions()
            .filter(|p| {
                *p != world.player.position
                    && *p != world.guardian.position
                    && *p != world.exit
                    && !world.treasures.contains(p)
                    && !world.traps.contains(p)
            })
            .collect();

        if safe.is_empty() {
            events.push(GameEvent::BlinkFizzled);
            world.player.take_damage(GUARDIAN_DAMAGE);
            events.push(GameEvent::GuardianCaught);
            return;
        }

        let to = safe[self.rng.random_range(0..safe.len())];
        debug!("blink-escape to {to}");
        world.player.position = to;
        events.push(GameEvent::BlinkEscape { to });
    }

    fn complete_turn(&mut self, events: &mut Vec<GameEvent>) -> Resolution {
        self.turns += 1;
        if self.config.max_turns.is_some_and(|max| self.turns >= max) {
            events.push(GameEvent::TurnLimitReached);
            return Resolution::Ended(Outcome::TurnLimit);
        }
        Resolution::Continue
    }
}
