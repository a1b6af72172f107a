//! Ambient events that may fire when the player lands on an empty tile.

use rand::Rng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::geometry::{manhattan_distance, nearest_position};
use crate::hint::Heading;
use crate::world::World;

/// A flavour event rolled on empty-tile turns.
#[derive(Debug, Clone, PartialEq)]
pub enum AmbientEvent {
    /// Spores restore one health. Only eligible below the health cap.
    Healing,
    /// A whisper points at the nearest trap. Only eligible while traps remain.
    TrapHint {
        /// Heading from the player to the trap.
        heading: Heading,
        /// Manhattan distance to the trap.
        distance: u32,
    },
    /// A lost memory grants five score.
    Memory,
    /// The guardian roars; reports its distance.
    Rumble {
        /// Manhattan distance to the guardian.
        distance: u32,
    },
}

impl std::fmt::Display for AmbientEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healing => write!(
                f,
                "Luminescent spores settle on you, knitting your wounds (+1 health)."
            ),
            Self::TrapHint { heading, distance } => write!(
                f,
                "A whisper in the vines {}; a snare lurks {distance} steps away.",
                heading.phrase("warns", "of")
            ),
            Self::Memory => write!(f, "A lost explorer's memory floods your mind (+5 score)."),
            Self::Rumble { distance } => write!(
                f,
                "The maze trembles as the guardian roars somewhere {distance} steps away."
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AmbientKind {
    Healing,
    TrapHint,
    Memory,
    Rumble,
}

/// The events that may currently fire, in table order.
fn eligible(world: &World, config: &GameConfig) -> Vec<AmbientKind> {
    let mut pool = Vec::with_capacity(4);
    if world.player.health < config.max_health {
        pool.push(AmbientKind::Healing);
    }
    if !world.traps.is_empty() {
        pool.push(AmbientKind::TrapHint);
    }
    pool.push(AmbientKind::Memory);
    pool.push(AmbientKind::Rumble);
    pool
}

/// Roll for an ambient event and apply its effect to the world.
///
/// Fires with `config.ambient_chance`; the event is drawn uniformly from
/// those currently eligible.
pub fn roll_ambient(world: &mut World, config: &GameConfig, rng: &mut StdRng) -> Option<AmbientEvent> {
    if rng.random::<f64>() >= config.ambient_chance {
        return None;
    }

    let pool = eligible(world, config);
    let kind = pool[rng.random_range(0..pool.len())];
    let player = &mut world.player;
    let event = match kind {
        AmbientKind::Healing => {
            player.health = (player.health + 1).min(config.max_health);
            AmbientEvent::Healing
        }
        AmbientKind::TrapHint => {
            let trap = nearest_position(player.position, &world.traps)?;
            AmbientEvent::TrapHint {
                heading: Heading::between(player.position, trap),
                distance: manhattan_distance(player.position, trap),
            }
        }
        AmbientKind::Memory => {
            player.score += 5;
            AmbientEvent::Memory
        }
        AmbientKind::Rumble => AmbientEvent::Rumble {
            distance: manhattan_distance(player.position, world.guardian.position),
        },
    };
    Some(event)
}
