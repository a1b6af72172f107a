//! Everything that can happen during a turn, as reported to the player.

use crate::ambient::AmbientEvent;
use crate::geometry::Position;
use crate::hint::Heading;
use crate::relic::Relic;
use crate::world::Tile;

/// A single thing that happened while a command was resolved.
///
/// The `Display` impl renders the sentence shown to the player.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    // Movement
    /// The move would have left the board.
    WallBump,
    /// The player stepped onto a non-empty tile.
    Encounter(Tile),

    // Relics
    /// A relic was added to the inventory.
    RelicFound(Relic),
    /// A heal relic restored one health.
    RelicHealed,
    /// A heal relic at full health granted score instead.
    RelicInvigorated,
    /// A shield charge was gained.
    ShieldWoven,
    /// Blink-escape is now armed.
    BlinkPrimed,
    /// The guardian's heading is now shown every turn.
    SenseAwakened,
    /// A repeated sense relic granted score instead.
    SenseResonance,
    /// The exit's heading is now shown every turn.
    ExitRevealed,
    /// A score relic granted flat score.
    TimeSlowed,

    // Tiles
    /// A shield charge absorbed a trap.
    TrapAbsorbed,
    /// A trap dealt damage.
    TrapSprung,
    /// The player reached the exit tile.
    ExitHums,
    /// The player walked into the guardian.
    GuardianCrush,

    // Guardian turn
    /// The guardian takes more than one step this turn.
    GuardianSurge {
        /// Steps taken this turn.
        steps: u32,
    },
    /// The guardian caught the player.
    GuardianCaught,
    /// Blink-escape moved the player away from the guardian.
    BlinkEscape {
        /// Where the player landed.
        to: Position,
    },
    /// Blink-escape fired but found no safe tile.
    BlinkFizzled,

    // Mystic pulse
    /// The pulse was used.
    PulseUnleashed,
    /// Heading to the nearest remaining relic.
    PulseRelic {
        /// Heading from the player.
        heading: Heading,
        /// Manhattan distance from the player.
        distance: u32,
    },
    /// No treasure tiles remain.
    PulseNoRelics,
    /// Heading to the exit.
    PulseExit {
        /// Heading from the player.
        heading: Heading,
        /// Manhattan distance from the player.
        distance: u32,
    },
    /// Heading to the guardian.
    PulseGuardian {
        /// Heading from the player.
        heading: Heading,
        /// Manhattan distance from the player.
        distance: u32,
    },
    /// The pulse was already used.
    PulseSpent,

    /// A random event on an empty tile.
    Ambient(AmbientEvent),

    // Endings
    /// The exit refused a player without relics.
    PortalRejected,
    /// The player escaped with relics.
    Victory,
    /// The player quit.
    Quit,
    /// The automated session ran out of turns.
    TurnLimitReached,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WallBump => write!(f, "You bump into a wall of twisting roots. Try another way."),
            Self::Encounter(tile) => write!(f, "You encounter {}!", tile.describe()),
            Self::RelicFound(relic) => {
                write!(f, "You pocket the {}! {}", relic.name, relic.description)
            }
            Self::RelicHealed => write!(f, "The warmth mends your wounds (+1 health)."),
            Self::RelicInvigorated => write!(
                f,
                "You already feel invigorated, so the sigil boosts your confidence (+5 score)."
            ),
            Self::ShieldWoven => write!(
                f,
                "Thorny vines encase you, ready to absorb the next trap strike."
            ),
            Self::BlinkPrimed => write!(
                f,
                "You feel space bend around you. The Blinkstone will trigger if the guardian corners you."
            ),
            Self::SenseAwakened => {
                write!(f, "You now sense the guardian's precise approach each turn.")
            }
            Self::SenseResonance => {
                write!(f, "The compass resonates with your instincts (+5 score).")
            }
            Self::ExitRevealed => write!(
                f,
                "Star lines point toward the exit. You can now feel its direction."
            ),
            Self::TimeSlowed => write!(f, "Time slows for a heartbeat (+10 score)."),
            Self::TrapAbsorbed => write!(f, "Your thornweave mantle absorbs the trap's impact!"),
            Self::TrapSprung => write!(
                f,
                "Spikes lash out! You grit your teeth and push forward (-1 health)."
            ),
            Self::ExitHums => write!(
                f,
                "The exit hums with energy. If you have relics, freedom awaits!"
            ),
            Self::GuardianCrush => write!(
                f,
                "The guardian crushes you with a stone fist (-2 health). Run!"
            ),
            Self::GuardianSurge { .. } => write!(
                f,
                "The guardian surges with fury, accelerating its pursuit!"
            ),
            Self::GuardianCaught => write!(
                f,
                "The guardian catches up and slams you again (-2 health)!"
            ),
            Self::BlinkEscape { .. } => write!(
                f,
                "The Blinkstone flares, wrenching you through space to safety!"
            ),
            Self::BlinkFizzled => write!(
                f,
                "The Blinkstone flickers but finds no refuge! You brace for impact."
            ),
            Self::PulseUnleashed => write!(
                f,
                "You unleash a mystic pulse. For a heartbeat, the maze reveals itself!"
            ),
            Self::PulseRelic { heading, distance } => write!(
                f,
                "A relic glimmers {} {distance} steps away.",
                heading.phrase("waiting", "to")
            ),
            Self::PulseNoRelics => write!(f, "No more relics answer your call."),
            Self::PulseExit { heading, distance } => write!(
                f,
                "The exit {} at a distance of {distance}.",
                heading.phrase("pulls", "toward")
            ),
            Self::PulseGuardian { heading, distance } => write!(
                f,
                "You sense the guardian {} at {distance} steps.",
                heading.phrase("lurking", "from")
            ),
            Self::PulseSpent => write!(
                f,
                "Your mystic pulse is spent. The maze remains silent."
            ),
            Self::Ambient(event) => write!(f, "{event}"),
            Self::PortalRejected => write!(
                f,
                "The portal rejects you. It needs the relics' energy!"
            ),
            Self::Victory => write!(
                f,
                "The relics resonate with the portal. You surge into the light! You win!"
            ),
            Self::Quit => write!(f, "You sit down and accept your fate. Game over."),
            Self::TurnLimitReached => write!(f, "Demo turn limit reached. Ending the run."),
        }
    }
}
