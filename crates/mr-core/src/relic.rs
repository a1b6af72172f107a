//! Relics: the collectibles hidden under treasure tiles.
//!
//! Every treasure yields one relic drawn uniformly (with replacement) from a
//! fixed library of six. The relic's effect is applied by
//! [`Player::apply_relic`](crate::player::Player::apply_relic).

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// What a relic does when picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelicEffect {
    /// +1 health, or +5 score at full health.
    Heal,
    /// One trap strike is absorbed.
    Shield,
    /// Teleport away the next time the guardian catches the player.
    Blink,
    /// Reveal the guardian's heading each turn; +5 score on repeats.
    Sense,
    /// Reveal the exit's heading each turn.
    ExitHint,
    /// Flat +10 score.
    Score,
}

impl std::fmt::Display for RelicEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heal => write!(f, "heal"),
            Self::Shield => write!(f, "shield"),
            Self::Blink => write!(f, "blink"),
            Self::Sense => write!(f, "sense"),
            Self::ExitHint => write!(f, "exit_hint"),
            Self::Score => write!(f, "score"),
        }
    }
}

/// A collected relic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relic {
    /// Display name.
    pub name: String,
    /// Flavour text shown on pickup.
    pub description: String,
    /// Effect applied on pickup.
    pub effect: RelicEffect,
}

impl Relic {
    /// Create a relic.
    pub fn new(name: impl Into<String>, description: impl Into<String>, effect: RelicEffect) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            effect,
        }
    }

    /// The library relic carrying `effect`.
    #[cfg(test)]
    pub fn with_effect(effect: RelicEffect) -> Self {
        let (name, description, effect) = RELIC_LIBRARY
            .iter()
            .copied()
            .find(|(_, _, e)| *e == effect)
            .unwrap_or(RELIC_LIBRARY[0]);
        Self::new(name, description, effect)
    }
}

impl std::fmt::Display for Relic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.effect)
    }
}

/// The fixed relic library: name, description, effect.
pub const RELIC_LIBRARY: [(&str, &str, RelicEffect); 6] = [
    (
        "Sunfire Sigil",
        "It radiates warmth that closes your wounds.",
        RelicEffect::Heal,
    ),
    (
        "Thornweave Mantle",
        "Vines coil around you, eager to shield you from harm.",
        RelicEffect::Shield,
    ),
    (
        "Blinkstone",
        "The gem hums, promising an escape from certain doom.",
        RelicEffect::Blink,
    ),
    (
        "Echo Compass",
        "Its needle thrums toward danger, revealing the guardian's stride.",
        RelicEffect::Sense,
    ),
    (
        "Star Map Fragment",
        "Constellations rearrange to highlight a hidden exit path.",
        RelicEffect::ExitHint,
    ),
    (
        "Chrono Beetle",
        "A mechanical beetle that nibbles at time, boosting your insight.",
        RelicEffect::Score,
    ),
];

/// Draw one relic uniformly from the library.
pub fn draw_relic(rng: &mut StdRng) -> Relic {
    let (name, description, effect) = RELIC_LIBRARY[rng.random_range(0..RELIC_LIBRARY.len())];
    Relic::new(name, description, effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn library_has_one_relic_per_effect() {
        let effects: HashSet<_> = RELIC_LIBRARY.iter().map(|(_, _, e)| *e).collect();
        assert_eq!(effects.len(), 6);
    }

    #[test]
    fn draws_cover_library() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(draw_relic(&mut rng).effect);
        }
        assert_eq!(seen.len(), 6, "missing effects: {seen:?}");
    }

    #[test]
    fn with_effect_looks_up_library() {
        let relic = Relic::with_effect(RelicEffect::Blink);
        assert_eq!(relic.name, "Blinkstone");
        assert_eq!(relic.effect, RelicEffect::Blink);
    }

    #[test]
    fn effect_tags() {
        assert_eq!(RelicEffect::ExitHint.to_string(), "exit_hint");
        assert_eq!(RelicEffect::Heal.to_string(), "heal");
        assert_eq!(
            Relic::with_effect(RelicEffect::Score).to_string(),
            "Chrono Beetle (score)"
        );
    }

    #[test]
    fn relic_serde_roundtrip() {
        let relic = Relic::with_effect(RelicEffect::ExitHint);
        let json = serde_json::to_string(&relic).unwrap();
        assert!(json.contains("\"exit_hint\""));
        let back: Relic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, relic);
    }
}
