//! Player state and relic effects.

use serde::{Deserialize, Serialize};

use crate::event::GameEvent;
use crate::geometry::{Direction, Position};
use crate::relic::{Relic, RelicEffect};

/// The explorer controlled by the commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Current tile.
    pub position: Position,
    /// Remaining health. The game ends at 0 or below.
    pub health: i32,
    /// Accumulated score.
    pub score: u32,
    /// Relics collected, in pickup order.
    pub inventory: Vec<Relic>,
    /// Trap strikes that will be absorbed.
    pub shield_charges: u32,
    /// Blink-escape is armed.
    pub blink_available: bool,
    /// The guardian's heading is revealed each turn.
    pub sense_direction: bool,
    /// The exit's heading is revealed each turn.
    pub exit_hint: bool,
    /// The mystic pulse has not been used yet.
    pub pulse_available: bool,
}

impl Player {
    /// Create a player at `position` with the given health.
    pub fn new(position: Position, health: i32) -> Self {
        Self {
            position,
            health,
            score: 0,
            inventory: Vec::new(),
            shield_charges: 0,
            blink_available: false,
            sense_direction: false,
            exit_hint: false,
            pulse_available: true,
        }
    }

    /// Move one tile in `direction`. The caller checks bounds.
    pub fn step(&mut self, direction: Direction) {
        self.position = self.position.offset(direction);
    }

    /// Whether the player still has health left.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Lose `amount` health.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Number of relics carried.
    pub fn relic_count(&self) -> usize {
        self.inventory.len()
    }

    /// Apply a picked-up relic's effect and report what it did.
    ///
    /// The relic itself is not added to the inventory here.
    pub fn apply_relic(&mut self, relic: &Relic, max_health: i32) -> GameEvent {
        match relic.effect {
            RelicEffect::Heal => {
                if self.health < max_health {
                    self.health = (self.health + 1).min(max_health);
                    GameEvent::RelicHealed
                } else {
                    self.score += 5;
                    GameEvent::RelicInvigorated
                }
            }
            RelicEffect::Shield => {
                self.shield_charges += 1;
                GameEvent::ShieldWoven
            }
            RelicEffect::Blink => {
                self.blink_available = true;
                GameEvent::BlinkPrimed
            }
            RelicEffect::Sense => {
                if self.sense_direction {
                    self.score += 5;
                    GameEvent::SenseResonance
                } else {
                    self.sense_direction = true;
                    GameEvent::SenseAwakened
                }
            }
            RelicEffect::ExitHint => {
                self.exit_hint = true;
                GameEvent::ExitRevealed
            }
            RelicEffect::Score => {
                self.score += 10;
                GameEvent::TimeSlowed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(Position::new(3, 3), 5)
    }

    #[test]
    fn new_player_defaults() {
        let p = player();
        assert_eq!(p.health, 5);
        assert_eq!(p.score, 0);
        assert!(p.inventory.is_empty());
        assert_eq!(p.shield_charges, 0);
        assert!(!p.blink_available);
        assert!(!p.sense_direction);
        assert!(!p.exit_hint);
        assert!(p.pulse_available);
    }

    #[test]
    fn step_is_unchecked() {
        let mut p = Player::new(Position::new(0, 0), 5);
        p.step(Direction::North);
        assert_eq!(p.position, Position::new(-1, 0));
    }

    #[test]
    fn heal_below_cap() {
        let mut p = player();
        let event = p.apply_relic(&Relic::with_effect(RelicEffect::Heal), 7);
        assert_eq!(event, GameEvent::RelicHealed);
        assert_eq!(p.health, 6);
        assert_eq!(p.score, 0);
    }

    #[test]
    fn heal_at_cap_grants_score() {
        let mut p = player();
        p.health = 7;
        let event = p.apply_relic(&Relic::with_effect(RelicEffect::Heal), 7);
        assert_eq!(event, GameEvent::RelicInvigorated);
        assert_eq!(p.health, 7);
        assert_eq!(p.score, 5);
    }

    #[test]
    fn shields_stack() {
        let mut p = player();
        let shield = Relic::with_effect(RelicEffect::Shield);
        p.apply_relic(&shield, 7);
        p.apply_relic(&shield, 7);
        assert_eq!(p.shield_charges, 2);
    }

    #[test]
    fn blink_is_idempotent() {
        let mut p = player();
        let blink = Relic::with_effect(RelicEffect::Blink);
        p.apply_relic(&blink, 7);
        assert_eq!(p.apply_relic(&blink, 7), GameEvent::BlinkPrimed);
        assert!(p.blink_available);
        assert_eq!(p.score, 0);
    }

    #[test]
    fn second_sense_grants_score() {
        let mut p = player();
        let sense = Relic::with_effect(RelicEffect::Sense);
        assert_eq!(p.apply_relic(&sense, 7), GameEvent::SenseAwakened);
        assert_eq!(p.score, 0);
        assert_eq!(p.apply_relic(&sense, 7), GameEvent::SenseResonance);
        assert!(p.sense_direction);
        assert_eq!(p.score, 5);
    }

    #[test]
    fn exit_hint_and_score() {
        let mut p = player();
        p.apply_relic(&Relic::with_effect(RelicEffect::ExitHint), 7);
        assert!(p.exit_hint);
        p.apply_relic(&Relic::with_effect(RelicEffect::Score), 7);
        assert_eq!(p.score, 10);
    }

    #[test]
    fn damage_and_death() {
        let mut p = player();
        p.take_damage(4);
        assert!(p.is_alive());
        p.take_damage(2);
        assert!(!p.is_alive());
        assert_eq!(p.health, -1);
    }
}
