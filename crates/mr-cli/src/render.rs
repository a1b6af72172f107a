//! Turning board snapshots and player state into console text.

use mr_core::geometry::manhattan_distance;
use mr_core::hint::Heading;
use mr_core::{Board, Tile, World};

/// Glyph for a visible tile.
fn glyph(tile: Tile) -> &'static str {
    match tile {
        Tile::Player => "🧭",
        Tile::Guardian => "🗿",
        Tile::Treasure => "💎",
        Tile::Trap => "⚠",
        Tile::Exit => "🚪",
        Tile::Empty => "·",
    }
}

/// Draw the board, one row per line. Hidden tiles show as empty unless
/// `reveal` is set.
pub fn render_board(board: &Board, reveal: bool) -> String {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&tile| {
                    if tile.is_hidden() && !reveal {
                        glyph(Tile::Empty)
                    } else {
                        glyph(tile)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Status lines shown under the board each turn.
pub fn status_lines(world: &World) -> Vec<String> {
    let player = &world.player;
    let mut lines = vec![format!(
        "Health: {}   Relics: {}   Score: {}   Shield charges: {}",
        player.health,
        player.relic_count(),
        player.score,
        player.shield_charges
    )];

    let guardian = world.guardian.position;
    let distance = manhattan_distance(player.position, guardian);
    if player.sense_direction {
        let heading = Heading::between(player.position, guardian);
        lines.push(format!(
            "You feel the guardian {} (distance {distance}).",
            heading.phrase("approaches", "from")
        ));
    } else if distance <= 2 {
        lines.push("The guardian's footsteps echo nearby!".to_string());
    } else {
        lines.push("All seems quiet... for now.".to_string());
    }

    if player.exit_hint {
        let heading = Heading::between(player.position, world.exit);
        lines.push(format!(
            "A tug in your gut says the exit {}.",
            heading.phrase("pulls", "toward")
        ));
    }
    lines.push(format!("Relics remaining: {}", world.treasures.len()));
    if player.pulse_available {
        lines.push("Mystic pulse ready (press 'p').".to_string());
    }
    lines
}
