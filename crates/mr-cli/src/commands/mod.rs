pub mod demo;
pub mod play;

use colored::Colorize;

use mr_core::{CommandSource, Game, Outcome};

use crate::console::ConsoleObserver;
use crate::render::render_board;

const INTRO: &str = "
Welcome to MAZE RUNNER
----------------------
You awaken in a living labyrinth. Relics within the maze will power the exit,
but a relentless stone guardian roams the halls. Gather relics, avoid traps,
and find the portal before the guardian crushes you.

Controls: w (up), a (left), s (down), d (right), p (mystic pulse), q (quit)
Tip: Listen to the guardian's footsteps and trust your instincts!
";

/// Print the intro, play the game to its end, and print the summary.
fn run_session<S: CommandSource>(
    game: &mut Game,
    source: &mut S,
    observer: &mut ConsoleObserver,
) -> Result<Outcome, String> {
    println!("{INTRO}");

    let outcome = game
        .play(source, observer)
        .map_err(|e| format!("game aborted: {e}"))?;

    if outcome != Outcome::Quit {
        print_summary(game);
    }
    Ok(outcome)
}

fn print_summary(game: &Game) {
    let world = game.world();
    println!();
    println!("{}", "The labyrinth claims another adventurer...".bold());
    println!("Final score: {}", world.player.score);
    println!("Revealing the final layout:");
    println!("{}", render_board(&world.board(), true));
}
