//! Console glue: reading commands from stdin and printing turns.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use mr_core::{CommandSource, Game, GameError, GameEvent, TurnObserver, TurnReport, World};

use crate::render::{render_board, status_lines};

/// Reads one command per line, prompting before each read.
pub struct StdinSource<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> StdinSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> CommandSource for StdinSource<R> {
    fn next_command(&mut self, _world: &World) -> Option<String> {
        print!("Your move: ");
        if let Err(e) = io::stdout().flush() {
            log::warn!("failed to flush prompt: {e}");
        }

        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => {
                println!();
                None
            }
            Ok(_) => Some(self.line.trim().to_string()),
            Err(e) => {
                log::warn!("failed to read command: {e}");
                None
            }
        }
    }
}

/// Prints the board before each command and the events after it.
pub struct ConsoleObserver {
    echo_commands: bool,
}

impl ConsoleObserver {
    /// Observer for a human at the keyboard.
    pub fn interactive() -> Self {
        Self {
            echo_commands: false,
        }
    }

    /// Observer for autopilot runs; echoes each chosen command.
    pub fn demo() -> Self {
        Self {
            echo_commands: true,
        }
    }
}

impl TurnObserver for ConsoleObserver {
    fn before_command(&mut self, game: &Game) {
        let world = game.world();
        println!("{}", render_board(&world.board(), false));
        for line in status_lines(world) {
            println!("{line}");
        }
    }

    fn after_turn(&mut self, _game: &Game, command: &str, report: &TurnReport) {
        if self.echo_commands {
            println!("Demo move: {command}");
        }
        for event in &report.events {
            println!("{}", colorize_event(event));
        }
        println!();
    }

    fn on_rejected(&mut self, _game: &Game, _command: &str, error: &GameError) {
        println!("{}\n", error.to_string().yellow());
    }
}

fn colorize_event(event: &GameEvent) -> colored::ColoredString {
    let text = event.to_string();
    match event {
        GameEvent::TrapSprung
        | GameEvent::GuardianCrush
        | GameEvent::GuardianCaught
        | GameEvent::BlinkFizzled => text.red(),
        GameEvent::GuardianSurge { .. } | GameEvent::PortalRejected | GameEvent::WallBump => {
            text.yellow()
        }
        GameEvent::RelicFound(_) | GameEvent::Victory | GameEvent::BlinkEscape { .. } => {
            text.green().bold()
        }
        GameEvent::Ambient(_) => text.cyan(),
        GameEvent::PulseUnleashed
        | GameEvent::PulseRelic { .. }
        | GameEvent::PulseNoRelics
        | GameEvent::PulseExit { .. }
        | GameEvent::PulseGuardian { .. } => text.magenta(),
        _ => text.normal(),
    }
}
