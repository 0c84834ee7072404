//! Skirmish -- a grid-arena hero engine implementing the HUI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the HUI (Hero Universal Interface) convention.

use std::io::{self, BufRead};

use skirmish::engine::Engine;
use skirmish::protocol::parser::{parse_command, Command};

/// Runs the main HUI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Hui => {
                engine.handle_hui(&mut out);
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
            }
            Command::NewGame => {
                engine.new_game();
            }
            Command::Position { afen } => {
                if let Err(e) = engine.set_position(&afen) {
                    eprintln!("{}", e);
                }
            }
            Command::Hero { id } => {
                engine.set_hero(id);
            }
            Command::Go => {
                engine.handle_go(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
