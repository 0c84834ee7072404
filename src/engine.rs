//! Engine state management.
//!
//! Holds the current arena position, the hero the engine plays, engine
//! options, and runs the move search for the `go` command.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::HeroId;
use crate::config::SearchConfig;
use crate::protocol::afen::parse_afen;
use crate::search::choose_move;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<crate::board::GameView>,
    pub active_hero: Option<HeroId>,
    pub options: HashMap<String, String>,
    config: SearchConfig,
    rng: SmallRng,
}

impl Engine {
    /// Creates a new engine with no position or active hero.
    pub fn new() -> Self {
        Engine {
            position: None,
            active_hero: None,
            options: HashMap::new(),
            config: SearchConfig::default(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Resets position state for a new game. Options persist.
    pub fn new_game(&mut self) {
        self.position = None;
        self.active_hero = None;
    }

    /// Sets the current position from an AFEN string.
    /// Returns an error message on failure.
    pub fn set_position(&mut self, afen: &str) -> Result<(), String> {
        match parse_afen(afen) {
            Ok(view) => {
                self.position = Some(view);
                Ok(())
            }
            Err(e) => Err(format!("failed to parse AFEN: {}", e)),
        }
    }

    /// Sets the hero the engine plays, overriding the AFEN active section.
    pub fn set_hero(&mut self, id: u8) {
        self.active_hero = Some(HeroId(id));
    }

    /// Sets an engine option and folds recognized ones into the search
    /// configuration.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        let stored = value.unwrap_or_default();
        match name.as_str() {
            "Threads" => {
                if let Ok(n) = stored.parse::<usize>() {
                    self.config.threads = n.max(1);
                }
            }
            "MaxDepth" => {
                if let Ok(d) = stored.parse::<u32>() {
                    self.config.max_depth = d.max(1);
                }
            }
            "EnemyHorizon" => {
                if let Ok(h) = stored.parse::<u32>() {
                    self.config.enemy_horizon = h;
                }
            }
            "StayBonus" => {
                self.config.stay_strategic_bonus = stored == "true";
            }
            "WeightsFile" => match SearchConfig::from_json_file(Path::new(&stored)) {
                Ok(cfg) => {
                    let threads = self.config.threads;
                    self.config = cfg;
                    self.config.threads = threads;
                }
                Err(e) => eprintln!("setoption WeightsFile: {}", e),
            },
            _ => {}
        }
        self.options.insert(name, stored);
    }

    /// Handles the HUI handshake: writes id, options, protocol_version,
    /// and huiok.
    pub fn handle_hui<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name skirmish").unwrap();
        writeln!(out, "id author skirmish developers").unwrap();
        writeln!(out, "option name Threads type spin default 1 min 1 max 64").unwrap();
        writeln!(out, "option name MaxDepth type spin default 4 min 1 max 16").unwrap();
        writeln!(
            out,
            "option name EnemyHorizon type spin default 1 min 0 max 16"
        )
        .unwrap();
        writeln!(out, "option name StayBonus type check default false").unwrap();
        writeln!(out, "option name WeightsFile type string default <empty>").unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "huiok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `go` command: runs the search on the current position
    /// and writes `bestmove <direction>`.
    pub fn handle_go<W: Write>(&mut self, out: &mut W) {
        let Some(view) = &self.position else {
            eprintln!("go: no position set");
            return;
        };

        let view = match self.active_hero {
            Some(id) => {
                if view.hero(id).is_none() {
                    eprintln!("go: hero {} is not in the position", id.0);
                    return;
                }
                let mut v = view.clone();
                v.active = id;
                v
            }
            None => view.clone(),
        };

        let dir = choose_move(&view, &self.config, &mut self.rng);
        writeln!(out, "info depth {} hero {}", self.config.max_depth, view.active.0).unwrap();
        writeln!(out, "bestmove {}", dir.name()).unwrap();
        out.flush().unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;

    const SMALL_AFEN: &str =
        "4/.....|.w...|..m..|.....|...../-/R1@0-0:100,B2@4-4:60,B3@4-0:35/1";

    #[test]
    fn new_engine_has_no_state() {
        let engine = Engine::new();
        assert!(engine.position.is_none());
        assert!(engine.active_hero.is_none());
        assert!(engine.options.is_empty());
    }

    #[test]
    fn new_game_resets_position_but_keeps_options() {
        let mut engine = Engine::new();
        engine.set_position(SMALL_AFEN).unwrap();
        engine.set_hero(1);
        engine.set_option("Threads".to_string(), Some("2".to_string()));
        engine.new_game();
        assert!(engine.position.is_none());
        assert!(engine.active_hero.is_none());
        assert_eq!(engine.options.get("Threads"), Some(&"2".to_string()));
    }

    #[test]
    fn set_position_valid_afen() {
        let mut engine = Engine::new();
        assert!(engine.set_position(SMALL_AFEN).is_ok());
        let view = engine.position.as_ref().unwrap();
        assert_eq!(view.turn, 4);
        assert_eq!(view.heroes.len(), 3);
    }

    #[test]
    fn set_position_invalid_afen() {
        let mut engine = Engine::new();
        assert!(engine.set_position("garbage").is_err());
        assert!(engine.position.is_none());
    }

    #[test]
    fn set_option_updates_search_config() {
        let mut engine = Engine::new();
        engine.set_option("MaxDepth".to_string(), Some("6".to_string()));
        engine.set_option("StayBonus".to_string(), Some("true".to_string()));
        assert_eq!(engine.config.max_depth, 6);
        assert!(engine.config.stay_strategic_bonus);
        // Unparseable values leave the config untouched.
        engine.set_option("MaxDepth".to_string(), Some("lots".to_string()));
        assert_eq!(engine.config.max_depth, 6);
    }

    #[test]
    fn handle_hui_outputs_handshake() {
        let engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_hui(&mut output);

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("id name skirmish"));
        assert!(output_str.contains("option name Threads"));
        assert!(output_str.contains("protocol_version 1"));
        assert!(output_str.ends_with("huiok\n"));
    }

    #[test]
    fn handle_isready_outputs_readyok() {
        let engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_isready(&mut output);
        assert_eq!(String::from_utf8(output).unwrap().trim(), "readyok");
    }

    #[test]
    fn handle_go_outputs_bestmove() {
        let mut engine = Engine::new();
        engine.set_position(SMALL_AFEN).unwrap();
        engine.set_hero(1);

        let mut output = Vec::new();
        engine.handle_go(&mut output);

        let output_str = String::from_utf8(output).unwrap();
        let bestmove_line = output_str
            .lines()
            .find(|l| l.starts_with("bestmove "))
            .unwrap();
        let name = bestmove_line.strip_prefix("bestmove ").unwrap();
        assert!(Direction::from_name(name).is_some(), "bad move: {}", name);
    }

    #[test]
    fn handle_go_without_position_writes_nothing() {
        let mut engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_go(&mut output);
        assert!(output.is_empty());
    }

    #[test]
    fn hero_command_overrides_afen_active_section() {
        let mut engine = Engine::new();
        engine.set_position(SMALL_AFEN).unwrap();
        engine.set_hero(2);

        let mut output = Vec::new();
        engine.handle_go(&mut output);
        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("hero 2"));
    }
}
