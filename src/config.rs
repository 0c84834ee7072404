//! Search configuration.
//!
//! All weights, thresholds, and depth limits live in one immutable struct
//! passed explicitly into the scoring function and the move simulator --
//! there is no module-level mutable state. A tuning file in JSON can
//! override any subset of fields (`setoption name WeightsFile value <path>`).

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur while loading a weights file.
#[derive(Debug, thiserror::Error)]
pub enum WeightsError {
    #[error("failed to read weights file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse weights file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable tuning parameters for the decision engine.
///
/// Damage and heal constants match the arena rules; the weights and
/// thresholds are hand-tuned.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Passive damage each adjacent enemy deals per turn.
    pub attack_damage: i32,
    /// Extra damage dealt by deliberately stepping into an enemy.
    pub focused_damage: i32,
    /// Health paid to capture a diamond mine.
    pub mine_capture_damage: i32,
    /// Health restored by stepping into a health well.
    pub well_heal: i32,
    /// Health granted by stepping into a teammate.
    pub hero_heal: i32,

    /// At or above this health a hero hunts enemies instead of wells.
    pub safe_health: i32,
    /// At or below this health survival overrides everything else.
    pub base_health: i32,

    /// Flat score bonus for health above `safe_health`.
    pub safe_health_bonus: f32,
    /// Flat score bonus for health above `base_health`.
    pub base_health_bonus: f32,
    /// Score per kill.
    pub kill_weight: f32,
    /// Score per life saved by a heal.
    pub life_saved_weight: f32,
    /// Score per mine captured.
    pub mine_weight: f32,
    /// Score per grave walked over.
    pub grave_weight: f32,
    /// Healing below this total is not rewarded (no trivial top-offs).
    pub free_heal: i32,

    /// Search depth bound; recursion stops when `depth + 1` reaches it.
    pub max_depth: u32,
    /// Deepest ply at which opponent moves are still re-predicted.
    pub enemy_horizon: u32,
    /// Reward for moving along the strategic direction.
    pub strategic_bonus: f32,
    /// Whether Stay may receive the strategic bonus.
    pub stay_strategic_bonus: bool,

    /// Root branches are evaluated with rayon when this exceeds 1.
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            attack_damage: 20,
            focused_damage: 10,
            mine_capture_damage: 20,
            well_heal: 30,
            hero_heal: 40,
            safe_health: 60,
            base_health: 30,
            safe_health_bonus: 20.0,
            base_health_bonus: 10.0,
            kill_weight: 100.0,
            life_saved_weight: 100.0,
            mine_weight: 50.0,
            grave_weight: 5.0,
            free_heal: 15,
            max_depth: 4,
            enemy_horizon: 1,
            strategic_bonus: 15.0,
            stay_strategic_bonus: false,
            threads: 1,
        }
    }
}

impl SearchConfig {
    /// Loads a configuration from a JSON tuning file. Fields missing from
    /// the file keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<SearchConfig, WeightsError> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
