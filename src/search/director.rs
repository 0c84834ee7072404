//! Strategic direction.
//!
//! One macro-objective per evaluation step: head for the nearest health
//! well when below the safe threshold, otherwise hunt the nearest enemy.
//! The search rewards candidate moves that align with it.

use crate::board::{nearest_enemy, nearest_health_well, Direction, GameView};
use crate::config::SearchConfig;

use super::snapshot::Snapshot;

/// Computes the preferred cardinal direction for the simulated hero, or
/// `None` when no target of the current kind is reachable.
pub fn strategic_direction(
    view: &GameView,
    status: &Snapshot,
    cfg: &SearchConfig,
) -> Option<Direction> {
    if status.health() < cfg.safe_health {
        nearest_health_well(view, status.position())
    } else {
        nearest_enemy(view, status.position(), status.team())
    }
}

/// Returns true if `dir` should receive the strategic bonus. Stay only
/// qualifies when the configuration says so.
pub fn bonus_applies(dir: Direction, target: Option<Direction>, cfg: &SearchConfig) -> bool {
    target == Some(dir) && (dir != Direction::Stay || cfg.stay_strategic_bonus)
}
