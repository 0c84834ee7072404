//! The recursive move simulator.
//!
//! Given a candidate direction and the current simulated status, applies
//! the action's effects, resolves passive combat, scores the step against
//! the node's baseline discounted by depth, then recurses over all five
//! directions one ply deeper and propagates the best future score.
//! Negative-trending branches are cut off without recursing; branches at
//! the depth bound, with a dead pre-move status, or walking off the board
//! return a neutral zero so level comparisons stay unbiased.

use rand::rngs::SmallRng;

use crate::board::{Direction, GameView, Position, Tile, ALL_DIRECTIONS, MAX_HEALTH};
use crate::config::SearchConfig;
use crate::eval::delta_score;

use super::combat::{adjacent_enemies, resolve_passive_combat};
use super::director::{bonus_applies, strategic_direction};
use super::predictor::advance_opponents;
use super::snapshot::Snapshot;

/// Evaluates moving in `dir` from the state described by `root`, at the
/// given ply. Returns the discounted score of this step plus the best
/// achievable continuation.
///
/// Ply numbering starts at 1: the root branches are evaluated at
/// `depth = 1` and the discount divides by `depth`.
pub fn evaluate(
    view: &GameView,
    root: &Snapshot,
    dir: Direction,
    depth: u32,
    cfg: &SearchConfig,
    rng: &mut SmallRng,
) -> f32 {
    debug_assert!(depth >= 1, "ply numbering starts at 1");
    if depth + 1 >= cfg.max_depth || root.health() <= 0 {
        return 0.0;
    }
    let destination = if dir == Direction::Stay {
        Some((root.position(), view.grid.tile(root.position())))
    } else {
        view.grid.tile_nearby(root.position(), dir)
    };
    let Some((dest_pos, dest_tile)) = destination else {
        // Off-board step: terminal, neutral.
        return 0.0;
    };

    let mut status = root.clone();
    if dir != Direction::Stay {
        apply_action(view, &mut status, dest_pos, dest_tile, cfg);
    }
    resolve_passive_combat(view, &mut status, cfg);

    // Deeper, less certain rewards count for less.
    let step_score = delta_score(&status, root, cfg) / depth as f32;
    if step_score < 0.0 {
        // Heuristic cutoff: a negative-trending branch is not worth
        // exploring deeper.
        return step_score;
    }

    // Re-predicting every opponent needs a full view clone, so it only
    // happens within the enemy horizon; deeper plies reuse the clone.
    let refreshed: Option<GameView> = if depth <= cfg.enemy_horizon {
        let mut clone = view.clone();
        if status.position() != root.position() {
            clone.move_hero(status.id(), status.position());
        }
        advance_opponents(&mut clone, status.id(), cfg, rng);
        Some(clone)
    } else {
        None
    };
    let next_view = refreshed.as_ref().unwrap_or(view);

    let target = strategic_direction(next_view, &status, cfg);
    let mut best = f32::NEG_INFINITY;
    for candidate in ALL_DIRECTIONS {
        let mut child = evaluate(next_view, &status, candidate, depth + 1, cfg, rng);
        if bonus_applies(candidate, target, cfg) {
            child += cfg.strategic_bonus / depth as f32;
        }
        if child > best {
            best = child;
        }
    }

    step_score + best
}

/// Applies the effects of deliberately stepping toward `dest_tile` to the
/// simulated status. Movement only happens into walkable tiles; mines,
/// wells, and heroes are interacted with from the current cell.
///
/// The lives-saved heuristic measures the ally's adjacent-enemy threat
/// against its health before the heal is applied.
fn apply_action(
    view: &GameView,
    status: &mut Snapshot,
    dest_pos: Position,
    dest_tile: Tile,
    cfg: &SearchConfig,
) {
    match dest_tile {
        Tile::Unoccupied => status.move_to(dest_pos),
        Tile::Bones => {
            status.rob_grave();
            status.move_to(dest_pos);
        }
        Tile::DiamondMine { id, .. } => {
            if !status.capture_mine(id, cfg.mine_capture_damage) {
                tracing::trace!(mine = id, "ignoring re-capture of an already-held mine");
            }
        }
        Tile::HealthWell => status.add_health(cfg.well_heal),
        Tile::Hero(other_id) => {
            let Some(other) = view.hero(other_id) else {
                return;
            };
            if other.team != status.team() {
                status.record_damage(cfg.focused_damage);
                // A focused attack finishes an enemy the passive exchange
                // alone would leave standing.
                let lo = cfg.attack_damage;
                let hi = cfg.attack_damage + cfg.focused_damage;
                if other.health > lo && other.health <= hi {
                    status.record_kill();
                }
            } else if other.id != status.id() {
                let threats =
                    adjacent_enemies(view, other.position, status.team()).len() as i32;
                if other.health <= threats * (cfg.attack_damage + cfg.focused_damage) {
                    status.record_life_saved();
                }
                let healed = (other.health + cfg.hero_heal).min(MAX_HEALTH) - other.health;
                status.record_heal(healed);
            }
        }
    }
}
