//! Adjacency scanning and passive combat resolution.
//!
//! Every hero adjacent to an enemy at end of turn attacks it, and is
//! attacked back, simultaneously. The resolver applies that exchange to a
//! simulated snapshot after each action.

use crate::board::{GameView, HeroId, Position, Team, CARDINALS, Tile};
use crate::config::SearchConfig;

use super::snapshot::Snapshot;

/// Returns the live enemy heroes on the four cardinal neighbors of `pos`,
/// in fixed North, East, South, West order.
pub fn adjacent_enemies(view: &GameView, pos: Position, team: Team) -> Vec<HeroId> {
    let mut enemies = Vec::new();
    for dir in CARDINALS {
        if let Some((_, Tile::Hero(id))) = view.grid.tile_nearby(pos, dir) {
            if view
                .hero(id)
                .is_some_and(|h| h.team != team && h.is_alive())
            {
                enemies.push(id);
            }
        }
    }
    enemies
}

/// Resolves simultaneous passive combat at the snapshot's current
/// position: each adjacent enemy lands one attack on us, we retaliate
/// against all of them at once, and any enemy already at or below
/// single-attack health is counted as a would-kill.
pub fn resolve_passive_combat(view: &GameView, status: &mut Snapshot, cfg: &SearchConfig) {
    let enemies = adjacent_enemies(view, status.position(), status.team());
    if enemies.is_empty() {
        return;
    }
    let n = enemies.len() as i32;
    status.add_health(-(n * cfg.attack_damage));
    status.record_damage(n * cfg.attack_damage);
    for id in enemies {
        if view
            .hero(id)
            .is_some_and(|h| h.health <= cfg.attack_damage)
        {
            status.record_kill();
        }
    }
}
