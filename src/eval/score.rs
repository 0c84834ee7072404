//! Snapshot scoring.
//!
//! Maps a simulated hero state to a scalar desirability. The function is
//! pure over the snapshot's own fields and total for valid snapshots; a
//! dead snapshot scores negative infinity no matter what else it
//! accomplished. Weights come from the search configuration.

use crate::config::SearchConfig;
use crate::search::snapshot::Snapshot;

/// Scores a snapshot on its absolute accumulated stats.
///
/// Terms:
/// - flat bonuses for health above the safe and base thresholds
/// - kills and lives saved at full weight
/// - mines captured at half weight
/// - raw damage done (10-30 per attack, unscaled)
/// - healing given beyond the free allowance (no reward for top-offs)
/// - a small bonus per grave robbed
///
/// The result is memoized in the snapshot for its lifetime.
pub fn score(snapshot: &Snapshot, cfg: &SearchConfig) -> f32 {
    if snapshot.health() <= 0 {
        return f32::NEG_INFINITY;
    }
    if let Some(cached) = snapshot.cached_score() {
        return cached;
    }

    let mut total = 0.0;
    if snapshot.health() > cfg.safe_health {
        total += cfg.safe_health_bonus;
    }
    if snapshot.health() > cfg.base_health {
        total += cfg.base_health_bonus;
    }
    total += cfg.kill_weight * snapshot.kill_count() as f32;
    total += cfg.life_saved_weight * snapshot.lives_saved() as f32;
    total += cfg.mine_weight * snapshot.mines_captured() as f32;
    total += snapshot.damage_done() as f32;
    total += (snapshot.health_given() - cfg.free_heal).max(0) as f32;
    total += cfg.grave_weight * snapshot.graves_robbed() as f32;

    snapshot.cache_score(total);
    total
}

/// Scores only what happened since `baseline`: the baseline's counters are
/// subtracted (floored at zero) before scoring, so historical totals
/// carried into the simulation do not inflate a node's value. Used inside
/// the recursive search; `score` is used for absolute comparisons.
pub fn delta_score(snapshot: &Snapshot, baseline: &Snapshot, cfg: &SearchConfig) -> f32 {
    score(&snapshot.delta_from(baseline), cfg)
}
