//! The simulated hero state carried through the search tree.
//!
//! A snapshot is created by cloning its parent at node entry and discarded
//! when the branch completes; the captured-mine set is deep-copied so
//! sibling branches never interfere. Health is clamped to 0..=100 in one
//! place, and the score memo is owned by the snapshot itself rather than
//! any module-level cache. The memo is a `OnceLock` so a shared snapshot
//! can cross thread boundaries during parallel root evaluation; mutators
//! replace it to invalidate.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::board::{Hero, HeroId, MineId, Position, Team, MAX_HEALTH};

/// The acting agent's accumulated state at one node of the search tree.
#[derive(Debug, Clone)]
pub struct Snapshot {
    id: HeroId,
    team: Team,
    position: Position,
    health: i32,
    health_given: i32,
    lives_saved: u32,
    mines_captured: u32,
    mines_owned: HashSet<MineId>,
    damage_done: i32,
    kill_count: u32,
    graves_robbed: u32,
    memo: OnceLock<f32>,
}

impl Snapshot {
    /// Builds the root snapshot from a live hero record. Accumulated
    /// counters start at zero: the search scores what happens from here.
    pub fn from_hero(hero: &Hero) -> Snapshot {
        Snapshot {
            id: hero.id,
            team: hero.team,
            position: hero.position,
            health: hero.health.clamp(0, MAX_HEALTH),
            health_given: 0,
            lives_saved: 0,
            mines_captured: 0,
            mines_owned: HashSet::new(),
            damage_done: 0,
            kill_count: 0,
            graves_robbed: 0,
            memo: OnceLock::new(),
        }
    }

    pub fn id(&self) -> HeroId {
        self.id
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn health_given(&self) -> i32 {
        self.health_given
    }

    pub fn lives_saved(&self) -> u32 {
        self.lives_saved
    }

    pub fn mines_captured(&self) -> u32 {
        self.mines_captured
    }

    pub fn damage_done(&self) -> i32 {
        self.damage_done
    }

    pub fn kill_count(&self) -> u32 {
        self.kill_count
    }

    pub fn graves_robbed(&self) -> u32 {
        self.graves_robbed
    }

    /// Moves the simulated hero to a new position.
    pub fn move_to(&mut self, pos: Position) {
        self.position = pos;
        self.memo = OnceLock::new();
    }

    /// Adds (or subtracts) health, clamped to 0..=100.
    pub fn add_health(&mut self, delta: i32) {
        self.health = (self.health + delta).clamp(0, MAX_HEALTH);
        self.memo = OnceLock::new();
    }

    /// Attempts to capture a mine. Capture costs health and is idempotent:
    /// a mine already held along this path returns false and changes
    /// nothing.
    pub fn capture_mine(&mut self, mine: MineId, capture_damage: i32) -> bool {
        if !self.mines_owned.insert(mine) {
            return false;
        }
        self.health = (self.health - capture_damage).clamp(0, MAX_HEALTH);
        self.mines_captured += 1;
        self.memo = OnceLock::new();
        true
    }

    /// Returns true if this path has already captured the given mine.
    pub fn owns_mine(&self, mine: MineId) -> bool {
        self.mines_owned.contains(&mine)
    }

    pub fn record_damage(&mut self, amount: i32) {
        self.damage_done += amount;
        self.memo = OnceLock::new();
    }

    pub fn record_kill(&mut self) {
        self.kill_count += 1;
        self.memo = OnceLock::new();
    }

    pub fn record_heal(&mut self, given: i32) {
        self.health_given += given;
        self.memo = OnceLock::new();
    }

    pub fn record_life_saved(&mut self) {
        self.lives_saved += 1;
        self.memo = OnceLock::new();
    }

    pub fn rob_grave(&mut self) {
        self.graves_robbed += 1;
        self.memo = OnceLock::new();
    }

    /// Returns a snapshot whose counters are the change since `baseline`,
    /// each floored at zero. Health and position are carried as-is.
    pub fn delta_from(&self, baseline: &Snapshot) -> Snapshot {
        Snapshot {
            id: self.id,
            team: self.team,
            position: self.position,
            health: self.health,
            health_given: (self.health_given - baseline.health_given).max(0),
            lives_saved: self.lives_saved.saturating_sub(baseline.lives_saved),
            mines_captured: self.mines_captured.saturating_sub(baseline.mines_captured),
            mines_owned: self.mines_owned.clone(),
            damage_done: (self.damage_done - baseline.damage_done).max(0),
            kill_count: self.kill_count.saturating_sub(baseline.kill_count),
            graves_robbed: self.graves_robbed.saturating_sub(baseline.graves_robbed),
            memo: OnceLock::new(),
        }
    }

    pub(crate) fn cached_score(&self) -> Option<f32> {
        self.memo.get().copied()
    }

    pub(crate) fn cache_score(&self, score: f32) {
        let _ = self.memo.set(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(health: i32) -> Snapshot {
        Snapshot::from_hero(&Hero {
            id: HeroId(1),
            team: Team::Red,
            position: Position { row: 0, col: 0 },
            health,
        })
    }

    #[test]
    fn health_is_clamped_both_ways() {
        let mut s = snapshot(90);
        s.add_health(30);
        assert_eq!(s.health(), 100);
        s.add_health(-250);
        assert_eq!(s.health(), 0);
    }

    #[test]
    fn capture_is_idempotent() {
        let mut s = snapshot(100);
        assert!(s.capture_mine(3, 20));
        assert_eq!(s.health(), 80);
        assert_eq!(s.mines_captured(), 1);

        assert!(!s.capture_mine(3, 20));
        assert_eq!(s.health(), 80);
        assert_eq!(s.mines_captured(), 1);
        assert!(s.owns_mine(3));
    }

    #[test]
    fn clone_deep_copies_mine_set() {
        let mut parent = snapshot(100);
        parent.capture_mine(1, 20);
        let mut child = parent.clone();
        child.capture_mine(2, 20);
        assert!(!parent.owns_mine(2));
        assert!(child.owns_mine(1));
    }

    #[test]
    fn snapshot_is_send_and_sync() {
        fn assert_shareable<T: Send + Sync>() {}
        assert_shareable::<Snapshot>();
    }

    #[test]
    fn mutation_invalidates_the_cached_score() {
        let mut s = snapshot(100);
        s.cache_score(42.0);
        assert_eq!(s.cached_score(), Some(42.0));
        s.record_kill();
        assert_eq!(s.cached_score(), None);
        s.cache_score(7.0);
        assert_eq!(s.cached_score(), Some(7.0));
    }

    #[test]
    fn delta_floors_counters_at_zero() {
        let mut baseline = snapshot(100);
        baseline.record_damage(40);
        baseline.record_kill();

        let mut current = baseline.clone();
        current.record_damage(20);
        current.rob_grave();

        let delta = current.delta_from(&baseline);
        assert_eq!(delta.damage_done(), 20);
        assert_eq!(delta.kill_count(), 0);
        assert_eq!(delta.graves_robbed(), 1);

        // Baseline ahead of current on a counter floors at zero.
        let reverse = baseline.delta_from(&current);
        assert_eq!(reverse.damage_done(), 0);
    }
}
