//! Top-level move decision.
//!
//! Evaluates the five root directions with the move simulator, adds the
//! root strategic bonus, and picks the arg-max with a uniform random
//! tie-break. Root branches are independent: each gets its own derived
//! RNG seed, and with more than one thread configured they are evaluated
//! in parallel with rayon.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::board::{Direction, GameView, ALL_DIRECTIONS};
use crate::config::SearchConfig;

use super::director::{bonus_applies, strategic_direction};
use super::simulate::evaluate;
use super::snapshot::Snapshot;

/// Chooses the best direction for the acting hero.
///
/// Stay is always legal, so there is always a move to return; a view with
/// no acting hero (which a well-formed position cannot produce) falls
/// back to Stay.
pub fn choose_move(view: &GameView, cfg: &SearchConfig, rng: &mut SmallRng) -> Direction {
    let Some(hero) = view.active_hero() else {
        return Direction::Stay;
    };
    let root = Snapshot::from_hero(hero);
    let target = strategic_direction(view, &root, cfg);

    let legal: Vec<Direction> = ALL_DIRECTIONS
        .into_iter()
        .filter(|&d| d == Direction::Stay || view.grid.step(root.position(), d).is_some())
        .collect();

    // Each branch owns a seed derived from the shared RNG so results are
    // reproducible under a fixed seed regardless of thread count.
    let branch_seed: u64 = rng.gen();
    let scored: Vec<(Direction, f32)> = if cfg.threads > 1 {
        legal
            .par_iter()
            .enumerate()
            .map(|(i, &dir)| {
                let mut branch_rng = SmallRng::seed_from_u64(branch_seed.wrapping_add(i as u64));
                (dir, root_score(view, &root, dir, target, cfg, &mut branch_rng))
            })
            .collect()
    } else {
        legal
            .iter()
            .enumerate()
            .map(|(i, &dir)| {
                let mut branch_rng = SmallRng::seed_from_u64(branch_seed.wrapping_add(i as u64));
                (dir, root_score(view, &root, dir, target, cfg, &mut branch_rng))
            })
            .collect()
    };

    let mut best_score = f32::NEG_INFINITY;
    let mut best: Vec<Direction> = Vec::new();
    for (dir, score) in scored {
        if score > best_score {
            best_score = score;
            best = vec![dir];
        } else if score == best_score {
            best.push(dir);
        }
    }

    let chosen = best[rng.gen_range(0..best.len())];
    tracing::debug!(
        direction = chosen.name(),
        score = best_score,
        tied = best.len(),
        "move chosen"
    );
    chosen
}

fn root_score(
    view: &GameView,
    root: &Snapshot,
    dir: Direction,
    target: Option<Direction>,
    cfg: &SearchConfig,
    rng: &mut SmallRng,
) -> f32 {
    let mut score = evaluate(view, root, dir, 1, cfg, rng);
    if bonus_applies(dir, target, cfg) {
        score += cfg.strategic_bonus;
    }
    score
}
