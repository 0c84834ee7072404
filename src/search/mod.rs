//! Move search.
//!
//! The recursive branch-and-simulate search over hypothetical futures:
//! simulated snapshots, combat resolution, strategic direction, opponent
//! prediction, and the top-level decision.

pub mod combat;
pub mod decide;
pub mod director;
pub mod predictor;
pub mod simulate;
pub mod snapshot;

pub use combat::{adjacent_enemies, resolve_passive_combat};
pub use decide::choose_move;
pub use director::strategic_direction;
pub use predictor::{advance_opponents, apply_move, predict_move};
pub use simulate::evaluate;
pub use snapshot::Snapshot;
