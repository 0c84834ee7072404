//! Heuristic evaluation.
//!
//! Pure scoring of simulated hero snapshots, in absolute and
//! delta-from-baseline forms.

pub mod score;

pub use score::{delta_score, score};
