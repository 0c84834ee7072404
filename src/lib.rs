//! Skirmish engine library.
//!
//! Exposes the board representation, configuration, evaluation, search,
//! and protocol modules for use by integration tests and the binary
//! entry point.

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod protocol;
pub mod search;
