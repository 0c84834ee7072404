//! Text protocols: AFEN position notation and the HUI command grammar.

pub mod afen;
pub mod parser;

pub use afen::{encode_afen, parse_afen, AfenError};
pub use parser::{parse_command, Command};
