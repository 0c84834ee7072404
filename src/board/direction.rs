//! Movement directions.
//!
//! The engine chooses exactly one of five discrete actions per turn: a step
//! in one of the four cardinal directions, or staying put. Iteration order
//! is always North, East, South, West (then Stay) for determinism.

/// One of the five actions available to a hero each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    Stay,
}

/// The four cardinal directions in fixed scan order.
pub const CARDINALS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// All five candidate actions in fixed scan order.
pub const ALL_DIRECTIONS: [Direction; 5] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::Stay,
];

impl Direction {
    /// Returns the (row, col) offset of a single step in this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::Stay => (0, 0),
        }
    }

    /// Returns the protocol name used in `bestmove` lines.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
            Direction::Stay => "Stay",
        }
    }

    /// Parses a direction from its protocol name.
    pub fn from_name(s: &str) -> Option<Direction> {
        match s {
            "North" => Some(Direction::North),
            "East" => Some(Direction::East),
            "South" => Some(Direction::South),
            "West" => Some(Direction::West),
            "Stay" => Some(Direction::Stay),
            _ => None,
        }
    }
}
