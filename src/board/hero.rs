//! Hero identity, team, and roster records.

use super::grid::Position;

/// Maximum (and starting) hero health.
pub const MAX_HEALTH: i32 = 100;

/// One of the two arena teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Team {
    Red = 0,
    Blue = 1,
}

impl Team {
    /// Returns the single-character AFEN abbreviation.
    pub const fn afen_char(self) -> char {
        match self {
            Team::Red => 'R',
            Team::Blue => 'B',
        }
    }

    /// Parses a team from its single-character AFEN abbreviation.
    pub fn from_afen_char(c: char) -> Option<Team> {
        match c {
            'R' => Some(Team::Red),
            'B' => Some(Team::Blue),
            _ => None,
        }
    }
}

/// Identifies a hero within one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeroId(pub u8);

/// A hero's live record in the game-view roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub id: HeroId,
    pub team: Team,
    pub position: Position,
    pub health: i32,
}

impl Hero {
    /// Returns true while the hero is still on the board.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
