//! Tile kinds for the arena grid.
//!
//! Tiles are a closed sum type: the engine matches exhaustively on them and
//! never falls back to string comparison. Bones are a walkable sub-kind of
//! unoccupied ground that grants a minor bonus when walked over.

use super::hero::{HeroId, Team};

/// Identifier of a diamond mine, unique within one board.
pub type MineId = u8;

/// One cell of the arena board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Open ground.
    Unoccupied,
    /// The remains of a fallen hero; walkable.
    Bones,
    /// A diamond mine, possibly captured by a team.
    DiamondMine { id: MineId, owner: Option<Team> },
    /// A health well heroes can drink from by stepping into it.
    HealthWell,
    /// A cell occupied by a live hero.
    Hero(HeroId),
}

impl Tile {
    /// Returns true if a hero can move into this tile.
    pub const fn is_walkable(self) -> bool {
        matches!(self, Tile::Unoccupied | Tile::Bones)
    }

    /// Returns the single-character AFEN code for terrain tiles.
    ///
    /// Hero tiles have no grid character; heroes are encoded in their own
    /// AFEN section and placed onto the grid by the parser.
    pub const fn afen_char(self) -> char {
        match self {
            Tile::Unoccupied => '.',
            Tile::Bones => 'b',
            Tile::DiamondMine { .. } => 'm',
            Tile::HealthWell => 'w',
            Tile::Hero(_) => '.',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkability() {
        assert!(Tile::Unoccupied.is_walkable());
        assert!(Tile::Bones.is_walkable());
        assert!(!Tile::HealthWell.is_walkable());
        assert!(!Tile::DiamondMine { id: 0, owner: None }.is_walkable());
        assert!(!Tile::Hero(HeroId(1)).is_walkable());
    }
}
