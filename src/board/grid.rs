//! The arena grid.
//!
//! A row-major rectangle of tiles with checked neighbor lookup. An
//! off-board neighbor is reported as `None`, never an error: the search
//! folds it into terminal handling.

use super::direction::Direction;
use super::tile::Tile;

/// A board-relative (row, column) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// The rectangular tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates a grid of the given size filled with unoccupied tiles.
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid {
            rows,
            cols,
            tiles: vec![Tile::Unoccupied; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the tile at a position.
    pub fn tile(&self, pos: Position) -> Tile {
        self.tiles[pos.row * self.cols + pos.col]
    }

    /// Replaces the tile at a position.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) {
        self.tiles[pos.row * self.cols + pos.col] = tile;
    }

    /// Returns the position one step in `dir`, or `None` if off-board.
    /// Stay always resolves to the current position.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.offset();
        let row = pos.row.checked_add_signed(dr as isize)?;
        let col = pos.col.checked_add_signed(dc as isize)?;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(Position { row, col })
    }

    /// Returns the neighboring position and tile in `dir`, or `None` if
    /// the neighbor is off-board.
    pub fn tile_nearby(&self, pos: Position, dir: Direction) -> Option<(Position, Tile)> {
        let dest = self.step(pos, dir)?;
        Some((dest, self.tile(dest)))
    }

    /// Iterates all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position { row, col }))
    }
}
