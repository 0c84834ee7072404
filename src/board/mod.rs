//! Board representation and game-state types.
//!
//! Contains the core data structures for the grid, tiles, heroes, and the
//! game view, plus the nearest-object pathfinding queries the search and
//! the opponent predictor consume.

pub mod direction;
pub mod grid;
pub mod hero;
pub mod pathfind;
pub mod tile;
pub mod view;

pub use direction::{Direction, ALL_DIRECTIONS, CARDINALS};
pub use grid::{Grid, Position};
pub use hero::{Hero, HeroId, Team, MAX_HEALTH};
pub use pathfind::{
    find_nearest, nearest_enemy, nearest_health_well, nearest_non_team_mine, nearest_team_member,
    nearest_weaker_enemy,
};
pub use tile::{MineId, Tile};
pub use view::GameView;
