//! Nearest-object queries over the grid.
//!
//! BFS from a starting position through walkable tiles, returning the first
//! step direction and distance to the nearest tile matching a predicate.
//! Target tiles are matched even when they are not walkable (wells, mines,
//! and heroes are interacted with by stepping into them). Expansion is in
//! fixed N,E,S,W order so results are deterministic.

use std::collections::VecDeque;

use super::direction::{Direction, CARDINALS};
use super::grid::Position;
use super::hero::{HeroId, Team};
use super::tile::Tile;
use super::view::GameView;

/// Finds the nearest tile matching `target`, searching outward from `from`.
/// Returns the first-step direction and the distance in steps, or `None`
/// if no matching tile is reachable.
pub fn find_nearest<F>(view: &GameView, from: Position, mut target: F) -> Option<(Direction, u32)>
where
    F: FnMut(&GameView, Position, Tile) -> bool,
{
    let cols = view.grid.cols();
    let mut visited = vec![false; view.grid.rows() * cols];
    visited[from.row * cols + from.col] = true;

    let mut frontier: VecDeque<(Position, Direction, u32)> = VecDeque::new();

    for dir in CARDINALS {
        if let Some((pos, tile)) = view.grid.tile_nearby(from, dir) {
            if target(view, pos, tile) {
                return Some((dir, 1));
            }
            visited[pos.row * cols + pos.col] = true;
            if tile.is_walkable() {
                frontier.push_back((pos, dir, 1));
            }
        }
    }

    while let Some((cur, first, dist)) = frontier.pop_front() {
        for dir in CARDINALS {
            if let Some((pos, tile)) = view.grid.tile_nearby(cur, dir) {
                if visited[pos.row * cols + pos.col] {
                    continue;
                }
                if target(view, pos, tile) {
                    return Some((first, dist + 1));
                }
                visited[pos.row * cols + pos.col] = true;
                if tile.is_walkable() {
                    frontier.push_back((pos, first, dist + 1));
                }
            }
        }
    }

    None
}

/// First step toward the nearest health well.
pub fn nearest_health_well(view: &GameView, from: Position) -> Option<Direction> {
    find_nearest(view, from, |_, _, tile| tile == Tile::HealthWell).map(|(d, _)| d)
}

/// First step toward the nearest live enemy hero.
pub fn nearest_enemy(view: &GameView, from: Position, team: Team) -> Option<Direction> {
    find_nearest(view, from, |v, _, tile| {
        matches!(tile, Tile::Hero(id) if is_enemy(v, id, team))
    })
    .map(|(d, _)| d)
}

/// First step toward the nearest live enemy hero with less health than
/// `health`.
pub fn nearest_weaker_enemy(
    view: &GameView,
    from: Position,
    team: Team,
    health: i32,
) -> Option<Direction> {
    find_nearest(view, from, |v, _, tile| match tile {
        Tile::Hero(id) => v
            .hero(id)
            .is_some_and(|h| h.team != team && h.is_alive() && h.health < health),
        _ => false,
    })
    .map(|(d, _)| d)
}

/// First step toward the nearest live teammate other than `excluding`.
pub fn nearest_team_member(
    view: &GameView,
    from: Position,
    team: Team,
    excluding: HeroId,
) -> Option<Direction> {
    find_nearest(view, from, |v, _, tile| match tile {
        Tile::Hero(id) => {
            id != excluding && v.hero(id).is_some_and(|h| h.team == team && h.is_alive())
        }
        _ => false,
    })
    .map(|(d, _)| d)
}

/// First step toward the nearest mine not already owned by `team`.
pub fn nearest_non_team_mine(view: &GameView, from: Position, team: Team) -> Option<Direction> {
    find_nearest(view, from, |_, _, tile| {
        matches!(tile, Tile::DiamondMine { owner, .. } if owner != Some(team))
    })
    .map(|(d, _)| d)
}

fn is_enemy(view: &GameView, id: HeroId, team: Team) -> bool {
    view.hero(id).is_some_and(|h| h.team != team && h.is_alive())
}
