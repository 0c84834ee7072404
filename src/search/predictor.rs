//! Opponent behavior prediction.
//!
//! A cheap, non-recursive model of every other agent: wounded heroes run
//! for a well, everyone else follows a vote among simple nearest-target
//! behaviors. Predicted moves are applied to a cloned game view only, with
//! a single destination-tile interaction and no adjacency combat pass --
//! the model is deliberately low-fidelity.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{
    nearest_enemy, nearest_health_well, nearest_non_team_mine, nearest_team_member,
    nearest_weaker_enemy, Direction, GameView, Hero, HeroId, Tile,
};
use crate::config::SearchConfig;

/// Estimates the direction a hero is most likely to take this turn.
///
/// Survival comes first: at or below the base threshold the prediction is
/// always "toward the nearest well". Otherwise each candidate behavior
/// casts one vote and the most-voted direction wins, ties broken
/// uniformly at random.
pub fn predict_move(
    view: &GameView,
    hero: &Hero,
    cfg: &SearchConfig,
    rng: &mut SmallRng,
) -> Direction {
    if hero.health <= cfg.base_health {
        return nearest_health_well(view, hero.position).unwrap_or(Direction::Stay);
    }

    let mut votes: Vec<(Direction, u32)> = Vec::new();
    cast_vote(
        &mut votes,
        nearest_team_member(view, hero.position, hero.team, hero.id),
    );
    cast_vote(&mut votes, nearest_enemy(view, hero.position, hero.team));
    cast_vote(
        &mut votes,
        nearest_weaker_enemy(view, hero.position, hero.team, hero.health),
    );
    cast_vote(
        &mut votes,
        nearest_non_team_mine(view, hero.position, hero.team),
    );
    if hero.health < cfg.safe_health {
        cast_vote(&mut votes, nearest_health_well(view, hero.position));
    }

    let Some(max_votes) = votes.iter().map(|&(_, n)| n).max() else {
        return Direction::Stay;
    };
    let tied: Vec<Direction> = votes
        .iter()
        .filter(|&&(_, n)| n == max_votes)
        .map(|&(d, _)| d)
        .collect();
    tied[rng.gen_range(0..tied.len())]
}

fn cast_vote(votes: &mut Vec<(Direction, u32)>, dir: Option<Direction>) {
    let Some(dir) = dir else {
        return;
    };
    match votes.iter_mut().find(|(d, _)| *d == dir) {
        Some((_, n)) => *n += 1,
        None => votes.push((dir, 1)),
    }
}

/// Applies a predicted move to a cloned view. Only the destination tile is
/// interacted with: movement into open ground, mine capture, well heal, a
/// combined attack on an enemy, or a heal on a teammate.
pub fn apply_move(view: &mut GameView, id: HeroId, dir: Direction, cfg: &SearchConfig) {
    if dir == Direction::Stay {
        return;
    }
    let Some(hero) = view.hero(id) else {
        return;
    };
    if !hero.is_alive() {
        return;
    }
    let team = hero.team;
    let Some((dest, tile)) = view.grid.tile_nearby(hero.position, dir) else {
        return;
    };

    match tile {
        Tile::Unoccupied | Tile::Bones => view.move_hero(id, dest),
        Tile::DiamondMine { owner, .. } => {
            if owner != Some(team) {
                let died = view.damage_hero(id, cfg.mine_capture_damage);
                if !died {
                    view.capture_mine(dest, team);
                }
            }
        }
        Tile::HealthWell => {
            view.heal_hero(id, cfg.well_heal);
        }
        Tile::Hero(other) => {
            let Some(target) = view.hero(other) else {
                return;
            };
            if !target.is_alive() {
                return;
            }
            if target.team != team {
                view.damage_hero(other, cfg.attack_damage + cfg.focused_damage);
            } else {
                view.heal_hero(other, cfg.hero_heal);
            }
        }
    }
}

/// Predicts and applies one move for every live agent other than `acting`,
/// mutating the cloned view in place.
pub fn advance_opponents(
    view: &mut GameView,
    acting: HeroId,
    cfg: &SearchConfig,
    rng: &mut SmallRng,
) {
    let others: Vec<HeroId> = view
        .heroes
        .iter()
        .filter(|h| h.id != acting && h.is_alive())
        .map(|h| h.id)
        .collect();

    for id in others {
        // A hero may have been killed earlier in this same pass.
        let Some(hero) = view.hero(id) else {
            continue;
        };
        if !hero.is_alive() {
            continue;
        }
        let hero = hero.clone();
        let dir = predict_move(view, &hero, cfg, rng);
        apply_move(view, id, dir, cfg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Grid, Position, Team};
    use rand::SeedableRng;

    fn hero(id: u8, team: Team, row: usize, col: usize, health: i32) -> Hero {
        Hero {
            id: HeroId(id),
            team,
            position: Position { row, col },
            health,
        }
    }

    fn view_of(tiles: &[(Position, Tile)], heroes: Vec<Hero>) -> GameView {
        let mut grid = Grid::new(6, 6);
        for &(pos, tile) in tiles {
            grid.set_tile(pos, tile);
        }
        for h in &heroes {
            grid.set_tile(h.position, Tile::Hero(h.id));
        }
        GameView {
            grid,
            heroes,
            active: HeroId(1),
            turn: 0,
        }
    }

    #[test]
    fn wounded_hero_runs_for_the_well() {
        let cfg = SearchConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let view = view_of(
            &[(Position { row: 3, col: 5 }, Tile::HealthWell)],
            vec![
                hero(1, Team::Red, 3, 3, 25),
                hero(2, Team::Blue, 3, 1, 100), // enemy to the west
            ],
        );
        let dir = predict_move(&view, view.hero(HeroId(1)).unwrap(), &cfg, &mut rng);
        assert_eq!(dir, Direction::East);
    }

    #[test]
    fn votes_converge_on_a_common_direction() {
        let cfg = SearchConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        // Weaker enemy, a mine, and the generic enemy all lie east; the
        // lone teammate vote west cannot outvote them.
        let view = view_of(
            &[(
                Position { row: 3, col: 5 },
                Tile::DiamondMine { id: 0, owner: None },
            )],
            vec![
                hero(1, Team::Red, 2, 2, 100),
                hero(2, Team::Blue, 2, 5, 40),
                hero(3, Team::Red, 2, 0, 100),
            ],
        );
        let dir = predict_move(&view, view.hero(HeroId(1)).unwrap(), &cfg, &mut rng);
        assert_eq!(dir, Direction::East);
    }

    #[test]
    fn apply_move_walks_into_open_ground() {
        let cfg = SearchConfig::default();
        let mut view = view_of(&[], vec![hero(1, Team::Red, 2, 2, 100)]);
        apply_move(&mut view, HeroId(1), Direction::North, &cfg);
        assert_eq!(
            view.hero(HeroId(1)).unwrap().position,
            Position { row: 1, col: 2 }
        );
        assert_eq!(view.grid.tile(Position { row: 2, col: 2 }), Tile::Unoccupied);
    }

    #[test]
    fn apply_move_captures_a_mine_at_a_cost() {
        let cfg = SearchConfig::default();
        let mine = Position { row: 1, col: 2 };
        let mut view = view_of(
            &[(mine, Tile::DiamondMine { id: 0, owner: None })],
            vec![hero(1, Team::Red, 2, 2, 100)],
        );
        apply_move(&mut view, HeroId(1), Direction::North, &cfg);
        assert_eq!(view.hero(HeroId(1)).unwrap().health, 80);
        assert_eq!(
            view.grid.tile(mine),
            Tile::DiamondMine {
                id: 0,
                owner: Some(Team::Red)
            }
        );
        // Position unchanged: mines are captured from outside.
        assert_eq!(
            view.hero(HeroId(1)).unwrap().position,
            Position { row: 2, col: 2 }
        );
    }

    #[test]
    fn apply_move_attack_can_kill() {
        let cfg = SearchConfig::default();
        let mut view = view_of(
            &[],
            vec![
                hero(1, Team::Red, 2, 2, 100),
                hero(2, Team::Blue, 1, 2, 25),
            ],
        );
        apply_move(&mut view, HeroId(1), Direction::North, &cfg);
        assert_eq!(view.hero(HeroId(2)).unwrap().health, 0);
        assert_eq!(view.grid.tile(Position { row: 1, col: 2 }), Tile::Bones);
    }

    #[test]
    fn advance_opponents_leaves_the_acting_hero_alone() {
        let cfg = SearchConfig::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut view = view_of(
            &[(Position { row: 0, col: 0 }, Tile::HealthWell)],
            vec![
                hero(1, Team::Red, 5, 5, 100),
                hero(2, Team::Blue, 3, 3, 20),
            ],
        );
        let before = view.hero(HeroId(1)).unwrap().clone();
        advance_opponents(&mut view, HeroId(1), &cfg, &mut rng);
        assert_eq!(view.hero(HeroId(1)).unwrap(), &before);
        // The wounded opponent moved toward the well.
        let moved = view.hero(HeroId(2)).unwrap().position;
        assert_ne!(moved, Position { row: 3, col: 3 });
        assert!(moved.row + moved.col < 6);
    }
}
