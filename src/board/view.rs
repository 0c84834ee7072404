//! The game view: grid plus hero roster plus acting hero.
//!
//! The live view is read-only to the search. Opponent modeling works on a
//! clone; `#[derive(Clone)]` over the concrete shape (grid tiles, hero
//! records) is the explicit typed deep copy, so mutations on a clone are
//! never visible to the real game state or to sibling search branches.

use super::grid::{Grid, Position};
use super::hero::{Hero, HeroId, Team, MAX_HEALTH};
use super::tile::Tile;

/// Everything the engine can see: the board, every hero, and which hero
/// is acting this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub grid: Grid,
    pub heroes: Vec<Hero>,
    pub active: HeroId,
    pub turn: u32,
}

impl GameView {
    /// Looks up a hero by id.
    pub fn hero(&self, id: HeroId) -> Option<&Hero> {
        self.heroes.iter().find(|h| h.id == id)
    }

    fn hero_mut(&mut self, id: HeroId) -> Option<&mut Hero> {
        self.heroes.iter_mut().find(|h| h.id == id)
    }

    /// The hero the engine is choosing a move for.
    pub fn active_hero(&self) -> Option<&Hero> {
        self.hero(self.active)
    }

    /// Moves a hero to a walkable destination, swapping board cell
    /// ownership. The vacated cell becomes unoccupied.
    pub fn move_hero(&mut self, id: HeroId, to: Position) {
        let Some(hero) = self.hero_mut(id) else {
            return;
        };
        let from = hero.position;
        hero.position = to;
        self.grid.set_tile(from, Tile::Unoccupied);
        self.grid.set_tile(to, Tile::Hero(id));
    }

    /// Heals a hero, clamped to `MAX_HEALTH`. Returns the actual delta.
    pub fn heal_hero(&mut self, id: HeroId, amount: i32) -> i32 {
        let Some(hero) = self.hero_mut(id) else {
            return 0;
        };
        let before = hero.health;
        hero.health = (before + amount).min(MAX_HEALTH);
        hero.health - before
    }

    /// Damages a hero. A hero reaching zero health dies: its cell becomes
    /// bones and its health is clamped at zero. Returns true on death.
    pub fn damage_hero(&mut self, id: HeroId, amount: i32) -> bool {
        let Some(hero) = self.hero_mut(id) else {
            return false;
        };
        hero.health -= amount;
        if hero.health <= 0 {
            hero.health = 0;
            let pos = hero.position;
            self.grid.set_tile(pos, Tile::Bones);
            return true;
        }
        false
    }

    /// Marks the mine at `pos` as owned by `team`. No-op for other tiles.
    pub fn capture_mine(&mut self, pos: Position, team: Team) {
        if let Tile::DiamondMine { id, .. } = self.grid.tile(pos) {
            self.grid.set_tile(
                pos,
                Tile::DiamondMine {
                    id,
                    owner: Some(team),
                },
            );
        }
    }
}
