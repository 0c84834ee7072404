//! AFEN (Arena FEN) encoding and decoding.
//!
//! AFEN is a compact one-line notation for a full arena position,
//! inspired by chess FEN. Five sections separated by `/`:
//!
//! `<turn>/<grid>/<mine owners>/<heroes>/<active hero id>`
//!
//! - grid: rows separated by `|`; cells are `.` (unoccupied), `b`
//!   (bones), `w` (health well), `m` (diamond mine). Hero cells are
//!   written as `.`; heroes live in their own section and are placed
//!   onto the grid by the parser.
//! - mine owners: `-` when every mine is neutral, otherwise one entry
//!   per mine in row-major scan order (`-`, `R`, or `B`), comma-
//!   separated. Mine ids are assigned in the same scan order.
//! - heroes: comma-separated `<team><id>@<row>-<col>:<health>`, e.g.
//!   `R1@2-3:100`.

use crate::board::{GameView, Grid, Hero, HeroId, Position, Team, Tile, MAX_HEALTH};

/// Errors that can occur during AFEN parsing.
#[derive(Debug, thiserror::Error)]
pub enum AfenError {
    #[error("expected 5 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("invalid turn number: '{0}'")]
    InvalidTurn(String),

    #[error("grid has no rows")]
    EmptyGrid,

    #[error("grid row {0} has a different width than row 0")]
    RaggedGrid(usize),

    #[error("invalid tile character: '{0}'")]
    InvalidTile(char),

    #[error("board has more than 256 mines")]
    TooManyMines,

    #[error("expected {expected} mine owner entries, got {got}")]
    WrongMineOwnerCount { expected: usize, got: usize },

    #[error("invalid mine owner entry: '{0}'")]
    InvalidMineOwner(String),

    #[error("invalid hero entry: '{0}'")]
    InvalidHeroEntry(String),

    #[error("duplicate hero id {0}")]
    DuplicateHero(u8),

    #[error("hero entry '{0}' is off the board or on a blocked tile")]
    UnplaceableHero(String),

    #[error("invalid active hero id: '{0}'")]
    InvalidActive(String),

    #[error("active hero {0} is not in the hero section")]
    UnknownActiveHero(u8),
}

/// Parses an AFEN string into a game view.
pub fn parse_afen(afen: &str) -> Result<GameView, AfenError> {
    let sections: Vec<&str> = afen.trim().split('/').collect();
    if sections.len() != 5 {
        return Err(AfenError::WrongSectionCount(sections.len()));
    }

    let turn: u32 = sections[0]
        .parse()
        .map_err(|_| AfenError::InvalidTurn(sections[0].to_string()))?;

    let (mut grid, mine_count) = parse_grid(sections[1])?;
    apply_mine_owners(&mut grid, mine_count, sections[2])?;
    let heroes = parse_heroes(&mut grid, sections[3])?;

    let active_id: u8 = sections[4]
        .parse()
        .map_err(|_| AfenError::InvalidActive(sections[4].to_string()))?;
    let active = HeroId(active_id);
    if !heroes.iter().any(|h| h.id == active) {
        return Err(AfenError::UnknownActiveHero(active_id));
    }

    Ok(GameView {
        grid,
        heroes,
        active,
        turn,
    })
}

fn parse_grid(section: &str) -> Result<(Grid, usize), AfenError> {
    let rows: Vec<&str> = section.split('|').collect();
    if rows.is_empty() || rows[0].is_empty() {
        return Err(AfenError::EmptyGrid);
    }
    let cols = rows[0].chars().count();
    let mut grid = Grid::new(rows.len(), cols);
    let mut mine_count: usize = 0;

    for (r, row) in rows.iter().enumerate() {
        if row.chars().count() != cols {
            return Err(AfenError::RaggedGrid(r));
        }
        for (c, ch) in row.chars().enumerate() {
            let pos = Position { row: r, col: c };
            let tile = match ch {
                '.' => Tile::Unoccupied,
                'b' => Tile::Bones,
                'w' => Tile::HealthWell,
                'm' => {
                    if mine_count > u8::MAX as usize {
                        return Err(AfenError::TooManyMines);
                    }
                    let tile = Tile::DiamondMine {
                        id: mine_count as u8,
                        owner: None,
                    };
                    mine_count += 1;
                    tile
                }
                other => return Err(AfenError::InvalidTile(other)),
            };
            grid.set_tile(pos, tile);
        }
    }

    Ok((grid, mine_count))
}

fn apply_mine_owners(grid: &mut Grid, mine_count: usize, section: &str) -> Result<(), AfenError> {
    if section == "-" {
        return Ok(());
    }
    let entries: Vec<&str> = section.split(',').collect();
    if entries.len() != mine_count {
        return Err(AfenError::WrongMineOwnerCount {
            expected: mine_count,
            got: entries.len(),
        });
    }

    let mine_positions: Vec<Position> = grid
        .positions()
        .filter(|&p| matches!(grid.tile(p), Tile::DiamondMine { .. }))
        .collect();
    for (pos, entry) in mine_positions.into_iter().zip(entries) {
        let owner = match entry {
            "-" => None,
            _ => {
                let mut chars = entry.chars();
                match (chars.next().and_then(Team::from_afen_char), chars.next()) {
                    (Some(team), None) => Some(team),
                    _ => return Err(AfenError::InvalidMineOwner(entry.to_string())),
                }
            }
        };
        if let Tile::DiamondMine { id, .. } = grid.tile(pos) {
            grid.set_tile(pos, Tile::DiamondMine { id, owner });
        }
    }
    Ok(())
}

fn parse_heroes(grid: &mut Grid, section: &str) -> Result<Vec<Hero>, AfenError> {
    let mut heroes: Vec<Hero> = Vec::new();

    for entry in section.split(',') {
        let hero =
            parse_hero_entry(entry).ok_or_else(|| AfenError::InvalidHeroEntry(entry.to_string()))?;
        if heroes.iter().any(|h| h.id == hero.id) {
            return Err(AfenError::DuplicateHero(hero.id.0));
        }
        let on_board =
            hero.position.row < grid.rows() && hero.position.col < grid.cols();
        if !on_board || grid.tile(hero.position) != Tile::Unoccupied {
            return Err(AfenError::UnplaceableHero(entry.to_string()));
        }
        grid.set_tile(hero.position, Tile::Hero(hero.id));
        heroes.push(hero);
    }

    Ok(heroes)
}

/// Parses one `<team><id>@<row>-<col>:<health>` entry.
fn parse_hero_entry(entry: &str) -> Option<Hero> {
    let mut chars = entry.chars();
    let team = Team::from_afen_char(chars.next()?)?;
    let rest = chars.as_str();

    let (id_str, rest) = rest.split_once('@')?;
    let (pos_str, health_str) = rest.split_once(':')?;
    let (row_str, col_str) = pos_str.split_once('-')?;

    let id: u8 = id_str.parse().ok()?;
    let row: usize = row_str.parse().ok()?;
    let col: usize = col_str.parse().ok()?;
    let health: i32 = health_str.parse().ok()?;
    if health < 1 || health > MAX_HEALTH {
        return None;
    }

    Some(Hero {
        id: HeroId(id),
        team,
        position: Position { row, col },
        health,
    })
}

/// Encodes a game view back into AFEN. Dead heroes are omitted.
pub fn encode_afen(view: &GameView) -> String {
    let mut grid_rows: Vec<String> = Vec::with_capacity(view.grid.rows());
    let mut mine_owners: Vec<String> = Vec::new();

    for row in 0..view.grid.rows() {
        let mut line = String::with_capacity(view.grid.cols());
        for col in 0..view.grid.cols() {
            let tile = view.grid.tile(Position { row, col });
            if let Tile::DiamondMine { owner, .. } = tile {
                mine_owners.push(match owner {
                    None => "-".to_string(),
                    Some(team) => team.afen_char().to_string(),
                });
            }
            line.push(tile.afen_char());
        }
        grid_rows.push(line);
    }

    let mines = if mine_owners.iter().all(|o| o == "-") {
        "-".to_string()
    } else {
        mine_owners.join(",")
    };

    let heroes = view
        .heroes
        .iter()
        .filter(|h| h.is_alive())
        .map(|h| {
            format!(
                "{}{}@{}-{}:{}",
                h.team.afen_char(),
                h.id.0,
                h.position.row,
                h.position.col,
                h.health
            )
        })
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "{}/{}/{}/{}/{}",
        view.turn,
        grid_rows.join("|"),
        mines,
        heroes,
        view.active.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_AFEN: &str = "7/....|.w..|..m.|..../-/R1@0-0:100,B2@3-3:80/1";

    #[test]
    fn parse_small_position() {
        let view = parse_afen(SMALL_AFEN).unwrap();
        assert_eq!(view.turn, 7);
        assert_eq!(view.grid.rows(), 4);
        assert_eq!(view.grid.cols(), 4);
        assert_eq!(view.grid.tile(Position { row: 1, col: 1 }), Tile::HealthWell);
        assert_eq!(
            view.grid.tile(Position { row: 2, col: 2 }),
            Tile::DiamondMine { id: 0, owner: None }
        );
        assert_eq!(
            view.grid.tile(Position { row: 0, col: 0 }),
            Tile::Hero(HeroId(1))
        );
        assert_eq!(view.heroes.len(), 2);
        assert_eq!(view.active, HeroId(1));
        let blue = view.hero(HeroId(2)).unwrap();
        assert_eq!(blue.team, Team::Blue);
        assert_eq!(blue.health, 80);
    }

    #[test]
    fn mine_ids_follow_scan_order_and_owners_apply() {
        let view = parse_afen("0/m.m|...|..m/R,-,B/R1@1-1:50/1").unwrap();
        assert_eq!(
            view.grid.tile(Position { row: 0, col: 0 }),
            Tile::DiamondMine {
                id: 0,
                owner: Some(Team::Red)
            }
        );
        assert_eq!(
            view.grid.tile(Position { row: 0, col: 2 }),
            Tile::DiamondMine { id: 1, owner: None }
        );
        assert_eq!(
            view.grid.tile(Position { row: 2, col: 2 }),
            Tile::DiamondMine {
                id: 2,
                owner: Some(Team::Blue)
            }
        );
    }

    #[test]
    fn roundtrip_preserves_position() {
        let view = parse_afen(SMALL_AFEN).unwrap();
        assert_eq!(encode_afen(&view), SMALL_AFEN);

        let owned = parse_afen("3/m.m|...|..m/R,-,B/R1@1-1:50,B7@2-0:99/7").unwrap();
        let reparsed = parse_afen(&encode_afen(&owned)).unwrap();
        assert_eq!(reparsed, owned);
    }

    #[test]
    fn section_count_is_checked() {
        assert!(matches!(
            parse_afen("7/..../-/R1@0-0:100"),
            Err(AfenError::WrongSectionCount(4))
        ));
    }

    #[test]
    fn ragged_grid_is_rejected() {
        assert!(matches!(
            parse_afen("0/...|..|.../-/R1@0-0:100/1"),
            Err(AfenError::RaggedGrid(1))
        ));
    }

    #[test]
    fn unknown_tile_char_is_rejected() {
        assert!(matches!(
            parse_afen("0/..x/-/R1@0-0:100/1"),
            Err(AfenError::InvalidTile('x'))
        ));
    }

    #[test]
    fn mine_owner_count_must_match() {
        assert!(matches!(
            parse_afen("0/m.m/R/R1@0-1:100/1"),
            Err(AfenError::WrongMineOwnerCount {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn hero_on_blocked_tile_is_rejected() {
        assert!(matches!(
            parse_afen("0/w../-/R1@0-0:100/1"),
            Err(AfenError::UnplaceableHero(_))
        ));
        // Two heroes on the same cell: the second finds a hero tile.
        assert!(matches!(
            parse_afen("0/.../-/R1@0-0:100,B2@0-0:100/2"),
            Err(AfenError::UnplaceableHero(_))
        ));
    }

    #[test]
    fn duplicate_and_unknown_hero_ids_are_rejected() {
        assert!(matches!(
            parse_afen("0/.../-/R1@0-0:100,B1@0-1:100/1"),
            Err(AfenError::DuplicateHero(1))
        ));
        assert!(matches!(
            parse_afen("0/.../-/R1@0-0:100/9"),
            Err(AfenError::UnknownActiveHero(9))
        ));
    }

    #[test]
    fn health_out_of_range_is_rejected() {
        assert!(matches!(
            parse_afen("0/.../-/R1@0-0:0/1"),
            Err(AfenError::InvalidHeroEntry(_))
        ));
        assert!(matches!(
            parse_afen("0/.../-/R1@0-0:101/1"),
            Err(AfenError::InvalidHeroEntry(_))
        ));
    }
}
