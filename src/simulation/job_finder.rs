//! Job finder - nearest-target spatial queries
//!
//! All queries use Manhattan distance and scan linearly. Ties go to whichever
//! candidate comes first in scan order (row-major for tiles, roster order for
//! entities), which keeps results deterministic.
//!
//! Cost is O(tiles) or O(entities) per call. Idle dwarves each run one tile
//! scan per tick, so a tick is O(dwarves x tiles) in the worst case; fine at
//! 60x30, the first thing to index if the map grows.

use crate::core::types::Position;
use crate::entity::dwarf::Dwarf;
use crate::entity::monster::Monster;
use crate::world::tile::{Tile, TileGrid};

fn nearest_tile<'a>(
    tiles: &'a TileGrid,
    from: Position,
    filter: impl Fn(&Tile) -> bool,
) -> Option<&'a Tile> {
    tiles
        .iter()
        .filter(|t| filter(t))
        .min_by_key(|t| t.position.distance(&from))
}

/// Closest tile designated for mining, at any distance
pub fn nearest_designated_tile(tiles: &TileGrid, from: Position) -> Option<&Tile> {
    nearest_tile(tiles, from, |t| t.mining_designated)
}

/// Closest stockpile tile, at any distance
pub fn nearest_stockpile_tile(tiles: &TileGrid, from: Position) -> Option<&Tile> {
    nearest_tile(tiles, from, Tile::is_stockpile)
}

/// Closest living monster strictly within `radius`
pub fn nearest_hostile(monsters: &[Monster], from: Position, radius: i32) -> Option<&Monster> {
    monsters
        .iter()
        .filter(|m| m.is_alive())
        .map(|m| (m.position.distance(&from), m))
        .filter(|(dist, _)| *dist < radius)
        .min_by_key(|(dist, _)| *dist)
        .map(|(_, m)| m)
}

/// Roster index of the closest living dwarf
pub fn nearest_living_dwarf(dwarves: &[Dwarf], from: Position) -> Option<usize> {
    dwarves
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_alive())
        .min_by_key(|(_, d)| d.position.distance(&from))
        .map(|(i, _)| i)
}
