//! Initial world generation
//!
//! Terrain is banded by depth: a grassy surface with scattered trees, a dirt
//! layer, then solid stone. The outer border is always stone.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::city::resources::Resources;
use crate::core::config::{config, SimulationConfig};
use crate::core::types::{EntityId, Position};
use crate::entity::dwarf::{Dwarf, DWARF_NAMES};
use crate::world::messages::{MessageKind, MessageLog};
use crate::world::state::GameState;
use crate::world::terrain::TerrainType;
use crate::world::tile::{Tile, TileGrid};

const SURFACE_DEPTH: usize = 5;
const DIRT_DEPTH: usize = 12;
const TREE_CHANCE: f64 = 0.05;
const START_ROW: i32 = 3;

/// Create a new world from an unpredictable seed
pub fn create_initial_game_state() -> GameState {
    create_seeded_game_state(rand::random())
}

/// Create a new world from `seed` with the global config
pub fn create_seeded_game_state(seed: u64) -> GameState {
    create_game_state_with(seed, config())
}

pub fn create_game_state_with(seed: u64, cfg: &SimulationConfig) -> GameState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let tiles = generate_tiles(cfg.world_width, cfg.world_height, &mut rng);
    let dwarves = spawn_starting_dwarves(cfg, &mut rng);

    let mut messages = MessageLog::new(cfg.message_log_capacity);
    messages.push(
        0,
        MessageKind::Success,
        "Welcome to Fortress Terminal! Your dwarves have arrived.",
    );

    tracing::debug!(
        "Generated {}x{} world with {} dwarves (seed {})",
        cfg.world_width,
        cfg.world_height,
        dwarves.len(),
        seed
    );

    GameState {
        tiles,
        dwarves,
        monsters: Vec::new(),
        resources: Resources::default(),
        items: Vec::new(),
        messages,
        is_paused: false,
        game_speed: 1,
        tick: 0,
        rng_seed: rng.gen(),
    }
}

fn generate_tiles(width: usize, height: usize, rng: &mut ChaCha8Rng) -> TileGrid {
    TileGrid::from_fn(width, height, |x, y| {
        let roll: f64 = rng.gen();
        let mut terrain = if y < SURFACE_DEPTH {
            if roll < TREE_CHANCE {
                TerrainType::Tree
            } else {
                TerrainType::Grass
            }
        } else if y < DIRT_DEPTH {
            TerrainType::Dirt
        } else {
            TerrainType::Stone
        };

        if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
            terrain = TerrainType::Stone;
        }

        Tile::new(Position::new(x as i32, y as i32), terrain)
    })
}

fn spawn_starting_dwarves(cfg: &SimulationConfig, rng: &mut ChaCha8Rng) -> Vec<Dwarf> {
    let center = (cfg.world_width / 2) as i32;

    (0..cfg.starting_dwarves)
        .map(|i| {
            let position = Position::new(
                center + (i % 3) as i32 - 1,
                START_ROW + (i / 3) as i32,
            );
            let name = DWARF_NAMES[i % DWARF_NAMES.len()];
            Dwarf::new(EntityId::from_rng(rng), name, position, cfg.dwarf_max_health)
        })
        .collect()
}
