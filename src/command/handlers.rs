//! Player command handlers
//!
//! Each handler takes a snapshot and returns a new one. A failed precondition
//! either leaves the snapshot untouched or only adds a warning to the message
//! log; nothing here returns an error.

use crate::city::construction::{place_construction, BuildRejection};
use crate::core::config::{config, SimulationConfig};
use crate::core::types::{EntityId, Position};
use crate::entity::dwarf::Dwarf;
use crate::entity::item::ItemType;
use crate::entity::tasks::DwarfTask;
use crate::world::messages::MessageKind;
use crate::world::state::GameState;
use crate::world::terrain::ConstructionType;
use crate::world::tile::CraftingJob;

/// Speeds the tick driver supports
pub const GAME_SPEEDS: [u32; 3] = [1, 2, 4];

/// Toggle the mining designation on a stone or tree tile
pub fn designate_mining(state: &GameState, x: i32, y: i32) -> GameState {
    let pos = Position::new(x, y);
    let Some(tile) = state.tile(pos).filter(|t| t.terrain.is_mineable()) else {
        return state.clone();
    };
    let (terrain, designate) = (tile.terrain, !tile.mining_designated);

    let mut next = state.clone();
    if let Some(tile) = next.tile_mut(pos) {
        tile.mining_designated = designate;
    }
    if designate {
        next.log(
            MessageKind::Info,
            format!("Designated {} at {} for mining.", terrain, pos),
        );
    }
    next
}

/// Place a construction with the global config
pub fn build_construction(state: &GameState, x: i32, y: i32, kind: ConstructionType) -> GameState {
    build_construction_with(state, x, y, kind, config())
}

pub fn build_construction_with(
    state: &GameState,
    x: i32,
    y: i32,
    kind: ConstructionType,
    cfg: &SimulationConfig,
) -> GameState {
    let pos = Position::new(x, y);
    let mut next = state.clone();

    match place_construction(&mut next, pos, kind, cfg) {
        Ok(()) => {
            let (kind_msg, text) = match kind {
                ConstructionType::Stockpile => {
                    (MessageKind::Info, format!("Stockpile created at {}.", pos))
                }
                _ => (
                    MessageKind::Success,
                    format!("{} built at {}.", capitalize(kind.name()), pos),
                ),
            };
            tracing::debug!("Placed {} at {}", kind, pos);
            next.log(kind_msg, text);
        }
        Err(BuildRejection::OutOfBounds(_)) => {}
        Err(rejection) => {
            let text = rejection_message(kind, &rejection);
            next.log(MessageKind::Warning, text);
        }
    }
    next
}

/// Zone a stockpile tile with the global config
pub fn create_stockpile(state: &GameState, x: i32, y: i32) -> GameState {
    create_stockpile_with(state, x, y, config())
}

pub fn create_stockpile_with(
    state: &GameState,
    x: i32,
    y: i32,
    cfg: &SimulationConfig,
) -> GameState {
    build_construction_with(state, x, y, ConstructionType::Stockpile, cfg)
}

fn rejection_message(kind: ConstructionType, rejection: &BuildRejection) -> String {
    match (kind, rejection) {
        (_, BuildRejection::InsufficientResources(cost)) => {
            format!("Not enough stone! Need {} to build {}.", cost, kind)
        }
        (ConstructionType::Stockpile, BuildRejection::UnbuildableTerrain(_)) => {
            "Cannot place stockpile here! Clear the area first or choose grass/dirt terrain."
                .to_string()
        }
        (_, BuildRejection::UnbuildableTerrain(_)) => {
            "Cannot build here! Clear the area first or choose grass/dirt terrain.".to_string()
        }
        (_, BuildRejection::Occupied(existing)) => {
            format!("Cannot build here! There is already a {} on this tile.", existing)
        }
        (_, BuildRejection::OutOfBounds(pos)) => format!("{} is outside the map.", pos),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Queue a crafting job with the global config
pub fn queue_crafting_job(state: &GameState, x: i32, y: i32, item_type: ItemType) -> GameState {
    queue_crafting_job_with(state, x, y, item_type, config())
}

/// Queue a crafting job at the workshop on (x, y)
///
/// Requires an affordable recipe, an idle workshop and an idle living dwarf.
/// Materials are paid up front and the first idle dwarf on the roster is sent
/// to the bench. Any failure returns the snapshot unchanged.
pub fn queue_crafting_job_with(
    state: &GameState,
    x: i32,
    y: i32,
    item_type: ItemType,
    cfg: &SimulationConfig,
) -> GameState {
    let workshop = Position::new(x, y);

    let Some(recipe) = cfg.recipes.get(item_type) else {
        return state.clone();
    };
    if !state.resources.can_afford(&recipe.cost) {
        return state.clone();
    }
    let Some(tile) = state.tile(workshop) else {
        return state.clone();
    };
    if !tile.is_workshop() || tile.crafting_job.is_some() {
        return state.clone();
    }
    let Some(dwarf_idx) = state.dwarves.iter().position(Dwarf::is_available) else {
        return state.clone();
    };

    let mut next = state.clone();
    next.resources.consume(&recipe.cost);

    let dwarf = &mut next.dwarves[dwarf_idx];
    dwarf.task = DwarfTask::Crafting {
        workshop,
        item_type,
    };
    let (crafter, text) = (dwarf.id, format!("{} is crafting a {}.", dwarf.name, item_type));

    if let Some(tile) = next.tile_mut(workshop) {
        tile.crafting_job = Some(CraftingJob::new(item_type, crafter));
    }
    next.log(MessageKind::Info, text);
    next
}

/// Send an idle dwarf to pick up and wear an item
pub fn equip_item(state: &GameState, dwarf_id: EntityId, item_id: EntityId) -> GameState {
    let Some(dwarf_idx) = state.dwarf_index(dwarf_id) else {
        return state.clone();
    };
    if !state.dwarves[dwarf_idx].is_available() {
        return state.clone();
    }
    let Some(item) = state.item(item_id) else {
        return state.clone();
    };

    let item_type = item.item_type;
    let mut next = state.clone();
    let dwarf = &mut next.dwarves[dwarf_idx];
    dwarf.task = DwarfTask::Equipping { item: item_id };
    let text = format!("{} is going to equip {}.", dwarf.name, item_type);
    next.log(MessageKind::Info, text);
    next
}

pub fn toggle_pause(state: &GameState) -> GameState {
    GameState {
        is_paused: !state.is_paused,
        ..state.clone()
    }
}

/// Change the speed multiplier; unsupported speeds are ignored
pub fn set_speed(state: &GameState, speed: u32) -> GameState {
    if !GAME_SPEEDS.contains(&speed) {
        return state.clone();
    }
    GameState {
        game_speed: speed,
        ..state.clone()
    }
}
