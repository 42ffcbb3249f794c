//! Player commands
//!
//! Commands are applied between ticks, one snapshot in and one out:
//! PlayerCommand -> CommandExecutor -> handler -> GameState

pub mod executor;
pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::core::types::EntityId;
use crate::entity::item::ItemType;
use crate::world::terrain::ConstructionType;

pub use executor::CommandExecutor;
pub use handlers::{
    build_construction, build_construction_with, create_stockpile, create_stockpile_with,
    designate_mining, equip_item, queue_crafting_job, queue_crafting_job_with, set_speed,
    toggle_pause, GAME_SPEEDS,
};

/// An action a player can take on the colony
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PlayerCommand {
    /// Toggle the dig/chop designation on a tile
    DesignateMining { x: i32, y: i32 },
    Build {
        x: i32,
        y: i32,
        kind: ConstructionType,
    },
    CreateStockpile { x: i32, y: i32 },
    QueueCrafting {
        x: i32,
        y: i32,
        item_type: ItemType,
    },
    /// Send an idle dwarf to pick up and wear an item
    Equip { dwarf: EntityId, item: EntityId },
    TogglePause,
    SetSpeed { speed: u32 },
}
