//! Tiles and the crafting jobs attached to workshops

use serde::Serialize;

use crate::core::types::{EntityId, Position};
use crate::entity::item::ItemType;
use crate::spatial::grid::Grid;
use crate::world::terrain::{ConstructionType, TerrainType};

/// A job running at a workshop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CraftingJob {
    pub item_type: ItemType,
    /// Completion in percent (0-100)
    pub progress: u32,
    /// Ticks the assigned dwarf has spent working at the bench
    pub ticks_worked: u32,
    pub assigned_dwarf: EntityId,
}

impl CraftingJob {
    pub fn new(item_type: ItemType, assigned_dwarf: EntityId) -> Self {
        Self {
            item_type,
            progress: 0,
            ticks_worked: 0,
            assigned_dwarf,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile {
    pub position: Position,
    pub terrain: TerrainType,
    pub mining_designated: bool,
    pub construction: Option<ConstructionType>,
    pub crafting_job: Option<CraftingJob>,
    /// Ids of items dropped here by haulers
    pub stored_items: Vec<EntityId>,
}

impl Tile {
    pub fn new(position: Position, terrain: TerrainType) -> Self {
        Self {
            position,
            terrain,
            mining_designated: false,
            construction: None,
            crafting_job: None,
            stored_items: Vec::new(),
        }
    }

    pub fn is_stockpile(&self) -> bool {
        self.construction == Some(ConstructionType::Stockpile)
    }

    pub fn is_workshop(&self) -> bool {
        self.construction == Some(ConstructionType::Workshop)
    }

    /// Glyph for a text map: construction first, then designation, then terrain
    pub fn glyph(&self) -> char {
        if let Some(construction) = self.construction {
            construction.glyph()
        } else if self.mining_designated {
            'x'
        } else {
            self.terrain.glyph()
        }
    }
}

pub type TileGrid = Grid<Tile>;
