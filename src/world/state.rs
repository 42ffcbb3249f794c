//! GameState - the world snapshot
//!
//! Every engine operation takes a snapshot by reference and returns a new one.
//! Entities reference each other only by id; lookups here return `Option` so
//! callers can fall back when a referenced entity is gone.

use ahash::AHashMap;
use serde::Serialize;

use crate::city::resources::Resources;
use crate::core::error::Result;
use crate::core::types::{EntityId, Position, Tick};
use crate::entity::dwarf::Dwarf;
use crate::entity::item::{EquipmentSlot, Item, ItemType};
use crate::entity::monster::Monster;
use crate::world::messages::{MessageKind, MessageLog};
use crate::world::tile::{Tile, TileGrid};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    pub tiles: TileGrid,
    pub dwarves: Vec<Dwarf>,
    pub monsters: Vec<Monster>,
    pub resources: Resources,
    pub items: Vec<Item>,
    pub messages: MessageLog,
    pub is_paused: bool,
    /// Tick rate multiplier (1, 2 or 4)
    pub game_speed: u32,
    pub tick: Tick,
    /// Seed for the next tick's random draws
    pub rng_seed: u64,
}

/// Summary of one workshop for a workshop list panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkshopStatus {
    pub position: Position,
    pub busy: bool,
    pub item_type: Option<ItemType>,
    pub progress: Option<u32>,
    pub assigned_dwarf: Option<EntityId>,
}

impl GameState {
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.tiles.at(pos)
    }

    pub fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        self.tiles.at_mut(pos)
    }

    pub fn dwarf(&self, id: EntityId) -> Option<&Dwarf> {
        self.dwarves.iter().find(|d| d.id == id)
    }

    pub fn dwarf_index(&self, id: EntityId) -> Option<usize> {
        self.dwarves.iter().position(|d| d.id == id)
    }

    pub fn dwarf_by_name(&self, name: &str) -> Option<&Dwarf> {
        self.dwarves
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    pub fn monster(&self, id: EntityId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    pub fn item(&self, id: EntityId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// An item counts as stored when the tile beneath it is a stockpile
    pub fn is_stockpiled(&self, item: &Item) -> bool {
        self.tile(item.location).is_some_and(Tile::is_stockpile)
    }

    pub fn living_dwarves(&self) -> impl Iterator<Item = &Dwarf> {
        self.dwarves.iter().filter(|d| d.is_alive())
    }

    /// Items that fit `slot`, in world order
    pub fn equippable_items(&self, slot: EquipmentSlot) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |i| i.item_type.equipment_slot() == Some(slot))
    }

    /// Number of items of each kind currently in the world
    pub fn item_counts(&self) -> AHashMap<ItemType, usize> {
        let mut counts = AHashMap::new();
        for item in &self.items {
            *counts.entry(item.item_type).or_insert(0) += 1;
        }
        counts
    }

    /// All workshops in row-major order
    pub fn workshops(&self) -> Vec<WorkshopStatus> {
        self.tiles
            .iter()
            .filter(|t| t.is_workshop())
            .map(|t| WorkshopStatus {
                position: t.position,
                busy: t.crafting_job.is_some(),
                item_type: t.crafting_job.as_ref().map(|j| j.item_type),
                progress: t.crafting_job.as_ref().map(|j| j.progress),
                assigned_dwarf: t.crafting_job.as_ref().map(|j| j.assigned_dwarf),
            })
            .collect()
    }

    /// Log a message stamped with the current tick
    pub fn log(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.messages.push(self.tick, kind, text);
    }

    /// Serialize the snapshot for an external renderer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
