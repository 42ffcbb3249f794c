//! Items - crafted goods lying in the world

use serde::{Deserialize, Serialize};

use crate::core::error::FortressError;
use crate::core::types::{EntityId, Position};

/// Kind of crafted item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Pickaxe,
    Sword,
    Armor,
    Furniture,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::Pickaxe,
        ItemType::Sword,
        ItemType::Armor,
        ItemType::Furniture,
    ];

    /// Equipment slot this item occupies, if it can be worn at all
    pub fn equipment_slot(&self) -> Option<EquipmentSlot> {
        match self {
            ItemType::Sword | ItemType::Pickaxe => Some(EquipmentSlot::Weapon),
            ItemType::Armor => Some(EquipmentSlot::Armor),
            ItemType::Furniture => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemType::Pickaxe => "pickaxe",
            ItemType::Sword => "sword",
            ItemType::Armor => "armor",
            ItemType::Furniture => "furniture",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ItemType {
    type Err = FortressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pickaxe" => Ok(ItemType::Pickaxe),
            "sword" => Ok(ItemType::Sword),
            "armor" => Ok(ItemType::Armor),
            "furniture" => Ok(ItemType::Furniture),
            _ => Err(FortressError::UnknownItemType(s.to_string())),
        }
    }
}

/// Equipment slots on a dwarf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

/// An item at a grid location
///
/// Items are not owned by containers; "in a stockpile" means the tile under
/// `location` is a stockpile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: EntityId,
    pub item_type: ItemType,
    pub location: Position,
}

impl Item {
    pub fn new(id: EntityId, item_type: ItemType, location: Position) -> Self {
        Self {
            id,
            item_type,
            location,
        }
    }
}
