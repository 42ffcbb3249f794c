//! Dwarves - the colony's autonomous workers

use serde::Serialize;

use crate::core::types::{EntityId, Position};
use crate::entity::item::{EquipmentSlot, ItemType};
use crate::entity::tasks::DwarfTask;

/// Names handed out to dwarves in roster order
pub const DWARF_NAMES: [&str; 16] = [
    "Urist", "Bomrek", "Kogan", "Thob", "Zasit", "Datan", "Rigoth", "Likot", "Vucar", "Stakud",
    "Nish", "Aban", "Kib", "Nil", "Goden", "Fikod",
];

/// Worn gear, recorded by item kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Equipment {
    pub weapon: Option<ItemType>,
    pub armor: Option<ItemType>,
}

impl Equipment {
    pub fn set(&mut self, slot: EquipmentSlot, item_type: ItemType) {
        match slot {
            EquipmentSlot::Weapon => self.weapon = Some(item_type),
            EquipmentSlot::Armor => self.armor = Some(item_type),
        }
    }

    pub fn has_sword(&self) -> bool {
        self.weapon == Some(ItemType::Sword)
    }

    pub fn is_armored(&self) -> bool {
        self.armor == Some(ItemType::Armor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dwarf {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub task: DwarfTask,
    pub health: i32,
    pub max_health: i32,
    pub equipment: Equipment,
}

impl Dwarf {
    pub fn new(id: EntityId, name: impl Into<String>, position: Position, max_health: i32) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            task: DwarfTask::Idle,
            health: max_health,
            max_health,
            equipment: Equipment::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Alive and without a task
    pub fn is_available(&self) -> bool {
        self.is_alive() && self.task.is_idle()
    }

    /// Damage dealt per blow, given the configured base values
    pub fn attack_damage(&self, unarmed: i32, sword: i32) -> i32 {
        if self.equipment.has_sword() {
            sword
        } else {
            unarmed
        }
    }

    pub fn with_task(&self, task: DwarfTask) -> Self {
        Self {
            task,
            ..self.clone()
        }
    }

    pub fn moved_to(&self, position: Position) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}
