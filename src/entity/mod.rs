//! Entities - dwarves, monsters and items

pub mod dwarf;
pub mod item;
pub mod monster;
pub mod tasks;

pub use dwarf::{Dwarf, Equipment, DWARF_NAMES};
pub use item::{EquipmentSlot, Item, ItemType};
pub use monster::{Monster, MonsterType};
pub use tasks::{DwarfTask, TaskKind};
