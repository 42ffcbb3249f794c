//! Dwarf tasks
//!
//! Each variant carries the targets that only make sense while that task is
//! active. Switching task drops the old variant and its targets with it, so a
//! dwarf can never hold a stale haul target while fighting.

use serde::Serialize;

use crate::core::types::{EntityId, Position};
use crate::entity::item::ItemType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "task", rename_all = "lowercase")]
pub enum DwarfTask {
    #[default]
    Idle,
    Mining {
        target: Position,
    },
    Hauling {
        item: EntityId,
        stockpile: Position,
        /// Set once the dwarf has reached and picked up the item
        carrying: bool,
    },
    /// Declared for the roster view; construction is placed instantly by
    /// commands, so nothing drives a dwarf into this state.
    Building,
    Fighting {
        monster: EntityId,
    },
    Crafting {
        workshop: Position,
        item_type: ItemType,
    },
    Equipping {
        item: EntityId,
    },
}

/// Fieldless view of a task, for display and matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Idle,
    Mining,
    Hauling,
    Building,
    Fighting,
    Crafting,
    Equipping,
}

impl DwarfTask {
    pub fn kind(&self) -> TaskKind {
        match self {
            DwarfTask::Idle => TaskKind::Idle,
            DwarfTask::Mining { .. } => TaskKind::Mining,
            DwarfTask::Hauling { .. } => TaskKind::Hauling,
            DwarfTask::Building => TaskKind::Building,
            DwarfTask::Fighting { .. } => TaskKind::Fighting,
            DwarfTask::Crafting { .. } => TaskKind::Crafting,
            DwarfTask::Equipping { .. } => TaskKind::Equipping,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DwarfTask::Idle)
    }

    pub fn is_fighting(&self) -> bool {
        matches!(self, DwarfTask::Fighting { .. })
    }

    /// Mining target tile
    pub fn target(&self) -> Option<Position> {
        match self {
            DwarfTask::Mining { target } => Some(*target),
            _ => None,
        }
    }

    pub fn target_monster(&self) -> Option<EntityId> {
        match self {
            DwarfTask::Fighting { monster } => Some(*monster),
            _ => None,
        }
    }

    pub fn target_workshop(&self) -> Option<Position> {
        match self {
            DwarfTask::Crafting { workshop, .. } => Some(*workshop),
            _ => None,
        }
    }

    pub fn haul_target_item(&self) -> Option<EntityId> {
        match self {
            DwarfTask::Hauling { item, .. } => Some(*item),
            _ => None,
        }
    }

    pub fn haul_destination(&self) -> Option<Position> {
        match self {
            DwarfTask::Hauling { stockpile, .. } => Some(*stockpile),
            _ => None,
        }
    }

    pub fn carried_item(&self) -> Option<EntityId> {
        match self {
            DwarfTask::Hauling {
                item,
                carrying: true,
                ..
            } => Some(*item),
            _ => None,
        }
    }

    pub fn equip_target_item(&self) -> Option<EntityId> {
        match self {
            DwarfTask::Equipping { item } => Some(*item),
            _ => None,
        }
    }
}

impl TaskKind {
    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::Idle => "idle",
            TaskKind::Mining => "mining",
            TaskKind::Hauling => "hauling",
            TaskKind::Building => "building",
            TaskKind::Fighting => "fighting",
            TaskKind::Crafting => "crafting",
            TaskKind::Equipping => "equipping",
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
