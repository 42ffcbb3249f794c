//! Monsters - hostiles that wander in from the map edge

use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, Position};

/// Type of monster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonsterType {
    Goblin,
    Troll,
    Beast,
}

impl MonsterType {
    pub const ALL: [MonsterType; 3] = [MonsterType::Goblin, MonsterType::Troll, MonsterType::Beast];

    /// Health a freshly spawned monster of this type starts with
    pub fn max_health(&self) -> i32 {
        match self {
            MonsterType::Goblin => 30,
            MonsterType::Troll => 60,
            MonsterType::Beast => 40,
        }
    }

    /// Damage dealt per hit to an unarmored dwarf
    pub fn base_damage(&self) -> i32 {
        match self {
            MonsterType::Troll => 15,
            MonsterType::Goblin | MonsterType::Beast => 8,
        }
    }

    /// Damage dealt per hit, halved (rounded down) against armor
    pub fn damage_against(&self, armored: bool) -> i32 {
        if armored {
            self.base_damage() / 2
        } else {
            self.base_damage()
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MonsterType::Goblin => "goblin",
            MonsterType::Troll => "troll",
            MonsterType::Beast => "beast",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            MonsterType::Goblin => 'g',
            MonsterType::Troll => 'T',
            MonsterType::Beast => 'B',
        }
    }
}

impl std::fmt::Display for MonsterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Monster {
    pub id: EntityId,
    pub monster_type: MonsterType,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub target_dwarf: Option<EntityId>,
}

impl Monster {
    pub fn new(id: EntityId, monster_type: MonsterType, position: Position) -> Self {
        let max_health = monster_type.max_health();
        Self {
            id,
            monster_type,
            position,
            health: max_health,
            max_health,
            target_dwarf: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_damage_table() {
        assert_eq!(MonsterType::Troll.damage_against(false), 15);
        assert_eq!(MonsterType::Troll.damage_against(true), 7);
        assert_eq!(MonsterType::Goblin.damage_against(false), 8);
        assert_eq!(MonsterType::Goblin.damage_against(true), 4);
        assert_eq!(MonsterType::Beast.damage_against(false), 8);
        assert_eq!(MonsterType::Beast.damage_against(true), 4);
    }

    #[test]
    fn test_spawned_at_full_health() {
        let id = EntityId(uuid::Uuid::nil());
        let troll = Monster::new(id, MonsterType::Troll, Position::new(0, 0));
        assert_eq!(troll.health, 60);
        assert_eq!(troll.max_health, 60);
        assert!(troll.is_alive());
        assert!(troll.target_dwarf.is_none());
    }
}
