//! Simulation configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other. A TOML file may override any subset
//! of them; missing keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::city::recipe::RecipeCatalog;
use crate::core::error::{FortressError, Result};

/// Configuration for the simulation systems
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === WORLD ===
    /// Grid width in tiles
    pub world_width: usize,

    /// Grid height in tiles
    pub world_height: usize,

    /// Dwarves placed near the top-center of the map at start
    pub starting_dwarves: usize,

    /// Health every dwarf starts with
    pub dwarf_max_health: i32,

    // === COMBAT ===
    /// A monster closer than this (Manhattan, exclusive) pulls a dwarf into combat
    pub hostile_detection_radius: i32,

    /// Damage of a bare-handed (or pickaxe-wielding) dwarf
    pub unarmed_damage: i32,

    /// Damage of a sword-wielding dwarf
    pub sword_damage: i32,

    // === MONSTERS ===
    /// Ticks between spawn rolls
    ///
    /// A roll happens on every tick that is a multiple of this value.
    pub monster_spawn_interval: u64,

    /// Probability that a spawn roll produces a monster (0.0-1.0)
    pub monster_spawn_chance: f64,

    // === CRAFTING ===
    /// Progress added per tick while the crafter stands at the workshop
    ///
    /// At 2 per tick, every job finishes in 50 ticks of presence.
    pub crafting_progress_per_tick: u32,

    /// Use each recipe's `crafting_time` instead of the fixed rate above
    pub honor_recipe_time: bool,

    /// Recipes available at workshops
    #[serde(default = "RecipeCatalog::with_defaults")]
    pub recipes: RecipeCatalog,

    // === CONSTRUCTION ===
    /// Stone consumed by placing a workshop
    pub workshop_stone_cost: u32,

    // === MESSAGES ===
    /// Maximum entries kept in the message log; oldest are dropped first
    pub message_log_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world_width: 60,
            world_height: 30,
            starting_dwarves: 5,
            dwarf_max_health: 100,

            hostile_detection_radius: 8,
            unarmed_damage: 10,
            sword_damage: 20,

            monster_spawn_interval: 200,
            monster_spawn_chance: 0.2,

            crafting_progress_per_tick: 2,
            honor_recipe_time: false,
            recipes: RecipeCatalog::with_defaults(),

            workshop_stone_cost: 5,

            message_log_capacity: 50,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML, filling missing keys with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        // Starting dwarves are laid out three to a row around the center,
        // two rows below the top edge
        let rows_needed = 3 + self.starting_dwarves.div_ceil(3);
        if self.world_width < 4 || self.world_height < rows_needed + 1 {
            return Err(FortressError::InvalidConfig(format!(
                "world {}x{} is too small for {} starting dwarves",
                self.world_width, self.world_height, self.starting_dwarves
            )));
        }

        if !(0.0..=1.0).contains(&self.monster_spawn_chance) {
            return Err(FortressError::InvalidConfig(format!(
                "monster_spawn_chance ({}) must be within 0.0..=1.0",
                self.monster_spawn_chance
            )));
        }

        if self.monster_spawn_interval == 0 {
            return Err(FortressError::InvalidConfig(
                "monster_spawn_interval must be positive".into(),
            ));
        }

        if self.crafting_progress_per_tick == 0 {
            return Err(FortressError::InvalidConfig(
                "crafting_progress_per_tick must be positive".into(),
            ));
        }

        if self.message_log_capacity == 0 {
            return Err(FortressError::InvalidConfig(
                "message_log_capacity must be positive".into(),
            ));
        }

        if self.dwarf_max_health <= 0 {
            return Err(FortressError::InvalidConfig(
                "dwarf_max_health must be positive".into(),
            ));
        }

        if let Some(recipe) = self.recipes.all().iter().find(|r| r.crafting_time == 0) {
            return Err(FortressError::InvalidConfig(format!(
                "recipe for {} has zero crafting_time",
                recipe.item_type
            )));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

/// Get the global simulation config (initializes with defaults if not set)
pub fn config() -> &'static SimulationConfig {
    CONFIG.get_or_init(SimulationConfig::default)
}

/// Set the global simulation config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: SimulationConfig) -> std::result::Result<(), SimulationConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::item::ItemType;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            monster_spawn_chance = 0.5
            honor_recipe_time = true
            "#,
        )
        .unwrap();

        assert!((config.monster_spawn_chance - 0.5).abs() < f64::EPSILON);
        assert!(config.honor_recipe_time);
        assert_eq!(config.world_width, 60);
        assert_eq!(config.message_log_capacity, 50);
        assert!(config.recipes.get(ItemType::Sword).is_some());
    }

    #[test]
    fn test_toml_recipes_override_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            [[recipes]]
            item_type = "sword"
            cost = { stone = 1 }
            crafting_time = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.recipes.all().len(), 4);
        let sword = config.recipes.get(ItemType::Sword).unwrap();
        assert_eq!(sword.cost.stone, 1);
        assert_eq!(sword.cost.wood, 0);
        for item_type in ItemType::ALL {
            assert!(config.recipes.get(item_type).is_some(), "{item_type} recipe missing");
        }
        assert_eq!(config.recipes.get(ItemType::Armor).unwrap().cost.stone, 5);
    }

    #[test]
    fn test_rejects_bad_spawn_chance() {
        let result = SimulationConfig::from_toml_str("monster_spawn_chance = 1.5");
        assert!(matches!(result, Err(FortressError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_tiny_world() {
        let config = SimulationConfig {
            world_width: 3,
            world_height: 3,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_item_in_recipes() {
        let result = SimulationConfig::from_toml_str(
            r#"
            [[recipes]]
            item_type = "catapult"
            crafting_time = 10
            "#,
        );
        assert!(matches!(result, Err(FortressError::TomlError(_))));
    }
}
