//! Crafting recipes - what a workshop can make and what it costs
//!
//! Recipes specify the item produced, the raw materials consumed up front,
//! and the declared crafting time.

use serde::{Deserialize, Serialize};

use crate::city::resources::ResourceCost;
use crate::entity::item::ItemType;

/// A crafting recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftingRecipe {
    /// Item produced
    pub item_type: ItemType,
    /// Materials deducted when the job is queued
    #[serde(default)]
    pub cost: ResourceCost,
    /// Ticks of work at the bench when recipe time is honored
    pub crafting_time: u32,
}

impl CraftingRecipe {
    pub fn new(item_type: ItemType, stone: u32, wood: u32, crafting_time: u32) -> Self {
        Self {
            item_type,
            cost: ResourceCost { stone, wood },
            crafting_time,
        }
    }

    /// Percent complete after `ticks_worked` ticks at the bench
    pub fn progress_after(&self, ticks_worked: u32) -> u32 {
        if self.crafting_time == 0 {
            return 100;
        }
        (ticks_worked.saturating_mul(100) / self.crafting_time).min(100)
    }
}

/// Catalog of all available recipes
///
/// Deserializes from a list of recipes laid over the defaults, so a config
/// that lists one recipe still keeps the other three.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CraftingRecipe>", into = "Vec<CraftingRecipe>")]
pub struct RecipeCatalog {
    recipes: Vec<CraftingRecipe>,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard workshop recipes
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.add(CraftingRecipe::new(ItemType::Pickaxe, 2, 1, 50));
        catalog.add(CraftingRecipe::new(ItemType::Sword, 3, 1, 75));
        catalog.add(CraftingRecipe::new(ItemType::Armor, 5, 0, 100));
        catalog.add(CraftingRecipe::new(ItemType::Furniture, 1, 3, 60));
        catalog
    }

    /// Add a recipe, replacing any existing recipe for the same item
    pub fn add(&mut self, recipe: CraftingRecipe) {
        self.recipes.retain(|r| r.item_type != recipe.item_type);
        self.recipes.push(recipe);
    }

    /// Get the recipe producing `item_type`
    pub fn get(&self, item_type: ItemType) -> Option<&CraftingRecipe> {
        self.recipes.iter().find(|r| r.item_type == item_type)
    }

    /// Get all recipes
    pub fn all(&self) -> &[CraftingRecipe] {
        &self.recipes
    }
}

impl From<Vec<CraftingRecipe>> for RecipeCatalog {
    fn from(overrides: Vec<CraftingRecipe>) -> Self {
        let mut catalog = Self::with_defaults();
        for recipe in overrides {
            catalog.add(recipe);
        }
        catalog
    }
}

impl From<RecipeCatalog> for Vec<CraftingRecipe> {
    fn from(catalog: RecipeCatalog) -> Self {
        catalog.recipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_recipes() {
        let catalog = RecipeCatalog::with_defaults();
        assert_eq!(catalog.all().len(), 4);

        let pickaxe = catalog.get(ItemType::Pickaxe).unwrap();
        assert_eq!(pickaxe.cost, ResourceCost { stone: 2, wood: 1 });
        assert_eq!(pickaxe.crafting_time, 50);

        let sword = catalog.get(ItemType::Sword).unwrap();
        assert_eq!(sword.cost, ResourceCost { stone: 3, wood: 1 });
        assert_eq!(sword.crafting_time, 75);

        let armor = catalog.get(ItemType::Armor).unwrap();
        assert_eq!(armor.cost, ResourceCost { stone: 5, wood: 0 });
        assert_eq!(armor.crafting_time, 100);

        let furniture = catalog.get(ItemType::Furniture).unwrap();
        assert_eq!(furniture.cost, ResourceCost { stone: 1, wood: 3 });
        assert_eq!(furniture.crafting_time, 60);
    }

    #[test]
    fn test_add_replaces_same_item() {
        let mut catalog = RecipeCatalog::with_defaults();
        catalog.add(CraftingRecipe::new(ItemType::Sword, 9, 9, 9));
        assert_eq!(catalog.all().len(), 4);
        assert_eq!(catalog.get(ItemType::Sword).unwrap().cost.stone, 9);
    }

    #[test]
    fn test_progress_after() {
        let sword = CraftingRecipe::new(ItemType::Sword, 3, 1, 75);
        assert_eq!(sword.progress_after(0), 0);
        assert_eq!(sword.progress_after(74), 98);
        assert_eq!(sword.progress_after(75), 100);
        assert_eq!(sword.progress_after(500), 100);
    }

    #[test]
    fn test_overrides_keep_other_defaults() {
        let catalog = RecipeCatalog::from(vec![
            CraftingRecipe::new(ItemType::Armor, 7, 0, 120),
            CraftingRecipe::new(ItemType::Armor, 8, 0, 90),
        ]);

        assert_eq!(catalog.all().len(), 4);
        let armor = catalog.get(ItemType::Armor).unwrap();
        assert_eq!(armor.cost.stone, 8);
        assert_eq!(armor.crafting_time, 90);
        assert_eq!(catalog.get(ItemType::Sword).unwrap().cost.stone, 3);
    }
}
