//! City layer - resources, recipes, construction, production and hauling

pub mod construction;
pub mod production;
pub mod recipe;
pub mod resources;
pub mod stockpile;

pub use construction::{check_build_site, construction_cost, place_construction, BuildRejection};
pub use production::{tick_workshops, CraftingResult};
pub use recipe::{CraftingRecipe, RecipeCatalog};
pub use resources::{ResourceCost, Resources};
pub use stockpile::assign_hauling_jobs;
