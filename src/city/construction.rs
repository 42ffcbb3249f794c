//! Construction placement - site validation and costs
//!
//! Constructions are placed instantly by player command. A site must be open
//! ground and free of any existing construction, and the colony must be able
//! to pay for it.

use thiserror::Error;

use crate::city::resources::ResourceCost;
use crate::core::config::SimulationConfig;
use crate::core::types::Position;
use crate::world::state::GameState;
use crate::world::terrain::{ConstructionType, TerrainType};

/// Why a construction could not be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildRejection {
    #[error("{0} is outside the map")]
    OutOfBounds(Position),
    #[error("not enough materials, need {0}")]
    InsufficientResources(ResourceCost),
    #[error("cannot build on {0}")]
    UnbuildableTerrain(TerrainType),
    #[error("a {0} already stands here")]
    Occupied(ConstructionType),
}

/// Materials consumed by placing `kind`
pub fn construction_cost(kind: ConstructionType, cfg: &SimulationConfig) -> ResourceCost {
    match kind {
        ConstructionType::Workshop => ResourceCost::stone(cfg.workshop_stone_cost),
        ConstructionType::Stockpile
        | ConstructionType::Wall
        | ConstructionType::House
        | ConstructionType::Nursery => ResourceCost::default(),
    }
}

/// Check that `kind` may be placed at `pos`, returns what it will cost
///
/// Checks run in a fixed order: bounds, affordability, terrain, occupancy.
pub fn check_build_site(
    state: &GameState,
    pos: Position,
    kind: ConstructionType,
    cfg: &SimulationConfig,
) -> Result<ResourceCost, BuildRejection> {
    let tile = state.tile(pos).ok_or(BuildRejection::OutOfBounds(pos))?;

    let cost = construction_cost(kind, cfg);
    if !state.resources.can_afford(&cost) {
        return Err(BuildRejection::InsufficientResources(cost));
    }
    if !tile.terrain.is_buildable() {
        return Err(BuildRejection::UnbuildableTerrain(tile.terrain));
    }
    if let Some(existing) = tile.construction {
        return Err(BuildRejection::Occupied(existing));
    }
    Ok(cost)
}

/// Validate, pay for and place `kind` at `pos`
pub fn place_construction(
    state: &mut GameState,
    pos: Position,
    kind: ConstructionType,
    cfg: &SimulationConfig,
) -> Result<(), BuildRejection> {
    let cost = check_build_site(state, pos, kind, cfg)?;
    let tile = state.tile_mut(pos).ok_or(BuildRejection::OutOfBounds(pos))?;
    tile.construction = Some(kind);
    state.resources.consume(&cost);
    Ok(())
}
