//! Stockpile hauling - pairs loose items with idle dwarves
//!
//! An item is loose when it is not lying on a stockpile tile and no dwarf is
//! already hauling it. Loose items (world order) are zipped with idle dwarves
//! (roster order); each pair goes to the stockpile nearest the item.

use ahash::AHashSet;

use crate::core::types::{EntityId, Position};
use crate::entity::tasks::DwarfTask;
use crate::simulation::job_finder::nearest_stockpile_tile;
use crate::world::state::GameState;

/// Assign hauling jobs, returns how many dwarves were put to work
pub fn assign_hauling_jobs(state: &mut GameState) -> usize {
    let targeted: AHashSet<EntityId> = state
        .dwarves
        .iter()
        .filter_map(|d| d.task.haul_target_item())
        .collect();

    let loose: Vec<(EntityId, Position)> = state
        .items
        .iter()
        .filter(|i| !targeted.contains(&i.id) && !state.is_stockpiled(i))
        .map(|i| (i.id, i.location))
        .collect();
    if loose.is_empty() {
        return 0;
    }

    let idle: Vec<usize> = state
        .dwarves
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_available())
        .map(|(i, _)| i)
        .collect();

    let mut assigned = 0;
    for (dwarf_idx, (item, location)) in idle.into_iter().zip(loose) {
        // A pair with no reachable stockpile leaves the dwarf idle
        let Some(stockpile) = nearest_stockpile_tile(&state.tiles, location).map(|t| t.position)
        else {
            continue;
        };
        state.dwarves[dwarf_idx].task = DwarfTask::Hauling {
            item,
            stockpile,
            carrying: false,
        };
        assigned += 1;
    }
    assigned
}
