//! Production system - advances workshop crafting jobs each tick
//!
//! A job only advances while its assigned dwarf stands on the workshop tile.
//! On completion the item appears on the workshop, the job is cleared and the
//! crafter is released back to idle.

use rand::Rng;

use crate::core::config::SimulationConfig;
use crate::core::types::{EntityId, Position};
use crate::entity::item::{Item, ItemType};
use crate::entity::tasks::DwarfTask;
use crate::world::messages::MessageKind;
use crate::world::state::GameState;
use crate::world::tile::CraftingJob;

/// A crafting job that finished this tick
#[derive(Debug, Clone, PartialEq)]
pub struct CraftingResult {
    pub workshop: Position,
    pub item: EntityId,
    pub item_type: ItemType,
    pub crafter: EntityId,
}

/// Advance every workshop job whose crafter is present
pub fn tick_workshops<R: Rng + ?Sized>(
    state: &mut GameState,
    cfg: &SimulationConfig,
    rng: &mut R,
) -> Vec<CraftingResult> {
    let mut results = Vec::new();

    // Collect first; completing a job touches dwarves, items and the log
    let active: Vec<(Position, EntityId)> = state
        .tiles
        .iter()
        .filter(|t| t.is_workshop())
        .filter_map(|t| {
            t.crafting_job
                .as_ref()
                .map(|job| (t.position, job.assigned_dwarf))
        })
        .collect();

    for (workshop, crafter) in active {
        let Some(dwarf_idx) = state.dwarf_index(crafter) else {
            continue;
        };
        let dwarf = &state.dwarves[dwarf_idx];
        if !dwarf.is_alive() || dwarf.position != workshop {
            continue;
        }

        let Some(job) = state
            .tile_mut(workshop)
            .and_then(|t| t.crafting_job.as_mut())
        else {
            continue;
        };
        advance_job(job, cfg);
        if !job.is_complete() {
            continue;
        }
        let item_type = job.item_type;

        if let Some(tile) = state.tile_mut(workshop) {
            tile.crafting_job = None;
        }

        let item = Item::new(EntityId::from_rng(rng), item_type, workshop);
        let item_id = item.id;
        state.items.push(item);

        let dwarf = &mut state.dwarves[dwarf_idx];
        dwarf.task = DwarfTask::Idle;
        let text = format!("{} crafted a {}!", dwarf.name, item_type);
        state.log(MessageKind::Success, text);

        results.push(CraftingResult {
            workshop,
            item: item_id,
            item_type,
            crafter,
        });
    }

    results
}

/// One tick of work at the bench
fn advance_job(job: &mut CraftingJob, cfg: &SimulationConfig) {
    job.ticks_worked += 1;

    let recipe = cfg
        .recipes
        .get(job.item_type)
        .filter(|_| cfg.honor_recipe_time);
    job.progress = match recipe {
        Some(recipe) => recipe.progress_after(job.ticks_worked),
        None => (job.progress + cfg.crafting_progress_per_tick).min(100),
    };
}
