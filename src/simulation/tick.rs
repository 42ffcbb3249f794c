//! Tick system - orchestrates simulation updates
//!
//! One tick runs the passes in a fixed order over a private copy of the
//! input snapshot:
//! spawn -> workshops -> hauling assignment -> dwarves -> monsters
//!
//! All randomness comes from a generator seeded by the snapshot, so a tick is
//! a pure function of its input.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::city::production::{tick_workshops, CraftingResult};
use crate::city::stockpile::assign_hauling_jobs;
use crate::core::config::{config, SimulationConfig};
use crate::core::types::EntityId;
use crate::simulation::dwarf_tasks::step_dwarves;
use crate::simulation::monsters::{step_monsters, try_spawn_monster};
use crate::world::state::GameState;

/// What happened during one tick, for drivers and diagnostics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub spawned: Option<EntityId>,
    pub crafted: Vec<CraftingResult>,
    pub hauls_assigned: usize,
    /// Dwarves removed this tick (fallen on an earlier tick)
    pub dwarves_lost: usize,
    pub monsters_slain: usize,
}

/// Advance one tick using the global config
pub fn update_game_state(state: &GameState) -> GameState {
    update_game_state_with(state, config())
}

/// Advance one tick
pub fn update_game_state_with(state: &GameState, cfg: &SimulationConfig) -> GameState {
    run_simulation_tick(state, cfg).0
}

/// Advance one tick and report what happened
pub fn run_simulation_tick(state: &GameState, cfg: &SimulationConfig) -> (GameState, TickReport) {
    let mut next = state.clone();
    let mut report = TickReport::default();
    let mut rng = ChaCha8Rng::seed_from_u64(state.rng_seed);

    next.tick += 1;

    report.spawned = try_spawn_monster(&mut next, cfg, &mut rng);
    if let Some(id) = report.spawned {
        tracing::debug!("Tick {}: monster {} spawned", next.tick, id.short());
    }

    report.crafted = tick_workshops(&mut next, cfg, &mut rng);
    for done in &report.crafted {
        tracing::debug!(
            "Tick {}: {} finished at workshop {}",
            next.tick,
            done.item_type,
            done.workshop
        );
    }

    report.hauls_assigned = assign_hauling_jobs(&mut next);
    if report.hauls_assigned > 0 {
        tracing::debug!(
            "Tick {}: {} hauling jobs assigned",
            next.tick,
            report.hauls_assigned
        );
    }

    let dwarves_before = next.dwarves.len();
    step_dwarves(&mut next, cfg);
    report.dwarves_lost = dwarves_before - next.dwarves.len();

    let monsters_before = next.monsters.len();
    step_monsters(&mut next);
    report.monsters_slain = monsters_before - next.monsters.len();

    next.rng_seed = rng.gen();
    (next, report)
}
