//! Simulation - per-tick passes and the driver that schedules them

pub mod clock;
pub mod dwarf_tasks;
pub mod job_finder;
pub mod monsters;
pub mod tick;

pub use clock::{tick_interval, TickClock};
pub use dwarf_tasks::{resolve_dwarf, DwarfStep, TaskContext, TaskEffect};
pub use tick::{run_simulation_tick, update_game_state, update_game_state_with, TickReport};
