//! Fortress - tick-driven dwarf colony simulation
//!
//! The engine is a set of pure transitions over a [`GameState`] snapshot:
//! create a world, advance it one tick, or apply a player command. Each
//! returns a fresh snapshot and never mutates its input.

pub mod city;
pub mod command;
pub mod core;
pub mod entity;
pub mod simulation;
pub mod spatial;
pub mod world;

pub use command::{equip_item, queue_crafting_job, CommandExecutor, PlayerCommand};
pub use simulation::tick::update_game_state;
pub use world::generation::create_initial_game_state;
pub use world::state::GameState;
