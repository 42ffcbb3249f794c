//! Command execution - dispatches player commands to their handlers

use crate::command::handlers::{
    build_construction_with, create_stockpile_with, designate_mining, equip_item,
    queue_crafting_job_with, set_speed, toggle_pause,
};
use crate::command::PlayerCommand;
use crate::core::config::{config, SimulationConfig};
use crate::world::state::GameState;

/// Applies player commands between ticks
pub struct CommandExecutor;

impl CommandExecutor {
    /// Apply `command` with the global config
    pub fn execute(state: &GameState, command: &PlayerCommand) -> GameState {
        Self::execute_with(state, command, config())
    }

    pub fn execute_with(
        state: &GameState,
        command: &PlayerCommand,
        cfg: &SimulationConfig,
    ) -> GameState {
        tracing::debug!("Executing {:?}", command);
        match *command {
            PlayerCommand::DesignateMining { x, y } => designate_mining(state, x, y),
            PlayerCommand::Build { x, y, kind } => build_construction_with(state, x, y, kind, cfg),
            PlayerCommand::CreateStockpile { x, y } => create_stockpile_with(state, x, y, cfg),
            PlayerCommand::QueueCrafting { x, y, item_type } => {
                queue_crafting_job_with(state, x, y, item_type, cfg)
            }
            PlayerCommand::Equip { dwarf, item } => equip_item(state, dwarf, item),
            PlayerCommand::TogglePause => toggle_pause(state),
            PlayerCommand::SetSpeed { speed } => set_speed(state, speed),
        }
    }

    /// Apply commands in order
    pub fn execute_all<'a>(
        state: &GameState,
        commands: impl IntoIterator<Item = &'a PlayerCommand>,
        cfg: &SimulationConfig,
    ) -> GameState {
        commands
            .into_iter()
            .fold(state.clone(), |current, command| {
                Self::execute_with(&current, command, cfg)
            })
    }
}
