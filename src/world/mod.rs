//! World model - tiles, message log and the snapshot that owns everything

pub mod generation;
pub mod messages;
pub mod state;
pub mod terrain;
pub mod tile;

pub use generation::{create_game_state_with, create_initial_game_state, create_seeded_game_state};
pub use messages::{GameMessage, MessageKind, MessageLog};
pub use state::{GameState, WorkshopStatus};
pub use terrain::{ConstructionType, TerrainType};
pub use tile::{CraftingJob, Tile, TileGrid};
