pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, SimulationConfig};
pub use error::{FortressError, Result};
pub use types::{EntityId, Position, Tick};
