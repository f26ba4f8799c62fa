//! Game orchestration
//!
//! Configuration plus the state machine driving rounds over the core engine.

mod config;
mod state;

pub use config::{ConfigError, GameConfig};
pub use state::{Game, GameError, Round, Status, Summary};
