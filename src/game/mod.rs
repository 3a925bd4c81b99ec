//! Game session state and target selection

mod session;
mod target;

pub use session::{GameConfig, GuessError, Session, SetupError};
pub use target::Target;

/// Rounds a player gets before the game is lost
pub const MAX_ROUNDS: usize = 6;
