//! Battle rules for a turn-based Pokemon game: creature generation, stats,
//! movesets, move resolution, experience and opponent AI.
//!
//! Rendering, sound and input live elsewhere. They read the state kept
//! here and call into [`fight`] and [`pokemon::Pokemon`].

#[macro_use]
extern crate log;

/// Session configuration module
pub mod config;

/// Error types module
pub mod error;

/// Battle mechanics module
pub mod fight;

/// Modifier hooks module
pub mod modifier;

/// Pokemon module
pub mod pokemon;

/// Seeded random source module
pub mod rng;

/// Session state module
pub mod session;

/// Trainer party module
pub mod trainer;

#[cfg(test)]
mod tests;

pub use fight::{FightEvent, FightLog, MoveResult};
pub use pokemon::{Pokemon, Side};
pub use rng::BattleRng;
pub use session::Session;
