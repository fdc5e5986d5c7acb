use thiserror::Error;

use crate::pokemon::{moves::MoveId, species::SpeciesId};

/// Why a move in a moveset cannot be selected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The index does not point at a learned move
    #[error("no move in slot {index} (moveset holds {len})")]
    OutOfRange { index: usize, len: usize },

    /// The move is disabled for a number of turns
    #[error("move is disabled for {turns} more turn(s)")]
    Disabled { turns: u32 },

    /// The move has no PP left
    #[error("move has no PP left")]
    OutOfPp,

    /// The move is not in the dex
    #[error("unknown move {0}")]
    UnknownMove(MoveId),
}

/// Failures when looking up static battle data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DexError {
    /// No species with this id is registered
    #[error("unknown species {0}")]
    UnknownSpecies(SpeciesId),

    /// No move with this id is registered
    #[error("unknown move {0}")]
    UnknownMove(MoveId),

    /// A species entry fails validation
    #[error("invalid species {id}: {reason}")]
    InvalidSpecies { id: SpeciesId, reason: String },
}

/// Failures of party roster operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartyError {
    /// The party already holds the maximum number of members
    #[error("party is full")]
    Full,

    /// No member at this slot
    #[error("no party member in slot {0}")]
    EmptySlot(usize),

    /// The member has fainted and cannot be sent out
    #[error("{0} has no energy left to battle!")]
    Fainted(String),
}

/// Failures when capturing a wild Pokemon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error(transparent)]
    Party(#[from] PartyError),

    #[error(transparent)]
    Dex(#[from] DexError),
}
