use serde::{Deserialize, Serialize};

use super::{ptype::PokemonType, stats::Stat};
use crate::error::SelectError;

/// Numeric id of a move
pub type MoveId = u16;

/// The move used when nothing else can be used
pub const STRUGGLE: MoveId = 165;

/// How a move deals its damage, if it does
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    /// True for physical and special moves
    pub fn is_damaging(self) -> bool {
        self != MoveCategory::Status
    }

    /// The (attacking, defending) stat pair used by damaging moves
    pub fn stat_pair(self) -> Option<(Stat, Stat)> {
        match self {
            MoveCategory::Physical => Some((Stat::Atk, Stat::Def)),
            MoveCategory::Special => Some((Stat::SpAtk, Stat::SpDef)),
            MoveCategory::Status => None,
        }
    }
}

/// Static definition of a move
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MoveData {
    pub id: MoveId,
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: PokemonType,
    pub category: MoveCategory,
    #[serde(default)]
    pub power: u32,
    pub pp: u32,
    #[serde(default)]
    pub accuracy: Option<u32>,
}

/// A move learned by a creature, with its usage counters
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PokemonMove {
    pub move_id: MoveId,
    pub pp_used: u32,
    pub pp_up: u32,
    pub disable_turns: u32,
}

impl PokemonMove {
    /// A freshly learned move
    pub fn new(move_id: MoveId) -> Self {
        Self {
            move_id,
            pp_used: 0,
            pp_up: 0,
            disable_turns: 0,
        }
    }

    /// The fallback move, it costs nothing to use
    pub fn struggle() -> Self {
        Self::new(STRUGGLE)
    }

    /// Total uses available with bonus capacity
    pub fn max_pp(&self, data: &MoveData) -> u32 {
        data.pp + self.pp_up
    }

    /// Uses left before the move runs out
    pub fn pp_left(&self, data: &MoveData) -> u32 {
        self.max_pp(data).saturating_sub(self.pp_used)
    }

    /// Checks whether this move can be picked this turn
    pub fn check_usable(&self, data: &MoveData) -> Result<(), SelectError> {
        if self.disable_turns > 0 {
            return Err(SelectError::Disabled {
                turns: self.disable_turns,
            });
        }
        if self.pp_used >= self.max_pp(data) {
            return Err(SelectError::OutOfPp);
        }
        Ok(())
    }

    /// A usable move has PP left and is not disabled
    pub fn is_usable(&self, data: &MoveData) -> bool {
        self.check_usable(data).is_ok()
    }

    /// Spends one use, Struggle is free
    pub fn use_pp(&mut self) {
        if self.move_id != STRUGGLE {
            self.pp_used += 1;
        }
    }

    /// Counts a disable down by one turn
    pub fn tick_disable(&mut self) {
        self.disable_turns = self.disable_turns.saturating_sub(1);
    }
}
