use futures::{FutureExt, future::BoxFuture};
use serde::{Deserialize, Serialize};

/// Opponent move choice
pub mod ai;

/// A turn loop between two Pokemon
pub mod duel;

/// Applying one move from an attacker to a defender
pub mod resolution;

/// How a resolved move turned out
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Effective,
    SuperEffective,
    NotVeryEffective,
    NoEffect,
    /// A non-damaging move
    Other,
}

impl MoveResult {
    /// Classifies a type multiplier
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier >= 2.0 {
            MoveResult::SuperEffective
        } else if multiplier >= 1.0 {
            MoveResult::Effective
        } else if multiplier > 0.0 {
            MoveResult::NotVeryEffective
        } else {
            MoveResult::NoEffect
        }
    }
}

/// Represents a fight event that can occur during a Pokemon battle
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "event_name", content = "event_data")]
pub enum FightEvent {
    /// A Pokemon used a move
    UsedMove {
        /// The name of the Pokemon
        pokemon: String,
        /// The name of the move
        move_name: String,
    },
    /// A Pokemon attacks another Pokemon
    Hit {
        /// The name of the attacking Pokemon
        attacker: String,
        /// The name of the defending Pokemon
        defender: String,
        /// The amount of damage dealt
        damage: u32,
        /// The amount of HP left on the defending Pokemon
        hp_left: u32,
    },
    /// The last hit was a critical hit
    CriticalHit,
    /// How effective the last move was
    Effectiveness {
        /// The name of the defending Pokemon
        defender: String,
        result: MoveResult,
    },
    /// A Pokemon faints
    Fainted {
        /// The name of the Pokemon that fainted
        pokemon: String,
    },
    /// A Pokemon gains experience
    GainedExp {
        pokemon: String,
        amount: u32,
    },
    /// A Pokemon reaches a new level
    LevelUp {
        pokemon: String,
        level: u32,
    },
    /// A Pokemon wins the battle
    PokemonWinner {
        /// The name of the winning Pokemon
        pokemon: String,
        /// The amount of HP left on the winning Pokemon
        hp_left: u32,
    },
    /// Nobody fainted before the turn limit
    Draw {
        turns: u32,
    },
}

/// Represents a log of a Pokemon battle
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FightLog {
    pub contender_name: String,
    pub challenger_name: String,
    pub log: Vec<FightEvent>,
}

/// Feedback layer that plays out committed fight events
///
/// The returned future completes once the events have been shown. Game
/// state is already final by the time `present` is called.
pub trait Presenter {
    fn present<'a>(&'a self, events: &'a [FightEvent]) -> BoxFuture<'a, ()>;
}

/// A presenter that writes events to the log and completes at once
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn present<'a>(&'a self, events: &'a [FightEvent]) -> BoxFuture<'a, ()> {
        async move {
            for event in events {
                info!("{:?}", event);
            }
        }
        .boxed()
    }
}
