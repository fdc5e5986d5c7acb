use serde::{Deserialize, Serialize};

use super::{
    species::Species,
    stats::{Ivs, Stat},
};
use crate::modifier::ModifierRegistry;

/// Rarity threshold before any booster is applied
pub const BASE_SHINY_THRESHOLD: u32 = 32;

/// Represents the gender of a creature, fixed at creation
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Genderless,
}

/// Per-session values mixed into the rarity roll
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSalts {
    /// The public trainer id
    pub trainer_id: u16,
    /// The hidden secret id
    pub secret_id: u16,
}

/// Everything derived from a creature's identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: u32,
    pub ivs: Ivs,
    pub gender: Gender,
    pub shiny: bool,
}

impl Identity {
    /// Derives hidden values, gender and rarity from a 32 bit seed
    pub fn derive(
        id: u32,
        species: &Species,
        salts: SessionSalts,
        modifiers: &ModifierRegistry,
    ) -> Self {
        Self {
            id,
            ivs: hidden_values(id),
            gender: gender(id, species.male_eighths),
            shiny: is_shiny(id, salts, modifiers),
        }
    }
}

/// Splits the top 30 bits of `id` into six 5 bit hidden values, most significant first
pub fn hidden_values(id: u32) -> Ivs {
    let mut ivs = [0u8; 6];
    for stat in Stat::ALL {
        let shift = 27 - 5 * stat.index() as u32;
        ivs[stat.index()] = ((id >> shift) & 0x1f) as u8;
    }
    Ivs(ivs)
}

/// Rebuilds the 30 bit prefix of an identifier from its hidden values
pub fn hidden_value_bits(ivs: &Ivs) -> u32 {
    ivs.0
        .iter()
        .fold(0u32, |bits, &iv| (bits << 5) | (iv as u32 & 0x1f))
}

/// Picks a gender from the low byte of `id`
pub fn gender(id: u32, male_eighths: Option<f64>) -> Gender {
    match male_eighths {
        None => Gender::Genderless,
        Some(male) => {
            let chance = (id % 256) as f64 / 32.0;
            if chance < male {
                Gender::Male
            } else {
                Gender::Female
            }
        }
    }
}

/// Rarity threshold after every registered booster has been applied
pub fn shiny_threshold(modifiers: &ModifierRegistry) -> u32 {
    modifiers.apply_shiny_boosters(BASE_SHINY_THRESHOLD)
}

/// Rolls the rarity flag from the identifier halves and the session salts
pub fn is_shiny(id: u32, salts: SessionSalts, modifiers: &ModifierRegistry) -> bool {
    let rand1 = id >> 16;
    let rand2 = id & 0xffff;
    let e = (salts.trainer_id ^ salts.secret_id) as u32;
    let f = rand1 ^ rand2;
    let threshold = shiny_threshold(modifiers);
    let roll = e ^ f;
    if roll < BASE_SHINY_THRESHOLD {
        debug!("Natural shiny roll {} for id {}", roll, id);
    }
    roll < threshold
}
