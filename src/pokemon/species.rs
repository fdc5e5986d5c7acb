use serde::{Deserialize, Serialize};

use super::{exp::GrowthRate, ptype::PokemonType, stats::StatBlock};

/// Numeric id of a species
pub type SpeciesId = u16;

/// Represents static species data shared by every creature of that kind
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Species {
    /// Dex number of the species
    pub id: SpeciesId,

    /// The name of the species
    pub name: String,

    /// The primary type of the species
    pub primary_type: PokemonType,

    /// The secondary type of the species, if it has one
    #[serde(default)]
    pub secondary_type: Option<PokemonType>,

    /// Base stats in slot order
    pub base_stats: StatBlock,

    /// Experience curve
    pub growth_rate: GrowthRate,

    /// Base experience yield when defeated
    pub base_exp: u32,

    /// Share of males on a 0 to 8 scale (eighths), `None` for genderless species
    #[serde(default)]
    pub male_eighths: Option<f64>,

    /// Whether males and females look different
    #[serde(default)]
    pub gender_diffs: bool,
}

impl Species {
    /// True if either of the species' types is `ptype`
    pub fn has_type(&self, ptype: PokemonType) -> bool {
        self.primary_type == ptype || self.secondary_type == Some(ptype)
    }

    /// How well an attack of `attack_type` performs against this species
    pub fn effectiveness_of(&self, attack_type: PokemonType) -> f64 {
        attack_type.effectiveness(self.primary_type, self.secondary_type)
    }
}
