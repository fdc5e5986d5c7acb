use serde::{Deserialize, Serialize};

/// Represents an elemental type of a Pokemon or a move
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl PokemonType {
    /// The types that this type is strong against
    fn strong_against(self) -> &'static [PokemonType] {
        use PokemonType::*;
        match self {
            Normal => &[],
            Fighting => &[Normal, Ice, Rock, Dark, Steel],
            Flying => &[Fighting, Bug, Grass],
            Poison => &[Grass, Fairy],
            Ground => &[Fire, Electric, Poison, Rock, Steel],
            Rock => &[Fire, Ice, Flying, Bug],
            Bug => &[Grass, Psychic, Dark],
            Ghost => &[Psychic, Ghost],
            Steel => &[Ice, Rock, Fairy],
            Fire => &[Grass, Ice, Bug, Steel],
            Water => &[Fire, Ground, Rock],
            Grass => &[Water, Ground, Rock],
            Electric => &[Water, Flying],
            Psychic => &[Fighting, Poison],
            Ice => &[Grass, Ground, Flying, Dragon],
            Dragon => &[Dragon],
            Dark => &[Psychic, Ghost],
            Fairy => &[Fighting, Dragon, Dark],
        }
    }

    /// The types that resist this type
    fn weak_against(self) -> &'static [PokemonType] {
        use PokemonType::*;
        match self {
            Normal => &[Rock, Steel],
            Fighting => &[Poison, Flying, Psychic, Bug, Fairy],
            Flying => &[Electric, Rock, Steel],
            Poison => &[Poison, Ground, Rock, Ghost],
            Ground => &[Grass, Bug],
            Rock => &[Fighting, Ground, Steel],
            Bug => &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy],
            Ghost => &[Dark],
            Steel => &[Fire, Water, Electric, Steel],
            Fire => &[Fire, Water, Rock, Dragon],
            Water => &[Water, Grass, Dragon],
            Grass => &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],
            Electric => &[Electric, Grass, Dragon],
            Psychic => &[Psychic, Steel],
            Ice => &[Fire, Water, Ice, Steel],
            Dragon => &[Steel],
            Dark => &[Fighting, Dark, Fairy],
            Fairy => &[Fire, Poison, Steel],
        }
    }

    /// The types that take no damage from this type
    fn no_effect_against(self) -> &'static [PokemonType] {
        use PokemonType::*;
        match self {
            Normal | Fighting => &[Ghost],
            Poison => &[Steel],
            Ground => &[Flying],
            Ghost => &[Normal],
            Electric => &[Ground],
            Psychic => &[Dark],
            Dragon => &[Fairy],
            _ => &[],
        }
    }

    /// Damage multiplier of an attack of this type against a single defending type
    pub fn damage_multiplier(self, defender: PokemonType) -> f64 {
        if self.no_effect_against().contains(&defender) {
            0.0
        } else if self.strong_against().contains(&defender) {
            2.0
        } else if self.weak_against().contains(&defender) {
            0.5
        } else {
            1.0
        }
    }

    /// Combined multiplier against a primary and optional secondary type
    pub fn effectiveness(self, primary: PokemonType, secondary: Option<PokemonType>) -> f64 {
        let secondary = secondary.map_or(1.0, |t| self.damage_multiplier(t));
        self.damage_multiplier(primary) * secondary
    }
}
