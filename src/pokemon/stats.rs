use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::modifier::ModifierRegistry;

/// Highest value any stat can reach
pub const MAX_STAT: u32 = 99_999;

/// A battle statistic slot, in the fixed order used by stat blocks and hidden values
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stat {
    /// Hit points, also bounds the current health
    #[serde(rename = "hp")]
    Hp,
    /// Physical attack
    #[serde(rename = "atk")]
    Atk,
    /// Physical defense
    #[serde(rename = "def")]
    Def,
    /// Special attack
    #[serde(rename = "spatk")]
    SpAtk,
    /// Special defense
    #[serde(rename = "spdef")]
    SpDef,
    /// This stat determines attack priority in battle
    #[serde(rename = "spd")]
    Spd,
}

impl Stat {
    /// All stats in slot order
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Atk,
        Stat::Def,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Spd,
    ];

    /// The slot index of this stat
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Six stat values indexed by [`Stat`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct StatBlock(pub [u32; 6]);

impl Index<Stat> for StatBlock {
    type Output = u32;

    fn index(&self, stat: Stat) -> &u32 {
        &self.0[stat.index()]
    }
}

impl IndexMut<Stat> for StatBlock {
    fn index_mut(&mut self, stat: Stat) -> &mut u32 {
        &mut self.0[stat.index()]
    }
}

/// Hidden per-stat values, each in `0..=31`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Ivs(pub [u8; 6]);

impl Index<Stat> for Ivs {
    type Output = u8;

    fn index(&self, stat: Stat) -> &u8 {
        &self.0[stat.index()]
    }
}

/// Computes the six battle stats
///
/// Base stats are first passed through every registered base-stat booster,
/// then each slot is derived from base, hidden value and level.
pub fn calculate(
    pokemon_id: u32,
    base_stats: &StatBlock,
    ivs: &Ivs,
    level: u32,
    modifiers: &ModifierRegistry,
) -> StatBlock {
    let mut base = *base_stats;
    modifiers.apply_base_stat_boosters(pokemon_id, &mut base);

    let mut stats = StatBlock::default();
    for stat in Stat::ALL {
        let raw = ((2 * base[stat] as u64 + ivs[stat] as u64) * level as u64) as f64 * 0.01;
        let raw = raw.floor() as u64;
        let stat_value = match stat {
            Stat::Hp => raw + level as u64 + 10,
            _ => raw + 5,
        };
        stats[stat] = stat_value.min(MAX_STAT as u64) as u32;
    }
    stats
}

/// Reconciles current hp with a freshly computed max hp
///
/// With no prior hp, or prior hp above the new max, health is set to the
/// new max. Otherwise a rise in max hp heals by exactly the difference.
pub fn reconcile_hp(prior_hp: Option<u32>, old_max: u32, new_max: u32) -> u32 {
    match prior_hp {
        None => new_max,
        Some(hp) if hp > new_max => new_max,
        Some(hp) if old_max > 0 && new_max > old_max => hp + (new_max - old_max),
        Some(hp) => hp,
    }
}
