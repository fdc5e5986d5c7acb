use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::pokemon::stats::{Stat, StatBlock};

/// Raises the rarity threshold used when rolling a new creature
pub trait ShinyRateBooster: Debug + Send + Sync {
    /// Returns the adjusted threshold, never lower than `threshold`
    fn boost(&self, threshold: u32) -> u32;
}

/// Adjusts a creature's base stats before its stats are computed
pub trait BaseStatBooster: Debug + Send + Sync {
    fn apply(&self, pokemon_id: u32, base_stats: &mut StatBlock);
}

/// Doubles the rarity threshold once per stack
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShinyCharm {
    pub stacks: u32,
}

impl ShinyRateBooster for ShinyCharm {
    fn boost(&self, threshold: u32) -> u32 {
        threshold.saturating_mul(1u32.checked_shl(self.stacks).unwrap_or(u32::MAX))
    }
}

/// Raises one base stat of one creature by 20% per stack
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatBooster {
    /// Identifier of the creature holding the booster
    pub pokemon_id: u32,
    pub stat: Stat,
    pub stacks: u32,
}

impl BaseStatBooster for StatBooster {
    fn apply(&self, pokemon_id: u32, base_stats: &mut StatBlock) {
        if pokemon_id != self.pokemon_id {
            return;
        }
        let boosted = base_stats[self.stat] as f64 * (1.0 + self.stacks as f64 * 0.2);
        base_stats[self.stat] = boosted.floor() as u32;
    }
}

/// Modifiers as written in a config file
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind")]
pub enum ModifierConfig {
    ShinyCharm(ShinyCharm),
    StatBooster(StatBooster),
}

/// The active modifiers of a session, applied in registration order
#[derive(Debug, Default)]
pub struct ModifierRegistry {
    shiny_boosters: Vec<Box<dyn ShinyRateBooster>>,
    stat_boosters: Vec<Box<dyn BaseStatBooster>>,
}

impl ModifierRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from config entries, keeping their order
    pub fn from_config(configs: &[ModifierConfig]) -> Self {
        let mut registry = Self::new();
        for config in configs {
            match *config {
                ModifierConfig::ShinyCharm(charm) => registry.register_shiny_booster(charm),
                ModifierConfig::StatBooster(booster) => registry.register_stat_booster(booster),
            }
        }
        registry
    }

    pub fn register_shiny_booster(&mut self, booster: impl ShinyRateBooster + 'static) {
        self.shiny_boosters.push(Box::new(booster));
    }

    pub fn register_stat_booster(&mut self, booster: impl BaseStatBooster + 'static) {
        self.stat_boosters.push(Box::new(booster));
    }

    /// Runs `threshold` through every rarity booster
    pub fn apply_shiny_boosters(&self, threshold: u32) -> u32 {
        self.shiny_boosters
            .iter()
            .fold(threshold, |value, booster| booster.boost(value).max(value))
    }

    /// Runs base stats through every stat booster
    pub fn apply_base_stat_boosters(&self, pokemon_id: u32, base_stats: &mut StatBlock) {
        for booster in &self.stat_boosters {
            booster.apply(pokemon_id, base_stats);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shiny_boosters.is_empty() && self.stat_boosters.is_empty()
    }
}
