use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    fight::ai::AiType,
    modifier::ModifierConfig,
    pokemon::species::SpeciesId,
};

/// Default location of the session config
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Session configuration read from TOML
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Seed of the session random source, drawn from the OS when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Public trainer id salt, drawn from the random source when absent
    #[serde(default)]
    pub trainer_id: Option<u16>,

    /// Secret id salt, drawn from the random source when absent
    #[serde(default)]
    pub secret_id: Option<u16>,

    /// How opponents pick their moves
    #[serde(default)]
    pub ai: AiType,

    /// External dex file, the built-in dex is used when absent
    #[serde(default)]
    pub dex: Option<PathBuf>,

    /// Active modifiers, applied in the listed order
    #[serde(default)]
    pub modifiers: Vec<ModifierConfig>,

    /// Setup of the demo duel
    #[serde(default)]
    pub battle: BattleConfig,
}

/// The two creatures of the demo duel
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BattleConfig {
    pub player_species: SpeciesId,
    pub player_level: u32,
    pub enemy_species: SpeciesId,
    pub enemy_level: u32,
    /// Turns before the duel is called a draw
    pub max_turns: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            player_species: 4,
            player_level: 5,
            enemy_species: 1,
            enemy_level: 5,
            max_turns: 100,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            trainer_id: None,
            secret_id: None,
            ai: AiType::default(),
            dex: None,
            modifiers: vec![],
            battle: BattleConfig::default(),
        }
    }
}

impl Config {
    /// Parses a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Reads a config file, falling back to defaults when it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
