use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{
    moves::{MoveData, MoveId, STRUGGLE},
    species::{Species, SpeciesId},
};
use crate::error::DexError;

/// Dex data shipped with the crate
const BUILTIN_DEX: &str = include_str!("../../data/dex.toml");

/// One row of a level-gated move table: (minimum level, move)
pub type LevelMove = (u32, MoveId);

#[derive(Deserialize)]
struct LevelMoveTable {
    species: SpeciesId,
    moves: Vec<LevelMove>,
}

#[derive(Deserialize)]
struct DexFile {
    species: Vec<Species>,
    moves: Vec<MoveData>,
    #[serde(default)]
    level_moves: Vec<LevelMoveTable>,
}

/// Static battle data: species, moves and level-up move tables
#[derive(Clone, Debug, Default)]
pub struct Dex {
    species: HashMap<SpeciesId, Species>,
    moves: HashMap<MoveId, MoveData>,
    level_moves: HashMap<SpeciesId, Vec<LevelMove>>,
}

impl Dex {
    /// Loads the dex bundled with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_DEX).context("Failed to parse built-in dex")
    }

    /// Loads a dex from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dex file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parses and validates a dex from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: DexFile = toml::from_str(text)?;
        let mut dex = Dex::default();

        for species in file.species {
            dex.add_species(species)?;
        }
        for data in file.moves {
            dex.add_move(data);
        }
        for table in file.level_moves {
            dex.set_level_moves(table.species, table.moves);
        }

        if !dex.moves.contains_key(&STRUGGLE) {
            return Err(DexError::UnknownMove(STRUGGLE).into());
        }

        info!(
            "Loaded dex with {} species and {} moves",
            dex.species.len(),
            dex.moves.len()
        );
        Ok(dex)
    }

    /// Registers a species, rejecting base stats that would allow a zero stat
    pub fn add_species(&mut self, species: Species) -> Result<(), DexError> {
        if species.base_stats.0.iter().any(|&s| s == 0) {
            return Err(DexError::InvalidSpecies {
                id: species.id,
                reason: "base stats must be positive".to_string(),
            });
        }
        if let Some(male) = species.male_eighths {
            if !(0.0..=8.0).contains(&male) {
                return Err(DexError::InvalidSpecies {
                    id: species.id,
                    reason: format!("male ratio {} is outside 0..=8", male),
                });
            }
        }
        self.species.insert(species.id, species);
        Ok(())
    }

    /// Registers a move definition
    pub fn add_move(&mut self, data: MoveData) {
        self.moves.insert(data.id, data);
    }

    /// Replaces the level-up move table of a species, sorting it by level
    pub fn set_level_moves(&mut self, species: SpeciesId, mut moves: Vec<LevelMove>) {
        moves.sort_by_key(|&(level, _)| level);
        self.level_moves.insert(species, moves);
    }

    /// Looks up a species
    pub fn species(&self, id: SpeciesId) -> Result<&Species, DexError> {
        self.species.get(&id).ok_or(DexError::UnknownSpecies(id))
    }

    /// Looks up a move definition
    pub fn move_data(&self, id: MoveId) -> Result<&MoveData, DexError> {
        self.moves.get(&id).ok_or(DexError::UnknownMove(id))
    }

    /// The level-up move table of a species, if it has one
    pub fn level_moves(&self, species: SpeciesId) -> Option<&[LevelMove]> {
        self.level_moves.get(&species).map(Vec::as_slice)
    }
}
