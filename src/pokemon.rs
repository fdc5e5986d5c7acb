/// Static data registry module
pub mod dex;

/// Growth curves and experience module
pub mod exp;

/// Identifier-derived hidden values, gender and rarity
pub mod identity;

/// Move definitions and learned moves module
pub mod moves;

/// Level-up moveset generation
pub mod moveset;

/// Pokemon Type module
pub mod ptype;

/// Species data module
pub mod species;

/// Pokemon Stats (hp, etc) module
pub mod stats;

use serde::{Deserialize, Serialize};

use crate::{
    error::{DexError, SelectError},
    rng::BattleRng,
    session::Session,
};

use identity::{Gender, Identity};
use moves::PokemonMove;
use species::{Species, SpeciesId};
use stats::{Ivs, Stat, StatBlock};

/// Which party controls a Pokemon
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Enemy,
}

/// Represents a single Pokemon in battle or in a party
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Pokemon {
    /// Identifier, assigned once at creation and kept across ownership changes
    pub id: u32,

    /// The species this Pokemon belongs to
    pub species: SpeciesId,

    /// Display name
    pub name: String,

    /// The party controlling this Pokemon
    pub side: Side,

    pub level: u32,

    /// Total experience
    pub exp: u32,

    /// Experience gathered since reaching the current level
    pub level_exp: u32,

    pub gender: Gender,

    /// Current health, 0 means fainted
    pub hp: u32,

    /// Battle stats, only ever written by [`Pokemon::calculate_stats`]
    pub stats: StatBlock,

    /// Hidden values derived from the identifier
    pub ivs: Ivs,

    /// Up to four learned moves
    pub moveset: Vec<PokemonMove>,

    pub shiny: bool,

    pub win_count: u32,
}

impl Pokemon {
    /// Creates a new Pokemon with an identifier drawn from `rng`
    pub fn new(
        session: &Session,
        species: SpeciesId,
        level: u32,
        side: Side,
        rng: &mut BattleRng,
    ) -> Result<Self, DexError> {
        let seed = rng.next_u32();
        Self::with_seed(session, species, level, side, seed, rng)
    }

    /// Creates a new Pokemon from a given identifier
    ///
    /// Hidden values, gender and rarity depend only on `seed`, the session
    /// salts and the registered modifiers. `rng` is only used for the moveset.
    pub fn with_seed(
        session: &Session,
        species: SpeciesId,
        level: u32,
        side: Side,
        seed: u32,
        rng: &mut BattleRng,
    ) -> Result<Self, DexError> {
        let data = session.dex.species(species)?;
        let identity = Identity::derive(seed, data, session.salts, &session.modifiers);
        let level = level.clamp(1, exp::MAX_LEVEL);

        let mut new = Self {
            id: identity.id,
            species,
            name: data.name.to_uppercase(),
            side,
            level,
            exp: data.growth_rate.total_exp(level),
            level_exp: 0,
            gender: identity.gender,
            hp: 0,
            stats: StatBlock::default(),
            ivs: identity.ivs,
            moveset: vec![],
            shiny: identity.shiny,
            win_count: 0,
        };

        new.generate_moveset(session, rng);
        new.refresh_stats(data, session, None);

        if new.shiny {
            info!("A shiny {} (id {}) appeared", new.name, new.id);
        }
        Ok(new)
    }

    /// Creates a copy of `source` controlled by `side`
    ///
    /// Identity, health, stats, hidden values, moveset and wins carry over.
    /// Experience is kept only when it lies within `level`; otherwise it
    /// falls back to the total for `level`.
    pub fn from_source(
        session: &Session,
        source: &Pokemon,
        level: u32,
        side: Side,
    ) -> Result<Self, DexError> {
        let data = session.dex.species(source.species)?;
        let level = level.clamp(1, exp::MAX_LEVEL);
        let growth = data.growth_rate;
        let floor = growth.total_exp(level);
        let fits = level == source.level
            && source.exp >= floor
            && (level == exp::MAX_LEVEL || source.exp < growth.total_exp(level + 1));
        let exp = if fits { source.exp } else { floor };

        let mut new = Self {
            side,
            level,
            exp,
            level_exp: exp - floor,
            ..source.clone()
        };
        let hp = new.hp;
        new.refresh_stats(data, session, Some(hp));
        Ok(new)
    }

    /// Looks up this Pokemon's species
    pub fn species_data<'a>(&self, session: &'a Session) -> Result<&'a Species, DexError> {
        session.dex.species(self.species)
    }

    pub fn max_hp(&self) -> u32 {
        self.stats[Stat::Hp]
    }

    /// Share of health left, rounded down to two decimals
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp() == 0 {
            return 0.0;
        }
        ((self.hp as f64 / self.max_hp() as f64) * 100.0).floor() / 100.0
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Recomputes stats from species, hidden values, level and modifiers
    pub fn calculate_stats(&mut self, session: &Session) -> Result<(), DexError> {
        let data = session.dex.species(self.species)?;
        let hp = self.hp;
        self.refresh_stats(data, session, Some(hp));
        Ok(())
    }

    fn refresh_stats(&mut self, data: &Species, session: &Session, prior_hp: Option<u32>) {
        let old_max = self.max_hp();
        let stats = stats::calculate(
            self.id,
            &data.base_stats,
            &self.ivs,
            self.level,
            &session.modifiers,
        );
        let prior_hp = if old_max == 0 { None } else { prior_hp };
        self.hp = stats::reconcile_hp(prior_hp, old_max, stats[Stat::Hp]);
        self.stats = stats;
    }

    /// Replaces the moveset with a fresh pick from the level-up table
    pub fn generate_moveset(&mut self, session: &Session, rng: &mut BattleRng) {
        self.moveset = moveset::generate(&session.dex, self.species, self.level, rng);
    }

    /// Returns the move in slot `index` if it can be used this turn
    pub fn try_select_move(
        &self,
        session: &Session,
        index: usize,
    ) -> Result<&PokemonMove, SelectError> {
        let pokemon_move = self.moveset.get(index).ok_or(SelectError::OutOfRange {
            index,
            len: self.moveset.len(),
        })?;
        let data = session
            .dex
            .move_data(pokemon_move.move_id)
            .map_err(|_| SelectError::UnknownMove(pokemon_move.move_id))?;
        pokemon_move.check_usable(data)?;
        Ok(pokemon_move)
    }

    /// Indices of the moves that can be used this turn, in moveset order
    pub fn usable_moves(&self, session: &Session) -> Vec<usize> {
        (0..self.moveset.len())
            .filter(|&i| self.try_select_move(session, i).is_ok())
            .collect()
    }

    /// Adds experience and levels up as far as it reaches
    ///
    /// Stats are recomputed when the level changes. Returns the number of
    /// levels gained.
    pub fn add_exp(&mut self, amount: u32, session: &Session) -> Result<u32, DexError> {
        let data = session.dex.species(self.species)?;
        let growth = data.growth_rate;
        let start_level = self.level;

        self.exp = self.exp.saturating_add(amount);
        while self.level < exp::MAX_LEVEL && self.exp >= growth.total_exp(self.level + 1) {
            self.level += 1;
        }
        if self.level == exp::MAX_LEVEL {
            self.exp = self.exp.min(growth.total_exp(exp::MAX_LEVEL));
        }
        self.level_exp = self.exp.saturating_sub(growth.total_exp(self.level));

        let gained = self.level - start_level;
        if gained > 0 {
            info!("{} grew to level {}", self.name, self.level);
            let hp = self.hp;
            self.refresh_stats(data, session, Some(hp));
        }
        Ok(gained)
    }

    /// Experience this Pokemon yields when defeated by a Pokemon of `victor_level`
    pub fn exp_value(&self, session: &Session, victor_level: u32) -> Result<u32, DexError> {
        let data = session.dex.species(self.species)?;
        Ok(exp::exp_yield(data.base_exp, self.level, victor_level))
    }
}
