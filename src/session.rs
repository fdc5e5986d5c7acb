use anyhow::Result;

use crate::{
    config::Config,
    fight::ai::AiType,
    modifier::ModifierRegistry,
    pokemon::{dex::Dex, identity::SessionSalts},
    rng::BattleRng,
};

/// Everything fixed for the length of a play session
///
/// Passed explicitly into every operation that needs static data,
/// modifiers or salts. The random source is kept apart so it can be
/// borrowed mutably alongside a shared session.
#[derive(Debug)]
pub struct Session {
    pub dex: Dex,
    pub modifiers: ModifierRegistry,
    pub salts: SessionSalts,
    pub ai: AiType,
}

impl Session {
    pub fn new(dex: Dex, modifiers: ModifierRegistry, salts: SessionSalts, ai: AiType) -> Self {
        Self {
            dex,
            modifiers,
            salts,
            ai,
        }
    }

    /// Builds a session and its random source from a config
    pub fn from_config(config: &Config) -> Result<(Self, BattleRng)> {
        let mut rng = match config.seed {
            Some(seed) => BattleRng::new(seed),
            None => BattleRng::from_entropy(),
        };

        let dex = match &config.dex {
            Some(path) => Dex::load(path)?,
            None => Dex::builtin()?,
        };

        let salts = SessionSalts {
            trainer_id: config.trainer_id.unwrap_or_else(|| rng.next_u16()),
            secret_id: config.secret_id.unwrap_or_else(|| rng.next_u16()),
        };

        info!(
            "Session started with seed {} and trainer id {}",
            rng.seed(),
            salts.trainer_id
        );

        let session = Self::new(
            dex,
            ModifierRegistry::from_config(&config.modifiers),
            salts,
            config.ai,
        );
        Ok((session, rng))
    }
}
