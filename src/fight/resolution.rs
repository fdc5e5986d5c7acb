use serde::{Deserialize, Serialize};

use super::{FightEvent, MoveResult, Presenter};
use crate::{
    error::DexError,
    pokemon::{Pokemon, moves::PokemonMove},
    rng::BattleRng,
    session::Session,
};

/// Multiplier for a move matching one of the user's types
pub const STAB_MULTIPLIER: f64 = 1.5;

/// One in this many damaging hits is critical
pub const CRITICAL_CHANCE: u32 = 4;

/// What a single move did
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub result: MoveResult,
    pub damage: u32,
    pub critical: bool,
}

/// A move whose effects are already applied, waiting to be presented
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub outcome: ActionOutcome,
    pub events: Vec<FightEvent>,
}

impl Resolution {
    /// Hands the events to the presentation layer and waits for it to finish
    pub async fn present<P: Presenter + ?Sized>(self, presenter: &P) -> ActionOutcome {
        presenter.present(&self.events).await;
        self.outcome
    }
}

/// Inputs of the damage formula, gathered from both sides of a hit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageInput {
    pub level: u32,
    pub power: u32,
    pub attack: u32,
    pub defense: u32,
    pub stab: f64,
    pub type_multiplier: f64,
    /// Integer roll in `85..=100`
    pub variance: u32,
    pub critical: bool,
}

impl DamageInput {
    /// Evaluates the damage formula
    pub fn damage(&self) -> u32 {
        let level_factor = 2.0 * self.level as f64 / 5.0 + 2.0;
        let defense = self.defense.max(1) as f64;
        let base = (level_factor * self.power as f64 * self.attack as f64 / defense) / 50.0 + 2.0;
        let scaled = base * self.stab * self.type_multiplier * (self.variance as f64 / 100.0);
        let critical = if self.critical { 2 } else { 1 };
        scaled.ceil().max(0.0) as u32 * critical
    }
}

/// Applies `pokemon_move` from `attacker` to `defender`
///
/// All state changes happen here, before anything is shown. The returned
/// [`Resolution`] carries the events for the presentation layer.
pub fn resolve(
    session: &Session,
    attacker: &Pokemon,
    defender: &mut Pokemon,
    pokemon_move: &PokemonMove,
    rng: &mut BattleRng,
) -> Result<Resolution, DexError> {
    let data = session.dex.move_data(pokemon_move.move_id)?;
    let mut events = vec![FightEvent::UsedMove {
        pokemon: attacker.name.clone(),
        move_name: data.name.clone(),
    }];

    let Some((atk_stat, def_stat)) = data.category.stat_pair() else {
        return Ok(Resolution {
            outcome: ActionOutcome {
                result: MoveResult::Other,
                damage: 0,
                critical: false,
            },
            events,
        });
    };

    let attacker_species = attacker.species_data(session)?;
    let defender_species = defender.species_data(session)?;

    let critical = rng.one_in(CRITICAL_CHANCE);
    let stab = if attacker_species.has_type(data.move_type) {
        STAB_MULTIPLIER
    } else {
        1.0
    };
    let type_multiplier = defender_species.effectiveness_of(data.move_type);

    let input = DamageInput {
        level: attacker.level,
        power: data.power,
        attack: attacker.stats[atk_stat],
        defense: defender.stats[def_stat],
        stab,
        type_multiplier,
        variance: rng.range_inclusive(85, 100),
        critical,
    };
    let damage = input.damage();
    debug!(
        "{} used {} on {}: {:?} -> {} damage",
        attacker.name, data.name, defender.name, input, damage
    );

    let result = MoveResult::from_multiplier(type_multiplier);

    if damage > 0 {
        defender.hp = defender.hp.saturating_sub(damage);
        events.push(FightEvent::Hit {
            attacker: attacker.name.clone(),
            defender: defender.name.clone(),
            damage,
            hp_left: defender.hp,
        });
        if critical {
            events.push(FightEvent::CriticalHit);
        }
    }

    events.push(FightEvent::Effectiveness {
        defender: defender.name.clone(),
        result,
    });

    if damage > 0 && defender.is_fainted() {
        events.push(FightEvent::Fainted {
            pokemon: defender.name.clone(),
        });
    }

    Ok(Resolution {
        outcome: ActionOutcome {
            result,
            damage,
            critical: critical && damage > 0,
        },
        events,
    })
}

/// Applies a move, then waits for the presenter to play it out
pub async fn resolve_and_present<P: Presenter + ?Sized>(
    session: &Session,
    attacker: &Pokemon,
    defender: &mut Pokemon,
    pokemon_move: &PokemonMove,
    rng: &mut BattleRng,
    presenter: &P,
) -> Result<ActionOutcome, DexError> {
    let resolution = resolve(session, attacker, defender, pokemon_move, rng)?;
    Ok(resolution.present(presenter).await)
}
