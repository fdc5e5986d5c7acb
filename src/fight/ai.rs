use serde::{Deserialize, Serialize};

use crate::{
    error::DexError,
    pokemon::{
        Pokemon,
        moves::{MoveCategory, MoveData, PokemonMove},
        stats::Stat,
    },
    rng::BattleRng,
    session::Session,
};

/// Score given to every non-damaging move
pub const STATUS_SCORE: f64 = 1.0;

/// How an opponent picks its moves
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AiType {
    /// Any usable move, uniformly
    Random,
    /// Usually the best scored move, sometimes a weaker one
    #[default]
    SmartRandom,
    /// Always the best scored move
    Smart,
}

/// A move picked for this turn
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveChoice {
    /// The move in this moveset slot
    Slot(usize),
    /// Nothing is usable, fall back to Struggle
    Struggle,
}

impl MoveChoice {
    /// The move to resolve for this choice
    pub fn pokemon_move(self, user: &Pokemon) -> PokemonMove {
        match self {
            MoveChoice::Slot(index) => user
                .moveset
                .get(index)
                .cloned()
                .unwrap_or_else(PokemonMove::struggle),
            MoveChoice::Struggle => PokemonMove::struggle(),
        }
    }
}

/// Multiplier for leaning on the user's stronger attacking stat
fn stat_bias(user: &Pokemon, category: MoveCategory) -> f64 {
    let (own, other) = match category {
        MoveCategory::Physical => (user.stats[Stat::Atk], user.stats[Stat::SpAtk]),
        MoveCategory::Special => (user.stats[Stat::SpAtk], user.stats[Stat::Atk]),
        MoveCategory::Status => return 1.0,
    };
    if own <= other {
        return 1.0;
    }
    let ratio = other as f64 / own as f64;
    if ratio <= 0.75 {
        2.0
    } else if ratio <= 0.875 {
        1.5
    } else {
        1.0
    }
}

/// Scores one move used by `user` against a target with type multiplier `effectiveness`
pub fn score_move(user: &Pokemon, data: &MoveData, effectiveness: f64) -> f64 {
    if !data.category.is_damaging() {
        return STATUS_SCORE;
    }
    let mut score = if (effectiveness - 1.0).powi(2) * effectiveness < 1.0 {
        -2.0
    } else {
        2.0
    };
    if score != 0.0 {
        score *= stat_bias(user, data.category);
        score += (data.power / 5) as f64;
    }
    score
}

/// Usable moveset slots of `user` paired with their scores against `target`
pub fn score_moves(
    session: &Session,
    user: &Pokemon,
    target: &Pokemon,
) -> Result<Vec<(usize, f64)>, DexError> {
    let target_species = target.species_data(session)?;
    user.usable_moves(session)
        .into_iter()
        .map(|index| -> Result<(usize, f64), DexError> {
            let data = session.dex.move_data(user.moveset[index].move_id)?;
            let effectiveness = target_species.effectiveness_of(data.move_type);
            Ok((index, score_move(user, data, effectiveness)))
        })
        .collect()
}

/// Sorts scored moves best first, keeping the moveset order between equal scores
pub fn rank_moves(mut scored: Vec<(usize, f64)>) -> Vec<(usize, f64)> {
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
}

/// Walks down the ranking, moving on with a 3 in 8 chance at each step
pub fn weighted_rank(len: usize, rng: &mut BattleRng) -> usize {
    let mut rank = 0;
    while rank + 1 < len && rng.rand_int(8) >= 5 {
        rank += 1;
    }
    rank
}

/// Picks the move `user` will use against `target` this turn
pub fn choose_move(
    session: &Session,
    user: &Pokemon,
    target: &Pokemon,
    ai: AiType,
    rng: &mut BattleRng,
) -> Result<MoveChoice, DexError> {
    let usable = user.usable_moves(session);
    match usable.len() {
        0 => return Ok(MoveChoice::Struggle),
        1 => return Ok(MoveChoice::Slot(usable[0])),
        _ => {}
    }

    if ai == AiType::Random {
        return Ok(MoveChoice::Slot(usable[rng.index(usable.len())]));
    }

    let ranked = rank_moves(score_moves(session, user, target)?);
    debug!("{} move scores: {:?}", user.name, ranked);

    let rank = match ai {
        AiType::SmartRandom => weighted_rank(ranked.len(), rng),
        _ => 0,
    };
    Ok(MoveChoice::Slot(ranked[rank].0))
}
