use super::{
    dex::{Dex, LevelMove},
    moves::{MoveId, PokemonMove},
    species::SpeciesId,
};
use crate::rng::BattleRng;

/// Most moves a creature can know at once
pub const MAX_MOVES: usize = 4;

/// Collects every move learnable at `level`, in table order and without duplicates
pub fn move_pool(table: &[LevelMove], level: u32) -> Vec<MoveId> {
    let mut pool: Vec<MoveId> = vec![];
    for &(min_level, move_id) in table {
        if level < min_level {
            break;
        }
        if !pool.contains(&move_id) {
            pool.push(move_id);
        }
    }
    pool
}

/// Picks up to four moves from the level-up table, leading with a damaging one
///
/// A species without a table gets an empty moveset.
pub fn generate(dex: &Dex, species: SpeciesId, level: u32, rng: &mut BattleRng) -> Vec<PokemonMove> {
    let Some(table) = dex.level_moves(species) else {
        warn!("No level moves for species {}, moveset left empty", species);
        return vec![];
    };

    let mut pool = move_pool(table, level);
    let mut moveset = Vec::with_capacity(MAX_MOVES);

    // Unknown moves never count as damaging
    let attack_pool: Vec<MoveId> = pool
        .iter()
        .copied()
        .filter(|&id| dex.move_data(id).is_ok_and(|m| m.category.is_damaging()))
        .collect();

    if !attack_pool.is_empty() {
        let picked = attack_pool[rng.index(attack_pool.len())];
        moveset.push(PokemonMove::new(picked));
        pool.retain(|&id| id != picked);
    }

    while !pool.is_empty() && moveset.len() < MAX_MOVES {
        let picked = pool.remove(rng.index(pool.len()));
        moveset.push(PokemonMove::new(picked));
    }

    debug!(
        "Generated moveset {:?} for species {} at level {}",
        moveset.iter().map(|m| m.move_id).collect::<Vec<_>>(),
        species,
        level
    );
    moveset
}
