use crate::{
    pokemon::{
        Pokemon, Side,
        moveset::{self, MAX_MOVES, move_pool},
    },
    rng::BattleRng,
};

const TACKLE: u16 = 33;
const GROWL: u16 = 45;
const EMBER: u16 = 52;

#[test]
fn test_move_pool_stops_at_level() {
    let table = [(1, TACKLE), (1, GROWL), (7, EMBER)];
    assert_eq!(move_pool(&table, 5), vec![TACKLE, GROWL]);
    assert_eq!(move_pool(&table, 7), vec![TACKLE, GROWL, EMBER]);
}

#[test]
fn test_move_pool_skips_duplicates() {
    let table = [(1, TACKLE), (3, TACKLE), (5, GROWL)];
    assert_eq!(move_pool(&table, 10), vec![TACKLE, GROWL]);
}

#[test]
fn test_damaging_move_comes_first() {
    let session = super::session();
    // Bulbasaur at level 5 knows Tackle and Growl
    for seed in 0..50 {
        let moves = moveset::generate(&session.dex, 1, 5, &mut BattleRng::new(seed));
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].move_id, TACKLE);
        assert_eq!(moves[1].move_id, GROWL);
    }
}

#[test]
fn test_moveset_is_capped_and_distinct() {
    let session = super::session();
    // Pikachu at level 13 has five moves to choose from
    for seed in 0..50 {
        let moves = moveset::generate(&session.dex, 25, 13, &mut BattleRng::new(seed));
        assert_eq!(moves.len(), MAX_MOVES);

        let first = session.dex.move_data(moves[0].move_id).unwrap();
        assert!(first.category.is_damaging());

        let mut ids: Vec<_> = moves.iter().map(|m| m.move_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), MAX_MOVES);
    }
}

#[test]
fn test_moveset_without_damaging_moves() {
    let session = super::session();
    // Magikarp only has Splash before level 15
    let moves = moveset::generate(&session.dex, 129, 5, &mut BattleRng::new(0));
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].move_id, 150);
}

#[test]
fn test_missing_table_gives_empty_moveset() {
    let session = super::session();
    let ditto = Pokemon::new(&session, 132, 20, Side::Enemy, &mut BattleRng::new(0)).unwrap();
    assert!(ditto.moveset.is_empty());
    assert!(ditto.usable_moves(&session).is_empty());
}
