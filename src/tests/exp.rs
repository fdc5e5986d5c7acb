use proptest::prelude::*;

use crate::{
    pokemon::{
        Pokemon, Side,
        exp::{GrowthRate, MAX_LEVEL, exp_yield},
    },
    rng::BattleRng,
};

const RATES: [GrowthRate; 6] = [
    GrowthRate::Erratic,
    GrowthRate::Fast,
    GrowthRate::MediumFast,
    GrowthRate::MediumSlow,
    GrowthRate::Slow,
    GrowthRate::Fluctuating,
];

#[test]
fn test_growth_thresholds() {
    for rate in RATES {
        assert_eq!(rate.total_exp(1), 0);
    }
    assert_eq!(GrowthRate::MediumFast.total_exp(10), 1000);
    assert_eq!(GrowthRate::Fast.total_exp(10), 800);
    assert_eq!(GrowthRate::Slow.total_exp(10), 1250);
    assert_eq!(GrowthRate::MediumSlow.total_exp(10), 560);
    assert_eq!(GrowthRate::MediumSlow.total_exp(100), 1_059_860);
    assert_eq!(GrowthRate::Erratic.total_exp(50), 125_000);
    assert_eq!(GrowthRate::Erratic.total_exp(100), 600_000);
    assert_eq!(GrowthRate::Fluctuating.total_exp(36), 46_656);
    assert_eq!(GrowthRate::Fluctuating.total_exp(100), 1_640_000);
}

#[test]
fn test_growth_thresholds_increase() {
    for rate in RATES {
        for level in 1..MAX_LEVEL {
            assert!(
                rate.total_exp(level + 1) > rate.total_exp(level),
                "{:?} is flat at level {}",
                rate,
                level
            );
        }
    }
}

#[test]
fn test_exp_yield() {
    assert_eq!(exp_yield(64, 5, 5), 65);
    assert_eq!(exp_yield(64, 10, 5), 185);
    // beating a much weaker Pokemon gives little
    assert!(exp_yield(64, 2, 50) < exp_yield(64, 2, 2));
}

#[test]
fn test_add_exp_levels_up_and_heals() {
    let session = super::session();
    // Pikachu grows medium fast: level 6 needs 216
    let mut pikachu = Pokemon::new(&session, 25, 5, Side::Player, &mut BattleRng::new(9)).unwrap();
    assert_eq!(pikachu.exp, 125);
    pikachu.hp -= 3;
    let (old_hp, old_max) = (pikachu.hp, pikachu.max_hp());

    let gained = pikachu.add_exp(100, &session).unwrap();
    assert_eq!(gained, 1);
    assert_eq!(pikachu.level, 6);
    assert_eq!(pikachu.exp, 225);
    assert_eq!(pikachu.level_exp, 9);
    assert_eq!(pikachu.hp, old_hp + (pikachu.max_hp() - old_max));
}

#[test]
fn test_add_exp_stops_at_max_level() {
    let session = super::session();
    let mut pokemon = Pokemon::new(&session, 19, 98, Side::Player, &mut BattleRng::new(4)).unwrap();
    pokemon.add_exp(u32::MAX, &session).unwrap();
    assert_eq!(pokemon.level, MAX_LEVEL);
    assert_eq!(pokemon.exp, GrowthRate::MediumFast.total_exp(MAX_LEVEL));
    assert_eq!(pokemon.level_exp, 0);
}

proptest! {
    #[test]
    fn prop_add_exp_is_monotonic(
        start in 1u32..60,
        gains in proptest::collection::vec(0u32..5_000, 1..20),
    ) {
        let session = super::session();
        let mut pokemon =
            Pokemon::new(&session, 7, start, Side::Player, &mut BattleRng::new(5)).unwrap();
        let growth = GrowthRate::MediumSlow;

        for amount in gains {
            let (level, exp) = (pokemon.level, pokemon.exp);
            pokemon.add_exp(amount, &session).unwrap();

            prop_assert!(pokemon.level >= level);
            prop_assert!(pokemon.exp >= exp);
            let span = growth.total_exp(pokemon.level + 1) - growth.total_exp(pokemon.level);
            prop_assert!(pokemon.level_exp < span || pokemon.level == MAX_LEVEL);
            prop_assert_eq!(pokemon.level_exp, pokemon.exp - growth.total_exp(pokemon.level));
        }
    }
}
