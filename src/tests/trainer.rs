use crate::{
    error::{CaptureError, PartyError},
    pokemon::{Pokemon, Side, exp::GrowthRate},
    rng::BattleRng,
    trainer::{MAX_PARTY_SIZE, Trainer},
};

#[test]
fn test_capture_keeps_identity() {
    let session = super::session();
    let mut rng = BattleRng::new(10);
    let mut wild = Pokemon::new(&session, 16, 8, Side::Enemy, &mut rng).unwrap();
    wild.hp -= 4;
    wild.win_count = 2;
    let original = wild.clone();

    let mut trainer = Trainer::new("Red");
    trainer.capture(&session, &mut wild).unwrap();

    let caught = &trainer.team()[0];
    assert_eq!(caught.side, Side::Player);
    assert_eq!(caught.id, original.id);
    assert_eq!(caught.shiny, original.shiny);
    assert_eq!(caught.gender, original.gender);
    assert_eq!(caught.hp, original.hp);
    assert_eq!(caught.stats, original.stats);
    assert_eq!(caught.ivs, original.ivs);
    assert_eq!(caught.moveset, original.moveset);
    assert_eq!(caught.win_count, 2);
    assert_eq!(wild.hp, 0);
}

#[test]
fn test_capture_into_full_party() {
    let session = super::session();
    let mut rng = BattleRng::new(11);
    let mut trainer = Trainer::new("Blue");
    for _ in 0..MAX_PARTY_SIZE {
        trainer
            .add(Pokemon::new(&session, 19, 5, Side::Player, &mut rng).unwrap())
            .unwrap();
    }

    let mut wild = Pokemon::new(&session, 25, 5, Side::Enemy, &mut rng).unwrap();
    let hp = wild.hp;
    assert_eq!(
        trainer.capture(&session, &mut wild),
        Err(CaptureError::Party(PartyError::Full))
    );
    assert!(hp > 0);
    assert_eq!(wild.hp, 0);
    assert_eq!(trainer.team().len(), MAX_PARTY_SIZE);
}

#[test]
fn test_clone_without_exp_uses_level_total() {
    let session = super::session();
    let mut source = Pokemon::new(&session, 25, 9, Side::Enemy, &mut BattleRng::new(12)).unwrap();
    source.exp = 0;

    let copy = Pokemon::from_source(&session, &source, 9, Side::Player).unwrap();
    assert_eq!(copy.exp, GrowthRate::MediumFast.total_exp(9));
    assert_eq!(copy.id, source.id);
}

#[test]
fn test_clone_at_higher_level_resets_exp() {
    let session = super::session();
    let source = Pokemon::new(&session, 19, 5, Side::Enemy, &mut BattleRng::new(14)).unwrap();

    let mut copy = Pokemon::from_source(&session, &source, 10, Side::Player).unwrap();
    assert_eq!(copy.level, 10);
    assert_eq!(copy.exp, GrowthRate::MediumFast.total_exp(10));
    assert_eq!(copy.level_exp, 0);

    assert_eq!(copy.add_exp(1, &session).unwrap(), 0);
    assert_eq!(copy.level_exp, 1);
}

#[test]
fn test_clone_at_lower_level_keeps_level_exp_in_range() {
    let session = super::session();
    let mut source = Pokemon::new(&session, 19, 20, Side::Enemy, &mut BattleRng::new(15)).unwrap();
    source.add_exp(500, &session).unwrap();

    let copy = Pokemon::from_source(&session, &source, 5, Side::Player).unwrap();
    let growth = GrowthRate::MediumFast;
    assert_eq!(copy.exp, growth.total_exp(5));
    assert_eq!(copy.level_exp, 0);
    assert!(copy.level_exp < growth.total_exp(6) - growth.total_exp(5));
}

#[test]
fn test_clone_at_same_level_keeps_exp() {
    let session = super::session();
    let mut source = Pokemon::new(&session, 25, 12, Side::Enemy, &mut BattleRng::new(16)).unwrap();
    source.add_exp(40, &session).unwrap();

    let copy = Pokemon::from_source(&session, &source, source.level, Side::Player).unwrap();
    assert_eq!(copy.exp, source.exp);
    assert_eq!(copy.level_exp, source.level_exp);
}

#[test]
fn test_fainted_members_cannot_battle() {
    let session = super::session();
    let mut rng = BattleRng::new(13);
    let mut trainer = Trainer::new("Green");
    trainer
        .add(Pokemon::new(&session, 25, 5, Side::Player, &mut rng).unwrap())
        .unwrap();
    trainer
        .add(Pokemon::new(&session, 7, 5, Side::Player, &mut rng).unwrap())
        .unwrap();

    trainer.get_mut(0).unwrap().hp = 0;
    let err = trainer.check_can_battle(0).unwrap_err();
    assert_eq!(err.to_string(), "PIKACHU has no energy left to battle!");
    assert!(trainer.check_can_battle(1).is_ok());
    assert_eq!(trainer.check_can_battle(4), Err(PartyError::EmptySlot(4)));
    assert_eq!(trainer.first_able(), Some(1));
}
