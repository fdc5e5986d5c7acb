mod config;
mod exp;
mod moveset;
mod trainer;

use crate::{
    fight::ai::AiType,
    modifier::ModifierRegistry,
    pokemon::{dex::Dex, identity::SessionSalts},
    session::Session,
};

/// A session over the built-in dex with zero salts and no modifiers
fn session() -> Session {
    Session::new(
        Dex::builtin().unwrap(),
        ModifierRegistry::new(),
        SessionSalts::default(),
        AiType::Smart,
    )
}

/// Test if the built-in dex loads and is complete
#[test]
fn test_builtin_dex() {
    use crate::pokemon::moves::STRUGGLE;

    let dex = Dex::builtin().unwrap();
    assert_eq!(dex.species(1).unwrap().name, "Bulbasaur");
    assert!(dex.move_data(STRUGGLE).is_ok());
    assert!(dex.level_moves(132).is_none());
    assert!(dex.species(9999).is_err());
}

#[test]
fn test_dex_rejects_zero_base_stat() {
    let text = r#"
        [[species]]
        id = 1
        name = "Broken"
        primary_type = "Normal"
        base_stats = [10, 10, 0, 10, 10, 10]
        growth_rate = "Fast"
        base_exp = 10

        [[moves]]
        id = 165
        name = "Struggle"
        type = "Normal"
        category = "Physical"
        power = 50
        pp = 1
    "#;
    assert!(Dex::from_toml_str(text).is_err());
}

#[test]
fn test_dex_requires_struggle() {
    let text = r#"
        species = []

        [[moves]]
        id = 33
        name = "Tackle"
        type = "Normal"
        category = "Physical"
        power = 40
        pp = 35
    "#;
    assert!(Dex::from_toml_str(text).is_err());
}
