use crate::{
    config::Config,
    fight::ai::AiType,
    modifier::{ModifierConfig, ModifierRegistry, ShinyCharm, StatBooster},
    pokemon::stats::{Stat, StatBlock},
    session::Session,
};

const SAMPLE: &str = r#"
seed = 7
trainer_id = 100
ai = "Smart"

[[modifiers]]
kind = "ShinyCharm"
stacks = 2

[[modifiers]]
kind = "StatBooster"
pokemon_id = 55
stat = "spd"
stacks = 1

[battle]
player_species = 25
player_level = 10
enemy_species = 74
enemy_level = 9
max_turns = 30
"#;

#[test]
fn test_parse_config() {
    let config = Config::from_toml_str(SAMPLE).unwrap();
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.trainer_id, Some(100));
    assert_eq!(config.secret_id, None);
    assert_eq!(config.ai, AiType::Smart);
    assert_eq!(config.battle.enemy_species, 74);
    assert_eq!(
        config.modifiers,
        vec![
            ModifierConfig::ShinyCharm(ShinyCharm { stacks: 2 }),
            ModifierConfig::StatBooster(StatBooster {
                pokemon_id: 55,
                stat: Stat::Spd,
                stacks: 1,
            }),
        ]
    );
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.ai, AiType::SmartRandom);
}

#[test]
fn test_registry_from_config() {
    let config = Config::from_toml_str(SAMPLE).unwrap();
    let registry = ModifierRegistry::from_config(&config.modifiers);
    assert!(!registry.is_empty());
    assert_eq!(registry.apply_shiny_boosters(32), 128);

    let mut base = StatBlock([50; 6]);
    registry.apply_base_stat_boosters(55, &mut base);
    assert_eq!(base[Stat::Spd], 60);
    assert_eq!(base[Stat::Atk], 50);
}

#[test]
fn test_session_from_config_is_seeded() {
    let config = Config::from_toml_str(SAMPLE).unwrap();
    let (a, rng_a) = Session::from_config(&config).unwrap();
    let (b, rng_b) = Session::from_config(&config).unwrap();

    assert_eq!(a.salts.trainer_id, 100);
    // the secret id comes from the seeded source
    assert_eq!(a.salts, b.salts);
    assert_eq!(rng_a.seed(), 7);
    assert_eq!(rng_b.seed(), 7);
    assert_eq!(a.ai, AiType::Smart);
}

#[test]
fn test_missing_config_file() {
    let config = Config::load_or_default("does/not/exist.toml").unwrap();
    assert_eq!(config, Config::default());
    assert!(Config::load("does/not/exist.toml").is_err());
}
