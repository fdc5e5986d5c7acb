use anyhow::{Context, Result};
use log::info;

use pokemon_battle_core::{
    Pokemon, Side,
    config::{Config, DEFAULT_CONFIG_PATH},
    fight::{LogPresenter, duel},
    session::Session,
};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load_or_default(&path)?;
    let (session, mut rng) = Session::from_config(&config)?;

    let battle = &config.battle;
    let mut player = Pokemon::new(
        &session,
        battle.player_species,
        battle.player_level,
        Side::Player,
        &mut rng,
    )
    .context("Failed to create player Pokemon")?;
    let mut enemy = Pokemon::new(
        &session,
        battle.enemy_species,
        battle.enemy_level,
        Side::Enemy,
        &mut rng,
    )
    .context("Failed to create enemy Pokemon")?;

    info!(
        "{} (lv {}) vs wild {} (lv {})",
        player.name, player.level, enemy.name, enemy.level
    );

    let log = duel::process_fight(
        &session,
        &mut player,
        &mut enemy,
        battle.max_turns,
        &mut rng,
        &LogPresenter,
    )
    .await?;

    println!("{}", serde_json::to_string_pretty(&log)?);
    Ok(())
}
