use super::{
    FightEvent, FightLog, Presenter,
    ai::{self, MoveChoice},
    resolution,
};
use crate::{
    error::DexError,
    pokemon::{Pokemon, stats::Stat},
    rng::BattleRng,
    session::Session,
};

/// One Pokemon picks a move, spends its PP and uses it on the other
async fn take_action<P: Presenter + ?Sized>(
    session: &Session,
    attacker: &mut Pokemon,
    defender: &mut Pokemon,
    rng: &mut BattleRng,
    presenter: &P,
    log: &mut FightLog,
) -> Result<(), DexError> {
    let choice = ai::choose_move(session, attacker, defender, session.ai, rng)?;
    let pokemon_move = choice.pokemon_move(attacker);
    if let MoveChoice::Slot(index) = choice {
        attacker.moveset[index].use_pp();
    }

    let resolution = resolution::resolve(session, attacker, defender, &pokemon_move, rng)?;
    log.log.extend(resolution.events.iter().cloned());
    resolution.present(presenter).await;
    Ok(())
}

/// Rewards the winner of a duel with experience and a win
async fn finish<P: Presenter + ?Sized>(
    session: &Session,
    winner: &mut Pokemon,
    loser: &Pokemon,
    presenter: &P,
    log: &mut FightLog,
) -> Result<(), DexError> {
    let amount = loser.exp_value(session, winner.level)?;
    let gained = winner.add_exp(amount, session)?;
    winner.win_count += 1;

    let mut events = vec![FightEvent::GainedExp {
        pokemon: winner.name.clone(),
        amount,
    }];
    if gained > 0 {
        events.push(FightEvent::LevelUp {
            pokemon: winner.name.clone(),
            level: winner.level,
        });
    }
    events.push(FightEvent::PokemonWinner {
        pokemon: winner.name.clone(),
        hp_left: winner.hp,
    });

    presenter.present(&events).await;
    log.log.extend(events);
    Ok(())
}

/// Processes a fight between two Pokemon until one faints or `max_turns` pass
///
/// The faster Pokemon moves first each turn, the challenger wins speed ties.
/// Both sides pick moves with the session's AI.
pub async fn process_fight<P: Presenter + ?Sized>(
    session: &Session,
    contender: &mut Pokemon,
    challenger: &mut Pokemon,
    max_turns: u32,
    rng: &mut BattleRng,
    presenter: &P,
) -> Result<FightLog, DexError> {
    let mut log = FightLog {
        contender_name: contender.name.clone(),
        challenger_name: challenger.name.clone(),
        log: vec![],
    };

    let contender_first = contender.stats[Stat::Spd] > challenger.stats[Stat::Spd];
    let (first, second) = if contender_first {
        (contender, challenger)
    } else {
        (challenger, contender)
    };

    for turn in 1..=max_turns {
        debug!("Turn {}: {} vs {}", turn, first.name, second.name);

        take_action(session, first, second, rng, presenter, &mut log).await?;
        if second.is_fainted() {
            finish(session, first, second, presenter, &mut log).await?;
            return Ok(log);
        }

        take_action(session, second, first, rng, presenter, &mut log).await?;
        if first.is_fainted() {
            finish(session, second, first, presenter, &mut log).await?;
            return Ok(log);
        }

        for pokemon_move in first.moveset.iter_mut().chain(second.moveset.iter_mut()) {
            pokemon_move.tick_disable();
        }
    }

    info!("{} and {} fought to a draw", first.name, second.name);
    log.log.push(FightEvent::Draw { turns: max_turns });
    Ok(log)
}
