use serde::{Deserialize, Serialize};

use crate::{
    error::{CaptureError, PartyError},
    pokemon::{Pokemon, Side},
    session::Session,
};

/// Most Pokemon a trainer can carry
pub const MAX_PARTY_SIZE: usize = 6;

/// Represents a Pokémon trainer with a name and a team of Pokémon
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Trainer {
    /// The name of the trainer
    pub name: String,
    /// The team of Pokemon owned by the trainer
    team: Vec<Pokemon>,
}

impl Trainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: vec![],
        }
    }

    pub fn team(&self) -> &[Pokemon] {
        &self.team
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Pokemon> {
        self.team.get_mut(slot)
    }

    pub fn is_full(&self) -> bool {
        self.team.len() >= MAX_PARTY_SIZE
    }

    /// Adds a Pokemon to the team under the player's control
    pub fn add(&mut self, mut pokemon: Pokemon) -> Result<(), PartyError> {
        if self.is_full() {
            return Err(PartyError::Full);
        }
        pokemon.side = Side::Player;
        self.team.push(pokemon);
        Ok(())
    }

    /// Takes a defeated or caught wild Pokemon into the team
    ///
    /// The copy keeps the wild Pokemon's identity and state. The wild
    /// Pokemon is left with 0 hp so it leaves the field, even when the
    /// team has no room for it.
    pub fn capture(&mut self, session: &Session, wild: &mut Pokemon) -> Result<(), CaptureError> {
        if self.is_full() {
            warn!("{} has no room for {}", self.name, wild.name);
            wild.hp = 0;
            return Err(PartyError::Full.into());
        }
        let caught = Pokemon::from_source(session, wild, wild.level, Side::Player)?;
        info!("{} caught {} (id {})", self.name, caught.name, caught.id);
        self.team.push(caught);
        wild.hp = 0;
        Ok(())
    }

    /// Checks that the Pokemon in `slot` can be sent into battle
    pub fn check_can_battle(&self, slot: usize) -> Result<&Pokemon, PartyError> {
        let pokemon = self.team.get(slot).ok_or(PartyError::EmptySlot(slot))?;
        if pokemon.is_fainted() {
            return Err(PartyError::Fainted(pokemon.name.clone()));
        }
        Ok(pokemon)
    }

    /// The first team member still able to battle
    pub fn first_able(&self) -> Option<usize> {
        self.team.iter().position(|p| !p.is_fainted())
    }
}
