// src/save/src/lib.rs
//! Character persistence
//!
//! Stores hand out cloned records and accept changes through `transact`, which
//! applies a change to a copy of the data and only keeps it once it has been
//! made durable. A failed change leaves the store exactly as it was.

mod file;
mod memory;
mod roster;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use roster::{RosterData, SAVE_VERSION};

use error::Result;
use hero::{Character, NewCharacter};
use items::Skill;

/// Persistence collaborator for characters and the skill catalog
pub trait CharacterStore {
    /// Current committed data
    fn data(&self) -> &RosterData;

    /// Apply `change` to a copy of the data and commit it, all or nothing
    fn transact<T, F>(&mut self, change: F) -> Result<T>
    where
        F: FnOnce(&mut RosterData) -> Result<T>;

    fn character(&self, id: u32) -> Result<Character> {
        self.data().character(id).cloned()
    }

    /// All characters in id order
    fn characters(&self) -> Vec<Character> {
        self.data().characters.values().cloned().collect()
    }

    /// Resolve ids to characters in request order, omitting unknown ids
    fn load_roster(&self, ids: &[u32]) -> Vec<Character> {
        self.data().roster(ids)
    }

    fn skill(&self, id: u32) -> Result<Skill> {
        self.data().skill(id).cloned()
    }

    fn skills(&self) -> &[Skill] {
        &self.data().skills
    }

    fn insert_character(&mut self, new: NewCharacter) -> Result<Character> {
        self.transact(|data| Ok(data.insert(new)))
    }

    fn update_character(&mut self, character: Character) -> Result<()> {
        self.transact(|data| data.replace(character))
    }

    fn remove_character(&mut self, id: u32) -> Result<Character> {
        self.transact(|data| data.remove(id))
    }

    /// Store every given character together, or none of them
    fn commit(&mut self, characters: &[Character]) -> Result<()> {
        self.transact(|data| {
            for character in characters {
                data.replace(character.clone())?;
            }
            Ok(())
        })
    }
}

impl<S: CharacterStore> CharacterStore for &mut S {
    fn data(&self) -> &RosterData {
        (**self).data()
    }

    fn transact<T, F>(&mut self, change: F) -> Result<T>
    where
        F: FnOnce(&mut RosterData) -> Result<T>,
    {
        (**self).transact(change)
    }
}
