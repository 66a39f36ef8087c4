// src/save/src/roster.rs

use anyhow::anyhow;
use bincode::{Decode, Encode};
use error::{ArenaError, RecordKind, Result};
use hero::{Character, NewCharacter};
use items::{Skill, default_skills};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current save format version
pub const SAVE_VERSION: u32 = 1;

/// Everything the store keeps: characters, the skill catalog and id counters
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct RosterData {
    pub version: u32,
    pub characters: BTreeMap<u32, Character>,
    pub skills: Vec<Skill>,
    pub next_character_id: u32,
    pub next_weapon_id: u32,
}

impl Default for RosterData {
    fn default() -> Self {
        Self {
            version: SAVE_VERSION,
            characters: BTreeMap::new(),
            skills: default_skills(),
            next_character_id: 1,
            next_weapon_id: 1,
        }
    }
}

impl RosterData {
    pub fn character(&self, id: u32) -> Result<&Character> {
        self.characters
            .get(&id)
            .ok_or_else(|| ArenaError::not_found(RecordKind::Character, id))
    }

    pub fn character_mut(&mut self, id: u32) -> Result<&mut Character> {
        self.characters
            .get_mut(&id)
            .ok_or_else(|| ArenaError::not_found(RecordKind::Character, id))
    }

    pub fn skill(&self, id: u32) -> Result<&Skill> {
        self.skills
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| ArenaError::not_found(RecordKind::Skill, id))
    }

    /// Characters in request order; unknown and repeated ids are skipped
    pub fn roster(&self, ids: &[u32]) -> Vec<Character> {
        let mut seen = Vec::with_capacity(ids.len());
        ids.iter()
            .filter(|id| {
                if seen.contains(*id) {
                    false
                } else {
                    seen.push(**id);
                    true
                }
            })
            .filter_map(|id| self.characters.get(id).cloned())
            .collect()
    }

    pub fn insert(&mut self, new: NewCharacter) -> Character {
        let character = Character::new(self.next_character_id, new);
        self.next_character_id += 1;
        self.characters.insert(character.id, character.clone());
        character
    }

    /// Replace a stored character wholesale
    pub fn replace(&mut self, character: Character) -> Result<()> {
        let slot = self.character_mut(character.id)?;
        *slot = character;
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> Result<Character> {
        self.characters
            .remove(&id)
            .ok_or_else(|| ArenaError::not_found(RecordKind::Character, id))
    }

    pub fn allocate_weapon_id(&mut self) -> u32 {
        let id = self.next_weapon_id;
        self.next_weapon_id += 1;
        id
    }

    /// Check id counters against stored records
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.version > SAVE_VERSION {
            return Err(anyhow!(
                "Save version {} is newer than supported version {}",
                self.version,
                SAVE_VERSION
            ));
        }

        for (key, character) in &self.characters {
            if *key != character.id {
                return Err(anyhow!(
                    "Character stored under {} claims id {}",
                    key,
                    character.id
                ));
            }
            if character.id >= self.next_character_id {
                return Err(anyhow!("Character id {} was never allocated", character.id));
            }
            if let Some(weapon) = &character.weapon {
                if weapon.id >= self.next_weapon_id {
                    return Err(anyhow!("Weapon id {} was never allocated", weapon.id));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> NewCharacter {
        NewCharacter {
            name: name.to_string(),
            ..NewCharacter::default()
        }
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut data = RosterData::default();
        let first = data.insert(named("Frodo"));
        let second = data.insert(named("Sam"));
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(data.next_character_id, 3);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn roster_keeps_request_order_and_skips_unknown_ids() {
        let mut data = RosterData::default();
        data.insert(named("Frodo"));
        data.insert(named("Sam"));
        data.insert(named("Pippin"));

        let names: Vec<String> = data
            .roster(&[3, 99, 1, 3])
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Pippin".to_string(), "Frodo".to_string()]);
    }

    #[test]
    fn missing_records_are_not_found() {
        let mut data = RosterData::default();
        assert!(data.character(1).unwrap_err().is_not_found());
        assert!(data.skill(77).unwrap_err().is_not_found());
        assert!(data.remove(5).unwrap_err().is_not_found());
        assert_eq!(data.skill(1).map(|s| s.name.as_str()).ok(), Some("Fireball"));
    }

    #[test]
    fn validate_rejects_unallocated_ids() {
        let mut data = RosterData::default();
        let mut rogue = data.insert(named("Rogue"));
        rogue.id = 10;
        data.characters.insert(10, rogue);
        assert!(data.validate().is_err());
    }
}
