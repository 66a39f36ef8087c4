// src/hero/src/character.rs

use bincode::{Decode, Encode};
use combat::{CareerRecord, Combatant, MAX_HIT_POINTS};
use items::{Skill, Weapon};
use serde::{Deserialize, Serialize};

use crate::Class;

/// Attributes for a character that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewCharacter {
    pub name: String,
    pub class: Class,
    pub hit_points: i32,
    pub strength: i32,
    pub defense: i32,
    pub intelligence: i32,
}

impl Default for NewCharacter {
    fn default() -> Self {
        Self {
            name: "Frodo".to_string(),
            class: Class::Knight,
            hit_points: MAX_HIT_POINTS,
            strength: 10,
            defense: 10,
            intelligence: 10,
        }
    }
}

/// Character as kept by the store
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub class: Class,
    pub hit_points: i32,
    pub strength: i32,
    pub defense: i32,
    pub intelligence: i32,
    pub weapon: Option<Weapon>,
    /// Ids into the shared skill catalog
    pub skill_ids: Vec<u32>,
    pub record: CareerRecord,
}

impl Character {
    pub fn new(id: u32, new: NewCharacter) -> Self {
        Self {
            id,
            name: new.name,
            class: new.class,
            hit_points: new.hit_points,
            strength: new.strength,
            defense: new.defense,
            intelligence: new.intelligence,
            weapon: None,
            skill_ids: Vec::new(),
            record: CareerRecord::default(),
        }
    }

    pub fn knows_skill(&self, skill_id: u32) -> bool {
        self.skill_ids.contains(&skill_id)
    }

    /// Returns false if the skill was already known
    pub fn learn_skill(&mut self, skill_id: u32) -> bool {
        if self.knows_skill(skill_id) {
            return false;
        }
        self.skill_ids.push(skill_id);
        true
    }

    /// Resolve the character's skills against `catalog`; ids missing from the
    /// catalog are skipped
    pub fn skills<'a>(&'a self, catalog: &'a [Skill]) -> impl Iterator<Item = &'a Skill> + 'a {
        self.skill_ids
            .iter()
            .filter_map(move |id| catalog.iter().find(|s| s.id == *id))
    }

    /// Fight snapshot with weapon and skills populated.
    ///
    /// The snapshot starts from the stored hit points rather than
    /// `MAX_HIT_POINTS`, so damage taken in single attacks carries into the
    /// next fight. Every fight restores the maximum when it ends.
    pub fn to_combatant(&self, catalog: &[Skill]) -> Combatant {
        Combatant {
            id: self.id,
            name: self.name.clone(),
            hit_points: self.hit_points,
            strength: self.strength,
            intelligence: self.intelligence,
            defense: self.defense,
            weapon: self.weapon.clone(),
            skills: self.skills(catalog).cloned().collect(),
            record: self.record,
        }
    }

    /// Write the mutable parts of a snapshot back onto the record
    pub fn absorb(&mut self, combatant: &Combatant) {
        debug_assert_eq!(self.id, combatant.id);
        self.hit_points = combatant.hit_points;
        self.record = combatant.record;
    }
}
