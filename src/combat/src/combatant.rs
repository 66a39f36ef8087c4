// src/combat/src/combatant.rs

use bincode::{Decode, Encode};
use items::{Skill, Weapon};
use serde::{Deserialize, Serialize};

use crate::MAX_HIT_POINTS;

/// Career counters carried across fights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct CareerRecord {
    pub fights: u32,
    pub victories: u32,
    pub defeats: u32,
}

impl CareerRecord {
    pub fn new(fights: u32, victories: u32, defeats: u32) -> Self {
        Self {
            fights,
            victories,
            defeats,
        }
    }
}

/// Mutable snapshot of a character for the duration of one fight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: u32,
    pub name: String,
    /// May drop below zero before the defeat check
    pub hit_points: i32,
    pub strength: i32,
    pub intelligence: i32,
    pub defense: i32,
    pub weapon: Option<Weapon>,
    pub skills: Vec<Skill>,
    pub record: CareerRecord,
}

impl Combatant {
    /// Fresh combatant with full hit points and the default attributes
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hit_points: MAX_HIT_POINTS,
            strength: 10,
            intelligence: 10,
            defense: 10,
            weapon: None,
            skills: Vec::new(),
            record: CareerRecord::default(),
        }
    }

    pub fn with_attributes(mut self, strength: i32, intelligence: i32, defense: i32) -> Self {
        self.strength = strength;
        self.intelligence = intelligence;
        self.defense = defense;
        self
    }

    pub fn with_hit_points(mut self, hit_points: i32) -> Self {
        self.hit_points = hit_points;
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn with_record(mut self, record: CareerRecord) -> Self {
        self.record = record;
        self
    }

    pub fn is_defeated(&self) -> bool {
        self.hit_points <= 0
    }

    pub fn can_use_weapon(&self) -> bool {
        self.weapon.is_some()
    }

    pub fn can_use_skill(&self) -> bool {
        !self.skills.is_empty()
    }

    /// Known skill with the given catalog id
    pub fn known_skill(&self, skill_id: u32) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == skill_id)
    }

    /// Hit points as shown to players
    pub fn display_hit_points(&self) -> i32 {
        self.hit_points.max(0)
    }

    /// Subtract `damage` if positive. Returns whether hit points changed.
    pub fn take_damage(&mut self, damage: i32) -> bool {
        if damage > 0 {
            self.hit_points = self.hit_points.saturating_sub(damage);
            true
        } else {
            false
        }
    }

    pub fn restore(&mut self) {
        self.hit_points = MAX_HIT_POINTS;
    }
}
