//! Request and response shapes exchanged with callers

use hero::{Character, Class};
use items::{Skill, Weapon};
use serde::{Deserialize, Serialize};

pub use combat::HighScore as HighScoreDto;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightRequest {
    pub character_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightResultDto {
    pub log: Vec<String>,
    pub winner: String,
    pub loser: String,
    pub turns: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponAttackRequest {
    pub attacker_id: u32,
    pub opponent_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAttackRequest {
    pub attacker_id: u32,
    pub opponent_id: u32,
    pub skill_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResultDto {
    pub attacker: String,
    pub opponent: String,
    pub attacker_hp: i32,
    pub opponent_hp: i32,
    pub damage: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCharacter {
    pub id: u32,
    pub name: String,
    pub class: Class,
    pub hit_points: i32,
    pub strength: i32,
    pub defense: i32,
    pub intelligence: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCharacterSkill {
    pub character_id: u32,
    pub skill_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWeapon {
    pub character_id: u32,
    pub name: String,
    pub damage: i32,
}

/// Character as shown to callers, with skills resolved from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: u32,
    pub name: String,
    pub class: Class,
    pub hit_points: i32,
    pub strength: i32,
    pub defense: i32,
    pub intelligence: i32,
    pub weapon: Option<Weapon>,
    pub skills: Vec<Skill>,
    pub fights: u32,
    pub victories: u32,
    pub defeats: u32,
}

impl CharacterDto {
    pub fn new(character: &Character, catalog: &[Skill]) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            class: character.class,
            hit_points: character.hit_points,
            strength: character.strength,
            defense: character.defense,
            intelligence: character.intelligence,
            weapon: character.weapon.clone(),
            skills: character.skills(catalog).cloned().collect(),
            fights: character.record.fights,
            victories: character.record.victories,
            defeats: character.record.defeats,
        }
    }
}
