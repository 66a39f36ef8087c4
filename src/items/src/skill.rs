//src/items/src/skill.rs
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A skill from the shared catalog; characters reference it by id
#[derive(PartialEq, Eq, Debug, Clone, Encode, Decode, Serialize, Deserialize)]
pub struct Skill {
    pub id: u32,
    pub name: String,
    /// Base damage before the intelligence roll
    pub damage: i32,
}

impl Skill {
    pub fn new(id: u32, name: impl Into<String>, damage: i32) -> Self {
        Self {
            id,
            name: name.into(),
            damage,
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} dmg)", self.name, self.damage)
    }
}

/// Catalog every fresh roster starts with
pub fn default_skills() -> Vec<Skill> {
    vec![
        Skill::new(1, "Fireball", 30),
        Skill::new(2, "Frenzy", 20),
        Skill::new(3, "Blizzard", 50),
    ]
}
