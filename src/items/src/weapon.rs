//src/items/src/weapon.rs
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A weapon equipped by exactly one character
#[derive(PartialEq, Eq, Debug, Clone, Encode, Decode, Serialize, Deserialize)]
pub struct Weapon {
    pub id: u32,
    pub name: String,
    /// Base damage before the strength roll
    pub damage: i32,
}

impl Weapon {
    pub fn new(id: u32, name: impl Into<String>, damage: i32) -> Self {
        Self {
            id,
            name: name.into(),
            damage,
        }
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} dmg)", self.name, self.damage)
    }
}
