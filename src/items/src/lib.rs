//src/items/src/lib.rs
//! Equipment and abilities a character brings into the arena

pub mod skill;
pub mod weapon;

pub use crate::skill::{Skill, default_skills};
pub use crate::weapon::Weapon;
