// src/hero/src/lib.rs
//! Persisted character records and their conversion to fight snapshots

pub mod class;
mod character;

pub use self::{
    class::Class,
    character::{Character, NewCharacter},
};
