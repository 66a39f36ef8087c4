// src/save/src/memory.rs

use error::Result;

use crate::{CharacterStore, RosterData};

/// Store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: RosterData,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_data(data: RosterData) -> Self {
        Self { data }
    }

    pub fn into_data(self) -> RosterData {
        self.data
    }
}

impl CharacterStore for MemoryStore {
    fn data(&self) -> &RosterData {
        &self.data
    }

    fn transact<T, F>(&mut self, change: F) -> Result<T>
    where
        F: FnOnce(&mut RosterData) -> Result<T>,
    {
        let mut staged = self.data.clone();
        let value = change(&mut staged)?;
        self.data = staged;
        Ok(value)
    }
}
