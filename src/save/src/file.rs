// src/save/src/file.rs

use anyhow::Context;
use bincode::config;
use error::Result;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::{CharacterStore, RosterData};

/// Store backed by a single bincode file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: RosterData,
}

impl FileStore {
    /// Load the save at `path`, or start from an empty roster if there is none
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let data = if path.exists() {
            let data = Self::read(&path)?;
            info!(path = %path.display(), characters = data.characters.len(), "loaded roster");
            data
        } else {
            info!(path = %path.display(), "no save file, starting a new roster");
            RosterData::default()
        };

        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path) -> anyhow::Result<RosterData> {
        let mut file =
            fs::File::open(path).context(format!("Save file not found: {:?}", path))?;

        let data: RosterData = bincode::decode_from_std_read(&mut file, config::standard())
            .context("Failed to deserialize roster")?;
        data.validate().context("Roster validation failed")?;

        Ok(data)
    }

    /// Write through a temporary file and rename it over the save
    fn write(&self, data: &RosterData) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create save directory")?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file =
            fs::File::create(&temp_path).context("Failed to create temporary save file")?;

        bincode::encode_into_std_write(data, &mut file, config::standard())
            .context("Failed to serialize roster")?;

        file.flush().context("Failed to flush roster")?;
        file.sync_all().context("Failed to sync roster")?;

        fs::rename(&temp_path, &self.path).context("Failed to commit save file")?;

        Ok(())
    }
}

impl CharacterStore for FileStore {
    fn data(&self) -> &RosterData {
        &self.data
    }

    fn transact<T, F>(&mut self, change: F) -> Result<T>
    where
        F: FnOnce(&mut RosterData) -> Result<T>,
    {
        let mut staged = self.data.clone();
        let value = change(&mut staged)?;
        self.write(&staged)?;
        self.data = staged;
        debug!(path = %self.path.display(), "roster committed");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::CareerRecord;
    use hero::NewCharacter;
    use items::Weapon;
    use tempfile::tempdir;

    #[test]
    fn changes_survive_reopening() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("arena.sav");

        let mut store = FileStore::open(&path).unwrap();
        let mut frodo = store.insert_character(NewCharacter::default()).unwrap();
        let weapon_id = store.transact(|d| Ok(d.allocate_weapon_id())).unwrap();
        frodo.weapon = Some(Weapon::new(weapon_id, "Sting", 12));
        frodo.learn_skill(1);
        frodo.record = CareerRecord::new(2, 1, 1);
        store.update_character(frodo.clone()).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.character(frodo.id).unwrap(), frodo);
        assert_eq!(reopened.data().next_weapon_id, 2);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn missing_file_starts_empty_and_is_not_created_until_a_change() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("arena.sav");

        let mut store = FileStore::open(&path).unwrap();
        assert!(store.characters().is_empty());
        assert_eq!(store.skills().len(), 3);
        assert!(!path.exists());

        store.insert_character(NewCharacter::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn failed_write_keeps_memory_unchanged() {
        let temp_dir = tempdir().unwrap();
        // a directory where the save file should be makes the rename fail
        let path = temp_dir.path().join("arena.sav");
        fs::create_dir_all(path.join("occupied")).unwrap();

        let mut store = FileStore {
            path: path.clone(),
            data: RosterData::default(),
        };
        let err = store.insert_character(NewCharacter::default()).unwrap_err();

        assert!(matches!(err, error::ArenaError::Storage(_)));
        assert!(store.characters().is_empty());
        assert_eq!(store.data().next_character_id, 1);
    }

    #[test]
    fn corrupted_file_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("arena.sav");
        fs::write(&path, b"definitely not a roster").unwrap();

        assert!(FileStore::open(&path).is_err());
    }
}
