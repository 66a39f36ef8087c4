//! Character management on top of a [`CharacterStore`]

use error::{ArenaError, Result, ServiceResponse};
use hero::{Character, NewCharacter};
use items::{Skill, Weapon};
use save::CharacterStore;
use tracing::info;

use crate::dto::{AddCharacterSkill, CharacterDto, NewWeapon, UpdateCharacter};
use crate::respond;

pub struct CharacterService<S> {
    store: S,
}

impl<S: CharacterStore> CharacterService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Store a new character and return the full list
    pub fn add_character(&mut self, new: NewCharacter) -> ServiceResponse<Vec<CharacterDto>> {
        let result = validate(&new.name, new.hit_points)
            .and_then(|_| self.store.insert_character(new))
            .map(|character| {
                info!(id = character.id, name = %character.name, "character created");
                self.all()
            });
        respond("add_character", result)
    }

    pub fn get_all_characters(&self) -> ServiceResponse<Vec<CharacterDto>> {
        ServiceResponse::ok(self.all())
    }

    pub fn get_character(&self, id: u32) -> ServiceResponse<CharacterDto> {
        let result = self.store.character(id).map(|c| self.dto(&c));
        respond("get_character", result)
    }

    pub fn update_character(&mut self, update: UpdateCharacter) -> ServiceResponse<CharacterDto> {
        let result = self.try_update(update);
        respond("update_character", result)
    }

    /// Remove a character and return who is left
    pub fn delete_character(&mut self, id: u32) -> ServiceResponse<Vec<CharacterDto>> {
        let result = self.store.remove_character(id).map(|removed| {
            info!(id, name = %removed.name, "character deleted");
            self.all()
        });
        respond("delete_character", result)
    }

    pub fn add_character_skill(&mut self, request: AddCharacterSkill) -> ServiceResponse<CharacterDto> {
        let result = self.try_add_skill(request);
        respond("add_character_skill", result)
    }

    pub fn add_weapon(&mut self, request: NewWeapon) -> ServiceResponse<CharacterDto> {
        let result = self.try_add_weapon(request);
        respond("add_weapon", result)
    }

    pub fn list_skills(&self) -> ServiceResponse<Vec<Skill>> {
        ServiceResponse::ok(self.store.skills().to_vec())
    }

    fn try_update(&mut self, update: UpdateCharacter) -> Result<CharacterDto> {
        validate(&update.name, update.hit_points)?;
        let mut character = self.store.character(update.id)?;
        character.name = update.name;
        character.class = update.class;
        character.hit_points = update.hit_points;
        character.strength = update.strength;
        character.defense = update.defense;
        character.intelligence = update.intelligence;

        self.store.update_character(character.clone())?;
        info!(id = character.id, "character updated");
        Ok(self.dto(&character))
    }

    fn try_add_skill(&mut self, request: AddCharacterSkill) -> Result<CharacterDto> {
        let mut character = self.store.character(request.character_id)?;
        let skill = self.store.skill(request.skill_id)?;

        if character.learn_skill(skill.id) {
            self.store.update_character(character.clone())?;
            info!(id = character.id, skill = %skill.name, "skill learned");
        }
        Ok(self.dto(&character))
    }

    fn try_add_weapon(&mut self, request: NewWeapon) -> Result<CharacterDto> {
        let character_id = request.character_id;
        let character = self.store.transact(|data| {
            let character = data.character(character_id)?;
            if let Some(weapon) = &character.weapon {
                return Err(ArenaError::invalid_action(format!(
                    "{} already wields {}",
                    character.name, weapon.name
                )));
            }

            let weapon = Weapon::new(data.allocate_weapon_id(), request.name, request.damage);
            let character = data.character_mut(character_id)?;
            character.weapon = Some(weapon);
            Ok(character.clone())
        })?;
        info!(id = character.id, "weapon equipped");
        Ok(self.dto(&character))
    }

    fn all(&self) -> Vec<CharacterDto> {
        self.store
            .characters()
            .iter()
            .map(|c| self.dto(c))
            .collect()
    }

    fn dto(&self, character: &Character) -> CharacterDto {
        CharacterDto::new(character, self.store.skills())
    }
}

fn validate(name: &str, hit_points: i32) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ArenaError::invalid_action("Character name cannot be empty"));
    }
    if hit_points <= 0 {
        return Err(ArenaError::invalid_action("Hit points must be positive"));
    }
    Ok(())
}
