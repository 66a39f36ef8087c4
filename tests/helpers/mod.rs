#![allow(dead_code)]

use hero::{Class, NewCharacter};
use rpg_arena::CharacterService;
use rpg_arena::dto::{AddCharacterSkill, CharacterDto, NewWeapon};
use save::MemoryStore;

pub fn recruit(name: &str, class: Class) -> NewCharacter {
    NewCharacter {
        name: name.to_string(),
        class,
        ..NewCharacter::default()
    }
}

/// Create a character and return its stored view
pub fn create(service: &mut CharacterService<MemoryStore>, new: NewCharacter) -> CharacterDto {
    let name = new.name.clone();
    let all = service
        .add_character(new)
        .into_result()
        .expect("character created");
    all.into_iter()
        .rev()
        .find(|c| c.name == name)
        .expect("new character listed")
}

pub fn armed(
    service: &mut CharacterService<MemoryStore>,
    name: &str,
    weapon: &str,
    damage: i32,
) -> CharacterDto {
    let character = create(service, recruit(name, Class::Knight));
    service
        .add_weapon(NewWeapon {
            character_id: character.id,
            name: weapon.to_string(),
            damage,
        })
        .into_result()
        .expect("weapon equipped")
}

pub fn caster(
    service: &mut CharacterService<MemoryStore>,
    name: &str,
    skill_id: u32,
) -> CharacterDto {
    let character = create(service, recruit(name, Class::Mage));
    service
        .add_character_skill(AddCharacterSkill {
            character_id: character.id,
            skill_id,
        })
        .into_result()
        .expect("skill learned")
}
