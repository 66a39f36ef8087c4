//! Command line front end for the arena
//!
//! Every command prints its service response as JSON on stdout and exits
//! non-zero when the operation failed.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use combat::ArenaRng;
use error::ServiceResponse;
use hero::{Class, NewCharacter};
use rpg_arena::dto::{
    AddCharacterSkill, FightRequest, NewWeapon, SkillAttackRequest, UpdateCharacter,
    WeaponAttackRequest,
};
use rpg_arena::logging::init_tracing;
use rpg_arena::{ArenaConfig, CharacterService, FightService};
use save::FileStore;
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(name = "rpg-arena")]
#[command(about = "Turn-based character arena", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Save file, overrides config and ARENA_SAVE_PATH
    #[arg(long, global = true)]
    save: Option<PathBuf>,

    /// RNG seed for reproducible fights
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a character
    Create {
        name: String,
        #[arg(long, default_value_t = Class::Knight)]
        class: Class,
        #[arg(long, default_value_t = 100)]
        hit_points: i32,
        #[arg(long, default_value_t = 10)]
        strength: i32,
        #[arg(long, default_value_t = 10)]
        defense: i32,
        #[arg(long, default_value_t = 10)]
        intelligence: i32,
    },

    /// List all characters
    List,

    /// Show one character
    Show { id: u32 },

    /// Replace a character's name, class and attributes
    Update {
        id: u32,
        name: String,
        #[arg(long, default_value_t = Class::Knight)]
        class: Class,
        #[arg(long, default_value_t = 100)]
        hit_points: i32,
        #[arg(long, default_value_t = 10)]
        strength: i32,
        #[arg(long, default_value_t = 10)]
        defense: i32,
        #[arg(long, default_value_t = 10)]
        intelligence: i32,
    },

    /// Delete a character
    Delete { id: u32 },

    /// Teach a character a skill from the catalog
    Learn { character_id: u32, skill_id: u32 },

    /// Give an unarmed character a weapon
    Equip {
        character_id: u32,
        name: String,
        damage: i32,
    },

    /// List the skill catalog
    Skills,

    /// Fight until the first defeat
    Fight {
        #[arg(required = true)]
        character_ids: Vec<u32>,
    },

    /// One weapon attack between two characters
    WeaponAttack { attacker_id: u32, opponent_id: u32 },

    /// One skill attack between two characters
    SkillAttack {
        attacker_id: u32,
        opponent_id: u32,
        skill_id: u32,
    },

    /// Ranking of everyone who has fought
    Highscore,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = ArenaConfig::load(cli.config.as_deref())
        .context("Failed to load config")?
        .with_process_env()
        .context("Failed to read environment")?;
    if let Some(save) = cli.save {
        config.save_path = save;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    init_tracing(&config.log_filter);

    let store = FileStore::open(&config.save_path)
        .with_context(|| format!("Failed to open save {:?}", config.save_path))?;
    let rng = match config.seed {
        Some(seed) => ArenaRng::new(seed),
        None => ArenaRng::from_entropy(),
    };
    info!(seed = rng.seed(), save = %config.save_path.display(), "arena ready");

    let success = run(cli.command, &config, store, rng)?;
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run(command: Command, config: &ArenaConfig, store: FileStore, rng: ArenaRng) -> Result<bool> {
    let mut characters = CharacterService::new(store);

    match command {
        Command::Create {
            name,
            class,
            hit_points,
            strength,
            defense,
            intelligence,
        } => print(characters.add_character(NewCharacter {
            name,
            class,
            hit_points,
            strength,
            defense,
            intelligence,
        })),
        Command::List => print(characters.get_all_characters()),
        Command::Show { id } => print(characters.get_character(id)),
        Command::Update {
            id,
            name,
            class,
            hit_points,
            strength,
            defense,
            intelligence,
        } => print(characters.update_character(UpdateCharacter {
            id,
            name,
            class,
            hit_points,
            strength,
            defense,
            intelligence,
        })),
        Command::Delete { id } => print(characters.delete_character(id)),
        Command::Learn {
            character_id,
            skill_id,
        } => print(characters.add_character_skill(AddCharacterSkill {
            character_id,
            skill_id,
        })),
        Command::Equip {
            character_id,
            name,
            damage,
        } => print(characters.add_weapon(NewWeapon {
            character_id,
            name,
            damage,
        })),
        Command::Skills => print(characters.list_skills()),
        Command::Fight { character_ids } => {
            let mut fights = fight_service(characters.into_store(), rng, config);
            print(fights.fight(&FightRequest { character_ids }))
        }
        Command::WeaponAttack {
            attacker_id,
            opponent_id,
        } => {
            let mut fights = fight_service(characters.into_store(), rng, config);
            print(fights.weapon_attack(&WeaponAttackRequest {
                attacker_id,
                opponent_id,
            }))
        }
        Command::SkillAttack {
            attacker_id,
            opponent_id,
            skill_id,
        } => {
            let mut fights = fight_service(characters.into_store(), rng, config);
            print(fights.skill_attack(&SkillAttackRequest {
                attacker_id,
                opponent_id,
                skill_id,
            }))
        }
        Command::Highscore => print(fight_service(characters.into_store(), rng, config).high_score()),
    }
}

fn fight_service(
    store: FileStore,
    rng: ArenaRng,
    config: &ArenaConfig,
) -> FightService<FileStore, ArenaRng> {
    FightService::new(store, rng).with_options(config.fight_options())
}

fn print<T: Serialize>(response: ServiceResponse<T>) -> Result<bool> {
    let json = serde_json::to_string_pretty(&response).context("Failed to encode response")?;
    println!("{json}");
    Ok(response.success)
}
