// src/combat/src/lib.rs
//! Combat resolution for the arena: damage formulas, single attacks, the
//! round-robin fight loop and the high-score ranking.

pub mod combat_manager;
pub mod combatant;
pub mod ranking;
pub mod report;
pub mod rng;


pub use crate::combat_manager::{ActionKind, CombatManager, FightOptions};
pub use crate::combatant::{CareerRecord, Combatant};
pub use crate::ranking::{HighScore, rank_high_scores};
pub use crate::report::{BattleLog, FightResult};
pub use crate::rng::{ArenaRng, RandomSource, ScriptedRng};

use error::{ArenaError, Result};
use items::Skill;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hit points every combatant starts a fight with and returns to afterwards
pub const MAX_HIT_POINTS: i32 = 100;

/// Damage formulas and one-off attacks between two combatants
pub struct Combat;

impl Combat {
    /// `base + rand[0, attribute) - rand[0, defense)`, attribute rolled first.
    ///
    /// The result may be zero or negative; callers decide whether it lands.
    /// Saturates at the `i32` bounds.
    pub fn roll_damage<R: RandomSource + ?Sized>(
        base: i32,
        attribute: i32,
        defense: i32,
        rng: &mut R,
    ) -> i32 {
        let raw = base.saturating_add(rng.random_below(attribute));
        raw.saturating_sub(rng.random_below(defense))
    }

    pub fn skill_damage<R: RandomSource + ?Sized>(
        attacker: &Combatant,
        skill: &Skill,
        opponent: &Combatant,
        rng: &mut R,
    ) -> i32 {
        Self::roll_damage(skill.damage, attacker.intelligence, opponent.defense, rng)
    }

    /// Exhibition weapon attack; no hit point reset and no counter updates
    pub fn weapon_attack<R: RandomSource + ?Sized>(
        attacker: &Combatant,
        opponent: &mut Combatant,
        rng: &mut R,
    ) -> Result<AttackReport> {
        let weapon = attacker.weapon.as_ref().ok_or_else(|| {
            ArenaError::invalid_action(format!("{} has no weapon equipped", attacker.name))
        })?;
        let damage = Self::roll_damage(weapon.damage, attacker.strength, opponent.defense, rng);
        opponent.take_damage(damage);

        let report = AttackReport::new(attacker, opponent, &weapon.name, damage);
        debug!(attacker = %report.attacker, opponent = %report.opponent, damage, "weapon attack");
        Ok(report)
    }

    /// Exhibition skill attack; fails without touching hit points when the
    /// attacker does not know `skill_id`
    pub fn skill_attack<R: RandomSource + ?Sized>(
        attacker: &Combatant,
        opponent: &mut Combatant,
        skill_id: u32,
        rng: &mut R,
    ) -> Result<AttackReport> {
        let skill = attacker.known_skill(skill_id).ok_or_else(|| {
            ArenaError::invalid_action(format!("{} doesn't know that skill", attacker.name))
        })?;
        let damage = Self::skill_damage(attacker, skill, opponent, rng);
        opponent.take_damage(damage);

        let report = AttackReport::new(attacker, opponent, &skill.name, damage);
        debug!(attacker = %report.attacker, opponent = %report.opponent, damage, "skill attack");
        Ok(report)
    }
}

/// Outcome of a single attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    pub attacker: String,
    pub opponent: String,
    pub action: String,
    /// Computed damage, possibly negative
    pub damage: i32,
    pub attacker_hit_points: i32,
    pub opponent_hit_points: i32,
    pub defeated: bool,
}

impl AttackReport {
    fn new(attacker: &Combatant, opponent: &Combatant, action: &str, damage: i32) -> Self {
        Self {
            attacker: attacker.name.clone(),
            opponent: opponent.name.clone(),
            action: action.to_string(),
            damage,
            attacker_hit_points: attacker.hit_points,
            opponent_hit_points: opponent.hit_points,
            defeated: opponent.is_defeated(),
        }
    }

    /// Damage as it is shown to players
    pub fn displayed_damage(&self) -> i32 {
        self.damage.max(0)
    }

    pub fn defeat_message(&self) -> Option<String> {
        self.defeated
            .then(|| format!("{} has been defeated", self.opponent))
    }
}
