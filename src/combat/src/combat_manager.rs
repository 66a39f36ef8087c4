//! Round-robin fight loop between two or more combatants
use error::{ArenaError, Result};
use strum::Display;
use tracing::{debug, info};

use crate::{BattleLog, Combat, Combatant, FightResult, RandomSource};

/// Kind of attack a combatant can pick on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ActionKind {
    Weapon,
    Skill,
}

/// Knobs for a single fight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FightOptions {
    /// Attacks allowed before giving up. `None` keeps fighting until someone
    /// falls, even if every roll deals no damage.
    pub turn_limit: Option<u64>,
}

impl FightOptions {
    pub fn with_turn_limit(turn_limit: u64) -> Self {
        Self {
            turn_limit: Some(turn_limit),
        }
    }
}

/// Owns the roster for the duration of one fight
pub struct CombatManager;

impl CombatManager {
    /// Run attacker turns in load order until one combatant drops to zero
    /// hit points, then settle counters and restore everyone's hit points.
    pub fn fight<R: RandomSource + ?Sized>(
        mut roster: Vec<Combatant>,
        rng: &mut R,
        options: FightOptions,
    ) -> Result<FightResult> {
        if roster.len() < 2 {
            return Err(ArenaError::invalid_action(
                "A fight needs at least two combatants",
            ));
        }
        if roster.iter().all(|c| Self::available_actions(c).is_empty()) {
            return Err(ArenaError::invalid_action(
                "None of the combatants has a weapon or a skill",
            ));
        }

        info!(
            combatants = roster.len(),
            names = ?roster.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            "fight started"
        );

        let mut log = BattleLog::new();
        let mut turns = 0u64;

        let (winner, loser) = 'fight: loop {
            for attacker in 0..roster.len() {
                if let Some(limit) = options.turn_limit {
                    if turns >= limit {
                        return Err(ArenaError::internal(format!(
                            "No winner after {} turns",
                            limit
                        )));
                    }
                }
                turns += 1;

                if let Some(loser) = Self::take_turn(&mut roster, attacker, rng, &mut log)? {
                    break 'fight (attacker, loser);
                }
            }
        };

        roster[winner].record.victories += 1;
        roster[loser].record.defeats += 1;
        log.defeat(&roster[winner], &roster[loser]);

        let (winner_id, loser_id) = (roster[winner].id, roster[loser].id);
        info!(
            winner = %roster[winner].name,
            loser = %roster[loser].name,
            turns,
            "fight finished"
        );

        for combatant in roster.iter_mut() {
            combatant.record.fights += 1;
            combatant.restore();
        }

        Ok(FightResult {
            log,
            winner_id,
            loser_id,
            turns,
            combatants: roster,
        })
    }

    /// Weapon and skill are independent gates
    pub fn available_actions(combatant: &Combatant) -> Vec<ActionKind> {
        let mut actions = Vec::with_capacity(2);
        if combatant.can_use_weapon() {
            actions.push(ActionKind::Weapon);
        }
        if combatant.can_use_skill() {
            actions.push(ActionKind::Skill);
        }
        actions
    }

    /// Uniform pick among every index except the attacker's own
    pub fn pick_opponent<R: RandomSource + ?Sized>(
        roster_len: usize,
        attacker: usize,
        rng: &mut R,
    ) -> usize {
        let pick = rng.pick_index(roster_len - 1);
        if pick >= attacker { pick + 1 } else { pick }
    }

    /// One attack by `roster[attacker]`. Returns the opponent's index if the
    /// attack defeated it.
    pub(crate) fn take_turn<R: RandomSource + ?Sized>(
        roster: &mut [Combatant],
        attacker: usize,
        rng: &mut R,
        log: &mut BattleLog,
    ) -> Result<Option<usize>> {
        let actions = Self::available_actions(&roster[attacker]);
        if actions.is_empty() {
            log.log(format!(
                "{} has nothing to attack with",
                roster[attacker].name
            ));
            return Ok(None);
        }
        let opponent = Self::pick_opponent(roster.len(), attacker, rng);
        let action = actions[rng.pick_index(actions.len())];

        let (action_name, damage) = {
            let (striker, target) = (&roster[attacker], &roster[opponent]);
            match (action, &striker.weapon) {
                (ActionKind::Weapon, Some(weapon)) => {
                    let damage =
                        Combat::roll_damage(weapon.damage, striker.strength, target.defense, rng);
                    (weapon.name.clone(), damage)
                }
                (ActionKind::Weapon, None) => {
                    return Err(ArenaError::internal(format!(
                        "{} was offered a weapon attack without a weapon",
                        striker.name
                    )));
                }
                (ActionKind::Skill, _) => {
                    let skill = &striker.skills[rng.pick_index(striker.skills.len())];
                    let damage = Combat::skill_damage(striker, skill, target, rng);
                    (skill.name.clone(), damage)
                }
            }
        };

        roster[opponent].take_damage(damage);
        log.attack(
            &roster[attacker].name,
            &roster[opponent].name,
            &action_name,
            damage,
        );
        debug!(
            attacker = %roster[attacker].name,
            opponent = %roster[opponent].name,
            %action,
            damage,
            opponent_hp = roster[opponent].hit_points,
            "turn resolved"
        );

        Ok(roster[opponent].is_defeated().then_some(opponent))
    }
}
