//! Fights, exhibition attacks and the high-score table

use combat::{
    AttackReport, Combat, CombatManager, Combatant, FightOptions, HighScore, RandomSource,
    rank_high_scores,
};
use error::{ArenaError, Result, ServiceResponse};
use hero::Character;
use save::CharacterStore;
use tracing::info;

use crate::dto::{
    AttackResultDto, FightRequest, FightResultDto, HighScoreDto, SkillAttackRequest,
    WeaponAttackRequest,
};
use crate::respond;

pub struct FightService<S, R> {
    store: S,
    rng: R,
    options: FightOptions,
}

impl<S: CharacterStore, R: RandomSource> FightService<S, R> {
    pub fn new(store: S, rng: R) -> Self {
        Self {
            store,
            rng,
            options: FightOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FightOptions) -> Self {
        self.options = options;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Fight the requested characters to the first defeat and store the
    /// outcome for everyone involved
    pub fn fight(&mut self, request: &FightRequest) -> ServiceResponse<FightResultDto> {
        respond("fight", self.try_fight(request))
    }

    pub fn weapon_attack(
        &mut self,
        request: &WeaponAttackRequest,
    ) -> ServiceResponse<AttackResultDto> {
        let result = self.exhibition(request.attacker_id, request.opponent_id, |a, o, rng| {
            Combat::weapon_attack(a, o, rng)
        });
        Self::attack_response("weapon_attack", result)
    }

    pub fn skill_attack(
        &mut self,
        request: &SkillAttackRequest,
    ) -> ServiceResponse<AttackResultDto> {
        let skill_id = request.skill_id;
        let result = self.exhibition(request.attacker_id, request.opponent_id, |a, o, rng| {
            Combat::skill_attack(a, o, skill_id, rng)
        });
        Self::attack_response("skill_attack", result)
    }

    /// Everyone who fought at least once, best first
    pub fn high_score(&self) -> ServiceResponse<Vec<HighScoreDto>> {
        let entries = self
            .store
            .characters()
            .into_iter()
            .map(|c| HighScore::new(c.id, c.name, c.record));
        ServiceResponse::ok(rank_high_scores(entries))
    }

    fn try_fight(&mut self, request: &FightRequest) -> Result<FightResultDto> {
        let characters = self.store.load_roster(&request.character_ids);
        let catalog = self.store.skills();
        let roster: Vec<Combatant> = characters.iter().map(|c| c.to_combatant(catalog)).collect();

        let result = CombatManager::fight(roster, &mut self.rng, self.options)?;

        let updated: Vec<Character> = characters
            .into_iter()
            .zip(result.combatants.iter())
            .map(|(mut character, combatant)| {
                character.absorb(combatant);
                character
            })
            .collect();
        self.store.commit(&updated)?;

        let name_of = |id: u32| {
            result
                .combatants
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.name.clone())
                .unwrap_or_default()
        };
        let dto = FightResultDto {
            winner: name_of(result.winner_id),
            loser: name_of(result.loser_id),
            turns: result.turns,
            log: result.log.into_entries(),
        };
        info!(winner = %dto.winner, loser = %dto.loser, "fight stored");
        Ok(dto)
    }

    /// Single attack between two stored characters. Only the opponent's hit
    /// points are written back; counters stay untouched.
    fn exhibition<F>(
        &mut self,
        attacker_id: u32,
        opponent_id: u32,
        attack: F,
    ) -> Result<AttackReport>
    where
        F: FnOnce(&Combatant, &mut Combatant, &mut R) -> Result<AttackReport>,
    {
        let attacker = self.store.character(attacker_id)?;
        let mut opponent = self.store.character(opponent_id)?;
        if attacker.id == opponent.id {
            return Err(ArenaError::invalid_action(format!(
                "{} cannot attack itself",
                attacker.name
            )));
        }

        let catalog = self.store.skills();
        let striker = attacker.to_combatant(catalog);
        let mut target = opponent.to_combatant(catalog);

        let report = attack(&striker, &mut target, &mut self.rng)?;

        opponent.absorb(&target);
        self.store.update_character(opponent)?;
        Ok(report)
    }

    fn attack_response(
        operation: &str,
        result: Result<AttackReport>,
    ) -> ServiceResponse<AttackResultDto> {
        match result {
            Ok(report) => {
                let message = report.defeat_message().unwrap_or_default();
                ServiceResponse::ok_with_message(
                    AttackResultDto {
                        attacker: report.attacker,
                        opponent: report.opponent,
                        attacker_hp: report.attacker_hit_points,
                        opponent_hp: report.opponent_hit_points,
                        damage: report.damage,
                    },
                    message,
                )
            }
            Err(err) => respond(operation, Err(err)),
        }
    }
}
