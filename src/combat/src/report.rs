//! Battle log and fight outcome

use serde::{Deserialize, Serialize};

use crate::Combatant;

/// Ordered, append-only record of a fight
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleLog {
    entries: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, message: String) {
        self.entries.push(message);
    }

    /// Damage is shown floored at zero
    pub fn attack(&mut self, attacker: &str, opponent: &str, action: &str, damage: i32) {
        self.log(format!(
            "{} attacks {} using {} with {} damage",
            attacker,
            opponent,
            action,
            damage.max(0)
        ));
    }

    pub fn defeat(&mut self, winner: &Combatant, loser: &Combatant) {
        self.log(format!("{} has been defeated!", loser.name));
        self.log(format!(
            "{} wins with {} HP Left!",
            winner.name,
            winner.display_hit_points()
        ));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}

/// Completed fight, with every participant's state ready to be written back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightResult {
    pub log: BattleLog,
    pub winner_id: u32,
    pub loser_id: u32,
    /// Attacks taken, including skipped turns
    pub turns: u64,
    pub combatants: Vec<Combatant>,
}

impl FightResult {
    pub fn winner(&self) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.id == self.winner_id)
    }

    pub fn loser(&self) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.id == self.loser_id)
    }

    /// Every combatant still standing when the fight ended
    pub fn survivors(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter().filter(move |c| c.id != self.loser_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_line_floors_damage() {
        let mut log = BattleLog::new();
        log.attack("Frodo", "Sam", "Sting", -4);
        log.attack("Sam", "Frodo", "Frenzy", 12);
        assert_eq!(
            log.entries(),
            &[
                "Frodo attacks Sam using Sting with 0 damage".to_string(),
                "Sam attacks Frodo using Frenzy with 12 damage".to_string(),
            ]
        );
    }

    #[test]
    fn defeat_lines_clamp_winner_hit_points() {
        let winner = Combatant::new(1, "Frodo").with_hit_points(-3);
        let loser = Combatant::new(2, "Sam").with_hit_points(-10);
        let mut log = BattleLog::new();
        log.defeat(&winner, &loser);
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0], "Sam has been defeated!");
        assert_eq!(log.last(), Some("Frodo wins with 0 HP Left!"));
    }
}
