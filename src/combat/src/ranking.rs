//! High-score table

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::{CareerRecord, Combatant};

/// One row of the high-score table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub id: u32,
    pub name: String,
    pub fights: u32,
    pub victories: u32,
    pub defeats: u32,
}

impl HighScore {
    pub fn new(id: u32, name: impl Into<String>, record: CareerRecord) -> Self {
        Self {
            id,
            name: name.into(),
            fights: record.fights,
            victories: record.victories,
            defeats: record.defeats,
        }
    }
}

impl From<&Combatant> for HighScore {
    fn from(combatant: &Combatant) -> Self {
        HighScore::new(combatant.id, combatant.name.clone(), combatant.record)
    }
}

/// Drop everyone who never fought, then order by victories descending and
/// defeats ascending. Equal rows keep their input order.
pub fn rank_high_scores(entries: impl IntoIterator<Item = HighScore>) -> Vec<HighScore> {
    let mut ranked: Vec<HighScore> = entries.into_iter().filter(|e| e.fights > 0).collect();
    ranked.sort_by_key(|e| (Reverse(e.victories), e.defeats));
    ranked
}
