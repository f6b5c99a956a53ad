use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::civilization::Civilization;
use super::cultural_value::values_conflict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RelationshipLevel {
    Allied,
    Friendly,
    Neutral,
    Tense,
    Hostile,
    AtWar,
}

string_enum!(RelationshipLevel {
    Allied => "allied",
    Friendly => "friendly",
    Neutral => "neutral",
    Tense => "tense",
    Hostile => "hostile",
    AtWar => "at_war",
});

/// A logged transition between two civilizations, recorded on the event
/// that caused it. `old_level` is the ledger state immediately prior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipChange {
    pub civ_a: u64,
    pub civ_b: u64,
    pub old_level: RelationshipLevel,
    pub new_level: RelationshipLevel,
    pub reason: String,
    pub event_id: u64,
}

/// Compatibility score between two civilizations, used to seed initial
/// relationship levels at founding time: +2 same race, +1 per shared
/// cultural value, -2 per conflicting value pair, +1 same government.
pub fn compatibility_score(a: &Civilization, b: &Civilization) -> i32 {
    let mut score = 0;
    if a.race == b.race {
        score += 2;
    }
    if a.government == b.government {
        score += 1;
    }
    for &va in &a.cultural_values {
        for &vb in &b.cultural_values {
            if va == vb {
                score += 1;
            } else if values_conflict(va, vb) {
                score -= 2;
            }
        }
    }
    score
}

/// Map a compatibility score to an initial relationship level.
pub fn level_for_score(score: i32) -> RelationshipLevel {
    match score {
        s if s >= 4 => RelationshipLevel::Allied,
        s if s >= 2 => RelationshipLevel::Friendly,
        s if s >= 0 => RelationshipLevel::Neutral,
        s if s >= -2 => RelationshipLevel::Tense,
        _ => RelationshipLevel::Hostile,
    }
}

/// Symmetric pairwise relationship state between civilizations.
///
/// Keys are ordered (min, max) id pairs, so there is exactly one entry per
/// pair and `get(a, b) == get(b, a)` holds by construction. All writes go
/// through `set`, which returns the change record for the caller to attach
/// to the triggering event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationshipLedger {
    levels: BTreeMap<(u64, u64), RelationshipLevel>,
}

fn pair_key(a: u64, b: u64) -> (u64, u64) {
    if a <= b { (a, b) } else { (b, a) }
}

impl RelationshipLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level between two civilizations. Unseeded pairs are Neutral.
    pub fn get(&self, a: u64, b: u64) -> RelationshipLevel {
        self.levels
            .get(&pair_key(a, b))
            .copied()
            .unwrap_or(RelationshipLevel::Neutral)
    }

    /// Set the level for a pair and return the logged change.
    pub fn set(
        &mut self,
        a: u64,
        b: u64,
        level: RelationshipLevel,
        reason: impl Into<String>,
        event_id: u64,
    ) -> RelationshipChange {
        let old_level = self.get(a, b);
        self.levels.insert(pair_key(a, b), level);
        RelationshipChange {
            civ_a: a.min(b),
            civ_b: a.max(b),
            old_level,
            new_level: level,
            reason: reason.into(),
            event_id,
        }
    }

    /// Restore a level directly, bypassing change logging. Only used when
    /// loading persisted state; simulation writes go through `set`.
    pub fn load_level(&mut self, a: u64, b: u64, level: RelationshipLevel) {
        self.levels.insert(pair_key(a, b), level);
    }

    /// Seed initial levels for every pair from compatibility scores.
    pub fn seed_from_compatibility(&mut self, civs: &BTreeMap<u64, Civilization>) {
        let ids: Vec<u64> = civs.keys().copied().collect();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                let score = compatibility_score(&civs[&a], &civs[&b]);
                self.levels.insert(pair_key(a, b), level_for_score(score));
            }
        }
    }

    /// All pairs at a given level, in key order.
    pub fn pairs_at(&self, level: RelationshipLevel) -> Vec<(u64, u64)> {
        self.levels
            .iter()
            .filter(|&(_, &l)| l == level)
            .map(|(&k, _)| k)
            .collect()
    }

    /// All pairs matching a predicate on the level, in key order.
    pub fn pairs_where(&self, pred: impl Fn(RelationshipLevel) -> bool) -> Vec<(u64, u64)> {
        self.levels
            .iter()
            .filter(|&(_, &l)| pred(l))
            .map(|(&k, _)| k)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = ((u64, u64), RelationshipLevel)> + '_ {
        self.levels.iter().map(|(&k, &l)| (k, l))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
