use rand::RngCore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CulturalValue {
    Order,
    Freedom,
    Tradition,
    Innovation,
    MilitaryMight,
    Nature,
    Knowledge,
    Honor,
    Wealth,
    Spirituality,
}

string_enum!(CulturalValue {
    Order => "order",
    Freedom => "freedom",
    Tradition => "tradition",
    Innovation => "innovation",
    MilitaryMight => "military_might",
    Nature => "nature",
    Knowledge => "knowledge",
    Honor => "honor",
    Wealth => "wealth",
    Spirituality => "spirituality",
});

/// Conflicting pairs: a culture cannot hold both values in a pair, and
/// civilizations holding opposite sides score worse against each other.
pub const CONFLICTING_VALUE_PAIRS: [(CulturalValue, CulturalValue); 3] = [
    (CulturalValue::Order, CulturalValue::Freedom),
    (CulturalValue::Tradition, CulturalValue::Innovation),
    (CulturalValue::MilitaryMight, CulturalValue::Nature),
];

pub const ALL_VALUES: [CulturalValue; 10] = [
    CulturalValue::Order,
    CulturalValue::Freedom,
    CulturalValue::Tradition,
    CulturalValue::Innovation,
    CulturalValue::MilitaryMight,
    CulturalValue::Nature,
    CulturalValue::Knowledge,
    CulturalValue::Honor,
    CulturalValue::Wealth,
    CulturalValue::Spirituality,
];

fn conflicting_value(v: CulturalValue) -> Option<CulturalValue> {
    for &(a, b) in &CONFLICTING_VALUE_PAIRS {
        if v == a {
            return Some(b);
        }
        if v == b {
            return Some(a);
        }
    }
    None
}

/// Whether two values are a conflicting pair.
pub fn values_conflict(a: CulturalValue, b: CulturalValue) -> bool {
    conflicting_value(a) == Some(b)
}

/// Generate `count` cultural values with no conflicting pairs and no duplicates.
pub fn generate_cultural_values(rng: &mut dyn RngCore, count: usize) -> Vec<CulturalValue> {
    let mut chosen: Vec<CulturalValue> = Vec::with_capacity(count);

    for _ in 0..count {
        let mut candidates: Vec<CulturalValue> = Vec::new();
        for &v in &ALL_VALUES {
            if chosen.contains(&v) {
                continue;
            }
            if let Some(opp) = conflicting_value(v)
                && chosen.contains(&opp)
            {
                continue;
            }
            candidates.push(v);
        }
        if candidates.is_empty() {
            break;
        }
        let idx = (rng.next_u32() as usize) % candidates.len();
        chosen.push(candidates[idx]);
    }

    chosen
}
