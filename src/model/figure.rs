use serde::{Deserialize, Serialize};

use super::race::{Race, Sex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SocialClass {
    Peasant,
    Artisan,
    Merchant,
    Clergy,
    Noble,
    Royal,
}

string_enum!(SocialClass {
    Peasant => "peasant",
    Artisan => "artisan",
    Merchant => "merchant",
    Clergy => "clergy",
    Noble => "noble",
    Royal => "royal",
});

impl SocialClass {
    pub const RANKED: [SocialClass; 6] = [
        SocialClass::Peasant,
        SocialClass::Artisan,
        SocialClass::Merchant,
        SocialClass::Clergy,
        SocialClass::Noble,
        SocialClass::Royal,
    ];

    fn rank(self) -> usize {
        Self::RANKED.iter().position(|&c| c == self).unwrap_or(0)
    }

    /// Neighboring class one rank up or down, clamped at the extremes.
    pub fn shifted(self, up: bool) -> SocialClass {
        let rank = self.rank();
        let shifted = if up {
            (rank + 1).min(Self::RANKED.len() - 1)
        } else {
            rank.saturating_sub(1)
        };
        Self::RANKED[shifted]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalFigure {
    pub id: u64,
    pub name: String,
    pub race: Race,
    pub sex: Sex,
    /// Civilization this figure belongs to.
    pub civilization: u64,
    pub birth_year: u32,
    pub death_year: Option<u32>,
    /// Set together by genealogy linking, or both absent.
    pub mother: Option<u64>,
    pub father: Option<u64>,
    pub spouse: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participated_in_events: Vec<u64>,
    pub social_class: SocialClass,
    /// 1-10 rating of lasting importance.
    pub cultural_significance: u8,
}

impl HistoricalFigure {
    pub fn is_alive(&self, year: u32) -> bool {
        self.birth_year <= year && self.death_year.is_none_or(|d| d > year)
    }

    pub fn age(&self, year: u32) -> u32 {
        year.saturating_sub(self.birth_year)
    }
}
