use serde::{Deserialize, Serialize};

use super::hex::HexCoord;
use super::relationship::RelationshipChange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventCategory {
    War,
    Succession,
    Disaster,
    CulturalMovement,
    Alliance,
    Betrayal,
}

string_enum!(EventCategory {
    War => "war",
    Succession => "succession",
    Disaster => "disaster",
    CulturalMovement => "cultural_movement",
    Alliance => "alliance",
    Betrayal => "betrayal",
});

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::War,
        EventCategory::Succession,
        EventCategory::Disaster,
        EventCategory::CulturalMovement,
        EventCategory::Alliance,
        EventCategory::Betrayal,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Severity {
    Minor,
    Moderate,
    Major,
    Catastrophic,
}

string_enum!(Severity {
    Minor => "minor",
    Moderate => "moderate",
    Major => "major",
    Catastrophic => "catastrophic",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SuccessionKind {
    Peaceful,
    Contested,
    CivilWar,
    Coup,
    Assassination,
}

string_enum!(SuccessionKind {
    Peaceful => "peaceful",
    Contested => "contested",
    CivilWar => "civil_war",
    Coup => "coup",
    Assassination => "assassination",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DisasterKind {
    Earthquake,
    Flood,
    Drought,
    Plague,
    Famine,
    Eruption,
    Hurricane,
    Wildfire,
}

string_enum!(DisasterKind {
    Earthquake => "earthquake",
    Flood => "flood",
    Drought => "drought",
    Plague => "plague",
    Famine => "famine",
    Eruption => "eruption",
    Hurricane => "hurricane",
    Wildfire => "wildfire",
});

impl DisasterKind {
    pub const ALL: [DisasterKind; 8] = [
        DisasterKind::Earthquake,
        DisasterKind::Flood,
        DisasterKind::Drought,
        DisasterKind::Plague,
        DisasterKind::Famine,
        DisasterKind::Eruption,
        DisasterKind::Hurricane,
        DisasterKind::Wildfire,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MovementKind {
    Religious,
    Technological,
    Artistic,
    SocialReform,
    Educational,
    Trade,
    Architectural,
}

string_enum!(MovementKind {
    Religious => "religious",
    Technological => "technological",
    Artistic => "artistic",
    SocialReform => "social_reform",
    Educational => "educational",
    Trade => "trade",
    Architectural => "architectural",
});

impl MovementKind {
    pub const ALL: [MovementKind; 7] = [
        MovementKind::Religious,
        MovementKind::Technological,
        MovementKind::Artistic,
        MovementKind::SocialReform,
        MovementKind::Educational,
        MovementKind::Trade,
        MovementKind::Architectural,
    ];
}

/// A logged hex ownership transfer, recorded on the event that caused it.
/// `hexes_lost` must have been owned by `civilization` immediately before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerritorialChange {
    pub civilization: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hexes_gained: Vec<HexCoord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hexes_lost: Vec<HexCoord>,
    pub reason: String,
    pub event_id: u64,
}

/// Category-specific payload. Serialized flattened into the event envelope
/// with `category` as the tag, so the persisted form carries exactly the
/// fields meaningful to its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum EventDetails {
    War {
        attacker: u64,
        defender: u64,
        /// None on a stalemate.
        winner: Option<u64>,
        duration_years: u32,
    },
    Succession {
        civilization: u64,
        kind: SuccessionKind,
        previous_ruler: Option<u64>,
        new_ruler: Option<u64>,
        duration_years: u32,
    },
    Disaster {
        kind: DisasterKind,
        severity: Severity,
        affected: Vec<u64>,
    },
    CulturalMovement {
        kind: MovementKind,
        origin: u64,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        spread_to: Vec<u64>,
        severity: Severity,
    },
    Alliance {
        civ_a: u64,
        civ_b: u64,
    },
    Betrayal {
        betrayer: u64,
        betrayed: u64,
    },
}

impl EventDetails {
    pub fn category(&self) -> EventCategory {
        match self {
            EventDetails::War { .. } => EventCategory::War,
            EventDetails::Succession { .. } => EventCategory::Succession,
            EventDetails::Disaster { .. } => EventCategory::Disaster,
            EventDetails::CulturalMovement { .. } => EventCategory::CulturalMovement,
            EventDetails::Alliance { .. } => EventCategory::Alliance,
            EventDetails::Betrayal { .. } => EventCategory::Betrayal,
        }
    }
}

/// A discrete occurrence altering world state. Immutable once created;
/// events are the append-only log driving all other mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub id: u64,
    pub year: u32,
    /// 1-10 rating of lasting importance.
    pub significance: u8,
    pub description: String,
    pub primary_civilizations: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participant_figures: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationship_changes: Vec<RelationshipChange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub territorial_changes: Vec<TerritorialChange>,
    pub casualties: u32,
    #[serde(flatten)]
    pub details: EventDetails,
}

impl HistoricalEvent {
    pub fn category(&self) -> EventCategory {
        self.details.category()
    }
}
