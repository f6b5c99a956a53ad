#[macro_use]
mod macros;

pub mod civilization;
pub mod context;
pub mod cultural_value;
pub mod event;
pub mod figure;
pub mod government;
pub mod hex;
pub mod race;
pub mod relationship;

pub use civilization::{Civilization, POPULATION_PER_HEX};
pub use context::SimulationContext;
pub use cultural_value::{CONFLICTING_VALUE_PAIRS, CulturalValue, generate_cultural_values};
pub use event::{
    DisasterKind, EventCategory, EventDetails, HistoricalEvent, MovementKind, Severity,
    SuccessionKind, TerritorialChange,
};
pub use figure::{HistoricalFigure, SocialClass};
pub use government::GovernmentType;
pub use hex::HexCoord;
pub use race::{Race, Sex};
pub use relationship::{
    RelationshipChange, RelationshipLedger, RelationshipLevel, compatibility_score,
    level_for_score,
};
