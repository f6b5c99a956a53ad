pub mod db;
pub mod error;
pub mod flush;
pub mod id;
pub mod model;
pub mod query;
pub mod sim;
pub mod worldgen;

pub use error::SimError;
pub use id::IdGenerator;
pub use model::{
    Civilization, CulturalValue, DisasterKind, EventCategory, EventDetails, GovernmentType,
    HexCoord, HistoricalEvent, HistoricalFigure, MovementKind, Race, RelationshipChange,
    RelationshipLedger, RelationshipLevel, Severity, Sex, SimulationContext, SocialClass,
    SuccessionKind, TerritorialChange,
};
pub use sim::{Progress, SimConfig, run, simulate};
