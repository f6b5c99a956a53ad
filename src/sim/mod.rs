pub mod config;
pub mod demographics;
pub mod events;
pub mod genealogy;
pub mod names;
pub mod territory;
pub mod timeline;

pub use config::{MAX_YEARS, SimConfig};
pub use genealogy::{LinkError, MIN_GENERATION_GAP};
pub use timeline::{Progress, run, simulate};
