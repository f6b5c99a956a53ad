pub mod founder;
pub mod placement;

pub use founder::found_civilizations;
pub use placement::{PlacementFn, PlacementPreferences, cluster_placement};
