use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::cultural_value::CulturalValue;
use super::government::GovernmentType;
use super::hex::HexCoord;
use super::race::Race;

/// Approximate inhabitants per owned hex, used when seeding population and
/// when recomputing it after territorial transfers.
pub const POPULATION_PER_HEX: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Civilization {
    pub id: u64,
    pub name: String,
    pub race: Race,
    pub founded_year: u32,
    pub government: GovernmentType,
    pub cultural_values: Vec<CulturalValue>,
    /// Owned hexes. Pairwise relationship state lives in the
    /// `RelationshipLedger`, not here.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub territory: BTreeSet<HexCoord>,
    pub population: u32,
}

impl Civilization {
    /// Recompute population proportionally to the change in hex count.
    /// Falls back to the per-hex baseline when there was no prior territory.
    pub fn rescale_population(&mut self, old_hex_count: usize) {
        let new_hex_count = self.territory.len();
        if old_hex_count == 0 {
            self.population = new_hex_count as u32 * POPULATION_PER_HEX;
        } else {
            self.population = ((self.population as u64 * new_hex_count as u64)
                / old_hex_count as u64) as u32;
        }
    }
}
