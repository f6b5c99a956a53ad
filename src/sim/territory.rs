use std::collections::{BTreeMap, BTreeSet};

use crate::model::civilization::Civilization;
use crate::model::event::TerritorialChange;
use crate::model::hex::HexCoord;

/// Default fraction of the contested border moved by one transfer.
pub const DEFAULT_TRANSFER_FRACTION: f64 = 0.25;

/// Hexes owned by `of` that touch territory of `against`.
pub fn border_hexes(
    civs: &BTreeMap<u64, Civilization>,
    of: u64,
    against: u64,
) -> BTreeSet<HexCoord> {
    let (Some(owner), Some(neighbor)) = (civs.get(&of), civs.get(&against)) else {
        return BTreeSet::new();
    };
    owner
        .territory
        .iter()
        .filter(|hex| hex.neighbors().iter().any(|n| neighbor.territory.contains(n)))
        .copied()
        .collect()
}

/// Move `fraction` of the loser-side border hexes to the winner, rescaling
/// both populations to their new hex counts. Returns one logged change per
/// affected side, or nothing when the two territories do not touch.
pub fn transfer(
    civs: &mut BTreeMap<u64, Civilization>,
    winner: u64,
    loser: u64,
    fraction: f64,
    reason: &str,
    event_id: u64,
) -> Vec<TerritorialChange> {
    let border = border_hexes(civs, loser, winner);
    if border.is_empty() {
        return Vec::new();
    }
    let count = ((border.len() as f64 * fraction).ceil() as usize).clamp(1, border.len());
    let moved: Vec<HexCoord> = border.into_iter().take(count).collect();

    let loser_hexes_before = civs[&loser].territory.len();
    let winner_hexes_before = civs[&winner].territory.len();
    {
        let loser_civ = civs.get_mut(&loser).expect("border implies loser exists");
        for hex in &moved {
            loser_civ.territory.remove(hex);
        }
        loser_civ.rescale_population(loser_hexes_before);
    }
    {
        let winner_civ = civs.get_mut(&winner).expect("border implies winner exists");
        for hex in &moved {
            winner_civ.territory.insert(*hex);
        }
        winner_civ.rescale_population(winner_hexes_before);
    }

    vec![
        TerritorialChange {
            civilization: winner,
            hexes_gained: moved.clone(),
            hexes_lost: vec![],
            reason: reason.to_string(),
            event_id,
        },
        TerritorialChange {
            civilization: loser,
            hexes_gained: vec![],
            hexes_lost: moved,
            reason: reason.to_string(),
            event_id,
        },
    ]
}
