use std::collections::BTreeSet;

use crate::model::hex::HexCoord;
use crate::model::race::Race;

/// Hints passed to the external placement collaborator. The terrain
/// subsystem owns biome suitability; this core only states what it wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPreferences {
    /// Desired number of starting hexes.
    pub target_hexes: u32,
}

/// Callback supplying a civilization's starting territory. Backed by the
/// external terrain subsystem in production; tests use `cluster_placement`.
pub type PlacementFn<'a> = dyn FnMut(Race, &PlacementPreferences) -> Vec<HexCoord> + 'a;

/// Grow a contiguous blob of `count` hexes outward from `center`.
fn grow_cluster(center: HexCoord, count: usize) -> Vec<HexCoord> {
    let mut cluster: BTreeSet<HexCoord> = BTreeSet::from([center]);
    let mut frontier: Vec<HexCoord> = vec![center];
    while cluster.len() < count {
        let Some(hex) = frontier.first().copied() else { break };
        frontier.remove(0);
        for neighbor in hex.neighbors() {
            if cluster.len() >= count {
                break;
            }
            if cluster.insert(neighbor) {
                frontier.push(neighbor);
            }
        }
    }
    cluster.into_iter().collect()
}

/// Deterministic stand-in for the terrain subsystem: each call places the
/// next civilization on a fresh cluster along a row, close enough that
/// consecutive homelands share a border. Clusters are capped at one ring
/// (7 hexes) so neighboring homelands touch without overlapping.
pub fn cluster_placement() -> impl FnMut(Race, &PlacementPreferences) -> Vec<HexCoord> {
    let mut placed: u32 = 0;
    move |_race, prefs| {
        let center = HexCoord::new(placed as i32 * 3, 0);
        placed += 1;
        grow_cluster(center, prefs.target_hexes.clamp(1, 7) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_has_requested_size_and_is_contiguous() {
        let cluster = grow_cluster(HexCoord::new(0, 0), 7);
        assert_eq!(cluster.len(), 7);
        let set: BTreeSet<_> = cluster.iter().copied().collect();
        for hex in &cluster {
            let connected = *hex == HexCoord::new(0, 0)
                || hex.neighbors().iter().any(|n| set.contains(n));
            assert!(connected, "{hex:?} is detached");
        }
    }

    #[test]
    fn successive_placements_do_not_overlap() {
        let mut place = cluster_placement();
        let prefs = PlacementPreferences { target_hexes: 7 };
        let first: BTreeSet<_> = place(Race::Human, &prefs).into_iter().collect();
        let second: BTreeSet<_> = place(Race::Elf, &prefs).into_iter().collect();
        assert!(first.is_disjoint(&second));
    }

    #[test]
    fn placements_are_deterministic() {
        let prefs = PlacementPreferences { target_hexes: 6 };
        let mut a = cluster_placement();
        let mut b = cluster_placement();
        assert_eq!(a(Race::Dwarf, &prefs), b(Race::Dwarf, &prefs));
        assert_eq!(a(Race::Dwarf, &prefs), b(Race::Dwarf, &prefs));
    }
}
