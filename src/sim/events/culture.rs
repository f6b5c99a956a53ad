use rand::Rng;

use crate::model::SimulationContext;
use crate::model::event::{EventDetails, MovementKind, Severity};
use crate::model::relationship::RelationshipLevel;

/// Chance a movement spreads to each friendly or allied civilization.
const SPREAD_CHANCE: f64 = 0.40;

pub(super) fn build(ctx: &mut SimulationContext, year: u32) -> Option<u64> {
    let ids: Vec<u64> = ctx.civilizations.keys().copied().collect();
    if ids.is_empty() {
        return None;
    }
    let origin = ids[ctx.rng.random_range(0..ids.len())];
    let kind = MovementKind::ALL[ctx.rng.random_range(0..MovementKind::ALL.len())];

    let mut spread_to: Vec<u64> = Vec::new();
    for &other in &ids {
        if other == origin {
            continue;
        }
        let level = ctx.relationships.get(origin, other);
        if matches!(level, RelationshipLevel::Friendly | RelationshipLevel::Allied)
            && ctx.rng.random_bool(SPREAD_CHANCE)
        {
            spread_to.push(other);
        }
    }
    // A movement that crosses borders is a bigger deal.
    let severity = if spread_to.is_empty() { Severity::Minor } else { Severity::Moderate };
    let mut significance = ctx.rng.random_range(3..=6);
    if !spread_to.is_empty() {
        significance += 1;
    }

    let origin_name = ctx.civilizations[&origin].name.clone();
    let description = if spread_to.is_empty() {
        format!("A {kind} movement arises in {origin_name}")
    } else {
        format!("A {kind} movement arises in {origin_name} and spreads abroad")
    };

    let participants: Vec<u64> = ctx.ruler_of(origin, year).into_iter().collect();
    let mut primary = vec![origin];
    primary.extend(&spread_to);
    let event_id = ctx.add_event(
        year,
        significance,
        description,
        primary,
        participants,
        0,
        EventDetails::CulturalMovement { kind, origin, spread_to, severity },
    );
    Some(event_id)
}
