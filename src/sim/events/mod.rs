mod alliance;
mod betrayal;
mod culture;
mod disaster;
mod succession;
mod war;

use rand::Rng;

use crate::model::SimulationContext;
use crate::model::event::EventCategory;

/// Annual chance that any event occurs.
pub const ANNUAL_EVENT_CHANCE: f64 = 0.30;

type BuilderFn = fn(&mut SimulationContext, u32) -> Option<u64>;

/// Category dispatch table: fixed weights, one builder per category.
const BUILDERS: [(EventCategory, u32, BuilderFn); 6] = [
    (EventCategory::War, 25, war::build),
    (EventCategory::Succession, 20, succession::build),
    (EventCategory::CulturalMovement, 20, culture::build),
    (EventCategory::Disaster, 15, disaster::build),
    (EventCategory::Alliance, 15, alliance::build),
    (EventCategory::Betrayal, 5, betrayal::build),
];

/// Roll the annual event chance and, on a hit, dispatch to a weighted
/// category builder. A builder that finds no eligible participants yields
/// no event for the year (generation miss, not a failure).
pub fn maybe_generate_event(ctx: &mut SimulationContext, year: u32) -> Option<u64> {
    if !ctx.rng.random_bool(ANNUAL_EVENT_CHANCE) {
        return None;
    }
    let total: u32 = BUILDERS.iter().map(|(_, weight, _)| weight).sum();
    let mut roll = ctx.rng.random_range(0..total);
    for (category, weight, build) in BUILDERS {
        if roll < weight {
            let event = build(ctx, year);
            if event.is_none() {
                tracing::debug!(year, %category, "no eligible participants, year skipped");
            }
            return event;
        }
        roll -= weight;
    }
    None
}

/// Link the rulers of the given civilizations, skipping any civilization
/// without a living figure.
fn ruler_participants(ctx: &SimulationContext, civs: &[u64], year: u32) -> Vec<u64> {
    let mut rulers: Vec<u64> = civs
        .iter()
        .filter_map(|&civ| ctx.ruler_of(civ, year))
        .collect();
    rulers.dedup();
    rulers
}
