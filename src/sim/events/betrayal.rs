use rand::Rng;

use super::ruler_participants;
use crate::model::SimulationContext;
use crate::model::event::EventDetails;
use crate::model::relationship::RelationshipLevel;

pub(super) fn build(ctx: &mut SimulationContext, year: u32) -> Option<u64> {
    let bonded = ctx.relationships.pairs_where(|level| {
        matches!(level, RelationshipLevel::Allied | RelationshipLevel::Friendly)
    });
    if bonded.is_empty() {
        return None;
    }
    let (a, b) = bonded[ctx.rng.random_range(0..bonded.len())];
    let (betrayer, betrayed) = if ctx.rng.random_bool(0.5) { (a, b) } else { (b, a) };

    let betrayer_name = ctx.civilizations[&betrayer].name.clone();
    let betrayed_name = ctx.civilizations[&betrayed].name.clone();
    let description = format!("{betrayer_name} breaks faith with {betrayed_name}");
    // A broken pact is always remembered.
    let significance = ctx.rng.random_range(8..=10);

    let participants = ruler_participants(ctx, &[betrayer, betrayed], year);
    let event_id = ctx.add_event(
        year,
        significance,
        description,
        vec![betrayer, betrayed],
        participants,
        0,
        EventDetails::Betrayal { betrayer, betrayed },
    );
    let change = ctx.relationships.set(
        betrayer,
        betrayed,
        RelationshipLevel::Hostile,
        "a trusted pact broken",
        event_id,
    );
    ctx.events
        .get_mut(&event_id)
        .expect("just created")
        .relationship_changes
        .push(change);
    Some(event_id)
}
