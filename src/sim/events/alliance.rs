use rand::Rng;

use super::ruler_participants;
use crate::model::SimulationContext;
use crate::model::event::EventDetails;
use crate::model::relationship::{RelationshipLevel, compatibility_score};

pub(super) fn build(ctx: &mut SimulationContext, year: u32) -> Option<u64> {
    // Neutral-or-better pairs that are not already allied.
    let eligible = ctx.relationships.pairs_where(|level| {
        matches!(level, RelationshipLevel::Neutral | RelationshipLevel::Friendly)
    });
    if eligible.is_empty() {
        return None;
    }
    let (civ_a, civ_b) = eligible[ctx.rng.random_range(0..eligible.len())];

    let current = ctx.relationships.get(civ_a, civ_b);
    let score = compatibility_score(&ctx.civilizations[&civ_a], &ctx.civilizations[&civ_b]);
    let new_level = if current == RelationshipLevel::Friendly || score >= 2 {
        RelationshipLevel::Allied
    } else {
        RelationshipLevel::Friendly
    };

    let name_a = ctx.civilizations[&civ_a].name.clone();
    let name_b = ctx.civilizations[&civ_b].name.clone();
    let description = match new_level {
        RelationshipLevel::Allied => format!("{name_a} and {name_b} swear a formal alliance"),
        _ => format!("{name_a} and {name_b} open friendly relations"),
    };
    let significance = ctx.rng.random_range(4..=6);

    let participants = ruler_participants(ctx, &[civ_a, civ_b], year);
    let event_id = ctx.add_event(
        year,
        significance,
        description,
        vec![civ_a, civ_b],
        participants,
        0,
        EventDetails::Alliance { civ_a, civ_b },
    );
    let change = ctx
        .relationships
        .set(civ_a, civ_b, new_level, "diplomatic accord", event_id);
    ctx.events
        .get_mut(&event_id)
        .expect("just created")
        .relationship_changes
        .push(change);
    Some(event_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::civilization::Civilization;
    use crate::model::cultural_value::CulturalValue;
    use crate::model::government::GovernmentType;
    use crate::model::race::Race;

    fn context_with_pair(values: [&[CulturalValue]; 2]) -> SimulationContext {
        let mut ctx = SimulationContext::new(61, 0);
        for vals in values {
            ctx.add_civilization(Civilization {
                id: 0,
                name: "Signatory".to_string(),
                race: Race::Human,
                founded_year: 0,
                government: GovernmentType::Republic,
                cultural_values: vals.to_vec(),
                territory: Default::default(),
                population: 10_000,
            });
        }
        ctx
    }

    #[test]
    fn no_eligible_pair_no_alliance() {
        let mut ctx = context_with_pair([&[], &[]]);
        ctx.relationships.set(1, 2, RelationshipLevel::Hostile, "seeded", 0);
        assert_eq!(build(&mut ctx, 10), None);
    }

    #[test]
    fn compatible_neutral_pair_becomes_allied() {
        let mut ctx = context_with_pair([&[CulturalValue::Knowledge], &[CulturalValue::Knowledge]]);
        // Same race, government, shared value: score 4.
        ctx.relationships.set(1, 2, RelationshipLevel::Neutral, "seeded", 0);
        let event_id = build(&mut ctx, 10).unwrap();
        assert_eq!(ctx.relationships.get(1, 2), RelationshipLevel::Allied);
        let event = &ctx.events[&event_id];
        assert_eq!(event.relationship_changes.len(), 1);
        assert_eq!(event.relationship_changes[0].old_level, RelationshipLevel::Neutral);
        assert_eq!(event.relationship_changes[0].new_level, RelationshipLevel::Allied);
        assert_eq!(event.casualties, 0);
    }

    #[test]
    fn friendly_pair_upgrades_to_allied() {
        let mut ctx = context_with_pair([&[], &[]]);
        ctx.relationships.set(1, 2, RelationshipLevel::Friendly, "seeded", 0);
        build(&mut ctx, 10).unwrap();
        assert_eq!(ctx.relationships.get(1, 2), RelationshipLevel::Allied);
    }

    #[test]
    fn never_sets_at_war() {
        let mut ctx = context_with_pair([&[], &[]]);
        ctx.relationships.set(1, 2, RelationshipLevel::Neutral, "seeded", 0);
        for year in 0..40 {
            build(&mut ctx, year);
            let level = ctx.relationships.get(1, 2);
            assert!(matches!(
                level,
                RelationshipLevel::Friendly | RelationshipLevel::Allied
            ));
        }
    }
}
