use rand::Rng;

use super::ruler_participants;
use crate::model::SimulationContext;
use crate::model::event::EventDetails;
use crate::model::relationship::RelationshipLevel;
use crate::sim::territory;

/// Share of casualties borne by the losing side.
const LOSER_CASUALTY_SHARE: f64 = 0.6;
const STALEMATE_CHANCE: f64 = 0.25;

pub(super) fn build(ctx: &mut SimulationContext, year: u32) -> Option<u64> {
    let hostile_pairs = ctx.relationships.pairs_where(|level| {
        matches!(level, RelationshipLevel::Hostile | RelationshipLevel::Tense)
    });
    if hostile_pairs.is_empty() {
        return None;
    }
    // Prefer pairs that actually share a border.
    let bordered: Vec<(u64, u64)> = hostile_pairs
        .iter()
        .copied()
        .filter(|&(a, b)| !territory::border_hexes(&ctx.civilizations, a, b).is_empty())
        .collect();
    let pool = if bordered.is_empty() { &hostile_pairs } else { &bordered };
    let (a, b) = pool[ctx.rng.random_range(0..pool.len())];
    let (attacker, defender) = if ctx.rng.random_bool(0.5) { (a, b) } else { (b, a) };

    let attacker_pop = ctx.civilizations[&attacker].population.max(1) as u64;
    let defender_pop = ctx.civilizations[&defender].population.max(1) as u64;
    let combined = attacker_pop + defender_pop;

    let winner = if ctx.rng.random_bool(STALEMATE_CHANCE) {
        None
    } else {
        // Outcome weighted by relative population.
        let roll = ctx.rng.random_range(0..combined);
        Some(if roll < attacker_pop { attacker } else { defender })
    };

    let casualty_rate = ctx.rng.random_range(0.01..=0.15);
    let casualties = (combined as f64 * casualty_rate) as u32;
    let duration_years = ctx.rng.random_range(1..=10);
    let significance = ctx.rng.random_range(6..=9);

    let attacker_name = ctx.civilizations[&attacker].name.clone();
    let defender_name = ctx.civilizations[&defender].name.clone();
    let description = match winner {
        Some(w) if w == attacker => {
            format!("{attacker_name} wages war on {defender_name} and prevails")
        }
        Some(_) => format!("{attacker_name} wages war on {defender_name} and is repelled"),
        None => format!("{attacker_name} wages war on {defender_name} to a bloody stalemate"),
    };

    let participants = ruler_participants(ctx, &[attacker, defender], year);
    let event_id = ctx.add_event(
        year,
        significance,
        description,
        vec![attacker, defender],
        participants,
        casualties,
        EventDetails::War {
            attacker,
            defender,
            winner,
            duration_years,
        },
    );

    let declaration =
        ctx.relationships
            .set(attacker, defender, RelationshipLevel::AtWar, "war declared", event_id);

    let (territorial_changes, resolution) = match winner {
        Some(winner_id) => {
            let loser_id = if winner_id == attacker { defender } else { attacker };
            let changes = territory::transfer(
                &mut ctx.civilizations,
                winner_id,
                loser_id,
                territory::DEFAULT_TRANSFER_FRACTION,
                "territory ceded after defeat",
                event_id,
            );
            apply_casualties(ctx, winner_id, loser_id, casualties, LOSER_CASUALTY_SHARE);
            let resolution = ctx.relationships.set(
                attacker,
                defender,
                RelationshipLevel::Hostile,
                "war concluded in defeat",
                event_id,
            );
            (changes, resolution)
        }
        None => {
            apply_casualties(ctx, attacker, defender, casualties, 0.5);
            let resolution = ctx.relationships.set(
                attacker,
                defender,
                RelationshipLevel::Tense,
                "exhausted truce",
                event_id,
            );
            (Vec::new(), resolution)
        }
    };

    let event = ctx.events.get_mut(&event_id).expect("just created");
    event.relationship_changes.push(declaration);
    event.relationship_changes.push(resolution);
    event.territorial_changes = territorial_changes;
    Some(event_id)
}

fn apply_casualties(
    ctx: &mut SimulationContext,
    favored: u64,
    other: u64,
    casualties: u32,
    other_share: f64,
) {
    let other_losses = (casualties as f64 * other_share) as u32;
    let favored_losses = casualties.saturating_sub(other_losses);
    if let Some(civ) = ctx.civilizations.get_mut(&favored) {
        civ.population = civ.population.saturating_sub(favored_losses);
    }
    if let Some(civ) = ctx.civilizations.get_mut(&other) {
        civ.population = civ.population.saturating_sub(other_losses);
    }
}
