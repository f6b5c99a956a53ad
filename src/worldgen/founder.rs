use rand::Rng;

use crate::error::SimError;
use crate::model::SimulationContext;
use crate::model::civilization::{Civilization, POPULATION_PER_HEX};
use crate::model::cultural_value::generate_cultural_values;
use crate::model::figure::{HistoricalFigure, SocialClass};
use crate::model::government::GovernmentType;
use crate::model::race::{Race, Sex};
use crate::sim::names;
use crate::worldgen::placement::{PlacementFn, PlacementPreferences};

const FOUNDING_CLASSES: [SocialClass; 4] = [
    SocialClass::Noble,
    SocialClass::Clergy,
    SocialClass::Merchant,
    SocialClass::Artisan,
];

fn weighted_race(ctx: &mut SimulationContext) -> Race {
    let total: u32 = Race::FOUNDING_WEIGHTS.iter().map(|(_, w)| w).sum();
    let mut roll = ctx.rng.random_range(0..total);
    for (race, weight) in Race::FOUNDING_WEIGHTS {
        if roll < weight {
            return race;
        }
        roll -= weight;
    }
    Race::Human
}

fn weighted_government(ctx: &mut SimulationContext, race: Race) -> GovernmentType {
    let table = GovernmentType::weights_for(race);
    let total: u32 = table.iter().map(|(_, w)| w).sum();
    let mut roll = ctx.rng.random_range(0..total);
    for &(government, weight) in table {
        if roll < weight {
            return government;
        }
        roll -= weight;
    }
    table[0].0
}

/// Found the initial civilizations and their founding figures, then seed
/// the relationship ledger from pairwise compatibility.
///
/// `target` defaults to a draw in [5, 8]. When founding 6 or more, at least
/// 4 distinct races are represented. Returns the new civilization IDs.
pub fn found_civilizations(
    ctx: &mut SimulationContext,
    target: Option<u32>,
    place: &mut PlacementFn<'_>,
) -> Result<Vec<u64>, SimError> {
    let target = match target {
        Some(t) if !(5..=8).contains(&t) => {
            return Err(SimError::Config(format!(
                "target_civilizations {t} outside the supported range 5-8"
            )));
        }
        Some(t) => t,
        None => ctx.rng.random_range(5..=8),
    };

    let mut founded: Vec<u64> = Vec::with_capacity(target as usize);
    let mut races_used: Vec<Race> = Vec::new();

    for index in 0..target {
        // The first four founders of a large world get distinct races.
        let mut race = weighted_race(ctx);
        if target >= 6 && index < 4 {
            let mut attempts = 0;
            while races_used.contains(&race) {
                race = weighted_race(ctx);
                attempts += 1;
                if attempts > 64 {
                    race = Race::ALL
                        .into_iter()
                        .find(|r| !races_used.contains(r))
                        .unwrap_or(race);
                    break;
                }
            }
        }
        races_used.push(race);

        let government = weighted_government(ctx, race);
        let value_count = ctx.rng.random_range(2..=3);
        let cultural_values = generate_cultural_values(&mut ctx.rng, value_count);
        let name = names::civilization_name(&mut ctx.rng, race, government);
        let founded_year = ctx.start_year.saturating_sub(ctx.rng.random_range(0..=5));

        let prefs = PlacementPreferences { target_hexes: ctx.rng.random_range(5..=7) };
        let territory: std::collections::BTreeSet<_> =
            place(race, &prefs).into_iter().collect();
        let population = territory.len() as u32 * POPULATION_PER_HEX;

        let civ_id = ctx.add_civilization(Civilization {
            id: 0,
            name,
            race,
            founded_year,
            government,
            cultural_values,
            territory,
            population,
        });
        founded.push(civ_id);
        found_figures(ctx, civ_id, race, founded_year);
    }

    ctx.relationships.seed_from_compatibility(&ctx.civilizations);
    tracing::info!(count = founded.len(), "civilizations founded");
    Ok(founded)
}

/// Create 3-5 founding figures: one ruler-grade royal and a handful of
/// notables, all old enough to be adults at the founding year.
fn found_figures(ctx: &mut SimulationContext, civ_id: u64, race: Race, founded_year: u32) {
    let count = ctx.rng.random_range(3..=5);
    for index in 0..count {
        let is_ruler = index == 0;
        let social_class = if is_ruler {
            SocialClass::Royal
        } else {
            FOUNDING_CLASSES[ctx.rng.random_range(0..FOUNDING_CLASSES.len())]
        };
        let cultural_significance = if is_ruler {
            ctx.rng.random_range(7..=10)
        } else {
            ctx.rng.random_range(2..=6)
        };
        let sex = if ctx.rng.random_bool(0.5) { Sex::Male } else { Sex::Female };
        let age_at_founding = race.adult_age() + ctx.rng.random_range(0..=15);
        let name = names::figure_name(&mut ctx.rng, race);

        ctx.add_figure(HistoricalFigure {
            id: 0,
            name,
            race,
            sex,
            civilization: civ_id,
            birth_year: founded_year.saturating_sub(age_at_founding),
            death_year: None,
            mother: None,
            father: None,
            spouse: None,
            children: vec![],
            participated_in_events: vec![],
            social_class,
            cultural_significance,
        });
    }
}
