use rand::Rng;

use super::genealogy;
use super::names;
use crate::model::SimulationContext;
use crate::model::figure::HistoricalFigure;
use crate::model::race::Sex;

/// Annual chance that a fertile spouse pair produces a child.
const BIRTH_CHANCE: f64 = 0.15;
/// Annual chance that an eligible unmarried figure seeks a spouse.
const MARRIAGE_CHANCE: f64 = 0.10;
/// Flat annual hazard applied at any age, on top of the old-age brackets.
const EARLY_DEATH_CHANCE: f64 = 0.01;
/// Chance that a newborn's social class shifts one rank from its mother's.
const CLASS_MOBILITY_CHANCE: f64 = 0.10;

/// Annual mortality for `age` given a race lifespan `l`.
///
/// Brackets are mutually exclusive; the flat early-death hazard is added on
/// top and the result capped at certainty. Everything left is the explicit
/// survival residual.
fn mortality_chance(age: u32, l: u32) -> f64 {
    let bracket = if age >= l {
        0.50
    } else if age * 10 >= l * 9 {
        0.20
    } else if age * 10 >= l * 8 {
        0.10
    } else {
        0.0
    };
    (bracket + EARLY_DEATH_CHANCE).min(1.0)
}

/// One year of demographic simulation: births, then deaths, then marriages,
/// in that fixed order so replays with the same seed reproduce identical
/// draws. Rejected genealogy links are logged and skipped.
pub fn simulate_year(ctx: &mut SimulationContext, year: u32) {
    births(ctx, year);
    deaths(ctx, year);
    marriages(ctx, year);
}

fn births(ctx: &mut SimulationContext, year: u32) {
    // Collect fertile couples keyed by the mother, in ID order.
    let couples: Vec<(u64, u64)> = ctx
        .figures
        .values()
        .filter(|f| f.sex == Sex::Female && f.is_alive(year))
        .filter_map(|mother| {
            let father = ctx.figures.get(&mother.spouse?)?;
            if !father.is_alive(year) {
                return None;
            }
            let fertile = |f: &HistoricalFigure| {
                let (min, max) = f.race.fertility_range();
                (min..=max).contains(&f.age(year))
            };
            (fertile(mother) && fertile(father)).then_some((mother.id, father.id))
        })
        .collect();

    for (mother_id, father_id) in couples {
        if !ctx.rng.random_bool(BIRTH_CHANCE) {
            continue;
        }
        let mother = &ctx.figures[&mother_id];
        let race = mother.race;
        let civilization = mother.civilization;
        let mut social_class = mother.social_class;
        if ctx.rng.random_bool(CLASS_MOBILITY_CHANCE) {
            let up = ctx.rng.random_bool(0.5);
            social_class = social_class.shifted(up);
        }
        let sex = if ctx.rng.random_bool(0.5) { Sex::Male } else { Sex::Female };
        let name = names::figure_name(&mut ctx.rng, race);
        let cultural_significance = ctx.rng.random_range(1..=6);

        let child_id = ctx.add_figure(HistoricalFigure {
            id: 0,
            name,
            race,
            sex,
            civilization,
            birth_year: year,
            death_year: None,
            mother: None,
            father: None,
            spouse: None,
            children: vec![],
            participated_in_events: vec![],
            social_class,
            cultural_significance,
        });
        if let Err(err) = genealogy::link_parents(&mut ctx.figures, child_id, mother_id, father_id)
        {
            tracing::warn!(year, child_id, mother_id, father_id, %err, "parent link rejected");
        }
    }
}

fn deaths(ctx: &mut SimulationContext, year: u32) {
    let living: Vec<u64> = ctx
        .figures
        .values()
        .filter(|f| f.is_alive(year))
        .map(|f| f.id)
        .collect();

    for id in living {
        let figure = &ctx.figures[&id];
        let chance = mortality_chance(figure.age(year), figure.race.lifespan());
        if ctx.rng.random_bool(chance) {
            ctx.figures.get_mut(&id).expect("collected above").death_year = Some(year);
        }
    }
}

fn marriages(ctx: &mut SimulationContext, year: u32) {
    let eligible = |f: &HistoricalFigure, figures: &std::collections::BTreeMap<u64, _>| {
        f.is_alive(year)
            && f.age(year) >= f.race.adult_age()
            && f.spouse
                .is_none_or(|s| !figures.get(&s).is_some_and(|s: &HistoricalFigure| s.is_alive(year)))
    };

    let candidates: Vec<u64> = ctx
        .figures
        .values()
        .filter(|f| eligible(f, &ctx.figures))
        .map(|f| f.id)
        .collect();

    let mut matched: Vec<u64> = Vec::new();
    for &id in &candidates {
        if matched.contains(&id) {
            continue;
        }
        if !ctx.rng.random_bool(MARRIAGE_CHANCE) {
            continue;
        }
        let seeker = &ctx.figures[&id];
        let partner = candidates.iter().copied().find(|&other| {
            other != id && !matched.contains(&other) && {
                let f = &ctx.figures[&other];
                f.civilization == seeker.civilization && f.sex != seeker.sex
            }
        });
        let Some(partner_id) = partner else {
            tracing::debug!(year, figure = id, "no eligible marriage partner");
            continue;
        };
        match genealogy::link_spouse(&mut ctx.figures, id, partner_id, year) {
            Ok(()) => {
                matched.push(id);
                matched.push(partner_id);
            }
            Err(err) => {
                tracing::warn!(year, a = id, b = partner_id, %err, "spouse link rejected");
            }
        }
    }
}
