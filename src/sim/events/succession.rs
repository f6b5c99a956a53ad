use rand::Rng;

use crate::model::SimulationContext;
use crate::model::event::{EventDetails, SuccessionKind};

const KIND_WEIGHTS: [(SuccessionKind, u32); 5] = [
    (SuccessionKind::Peaceful, 35),
    (SuccessionKind::Contested, 25),
    (SuccessionKind::Coup, 15),
    (SuccessionKind::Assassination, 15),
    (SuccessionKind::CivilWar, 10),
];

pub(super) fn build(ctx: &mut SimulationContext, year: u32) -> Option<u64> {
    // Only civilizations with living figures can change rulers.
    let candidates: Vec<u64> = ctx
        .civilizations
        .keys()
        .copied()
        .filter(|&civ| !ctx.living_figures_of(civ, year).is_empty())
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let civ = candidates[ctx.rng.random_range(0..candidates.len())];

    let total: u32 = KIND_WEIGHTS.iter().map(|(_, w)| w).sum();
    let mut roll = ctx.rng.random_range(0..total);
    let mut kind = SuccessionKind::Peaceful;
    for (candidate_kind, weight) in KIND_WEIGHTS {
        if roll < weight {
            kind = candidate_kind;
            break;
        }
        roll -= weight;
    }

    let (casualty_rate, duration_years, significance, ruler_dies) = match kind {
        SuccessionKind::Peaceful => (0.0, 1, ctx.rng.random_range(3..=5), false),
        SuccessionKind::Contested => (
            ctx.rng.random_range(0.0..=0.01),
            ctx.rng.random_range(1..=2),
            ctx.rng.random_range(4..=6),
            false,
        ),
        SuccessionKind::Coup => (
            ctx.rng.random_range(0.005..=0.02),
            1,
            ctx.rng.random_range(5..=7),
            true,
        ),
        SuccessionKind::Assassination => (
            ctx.rng.random_range(0.0..=0.005),
            1,
            ctx.rng.random_range(6..=8),
            true,
        ),
        SuccessionKind::CivilWar => (
            ctx.rng.random_range(0.05..=0.20),
            ctx.rng.random_range(2..=8),
            ctx.rng.random_range(7..=9),
            false,
        ),
    };

    let previous_ruler = ctx.ruler_of(civ, year);
    let new_ruler = ctx
        .figures
        .values()
        .filter(|f| f.civilization == civ && f.is_alive(year) && Some(f.id) != previous_ruler)
        .max_by_key(|f| (f.cultural_significance, std::cmp::Reverse(f.id)))
        .map(|f| f.id);

    let population = ctx.civilizations[&civ].population;
    let casualties = (population as f64 * casualty_rate) as u32;

    let civ_name = ctx.civilizations[&civ].name.clone();
    let description = match kind {
        SuccessionKind::Peaceful => format!("The crown of {civ_name} passes peacefully"),
        SuccessionKind::Contested => format!("Rival claimants contest the throne of {civ_name}"),
        SuccessionKind::Coup => format!("A coup topples the ruler of {civ_name}"),
        SuccessionKind::Assassination => format!("The ruler of {civ_name} is assassinated"),
        SuccessionKind::CivilWar => format!("Civil war over the succession tears {civ_name} apart"),
    };

    let participants: Vec<u64> = previous_ruler.into_iter().chain(new_ruler).collect();
    let event_id = ctx.add_event(
        year,
        significance,
        description,
        vec![civ],
        participants,
        casualties,
        EventDetails::Succession {
            civilization: civ,
            kind,
            previous_ruler,
            new_ruler,
            duration_years,
        },
    );

    if ruler_dies
        && let Some(ruler_id) = previous_ruler
        && let Some(ruler) = ctx.figures.get_mut(&ruler_id)
    {
        ruler.death_year = Some(year);
    }
    if let Some(heir_id) = new_ruler
        && let Some(heir) = ctx.figures.get_mut(&heir_id)
    {
        heir.cultural_significance = heir.cultural_significance.max(7);
    }
    if let Some(civ_record) = ctx.civilizations.get_mut(&civ) {
        civ_record.population = civ_record.population.saturating_sub(casualties);
    }
    Some(event_id)
}
