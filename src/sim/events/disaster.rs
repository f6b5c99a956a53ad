use rand::Rng;
use rand::seq::SliceRandom;

use super::ruler_participants;
use crate::model::SimulationContext;
use crate::model::event::{DisasterKind, EventDetails, Severity};

fn roll_severity(roll: u32) -> Severity {
    match roll {
        0..=49 => Severity::Minor,
        50..=79 => Severity::Moderate,
        80..=94 => Severity::Major,
        _ => Severity::Catastrophic,
    }
}

fn casualty_rate_range(severity: Severity) -> (f64, f64) {
    match severity {
        Severity::Minor => (0.001, 0.01),
        Severity::Moderate => (0.01, 0.05),
        Severity::Major => (0.05, 0.15),
        Severity::Catastrophic => (0.15, 0.30),
    }
}

fn significance_range(severity: Severity) -> (u8, u8) {
    match severity {
        Severity::Minor => (2, 3),
        Severity::Moderate => (4, 5),
        Severity::Major => (6, 8),
        Severity::Catastrophic => (9, 10),
    }
}

pub(super) fn build(ctx: &mut SimulationContext, year: u32) -> Option<u64> {
    let mut ids: Vec<u64> = ctx.civilizations.keys().copied().collect();
    if ids.is_empty() {
        return None;
    }
    let kind = DisasterKind::ALL[ctx.rng.random_range(0..DisasterKind::ALL.len())];
    let severity = roll_severity(ctx.rng.random_range(0..100));
    let count = (ctx.rng.random_range(1..=3) as usize).min(ids.len());
    ids.shuffle(&mut ctx.rng);
    let affected: Vec<u64> = ids.into_iter().take(count).collect();

    let (rate_min, rate_max) = casualty_rate_range(severity);
    let mut casualties = 0u32;
    for &civ in &affected {
        let rate = ctx.rng.random_range(rate_min..=rate_max);
        let losses = (ctx.civilizations[&civ].population as f64 * rate) as u32;
        casualties += losses;
        let record = ctx.civilizations.get_mut(&civ).expect("collected above");
        record.population = record.population.saturating_sub(losses);
    }

    let (sig_min, sig_max) = significance_range(severity);
    let significance = ctx.rng.random_range(sig_min..=sig_max);
    let first_name = ctx.civilizations[&affected[0]].name.clone();
    let description = if affected.len() == 1 {
        format!("A {severity} {kind} strikes {first_name}")
    } else {
        format!("A {severity} {kind} ravages {first_name} and its neighbors")
    };

    let participants = ruler_participants(ctx, &affected, year);
    let event_id = ctx.add_event(
        year,
        significance,
        description,
        affected.clone(),
        participants,
        casualties,
        EventDetails::Disaster { kind, severity, affected },
    );
    Some(event_id)
}
