use std::collections::BTreeSet;

use crate::model::SimulationContext;
use crate::model::civilization::Civilization;
use crate::model::event::{EventCategory, HistoricalEvent};
use crate::model::figure::HistoricalFigure;
use crate::model::relationship::RelationshipLevel;

pub fn civilization(ctx: &SimulationContext, id: u64) -> Option<&Civilization> {
    ctx.civilizations.get(&id)
}

pub fn figure(ctx: &SimulationContext, id: u64) -> Option<&HistoricalFigure> {
    ctx.figures.get(&id)
}

pub fn event(ctx: &SimulationContext, id: u64) -> Option<&HistoricalEvent> {
    ctx.events.get(&id)
}

/// Events with `from <= year <= to`, in ID (and therefore chronological)
/// order.
pub fn events_between<'a>(
    ctx: &'a SimulationContext,
    from: u32,
    to: u32,
) -> Vec<&'a HistoricalEvent> {
    ctx.events
        .values()
        .filter(|e| e.year >= from && e.year <= to)
        .collect()
}

/// Events of one category, in ID order.
pub fn events_in_category<'a>(
    ctx: &'a SimulationContext,
    category: EventCategory,
) -> Vec<&'a HistoricalEvent> {
    ctx.events
        .values()
        .filter(|e| e.category() == category)
        .collect()
}

/// Events with significance at or above `min`, in ID order.
pub fn events_with_significance<'a>(
    ctx: &'a SimulationContext,
    min: u8,
) -> Vec<&'a HistoricalEvent> {
    ctx.events
        .values()
        .filter(|e| e.significance >= min)
        .collect()
}

/// All transitive ancestors of a figure.
pub fn ancestors_of(ctx: &SimulationContext, figure_id: u64) -> BTreeSet<u64> {
    let mut ancestors = BTreeSet::new();
    let mut stack: Vec<u64> = Vec::new();
    if let Some(figure) = ctx.figures.get(&figure_id) {
        stack.extend(figure.mother);
        stack.extend(figure.father);
    }
    while let Some(id) = stack.pop() {
        if !ancestors.insert(id) {
            continue;
        }
        if let Some(figure) = ctx.figures.get(&id) {
            stack.extend(figure.mother);
            stack.extend(figure.father);
        }
    }
    ancestors
}

/// All transitive descendants of a figure.
pub fn descendants_of(ctx: &SimulationContext, figure_id: u64) -> BTreeSet<u64> {
    let mut descendants = BTreeSet::new();
    let mut stack: Vec<u64> = ctx
        .figures
        .get(&figure_id)
        .map(|f| f.children.clone())
        .unwrap_or_default();
    while let Some(id) = stack.pop() {
        if !descendants.insert(id) {
            continue;
        }
        if let Some(figure) = ctx.figures.get(&id) {
            stack.extend(figure.children.iter().copied());
        }
    }
    descendants
}

/// Civilizations standing at `level` with the given civilization.
pub fn civilizations_at_level(
    ctx: &SimulationContext,
    civ_id: u64,
    level: RelationshipLevel,
) -> Vec<u64> {
    ctx.civilizations
        .keys()
        .copied()
        .filter(|&other| other != civ_id && ctx.relationships.get(civ_id, other) == level)
        .collect()
}
