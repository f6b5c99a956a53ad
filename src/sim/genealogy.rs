use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::figure::HistoricalFigure;
use crate::model::race::Sex;

/// Minimum number of years a parent must have been born before a child.
pub const MIN_GENERATION_GAP: u32 = 15;

/// Rejected genealogy mutations. Callers log these and skip the operation;
/// the figure graph is never left partially linked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("figure {0} not found")]
    UnknownFigure(u64),
    #[error("figure {0} already has parents")]
    AlreadyParented(u64),
    #[error("parents must be one female and one male")]
    ParentSexes,
    #[error("linking parent {parent} to child {child} would create an ancestry cycle")]
    Cycle { child: u64, parent: u64 },
    #[error("parent {parent} born under {MIN_GENERATION_GAP} years before child {child}")]
    GenerationGap { parent: u64, child: u64 },
    #[error("a figure cannot marry itself")]
    SelfSpouse,
    #[error("figure {0} is not alive")]
    NotAlive(u64),
    #[error("figure {0} already has a living spouse")]
    SpouseTaken(u64),
    #[error("figure {0} is under the adult age for its race")]
    Underage(u64),
}

/// Whether `candidate` appears in the ancestor chain of `of`.
pub fn is_ancestor(figures: &BTreeMap<u64, HistoricalFigure>, candidate: u64, of: u64) -> bool {
    let mut stack: Vec<u64> = Vec::new();
    if let Some(figure) = figures.get(&of) {
        stack.extend(figure.mother);
        stack.extend(figure.father);
    }
    let mut seen: Vec<u64> = Vec::new();
    while let Some(id) = stack.pop() {
        if id == candidate {
            return true;
        }
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);
        if let Some(figure) = figures.get(&id) {
            stack.extend(figure.mother);
            stack.extend(figure.father);
        }
    }
    false
}

/// Link a child to its two parents, updating all three records.
///
/// Rejects the link if it would create a cycle, if the child is already
/// parented, if the parent sexes do not form a mother/father pair, or if
/// either parent was born less than `MIN_GENERATION_GAP` years before the
/// child. Rejection leaves every record untouched.
pub fn link_parents(
    figures: &mut BTreeMap<u64, HistoricalFigure>,
    child_id: u64,
    mother_id: u64,
    father_id: u64,
) -> Result<(), LinkError> {
    for id in [child_id, mother_id, father_id] {
        if !figures.contains_key(&id) {
            return Err(LinkError::UnknownFigure(id));
        }
    }
    let child = &figures[&child_id];
    if child.mother.is_some() || child.father.is_some() {
        return Err(LinkError::AlreadyParented(child_id));
    }
    if child_id == mother_id || child_id == father_id || mother_id == father_id {
        return Err(LinkError::ParentSexes);
    }
    if figures[&mother_id].sex != Sex::Female || figures[&father_id].sex != Sex::Male {
        return Err(LinkError::ParentSexes);
    }
    let child_birth = child.birth_year;
    for parent_id in [mother_id, father_id] {
        let parent = &figures[&parent_id];
        if parent.birth_year + MIN_GENERATION_GAP > child_birth {
            return Err(LinkError::GenerationGap {
                parent: parent_id,
                child: child_id,
            });
        }
        // A cycle would require the child to already sit above the parent.
        if is_ancestor(figures, child_id, parent_id) || is_ancestor(figures, parent_id, child_id) {
            return Err(LinkError::Cycle {
                child: child_id,
                parent: parent_id,
            });
        }
    }

    let child = figures.get_mut(&child_id).expect("checked above");
    child.mother = Some(mother_id);
    child.father = Some(father_id);
    for parent_id in [mother_id, father_id] {
        let parent = figures.get_mut(&parent_id).expect("checked above");
        parent.children.push(child_id);
    }
    Ok(())
}

/// Link two figures as spouses at `year`, updating both records.
///
/// Rejects self-marriage, dead parties, parties with a living spouse, and
/// parties under their own race's adult age. A widowed figure may remarry;
/// the deceased partner's stale back-link is cleared so the spouse relation
/// stays bidirectional.
pub fn link_spouse(
    figures: &mut BTreeMap<u64, HistoricalFigure>,
    a_id: u64,
    b_id: u64,
    year: u32,
) -> Result<(), LinkError> {
    if a_id == b_id {
        return Err(LinkError::SelfSpouse);
    }
    for id in [a_id, b_id] {
        let figure = figures.get(&id).ok_or(LinkError::UnknownFigure(id))?;
        if !figure.is_alive(year) {
            return Err(LinkError::NotAlive(id));
        }
        if figure.age(year) < figure.race.adult_age() {
            return Err(LinkError::Underage(id));
        }
        if let Some(spouse_id) = figure.spouse
            && figures.get(&spouse_id).is_some_and(|s| s.is_alive(year))
        {
            return Err(LinkError::SpouseTaken(id));
        }
    }

    for id in [a_id, b_id] {
        let prior = figures[&id].spouse;
        if let Some(widowed_from) = prior
            && let Some(late) = figures.get_mut(&widowed_from)
            && late.spouse == Some(id)
        {
            late.spouse = None;
        }
    }
    figures.get_mut(&a_id).expect("checked above").spouse = Some(b_id);
    figures.get_mut(&b_id).expect("checked above").spouse = Some(a_id);
    Ok(())
}
