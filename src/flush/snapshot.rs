use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::id::IdGenerator;
use crate::model::SimulationContext;
use crate::model::civilization::Civilization;
use crate::model::event::HistoricalEvent;
use crate::model::figure::HistoricalFigure;
use crate::model::relationship::RelationshipLevel;

/// One ledger row in persisted form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipState {
    pub civ_a: u64,
    pub civ_b: u64,
    pub level: RelationshipLevel,
}

/// Field-for-field persisted form of a simulation.
///
/// Every collection defaults to empty on load so datasets written before a
/// field existed (for example, one with no `historical_events` key) still
/// deserialize. Structurally invalid required fields are a fatal load error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub seed: u64,
    #[serde(default)]
    pub start_year: u32,
    #[serde(default)]
    pub current_year: u32,
    #[serde(default)]
    pub civilizations: Vec<Civilization>,
    #[serde(default)]
    pub historical_figures: Vec<HistoricalFigure>,
    #[serde(default)]
    pub historical_events: Vec<HistoricalEvent>,
    #[serde(default)]
    pub relationships: Vec<RelationshipState>,
}

impl SimulationSnapshot {
    pub fn from_context(ctx: &SimulationContext) -> Self {
        Self {
            seed: ctx.seed,
            start_year: ctx.start_year,
            current_year: ctx.current_year,
            civilizations: ctx.civilizations.values().cloned().collect(),
            historical_figures: ctx.figures.values().cloned().collect(),
            historical_events: ctx.events.values().cloned().collect(),
            relationships: ctx
                .relationships
                .iter()
                .map(|((civ_a, civ_b), level)| RelationshipState { civ_a, civ_b, level })
                .collect(),
        }
    }

    /// Rebuild a context from persisted state. The RNG is reseeded from the
    /// stored seed and the ID generator resumes past every known ID, so a
    /// restored checkpoint can keep issuing valid IDs.
    pub fn into_context(self) -> SimulationContext {
        let mut ctx = SimulationContext::new(self.seed, self.start_year);
        ctx.current_year = self.current_year.max(self.start_year);

        let mut max_id = 0u64;
        for civ in self.civilizations {
            max_id = max_id.max(civ.id);
            ctx.civilizations.insert(civ.id, civ);
        }
        for figure in self.historical_figures {
            max_id = max_id.max(figure.id);
            ctx.figures.insert(figure.id, figure);
        }
        for event in self.historical_events {
            max_id = max_id.max(event.id);
            ctx.events.insert(event.id, event);
        }
        for state in self.relationships {
            ctx.relationships.load_level(state.civ_a, state.civ_b, state.level);
        }
        ctx.id_gen = IdGenerator::starting_from(max_id + 1);
        ctx
    }
}

/// Serialize a context to a JSON document.
pub fn to_json(ctx: &SimulationContext) -> Result<String, SimError> {
    Ok(serde_json::to_string_pretty(&SimulationSnapshot::from_context(ctx))?)
}

/// Deserialize a context from a JSON document.
pub fn from_json(json: &str) -> Result<SimulationContext, SimError> {
    let snapshot: SimulationSnapshot = serde_json::from_str(json)?;
    Ok(snapshot.into_context())
}

/// Write a snapshot file.
pub fn save(ctx: &SimulationContext, path: &Path) -> Result<(), SimError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &SimulationSnapshot::from_context(ctx))?;
    Ok(())
}

/// Read a snapshot file back into a context.
pub fn load(path: &Path) -> Result<SimulationContext, SimError> {
    let reader = BufReader::new(File::open(path)?);
    let snapshot: SimulationSnapshot = serde_json::from_reader(reader)?;
    Ok(snapshot.into_context())
}
