use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::flush::snapshot::RelationshipState;
use crate::model::SimulationContext;

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush the simulation state to JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 4 files:
/// - `civilizations.jsonl` — one Civilization per line
/// - `figures.jsonl` — one HistoricalFigure per line
/// - `events.jsonl` — one HistoricalEvent per line (category tag inline)
/// - `relationships.jsonl` — one ledger row per civilization pair
pub fn flush_to_jsonl(ctx: &SimulationContext, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(&output_dir.join("civilizations.jsonl"), ctx.civilizations.values())?;
    write_jsonl(&output_dir.join("figures.jsonl"), ctx.figures.values())?;
    write_jsonl(&output_dir.join("events.jsonl"), ctx.events.values())?;
    write_jsonl(
        &output_dir.join("relationships.jsonl"),
        ctx.relationships
            .iter()
            .map(|((civ_a, civ_b), level)| RelationshipState { civ_a, civ_b, level }),
    )?;

    Ok(())
}
