use serde::Serialize;
use sqlx::PgPool;

use crate::model::SimulationContext;

/// Load an entire simulation into Postgres using COPY FROM STDIN (text format).
///
/// Order respects FK constraints: civilizations → figures → events →
/// event_participants → relationships.
pub async fn load_context(pool: &PgPool, ctx: &SimulationContext) -> Result<(), sqlx::Error> {
    // Civilizations
    {
        let mut buf = String::new();
        for civ in ctx.civilizations.values() {
            buf.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                civ.id,
                escape(&civ.name),
                civ.race.as_str(),
                civ.government.as_str(),
                civ.founded_year,
                civ.population,
                escape(&json_str(&civ.cultural_values)),
                escape(&json_str(&civ.territory)),
            ));
        }
        copy_in(pool, include_str!("../../sql/copy_civilizations.sql"), &buf).await?;
    }

    // Figures
    {
        let mut buf = String::new();
        for figure in ctx.figures.values() {
            buf.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                figure.id,
                escape(&figure.name),
                figure.race.as_str(),
                figure.sex.as_str(),
                figure.civilization,
                figure.birth_year,
                opt_u32(figure.death_year),
                opt_u64(figure.mother),
                opt_u64(figure.father),
                opt_u64(figure.spouse),
                figure.social_class.as_str(),
                figure.cultural_significance,
            ));
        }
        copy_in(pool, include_str!("../../sql/copy_figures.sql"), &buf).await?;
    }

    // Events (before participants due to FK)
    {
        let mut buf = String::new();
        for event in ctx.events.values() {
            buf.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                event.id,
                event.year,
                event.category().as_str(),
                event.significance,
                event.casualties,
                escape(&event.description),
                escape(&json_str(event)),
            ));
        }
        copy_in(pool, include_str!("../../sql/copy_events.sql"), &buf).await?;
    }

    // Event participants
    {
        let mut buf = String::new();
        for event in ctx.events.values() {
            for figure_id in &event.participant_figures {
                buf.push_str(&format!("{}\t{}\n", event.id, figure_id));
            }
        }
        copy_in(pool, include_str!("../../sql/copy_event_participants.sql"), &buf).await?;
    }

    // Relationship ledger
    {
        let mut buf = String::new();
        for ((civ_a, civ_b), level) in ctx.relationships.iter() {
            buf.push_str(&format!("{civ_a}\t{civ_b}\t{}\n", level.as_str()));
        }
        copy_in(pool, include_str!("../../sql/copy_relationships.sql"), &buf).await?;
    }

    Ok(())
}

/// Execute a COPY FROM STDIN with the given text-format payload.
async fn copy_in(pool: &PgPool, statement: &str, data: &str) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let mut copy = conn.copy_in_raw(statement).await?;
    copy.send(data.as_bytes()).await?;
    copy.finish().await?;
    Ok(())
}

/// Escape a string for Postgres COPY text format.
/// Backslash must be escaped first, then the special whitespace characters.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an optional number as a COPY text value (`\N` for NULL).
fn opt_u32(v: Option<u32>) -> String {
    match v {
        Some(n) => n.to_string(),
        None => "\\N".to_string(),
    }
}

fn opt_u64(v: Option<u64>) -> String {
    match v {
        Some(n) => n.to_string(),
        None => "\\N".to_string(),
    }
}

/// Serialize a value to its JSON text form for a JSONB column.
fn json_str<T: Serialize>(val: &T) -> String {
    serde_json::to_string(val).expect("value serialization")
}
