use super::config::SimConfig;
use super::{demographics, events};
use crate::error::SimError;
use crate::model::SimulationContext;
use crate::worldgen::founder;
use crate::worldgen::placement::PlacementFn;

/// Snapshot of run progress, emitted every `progress_interval` years and
/// once after the final year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub year: u32,
    pub figures: usize,
    pub events: usize,
}

/// Advance an already-founded context through the configured years.
///
/// Each year runs event generation, then demographics, in that fixed order;
/// a year's mutations are fully applied before the next year begins. Given
/// an identical seed and config, the resulting context is bit-identical.
pub fn run(
    ctx: &mut SimulationContext,
    config: &SimConfig,
    mut progress: Option<&mut dyn FnMut(Progress)>,
) -> Result<(), SimError> {
    config.validate()?;

    for offset in 0..config.num_years {
        let year = config.start_year + offset;
        ctx.current_year = year;
        events::maybe_generate_event(ctx, year);
        demographics::simulate_year(ctx, year);

        if let Some(report) = progress.as_deref_mut()
            && ((offset + 1) % config.progress_interval == 0 || offset + 1 == config.num_years)
        {
            report(Progress {
                year,
                figures: ctx.figures.len(),
                events: ctx.events.len(),
            });
        }
    }
    tracing::info!(
        years = config.num_years,
        figures = ctx.figures.len(),
        events = ctx.events.len(),
        "simulation complete"
    );
    Ok(())
}

/// Found a fresh world from the config and run it to completion.
pub fn simulate(
    config: &SimConfig,
    place: &mut PlacementFn<'_>,
    progress: Option<&mut dyn FnMut(Progress)>,
) -> Result<SimulationContext, SimError> {
    config.validate()?;
    let mut ctx = SimulationContext::new(config.seed, config.start_year);
    founder::found_civilizations(&mut ctx, config.target_civilizations, place)?;
    run(&mut ctx, config, progress)?;
    Ok(ctx)
}
