use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::civilization::Civilization;
use super::event::{EventDetails, HistoricalEvent};
use super::figure::HistoricalFigure;
use super::relationship::RelationshipLedger;
use crate::id::IdGenerator;

/// The single mutable state container for one simulation run.
///
/// Owns the seeded RNG and every top-level collection; other components
/// receive it by mutable reference for the duration of a call and never
/// retain it. All collections are ordered so iteration order (and hence RNG
/// draw order) is deterministic for a given seed.
#[derive(Debug)]
pub struct SimulationContext {
    pub seed: u64,
    pub start_year: u32,
    pub current_year: u32,
    pub rng: SmallRng,
    pub id_gen: IdGenerator,
    pub civilizations: BTreeMap<u64, Civilization>,
    pub figures: BTreeMap<u64, HistoricalFigure>,
    pub events: BTreeMap<u64, HistoricalEvent>,
    pub relationships: RelationshipLedger,
}

impl SimulationContext {
    pub fn new(seed: u64, start_year: u32) -> Self {
        Self {
            seed,
            start_year,
            current_year: start_year,
            rng: SmallRng::seed_from_u64(seed),
            id_gen: IdGenerator::new(),
            civilizations: BTreeMap::new(),
            figures: BTreeMap::new(),
            events: BTreeMap::new(),
            relationships: RelationshipLedger::new(),
        }
    }

    /// Insert a civilization, assigning it a unique ID. Returns the ID.
    pub fn add_civilization(&mut self, mut civ: Civilization) -> u64 {
        let id = self.id_gen.next_id();
        civ.id = id;
        self.civilizations.insert(id, civ);
        id
    }

    /// Insert a figure, assigning it a unique ID. Returns the ID.
    pub fn add_figure(&mut self, mut figure: HistoricalFigure) -> u64 {
        let id = self.id_gen.next_id();
        figure.id = id;
        self.figures.insert(id, figure);
        id
    }

    /// Append an event to the log, assigning it a monotonic ID, and record
    /// participation on every linked figure. Returns the ID.
    ///
    /// # Panics
    /// Panics if a participant figure does not exist; builders only link
    /// figures they just read out of this context.
    pub fn add_event(
        &mut self,
        year: u32,
        significance: u8,
        description: String,
        primary_civilizations: Vec<u64>,
        participant_figures: Vec<u64>,
        casualties: u32,
        details: EventDetails,
    ) -> u64 {
        let id = self.id_gen.next_id();
        for &fid in &participant_figures {
            let figure = self
                .figures
                .get_mut(&fid)
                .unwrap_or_else(|| panic!("add_event: participant figure {fid} not found"));
            figure.participated_in_events.push(id);
        }
        self.events.insert(
            id,
            HistoricalEvent {
                id,
                year,
                significance,
                description,
                primary_civilizations,
                participant_figures,
                relationship_changes: Vec::new(),
                territorial_changes: Vec::new(),
                casualties,
                details,
            },
        );
        id
    }

    /// Living figures of a civilization at `year`, in ID order.
    pub fn living_figures_of(&self, civ_id: u64, year: u32) -> Vec<u64> {
        self.figures
            .values()
            .filter(|f| f.civilization == civ_id && f.is_alive(year))
            .map(|f| f.id)
            .collect()
    }

    /// The most significant living figure of a civilization (ties broken by
    /// lowest ID), typically treated as its ruler.
    pub fn ruler_of(&self, civ_id: u64, year: u32) -> Option<u64> {
        self.figures
            .values()
            .filter(|f| f.civilization == civ_id && f.is_alive(year))
            .max_by_key(|f| (f.cultural_significance, std::cmp::Reverse(f.id)))
            .map(|f| f.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::EventDetails;
    use crate::model::figure::SocialClass;
    use crate::model::government::GovernmentType;
    use crate::model::race::{Race, Sex};

    fn civ(name: &str) -> Civilization {
        Civilization {
            id: 0,
            name: name.to_string(),
            race: Race::Human,
            founded_year: 0,
            government: GovernmentType::Monarchy,
            cultural_values: vec![],
            territory: Default::default(),
            population: 1_000,
        }
    }

    fn figure(civ_id: u64, birth_year: u32, significance: u8) -> HistoricalFigure {
        HistoricalFigure {
            id: 0,
            name: "Test".to_string(),
            race: Race::Human,
            sex: Sex::Female,
            civilization: civ_id,
            birth_year,
            death_year: None,
            mother: None,
            father: None,
            spouse: None,
            children: vec![],
            participated_in_events: vec![],
            social_class: SocialClass::Noble,
            cultural_significance: significance,
        }
    }

    #[test]
    fn ids_shared_across_record_types() {
        let mut ctx = SimulationContext::new(1, 0);
        let civ_id = ctx.add_civilization(civ("A"));
        let fig_id = ctx.add_figure(figure(civ_id, 0, 5));
        let ev_id = ctx.add_event(
            0,
            4,
            "pact".to_string(),
            vec![civ_id],
            vec![],
            0,
            EventDetails::Alliance { civ_a: civ_id, civ_b: civ_id },
        );
        assert!(civ_id < fig_id && fig_id < ev_id);
        assert_eq!(ctx.civilizations[&civ_id].id, civ_id);
        assert_eq!(ctx.figures[&fig_id].id, fig_id);
        assert_eq!(ctx.events[&ev_id].id, ev_id);
    }

    #[test]
    fn event_ids_monotonic() {
        let mut ctx = SimulationContext::new(1, 0);
        let c = ctx.add_civilization(civ("A"));
        let mut last = 0;
        for year in 0..5 {
            let id = ctx.add_event(
                year,
                3,
                "pact".to_string(),
                vec![c],
                vec![],
                0,
                EventDetails::Alliance { civ_a: c, civ_b: c },
            );
            assert!(id > last);
            last = id;
        }
    }

    #[test]
    fn add_event_records_participation() {
        let mut ctx = SimulationContext::new(1, 0);
        let c = ctx.add_civilization(civ("A"));
        let f = ctx.add_figure(figure(c, 0, 5));
        let ev = ctx.add_event(
            10,
            5,
            "coronation".to_string(),
            vec![c],
            vec![f],
            0,
            EventDetails::Succession {
                civilization: c,
                kind: crate::model::event::SuccessionKind::Peaceful,
                previous_ruler: None,
                new_ruler: Some(f),
                duration_years: 1,
            },
        );
        assert_eq!(ctx.figures[&f].participated_in_events, vec![ev]);
        assert_eq!(ctx.events[&ev].participant_figures, vec![f]);
    }

    #[test]
    fn living_figures_excludes_dead_and_unborn() {
        let mut ctx = SimulationContext::new(1, 0);
        let c = ctx.add_civilization(civ("A"));
        let alive = ctx.add_figure(figure(c, 10, 5));
        let unborn = ctx.add_figure(figure(c, 90, 5));
        let dead_id = ctx.add_figure(figure(c, 0, 5));
        ctx.figures.get_mut(&dead_id).unwrap().death_year = Some(30);

        let living = ctx.living_figures_of(c, 50);
        assert!(living.contains(&alive));
        assert!(!living.contains(&unborn));
        assert!(!living.contains(&dead_id));
    }

    #[test]
    fn ruler_is_most_significant_living_figure() {
        let mut ctx = SimulationContext::new(1, 0);
        let c = ctx.add_civilization(civ("A"));
        let minor = ctx.add_figure(figure(c, 0, 3));
        let major = ctx.add_figure(figure(c, 0, 9));
        assert_eq!(ctx.ruler_of(c, 10), Some(major));

        ctx.figures.get_mut(&major).unwrap().death_year = Some(20);
        assert_eq!(ctx.ruler_of(c, 30), Some(minor));
        assert_eq!(ctx.ruler_of(999, 30), None);
    }

    #[test]
    fn same_seed_same_draws() {
        use rand::Rng;
        let mut a = SimulationContext::new(77, 0);
        let mut b = SimulationContext::new(77, 0);
        let draws_a: Vec<u32> = (0..8).map(|_| a.rng.random_range(0..1000)).collect();
        let draws_b: Vec<u32> = (0..8).map(|_| b.rng.random_range(0..1000)).collect();
        assert_eq!(draws_a, draws_b);
    }
}
