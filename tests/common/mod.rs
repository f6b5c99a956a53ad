use std::collections::BTreeSet;

use saga_gen::model::event::EventDetails;
use saga_gen::model::figure::HistoricalFigure;
use saga_gen::{
    Civilization, CulturalValue, GovernmentType, HexCoord, Race, RelationshipLevel, Sex,
    SimulationContext, SocialClass,
};

/// A small hand-built world: 2 civilizations, 3 figures, 2 events, one
/// seeded relationship. Deterministic by construction.
pub fn build_test_context() -> SimulationContext {
    let mut ctx = SimulationContext::new(7, 100);
    ctx.current_year = 120;

    let ashvale = ctx.add_civilization(Civilization {
        id: 0,
        name: "Kingdom of Ashvale".to_string(),
        race: Race::Human,
        founded_year: 98,
        government: GovernmentType::Monarchy,
        cultural_values: vec![CulturalValue::Order, CulturalValue::Honor],
        territory: BTreeSet::from([HexCoord::new(0, 0), HexCoord::new(1, 0)]),
        population: 2_000,
    });
    let thornwood = ctx.add_civilization(Civilization {
        id: 0,
        name: "Conclave of Thornwood".to_string(),
        race: Race::Elf,
        founded_year: 97,
        government: GovernmentType::Magocracy,
        cultural_values: vec![CulturalValue::Nature, CulturalValue::Knowledge],
        territory: BTreeSet::from([HexCoord::new(2, 0)]),
        population: 1_000,
    });

    let queen = ctx.add_figure(HistoricalFigure {
        id: 0,
        name: "Roswen Greymoor".to_string(),
        race: Race::Human,
        sex: Sex::Female,
        civilization: ashvale,
        birth_year: 70,
        death_year: None,
        mother: None,
        father: None,
        spouse: None,
        children: vec![],
        participated_in_events: vec![],
        social_class: SocialClass::Royal,
        cultural_significance: 9,
    });
    let consort = ctx.add_figure(HistoricalFigure {
        id: 0,
        name: "Edmund Hartwood".to_string(),
        race: Race::Human,
        sex: Sex::Male,
        civilization: ashvale,
        birth_year: 68,
        death_year: None,
        mother: None,
        father: None,
        spouse: None,
        children: vec![],
        participated_in_events: vec![],
        social_class: SocialClass::Noble,
        cultural_significance: 5,
    });
    let archmage = ctx.add_figure(HistoricalFigure {
        id: 0,
        name: "Thalviel Silverleaf".to_string(),
        race: Race::Elf,
        sex: Sex::Male,
        civilization: thornwood,
        birth_year: 0,
        death_year: None,
        mother: None,
        father: None,
        spouse: None,
        children: vec![],
        participated_in_events: vec![],
        social_class: SocialClass::Noble,
        cultural_significance: 8,
    });
    saga_gen::sim::genealogy::link_spouse(&mut ctx.figures, queen, consort, 110).unwrap();

    let pact = ctx.add_event(
        110,
        5,
        "Ashvale and Thornwood sign a pact".to_string(),
        vec![ashvale, thornwood],
        vec![queen, archmage],
        0,
        EventDetails::Alliance { civ_a: ashvale, civ_b: thornwood },
    );
    let change = ctx
        .relationships
        .set(ashvale, thornwood, RelationshipLevel::Friendly, "pact signed", pact);
    ctx.events.get_mut(&pact).unwrap().relationship_changes.push(change);

    ctx.add_event(
        118,
        4,
        "A flood sweeps the Ashvale lowlands".to_string(),
        vec![ashvale],
        vec![queen],
        150,
        EventDetails::Disaster {
            kind: saga_gen::DisasterKind::Flood,
            severity: saga_gen::Severity::Moderate,
            affected: vec![ashvale],
        },
    );

    ctx
}
