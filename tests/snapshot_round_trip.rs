mod common;

use saga_gen::worldgen::placement;
use saga_gen::{SimConfig, flush, simulate};

#[test]
fn hand_built_context_round_trips() {
    let ctx = common::build_test_context();
    let json = flush::to_json(&ctx).unwrap();
    let restored = flush::from_json(&json).unwrap();

    assert_eq!(restored.civilizations, ctx.civilizations);
    assert_eq!(restored.figures, ctx.figures);
    assert_eq!(restored.events, ctx.events);
    assert_eq!(restored.relationships, ctx.relationships);
}

#[test]
fn simulated_world_round_trips_with_cross_references() {
    let config = SimConfig::new(77, 1000, 120).with_target_civilizations(6);
    let mut place = placement::cluster_placement();
    let ctx = simulate(&config, &mut place, None).unwrap();

    let json = flush::to_json(&ctx).unwrap();
    let restored = flush::from_json(&json).unwrap();

    assert_eq!(restored.civilizations.len(), ctx.civilizations.len());
    assert_eq!(restored.figures.len(), ctx.figures.len());
    assert_eq!(restored.events.len(), ctx.events.len());

    // Cross-references survive: figure -> event participation and
    // event -> relationship/territorial change linkage.
    for (id, figure) in &ctx.figures {
        let restored_figure = &restored.figures[id];
        assert_eq!(restored_figure.participated_in_events, figure.participated_in_events);
        for event_id in &figure.participated_in_events {
            assert!(restored.events[event_id].participant_figures.contains(id));
        }
        assert_eq!(restored_figure.mother, figure.mother);
        assert_eq!(restored_figure.father, figure.father);
        assert_eq!(restored_figure.spouse, figure.spouse);
        assert_eq!(restored_figure.children, figure.children);
    }
    for (id, event) in &ctx.events {
        let restored_event = &restored.events[id];
        assert_eq!(restored_event.relationship_changes, event.relationship_changes);
        assert_eq!(restored_event.territorial_changes, event.territorial_changes);
        for change in &restored_event.relationship_changes {
            assert_eq!(change.event_id, *id);
        }
    }

    // Enum fields persist in canonical string form.
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first_civ = &value["civilizations"][0];
    assert!(first_civ["race"].is_string());
    assert!(first_civ["government"].is_string());
    for event in value["historical_events"].as_array().unwrap() {
        assert!(event["category"].is_string());
    }
}

#[test]
fn dataset_without_events_key_loads_as_empty_log() {
    let json = r#"{
        "seed": 3,
        "start_year": 100,
        "civilizations": [{
            "id": 1,
            "name": "Lonely",
            "race": "gnome",
            "founded_year": 100,
            "government": "republic",
            "cultural_values": ["knowledge"],
            "population": 500
        }]
    }"#;
    let restored = flush::from_json(json).unwrap();
    assert_eq!(restored.civilizations.len(), 1);
    assert!(restored.events.is_empty());
    assert!(restored.figures.is_empty());
    assert!(restored.civilizations[&1].territory.is_empty());
}

#[test]
fn second_serialization_is_stable() {
    let ctx = common::build_test_context();
    let first = flush::to_json(&ctx).unwrap();
    let restored = flush::from_json(&first).unwrap();
    let second = flush::to_json(&restored).unwrap();
    assert_eq!(first, second);
}
