use volition::priority::{GLOBAL_DEFAULT, TaskCategory, testing::StaticWorldSignals};

use crate::{agent, default_engine, engine};

#[test]
fn given_agent_without_free_will_when_evaluating_then_manual_level_is_remapped() {
    let engine = default_engine();
    let (agent_id, mut signals) = agent("drone");
    signals.free_will = false;
    signals.manual_priorities.insert("cooking".to_string(), 2);

    let priority = engine.evaluate(&agent_id, &signals, &TaskCategory::Cooking);
    assert_eq!(priority.level, 2);
    assert!((priority.value - 0.8).abs() < 1e-6);
    assert!(!priority.disabled);
    assert_eq!(priority.log, ["80% (manually assigned)"]);
}

#[test]
fn given_manual_level_zero_when_evaluating_then_category_stays_off() {
    let engine = default_engine();
    let (agent_id, mut signals) = agent("drone");
    signals.free_will = false;

    let priority = engine.evaluate(&agent_id, &signals, &TaskCategory::Cooking);
    assert_eq!(priority.level, 0);
    assert_eq!(priority.value, 0.0);
    assert!(priority.disabled);
}

#[test]
fn given_failing_free_will_check_when_evaluating_then_global_default_is_assigned() {
    let engine = default_engine();
    let (agent_id, mut signals) = agent("ghost");
    signals.failing.insert("has_free_will".to_string());

    let priority = engine.evaluate(&agent_id, &signals, &TaskCategory::Cooking);
    assert!((priority.value - GLOBAL_DEFAULT).abs() < 1e-6);
    assert_eq!(priority.level, 0);
    assert_eq!(priority.log, ["20% (global default)"]);
}

#[test]
fn given_permanently_unavailable_agent_when_evaluating_then_category_is_disabled_without_scoring() {
    let engine = default_engine();
    let (agent_id, mut signals) = agent("pacifist");
    signals.unavailable_for.insert("hunting".to_string());

    let priority = engine.evaluate(&agent_id, &signals, &TaskCategory::Hunting);
    assert!(priority.disabled);
    assert_eq!(priority.level, 0);
    // already at an off level, so the override leaves no extra log entry
    assert_eq!(priority.log, ["20% (global default)"]);
}

#[test]
fn given_faulting_consideration_when_evaluating_then_rest_of_chain_still_runs() {
    let engine = default_engine();
    let (agent_id, mut signals) = agent("flaky");
    signals.failing.insert("mood_thoughts".to_string());

    let flaky = engine.evaluate(&agent_id, &signals, &TaskCategory::Growing);

    let (steady_id, steady) = agent("steady");
    let baseline = engine.evaluate(&steady_id, &steady, &TaskCategory::Growing);
    // thoughts are empty either way, so skipping the faulty step is a no-op
    assert!((flaky.value - baseline.value).abs() < 1e-6);
    assert_eq!(flaky.level, baseline.level);
}

#[test]
fn given_several_categories_when_evaluating_all_then_results_are_ranked_most_desirable_first() {
    let engine = default_engine();
    let (agent_id, signals) = agent("sable");
    let categories = [
        TaskCategory::Research,
        TaskCategory::Firefighting,
        TaskCategory::Cooking,
        TaskCategory::Hauling,
    ];

    let ranked = engine.evaluate_all(&agent_id, &signals, &categories);
    assert_eq!(ranked.len(), categories.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].value >= pair[1].value);
    }
}

#[test]
fn given_home_area_fire_when_evaluating_firefighting_then_it_wins_outright() {
    let engine = engine(StaticWorldSignals {
        home_area_fire: true,
        ..StaticWorldSignals::default()
    });
    let (agent_id, signals) = agent("sable");

    let fire = engine.evaluate(&agent_id, &signals, &TaskCategory::Firefighting);
    assert_eq!(fire.level, 1);
    assert!(fire.log.contains(&"100% (fire in the home area)".to_string()));

    let growing = engine.evaluate(&agent_id, &signals, &TaskCategory::Growing);
    assert!(growing.value < fire.value);
}

#[test]
fn given_no_emergencies_when_evaluating_firefighting_then_it_idles_at_the_lowest_level() {
    let engine = default_engine();
    let (agent_id, signals) = agent("sable");

    let fire = engine.evaluate(&agent_id, &signals, &TaskCategory::Firefighting);
    // base posture: score zero but force-enabled, so it never switches off
    assert_eq!(fire.value, 0.0);
    assert!(fire.enabled);
    assert_eq!(fire.level, 4);
}

#[test]
fn given_identical_inputs_when_evaluating_twice_then_value_and_log_are_identical() {
    let engine = default_engine();
    let (agent_id, mut signals) = agent("steady");
    signals.average_skill = 12.0;
    signals.idle = true;

    let first = engine.evaluate(&agent_id, &signals, &TaskCategory::Construction);
    let second = engine.evaluate(&agent_id, &signals, &TaskCategory::Construction);
    assert_eq!(first.value, second.value);
    assert_eq!(first.level, second.level);
    assert_eq!(first.log, second.log);
}
