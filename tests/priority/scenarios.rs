use volition::priority::{
    AssignmentStore, Passion, SkillRecord, TaskCategory,
    testing::{MemoryAssignmentStore, StaticWorldSignals},
};

use crate::{agent, default_engine, engine};

#[test]
fn given_skilled_and_unskilled_cooks_when_evaluating_then_the_expert_ranks_higher() {
    let engine = default_engine();
    let (expert_id, mut expert) = agent("expert");
    expert.average_skill = 14.0;
    let (novice_id, mut novice) = agent("novice");
    novice.average_skill = 2.0;

    let expert_priority = engine.evaluate(&expert_id, &expert, &TaskCategory::Cooking);
    let novice_priority = engine.evaluate(&novice_id, &novice, &TaskCategory::Cooking);
    assert!(expert_priority.value > novice_priority.value);
    assert!(expert_priority.level < novice_priority.level || novice_priority.level == 0);
}

#[test]
fn given_a_passionate_crafter_when_evaluating_then_passion_shows_up_in_the_report() {
    let engine = default_engine();
    let (agent_id, mut signals) = agent("artist");
    signals.skills = vec![SkillRecord {
        label: "sculpting".to_string(),
        passion: Passion::Major,
    }];
    signals.mood = 0.8;

    let priority = engine.evaluate(&agent_id, &signals, &TaskCategory::Art);
    let report = priority.report();
    assert!(report.contains(&format!("priority level {}", priority.level)));
    assert!(report.contains("major passion for sculpting"));
}

#[test]
fn given_a_downed_colonist_when_evaluating_then_only_patient_work_remains() {
    let engine = default_engine();
    let (agent_id, mut signals) = agent("casualty");
    signals.downed = true;
    signals.health = 0.4;

    let patient = engine.evaluate(&agent_id, &signals, &TaskCategory::Patient);
    assert_eq!(patient.level, 1);
    assert_eq!(patient.value, 1.0);

    let mining = engine.evaluate(&agent_id, &signals, &TaskCategory::Mining);
    assert!(mining.disabled);
    assert_eq!(mining.level, 0);
}

#[test]
fn given_a_food_shortage_when_evaluating_cooking_then_urgency_is_logged() {
    let engine = engine(StaticWorldSignals {
        num_agents: 5,
        total_food: 3.0,
        ..StaticWorldSignals::default()
    });
    let (agent_id, signals) = agent("cook");

    let priority = engine.evaluate(&agent_id, &signals, &TaskCategory::Cooking);
    assert!(priority.log.contains(&"+40% (low food)".to_string()));
}

#[test]
fn given_an_idle_agent_when_evaluating_low_value_work_then_it_is_still_taken() {
    let mut world = StaticWorldSignals::default();
    world
        .assignments
        .insert("mining".to_string(), vec!["someone-else".to_string()]);
    let engine = engine(world);
    let (agent_id, mut signals) = agent("restless");
    signals.idle = true;
    signals.average_skill = 0.0;

    let priority = engine.evaluate(&agent_id, &signals, &TaskCategory::Mining);
    // skill base of 0.1 quantizes to off, but boredom forces it back on
    assert!(priority.enabled);
    assert_eq!(priority.level, 4);
}

#[test]
fn given_agents_differing_only_in_speed_when_evaluating_then_only_mobile_work_diverges() {
    let engine = default_engine();
    let (quick_id, mut quick) = agent("quick");
    quick.movement_speed = 5.2;
    let (slow_id, mut slow) = agent("slow");
    slow.movement_speed = 2.0;

    // doctoring happens at the bedside, so gait is irrelevant
    let quick_doctoring = engine.evaluate(&quick_id, &quick, &TaskCategory::Doctoring);
    let slow_doctoring = engine.evaluate(&slow_id, &slow, &TaskCategory::Doctoring);
    assert_eq!(quick_doctoring.value, slow_doctoring.value);

    let quick_hauling = engine.evaluate(&quick_id, &quick, &TaskCategory::Hauling);
    let slow_hauling = engine.evaluate(&slow_id, &slow, &TaskCategory::Hauling);
    assert!(quick_hauling.value > slow_hauling.value);
}

#[test]
fn given_computed_priorities_when_applied_then_store_switches_to_autonomous_mode() {
    let engine = default_engine();
    let (agent_id, signals) = agent("sable");
    let mut store = MemoryAssignmentStore::default();
    assert!(!store.autonomous_enabled());

    let priority = engine.evaluate(&agent_id, &signals, &TaskCategory::Hauling);
    priority.apply_to(&mut store);

    assert!(store.autonomous_enabled());
    assert_eq!(
        store.levels.get(&(agent_id.clone(), "hauling".to_string())),
        Some(&priority.level)
    );
}

#[test]
fn given_an_agent_mid_task_when_evaluating_that_category_then_it_is_locked_in() {
    let engine = default_engine();
    let (agent_id, mut signals) = agent("builder");
    signals.current_task = Some(TaskCategory::Construction);

    let current = engine.evaluate(&agent_id, &signals, &TaskCategory::Construction);
    let other = engine.evaluate(&agent_id, &signals, &TaskCategory::Mining);
    assert!(current.enabled);
    assert!(current.value > other.value);
}
