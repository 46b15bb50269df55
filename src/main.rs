use std::sync::Arc;

use anyhow::{Context, Result};

use volition::{
    cli::config_path_from_args,
    config::Config,
    logging::init_tracing,
    priority::{
        Passion, PolicyStore, PriorityEngine, SkillRecord, TaskCategory,
        testing::{MemoryAssignmentStore, StaticAgentSignals, StaticWorldSignals},
    },
};

/// Evaluates a small demo colony and prints each agent's ranked
/// categories. Real hosts embed the library and supply their own signal
/// providers.
fn main() -> Result<()> {
    let config_path = config_path_from_args()?;
    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    let logging_guard = init_tracing(&config.logging)?;
    tracing::info!(
        target: "volition",
        run_id = %logging_guard.run_id(),
        "engine_starting"
    );

    let world = Arc::new(StaticWorldSignals {
        num_agents: 3,
        total_food: 6.0,
        ..StaticWorldSignals::default()
    });
    let engine = PriorityEngine::new(
        world,
        Arc::new(PolicyStore::new(config.policy.clone())),
        Arc::new(config.considerations.to_settings()),
        config.scale.to_scale(),
    );

    let categories = [
        TaskCategory::Firefighting,
        TaskCategory::Doctoring,
        TaskCategory::Cooking,
        TaskCategory::Hunting,
        TaskCategory::Construction,
        TaskCategory::Growing,
        TaskCategory::Hauling,
        TaskCategory::Cleaning,
        TaskCategory::Research,
    ];

    let mut store = MemoryAssignmentStore::default();
    for (name, agent) in demo_colony() {
        let agent_id = name.to_string();
        let ranked = engine.evaluate_all(&agent_id, &agent, &categories);
        println!("{agent_id}:");
        for priority in &ranked {
            println!(
                "  {:<14} level {}  ({:.2})",
                priority.category, priority.level, priority.value
            );
            priority.apply_to(&mut store);
        }
    }

    Ok(())
}

fn demo_colony() -> Vec<(&'static str, StaticAgentSignals)> {
    vec![
        (
            "sable",
            StaticAgentSignals {
                average_skill: 14.0,
                skills: vec![SkillRecord {
                    label: "cooking".to_string(),
                    passion: Passion::Major,
                }],
                ..StaticAgentSignals::default()
            },
        ),
        (
            "moss",
            StaticAgentSignals {
                average_skill: 3.0,
                health: 0.6,
                needs_treatment: true,
                ..StaticAgentSignals::default()
            },
        ),
        (
            "wren",
            StaticAgentSignals {
                idle: true,
                movement_speed: 5.2,
                carrying_capacity: 90.0,
                ..StaticAgentSignals::default()
            },
        ),
    ]
}
