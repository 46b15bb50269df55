mod dispatch;
mod pipeline;
mod quantize;
mod scenarios;
mod state;

use std::sync::Arc;

use volition::priority::{
    ConsiderationSettings, PolicyStore, PriorityEngine, PriorityScale,
    testing::{StaticAgentSignals, StaticWorldSignals},
};

pub fn engine(world: StaticWorldSignals) -> PriorityEngine {
    PriorityEngine::new(
        Arc::new(world),
        Arc::new(PolicyStore::default()),
        Arc::new(ConsiderationSettings::default()),
        PriorityScale::default(),
    )
}

pub fn default_engine() -> PriorityEngine {
    engine(StaticWorldSignals::default())
}

pub fn agent(name: &str) -> (String, StaticAgentSignals) {
    (name.to_string(), StaticAgentSignals::default())
}
