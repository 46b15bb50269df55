use std::sync::Arc;

use crate::priority::{
    considerations::{self, EvalContext},
    dispatch::dispatch_list,
    ports::{AgentSignals, WorldSignals},
    quantize::PriorityScale,
    settings::{ConsiderationSettings, PolicyStore},
    state::ScoreState,
    types::{AgentId, ComputedPriority, TaskCategory},
};

/// Score assigned when the evaluation cannot even start, so a faulting
/// agent still ends up with a sane middling priority.
pub const GLOBAL_DEFAULT: f32 = 0.2;

/// Evaluates one agent's desirability for one task category by running the
/// category's consideration chain over a shared world view. Cheap to clone
/// and safe to use from several worker threads at once.
#[derive(Clone)]
pub struct PriorityEngine {
    world: Arc<dyn WorldSignals>,
    policy: Arc<PolicyStore>,
    settings: Arc<ConsiderationSettings>,
    scale: PriorityScale,
}

impl PriorityEngine {
    pub fn new(
        world: Arc<dyn WorldSignals>,
        policy: Arc<PolicyStore>,
        settings: Arc<ConsiderationSettings>,
        scale: PriorityScale,
    ) -> Self {
        Self {
            world,
            policy,
            settings,
            scale,
        }
    }

    pub fn scale(&self) -> PriorityScale {
        self.scale
    }

    pub fn policy(&self) -> &PolicyStore {
        &self.policy
    }

    /// Computes one (agent, category) priority. Never fails: gate faults
    /// fall back to the global default, and a faulting consideration is
    /// logged and skipped while the rest of the chain still runs.
    pub fn evaluate(
        &self,
        agent_id: &AgentId,
        agent: &dyn AgentSignals,
        category: &TaskCategory,
    ) -> ComputedPriority {
        let state = match self.gate(agent_id, agent, category) {
            Gate::Manual(priority) => return priority,
            Gate::Autonomous(state) => state,
        };
        let state = self.run_chain(state, agent_id, agent, category);
        self.finish(agent_id, category, state)
    }

    /// Evaluates every given category for one agent and returns the
    /// results sorted most desirable first.
    pub fn evaluate_all(
        &self,
        agent_id: &AgentId,
        agent: &dyn AgentSignals,
        categories: &[TaskCategory],
    ) -> Vec<ComputedPriority> {
        let mut results: Vec<ComputedPriority> = categories
            .iter()
            .map(|category| self.evaluate(agent_id, agent, category))
            .collect();
        results.sort_by(|a, b| b.cmp(a));
        results
    }

    /// Agents without free will keep their manually assigned levels; the
    /// manual level is remapped onto the score scale so manual and
    /// autonomous priorities stay comparable.
    fn gate(
        &self,
        agent_id: &AgentId,
        agent: &dyn AgentSignals,
        category: &TaskCategory,
    ) -> Gate {
        let has_free_will = match agent.has_free_will() {
            Ok(free) => free,
            Err(err) => {
                tracing::error!(
                    target: "priority",
                    agent = %agent_id,
                    category = %category,
                    error = %err,
                    "free will check failed; assigning global default"
                );
                return Gate::Manual(self.fallback(agent_id, category));
            }
        };
        if has_free_will {
            let state = ScoreState::new(self.scale, self.settings.verbose)
                .reset(GLOBAL_DEFAULT, "global default");
            return Gate::Autonomous(state);
        }
        match agent.manual_priority(category) {
            Ok(level) => {
                let level = level.min(self.scale.lowest_level());
                let value = self.scale.from_manual(level);
                Gate::Manual(ComputedPriority {
                    agent: agent_id.clone(),
                    category: category.clone(),
                    value,
                    enabled: false,
                    disabled: level == 0,
                    level,
                    log: vec![format!("{:.0}% (manually assigned)", value * 100.0)],
                })
            }
            Err(err) => {
                tracing::error!(
                    target: "priority",
                    agent = %agent_id,
                    category = %category,
                    error = %err,
                    "manual priority lookup failed; assigning global default"
                );
                Gate::Manual(self.fallback(agent_id, category))
            }
        }
    }

    fn run_chain(
        &self,
        state: ScoreState,
        agent_id: &AgentId,
        agent: &dyn AgentSignals,
        category: &TaskCategory,
    ) -> ScoreState {
        let ctx = EvalContext {
            agent_id,
            agent,
            world: self.world.as_ref(),
            category,
            policy: &self.policy,
            settings: &self.settings,
        };
        let mut state = self.step(
            state,
            &ctx,
            "permanently_unavailable",
            considerations::permanently_unavailable,
        );
        if state.is_disabled() {
            return state;
        }
        for entry in dispatch_list(category) {
            state = self.step(state, &ctx, entry.name, entry.run);
        }
        state
    }

    // Considerations are fault-isolated: on error the pre-call state is
    // kept and the chain continues.
    fn step(
        &self,
        state: ScoreState,
        ctx: &EvalContext<'_>,
        name: &'static str,
        run: considerations::Consideration,
    ) -> ScoreState {
        let before = state.clone();
        match run(state, ctx) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(
                    target: "priority",
                    agent = %ctx.agent_id,
                    category = %ctx.category,
                    consideration = name,
                    error = %err,
                    "consideration faulted; keeping previous score"
                );
                before
            }
        }
    }

    fn finish(
        &self,
        agent_id: &AgentId,
        category: &TaskCategory,
        state: ScoreState,
    ) -> ComputedPriority {
        let level = state.level();
        ComputedPriority {
            agent: agent_id.clone(),
            category: category.clone(),
            value: state.value(),
            enabled: state.is_enabled(),
            disabled: state.is_disabled(),
            level,
            log: state.into_log(),
        }
    }

    fn fallback(&self, agent_id: &AgentId, category: &TaskCategory) -> ComputedPriority {
        let state = ScoreState::new(self.scale, self.settings.verbose)
            .reset(GLOBAL_DEFAULT, "global default");
        self.finish(agent_id, category, state)
    }
}

enum Gate {
    Manual(ComputedPriority),
    Autonomous(ScoreState),
}
