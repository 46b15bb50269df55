use crate::priority::{
    error::SignalError,
    types::{
        AgentId, BeautyCategory, Condition, ExpectationTier, SkillRecord, TaskCategory, Thought,
    },
};

/// Read-only facts about one agent, owned by the host. The engine never
/// mutates anything behind this port; every query may fail, and the
/// pipeline degrades per consideration rather than aborting.
pub trait AgentSignals: Send + Sync {
    fn has_free_will(&self) -> Result<bool, SignalError>;
    /// Externally assigned manual level (0..=L), read only on the gated path.
    fn manual_priority(&self, category: &TaskCategory) -> Result<u8, SignalError>;
    /// Whether this category is permanently unavailable to the agent.
    fn permanently_unavailable(&self, category: &TaskCategory) -> Result<bool, SignalError>;

    fn is_downed(&self) -> Result<bool, SignalError>;
    fn is_idle(&self) -> Result<bool, SignalError>;
    fn current_task(&self) -> Result<Option<TaskCategory>, SignalError>;

    /// Average of the agent's relevant skills for the category, scaled 0–20.
    fn average_relevant_skill(&self, category: &TaskCategory) -> Result<f32, SignalError>;
    fn relevant_skills(&self, category: &TaskCategory) -> Result<Vec<SkillRecord>, SignalError>;
    /// Current mood in [0,1].
    fn mood_level(&self) -> Result<f32, SignalError>;
    fn mood_thoughts(&self) -> Result<Vec<Thought>, SignalError>;
    fn inspired_for(&self, category: &TaskCategory) -> Result<bool, SignalError>;

    /// Summary health in [0,1].
    fn health_fraction(&self) -> Result<f32, SignalError>;
    fn needs_treatment(&self) -> Result<bool, SignalError>;
    fn can_self_tend(&self) -> Result<bool, SignalError>;
    /// Fighting off a disease that immunity could still beat.
    fn building_immunity(&self) -> Result<bool, SignalError>;
    fn active_conditions(&self) -> Result<Vec<Condition>, SignalError>;

    fn movement_speed(&self) -> Result<f32, SignalError>;
    fn carrying_capacity(&self) -> Result<f32, SignalError>;
    fn has_hunting_weapon(&self) -> Result<bool, SignalError>;
    fn is_brawler(&self) -> Result<bool, SignalError>;

    fn in_home_area(&self) -> Result<bool, SignalError>;
    fn in_own_room(&self) -> Result<bool, SignalError>;
    /// Food-poisoning chance of the agent's current room when it contains a
    /// meal source; `None` for outdoor, huge, or kitchen-free rooms.
    fn room_food_poison_chance(&self) -> Result<Option<f32>, SignalError>;
    /// `None` when no grove tree is connected to this agent.
    fn grove_needs_pruning(&self) -> Result<Option<bool>, SignalError>;

    fn expectation_tier(&self) -> Result<ExpectationTier, SignalError>;
    fn beauty_category(&self) -> Result<BeautyCategory, SignalError>;
}

/// Read-only colony-wide aggregates, pre-computed by the host's world
/// state aggregators and exposed here as plain queries.
pub trait WorldSignals: Send + Sync {
    fn num_agents(&self) -> Result<usize, SignalError>;

    fn home_area_fire(&self) -> Result<bool, SignalError>;
    fn map_fires(&self) -> Result<u32, SignalError>;

    fn percent_agents_downed(&self) -> Result<f32, SignalError>;
    fn percent_agents_needing_treatment(&self) -> Result<f32, SignalError>;
    fn pets_needing_treatment(&self) -> Result<u32, SignalError>;

    fn total_food(&self) -> Result<f32, SignalError>;
    fn things_deteriorating(&self) -> Result<bool, SignalError>;
    fn refuel_needed_now(&self) -> Result<bool, SignalError>;
    fn refuel_needed_soon(&self) -> Result<bool, SignalError>;
    fn need_warm_clothes(&self) -> Result<bool, SignalError>;
    fn colonist_left_unburied(&self) -> Result<bool, SignalError>;
    fn plants_blighted(&self) -> Result<bool, SignalError>;

    /// True when any other awake, un-downed agent has this category active.
    fn others_assigned(&self, agent: &AgentId, category: &TaskCategory)
    -> Result<bool, SignalError>;

    fn interests_framework_present(&self) -> Result<bool, SignalError>;
    /// Tier-index to label lookup provided by the interests framework.
    fn interest_label(&self, index: u8) -> Result<Option<String>, SignalError>;
}

/// The host's task-assignment store. `ComputedPriority::apply_to` writes
/// quantized levels here.
pub trait AssignmentStore {
    fn autonomous_enabled(&self) -> bool;
    fn enable_autonomous(&mut self);
    fn set_priority(&mut self, agent: &AgentId, category: &TaskCategory, level: u8);
}
