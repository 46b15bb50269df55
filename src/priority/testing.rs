//! Fixed-value signal providers for tests and demos. Every field is
//! public so a scenario reads as a struct literal, and any query can be
//! made to fail by listing its name in `failing`.

use std::collections::{BTreeMap, BTreeSet};

use crate::priority::{
    error::SignalError,
    ports::{AgentSignals, AssignmentStore, WorldSignals},
    types::{
        AgentId, BeautyCategory, Condition, ExpectationTier, SkillRecord, TaskCategory, Thought,
    },
};

#[derive(Debug, Clone)]
pub struct StaticAgentSignals {
    pub free_will: bool,
    pub manual_priorities: BTreeMap<String, u8>,
    pub unavailable_for: BTreeSet<String>,
    pub downed: bool,
    pub idle: bool,
    pub current_task: Option<TaskCategory>,
    pub average_skill: f32,
    pub skills: Vec<SkillRecord>,
    pub mood: f32,
    pub thoughts: Vec<Thought>,
    pub inspired_for: Option<TaskCategory>,
    pub health: f32,
    pub needs_treatment: bool,
    pub can_self_tend: bool,
    pub building_immunity: bool,
    pub conditions: Vec<Condition>,
    pub movement_speed: f32,
    pub carrying_capacity: f32,
    pub hunting_weapon: bool,
    pub brawler: bool,
    pub in_home_area: bool,
    pub in_own_room: bool,
    pub room_food_poison_chance: Option<f32>,
    pub grove_needs_pruning: Option<bool>,
    pub expectation_tier: ExpectationTier,
    pub beauty_category: BeautyCategory,
    pub failing: BTreeSet<String>,
}

impl Default for StaticAgentSignals {
    fn default() -> Self {
        Self {
            free_will: true,
            manual_priorities: BTreeMap::new(),
            unavailable_for: BTreeSet::new(),
            downed: false,
            idle: false,
            current_task: None,
            average_skill: 8.0,
            skills: Vec::new(),
            mood: 0.5,
            thoughts: Vec::new(),
            inspired_for: None,
            health: 1.0,
            needs_treatment: false,
            can_self_tend: false,
            building_immunity: false,
            conditions: Vec::new(),
            movement_speed: 4.0,
            carrying_capacity: 75.0,
            hunting_weapon: true,
            brawler: false,
            in_home_area: true,
            in_own_room: false,
            room_food_poison_chance: None,
            grove_needs_pruning: None,
            expectation_tier: ExpectationTier::Moderate,
            beauty_category: BeautyCategory::Neutral,
            failing: BTreeSet::new(),
        }
    }
}

impl StaticAgentSignals {
    fn guard(&self, query: &str) -> Result<(), SignalError> {
        if self.failing.contains(query) {
            return Err(SignalError::provider_failure(format!(
                "{query} unavailable"
            )));
        }
        Ok(())
    }
}

impl AgentSignals for StaticAgentSignals {
    fn has_free_will(&self) -> Result<bool, SignalError> {
        self.guard("has_free_will")?;
        Ok(self.free_will)
    }

    fn manual_priority(&self, category: &TaskCategory) -> Result<u8, SignalError> {
        self.guard("manual_priority")?;
        Ok(self
            .manual_priorities
            .get(category.key())
            .copied()
            .unwrap_or(0))
    }

    fn permanently_unavailable(&self, category: &TaskCategory) -> Result<bool, SignalError> {
        self.guard("permanently_unavailable")?;
        Ok(self.unavailable_for.contains(category.key()))
    }

    fn is_downed(&self) -> Result<bool, SignalError> {
        self.guard("is_downed")?;
        Ok(self.downed)
    }

    fn is_idle(&self) -> Result<bool, SignalError> {
        self.guard("is_idle")?;
        Ok(self.idle)
    }

    fn current_task(&self) -> Result<Option<TaskCategory>, SignalError> {
        self.guard("current_task")?;
        Ok(self.current_task.clone())
    }

    fn average_relevant_skill(&self, _category: &TaskCategory) -> Result<f32, SignalError> {
        self.guard("average_relevant_skill")?;
        Ok(self.average_skill)
    }

    fn relevant_skills(&self, _category: &TaskCategory) -> Result<Vec<SkillRecord>, SignalError> {
        self.guard("relevant_skills")?;
        Ok(self.skills.clone())
    }

    fn mood_level(&self) -> Result<f32, SignalError> {
        self.guard("mood_level")?;
        Ok(self.mood)
    }

    fn mood_thoughts(&self) -> Result<Vec<Thought>, SignalError> {
        self.guard("mood_thoughts")?;
        Ok(self.thoughts.clone())
    }

    fn inspired_for(&self, category: &TaskCategory) -> Result<bool, SignalError> {
        self.guard("inspired_for")?;
        Ok(self.inspired_for.as_ref() == Some(category))
    }

    fn health_fraction(&self) -> Result<f32, SignalError> {
        self.guard("health_fraction")?;
        Ok(self.health)
    }

    fn needs_treatment(&self) -> Result<bool, SignalError> {
        self.guard("needs_treatment")?;
        Ok(self.needs_treatment)
    }

    fn can_self_tend(&self) -> Result<bool, SignalError> {
        self.guard("can_self_tend")?;
        Ok(self.can_self_tend)
    }

    fn building_immunity(&self) -> Result<bool, SignalError> {
        self.guard("building_immunity")?;
        Ok(self.building_immunity)
    }

    fn active_conditions(&self) -> Result<Vec<Condition>, SignalError> {
        self.guard("active_conditions")?;
        Ok(self.conditions.clone())
    }

    fn movement_speed(&self) -> Result<f32, SignalError> {
        self.guard("movement_speed")?;
        Ok(self.movement_speed)
    }

    fn carrying_capacity(&self) -> Result<f32, SignalError> {
        self.guard("carrying_capacity")?;
        Ok(self.carrying_capacity)
    }

    fn has_hunting_weapon(&self) -> Result<bool, SignalError> {
        self.guard("has_hunting_weapon")?;
        Ok(self.hunting_weapon)
    }

    fn is_brawler(&self) -> Result<bool, SignalError> {
        self.guard("is_brawler")?;
        Ok(self.brawler)
    }

    fn in_home_area(&self) -> Result<bool, SignalError> {
        self.guard("in_home_area")?;
        Ok(self.in_home_area)
    }

    fn in_own_room(&self) -> Result<bool, SignalError> {
        self.guard("in_own_room")?;
        Ok(self.in_own_room)
    }

    fn room_food_poison_chance(&self) -> Result<Option<f32>, SignalError> {
        self.guard("room_food_poison_chance")?;
        Ok(self.room_food_poison_chance)
    }

    fn grove_needs_pruning(&self) -> Result<Option<bool>, SignalError> {
        self.guard("grove_needs_pruning")?;
        Ok(self.grove_needs_pruning)
    }

    fn expectation_tier(&self) -> Result<ExpectationTier, SignalError> {
        self.guard("expectation_tier")?;
        Ok(self.expectation_tier)
    }

    fn beauty_category(&self) -> Result<BeautyCategory, SignalError> {
        self.guard("beauty_category")?;
        Ok(self.beauty_category)
    }
}

#[derive(Debug, Clone)]
pub struct StaticWorldSignals {
    pub num_agents: usize,
    pub home_area_fire: bool,
    pub map_fires: u32,
    pub percent_downed: f32,
    pub percent_needing_treatment: f32,
    pub pets_needing_treatment: u32,
    pub total_food: f32,
    pub things_deteriorating: bool,
    pub refuel_now: bool,
    pub refuel_soon: bool,
    pub need_warm_clothes: bool,
    pub colonist_unburied: bool,
    pub plants_blighted: bool,
    pub assignments: BTreeMap<String, Vec<AgentId>>,
    pub interests_present: bool,
    pub interest_labels: BTreeMap<u8, String>,
    pub failing: BTreeSet<String>,
}

impl Default for StaticWorldSignals {
    fn default() -> Self {
        Self {
            num_agents: 5,
            home_area_fire: false,
            map_fires: 0,
            percent_downed: 0.0,
            percent_needing_treatment: 0.0,
            pets_needing_treatment: 0,
            total_food: 100.0,
            things_deteriorating: false,
            refuel_now: false,
            refuel_soon: false,
            need_warm_clothes: false,
            colonist_unburied: false,
            plants_blighted: false,
            assignments: BTreeMap::new(),
            interests_present: false,
            interest_labels: BTreeMap::new(),
            failing: BTreeSet::new(),
        }
    }
}

impl StaticWorldSignals {
    fn guard(&self, query: &str) -> Result<(), SignalError> {
        if self.failing.contains(query) {
            return Err(SignalError::provider_failure(format!(
                "{query} unavailable"
            )));
        }
        Ok(())
    }
}

impl WorldSignals for StaticWorldSignals {
    fn num_agents(&self) -> Result<usize, SignalError> {
        self.guard("num_agents")?;
        Ok(self.num_agents)
    }

    fn home_area_fire(&self) -> Result<bool, SignalError> {
        self.guard("home_area_fire")?;
        Ok(self.home_area_fire)
    }

    fn map_fires(&self) -> Result<u32, SignalError> {
        self.guard("map_fires")?;
        Ok(self.map_fires)
    }

    fn percent_agents_downed(&self) -> Result<f32, SignalError> {
        self.guard("percent_agents_downed")?;
        Ok(self.percent_downed)
    }

    fn percent_agents_needing_treatment(&self) -> Result<f32, SignalError> {
        self.guard("percent_agents_needing_treatment")?;
        Ok(self.percent_needing_treatment)
    }

    fn pets_needing_treatment(&self) -> Result<u32, SignalError> {
        self.guard("pets_needing_treatment")?;
        Ok(self.pets_needing_treatment)
    }

    fn total_food(&self) -> Result<f32, SignalError> {
        self.guard("total_food")?;
        Ok(self.total_food)
    }

    fn things_deteriorating(&self) -> Result<bool, SignalError> {
        self.guard("things_deteriorating")?;
        Ok(self.things_deteriorating)
    }

    fn refuel_needed_now(&self) -> Result<bool, SignalError> {
        self.guard("refuel_needed_now")?;
        Ok(self.refuel_now)
    }

    fn refuel_needed_soon(&self) -> Result<bool, SignalError> {
        self.guard("refuel_needed_soon")?;
        Ok(self.refuel_soon)
    }

    fn need_warm_clothes(&self) -> Result<bool, SignalError> {
        self.guard("need_warm_clothes")?;
        Ok(self.need_warm_clothes)
    }

    fn colonist_left_unburied(&self) -> Result<bool, SignalError> {
        self.guard("colonist_left_unburied")?;
        Ok(self.colonist_unburied)
    }

    fn plants_blighted(&self) -> Result<bool, SignalError> {
        self.guard("plants_blighted")?;
        Ok(self.plants_blighted)
    }

    fn others_assigned(
        &self,
        agent: &AgentId,
        category: &TaskCategory,
    ) -> Result<bool, SignalError> {
        self.guard("others_assigned")?;
        Ok(self
            .assignments
            .get(category.key())
            .is_some_and(|agents| agents.iter().any(|other| other != agent)))
    }

    fn interests_framework_present(&self) -> Result<bool, SignalError> {
        self.guard("interests_framework_present")?;
        Ok(self.interests_present)
    }

    fn interest_label(&self, index: u8) -> Result<Option<String>, SignalError> {
        self.guard("interest_label")?;
        Ok(self.interest_labels.get(&index).cloned())
    }
}

/// Assignment sink that records what the engine wrote.
#[derive(Debug, Default)]
pub struct MemoryAssignmentStore {
    pub autonomous: bool,
    pub levels: BTreeMap<(AgentId, String), u8>,
}

impl AssignmentStore for MemoryAssignmentStore {
    fn autonomous_enabled(&self) -> bool {
        self.autonomous
    }

    fn enable_autonomous(&mut self) {
        self.autonomous = true;
    }

    fn set_priority(&mut self, agent: &AgentId, category: &TaskCategory, level: u8) {
        self.levels
            .insert((agent.clone(), category.key().to_string()), level);
    }
}
