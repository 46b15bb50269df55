use crate::priority::considerations::{self, Consideration};
use crate::priority::types::TaskCategory;

/// A named step in a category's evaluation chain. The name shows up in
/// fault logs so operators can tell which rule keeps failing.
#[derive(Clone, Copy)]
pub struct DispatchEntry {
    pub name: &'static str,
    pub run: Consideration,
}

const fn entry(name: &'static str, run: Consideration) -> DispatchEntry {
    DispatchEntry { name, run }
}

// Order is part of each chain's contract: overwriting rules go first,
// adjustments next, the treatment/downed caps and colony policy last.

// Fallthrough chain for unknown categories. Includes movement speed,
// since nothing is known about how stationary the work is.
const DEFAULT: &[DispatchEntry] = &[
    entry("relevant_skills", considerations::consider_relevant_skills),
    entry("movement_speed", considerations::consider_movement_speed),
    entry("carrying_capacity", considerations::consider_carrying_capacity),
    entry("anyone_else_doing", considerations::consider_anyone_else_doing),
    entry("passion", considerations::consider_passion),
    entry("thoughts", considerations::consider_thoughts),
    entry("inspiration", considerations::consider_inspiration),
    entry("refueling", considerations::consider_refueling),
    entry("injured_pets", considerations::consider_injured_pets),
    entry("low_food", considerations::consider_low_food),
    entry("warm_clothes", considerations::consider_warm_clothes),
    entry("unburied", considerations::consider_unburied),
    entry("health", considerations::consider_health),
    entry("raw_food", considerations::consider_raw_food),
    entry("deteriorating", considerations::consider_deteriorating),
    entry("boredom", considerations::consider_boredom),
    entry("fire", considerations::consider_fire),
    entry("building_immunity", considerations::consider_building_immunity),
    entry("completing_task", considerations::consider_completing_task),
    entry("treatment", considerations::consider_treatment),
    entry("downed", considerations::consider_downed),
    entry("colony_policy", considerations::consider_colony_policy),
];

// Workbench and on-site chains. Movement speed only matters for work
// that chases things across the map, so it stays out of these.
const STANDARD: &[DispatchEntry] = &[
    entry("relevant_skills", considerations::consider_relevant_skills),
    entry("carrying_capacity", considerations::consider_carrying_capacity),
    entry("anyone_else_doing", considerations::consider_anyone_else_doing),
    entry("passion", considerations::consider_passion),
    entry("thoughts", considerations::consider_thoughts),
    entry("inspiration", considerations::consider_inspiration),
    entry("refueling", considerations::consider_refueling),
    entry("injured_pets", considerations::consider_injured_pets),
    entry("low_food", considerations::consider_low_food),
    entry("warm_clothes", considerations::consider_warm_clothes),
    entry("unburied", considerations::consider_unburied),
    entry("health", considerations::consider_health),
    entry("raw_food", considerations::consider_raw_food),
    entry("deteriorating", considerations::consider_deteriorating),
    entry("boredom", considerations::consider_boredom),
    entry("fire", considerations::consider_fire),
    entry("building_immunity", considerations::consider_building_immunity),
    entry("completing_task", considerations::consider_completing_task),
    entry("treatment", considerations::consider_treatment),
    entry("downed", considerations::consider_downed),
    entry("colony_policy", considerations::consider_colony_policy),
];

const FIREFIGHTING: &[DispatchEntry] = &[
    entry("base_firefighting", considerations::base_firefighting),
    entry("fire", considerations::consider_fire),
    entry("building_immunity", considerations::consider_building_immunity),
    entry("completing_task", considerations::consider_completing_task),
    entry("treatment", considerations::consider_treatment),
    entry("downed", considerations::consider_downed),
    entry("colony_policy", considerations::consider_colony_policy),
];

const PATIENT: &[DispatchEntry] = &[
    entry("base_patient", considerations::base_patient),
    entry("health", considerations::consider_health),
    entry("building_immunity", considerations::consider_building_immunity),
    entry("completing_task", considerations::consider_completing_task),
    entry("treatment", considerations::consider_treatment),
    entry("downed", considerations::consider_downed),
    entry("colony_policy", considerations::consider_colony_policy),
];

const BEDREST: &[DispatchEntry] = &[
    entry("base_bedrest", considerations::base_bedrest),
    entry("health", considerations::consider_health),
    entry("building_immunity", considerations::consider_building_immunity),
    entry("completing_task", considerations::consider_completing_task),
    entry("treatment", considerations::consider_treatment),
    entry("boredom", considerations::consider_boredom),
    entry("downed", considerations::consider_downed),
    entry("colony_policy", considerations::consider_colony_policy),
];

const BASIC_WORK: &[DispatchEntry] = &[
    entry("base_basic_work", considerations::base_basic_work),
    entry("thoughts", considerations::consider_thoughts),
    entry("warm_clothes", considerations::consider_warm_clothes),
    entry("health", considerations::consider_health),
    entry("boredom", considerations::consider_boredom),
    entry("downed_guard", considerations::downed_guard),
    entry("building_immunity", considerations::consider_building_immunity),
    entry("completing_task", considerations::consider_completing_task),
    entry("treatment", considerations::consider_treatment),
    entry("downed", considerations::consider_downed),
    entry("colony_policy", considerations::consider_colony_policy),
];

// Handlers and hunters chase animals around the map, so unlike the
// workbench chains they keep movement speed.
const HANDLING: &[DispatchEntry] = DEFAULT;

const COOKING: &[DispatchEntry] = &[
    entry("relevant_skills", considerations::consider_relevant_skills),
    entry("carrying_capacity", considerations::consider_carrying_capacity),
    entry("anyone_else_doing", considerations::consider_anyone_else_doing),
    entry("passion", considerations::consider_passion),
    entry("thoughts", considerations::consider_thoughts),
    entry("inspiration", considerations::consider_inspiration),
    entry("refueling", considerations::consider_refueling),
    entry("injured_pets", considerations::consider_injured_pets),
    entry("low_food", considerations::consider_low_food),
    entry("warm_clothes", considerations::consider_warm_clothes),
    entry("unburied", considerations::consider_unburied),
    entry("food_poisoning", considerations::consider_food_poisoning),
    entry("health", considerations::consider_health),
    entry("raw_food", considerations::consider_raw_food),
    entry("deteriorating", considerations::consider_deteriorating),
    entry("boredom", considerations::consider_boredom),
    entry("fire", considerations::consider_fire),
    entry("building_immunity", considerations::consider_building_immunity),
    entry("completing_task", considerations::consider_completing_task),
    entry("treatment", considerations::consider_treatment),
    entry("downed", considerations::consider_downed),
    entry("colony_policy", considerations::consider_colony_policy),
];

const HUNTING: &[DispatchEntry] = &[
    entry("relevant_skills", considerations::consider_relevant_skills),
    entry("movement_speed", considerations::consider_movement_speed),
    entry("carrying_capacity", considerations::consider_carrying_capacity),
    entry("anyone_else_doing", considerations::consider_anyone_else_doing),
    entry("passion", considerations::consider_passion),
    entry("thoughts", considerations::consider_thoughts),
    entry("inspiration", considerations::consider_inspiration),
    entry("refueling", considerations::consider_refueling),
    entry("injured_pets", considerations::consider_injured_pets),
    entry("low_food", considerations::consider_low_food),
    entry("warm_clothes", considerations::consider_warm_clothes),
    entry("unburied", considerations::consider_unburied),
    entry("health", considerations::consider_health),
    entry("raw_food", considerations::consider_raw_food),
    entry("deteriorating", considerations::consider_deteriorating),
    entry("boredom", considerations::consider_boredom),
    entry("hunting_weapon", considerations::consider_hunting_weapon),
    entry("brawlers_not_hunting", considerations::consider_brawlers_not_hunting),
    entry("fire", considerations::consider_fire),
    entry("building_immunity", considerations::consider_building_immunity),
    entry("completing_task", considerations::consider_completing_task),
    entry("treatment", considerations::consider_treatment),
    entry("downed", considerations::consider_downed),
    entry("colony_policy", considerations::consider_colony_policy),
];

const PLANT_CUTTING: &[DispatchEntry] = &[
    entry("relevant_skills", considerations::consider_relevant_skills),
    entry("anyone_else_doing", considerations::consider_anyone_else_doing),
    entry("passion", considerations::consider_passion),
    entry("thoughts", considerations::consider_thoughts),
    entry("inspiration", considerations::consider_inspiration),
    entry("grove_pruning", considerations::consider_grove_pruning),
    entry("low_food", considerations::consider_low_food),
    entry("health", considerations::consider_health),
    entry("plants_blighted", considerations::consider_plants_blighted),
    entry("boredom", considerations::consider_boredom),
    entry("fire", considerations::consider_fire),
    entry("building_immunity", considerations::consider_building_immunity),
    entry("completing_task", considerations::consider_completing_task),
    entry("treatment", considerations::consider_treatment),
    entry("downed", considerations::consider_downed),
    entry("colony_policy", considerations::consider_colony_policy),
];

const HAULING: &[DispatchEntry] = &[
    entry("beauty_expectations", considerations::consider_beauty_expectations),
    entry("movement_speed", considerations::consider_movement_speed),
    entry("carrying_capacity", considerations::consider_carrying_capacity),
    entry("anyone_else_doing", considerations::consider_anyone_else_doing),
    entry("passion", considerations::consider_passion),
    entry("thoughts", considerations::consider_thoughts),
    entry("inspiration", considerations::consider_inspiration),
    entry("refueling", considerations::consider_refueling),
    entry("injured_pets", considerations::consider_injured_pets),
    entry("low_food", considerations::consider_low_food),
    entry("warm_clothes", considerations::consider_warm_clothes),
    entry("unburied", considerations::consider_unburied),
    entry("health", considerations::consider_health),
    entry("raw_food", considerations::consider_raw_food),
    entry("deteriorating", considerations::consider_deteriorating),
    entry("boredom", considerations::consider_boredom),
    entry("fire", considerations::consider_fire),
    entry("building_immunity", considerations::consider_building_immunity),
    entry("completing_task", considerations::consider_completing_task),
    entry("treatment", considerations::consider_treatment),
    entry("downed", considerations::consider_downed),
    entry("colony_policy", considerations::consider_colony_policy),
];

const CLEANING: &[DispatchEntry] = &[
    entry("beauty_expectations", considerations::consider_beauty_expectations),
    entry("anyone_else_doing", considerations::consider_anyone_else_doing),
    entry("thoughts", considerations::consider_thoughts),
    entry("own_room", considerations::consider_own_room),
    entry("food_poisoning", considerations::consider_food_poisoning),
    entry("health", considerations::consider_health),
    entry("boredom", considerations::consider_boredom),
    entry("home_area", considerations::consider_home_area),
    entry("building_immunity", considerations::consider_building_immunity),
    entry("completing_task", considerations::consider_completing_task),
    entry("treatment", considerations::consider_treatment),
    entry("downed", considerations::consider_downed),
    entry("colony_policy", considerations::consider_colony_policy),
];

// Pure desk work: no hauling stat, and research is never something an
// agent is "in the middle of" urgently enough to lock in.
const RESEARCH: &[DispatchEntry] = &[
    entry("relevant_skills", considerations::consider_relevant_skills),
    entry("anyone_else_doing", considerations::consider_anyone_else_doing),
    entry("passion", considerations::consider_passion),
    entry("thoughts", considerations::consider_thoughts),
    entry("inspiration", considerations::consider_inspiration),
    entry("refueling", considerations::consider_refueling),
    entry("injured_pets", considerations::consider_injured_pets),
    entry("low_food", considerations::consider_low_food),
    entry("warm_clothes", considerations::consider_warm_clothes),
    entry("unburied", considerations::consider_unburied),
    entry("health", considerations::consider_health),
    entry("raw_food", considerations::consider_raw_food),
    entry("deteriorating", considerations::consider_deteriorating),
    entry("boredom", considerations::consider_boredom),
    entry("fire", considerations::consider_fire),
    entry("building_immunity", considerations::consider_building_immunity),
    entry("treatment", considerations::consider_treatment),
    entry("downed", considerations::consider_downed),
    entry("colony_policy", considerations::consider_colony_policy),
];

/// Static chain lookup. Unknown and custom categories share the default
/// chain, so new categories work without code changes here.
pub fn dispatch_list(category: &TaskCategory) -> &'static [DispatchEntry] {
    match category {
        TaskCategory::Firefighting => FIREFIGHTING,
        TaskCategory::Patient => PATIENT,
        TaskCategory::Bedrest => BEDREST,
        TaskCategory::BasicWork => BASIC_WORK,
        TaskCategory::Handling => HANDLING,
        TaskCategory::Cooking => COOKING,
        TaskCategory::Hunting => HUNTING,
        TaskCategory::PlantCutting => PLANT_CUTTING,
        TaskCategory::Hauling | TaskCategory::UrgentHauling => HAULING,
        TaskCategory::Cleaning => CLEANING,
        TaskCategory::Research => RESEARCH,
        TaskCategory::Doctoring
        | TaskCategory::Warden
        | TaskCategory::Construction
        | TaskCategory::Growing
        | TaskCategory::Mining
        | TaskCategory::Smithing
        | TaskCategory::Tailoring
        | TaskCategory::Art
        | TaskCategory::Crafting => STANDARD,
        TaskCategory::Custom(_) => DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_custom_category_when_dispatching_then_default_chain_is_used() {
        let list = dispatch_list(&TaskCategory::Custom("archaeology".into()));
        assert_eq!(list.len(), DEFAULT.len());
        assert_eq!(list[0].name, "relevant_skills");
        assert_eq!(list[1].name, "movement_speed");
    }
}
