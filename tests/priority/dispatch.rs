use volition::priority::{TaskCategory, dispatch::dispatch_list};

fn names(category: &TaskCategory) -> Vec<&'static str> {
    dispatch_list(category)
        .iter()
        .map(|entry| entry.name)
        .collect()
}

#[test]
fn given_standard_category_when_dispatching_then_chain_starts_with_skills_and_ends_with_policy() {
    let chain = names(&TaskCategory::Growing);
    assert_eq!(chain.first(), Some(&"relevant_skills"));
    assert_eq!(chain.last(), Some(&"colony_policy"));
    // caps depend on running after every adjustment
    let treatment = chain
        .iter()
        .position(|name| *name == "treatment")
        .expect("treatment should be in the chain");
    let completing = chain
        .iter()
        .position(|name| *name == "completing_task")
        .expect("completing_task should be in the chain");
    assert!(completing < treatment);
}

#[test]
fn given_hunting_when_dispatching_then_weapon_and_brawler_gates_are_present() {
    let chain = names(&TaskCategory::Hunting);
    assert!(chain.contains(&"movement_speed"));
    assert!(chain.contains(&"hunting_weapon"));
    assert!(chain.contains(&"brawlers_not_hunting"));
}

#[test]
fn given_research_when_dispatching_then_desk_work_skips_physical_rules() {
    let chain = names(&TaskCategory::Research);
    assert!(!chain.contains(&"carrying_capacity"));
    assert!(!chain.contains(&"completing_task"));
}

#[test]
fn given_hauling_family_when_dispatching_then_both_categories_share_one_chain() {
    assert_eq!(
        names(&TaskCategory::Hauling),
        names(&TaskCategory::UrgentHauling)
    );
    assert_eq!(
        names(&TaskCategory::Hauling).first(),
        Some(&"beauty_expectations")
    );
}

#[test]
fn given_cleaning_when_dispatching_then_home_area_gate_is_present() {
    let chain = names(&TaskCategory::Cleaning);
    assert!(chain.contains(&"home_area"));
    assert!(chain.contains(&"own_room"));
    assert!(!chain.contains(&"relevant_skills"));
}

#[test]
fn given_forced_posture_categories_when_dispatching_then_chain_starts_with_their_base_rule() {
    assert_eq!(
        names(&TaskCategory::Firefighting).first(),
        Some(&"base_firefighting")
    );
    assert_eq!(names(&TaskCategory::Patient).first(), Some(&"base_patient"));
    assert_eq!(names(&TaskCategory::Bedrest).first(), Some(&"base_bedrest"));
    assert_eq!(
        names(&TaskCategory::BasicWork).first(),
        Some(&"base_basic_work")
    );
}

#[test]
fn given_workbench_categories_when_dispatching_then_movement_speed_is_absent() {
    for category in [
        TaskCategory::Doctoring,
        TaskCategory::Warden,
        TaskCategory::Construction,
        TaskCategory::Growing,
        TaskCategory::Mining,
        TaskCategory::Smithing,
        TaskCategory::Tailoring,
        TaskCategory::Art,
        TaskCategory::Crafting,
    ] {
        assert!(
            !names(&category).contains(&"movement_speed"),
            "{category} should not weigh movement speed"
        );
    }
    for category in [
        TaskCategory::Handling,
        TaskCategory::Hunting,
        TaskCategory::Hauling,
        TaskCategory::UrgentHauling,
        TaskCategory::Custom("archaeology".to_string()),
    ] {
        assert!(
            names(&category).contains(&"movement_speed"),
            "{category} should weigh movement speed"
        );
    }
}

#[test]
fn given_custom_category_when_dispatching_then_fallthrough_chain_applies() {
    let chain = names(&TaskCategory::Custom("archaeology".to_string()));
    assert_eq!(chain, names(&TaskCategory::Handling));
    // the named categories run the tighter workbench chain instead
    assert_ne!(chain, names(&TaskCategory::Growing));
}
