use volition::priority::PriorityScale;

#[test]
fn given_four_level_scale_when_quantizing_then_higher_scores_map_to_more_urgent_levels() {
    let scale = PriorityScale::default();
    assert_eq!(scale.quantize(1.0, false, false), 1);
    assert_eq!(scale.quantize(0.81, false, false), 1);
    assert_eq!(scale.quantize(0.8, false, false), 2);
    assert_eq!(scale.quantize(0.5, false, false), 3);
    assert_eq!(scale.quantize(0.21, false, false), 4);
}

#[test]
fn given_score_at_or_below_cutoff_when_quantizing_then_level_is_off() {
    let scale = PriorityScale::default();
    assert_eq!(scale.quantize(0.0, false, false), 0);
    assert_eq!(scale.quantize(0.2, false, false), 0);
}

#[test]
fn given_force_enabled_score_below_cutoff_when_quantizing_then_lowest_active_level_is_kept() {
    let scale = PriorityScale::default();
    assert_eq!(scale.quantize(0.0, true, false), 4);
    assert_eq!(scale.quantize(0.15, true, false), 4);
}

#[test]
fn given_force_disabled_score_when_quantizing_then_level_is_off() {
    let scale = PriorityScale::default();
    assert_eq!(scale.quantize(0.9, false, true), 0);
}

#[test]
fn given_manual_levels_when_remapped_then_spacing_follows_the_scale_step() {
    let scale = PriorityScale::default();
    assert_eq!(scale.from_manual(0), 0.0);
    assert!((scale.from_manual(1) - 1.0).abs() < 1e-6);
    assert!((scale.from_manual(2) - 0.8).abs() < 1e-6);
    assert!((scale.from_manual(3) - 0.6).abs() < 1e-6);
    assert!((scale.from_manual(4) - 0.4).abs() < 1e-6);
}

#[test]
fn given_quantize_then_remap_when_round_tripping_level_one_then_value_is_stable() {
    let scale = PriorityScale::default();
    let value = scale.from_manual(1);
    assert_eq!(scale.quantize(value, false, false), 1);
}

#[test]
fn given_zero_level_scale_when_constructed_then_it_is_clamped_to_one_level() {
    let scale = PriorityScale::new(0);
    assert_eq!(scale.lowest_level(), 1);
    // cutoff 50: anything above is the single active level
    assert_eq!(scale.quantize(0.6, false, false), 1);
    assert_eq!(scale.quantize(0.5, false, false), 0);
}

#[test]
fn given_nine_level_scale_when_quantizing_then_full_range_is_used() {
    let scale = PriorityScale::new(9);
    // cutoff 10, step 10
    assert_eq!(scale.quantize(1.0, false, false), 1);
    assert_eq!(scale.quantize(0.11, false, false), 9);
    assert_eq!(scale.quantize(0.1, false, false), 0);
}
