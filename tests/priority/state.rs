use volition::priority::{PriorityScale, ScoreState};

fn state() -> ScoreState {
    ScoreState::new(PriorityScale::default(), false)
}

fn verbose_state() -> ScoreState {
    ScoreState::new(PriorityScale::default(), true)
}

#[test]
fn given_out_of_range_reset_when_applied_then_value_clamps_and_log_is_replaced() {
    let state = state().reset(0.4, "base").reset(1.5, "surge");
    assert_eq!(state.value(), 1.0);
    assert_eq!(state.log(), ["100% (surge)"]);
}

#[test]
fn given_verbose_mode_when_resetting_then_previous_trail_survives() {
    let state = verbose_state().reset(0.4, "base").reset(0.8, "surge");
    // every verbose reset is preceded by a marker, the first included
    assert_eq!(
        state.log(),
        ["-- reset --", "40% (base)", "-- reset --", "80% (surge)"]
    );
}

#[test]
fn given_positive_delta_when_adding_then_signed_entry_records_applied_magnitude() {
    let state = state().reset(0.2, "base").add(0.3, "boost");
    assert!((state.value() - 0.5).abs() < 1e-6);
    assert_eq!(state.log().last().expect("entry"), "+30% (boost)");
}

#[test]
fn given_delta_past_zero_when_adding_then_value_saturates_and_entry_shows_real_drop() {
    let state = state().reset(0.2, "base").add(-0.5, "penalty");
    assert_eq!(state.value(), 0.0);
    assert_eq!(state.log().last().expect("entry"), "-20% (penalty)");
}

#[test]
fn given_disabled_state_when_adding_then_nothing_changes() {
    let state = state().reset(0.5, "base").never_do("stop").add(0.3, "boost");
    assert!((state.value() - 0.5).abs() < 1e-6);
    assert!(state.is_disabled());
    assert_eq!(state.log().last().expect("entry"), "disabled (stop)");
}

#[test]
fn given_multiply_when_applied_then_logged_as_equivalent_addition() {
    let state = state().reset(0.5, "base").multiply(1.8, "momentum");
    assert!((state.value() - 0.9).abs() < 1e-6);
    assert_eq!(state.log().last().expect("entry"), "+40% (momentum)");
}

#[test]
fn given_sticky_overrides_when_both_are_applied_then_last_writer_wins_and_flags_stay_exclusive() {
    let state = state().reset(0.5, "base").always_do("on").never_do("off");
    assert!(state.is_disabled());
    assert!(!state.is_enabled());

    let state = state.always_do("on again");
    assert!(state.is_enabled());
    assert!(!state.is_disabled());
}

#[test]
fn given_healthy_score_when_force_enabling_then_no_log_noise_is_added() {
    // 0.5 already quantizes to an active level, so the override is silent
    let state = state().reset(0.5, "base").always_do("on");
    assert!(state.is_enabled());
    assert_eq!(state.log(), ["50% (base)"]);
}

#[test]
fn given_score_below_cutoff_when_force_enabling_then_override_is_logged() {
    let state = state().reset(0.1, "base").always_do("still needed");
    assert_eq!(state.log().last().expect("entry"), "enabled (still needed)");
}

#[test]
fn given_zero_delta_when_adding_then_entry_only_appears_in_verbose_mode() {
    let state = state().reset(0.5, "base").add(0.0, "noop");
    assert_eq!(state.log().len(), 1);

    let state = verbose_state().reset(0.5, "base").add(0.0, "noop");
    assert_eq!(state.log().last().expect("entry"), "+0% (noop)");
}
