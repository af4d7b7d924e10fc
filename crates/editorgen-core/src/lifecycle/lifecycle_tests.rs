#![allow(non_snake_case)]

use super::*;

#[test]
fn GenerationState___default___is_idle() {
    let state = GenerationState::default();

    assert_eq!(state, GenerationState::Idle);
}

#[test]
fn GenerationState___idle_to_validating___transition_allowed() {
    let state = GenerationState::Idle;

    let can_transition = state.can_transition_to(GenerationState::Validating);

    assert!(can_transition);
}

#[test]
fn GenerationState___validating_to_failed___transition_allowed() {
    let state = GenerationState::Validating;

    let can_transition = state.can_transition_to(GenerationState::Failed);

    assert!(can_transition);
}

#[test]
fn GenerationState___building_to_failed___not_allowed() {
    let state = GenerationState::Building;

    let can_transition = state.can_transition_to(GenerationState::Failed);

    assert!(!can_transition, "building cannot fail");
}

#[test]
fn GenerationState___idle_to_built___skip_not_allowed() {
    let state = GenerationState::Idle;

    let can_transition = state.can_transition_to(GenerationState::Built);

    assert!(!can_transition);
}

#[test]
fn GenerationState___rendered_to_rendered___second_render_not_allowed() {
    let state = GenerationState::Rendered;

    let can_transition = state.can_transition_to(GenerationState::Rendered);

    assert!(!can_transition);
}

#[test]
fn GenerationState___terminal_states___have_no_outgoing_transitions() {
    let all = [
        GenerationState::Idle,
        GenerationState::Validating,
        GenerationState::Building,
        GenerationState::Built,
        GenerationState::Rendered,
        GenerationState::Cancelled,
        GenerationState::Failed,
    ];

    for from in all.iter().filter(|s| s.is_terminal()) {
        for to in all {
            assert!(
                !from.can_transition_to(to),
                "{:?} is terminal but allows {:?}",
                from,
                to
            );
        }
    }
}

#[test]
fn GenerationState___description___not_empty() {
    let state = GenerationState::Built;

    assert!(!state.description().is_empty());
}
