mod common;

use common::{cue, three_cue_container, AltCue, Cue};
use deckflow_core::{
    ActionContainer, ActionQuery, ActionState, ElementId, SlideNavigator, SlideSnapshot,
};

#[test]
fn forward_visits_every_step_then_stops() {
    let mut navigator = SlideNavigator::new(three_cue_container());
    assert_eq!(navigator.step(), 0);
    assert_eq!(navigator.capacity(), 3);

    for expected in 1..=3 {
        assert!(navigator.forward());
        assert_eq!(navigator.step(), expected);
        let introduced = navigator.container().action_ids(expected as isize - 1).clone();
        assert_eq!(navigator.active_action_ids(), &introduced);
        assert!(!introduced.is_empty());
    }

    // fully revealed: a further forward is a no-op for the caller to interpret
    assert!(!navigator.forward());
    assert_eq!(navigator.step(), 3);
}

#[test]
fn backward_arrives_settled_with_nothing_in_flight() {
    let mut navigator = SlideNavigator::new(three_cue_container());
    navigator.forward();
    navigator.forward();
    assert!(navigator.state().is_active());

    assert!(navigator.backward());
    assert_eq!(navigator.step(), 1);
    assert!(navigator.active_action_ids().is_empty());

    assert!(navigator.backward());
    assert_eq!(navigator.step(), 0);
    assert!(!navigator.backward());
    assert_eq!(navigator.step(), 0);
}

#[test]
fn classification_before_the_first_step_is_static_toward_the_first_action() {
    let navigator = SlideNavigator::new(three_cue_container());
    let state = navigator
        .action_state::<Cue>(&ElementId::element(0))
        .unwrap();
    match state {
        ActionState::Static {
            step,
            previous,
            next,
        } => {
            assert_eq!(step, 0);
            assert!(previous.is_none());
            assert_eq!(next, Some(cue("a", 0)));
        }
        other => panic!("expected static state, got {other:?}"),
    }
}

#[test]
fn forward_activates_then_deactivate_settles() {
    let mut navigator = SlideNavigator::new(three_cue_container());
    let element = ElementId::element(0);
    navigator.forward();

    let state = navigator.action_state::<Cue>(&element).unwrap();
    assert!(state.is_activated());
    match &state {
        ActionState::Activated {
            current,
            previous,
            next,
            ..
        } => {
            assert_eq!(current, &cue("a", 0));
            assert!(previous.is_none());
            assert_eq!(next.as_ref(), Some(&cue("b", 0)));
        }
        other => panic!("expected activated state, got {other:?}"),
    }

    let action_id = state.action_id().unwrap();
    navigator.deactivate(action_id);
    let state = navigator.action_state::<Cue>(&element).unwrap();
    assert!(matches!(state, ActionState::Deactivated { .. }));
    assert_eq!(state.action_id(), None);

    // repeated and unknown ids are no-ops
    navigator.deactivate(action_id);
    assert!(matches!(
        navigator.action_state::<Cue>(&element).unwrap(),
        ActionState::Deactivated { .. }
    ));
}

#[test]
fn backward_classifies_settled_without_reanimating() {
    let mut navigator = SlideNavigator::new(three_cue_container());
    navigator.forward();
    navigator.forward();
    navigator.backward();

    let state = navigator
        .action_state::<Cue>(&ElementId::element(0))
        .unwrap();
    assert!(matches!(state, ActionState::Deactivated { .. }));
    assert!(!navigator.can_be_animated());
}

#[test]
fn random_access_mirrors_forward_arrival_but_suppresses_animation() {
    let mut navigator = SlideNavigator::new(three_cue_container());
    navigator.random_access(2);

    assert_eq!(navigator.step(), 2);
    let introduced = navigator.container().action_ids(1).clone();
    assert_eq!(navigator.active_action_ids(), &introduced);
    assert!(navigator
        .action_state::<Cue>(&ElementId::element(0))
        .unwrap()
        .is_activated());
    assert!(!navigator.can_be_animated());

    navigator.random_access(0);
    assert_eq!(navigator.step(), 0);
    assert!(navigator.active_action_ids().is_empty());
}

#[test]
fn random_access_past_capacity_degrades_to_absent_classification() {
    let mut navigator = SlideNavigator::new(three_cue_container());
    navigator.random_access(7);
    assert_eq!(navigator.step(), 7);
    assert!(navigator.active_action_ids().is_empty());
    assert!(navigator
        .action_state::<Cue>(&ElementId::element(0))
        .is_none());
}

#[test]
fn can_be_animated_only_after_forward() {
    let mut navigator = SlideNavigator::new(three_cue_container());
    assert!(!navigator.can_be_animated());

    navigator.forward();
    assert!(navigator.can_be_animated());

    navigator.backward();
    assert!(!navigator.can_be_animated());

    navigator.random_access(1);
    assert!(!navigator.can_be_animated());
}

#[test]
fn undeclared_pairs_classify_as_absent() {
    let navigator = SlideNavigator::new(three_cue_container());
    assert!(navigator
        .action_state::<Cue>(&ElementId::element(1))
        .is_none());
    assert!(navigator
        .action_state::<AltCue>(&ElementId::element(0))
        .is_none());
}

#[test]
fn snapshot_shows_every_action_settled() {
    let snapshot = SlideSnapshot::new(three_cue_container(), 1);
    let state = snapshot
        .action_state::<Cue>(&ElementId::element(0))
        .unwrap();
    assert!(matches!(state, ActionState::Deactivated { .. }));
    assert!(!snapshot.can_be_animated());

    let snapshot = SlideSnapshot::new(three_cue_container(), 0);
    assert!(matches!(
        snapshot
            .action_state::<Cue>(&ElementId::element(0))
            .unwrap(),
        ActionState::Static { .. }
    ));
}

#[test]
fn empty_container_never_steps() {
    let mut navigator = SlideNavigator::new(ActionContainer::empty());
    assert!(!navigator.forward());
    assert!(!navigator.backward());
    assert_eq!(navigator.step(), 0);
}
