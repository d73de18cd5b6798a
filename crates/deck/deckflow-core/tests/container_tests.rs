mod common;

use common::{alt_cue, assert_dynamic, assert_static, cue, three_cue_container, AltCue, Cue};
use deckflow_core::{ActionContainer, ContainerBuilder, DuplicatePolicy, ElementId};

#[test]
fn three_sequential_cues_build_one_dynamic_node_per_group() {
    let (a, b, c) = (cue("a", 0), cue("b", 0), cue("c", 0));
    let container = ActionContainer::builder()
        .group(a.clone())
        .group(b.clone())
        .group(c.clone())
        .finish();
    let element = ElementId::element(0);

    assert_eq!(container.capacity(), 3);
    assert_eq!(container.action_ids(0).len(), 1);
    assert_eq!(container.action_ids(1).len(), 1);
    assert_eq!(container.action_ids(2).len(), 1);

    assert_dynamic(&container, &element, 0, None, &a, Some(&b));
    assert_dynamic(&container, &element, 1, Some(&a), &b, Some(&c));
    assert_dynamic(&container, &element, 2, Some(&b), &c, None);
}

#[test]
fn single_cue_in_the_middle_gets_static_runs_on_both_sides() {
    let (x, a, y) = (cue("x", 1), cue("a", 0), cue("y", 1));
    let container = ActionContainer::builder()
        .group(x)
        .group(a.clone())
        .group(y)
        .finish();
    let element = ElementId::element(0);

    assert_eq!(container.capacity(), 3);
    assert_static::<Cue>(&container, &element, 0, None, Some(&a));
    assert_dynamic::<Cue>(&container, &element, 1, None, &a, None);
    assert_static::<Cue>(&container, &element, 2, Some(&a), None);
}

#[test]
fn interleaved_elements_have_independent_sequences() {
    let (first, second, third) = (cue("first", 0), cue("second", 1), cue("third", 0));
    let container = ActionContainer::builder()
        .group(first.clone())
        .group(second.clone())
        .group(third.clone())
        .finish();

    assert_eq!(container.capacity(), 3);
    assert_eq!(container.action_ids(0).len(), 1);
    assert_eq!(container.action_ids(1).len(), 1);
    assert_eq!(container.action_ids(2).len(), 1);

    let element0 = ElementId::element(0);
    assert_dynamic(&container, &element0, 0, None, &first, Some(&third));
    assert_static(&container, &element0, 1, Some(&first), Some(&third));
    assert_dynamic(&container, &element0, 2, Some(&first), &third, None);

    let element1 = ElementId::element(1);
    assert_static(&container, &element1, 0, None, Some(&second));
    assert_dynamic(&container, &element1, 1, None, &second, None);
    assert_static(&container, &element1, 2, Some(&second), None);
}

#[test]
fn simultaneous_cues_on_two_elements_share_one_group() {
    let (a, b) = (cue("a", 0), cue("b", 1));
    let container = ActionContainer::builder()
        .group((a.clone(), b.clone()))
        .finish();

    assert_eq!(container.capacity(), 1);
    assert_eq!(container.action_ids(0).len(), 2);
    assert_dynamic(&container, &ElementId::element(0), 0, None, &a, None);
    assert_dynamic(&container, &ElementId::element(1), 0, None, &b, None);
}

#[test]
fn two_kinds_on_one_element_keep_independent_timelines() {
    let (a, b) = (cue("a", 0), alt_cue("b", 0));
    let container = ActionContainer::builder()
        .group((a.clone(), b.clone()))
        .finish();
    let element = ElementId::element(0);

    assert_eq!(container.capacity(), 1);
    assert_eq!(container.action_ids(0).len(), 2);
    assert_dynamic::<Cue>(&container, &element, 0, None, &a, None);
    assert_dynamic::<AltCue>(&container, &element, 0, None, &b, None);
}

#[test]
fn duplicate_declaration_in_one_group_keeps_the_first() {
    let (first, second) = (cue("first", 0), cue("second", 0));
    let container = ActionContainer::builder()
        .group((first.clone(), second))
        .finish();
    let element = ElementId::element(0);

    assert_eq!(container.capacity(), 1);
    assert_eq!(container.action_ids(0).len(), 1);
    assert_dynamic::<Cue>(&container, &element, 0, None, &first, None);
}

#[test]
fn warn_policy_keeps_the_drop_semantics() {
    let (first, second) = (cue("first", 0), cue("second", 0));
    let container = ContainerBuilder::with_policy(DuplicatePolicy::Warn)
        .group((first.clone(), second))
        .finish();

    assert_eq!(container.action_ids(0).len(), 1);
    assert_dynamic::<Cue>(&container, &ElementId::element(0), 0, None, &first, None);
}

#[test]
fn action_ids_degrade_to_empty_outside_the_step_range() {
    let container = three_cue_container();
    assert!(container.action_ids(-1).is_empty());
    assert!(container.action_ids(3).is_empty());
    assert!(container.action_ids(isize::MAX).is_empty());
}

#[test]
fn lookups_for_undeclared_pairs_are_absent() {
    let container = three_cue_container();
    let declared = ElementId::element(0);

    // element never declared
    assert!(container.node::<Cue>(&ElementId::element(9), 0).is_none());
    // kind never declared on a declared element
    assert!(container.node::<AltCue>(&declared, 0).is_none());
    // declared pair, step out of range
    assert!(container.node::<Cue>(&declared, 3).is_none());
    assert!(container.sequence::<AltCue>(&declared).is_none());
}

#[test]
fn empty_container_has_no_capacity_and_no_nodes() {
    let container = ActionContainer::empty();
    assert_eq!(container.capacity(), 0);
    assert!(container.action_ids(0).is_empty());
    assert!(container
        .node::<Cue>(&ElementId::element(0), 0)
        .is_none());
}

#[test]
fn every_declared_sequence_has_exactly_capacity_nodes() {
    let container = ActionContainer::builder()
        .group(cue("a", 0))
        .group((cue("b", 1), alt_cue("c", 0)))
        .group(cue("d", 2))
        .group(cue("e", 0))
        .finish();

    for element in [0, 1, 2].map(ElementId::element) {
        if let Some(sequence) = container.sequence::<Cue>(&element) {
            assert_eq!(sequence.len(), container.capacity());
        }
    }
    let alt = container
        .sequence::<AltCue>(&ElementId::element(0))
        .unwrap();
    assert_eq!(alt.len(), container.capacity());
}
