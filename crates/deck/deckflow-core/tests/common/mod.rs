#![allow(dead_code)]
//! Shared fixtures for the integration suites.

use deckflow_core::{Action, ActionContainer, ElementId, SequenceNode};

/// A minimal labeled action kind for timeline assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub label: &'static str,
    pub element: ElementId,
}

impl Cue {
    pub fn new(label: &'static str, element: ElementId) -> Self {
        Self { label, element }
    }
}

impl Action for Cue {
    fn element_id(&self) -> ElementId {
        self.element.clone()
    }
}

/// A second kind, for asserting per-kind timeline independence.
#[derive(Debug, Clone, PartialEq)]
pub struct AltCue {
    pub label: &'static str,
    pub element: ElementId,
}

impl AltCue {
    pub fn new(label: &'static str, element: ElementId) -> Self {
        Self { label, element }
    }
}

impl Action for AltCue {
    fn element_id(&self) -> ElementId {
        self.element.clone()
    }
}

pub fn cue(label: &'static str, element: usize) -> Cue {
    Cue::new(label, ElementId::element(element))
}

pub fn alt_cue(label: &'static str, element: usize) -> AltCue {
    AltCue::new(label, ElementId::element(element))
}

/// Three sequential cues "a", "b", "c" on element 0.
pub fn three_cue_container() -> ActionContainer {
    ActionContainer::builder()
        .group(cue("a", 0))
        .group(cue("b", 0))
        .group(cue("c", 0))
        .finish()
}

#[track_caller]
pub fn assert_static<A>(
    container: &ActionContainer,
    element: &ElementId,
    step: usize,
    previous: Option<&A>,
    next: Option<&A>,
) where
    A: Action + PartialEq + std::fmt::Debug,
{
    match container.node::<A>(element, step) {
        Some(SequenceNode::Static { previous: p, next: n }) => {
            assert_eq!(p.as_ref().map(|t| &t.action), previous, "previous at step {step}");
            assert_eq!(n.as_ref().map(|t| &t.action), next, "next at step {step}");
        }
        Some(SequenceNode::Dynamic { .. }) => panic!("node at step {step} is dynamic"),
        None => panic!("no node at step {step}"),
    }
}

#[track_caller]
pub fn assert_dynamic<A>(
    container: &ActionContainer,
    element: &ElementId,
    step: usize,
    previous: Option<&A>,
    current: &A,
    next: Option<&A>,
) where
    A: Action + PartialEq + std::fmt::Debug,
{
    match container.node::<A>(element, step) {
        Some(SequenceNode::Dynamic {
            previous: p,
            current: c,
            next: n,
        }) => {
            assert_eq!(p.as_ref().map(|t| &t.action), previous, "previous at step {step}");
            assert_eq!(&c.action, current, "current at step {step}");
            assert_eq!(n.as_ref().map(|t| &t.action), next, "next at step {step}");
        }
        Some(SequenceNode::Static { .. }) => panic!("node at step {step} is static"),
        None => panic!("no node at step {step}"),
    }
}
