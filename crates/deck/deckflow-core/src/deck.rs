//! Deck-level navigation: an ordered flow of slides with transitions, walked
//! by one live per-slide machine.

use crate::action::Action;
use crate::action_state::{ActionQuery, ActionState};
use crate::config::DeckConfig;
use crate::container::ActionContainer;
use crate::ids::{ActionId, ElementId};
use crate::navigator::SlideNavigator;
use crate::state::{SlideState, UserOperation};
use crate::transition::SlideTransition;
use std::collections::HashSet;
use uuid::Uuid;

/// One screen of content.
///
/// The core only needs the slide's declared timeline; content and layout live
/// in the rendering layer. A fresh container is requested every time the
/// deck binds the slide.
pub trait Slide: Send + Sync {
    /// The slide's declared action timeline.
    fn action_container(&self) -> ActionContainer {
        ActionContainer::empty()
    }
}

struct FlowEntry {
    slide: Box<dyn Slide>,
    transition: SlideTransition,
}

/// Ordered sequence of slides, each paired with the transition used when
/// crossing forward into it.
#[derive(Default)]
pub struct Flow {
    entries: Vec<FlowEntry>,
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide with no transition.
    pub fn slide(self, slide: impl Slide + 'static) -> Self {
        self.next(slide, SlideTransition::none())
    }

    /// Append a slide with the transition used when crossing into it.
    pub fn next(mut self, slide: impl Slide + 'static, transition: SlideTransition) -> Self {
        self.entries.push(FlowEntry {
            slide: Box::new(slide),
            transition,
        });
        self
    }

    /// Append another flow's slides in order.
    pub fn concat(mut self, mut other: Flow) -> Self {
        self.entries.append(&mut other.entries);
        self
    }

    /// Number of slides.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The transition crossing into slide `number`.
    #[inline]
    pub fn transition(&self, number: usize) -> Option<&SlideTransition> {
        self.entries.get(number).map(|entry| &entry.transition)
    }

    /// Build a fresh container for slide `number`.
    fn container(&self, number: usize) -> ActionContainer {
        self.entries
            .get(number)
            .map(|entry| entry.slide.action_container())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flow").field("slides", &self.len()).finish()
    }
}

/// What a deck-level navigation call did.
#[derive(Debug, Clone, PartialEq)]
pub enum DeckEvent {
    /// The current slide stepped without crossing a boundary.
    Stepped,
    /// The deck moved to another slide. `transition` carries the descriptor
    /// to animate; it is present only when crossing forward.
    SlideCrossed {
        slide_number: usize,
        transition: Option<SlideTransition>,
    },
    /// Nothing changed (deck edge, or a jump to the current slide).
    Unchanged,
}

/// Walks a [`Flow`], delegating within-slide steps to a [`SlideNavigator`]
/// and crossing slide boundaries when the machine reports a no-op.
///
/// The bound container is rebuilt, never mutated, on every slide change; the
/// epoch id changes with it so consumers can drop per-slide caches.
#[derive(Debug)]
pub struct DeckNavigator {
    flow: Flow,
    slide_number: usize,
    slide_epoch: Uuid,
    navigator: SlideNavigator,
}

impl DeckNavigator {
    /// Open a flow on its first slide.
    pub fn new(flow: Flow) -> Self {
        Self::with_config(flow, DeckConfig::default())
    }

    /// Open a flow on the configured slide (clamped into range).
    pub fn with_config(flow: Flow, config: DeckConfig) -> Self {
        let last = flow.len().saturating_sub(1);
        let slide_number = config.start_slide.min(last);
        let navigator = SlideNavigator::new(flow.container(slide_number));
        Self {
            flow,
            slide_number,
            slide_epoch: Uuid::new_v4(),
            navigator,
        }
    }

    /// Step forward, crossing into the next slide when the current one is
    /// fully revealed.
    pub fn forward(&mut self) -> DeckEvent {
        if self.navigator.forward() {
            return DeckEvent::Stepped;
        }
        if self.slide_number + 1 >= self.flow.len() {
            log::debug!("forward at end of deck (slide {})", self.slide_number);
            return DeckEvent::Unchanged;
        }
        self.slide_number += 1;
        self.bind_slide(false, UserOperation::Forward);
        DeckEvent::SlideCrossed {
            slide_number: self.slide_number,
            transition: self.flow.transition(self.slide_number).copied(),
        }
    }

    /// Step backward, crossing into the previous slide (arriving fully
    /// revealed) when the current one is at step 0.
    ///
    /// Backward crossings never animate; only forward crossings carry a
    /// transition.
    pub fn backward(&mut self) -> DeckEvent {
        if self.navigator.backward() {
            return DeckEvent::Stepped;
        }
        if self.slide_number == 0 {
            log::debug!("backward at head of deck");
            return DeckEvent::Unchanged;
        }
        self.slide_number -= 1;
        self.bind_slide(true, UserOperation::Backward);
        DeckEvent::SlideCrossed {
            slide_number: self.slide_number,
            transition: None,
        }
    }

    /// Jump straight to a slide, arriving at step 0 with nothing in flight.
    /// Jumps to the current slide or past the end of the flow change nothing.
    pub fn random_access(&mut self, slide_number: usize) -> DeckEvent {
        if slide_number == self.slide_number || slide_number >= self.flow.len() {
            log::debug!("random access to slide {slide_number} ignored");
            return DeckEvent::Unchanged;
        }
        self.slide_number = slide_number;
        self.bind_slide(false, UserOperation::RandomAccess);
        DeckEvent::SlideCrossed {
            slide_number,
            transition: None,
        }
    }

    /// Swap in a fresh container and machine for the current slide.
    fn bind_slide(&mut self, fully_revealed: bool, operation: UserOperation) {
        let container = self.flow.container(self.slide_number);
        let step = if fully_revealed { container.capacity() } else { 0 };
        self.navigator = SlideNavigator::arriving_at(container, step, operation);
        self.slide_epoch = Uuid::new_v4();
    }

    /// Report that a consumer finished rendering one activated action.
    #[inline]
    pub fn deactivate(&mut self, action_id: ActionId) {
        self.navigator.deactivate(action_id);
    }

    /// Index of the current slide.
    #[inline]
    pub fn slide_number(&self) -> usize {
        self.slide_number
    }

    /// Number of slides in the flow.
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.flow.len()
    }

    /// Identity of the current slide binding; changes on every slide change.
    #[inline]
    pub fn slide_epoch(&self) -> Uuid {
        self.slide_epoch
    }

    /// Current step within the current slide.
    #[inline]
    pub fn step(&self) -> usize {
        self.navigator.step()
    }

    /// Step count of the current slide.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.navigator.capacity()
    }

    /// Ids currently in flight on the current slide.
    #[inline]
    pub fn active_action_ids(&self) -> &HashSet<ActionId> {
        self.navigator.active_action_ids()
    }

    /// Navigation state of the current slide.
    #[inline]
    pub fn state(&self) -> &SlideState {
        self.navigator.state()
    }

    /// The live per-slide machine.
    #[inline]
    pub fn slide(&self) -> &SlideNavigator {
        &self.navigator
    }
}

impl ActionQuery for DeckNavigator {
    fn action_state<A: Action>(&self, element: &ElementId) -> Option<ActionState<A>> {
        self.navigator.action_state(element)
    }

    fn can_be_animated(&self) -> bool {
        self.navigator.can_be_animated()
    }
}
