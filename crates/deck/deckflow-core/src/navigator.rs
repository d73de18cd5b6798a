//! The per-slide navigation machine and the frozen snapshot variant.

use crate::action::Action;
use crate::action_state::{classify, ActionQuery, ActionState};
use crate::container::ActionContainer;
use crate::ids::{ActionId, ElementId};
use crate::state::{SlideState, UserOperation};
use std::collections::HashSet;

/// Walks one slide's step axis `0..=capacity`, tracking in-flight actions.
///
/// Every transition runs to completion on the calling thread; the only
/// asynchronous signal is [`deactivate`](Self::deactivate), reported by a
/// consumer once it has finished rendering an activated action.
#[derive(Debug)]
pub struct SlideNavigator {
    container: ActionContainer,
    state: SlideState,
}

impl SlideNavigator {
    /// Bind a container at step 0 with nothing in flight.
    pub fn new(container: ActionContainer) -> Self {
        Self {
            container,
            state: SlideState::default(),
        }
    }

    /// Bind a container arriving at a given step, recording the operation
    /// that caused the arrival. Used by deck navigation when crossing slide
    /// boundaries.
    pub(crate) fn arriving_at(
        container: ActionContainer,
        step: usize,
        operation: UserOperation,
    ) -> Self {
        let mut state = SlideState::at_step(step);
        state.latest_operation = Some(operation);
        Self { container, state }
    }

    /// Advance one step; the group just entered becomes in-flight.
    ///
    /// Returns `false` without moving when the slide is already fully
    /// revealed; the caller decides whether that means "advance the deck".
    pub fn forward(&mut self) -> bool {
        self.state.latest_operation = Some(UserOperation::Forward);
        if self.state.step >= self.container.capacity() {
            return false;
        }
        self.state.step += 1;
        let ids = self.container.action_ids(self.state.step as isize - 1).clone();
        self.state.activate(ids);
        true
    }

    /// Retreat one step, arriving in the settled state of the previous group.
    ///
    /// Nothing is re-animated on the way back. Returns `false` without moving
    /// when already at step 0.
    pub fn backward(&mut self) -> bool {
        self.state.latest_operation = Some(UserOperation::Backward);
        if self.state.step == 0 {
            return false;
        }
        self.state.step -= 1;
        self.state.activate(HashSet::new());
        true
    }

    /// Jump to an arbitrary step with forward-arrival semantics for whichever
    /// group sits there, while signaling consumers to suppress animation.
    pub fn random_access(&mut self, step: usize) {
        self.state.latest_operation = Some(UserOperation::RandomAccess);
        self.state.step = step;
        let ids = self.container.action_ids(step as isize - 1).clone();
        self.state.activate(ids);
    }

    /// Report that the consumer finished rendering one activated action.
    /// Stale or unknown ids are a harmless no-op.
    #[inline]
    pub fn deactivate(&mut self, action_id: ActionId) {
        self.state.deactivate(action_id);
    }

    /// Current step in `0..=capacity`.
    #[inline]
    pub fn step(&self) -> usize {
        self.state.step
    }

    /// Step count of the bound container.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.container.capacity()
    }

    /// Ids currently in flight.
    #[inline]
    pub fn active_action_ids(&self) -> &HashSet<ActionId> {
        &self.state.active_action_ids
    }

    /// The full navigation state.
    #[inline]
    pub fn state(&self) -> &SlideState {
        &self.state
    }

    /// The bound container.
    #[inline]
    pub fn container(&self) -> &ActionContainer {
        &self.container
    }
}

impl ActionQuery for SlideNavigator {
    fn action_state<A: Action>(&self, element: &ElementId) -> Option<ActionState<A>> {
        classify(
            &self.container,
            element,
            self.state.step,
            Some(&self.state.active_action_ids),
        )
    }

    fn can_be_animated(&self) -> bool {
        self.state.latest_operation == Some(UserOperation::Forward)
    }
}

/// A slide frozen at one step, for previews and thumbnails.
///
/// Every dynamic node classifies as settled and nothing ever animates; there
/// is no lifecycle to report back into.
#[derive(Debug)]
pub struct SlideSnapshot {
    container: ActionContainer,
    step: usize,
}

impl SlideSnapshot {
    /// Freeze a container at `step`.
    pub fn new(container: ActionContainer, step: usize) -> Self {
        Self { container, step }
    }

    /// The frozen step.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }
}

impl ActionQuery for SlideSnapshot {
    fn action_state<A: Action>(&self, element: &ElementId) -> Option<ActionState<A>> {
        classify(&self.container, element, self.step, None)
    }

    fn can_be_animated(&self) -> bool {
        false
    }
}
