//! Mutable per-slide navigation state.

use crate::ids::ActionId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The navigation command that most recently changed the state.
///
/// Consumers animate only after [`Forward`](UserOperation::Forward); backward
/// and random access arrive directly in the settled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserOperation {
    Forward,
    Backward,
    RandomAccess,
}

/// Step position and in-flight actions of one slide.
///
/// `step` runs from 0 (nothing revealed) to the container's capacity (fully
/// revealed). `active_action_ids` holds the ids of actions whose consumers
/// have not yet reported completion; it is replaced wholesale on every
/// navigation, which is also the only cancellation mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlideState {
    pub step: usize,
    pub active_action_ids: HashSet<ActionId>,
    pub latest_operation: Option<UserOperation>,
}

impl SlideState {
    /// State positioned at `step` with nothing in flight.
    pub fn at_step(step: usize) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }

    /// Replace the in-flight set wholesale.
    #[inline]
    pub fn activate(&mut self, action_ids: HashSet<ActionId>) {
        self.active_action_ids = action_ids;
    }

    /// Remove one id from the in-flight set; unknown ids are a no-op.
    #[inline]
    pub fn deactivate(&mut self, action_id: ActionId) {
        self.active_action_ids.remove(&action_id);
    }

    /// Whether any action is still in flight.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.active_action_ids.is_empty()
    }
}
