//! The classification a rendering consumer observes for one (element, kind)
//! pair at the current step.

use crate::action::Action;
use crate::container::ActionContainer;
use crate::ids::{ActionId, ElementId};
use crate::node::SequenceNode;
use std::collections::HashSet;

/// Three-way classification of an (element, kind) pair at one step.
///
/// `Static` means nothing happens here; the neighbors let an idle element
/// render interpolated between its settled and upcoming action. `Activated`
/// means the step's action is in flight: the consumer applies it, then
/// reports completion with the carried [`ActionId`]. `Deactivated` means the
/// action has settled (completion reported, or the step was reached without
/// animation).
#[derive(Debug, Clone, PartialEq)]
pub enum ActionState<A: Action> {
    Static {
        step: usize,
        previous: Option<A>,
        next: Option<A>,
    },
    Activated {
        step: usize,
        action_id: ActionId,
        current: A,
        previous: Option<A>,
        next: Option<A>,
    },
    Deactivated {
        step: usize,
        action_id: ActionId,
        current: A,
        previous: Option<A>,
        next: Option<A>,
    },
}

impl<A: Action> ActionState<A> {
    /// The id to report back through `deactivate`, present only while the
    /// action is in flight.
    #[inline]
    pub fn action_id(&self) -> Option<ActionId> {
        match self {
            Self::Activated { action_id, .. } => Some(*action_id),
            _ => None,
        }
    }

    /// Whether the state is [`Activated`](Self::Activated).
    #[inline]
    pub fn is_activated(&self) -> bool {
        matches!(self, Self::Activated { .. })
    }

    /// The step this classification was taken at.
    #[inline]
    pub fn step(&self) -> usize {
        match self {
            Self::Static { step, .. }
            | Self::Activated { step, .. }
            | Self::Deactivated { step, .. } => *step,
        }
    }
}

/// Query interface rendering consumers build against.
///
/// Implemented by the live per-slide machine and by frozen snapshots, so a
/// consumer renders against either without knowing which is behind it.
pub trait ActionQuery {
    /// Classification of `element`'s timeline for action kind `A` at the
    /// current step, or `None` if that pair was never declared.
    fn action_state<A: Action>(&self, element: &ElementId) -> Option<ActionState<A>>;

    /// Whether consumers should animate the classification they observe.
    fn can_be_animated(&self) -> bool;
}

/// Classify one pair at a navigation step.
///
/// Navigation step `s` observes the timeline node of group `s - 1` (the group
/// it just settled or is animating). Step 0 precedes every group and is
/// synthesized as a `Static` state pointing at the pair's first action. With
/// `active` absent every dynamic node classifies as settled, which is the
/// frozen-snapshot behavior.
pub(crate) fn classify<A: Action>(
    container: &ActionContainer,
    element: &ElementId,
    step: usize,
    active: Option<&HashSet<ActionId>>,
) -> Option<ActionState<A>> {
    let sequence = container.sequence::<A>(element)?;
    if step == 0 {
        let next = sequence
            .first()
            .and_then(SequenceNode::upcoming)
            .map(|tagged| tagged.action.clone());
        return Some(ActionState::Static {
            step,
            previous: None,
            next,
        });
    }
    match sequence.get(step - 1)? {
        SequenceNode::Static { previous, next } => Some(ActionState::Static {
            step,
            previous: previous.as_ref().map(|t| t.action.clone()),
            next: next.as_ref().map(|t| t.action.clone()),
        }),
        SequenceNode::Dynamic {
            previous,
            current,
            next,
        } => {
            let previous = previous.as_ref().map(|t| t.action.clone());
            let next = next.as_ref().map(|t| t.action.clone());
            if active.is_some_and(|ids| ids.contains(&current.id)) {
                Some(ActionState::Activated {
                    step,
                    action_id: current.id,
                    current: current.action.clone(),
                    previous,
                    next,
                })
            } else {
                Some(ActionState::Deactivated {
                    step,
                    action_id: current.id,
                    current: current.action.clone(),
                    previous,
                    next,
                })
            }
        }
    }
}
