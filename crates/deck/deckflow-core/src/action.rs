//! The action trait and the grouping combinator used when declaring timelines.

use crate::builder::ContainerBuilder;
use crate::ids::{ActionId, ElementId};
use std::any::TypeId;

/// An effect applied to one slide element when the viewer advances a step.
///
/// An action is plain data; executing it is the rendering layer's job. The
/// action's Rust type is its *kind*: declarations of different kinds on the
/// same element live on independent timelines and never displace each other.
pub trait Action: Clone + Send + Sync + 'static {
    /// The id of the element this action targets.
    fn element_id(&self) -> ElementId {
        ElementId::none()
    }
}

/// One declared action instance together with its generated [`ActionId`].
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedAction<A: Action> {
    pub id: ActionId,
    pub action: A,
}

impl<A: Action> TaggedAction<A> {
    #[inline]
    pub(crate) fn new(action: A) -> Self {
        Self {
            id: ActionId::new(),
            action,
        }
    }
}

/// Storage key distinguishing action kinds within one element's timelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct KindKey(TypeId);

impl KindKey {
    #[inline]
    pub(crate) fn of<A: Action>() -> Self {
        Self(TypeId::of::<A>())
    }
}

/// A batch of actions declared into one timeline group.
///
/// Implemented by every single [`Action`] and by tuples of up to eight
/// groups, so simultaneous actions are declared as a tuple:
///
/// ```ignore
/// ActionContainer::builder()
///     .group(FlipByItem::new(ElementId::flipper(0)))
///     .group((Highlight::dark(ElementId::element(1)), Zoom::out()))
///     .finish();
/// ```
pub trait ActionGroup {
    /// Declare every action in this batch into the builder's current group.
    fn visit(self, builder: &mut ContainerBuilder);
}

impl<A: Action> ActionGroup for A {
    fn visit(self, builder: &mut ContainerBuilder) {
        builder.declare(self);
    }
}

macro_rules! impl_action_group_for_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: ActionGroup),+> ActionGroup for ($($name,)+) {
            fn visit(self, builder: &mut ContainerBuilder) {
                $(self.$idx.visit(builder);)+
            }
        }
    };
}

impl_action_group_for_tuple!(G0: 0, G1: 1);
impl_action_group_for_tuple!(G0: 0, G1: 1, G2: 2);
impl_action_group_for_tuple!(G0: 0, G1: 1, G2: 2, G3: 3);
impl_action_group_for_tuple!(G0: 0, G1: 1, G2: 2, G3: 3, G4: 4);
impl_action_group_for_tuple!(G0: 0, G1: 1, G2: 2, G3: 3, G4: 4, G5: 5);
impl_action_group_for_tuple!(G0: 0, G1: 1, G2: 2, G3: 3, G4: 4, G5: 5, G6: 6);
impl_action_group_for_tuple!(G0: 0, G1: 1, G2: 2, G3: 3, G4: 4, G5: 5, G6: 6, G7: 7);
