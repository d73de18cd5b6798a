//! The frozen per-slide timeline.

use crate::action::{Action, KindKey};
use crate::builder::ContainerBuilder;
use crate::ids::{ActionId, ElementId};
use crate::node::SequenceNode;
use once_cell::sync::Lazy;
use std::any::Any;
use std::collections::{HashMap, HashSet};

static EMPTY_IDS: Lazy<HashSet<ActionId>> = Lazy::new(HashSet::new);

/// Immutable timeline of one slide's declared actions.
///
/// Holds, for every declared (element, kind) pair, a node sequence of exactly
/// [`capacity`](Self::capacity) entries indexed by group, plus the set of
/// action ids introduced by each group. Built once per slide binding via
/// [`ContainerBuilder`]; navigation only ever reads it.
pub struct ActionContainer {
    collections: HashMap<ElementId, SequenceSet>,
    groups: Vec<HashSet<ActionId>>,
}

/// Type-erased node sequences for one element, keyed by action kind.
pub(crate) struct SequenceSet {
    pub(crate) sequences: HashMap<KindKey, Box<dyn Any + Send + Sync>>,
}

impl ActionContainer {
    /// A container with no groups and no declared actions.
    pub fn empty() -> Self {
        Self {
            collections: HashMap::new(),
            groups: Vec::new(),
        }
    }

    /// Start declaring a new container.
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    pub(crate) fn from_parts(
        collections: HashMap<ElementId, SequenceSet>,
        groups: Vec<HashSet<ActionId>>,
    ) -> Self {
        Self {
            collections,
            groups,
        }
    }

    /// Number of declared groups; the navigation step axis runs `0..=capacity`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.groups.len()
    }

    /// The ids introduced by the group at `step`.
    ///
    /// Takes a signed step so the "before the first group" query (`-1`) is
    /// expressible; any out-of-range step yields the empty set.
    #[inline]
    pub fn action_ids(&self, step: isize) -> &HashSet<ActionId> {
        usize::try_from(step)
            .ok()
            .and_then(|step| self.groups.get(step))
            .unwrap_or(&EMPTY_IDS)
    }

    /// The full node sequence for an (element, kind) pair.
    ///
    /// `None` if the pair was never declared; otherwise exactly
    /// `capacity` nodes.
    pub fn sequence<A: Action>(&self, element: &ElementId) -> Option<&[SequenceNode<A>]> {
        self.collections
            .get(element)?
            .sequences
            .get(&KindKey::of::<A>())?
            .downcast_ref::<Vec<SequenceNode<A>>>()
            .map(Vec::as_slice)
    }

    /// The node for an (element, kind) pair at one group index.
    ///
    /// `None` for never-declared pairs and for out-of-range steps, distinct
    /// from a `Static` node with no neighbors.
    #[inline]
    pub fn node<A: Action>(&self, element: &ElementId, step: usize) -> Option<&SequenceNode<A>> {
        self.sequence::<A>(element)?.get(step)
    }
}

impl Default for ActionContainer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for ActionContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionContainer")
            .field("capacity", &self.capacity())
            .field("elements", &self.collections.len())
            .finish()
    }
}
