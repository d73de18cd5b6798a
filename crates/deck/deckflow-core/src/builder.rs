//! Accumulates declared action groups and finalizes them into an
//! [`ActionContainer`].
//!
//! Declarations arrive as an ordered stream of groups; every group occupies
//! one step of the timeline. Within a group each action is keyed by
//! (element, kind); the first declaration wins a slot and later ones for the
//! same slot are dropped according to [`DuplicatePolicy`].

use crate::action::{Action, ActionGroup, KindKey, TaggedAction};
use crate::config::DuplicatePolicy;
use crate::container::{ActionContainer, SequenceSet};
use crate::ids::{ActionId, ElementId};
use crate::node::SequenceNode;
use std::any::Any;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Builder for [`ActionContainer`].
///
/// ```ignore
/// let container = ActionContainer::builder()
///     .group(Apply::new(ElementTransition::fade(), ElementId::title()))
///     .group((FlipByItem::new(ElementId::flipper(0)), Zoom::out()))
///     .finish();
/// ```
pub struct ContainerBuilder {
    collections: HashMap<ElementId, KindSlots>,
    groups: Vec<HashSet<ActionId>>,
    policy: DuplicatePolicy,
}

impl ContainerBuilder {
    /// Create an empty builder with the default duplicate policy.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Create an empty builder with an explicit duplicate policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            collections: HashMap::new(),
            groups: Vec::new(),
            policy,
        }
    }

    /// Start a new group and declare `actions` into it.
    ///
    /// A single action forms a group of one; a tuple declares its members
    /// simultaneously into the same group.
    pub fn group(mut self, actions: impl ActionGroup) -> Self {
        self.begin_group();
        actions.visit(&mut self);
        self
    }

    /// Start a new, empty group (one more step of capacity).
    pub(crate) fn begin_group(&mut self) {
        self.groups.push(HashSet::new());
    }

    /// Declare one action into the current group.
    ///
    /// Called through [`ActionGroup::visit`]; declaring before any group has
    /// been started opens the first group. A declaration whose
    /// (element, kind) slot is already taken in this group is dropped.
    pub fn declare<A: Action>(&mut self, action: A) {
        if self.groups.is_empty() {
            self.begin_group();
        }
        let step = self.groups.len() - 1;
        let element = action.element_id();

        let slots = self
            .collections
            .entry(element.clone())
            .or_default()
            .slots::<A>();
        if slots.taken.contains_key(&step) {
            match self.policy {
                DuplicatePolicy::Ignore => {
                    log::debug!("dropped duplicate action for {element} at step {step}")
                }
                DuplicatePolicy::Warn => {
                    log::warn!("dropped duplicate action for {element} at step {step}")
                }
            }
            return;
        }
        let tagged = TaggedAction::new(action);
        self.groups[step].insert(tagged.id);
        slots.taken.insert(step, tagged);
    }

    /// Freeze the accumulated declarations into an immutable container.
    pub fn finish(self) -> ActionContainer {
        let capacity = self.groups.len();
        let mut collections = HashMap::with_capacity(self.collections.len());
        for (element, kinds) in self.collections {
            let mut sequences = HashMap::with_capacity(kinds.sequences.len());
            for (key, mut slots) in kinds.sequences {
                sequences.insert(key, slots.finalize(capacity));
            }
            collections.insert(element, SequenceSet { sequences });
        }
        ActionContainer::from_parts(collections, self.groups)
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContainerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerBuilder")
            .field("elements", &self.collections.len())
            .field("groups", &self.groups.len())
            .field("policy", &self.policy)
            .finish()
    }
}

/// Per-element accumulation, one slot map per action kind.
#[derive(Default)]
struct KindSlots {
    sequences: HashMap<KindKey, Box<dyn AnySlots>>,
}

impl KindSlots {
    fn slots<A: Action>(&mut self) -> &mut Slots<A> {
        let entry = self
            .sequences
            .entry(KindKey::of::<A>())
            .or_insert_with(|| Box::new(Slots::<A>::default()));
        // The map is keyed by the kind's TypeId, so the stored value is
        // always a Slots<A>.
        entry
            .as_any_mut()
            .downcast_mut::<Slots<A>>()
            .unwrap_or_else(|| unreachable!("slot storage keyed by kind"))
    }
}

/// Type-erased slot storage for one (element, kind) pair.
trait AnySlots: Send + Sync {
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// Emit the finalized node sequence of exactly `capacity` nodes.
    fn finalize(&mut self, capacity: usize) -> Box<dyn Any + Send + Sync>;
}

struct Slots<A: Action> {
    taken: BTreeMap<usize, TaggedAction<A>>,
}

impl<A: Action> Default for Slots<A> {
    fn default() -> Self {
        Self {
            taken: BTreeMap::new(),
        }
    }
}

impl<A: Action> AnySlots for Slots<A> {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn finalize(&mut self, capacity: usize) -> Box<dyn Any + Send + Sync> {
        Box::new(finalize_sequence(
            std::mem::take(&mut self.taken),
            capacity,
        ))
    }
}

/// Expand sparse slots into a gap-free sequence of exactly `capacity` nodes.
///
/// Every empty step becomes a `Static` node referencing the nearest occupied
/// steps on either side; every occupied step becomes a `Dynamic` node with
/// the same neighbor wiring.
fn finalize_sequence<A: Action>(
    slots: BTreeMap<usize, TaggedAction<A>>,
    capacity: usize,
) -> Vec<SequenceNode<A>> {
    let occupied: Vec<(usize, TaggedAction<A>)> = slots.into_iter().collect();
    let mut nodes = Vec::with_capacity(capacity);
    let mut previous: Option<TaggedAction<A>> = None;

    for (i, (step, current)) in occupied.iter().enumerate() {
        while nodes.len() < *step {
            nodes.push(SequenceNode::Static {
                previous: previous.clone(),
                next: Some(current.clone()),
            });
        }
        let next = occupied.get(i + 1).map(|(_, action)| action.clone());
        nodes.push(SequenceNode::Dynamic {
            previous: previous.clone(),
            current: current.clone(),
            next,
        });
        previous = Some(current.clone());
    }
    while nodes.len() < capacity {
        nodes.push(SequenceNode::Static {
            previous: previous.clone(),
            next: None,
        });
    }
    nodes
}
