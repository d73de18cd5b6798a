//! Parse storyboard JSON into an [`ActionContainer`].
//!
//! A storyboard is the serialized form of a slide's declaration stream: an
//! ordered array of groups, each an array of action specs tagged by kind.
//! Only the built-in action kinds are representable; custom kinds declare
//! through [`ContainerBuilder`](crate::ContainerBuilder) directly.
//!
//! ```json
//! {
//!   "groups": [
//!     [{ "kind": "apply", "element": "title", "transition": {} }],
//!     [{ "kind": "flip_by_item", "element": "flipper0" },
//!      { "kind": "highlight", "element": "element1", "mode": "dark" }],
//!     [{ "kind": "zoom_out" }]
//!   ]
//! }
//! ```

use crate::actions::{Apply, ApplyByItem, FlipByItem, Highlight, HighlightMode, Zoom};
use crate::builder::ContainerBuilder;
use crate::container::ActionContainer;
use crate::element::ElementTransition;
use crate::error::DeckError;
use crate::ids::ElementId;
use serde::Deserialize;

/// Parse a storyboard document into a frozen container.
///
/// Group order in the document is declaration order; an empty group is a
/// bare pause step. Malformed documents return [`DeckError::Storyboard`].
pub fn parse_storyboard_json(s: &str) -> Result<ActionContainer, DeckError> {
    let storyboard: Storyboard = serde_json::from_str(s)?;

    let mut builder = ContainerBuilder::new();
    for group in storyboard.groups {
        builder.begin_group();
        for action in group {
            declare(&mut builder, action);
        }
    }
    Ok(builder.finish())
}

fn declare(builder: &mut ContainerBuilder, action: RawAction) {
    match action {
        RawAction::Apply {
            element,
            transition,
        } => builder.declare(Apply::new(transition, ElementId::new(element))),
        RawAction::ApplyByItem {
            element,
            transition,
        } => builder.declare(ApplyByItem::new(transition, ElementId::new(element))),
        RawAction::FlipByItem { element } => {
            builder.declare(FlipByItem::new(ElementId::new(element)))
        }
        RawAction::Highlight { element, mode } => {
            builder.declare(Highlight::new(mode, ElementId::new(element)))
        }
        RawAction::ZoomIn { element, ratio } => {
            builder.declare(Zoom::zoom_in(ElementId::new(element), ratio))
        }
        RawAction::ZoomOut => builder.declare(Zoom::out()),
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct Storyboard {
    groups: Vec<Vec<RawAction>>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawAction {
    Apply {
        element: String,
        #[serde(default)]
        transition: ElementTransition,
    },
    ApplyByItem {
        element: String,
        #[serde(default)]
        transition: ElementTransition,
    },
    FlipByItem {
        element: String,
    },
    Highlight {
        element: String,
        mode: HighlightMode,
    },
    ZoomIn {
        element: String,
        ratio: f32,
    },
    ZoomOut,
}
