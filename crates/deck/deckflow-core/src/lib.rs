//! Deckflow core (renderer-agnostic)
//!
//! The step-reveal engine behind a deckflow presentation: slides declare
//! ordered groups of actions targeting addressable elements; the builder
//! freezes those declarations into a per-slide [`ActionContainer`]; the
//! [`SlideNavigator`] and [`DeckNavigator`] machines walk the step axis and
//! the slide sequence, tracking which action instances are in flight.
//! Rendering, layout, and input handling live in adapter crates that query
//! [`ActionQuery`] and report completion through `deactivate`.

pub mod action;
pub mod action_state;
pub mod actions;
pub mod builder;
pub mod config;
pub mod container;
pub mod deck;
pub mod element;
pub mod error;
pub mod ids;
pub mod navigator;
pub mod node;
pub mod state;
pub mod storyboard;
pub mod transition;

// Re-export common types for consumers (adapters)
pub use action::{Action, ActionGroup, TaggedAction};
pub use action_state::{ActionQuery, ActionState};
pub use actions::{Apply, ApplyByItem, FlipByItem, Highlight, HighlightMode, Zoom, ZoomOperation};
pub use builder::ContainerBuilder;
pub use config::{DeckConfig, DuplicatePolicy};
pub use container::ActionContainer;
pub use deck::{DeckEvent, DeckNavigator, Flow, Slide};
pub use element::{ElementModifier, ElementTransition};
pub use error::DeckError;
pub use ids::{ActionId, ElementId};
pub use navigator::{SlideNavigator, SlideSnapshot};
pub use node::SequenceNode;
pub use state::{SlideState, UserOperation};
pub use storyboard::parse_storyboard_json;
pub use transition::{AnimationSpec, Easing, SlideTransition, TransitionKind};

/// Deck core result type
pub type Result<T> = core::result::Result<T, DeckError>;
