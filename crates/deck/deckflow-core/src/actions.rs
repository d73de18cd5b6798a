//! Built-in action kinds.
//!
//! Each type here is one action kind; custom kinds are just other types
//! implementing [`Action`].

use crate::action::Action;
use crate::element::ElementTransition;
use crate::ids::ElementId;
use serde::{Deserialize, Serialize};

/// Apply an [`ElementTransition`] to one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apply {
    pub transition: ElementTransition,
    pub element_id: ElementId,
}

impl Apply {
    pub fn new(transition: ElementTransition, to: impl Into<ElementId>) -> Self {
        Self {
            transition,
            element_id: to.into(),
        }
    }
}

impl Action for Apply {
    fn element_id(&self) -> ElementId {
        self.element_id.clone()
    }
}

/// Apply an [`ElementTransition`] to each item of a list element in turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyByItem {
    pub transition: ElementTransition,
    pub element_id: ElementId,
}

impl ApplyByItem {
    pub fn new(transition: ElementTransition, to: impl Into<ElementId>) -> Self {
        Self {
            transition,
            element_id: to.into(),
        }
    }
}

impl Action for ApplyByItem {
    fn element_id(&self) -> ElementId {
        self.element_id.clone()
    }
}

/// Advance a flipper element to its next item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlipByItem {
    pub element_id: ElementId,
}

impl FlipByItem {
    pub fn new(element_id: impl Into<ElementId>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

impl Action for FlipByItem {
    fn element_id(&self) -> ElementId {
        self.element_id.clone()
    }
}

/// Color treatment of the area surrounding a highlighted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMode {
    /// The surrounding area becomes lighter.
    Light,
    /// The surrounding area becomes darker.
    Dark,
}

/// Emphasize one element by dimming or lightening everything around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub mode: HighlightMode,
    pub target: ElementId,
}

impl Highlight {
    pub fn new(mode: HighlightMode, target: impl Into<ElementId>) -> Self {
        Self {
            mode,
            target: target.into(),
        }
    }

    pub fn light(target: impl Into<ElementId>) -> Self {
        Self::new(HighlightMode::Light, target)
    }

    pub fn dark(target: impl Into<ElementId>) -> Self {
        Self::new(HighlightMode::Dark, target)
    }
}

impl Action for Highlight {
    fn element_id(&self) -> ElementId {
        self.target.clone()
    }
}

/// Zoom operation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomOperation {
    /// Zoom in on one element. `ratio` is the proportion of the target's
    /// width or height to the screen; 1.0 fills it.
    In { element_id: ElementId, ratio: f32 },
    /// Return the whole screen to the default scale.
    Out,
}

/// Zoom in on one element, or back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zoom {
    pub operation: ZoomOperation,
}

impl Zoom {
    pub fn new(operation: ZoomOperation) -> Self {
        Self { operation }
    }

    pub fn zoom_in(element_id: impl Into<ElementId>, ratio: f32) -> Self {
        Self::new(ZoomOperation::In {
            element_id: element_id.into(),
            ratio,
        })
    }

    pub fn out() -> Self {
        Self::new(ZoomOperation::Out)
    }

    /// The effective scale ratio of this operation.
    pub fn ratio(&self) -> f32 {
        match &self.operation {
            ZoomOperation::In { ratio, .. } => *ratio,
            ZoomOperation::Out => 1.0,
        }
    }
}

impl Action for Zoom {
    fn element_id(&self) -> ElementId {
        match &self.operation {
            ZoomOperation::In { element_id, .. } => element_id.clone(),
            ZoomOperation::Out => ElementId::none(),
        }
    }
}
