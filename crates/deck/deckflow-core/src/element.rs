//! Element state descriptors applied by `Apply`-style actions.

use crate::transition::AnimationSpec;
use serde::{Deserialize, Serialize};

/// Consolidated visual state of one element.
///
/// A modifier describes the element as a whole; the rendering layer maps
/// these fields onto whatever its view system supports. Values combine from
/// [`identity`](Self::identity) through the chainable setters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementModifier {
    pub hidden: bool,
    pub opacity: f32,
    pub scale: [f32; 2],
    pub rotation_degrees: f32,
    pub offset: [f32; 2],
    pub blur_radius: f32,
}

impl ElementModifier {
    /// The neutral modifier: fully visible, unscaled, unrotated, in place.
    pub fn identity() -> Self {
        Self {
            hidden: false,
            opacity: 1.0,
            scale: [1.0, 1.0],
            rotation_degrees: 0.0,
            offset: [0.0, 0.0],
            blur_radius: 0.0,
        }
    }

    /// Hidden variant of this modifier.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_scale(mut self, x: f32, y: f32) -> Self {
        self.scale = [x, y];
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = [x, y];
        self
    }

    pub fn with_blur(mut self, radius: f32) -> Self {
        self.blur_radius = radius;
        self
    }
}

impl Default for ElementModifier {
    fn default() -> Self {
        Self::identity()
    }
}

/// Before/during/after states for applying a modifier to an element.
///
/// `previous` is the element's state before the action runs (defaults to the
/// identity), `current` the state it animates to, and `next` the state shown
/// once a later action has superseded this one (defaults to `current`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ElementTransition {
    pub animation: Option<AnimationSpec>,
    pub previous: Option<ElementModifier>,
    pub current: ElementModifier,
    pub next: Option<ElementModifier>,
}

impl ElementTransition {
    pub fn new(current: ElementModifier) -> Self {
        Self {
            current,
            ..Self::default()
        }
    }

    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_previous(mut self, previous: ElementModifier) -> Self {
        self.previous = Some(previous);
        self
    }

    pub fn with_next(mut self, next: ElementModifier) -> Self {
        self.next = Some(next);
        self
    }

    /// Appear in place: starts fully transparent, no timing curve of its own.
    pub fn appear() -> Self {
        Self::default().with_previous(ElementModifier::identity().with_opacity(0.0))
    }

    /// Fade in over 0.3 seconds.
    pub fn fade() -> Self {
        Self::default()
            .with_animation(AnimationSpec::ease_in(0.3))
            .with_previous(ElementModifier::identity().with_opacity(0.0))
    }
}
