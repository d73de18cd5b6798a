//! Slide transition descriptors.
//!
//! These are pure data: the deck layer reports which descriptor applies when
//! crossing into a slide and the rendering layer decides what to do with it.

use serde::{Deserialize, Serialize};

/// Timing curve for an animation descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    #[default]
    Spring,
}

/// How a transition or element change should be timed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub easing: Easing,
    /// Duration in seconds.
    pub duration_secs: f32,
}

impl AnimationSpec {
    pub fn new(easing: Easing, duration_secs: f32) -> Self {
        Self {
            easing,
            duration_secs,
        }
    }

    pub fn linear(duration_secs: f32) -> Self {
        Self::new(Easing::Linear, duration_secs)
    }

    pub fn ease_in(duration_secs: f32) -> Self {
        Self::new(Easing::EaseIn, duration_secs)
    }

    pub fn spring(duration_secs: f32) -> Self {
        Self::new(Easing::Spring, duration_secs)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::spring(0.5)
    }
}

/// Visual shape of a slide crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// No visible transition.
    #[default]
    None,
    /// The incoming slide pushes the outgoing one off.
    Push,
    /// The incoming slide fades in over the outgoing one.
    Dissolve,
}

/// Descriptor for the animation used when crossing into a slide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SlideTransition {
    pub kind: TransitionKind,
    pub animation: Option<AnimationSpec>,
    /// Matched transitions pair up equally-identified elements across the two
    /// slides instead of animating the slides as a whole.
    pub matched: bool,
}

impl SlideTransition {
    /// No transition effect.
    pub fn none() -> Self {
        Self::default()
    }

    /// A push transition with a spring timing curve.
    pub fn push(duration_secs: f32) -> Self {
        Self {
            kind: TransitionKind::Push,
            animation: Some(AnimationSpec::spring(duration_secs)),
            matched: false,
        }
    }

    /// A dissolve transition with linear timing.
    pub fn dissolve(duration_secs: f32) -> Self {
        Self {
            kind: TransitionKind::Dissolve,
            animation: Some(AnimationSpec::linear(duration_secs)),
            matched: false,
        }
    }

    /// A matched transition pairing shared elements across the crossing.
    pub fn matched(duration_secs: f32) -> Self {
        Self {
            kind: TransitionKind::Dissolve,
            animation: Some(AnimationSpec::spring(duration_secs)),
            matched: true,
        }
    }
}
