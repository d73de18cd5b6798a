//! Configuration for deck construction and navigation.

use serde::{Deserialize, Serialize};

/// Policy for a second declaration landing on an occupied
/// (element, kind, group) slot.
///
/// The slot keeps its first action either way; the policy only controls
/// whether the drop is reported. Lenient authoring is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Drop the duplicate silently.
    #[default]
    Ignore,
    /// Drop the duplicate and log a warning naming the element.
    Warn,
}

/// Configuration for a [`DeckNavigator`](crate::DeckNavigator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Slide to open on; clamped to the last slide of the flow.
    pub start_slide: usize,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self { start_slide: 0 }
    }
}
