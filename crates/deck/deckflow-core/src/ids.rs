//! Identifiers for slide elements and declared action instances.

use crate::DeckError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned to each declared action instance inside an
/// [`ActionContainer`](crate::ActionContainer).
///
/// Consumers receive an `ActionId` together with an activated action and hand
/// it back via `deactivate` once the action has finished rendering. Ids are
/// generated fresh per declaration and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ActionId(Uuid);

impl ActionId {
    /// Generate a new unique action id.
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an action id from a UUID string such as
    /// "d7a6b716-10b0-40bb-a894-8bc13a992737".
    #[inline]
    pub fn from_string(id: impl AsRef<str>) -> Result<Self, DeckError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| DeckError::InvalidId {
                reason: format!("invalid action id: {}", id.as_ref()),
            })
    }

    /// Get the underlying UUID.
    #[inline]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ActionId {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a piece of content within a slide.
///
/// Actions address their target through an `ElementId`; the rendering layer
/// assigns the same id to the view that should react. The reserved
/// [`ElementId::none`] value means "no target".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ElementId(String);

impl ElementId {
    /// Create an element id from a raw string key.
    #[inline]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The reserved "no target" id.
    #[inline]
    pub fn none() -> Self {
        Self(String::new())
    }

    /// Whether this is the reserved "no target" id.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Conventional id for a slide title.
    #[inline]
    pub fn title() -> Self {
        Self::new("title")
    }

    /// Conventional id for the n-th bullet list on a slide.
    #[inline]
    pub fn bullets(number: usize) -> Self {
        Self::new(format!("bullets{number}"))
    }

    /// Conventional id for the n-th flipper on a slide.
    #[inline]
    pub fn flipper(number: usize) -> Self {
        Self::new(format!("flipper{number}"))
    }

    /// Conventional id for the n-th anonymous element on a slide.
    #[inline]
    pub fn element(number: usize) -> Self {
        Self::new(format!("element{number}"))
    }

    /// The raw string key.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    #[inline]
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ElementId {
    #[inline]
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
