//! Error types for the deck core.
//!
//! Navigation and timeline queries never fail: out-of-range steps degrade to
//! empty results and never-declared lookups return `None`. `DeckError` only
//! surfaces at the edges, when parsing identifiers or storyboard documents.

use serde::{Deserialize, Serialize};

/// Error type for deck construction and parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DeckError {
    /// A string could not be parsed as an identifier
    #[error("invalid identifier: {reason}")]
    InvalidId { reason: String },

    /// A storyboard document could not be parsed
    #[error("storyboard error: {reason}")]
    Storyboard { reason: String },
}

impl DeckError {
    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidId { .. } => "id",
            Self::Storyboard { .. } => "storyboard",
        }
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storyboard {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let id_error = DeckError::InvalidId {
            reason: "bad".to_string(),
        };
        assert_eq!(id_error.category(), "id");

        let storyboard_error = DeckError::Storyboard {
            reason: "truncated".to_string(),
        };
        assert_eq!(storyboard_error.category(), "storyboard");
    }

    #[test]
    fn test_serialization() {
        let error = DeckError::Storyboard {
            reason: "truncated".to_string(),
        };
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: DeckError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }
}
