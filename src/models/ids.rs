//! Identifier newtypes
//!
//! Objective ids arrive from the display layer as plain strings (wizard-made
//! objectives carry generated ids, imported ones carry whatever the source
//! system used), so the newtype wraps a String. Fresh ids are minted from
//! uuid v4 with a short prefix. Lexicographic ordering on the raw string is
//! the engine's final sort tie-break, making every comparator a total order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a financial objective (goal or budget category)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectiveId(String);

impl ObjectiveId {
    /// Mint a fresh id
    pub fn new() -> Self {
        Self(format!("gol-{}", &uuid::Uuid::new_v4().to_string()[..8]))
    }

    /// Wrap a caller-supplied id
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ObjectiveId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ObjectiveId {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_format() {
        let id = ObjectiveId::new();
        assert!(id.as_str().starts_with("gol-"));
        assert_eq!(id.as_str().len(), 12); // "gol-" + 8 hex chars
    }

    #[test]
    fn test_from_raw_preserves_foreign_ids() {
        let id = ObjectiveId::from_raw("vacation-fund");
        assert_eq!(id.as_str(), "vacation-fund");
        assert_eq!(id.to_string(), "vacation-fund");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = ObjectiveId::from_raw("a");
        let b = ObjectiveId::from_raw("b");
        assert!(a < b);
    }

    #[test]
    fn test_serialization() {
        let id = ObjectiveId::from_raw("gol-deadbeef");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"gol-deadbeef\"");
        let back: ObjectiveId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
