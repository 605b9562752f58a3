//! Custom error and diagnostic types for goalgrid
//!
//! This module defines the error hierarchy for the engine using thiserror
//! for ergonomic error definitions, plus the `Diagnostic` type that travels
//! inside projection reports. Diagnostics are degraded-but-computed signals;
//! `GoalGridError` is reserved for genuinely failed operations such as
//! parsing caller input or serializing a report.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for goalgrid operations
#[derive(Error, Debug)]
pub enum GoalGridError {
    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Period or granularity parsing errors
    #[error("Period error: {0}")]
    Period(String),

    /// Money parsing errors
    #[error("Money error: {0}")]
    Money(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl GoalGridError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for GoalGridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for goalgrid operations
pub type GoalGridResult<T> = Result<T, GoalGridError>;

/// A non-fatal, per-objective (or per-parameter) degradation signal.
///
/// The assembler always returns a best-effort report; anything it could not
/// compute cleanly is listed here instead of failing the whole call. The
/// display layer renders whatever was computed and may surface these as
/// warnings.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// Objective deadline precedes its start date; excluded from
    /// timelines and forecasts.
    #[error("objective {id}: deadline {deadline} precedes start date {start}")]
    InvalidRange {
        id: String,
        start: String,
        deadline: String,
    },

    /// Objective has a zero target amount; progress reported as 0% and
    /// completion as undefined.
    #[error("objective {id}: target amount is zero")]
    ZeroTarget { id: String },

    /// Objective start and deadline fall in the same (or inverted) period
    /// at the grid granularity; every active bucket reports full progress.
    #[error("objective {id}: start and deadline share one period")]
    DegenerateSpan { id: String },

    /// Caller passed a sort key the engine does not know; the default
    /// (progress) was used instead.
    #[error("unknown sort key {value:?}, falling back to progress")]
    UnknownSortKey { value: String },

    /// Caller passed a filter value the engine does not know; the filter
    /// was treated as "all".
    #[error("unknown {field} filter {value:?}, falling back to all")]
    UnknownFilterValue { field: String, value: String },
}

impl Diagnostic {
    /// The objective this diagnostic concerns, if any
    pub fn objective_id(&self) -> Option<&str> {
        match self {
            Self::InvalidRange { id, .. }
            | Self::ZeroTarget { id }
            | Self::DegenerateSpan { id } => Some(id),
            Self::UnknownSortKey { .. } | Self::UnknownFilterValue { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GoalGridError::Validation("test error".into());
        assert_eq!(err.to_string(), "Validation error: test error");
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i64>("not a number").unwrap_err();
        let err: GoalGridError = json_err.into();
        assert!(matches!(err, GoalGridError::Json(_)));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::ZeroTarget {
            id: "gol-1234".into(),
        };
        assert_eq!(
            diag.to_string(),
            "objective gol-1234: target amount is zero"
        );
        assert_eq!(diag.objective_id(), Some("gol-1234"));
    }

    #[test]
    fn test_diagnostic_serialization() {
        let diag = Diagnostic::UnknownSortKey {
            value: "magic".into(),
        };
        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains("unknown-sort-key"));
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(diag, back);
        assert_eq!(back.objective_id(), None);
    }
}
