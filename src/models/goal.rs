//! Financial goal model
//!
//! A goal is one objective the engine projects: a target amount, a current
//! amount, a [start, deadline] interval, and a planned monthly contribution.
//! Status is caller-owned state: the engine derives progress from the money
//! fields but never rewrites `status` from it, so `completed` at 80% and
//! `in-progress` at 100% both pass through untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::icon::IconKey;
use super::ids::ObjectiveId;
use super::money::Money;

/// Priority of a goal; `Critical` sorts first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// All priorities, in sort order (critical first)
    pub const ALL: [Priority; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Sort rank: critical = 0 ... low = 3
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Parse a priority keyword
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Lifecycle status of a goal, set by the caller (wizard/dialog flow)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Paused,
    Behind,
    Completed,
}

impl GoalStatus {
    /// All statuses, in declaration order
    pub const ALL: [GoalStatus; 5] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Paused,
        Self::Behind,
        Self::Completed,
    ];

    /// Parse a status keyword ("in-progress", "not-started", ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not-started" => Some(Self::NotStarted),
            "in-progress" => Some(Self::InProgress),
            "paused" => Some(Self::Paused),
            "behind" => Some(Self::Behind),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not-started"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Paused => write!(f, "paused"),
            Self::Behind => write!(f, "behind"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A savings goal or other financial objective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub id: ObjectiveId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub status: GoalStatus,
    pub target_amount: Money,
    pub current_amount: Money,
    pub start_date: NaiveDate,
    pub deadline: NaiveDate,
    pub monthly_contribution: Money,
    /// Display metadata, opaque to the engine
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: IconKey,
}

impl FinancialGoal {
    /// Create a goal with a fresh id and sensible defaults
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        target_amount: Money,
        start_date: NaiveDate,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id: ObjectiveId::new(),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            priority: Priority::Medium,
            status: GoalStatus::NotStarted,
            target_amount,
            current_amount: Money::zero(),
            start_date,
            deadline,
            monthly_contribution: Money::zero(),
            color: String::new(),
            icon: IconKey::Other,
        }
    }

    /// Money-based progress, rounded percent clamped to 0..=100.
    ///
    /// Always derived, never stored. A zero target reports 0%; the
    /// assembler flags it with a diagnostic.
    pub fn progress_percent(&self) -> i64 {
        self.current_amount
            .percent_of(self.target_amount)
            .clamp(0, 100)
    }

    /// Amount still needed to reach the target, clamped at zero
    pub fn remaining_amount(&self) -> Money {
        (self.target_amount - self.current_amount).clamp_non_negative()
    }

    /// Check the record's own invariants.
    ///
    /// Violations are reportable per-objective conditions, not reasons to
    /// fail a whole report; the assembler turns them into diagnostics.
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.deadline < self.start_date {
            return Err(GoalValidationError::InvalidRange {
                start: self.start_date,
                deadline: self.deadline,
            });
        }

        if self.target_amount.is_negative() || self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeAmount);
        }

        if self.target_amount.is_zero() {
            return Err(GoalValidationError::ZeroTarget);
        }

        Ok(())
    }
}

impl fmt::Display for FinancialGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {}, {}%)",
            self.name,
            self.current_amount,
            self.target_amount,
            self.progress_percent()
        )
    }
}

/// Error type for goal validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    InvalidRange {
        start: NaiveDate,
        deadline: NaiveDate,
    },
    NegativeAmount,
    ZeroTarget,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, deadline } => {
                write!(f, "Deadline {} precedes start date {}", deadline, start)
            }
            Self::NegativeAmount => write!(f, "Amounts cannot be negative"),
            Self::ZeroTarget => write!(f, "Target amount cannot be zero"),
        }
    }
}

impl std::error::Error for GoalValidationError {}
