//! Budget category model
//!
//! A spending envelope with a limit and an observed spend. Spending past the
//! limit is a signal the dashboard highlights, not a data error. For
//! timeline and forecast purposes a category can be viewed as a uniform
//! objective via [`BudgetCategory::as_goal`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::goal::{FinancialGoal, GoalStatus, Priority};
use super::icon::IconKey;
use super::ids::ObjectiveId;
use super::money::Money;

/// Direction the category's spending is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// A budget category with a spending limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: ObjectiveId,
    pub name: String,
    pub limit: Money,
    pub spent: Money,
    pub trend: Trend,
    pub trend_percentage: f64,
    /// Display metadata, opaque to the engine
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: IconKey,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, limit: Money) -> Self {
        Self {
            id: ObjectiveId::new(),
            name: name.into(),
            limit,
            spent: Money::zero(),
            trend: Trend::Stable,
            trend_percentage: 0.0,
            color: String::new(),
            icon: IconKey::Other,
        }
    }

    /// Spent as a rounded percentage of the limit; exceeds 100 when over
    pub fn utilization_percent(&self) -> i64 {
        self.spent.percent_of(self.limit)
    }

    /// Whether spending has passed the limit
    pub fn is_over_limit(&self) -> bool {
        self.spent > self.limit
    }

    /// Budget left in the envelope, clamped at zero
    pub fn remaining(&self) -> Money {
        (self.limit - self.spent).clamp_non_negative()
    }

    /// View this category as a uniform objective over the given interval,
    /// so it flows through the same grid/projection/query machinery as a
    /// savings goal (limit maps to target, spent to current).
    pub fn as_goal(&self, start_date: NaiveDate, deadline: NaiveDate) -> FinancialGoal {
        FinancialGoal {
            id: self.id.clone(),
            name: self.name.clone(),
            description: String::new(),
            category: self.name.clone(),
            priority: Priority::Medium,
            status: GoalStatus::InProgress,
            target_amount: self.limit,
            current_amount: self.spent,
            start_date,
            deadline,
            monthly_contribution: Money::zero(),
            color: self.color.clone(),
            icon: self.icon,
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} ({}%)",
            self.name,
            self.spent,
            self.limit,
            self.utilization_percent()
        )
    }
}
