//! Aggregate statistics calculator
//!
//! Reduces an objective collection into the summary numbers the dashboard
//! header and distribution charts consume. Total over any collection size,
//! including zero: an empty dashboard is a normal state, so a zero total
//! target yields 0% overall progress rather than NaN.

use serde::{Deserialize, Serialize};

use crate::models::{FinancialGoal, GoalStatus, Money, Priority};

/// Count of goals holding one status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: GoalStatus,
    pub count: usize,
}

/// Count of goals holding one priority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: usize,
}

/// Per-category slice of the distribution chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    pub count: usize,
    pub total_target: Money,
}

/// Summary statistics over an objective collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub count: usize,
    pub total_target: Money,
    pub total_current: Money,
    /// round(total_current / total_target * 100); 0 when total_target is 0
    pub overall_progress_percent: i64,
    /// Every status variant, in declaration order
    pub by_status: Vec<StatusCount>,
    /// Every priority variant, critical first
    pub by_priority: Vec<PriorityCount>,
    /// Categories in first-seen order, to keep chart legends stable
    pub by_category: Vec<CategoryStats>,
}

impl AggregateStats {
    /// Stats for an empty collection: all defined zeros, no error
    pub fn empty() -> Self {
        aggregate(&[])
    }
}

/// Reduce a collection of goals to its aggregate statistics.
///
/// Pure, total function over any slice, including the empty one.
pub fn aggregate(goals: &[FinancialGoal]) -> AggregateStats {
    let total_target: Money = goals.iter().map(|g| g.target_amount).sum();
    let total_current: Money = goals.iter().map(|g| g.current_amount).sum();

    let by_status = GoalStatus::ALL
        .iter()
        .map(|status| StatusCount {
            status: *status,
            count: goals.iter().filter(|g| g.status == *status).count(),
        })
        .collect();

    let by_priority = Priority::ALL
        .iter()
        .map(|priority| PriorityCount {
            priority: *priority,
            count: goals.iter().filter(|g| g.priority == *priority).count(),
        })
        .collect();

    // First-seen category ordering, not alphabetical
    let mut by_category: Vec<CategoryStats> = Vec::new();
    for goal in goals {
        match by_category.iter_mut().find(|c| c.category == goal.category) {
            Some(entry) => {
                entry.count += 1;
                entry.total_target += goal.target_amount;
            }
            None => by_category.push(CategoryStats {
                category: goal.category.clone(),
                count: 1,
                total_target: goal.target_amount,
            }),
        }
    }

    AggregateStats {
        count: goals.len(),
        total_target,
        total_current,
        overall_progress_percent: total_current.percent_of(total_target),
        by_status,
        by_priority,
        by_category,
    }
}
