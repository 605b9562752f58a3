//! Goal query engine
//!
//! Filtering, searching and sorting of an objective collection for the
//! display layer. Filters come in as the raw strings the UI state holds
//! ("all", a status keyword, free text); unknown values degrade to the
//! default with a diagnostic instead of failing the call. Every comparator
//! ends in an id tie-break, so output order is a total order independent
//! of input order. Inputs are never mutated.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::Diagnostic;
use crate::models::{FinancialGoal, GoalStatus};

/// Sort key for the goal list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Progress,
    Deadline,
    Priority,
    Amount,
}

impl SortKey {
    /// Parse a sort keyword
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "progress" => Some(Self::Progress),
            "deadline" => Some(Self::Deadline),
            "priority" => Some(Self::Priority),
            "amount" => Some(Self::Amount),
            _ => None,
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Progress
    }
}

/// Query parameters as the display layer holds them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    #[serde(default = "all_keyword")]
    pub status_filter: String,
    #[serde(default = "all_keyword")]
    pub category_filter: String,
    #[serde(default)]
    pub search_text: String,
    #[serde(default = "default_sort_keyword")]
    pub sort_key: String,
}

fn all_keyword() -> String {
    "all".to_string()
}

fn default_sort_keyword() -> String {
    "progress".to_string()
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            status_filter: all_keyword(),
            category_filter: all_keyword(),
            search_text: String::new(),
            sort_key: default_sort_keyword(),
        }
    }
}

impl QueryParams {
    pub fn sorted_by(sort_key: SortKey) -> Self {
        let keyword = match sort_key {
            SortKey::Progress => "progress",
            SortKey::Deadline => "deadline",
            SortKey::Priority => "priority",
            SortKey::Amount => "amount",
        };
        Self {
            sort_key: keyword.to_string(),
            ..Self::default()
        }
    }
}

/// Filter, search and sort a goal collection.
///
/// Returns the new, sorted collection plus any diagnostics for parameter
/// values the engine had to fall back on. Filters apply status, then
/// category, then search; all three AND together.
pub fn query(goals: &[FinancialGoal], params: &QueryParams) -> (Vec<FinancialGoal>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();

    let status_filter = parse_status_filter(&params.status_filter, &mut diagnostics);
    let category_filter = if params.category_filter.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(params.category_filter.as_str())
    };
    let needle = params.search_text.trim().to_lowercase();

    let sort_key = if params.sort_key.trim().is_empty() {
        SortKey::default()
    } else {
        SortKey::parse(&params.sort_key).unwrap_or_else(|| {
            diagnostics.push(Diagnostic::UnknownSortKey {
                value: params.sort_key.clone(),
            });
            SortKey::default()
        })
    };

    let mut result: Vec<FinancialGoal> = goals
        .iter()
        .filter(|g| status_filter.map_or(true, |s| g.status == s))
        .filter(|g| category_filter.map_or(true, |c| g.category == c))
        .filter(|g| needle.is_empty() || matches_search(g, &needle))
        .cloned()
        .collect();

    result.sort_by(|a, b| compare(a, b, sort_key));

    (result, diagnostics)
}

fn parse_status_filter(raw: &str, diagnostics: &mut Vec<Diagnostic>) -> Option<GoalStatus> {
    if raw.trim().is_empty() || raw.eq_ignore_ascii_case("all") {
        return None;
    }
    match GoalStatus::parse(raw) {
        Some(status) => Some(status),
        None => {
            diagnostics.push(Diagnostic::UnknownFilterValue {
                field: "status".to_string(),
                value: raw.to_string(),
            });
            None
        }
    }
}

/// Case-insensitive substring match over name, category and description
fn matches_search(goal: &FinancialGoal, needle: &str) -> bool {
    goal.name.to_lowercase().contains(needle)
        || goal.category.to_lowercase().contains(needle)
        || goal.description.to_lowercase().contains(needle)
}

/// Total-order comparator for the given sort key.
///
/// Each chain ends with the id tie-break, so no two distinct goals ever
/// compare equal and repeated sorts are deterministic.
fn compare(a: &FinancialGoal, b: &FinancialGoal, sort_key: SortKey) -> Ordering {
    let primary = match sort_key {
        // highest progress first, earlier deadline breaks ties
        SortKey::Progress => b
            .progress_percent()
            .cmp(&a.progress_percent())
            .then_with(|| a.deadline.cmp(&b.deadline)),
        // earliest deadline first, higher priority breaks ties
        SortKey::Deadline => a
            .deadline
            .cmp(&b.deadline)
            .then_with(|| a.priority.rank().cmp(&b.priority.rank())),
        // critical first, earlier deadline breaks ties
        SortKey::Priority => a
            .priority
            .rank()
            .cmp(&b.priority.rank())
            .then_with(|| a.deadline.cmp(&b.deadline)),
        // largest target first, name breaks ties
        SortKey::Amount => b
            .target_amount
            .cmp(&a.target_amount)
            .then_with(|| a.name.cmp(&b.name)),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}
