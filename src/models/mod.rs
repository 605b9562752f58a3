//! Core data models for goalgrid
//!
//! This module contains the data structures the projection engine operates
//! on: money, calendar periods, financial goals, budget categories, and the
//! opaque display metadata that passes through untouched.

pub mod budget;
pub mod goal;
pub mod icon;
pub mod ids;
pub mod money;
pub mod period;

pub use budget::{BudgetCategory, Trend};
pub use goal::{FinancialGoal, GoalStatus, GoalValidationError, Priority};
pub use icon::IconKey;
pub use ids::ObjectiveId;
pub use money::Money;
pub use period::{
    add_months, months_between, periods_between, CalendarPeriod, Granularity, PeriodParseError,
};
