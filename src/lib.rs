//! goalgrid - Goal and budget timeline projection engine
//!
//! This library provides the computational core of a personal-finance
//! dashboard: it takes a snapshot of financial objectives (savings goals and
//! budget categories) and derives a calendar grid for a viewing window,
//! per-objective progress timelines, aggregate statistics, forward
//! projections, and filtered/sorted views of the collection.
//!
//! The engine is entirely synchronous and side-effect-free. Every component
//! is a pure function of its explicit inputs, operating on immutable
//! snapshots; rendering, persistence, and state management live in the
//! consuming display layer.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types and report diagnostics
//! - `models`: Core data models (goals, budget categories, money, periods)
//! - `engine`: Grid building, interval projection, aggregation, forecasting,
//!   and querying
//! - `reports`: Assembly of engine output into projection reports
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use goalgrid::engine::{QueryParams, WindowParams};
//! use goalgrid::models::{FinancialGoal, Money};
//! use goalgrid::reports::ProjectionReport;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let deadline = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
//! let mut goal = FinancialGoal::new(
//!     "Emergency Fund",
//!     "savings",
//!     Money::from_dollars(5000),
//!     start,
//!     deadline,
//! );
//! goal.current_amount = Money::from_dollars(1500);
//! goal.monthly_contribution = Money::from_dollars(300);
//!
//! let now = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let report = ProjectionReport::assemble(
//!     &[goal],
//!     &WindowParams::year_view(now),
//!     &QueryParams::default(),
//!     now,
//! );
//! assert_eq!(report.grid.len(), 18);
//! ```

pub mod engine;
pub mod error;
pub mod models;
pub mod reports;

pub use error::{Diagnostic, GoalGridError, GoalGridResult};
