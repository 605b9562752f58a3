//! Projection engine for goalgrid
//!
//! The computational core: calendar grid construction, per-objective
//! interval projection, aggregate statistics, money-based forecasting, and
//! collection querying. Every function here is pure and synchronous; the
//! report assembler in `reports` orchestrates them.

pub mod aggregate;
pub mod forecast;
pub mod grid;
pub mod projector;
pub mod query;

pub use aggregate::{aggregate, AggregateStats, CategoryStats, PriorityCount, StatusCount};
pub use forecast::{curves, forecast, Completion, GoalCurves, GoalForecast};
pub use grid::{build_grid, build_grid_for, WindowParams};
pub use projector::{is_degenerate_span, project, span_periods, PeriodBucket};
pub use query::{query, QueryParams, SortKey};
