//! Reports module for goalgrid
//!
//! Assembles engine output into the records the display layer renders.

pub mod projection;

pub use projection::{GoalForecastEntry, GoalTimeline, ProjectionReport};
