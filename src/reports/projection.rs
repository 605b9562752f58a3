//! Projection report
//!
//! Assembles the full engine output into the one record the display layer
//! consumes: the calendar grid, per-objective timelines, aggregate stats
//! over both the full and the filtered collection, forecasts, the query
//! view itself, and the diagnostics list. The report is a derived view,
//! recomputed on every call; it is never the source of truth.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::engine::{
    aggregate, build_grid_for, curves, forecast, is_degenerate_span, project, query,
    AggregateStats, GoalCurves, GoalForecast, PeriodBucket, QueryParams, WindowParams,
};
use crate::error::{Diagnostic, GoalGridError, GoalGridResult};
use crate::models::{FinancialGoal, ObjectiveId};

/// One objective's sequence of projected buckets across the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalTimeline {
    pub goal_id: ObjectiveId,
    pub goal_name: String,
    pub buckets: Vec<PeriodBucket>,
}

/// One objective's forecast plus its chart curves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalForecastEntry {
    pub goal_id: ObjectiveId,
    pub forecast: GoalForecast,
    pub curves: GoalCurves,
}

/// The full projection report consumed by the display layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    /// The "now" the report was computed against
    pub generated_for: NaiveDate,
    pub window: WindowParams,
    /// Period-start dates of the viewing window
    pub grid: Vec<NaiveDate>,
    /// The filtered and sorted display collection
    pub goals: Vec<FinancialGoal>,
    /// Timelines for the display collection, minus invalid-range goals
    pub timelines: Vec<GoalTimeline>,
    /// Forecasts for the display collection, minus invalid-range goals
    pub forecasts: Vec<GoalForecastEntry>,
    /// Stats over the unfiltered collection (dashboard totals)
    pub overall_stats: AggregateStats,
    /// Stats over the filtered collection (panel-local)
    pub filtered_stats: AggregateStats,
    /// Everything the engine degraded on instead of failing
    pub diagnostics: Vec<Diagnostic>,
}

impl ProjectionReport {
    /// Assemble a best-effort report for one snapshot of the collection.
    ///
    /// Never fails: bad per-objective data lands in `diagnostics` and the
    /// affected objective drops out of timelines/forecasts only. The
    /// query view and aggregates always cover the whole snapshot.
    pub fn assemble(
        all_goals: &[FinancialGoal],
        window: &WindowParams,
        params: &QueryParams,
        now: NaiveDate,
    ) -> Self {
        let (goals, mut diagnostics) = query(all_goals, params);
        let grid = build_grid_for(window);

        let overall_stats = aggregate(all_goals);
        let filtered_stats = aggregate(&goals);

        let mut timelines = Vec::with_capacity(goals.len());
        let mut forecasts = Vec::with_capacity(goals.len());

        for goal in &goals {
            if goal.deadline < goal.start_date {
                diagnostics.push(Diagnostic::InvalidRange {
                    id: goal.id.to_string(),
                    start: goal.start_date.to_string(),
                    deadline: goal.deadline.to_string(),
                });
                continue;
            }
            if goal.target_amount.is_zero() {
                diagnostics.push(Diagnostic::ZeroTarget {
                    id: goal.id.to_string(),
                });
            }
            if is_degenerate_span(goal, window.granularity) {
                diagnostics.push(Diagnostic::DegenerateSpan {
                    id: goal.id.to_string(),
                });
            }

            let buckets = grid
                .iter()
                .map(|bucket| project(goal, *bucket, window.granularity, now))
                .collect();
            timelines.push(GoalTimeline {
                goal_id: goal.id.clone(),
                goal_name: goal.name.clone(),
                buckets,
            });

            forecasts.push(GoalForecastEntry {
                goal_id: goal.id.clone(),
                forecast: forecast(goal, now),
                curves: curves(goal, &grid, window.granularity, now),
            });
        }

        Self {
            generated_for: now,
            window: *window,
            grid,
            goals,
            timelines,
            forecasts,
            overall_stats,
            filtered_stats,
            diagnostics,
        }
    }

    /// Look up a goal's timeline by id
    pub fn timeline_for(&self, id: &ObjectiveId) -> Option<&GoalTimeline> {
        self.timelines.iter().find(|t| &t.goal_id == id)
    }

    /// Look up a goal's forecast by id
    pub fn forecast_for(&self, id: &ObjectiveId) -> Option<&GoalForecastEntry> {
        self.forecasts.iter().find(|f| &f.goal_id == id)
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> GoalGridResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Export the timeline matrix to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> GoalGridResult<()> {
        writeln!(writer, "Goal,Bucket,Active,Start,End,Current,Fraction")
            .map_err(|e| GoalGridError::Export(e.to_string()))?;

        for timeline in &self.timelines {
            for bucket in &timeline.buckets {
                writeln!(
                    writer,
                    "{},{},{},{},{},{},{:.3}",
                    timeline.goal_name,
                    bucket.date,
                    bucket.is_active,
                    bucket.is_start,
                    bucket.is_end,
                    bucket.is_current,
                    bucket.progress_fraction,
                )
                .map_err(|e| GoalGridError::Export(e.to_string()))?;
            }
        }

        Ok(())
    }

    /// Format a one-screen summary for terminal display
    pub fn summary(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Projection Report - {}\n", self.generated_for));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "Goals: {} total, {} shown | Overall progress: {}% ({} of {})\n\n",
            self.overall_stats.count,
            self.goals.len(),
            self.overall_stats.overall_progress_percent,
            self.overall_stats.total_current,
            self.overall_stats.total_target,
        ));

        output.push_str(&format!(
            "{:<28} {:>9} {:>12} {:>12}\n",
            "Goal", "Progress", "Deadline", "Required/mo"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for goal in &self.goals {
            let required = self
                .forecast_for(&goal.id)
                .map(|f| f.forecast.required_monthly_contribution.to_string())
                .unwrap_or_else(|| "-".to_string());

            output.push_str(&format!(
                "{} {:<26} {:>8}% {:>12} {:>12}\n",
                goal.icon.symbol(),
                goal.name,
                goal.progress_percent(),
                goal.deadline,
                required,
            ));
        }

        if !self.diagnostics.is_empty() {
            output.push('\n');
            for diagnostic in &self.diagnostics {
                output.push_str(&format!("! {}\n", diagnostic));
            }
        }

        output
    }
}
