//! Interval projector
//!
//! For one objective and one grid bucket, decides whether the objective's
//! [start, deadline] interval overlaps the bucket's period and interpolates
//! a time-based progress fraction across the objective's span. The fraction
//! is linear in elapsed periods and deliberately independent of money:
//! it is the "expected by now" curve the dashboard draws against the
//! contribution-based forecast.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{periods_between, CalendarPeriod, FinancialGoal, Granularity};

/// One bucket of an objective's timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodBucket {
    /// First day of the bucket's period
    pub date: NaiveDate,
    /// The bucket's period intersects the objective's [start, deadline]
    pub is_active: bool,
    /// Bucket period contains the objective's start date
    pub is_start: bool,
    /// Bucket period contains the objective's deadline
    pub is_end: bool,
    /// Bucket period contains `now`
    pub is_current: bool,
    /// Bucket period is entirely before the period containing `now`
    pub is_past: bool,
    /// Bucket period is entirely after the period containing `now`
    pub is_future: bool,
    /// Time-elapsed fraction of the objective's span, in [0, 1]
    pub progress_fraction: f64,
}

/// Inclusive number of periods the objective spans at this granularity.
///
/// One means start and deadline share a period; zero or negative means the
/// deadline period precedes the start period. Both are degenerate for
/// interpolation purposes and reported via a diagnostic by the assembler.
pub fn span_periods(goal: &FinancialGoal, granularity: Granularity) -> i64 {
    periods_between(goal.start_date, goal.deadline, granularity) + 1
}

/// Whether interpolation across this objective degenerates to a constant
pub fn is_degenerate_span(goal: &FinancialGoal, granularity: Granularity) -> bool {
    span_periods(goal, granularity) <= 1
}

/// Project one objective onto one grid bucket.
///
/// Pure function: flags and fraction are derived from the four inputs only.
pub fn project(
    goal: &FinancialGoal,
    bucket_date: NaiveDate,
    granularity: Granularity,
    now: NaiveDate,
) -> PeriodBucket {
    let bucket = CalendarPeriod::containing(bucket_date, granularity);
    let now_period = CalendarPeriod::containing(now, granularity);

    let is_active =
        bucket.start_date() <= goal.deadline && bucket.end_date() >= goal.start_date;
    let is_start = bucket == CalendarPeriod::containing(goal.start_date, granularity);
    let is_end = bucket == CalendarPeriod::containing(goal.deadline, granularity);
    let is_current = bucket == now_period;

    let progress_fraction = if !is_active {
        0.0
    } else if is_degenerate_span(goal, granularity) {
        1.0
    } else {
        let total = span_periods(goal, granularity) as f64;
        let elapsed = periods_between(goal.start_date, bucket_date, granularity) as f64;
        (elapsed / total).clamp(0.0, 1.0)
    };

    PeriodBucket {
        date: bucket.start_date(),
        is_active,
        is_start,
        is_end,
        is_current,
        is_past: bucket < now_period,
        is_future: bucket > now_period,
        progress_fraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::grid::build_grid;
    use crate::models::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(start: NaiveDate, deadline: NaiveDate) -> FinancialGoal {
        FinancialGoal::new("Trip", "travel", Money::from_dollars(5000), start, deadline)
    }

    #[test]
    fn test_active_iff_interval_overlaps_bucket() {
        let g = goal(date(2024, 3, 10), date(2024, 8, 20));
        let now = date(2024, 6, 1);

        // fully before, overlapping, fully after
        assert!(!project(&g, date(2024, 2, 1), Granularity::Month, now).is_active);
        assert!(project(&g, date(2024, 3, 1), Granularity::Month, now).is_active);
        assert!(project(&g, date(2024, 8, 1), Granularity::Month, now).is_active);
        assert!(!project(&g, date(2024, 9, 1), Granularity::Month, now).is_active);
    }

    #[test]
    fn test_start_end_current_flags() {
        let g = goal(date(2024, 1, 1), date(2024, 12, 1));
        let now = date(2024, 6, 1);

        let jan = project(&g, date(2024, 1, 1), Granularity::Month, now);
        assert!(jan.is_start && !jan.is_end);

        let jun = project(&g, date(2024, 6, 1), Granularity::Month, now);
        assert!(jun.is_current && !jun.is_past && !jun.is_future);

        let dec = project(&g, date(2024, 12, 1), Granularity::Month, now);
        assert!(dec.is_end && dec.is_future);

        let may = project(&g, date(2024, 5, 1), Granularity::Month, now);
        assert!(may.is_past && !may.is_future);
    }

    #[test]
    fn test_same_period_comparison_at_quarter_granularity() {
        // start Jan 10, bucket Feb 1: same quarter, so the bucket is
        // both the start and (given a March deadline) the end quarter
        let g = goal(date(2024, 1, 10), date(2024, 3, 20));
        let b = project(&g, date(2024, 2, 1), Granularity::Quarter, date(2024, 2, 5));
        assert!(b.is_start);
        assert!(b.is_end);
        assert!(b.is_current);
    }

    #[test]
    fn test_interpolation_monotonic_across_grid() {
        let g = goal(date(2024, 1, 1), date(2024, 12, 1));
        let now = date(2024, 6, 1);
        let grid = build_grid(now, Granularity::Month, 18, 6);

        let buckets: Vec<PeriodBucket> = grid
            .iter()
            .map(|d| project(&g, *d, Granularity::Month, now))
            .collect();

        let active: Vec<f64> = buckets
            .iter()
            .filter(|b| b.is_active)
            .map(|b| b.progress_fraction)
            .collect();
        for pair in active.windows(2) {
            assert!(pair[1] >= pair[0]);
        }

        // inactive buckets contribute zero
        assert_eq!(buckets[0].progress_fraction, 0.0);
    }

    #[test]
    fn test_interpolation_values() {
        // Jan..Dec inclusive = 12 periods
        let g = goal(date(2024, 1, 1), date(2024, 12, 1));
        let now = date(2024, 6, 1);

        let jan = project(&g, date(2024, 1, 1), Granularity::Month, now);
        assert_eq!(jan.progress_fraction, 0.0);

        let jul = project(&g, date(2024, 7, 1), Granularity::Month, now);
        assert!((jul.progress_fraction - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_span_reports_full_fraction() {
        let g = goal(date(2024, 5, 3), date(2024, 5, 28));
        assert!(is_degenerate_span(&g, Granularity::Month));

        let b = project(&g, date(2024, 5, 1), Granularity::Month, date(2024, 5, 10));
        assert!(b.is_active);
        assert_eq!(b.progress_fraction, 1.0);

        // outside the span stays zero even for a degenerate goal
        let outside = project(&g, date(2024, 6, 1), Granularity::Month, date(2024, 5, 10));
        assert_eq!(outside.progress_fraction, 0.0);
    }

    #[test]
    fn test_span_periods() {
        let g = goal(date(2024, 1, 1), date(2024, 12, 1));
        assert_eq!(span_periods(&g, Granularity::Month), 12);
        assert_eq!(span_periods(&g, Granularity::Quarter), 4);
        assert_eq!(span_periods(&g, Granularity::Year), 1);
        assert!(is_degenerate_span(&g, Granularity::Year));
    }
}
