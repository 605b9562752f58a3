//! Forecast engine
//!
//! Money-based forward projection for one objective: how much per month the
//! deadline demands, when the current contribution rate actually lands, and
//! the forecast-vs-expected curve pair the dashboard charts. Distinct from
//! the interval projector, which interpolates elapsed time only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::projector;
use crate::models::{add_months, months_between, FinancialGoal, Granularity, Money};

/// Projected completion of an objective.
///
/// `Never` is an explicit sentinel, not an error: a goal with no monthly
/// contribution (or no meaningful target) simply has no completion date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "date", rename_all = "kebab-case")]
pub enum Completion {
    By(NaiveDate),
    Never,
}

impl Completion {
    pub fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }
}

/// Forward projection for one objective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalForecast {
    /// Whole months until the deadline, floored at 1 to keep the
    /// required-contribution division defined
    pub months_remaining: i64,
    /// Contribution per month needed to hit the deadline, rounded up to
    /// the next whole currency unit; 0 once the target is reached
    pub required_monthly_contribution: Money,
    /// Where the current contribution rate actually lands
    pub projected_completion: Completion,
    /// Projected completion strictly precedes the deadline
    pub is_ahead_of_schedule: bool,
}

/// Expected-vs-projected progress series over one grid.
///
/// `expected` is the time-linear fraction from the interval projector;
/// `projected` extrapolates the current amount forward at the monthly
/// contribution rate. Two independent curves over the same buckets,
/// never conflated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalCurves {
    pub expected: Vec<f64>,
    pub projected: Vec<f64>,
}

/// Compute the forward projection for one objective as of `now`.
pub fn forecast(goal: &FinancialGoal, now: NaiveDate) -> GoalForecast {
    // A deadline in the past or the current month still yields 1
    let months_remaining = months_between(now, goal.deadline).max(1);
    let remaining = goal.remaining_amount();
    let required_monthly_contribution = remaining.div_ceil_dollars(months_remaining);

    let projected_completion = if goal.target_amount.is_zero() {
        Completion::Never
    } else if remaining.is_zero() {
        // Already at or past target
        Completion::By(now)
    } else if goal.monthly_contribution.is_positive() {
        let periods_needed = div_ceil(remaining.cents(), goal.monthly_contribution.cents());
        Completion::By(add_months(now, periods_needed))
    } else {
        Completion::Never
    };

    let is_ahead_of_schedule = match projected_completion {
        Completion::By(date) => date < goal.deadline,
        Completion::Never => false,
    };

    GoalForecast {
        months_remaining,
        required_monthly_contribution,
        projected_completion,
        is_ahead_of_schedule,
    }
}

/// Compute the expected and projected progress curves over a grid.
///
/// Both series have exactly one entry per grid bucket. Buckets at or
/// before `now` report the current amount; extrapolation applies forward
/// only, so the two curves stay comparable at the current bucket.
pub fn curves(
    goal: &FinancialGoal,
    grid: &[NaiveDate],
    granularity: Granularity,
    now: NaiveDate,
) -> GoalCurves {
    let expected = grid
        .iter()
        .map(|bucket| projector::project(goal, *bucket, granularity, now).progress_fraction)
        .collect();

    let projected = grid
        .iter()
        .map(|bucket| {
            if goal.target_amount.is_zero() {
                return 0.0;
            }
            let months_ahead = months_between(now, *bucket).max(0);
            let amount = goal.current_amount + goal.monthly_contribution.times(months_ahead);
            amount.ratio_of(goal.target_amount).clamp(0.0, 1.0)
        })
        .collect();

    GoalCurves {
        expected,
        projected,
    }
}

/// Integer ceiling division for positive divisors
fn div_ceil(numerator: i64, divisor: i64) -> i64 {
    (numerator + divisor - 1) / divisor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::grid::build_grid;
    use crate::models::GoalStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_goal() -> FinancialGoal {
        let mut g = FinancialGoal::new(
            "Emergency Fund",
            "savings",
            Money::from_dollars(5000),
            date(2024, 1, 1),
            date(2024, 12, 1),
        );
        g.current_amount = Money::from_dollars(1500);
        g.monthly_contribution = Money::from_dollars(300);
        g.status = GoalStatus::InProgress;
        g
    }

    #[test]
    fn test_required_contribution() {
        // target 1000, current 400, 3 months -> ceil(600/3) = 200
        let mut g = sample_goal();
        g.target_amount = Money::from_dollars(1000);
        g.current_amount = Money::from_dollars(400);
        g.deadline = date(2024, 9, 1);

        let f = forecast(&g, date(2024, 6, 1));
        assert_eq!(f.months_remaining, 3);
        assert_eq!(f.required_monthly_contribution, Money::from_dollars(200));
    }

    #[test]
    fn test_required_contribution_rounds_up() {
        // 3500 remaining over 6 months -> 584
        let g = sample_goal();
        let f = forecast(&g, date(2024, 6, 1));
        assert_eq!(f.months_remaining, 6);
        assert_eq!(f.required_monthly_contribution, Money::from_dollars(584));
    }

    #[test]
    fn test_months_remaining_floors_at_one() {
        let g = sample_goal();
        // deadline already passed
        let f = forecast(&g, date(2025, 3, 1));
        assert_eq!(f.months_remaining, 1);
        // deadline in the current month
        let f = forecast(&g, date(2024, 12, 15));
        assert_eq!(f.months_remaining, 1);
    }

    #[test]
    fn test_projected_completion_from_run_rate() {
        // 3500 remaining at 300/month -> ceil = 12 months out
        let g = sample_goal();
        let f = forecast(&g, date(2024, 6, 1));
        assert_eq!(f.projected_completion, Completion::By(date(2025, 6, 1)));
        // lands after the Dec 2024 deadline
        assert!(!f.is_ahead_of_schedule);
    }

    #[test]
    fn test_ahead_of_schedule() {
        let mut g = sample_goal();
        g.monthly_contribution = Money::from_dollars(1000);
        // 3500 remaining at 1000/month -> 4 months -> Oct 2024, before Dec
        let f = forecast(&g, date(2024, 6, 1));
        assert_eq!(f.projected_completion, Completion::By(date(2024, 10, 1)));
        assert!(f.is_ahead_of_schedule);
    }

    #[test]
    fn test_zero_contribution_never_completes() {
        let mut g = sample_goal();
        g.monthly_contribution = Money::zero();
        let f = forecast(&g, date(2024, 6, 1));
        assert!(f.projected_completion.is_never());
        assert!(!f.is_ahead_of_schedule);
    }

    #[test]
    fn test_overshot_target_clamps_to_zero_required() {
        let mut g = sample_goal();
        g.current_amount = Money::from_dollars(6000);
        let f = forecast(&g, date(2024, 6, 1));
        assert_eq!(f.required_monthly_contribution, Money::zero());
        assert_eq!(f.projected_completion, Completion::By(date(2024, 6, 1)));
        assert!(f.is_ahead_of_schedule);
    }

    #[test]
    fn test_zero_target_is_undefined_not_fatal() {
        let mut g = sample_goal();
        g.target_amount = Money::zero();
        let f = forecast(&g, date(2024, 6, 1));
        assert_eq!(f.required_monthly_contribution, Money::zero());
        assert!(f.projected_completion.is_never());
    }

    #[test]
    fn test_curves_lengths_match_grid() {
        let g = sample_goal();
        let now = date(2024, 6, 1);
        let grid = build_grid(now, Granularity::Month, 18, 6);
        let c = curves(&g, &grid, Granularity::Month, now);
        assert_eq!(c.expected.len(), grid.len());
        assert_eq!(c.projected.len(), grid.len());
    }

    #[test]
    fn test_projected_curve_extrapolates_forward_only() {
        let g = sample_goal();
        let now = date(2024, 6, 1);
        let grid = build_grid(now, Granularity::Month, 18, 6);
        let c = curves(&g, &grid, Granularity::Month, now);

        let at_now = 1500.0 / 5000.0;
        // past buckets hold the current ratio
        assert!((c.projected[0] - at_now).abs() < 1e-9);
        assert!((c.projected[6] - at_now).abs() < 1e-9);
        // one month out: +300 on 5000
        assert!((c.projected[7] - 1800.0 / 5000.0).abs() < 1e-9);
        // monotonic and clamped
        for pair in c.projected.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!(c.projected.iter().all(|f| (0.0..=1.0).contains(f)));
    }

    #[test]
    fn test_curves_are_independent() {
        // high contribution, short elapsed time: projected outruns expected
        let mut g = sample_goal();
        g.monthly_contribution = Money::from_dollars(2000);
        let now = date(2024, 6, 1);
        let grid = build_grid(now, Granularity::Month, 18, 6);
        let c = curves(&g, &grid, Granularity::Month, now);
        assert!(c.projected[9] > c.expected[9]);
    }

    #[test]
    fn test_completion_serialization() {
        let by = Completion::By(date(2025, 6, 1));
        let json = serde_json::to_string(&by).unwrap();
        assert!(json.contains("\"by\""));
        let never = serde_json::to_string(&Completion::Never).unwrap();
        assert!(never.contains("\"never\""));
        let back: Completion = serde_json::from_str(&json).unwrap();
        assert_eq!(by, back);
    }
}
