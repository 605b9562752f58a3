//! Calendar grid builder
//!
//! Produces the ordered sequence of period-start dates spanning a viewing
//! window anchored at a reference date. All arithmetic happens at month
//! resolution; quarter and year granularities just step in wider strides.
//! Buckets carry their start date only: the start/end/current flags are
//! objective-relative and get attached later by the interval projector.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{add_months, CalendarPeriod, Granularity};

/// Viewing-window parameters supplied by the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowParams {
    pub reference_date: NaiveDate,
    pub granularity: Granularity,
    pub window_size: usize,
    pub past_bias: usize,
}

impl WindowParams {
    pub fn new(
        reference_date: NaiveDate,
        granularity: Granularity,
        window_size: usize,
        past_bias: usize,
    ) -> Self {
        Self {
            reference_date,
            granularity,
            window_size,
            past_bias,
        }
    }

    /// "Year" preset: 18 monthly buckets, 6 before the reference
    pub fn year_view(reference_date: NaiveDate) -> Self {
        Self::new(reference_date, Granularity::Month, 18, 6)
    }

    /// "Quarter" preset: 9 quarterly buckets, 3 before the reference
    pub fn quarter_view(reference_date: NaiveDate) -> Self {
        Self::new(reference_date, Granularity::Quarter, 9, 3)
    }

    /// "Month" preset: 6 monthly buckets, 1 before the reference
    pub fn month_view(reference_date: NaiveDate) -> Self {
        Self::new(reference_date, Granularity::Month, 6, 1)
    }
}

/// Build the calendar grid for a viewing window.
///
/// Returns exactly `window_size` period-start dates, beginning `past_bias`
/// periods before the period containing `reference_date`. Pure function of
/// its inputs.
pub fn build_grid(
    reference_date: NaiveDate,
    granularity: Granularity,
    window_size: usize,
    past_bias: usize,
) -> Vec<NaiveDate> {
    let anchor = CalendarPeriod::containing(reference_date, granularity).start_date();
    let step = granularity.months_per_period();
    let first = add_months(anchor, -(past_bias as i64) * step);

    (0..window_size)
        .map(|i| add_months(first, i as i64 * step))
        .collect()
}

/// Build the grid described by a [`WindowParams`]
pub fn build_grid_for(params: &WindowParams) -> Vec<NaiveDate> {
    build_grid(
        params.reference_date,
        params.granularity,
        params.window_size,
        params.past_bias,
    )
}
