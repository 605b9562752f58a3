//! Calendar period representation
//!
//! The timeline grid is computed at month resolution and optionally grouped
//! into quarters or years. `CalendarPeriod` models one bucket of that grid;
//! the free functions at the bottom provide the month arithmetic every
//! engine component shares.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid granularity: how wide one period bucket is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Granularity {
    Month,
    Quarter,
    Year,
}

impl Granularity {
    /// All granularities, in bucket-width order
    pub const ALL: [Granularity; 3] = [Self::Month, Self::Quarter, Self::Year];

    /// Number of calendar months in one period at this granularity
    pub const fn months_per_period(&self) -> i64 {
        match self {
            Self::Month => 1,
            Self::Quarter => 3,
            Self::Year => 12,
        }
    }

    /// Parse a granularity keyword ("month", "quarter", "year")
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" | "monthly" => Ok(Self::Month),
            "quarter" | "quarterly" => Ok(Self::Quarter),
            "year" | "yearly" => Ok(Self::Year),
            _ => Err(PeriodParseError::InvalidGranularity(s.to_string())),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month => write!(f, "month"),
            Self::Quarter => write!(f, "quarter"),
            Self::Year => write!(f, "year"),
        }
    }
}

/// Represents one period bucket of the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CalendarPeriod {
    /// Monthly period (e.g. "2025-03")
    Monthly { year: i32, month: u32 },

    /// Quarterly period (e.g. "2025-Q2")
    Quarterly { year: i32, quarter: u32 },

    /// Yearly period (e.g. "2025")
    Yearly { year: i32 },
}

impl CalendarPeriod {
    /// Create a monthly period
    pub fn monthly(year: i32, month: u32) -> Self {
        Self::Monthly { year, month }
    }

    /// Create a quarterly period
    pub fn quarterly(year: i32, quarter: u32) -> Self {
        Self::Quarterly { year, quarter }
    }

    /// Create a yearly period
    pub fn yearly(year: i32) -> Self {
        Self::Yearly { year }
    }

    /// The period containing `date` at the given granularity
    pub fn containing(date: NaiveDate, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Month => Self::Monthly {
                year: date.year(),
                month: date.month(),
            },
            Granularity::Quarter => Self::Quarterly {
                year: date.year(),
                quarter: (date.month() - 1) / 3 + 1,
            },
            Granularity::Year => Self::Yearly { year: date.year() },
        }
    }

    /// The granularity this period was built at
    pub fn granularity(&self) -> Granularity {
        match self {
            Self::Monthly { .. } => Granularity::Month,
            Self::Quarterly { .. } => Granularity::Quarter,
            Self::Yearly { .. } => Granularity::Year,
        }
    }

    /// Get the start date of this period
    pub fn start_date(&self) -> NaiveDate {
        let (year, month) = match self {
            Self::Monthly { year, month } => (*year, *month),
            Self::Quarterly { year, quarter } => (*year, (quarter - 1) * 3 + 1),
            Self::Yearly { year } => (*year, 1),
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap())
    }

    /// Get the end date of this period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let months = self.granularity().months_per_period();
        add_months(self.start_date(), months) - Duration::days(1)
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Get the next period
    pub fn next(&self) -> Self {
        let step = self.granularity().months_per_period();
        Self::containing(add_months(self.start_date(), step), self.granularity())
    }

    /// Get the previous period
    pub fn prev(&self) -> Self {
        let step = self.granularity().months_per_period();
        Self::containing(add_months(self.start_date(), -step), self.granularity())
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Monthly: "2025-03"
    /// - Quarterly: "2025-Q2"
    /// - Yearly: "2025"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        // Try quarterly format first (contains Q)
        if s.contains('Q') {
            let parts: Vec<&str> = s.split("-Q").collect();
            if parts.len() == 2 {
                let year: i32 = parts[0]
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                let quarter: u32 = parts[1]
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                if !(1..=4).contains(&quarter) {
                    return Err(PeriodParseError::InvalidQuarter(quarter));
                }
                return Ok(Self::Quarterly { year, quarter });
            }
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }

        // Try monthly format (YYYY-MM)
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() == 2 {
            let year: i32 = parts[0]
                .parse()
                .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
            let month: u32 = parts[1]
                .parse()
                .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

            if !(1..=12).contains(&month) {
                return Err(PeriodParseError::InvalidMonth(month));
            }

            return Ok(Self::Monthly { year, month });
        }

        // Yearly format (YYYY)
        if parts.len() == 1 {
            if let Ok(year) = parts[0].parse::<i32>() {
                return Ok(Self::Yearly { year });
            }
        }

        Err(PeriodParseError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for CalendarPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Quarterly { year, quarter } => write!(f, "{:04}-Q{}", year, quarter),
            Self::Yearly { year } => write!(f, "{:04}", year),
        }
    }
}

impl Ord for CalendarPeriod {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.start_date().cmp(&other.start_date())
    }
}

impl PartialOrd for CalendarPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Add a (possibly negative) number of calendar months to a date.
///
/// The day of month is clamped to the length of the target month, so
/// Jan 31 + 1 month = Feb 28/29.
pub fn add_months(date: NaiveDate, months: i64) -> NaiveDate {
    let total = date.year() as i64 * 12 + date.month() as i64 - 1 + months;
    let year = total.div_euclid(12) as i32;
    let month = (total.rem_euclid(12) + 1) as u32;

    let last_day = days_in_month(year, month);
    let day = date.day().min(last_day);
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 1).unwrap())
}

/// Number of days in a calendar month
fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    (next_month.unwrap() - Duration::days(1)).day()
}

/// Signed calendar-month delta from `a` to `b`, ignoring days
pub fn months_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b.year() as i64 - a.year() as i64) * 12 + (b.month() as i64 - a.month() as i64)
}

/// Signed period delta from `a` to `b` at the given granularity.
///
/// Computed on the periods containing each date, so two dates inside the
/// same quarter are zero quarters apart regardless of day.
pub fn periods_between(a: NaiveDate, b: NaiveDate, granularity: Granularity) -> i64 {
    let pa = CalendarPeriod::containing(a, granularity).start_date();
    let pb = CalendarPeriod::containing(b, granularity).start_date();
    months_between(pa, pb) / granularity.months_per_period()
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvalidQuarter(u32),
    InvalidGranularity(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            PeriodParseError::InvalidQuarter(q) => write!(f, "Invalid quarter: {}", q),
            PeriodParseError::InvalidGranularity(s) => write!(f, "Invalid granularity: {}", s),
        }
    }
}

impl std::error::Error for PeriodParseError {}

impl From<PeriodParseError> for crate::error::GoalGridError {
    fn from(err: PeriodParseError) -> Self {
        Self::Period(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_period() {
        let period = CalendarPeriod::monthly(2025, 1);
        assert_eq!(period.start_date(), date(2025, 1, 1));
        assert_eq!(period.end_date(), date(2025, 1, 31));
    }

    #[test]
    fn test_quarterly_period() {
        let q2 = CalendarPeriod::quarterly(2025, 2);
        assert_eq!(q2.start_date(), date(2025, 4, 1));
        assert_eq!(q2.end_date(), date(2025, 6, 30));
    }

    #[test]
    fn test_yearly_period() {
        let y = CalendarPeriod::yearly(2024);
        assert_eq!(y.start_date(), date(2024, 1, 1));
        assert_eq!(y.end_date(), date(2024, 12, 31));
    }

    #[test]
    fn test_containing() {
        let d = date(2025, 5, 17);
        assert_eq!(
            CalendarPeriod::containing(d, Granularity::Month),
            CalendarPeriod::monthly(2025, 5)
        );
        assert_eq!(
            CalendarPeriod::containing(d, Granularity::Quarter),
            CalendarPeriod::quarterly(2025, 2)
        );
        assert_eq!(
            CalendarPeriod::containing(d, Granularity::Year),
            CalendarPeriod::yearly(2025)
        );
    }

    #[test]
    fn test_navigation() {
        let dec = CalendarPeriod::monthly(2024, 12);
        assert_eq!(dec.next(), CalendarPeriod::monthly(2025, 1));
        assert_eq!(dec.prev(), CalendarPeriod::monthly(2024, 11));

        let q4 = CalendarPeriod::quarterly(2024, 4);
        assert_eq!(q4.next(), CalendarPeriod::quarterly(2025, 1));
    }

    #[test]
    fn test_contains() {
        let jan = CalendarPeriod::monthly(2025, 1);
        assert!(jan.contains(date(2025, 1, 15)));
        assert!(!jan.contains(date(2025, 2, 1)));
    }

    #[test]
    fn test_add_months() {
        assert_eq!(add_months(date(2024, 6, 1), 6), date(2024, 12, 1));
        assert_eq!(add_months(date(2024, 12, 15), 1), date(2025, 1, 15));
        assert_eq!(add_months(date(2025, 1, 15), -2), date(2024, 11, 15));
        // day clamped: Jan 31 + 1 month lands on leap-year Feb 29
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between(date(2024, 1, 1), date(2024, 12, 1)), 11);
        assert_eq!(months_between(date(2024, 6, 30), date(2024, 7, 1)), 1);
        assert_eq!(months_between(date(2025, 3, 1), date(2024, 3, 1)), -12);
        assert_eq!(months_between(date(2024, 5, 1), date(2024, 5, 31)), 0);
    }

    #[test]
    fn test_periods_between() {
        assert_eq!(
            periods_between(date(2024, 1, 15), date(2024, 4, 2), Granularity::Month),
            3
        );
        // same quarter, different months
        assert_eq!(
            periods_between(date(2024, 1, 15), date(2024, 3, 2), Granularity::Quarter),
            0
        );
        assert_eq!(
            periods_between(date(2024, 1, 15), date(2024, 7, 2), Granularity::Quarter),
            2
        );
        assert_eq!(
            periods_between(date(2023, 12, 31), date(2024, 1, 1), Granularity::Year),
            1
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            CalendarPeriod::parse("2025-03").unwrap(),
            CalendarPeriod::monthly(2025, 3)
        );
        assert_eq!(
            CalendarPeriod::parse("2025-Q2").unwrap(),
            CalendarPeriod::quarterly(2025, 2)
        );
        assert_eq!(
            CalendarPeriod::parse("2025").unwrap(),
            CalendarPeriod::yearly(2025)
        );
        assert!(CalendarPeriod::parse("2025-13").is_err());
        assert!(CalendarPeriod::parse("2025-Q5").is_err());
        assert!(CalendarPeriod::parse("soon").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CalendarPeriod::monthly(2025, 3)), "2025-03");
        assert_eq!(
            format!("{}", CalendarPeriod::quarterly(2025, 2)),
            "2025-Q2"
        );
        assert_eq!(format!("{}", CalendarPeriod::yearly(2025)), "2025");
    }

    #[test]
    fn test_granularity_parse() {
        assert_eq!(Granularity::parse("month").unwrap(), Granularity::Month);
        assert_eq!(Granularity::parse("Quarterly").unwrap(), Granularity::Quarter);
        assert_eq!(Granularity::parse("YEAR").unwrap(), Granularity::Year);
        assert!(Granularity::parse("fortnight").is_err());
    }

    #[test]
    fn test_serialization() {
        let period = CalendarPeriod::quarterly(2025, 2);
        let json = serde_json::to_string(&period).unwrap();
        let back: CalendarPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, back);
    }
}
