//! Closed request enumerations.
//!
//! This module defines [`Range`] (the relative time window of a history
//! request), [`Interval`] (its sampling granularity) and [`ReportingPeriod`]
//! (annual vs. quarterly statements). Each maps to the exact token the
//! upstream expects via `as_str`.

use serde::{Deserialize, Serialize};

/// Relative time window for a history request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Range {
    /// One trading day.
    OneDay,
    /// Five trading days.
    FiveDays,
    /// One month.
    #[default]
    OneMonth,
    /// Three months.
    ThreeMonths,
    /// Six months.
    SixMonths,
    /// One year.
    OneYear,
    /// Two years.
    TwoYears,
    /// Five years.
    FiveYears,
    /// Ten years.
    TenYears,
    /// From the start of the current calendar year.
    YearToDate,
    /// The full history the upstream has for the symbol.
    Max,
}

impl Range {
    /// Returns the upstream query token for this range.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
            Self::FiveYears => "5y",
            Self::TenYears => "10y",
            Self::YearToDate => "ytd",
            Self::Max => "max",
        }
    }
}

/// Sampling granularity of a history request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// One-minute bars.
    OneMinute,
    /// Two-minute bars.
    TwoMinutes,
    /// Five-minute bars.
    FiveMinutes,
    /// Fifteen-minute bars.
    FifteenMinutes,
    /// Thirty-minute bars.
    ThirtyMinutes,
    /// Hourly bars.
    OneHour,
    /// Daily bars.
    #[default]
    OneDay,
    /// Five-day bars.
    FiveDays,
    /// Weekly bars.
    OneWeek,
    /// Monthly bars.
    OneMonth,
    /// Quarterly bars.
    ThreeMonths,
}

impl Interval {
    /// Returns the upstream query token for this interval.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::TwoMinutes => "2m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneWeek => "1wk",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
        }
    }

    /// Returns true if this is an intraday granularity (minute through hourly).
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        matches!(
            self,
            Self::OneMinute
                | Self::TwoMinutes
                | Self::FiveMinutes
                | Self::FifteenMinutes
                | Self::ThirtyMinutes
                | Self::OneHour
        )
    }
}

/// Reporting period for financial statement operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportingPeriod {
    /// Annual reporting period.
    #[default]
    Annual,
    /// Quarterly reporting period.
    Quarterly,
}
