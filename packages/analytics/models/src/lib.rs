#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation input and output shapes for the hotel bookings dashboard.
//!
//! The engine publishes exactly three structures to the presentation layer:
//! a ranked country list, a per-day visitor time series, and a totals
//! summary. Dates cross this boundary as zero-padded ISO strings, which is
//! what the charting side consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive arrival-date window used to filter bookings.
///
/// Filtering only takes effect when **both** bounds are set; a partial
/// range behaves as "no filter". An inverted range (`start > end`) simply
/// matches nothing; it is not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// First day included in the window.
    pub start: Option<NaiveDate>,
    /// Last day included in the window.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a range with both bounds set.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates the no-filter range.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Returns `(start, end)` when both bounds are set, `None` otherwise.
    #[must_use]
    pub const fn bounds(self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Quick range covering the last `days` days up to and including today
    /// (UTC calendar date).
    #[must_use]
    pub fn last_days(days: i64) -> Self {
        Self::last_days_ending(chrono::Utc::now().date_naive(), days)
    }

    /// Quick range covering the last `days` days up to and including `end`.
    #[must_use]
    pub fn last_days_ending(end: NaiveDate, days: i64) -> Self {
        Self::new(end - chrono::Duration::days(days), end)
    }
}

/// Total visitors attributed to a single country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryVisitors {
    /// Country identifier as it appears in the records.
    pub country: String,
    /// Sum of visitor counts over the country's filtered bookings.
    pub visitors: u64,
}

/// Visitors arriving on a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    /// Arrival day in zero-padded ISO form (`YYYY-MM-DD`). Zero padding
    /// makes lexical order equal chronological order.
    pub date: String,
    /// Total visitors arriving on this day.
    pub visitors: u64,
}

/// Running totals over the filtered record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsSummary {
    /// Sum of adult occupants.
    pub adults: u64,
    /// Sum of child occupants.
    pub children: u64,
    /// Sum of all occupants. Includes babies, which are not reported
    /// separately.
    pub total_visitors: u64,
}

/// The three output structures the dashboard renders, swapped as one value
/// on every recompute so consumers never observe a half-updated state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Ranked country list, at most ten entries, most visitors first.
    pub top_countries: Vec<CountryVisitors>,
    /// Chronological per-day visitor series.
    pub visitors_by_day: Vec<TimeSeriesPoint>,
    /// Running totals.
    pub totals: TotalsSummary,
}
