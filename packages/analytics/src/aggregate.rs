//! Aggregation passes over the filtered record set.
//!
//! Each pass is independent of the others: the orchestrator filters once
//! and runs all three over the same filtered slice.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use hotel_dashboard_analytics_models::{
    CountryVisitors, DateRange, TimeSeriesPoint, TotalsSummary,
};
use hotel_dashboard_booking_models::BookingRecord;

/// Maximum number of entries in the ranked country list.
pub const TOP_COUNTRIES_LIMIT: usize = 10;

/// Returns the subsequence of `records` whose arrival date falls inside the
/// inclusive `range`, preserving input order.
///
/// A range with fewer than two bounds applies no filtering and yields a
/// copy of the whole input. Comparisons are at day granularity. Records
/// whose arrival date does not reconstruct cannot satisfy a bound and are
/// excluded by an active range.
#[must_use]
pub fn filter_by_range(records: &[BookingRecord], range: &DateRange) -> Vec<BookingRecord> {
    let Some((start, end)) = range.bounds() else {
        return records.to_vec();
    };

    records
        .iter()
        .filter(|record| {
            record
                .arrival_date()
                .is_some_and(|date| date >= start && date <= end)
        })
        .cloned()
        .collect()
}

/// Sums visitors per country and ranks descending, truncated to the top 10.
///
/// Countries with no filtered bookings never appear; there are no
/// zero-filled entries. Ties come out in the accumulation map's iteration
/// order, which callers must not rely on.
#[must_use]
pub fn top_countries(records: &[BookingRecord]) -> Vec<CountryVisitors> {
    let mut by_country: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records {
        *by_country.entry(record.country.as_str()).or_insert(0) += record.visitor_count();
    }

    let mut ranked: Vec<CountryVisitors> = by_country
        .into_iter()
        .map(|(country, visitors)| CountryVisitors {
            country: country.to_string(),
            visitors,
        })
        .collect();

    ranked.sort_by(|a, b| b.visitors.cmp(&a.visitors));
    ranked.truncate(TOP_COUNTRIES_LIMIT);
    ranked
}

/// Sums visitors per arrival day, ascending by date.
///
/// Keys are calendar dates, so the ascending map order is chronological;
/// rendering as zero-padded `%Y-%m-%d` keeps lexical order identical for
/// the consumer. Days with no bookings are omitted, never zero-filled;
/// consumers must not assume a contiguous daily sequence.
#[must_use]
pub fn visitors_by_day(records: &[BookingRecord]) -> Vec<TimeSeriesPoint> {
    let mut by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        if let Some(date) = record.arrival_date() {
            *by_day.entry(date).or_insert(0) += record.visitor_count();
        }
    }

    by_day
        .into_iter()
        .map(|(date, visitors)| TimeSeriesPoint {
            date: date.format("%Y-%m-%d").to_string(),
            visitors,
        })
        .collect()
}

/// Sums adult, child, and combined visitor counts over the filtered set.
///
/// `total_visitors` includes babies even though the summary does not break
/// them out: babies count toward visitor volume but are not reported
/// separately.
#[must_use]
pub fn totals(records: &[BookingRecord]) -> TotalsSummary {
    let mut summary = TotalsSummary::default();
    for record in records {
        summary.adults += record.adults;
        summary.children += record.children;
        summary.total_visitors += record.visitor_count();
    }
    summary
}
