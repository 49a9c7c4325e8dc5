//! Recompute orchestration.
//!
//! The dashboard holds the ingested record set and the active date range,
//! and re-runs every aggregation pass whenever either input changes.
//! The three outputs are swapped as a single [`DashboardSnapshot`] so a
//! consumer never observes a half-updated state.

use hotel_dashboard_analytics_models::{DashboardSnapshot, DateRange};
use hotel_dashboard_booking_models::BookingRecord;

use crate::aggregate::{filter_by_range, top_countries, totals, visitors_by_day};

/// Computes a full snapshot from scratch for the given inputs.
///
/// Pure and re-entrant: no shared aggregation state survives between calls,
/// so a full recompute on every range change is the contract, not a cost to
/// optimize away.
#[must_use]
pub fn compute_snapshot(records: &[BookingRecord], range: &DateRange) -> DashboardSnapshot {
    let filtered = filter_by_range(records, range);
    log::debug!(
        "Aggregating {} of {} records",
        filtered.len(),
        records.len()
    );

    DashboardSnapshot {
        top_countries: top_countries(&filtered),
        visitors_by_day: visitors_by_day(&filtered),
        totals: totals(&filtered),
    }
}

/// State container driving the dashboard outputs.
///
/// Records are set once after ingestion and held read-only; the range
/// changes with user interaction. Both setters recompute synchronously
/// before returning, so [`Dashboard::snapshot`] is always consistent with
/// the current inputs.
#[derive(Debug, Default)]
pub struct Dashboard {
    records: Vec<BookingRecord>,
    range: DateRange,
    snapshot: DashboardSnapshot,
}

impl Dashboard {
    /// Creates an empty dashboard with no records and no active range.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes the ingested record set and recomputes all outputs.
    pub fn set_records(&mut self, records: Vec<BookingRecord>) {
        self.records = records;
        self.recompute();
    }

    /// Changes the active date range and recomputes all outputs.
    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
        self.recompute();
    }

    /// The published record set.
    #[must_use]
    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    /// The active date range.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// The current output bundle.
    #[must_use]
    pub const fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    fn recompute(&mut self) {
        self.snapshot = compute_snapshot(&self.records, &self.range);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hotel_dashboard_analytics_models::{CountryVisitors, TimeSeriesPoint};
    use hotel_dashboard_booking_models::ArrivalMonth;

    use super::*;

    fn record(day: u32, adults: u64, children: u64, babies: u64, country: &str) -> BookingRecord {
        BookingRecord {
            arrival_year: 2023,
            arrival_month: ArrivalMonth::July,
            arrival_day: day,
            adults,
            children,
            babies,
            country: country.to_string(),
        }
    }

    fn july_fixture() -> Vec<BookingRecord> {
        vec![
            record(1, 2, 1, 0, "USA"),
            record(1, 1, 0, 0, "France"),
            record(2, 3, 0, 1, "USA"),
        ]
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unfiltered_snapshot_matches_expected_outputs() {
        let mut dashboard = Dashboard::new();
        dashboard.set_records(july_fixture());

        let snapshot = dashboard.snapshot();
        assert_eq!(
            snapshot.top_countries,
            vec![
                CountryVisitors {
                    country: "USA".to_string(),
                    visitors: 7,
                },
                CountryVisitors {
                    country: "France".to_string(),
                    visitors: 1,
                },
            ]
        );
        assert_eq!(
            snapshot.visitors_by_day,
            vec![
                TimeSeriesPoint {
                    date: "2023-07-01".to_string(),
                    visitors: 4,
                },
                TimeSeriesPoint {
                    date: "2023-07-02".to_string(),
                    visitors: 4,
                },
            ]
        );
        assert_eq!(snapshot.totals.adults, 6);
        assert_eq!(snapshot.totals.children, 1);
        assert_eq!(snapshot.totals.total_visitors, 8);
    }

    #[test]
    fn range_change_recomputes_all_three_outputs() {
        let mut dashboard = Dashboard::new();
        dashboard.set_records(july_fixture());
        dashboard.set_range(DateRange::new(date(2023, 7, 2), date(2023, 7, 2)));

        let snapshot = dashboard.snapshot();
        assert_eq!(
            snapshot.top_countries,
            vec![CountryVisitors {
                country: "USA".to_string(),
                visitors: 4,
            }]
        );
        assert_eq!(
            snapshot.visitors_by_day,
            vec![TimeSeriesPoint {
                date: "2023-07-02".to_string(),
                visitors: 4,
            }]
        );
        assert_eq!(snapshot.totals.adults, 3);
        assert_eq!(snapshot.totals.children, 0);
        assert_eq!(snapshot.totals.total_visitors, 4);
    }

    #[test]
    fn clearing_the_range_restores_full_outputs() {
        let mut dashboard = Dashboard::new();
        dashboard.set_records(july_fixture());
        dashboard.set_range(DateRange::new(date(2023, 7, 2), date(2023, 7, 2)));
        dashboard.set_range(DateRange::unbounded());

        assert_eq!(dashboard.snapshot().totals.total_visitors, 8);
        assert_eq!(dashboard.snapshot().top_countries.len(), 2);
    }

    #[test]
    fn snapshot_is_pure_in_records_and_range() {
        let records = july_fixture();
        let range = DateRange::new(date(2023, 7, 1), date(2023, 7, 2));
        assert_eq!(
            compute_snapshot(&records, &range),
            compute_snapshot(&records, &range)
        );
    }

    #[test]
    fn empty_dashboard_publishes_empty_snapshot() {
        let dashboard = Dashboard::new();
        assert_eq!(*dashboard.snapshot(), DashboardSnapshot::default());
    }
}
