#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Raw CSV row and import summary types for bookings ingestion.

use hotel_dashboard_booking_models::BookingRecord;
use serde::{Deserialize, Serialize};

/// One raw row from a bookings CSV export, before normalization.
///
/// Every field arrives as text; numeric parsing is the normalizer's job.
/// Field names match the export's column headers; columns the dashboard
/// does not use are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBookingRow {
    /// Four-digit arrival year, as text.
    pub arrival_date_year: String,
    /// Full English month name ("January".."December").
    pub arrival_date_month: String,
    /// Day of month (1-31), as text.
    pub arrival_date_day_of_month: String,
    /// Adult occupant count, as text.
    pub adults: String,
    /// Child occupant count, as text.
    pub children: String,
    /// Baby occupant count, as text.
    pub babies: String,
    /// Free-form country identifier.
    pub country: String,
}

/// Outcome counts for a completed CSV import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Data rows the CSV reader produced.
    pub rows_read: u64,
    /// Rows that normalized into booking records.
    pub records_ingested: u64,
    /// Rows rejected as malformed.
    pub rows_skipped: u64,
}

/// Normalized records plus the summary of how the import went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingImport {
    /// The normalized, engine-ready record set.
    pub records: Vec<BookingRecord>,
    /// Row-level accounting for the import.
    pub summary: ImportSummary,
}
