#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Library for ingesting hotel-booking records from CSV exports.
//!
//! The engine only ever sees already-typed [`BookingRecord`]s; everything
//! fallible about the data (text-to-integer parsing, month-name
//! resolution, impossible calendar dates) is handled here at the
//! ingestion boundary. Rows that cannot be normalized are skipped and
//! counted, never propagated into the sums.

use std::io::Read;
use std::path::Path;

use hotel_dashboard_booking_models::{ArrivalMonth, BookingRecord};
use hotel_dashboard_ingest_models::{BookingImport, ImportSummary, RawBookingRow};
use thiserror::Error;

/// Errors that can occur while importing a bookings CSV.
///
/// These are file-level failures. Row-level problems are
/// [`MalformedRecord`]s and do not abort the import.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The CSV structure could not be read (bad headers, unbalanced
    /// quoting, or an underlying read failure mid-file).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The bookings file could not be opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a raw CSV row was rejected during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    /// A numeric field did not parse as an integer.
    #[error("non-numeric {field} value {value:?}")]
    Numeric {
        /// Name of the offending CSV column.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// The year/month/day combination names no real calendar day.
    #[error("impossible arrival date {month} {day}, {year}")]
    Date {
        /// Arrival year from the row.
        year: i32,
        /// Resolved arrival month.
        month: ArrivalMonth,
        /// Day-of-month from the row.
        day: u32,
    },
}

fn parse_field<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, MalformedRecord> {
    value.trim().parse().map_err(|_| MalformedRecord::Numeric {
        field,
        value: value.to_string(),
    })
}

/// Normalizes one raw CSV row into an engine-ready [`BookingRecord`].
///
/// Month names resolve leniently (unknown names fall back to January, with
/// a warning). Numeric fields must parse as integers, and the reconstructed
/// arrival date must exist on the calendar.
///
/// # Errors
///
/// Returns [`MalformedRecord`] if a numeric field does not parse or the
/// arrival date does not reconstruct.
pub fn normalize_row(row: &RawBookingRow) -> Result<BookingRecord, MalformedRecord> {
    let record = BookingRecord {
        arrival_year: parse_field("arrival_date_year", &row.arrival_date_year)?,
        arrival_month: ArrivalMonth::resolve(&row.arrival_date_month),
        arrival_day: parse_field("arrival_date_day_of_month", &row.arrival_date_day_of_month)?,
        adults: parse_field("adults", &row.adults)?,
        children: parse_field("children", &row.children)?,
        babies: parse_field("babies", &row.babies)?,
        country: row.country.clone(),
    };

    if record.arrival_date().is_none() {
        return Err(MalformedRecord::Date {
            year: record.arrival_year,
            month: record.arrival_month,
            day: record.arrival_day,
        });
    }

    Ok(record)
}

/// Reads and normalizes every row from a bookings CSV.
///
/// Malformed rows are skipped with a warning and counted in the returned
/// summary; the rest become the engine's record set, in file order.
///
/// # Errors
///
/// Returns [`IngestError`] if the CSV itself cannot be read.
pub fn read_bookings<R: Read>(reader: R) -> Result<BookingImport, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut records = Vec::new();
    let mut rows_read: u64 = 0;
    let mut rows_skipped: u64 = 0;

    for (row_num, row) in csv_reader.deserialize::<RawBookingRow>().enumerate() {
        rows_read += 1;
        let raw = row?;
        match normalize_row(&raw) {
            Ok(record) => records.push(record),
            Err(reason) => {
                rows_skipped += 1;
                // +2: one for the header line, one for zero-based enumeration
                log::warn!("Skipping row {}: {reason}", row_num + 2);
            }
        }
    }

    log::info!(
        "Import complete: normalized {}/{rows_read} rows",
        records.len()
    );

    let summary = ImportSummary {
        rows_read,
        records_ingested: records.len() as u64,
        rows_skipped,
    };
    Ok(BookingImport { records, summary })
}

/// Opens `path` and reads it with [`read_bookings`].
///
/// # Errors
///
/// Returns [`IngestError`] if the file cannot be opened or the CSV cannot
/// be read.
pub fn read_bookings_file(path: &Path) -> Result<BookingImport, IngestError> {
    log::info!("Reading bookings from {}", path.display());
    let file = std::fs::File::open(path)?;
    read_bookings(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row(year: &str, month: &str, day: &str, adults: &str) -> RawBookingRow {
        RawBookingRow {
            arrival_date_year: year.to_string(),
            arrival_date_month: month.to_string(),
            arrival_date_day_of_month: day.to_string(),
            adults: adults.to_string(),
            children: "1".to_string(),
            babies: "0".to_string(),
            country: "PRT".to_string(),
        }
    }

    #[test]
    fn normalizes_a_clean_row() {
        let record = normalize_row(&raw_row("2023", "July", "1", "2")).unwrap();
        assert_eq!(record.arrival_year, 2023);
        assert_eq!(record.arrival_month, ArrivalMonth::July);
        assert_eq!(record.arrival_day, 1);
        assert_eq!(record.adults, 2);
        assert_eq!(record.visitor_count(), 3);
    }

    #[test]
    fn rejects_non_numeric_counts() {
        let err = normalize_row(&raw_row("2023", "July", "1", "NA")).unwrap_err();
        assert_eq!(
            err,
            MalformedRecord::Numeric {
                field: "adults",
                value: "NA".to_string(),
            }
        );
    }

    #[test]
    fn rejects_impossible_dates() {
        let err = normalize_row(&raw_row("2023", "February", "30", "2")).unwrap_err();
        assert!(matches!(err, MalformedRecord::Date { day: 30, .. }));
    }

    #[test]
    fn unknown_month_falls_back_instead_of_failing() {
        let record = normalize_row(&raw_row("2023", "Jully", "1", "2")).unwrap();
        assert_eq!(record.arrival_month, ArrivalMonth::January);
    }

    #[test]
    fn reads_rows_by_header_name_and_ignores_extra_columns() {
        let csv = "\
hotel,arrival_date_year,arrival_date_month,arrival_date_day_of_month,adults,children,babies,country,lead_time
Resort Hotel,2023,July,1,2,1,0,USA,120
City Hotel,2023,July,2,3,0,1,FRA,7
";
        let import = read_bookings(csv.as_bytes()).unwrap();
        assert_eq!(import.summary.rows_read, 2);
        assert_eq!(import.summary.records_ingested, 2);
        assert_eq!(import.summary.rows_skipped, 0);
        assert_eq!(import.records[0].country, "USA");
        assert_eq!(import.records[1].visitor_count(), 4);
    }

    #[test]
    fn skips_malformed_rows_and_keeps_the_rest() {
        let csv = "\
arrival_date_year,arrival_date_month,arrival_date_day_of_month,adults,children,babies,country
2023,July,1,2,1,0,USA
2023,July,2,NA,0,1,FRA
2023,February,30,1,0,0,PRT
2023,August,15,2,0,0,ESP
";
        let import = read_bookings(csv.as_bytes()).unwrap();
        assert_eq!(import.summary.rows_read, 4);
        assert_eq!(import.summary.records_ingested, 2);
        assert_eq!(import.summary.rows_skipped, 2);
        assert_eq!(import.records[1].country, "ESP");
    }

    #[test]
    fn missing_required_column_is_a_file_level_error() {
        let csv = "\
arrival_date_year,arrival_date_month,adults,children,babies,country
2023,July,2,1,0,USA
";
        assert!(read_bookings(csv.as_bytes()).is_err());
    }
}
