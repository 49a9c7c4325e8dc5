#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Canonical hotel-booking record types.
//!
//! This crate defines the booking record schema shared across the entire
//! hotel-dashboard system. The ingestion layer normalizes raw CSV rows into
//! these types; the analytics engine consumes them read-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Calendar month of a booking's arrival, as the dataset spells it.
///
/// The source data carries full English month names ("January".."December")
/// rather than month numbers, so reconstruction of the arrival date goes
/// through this enum.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum ArrivalMonth {
    /// First month of the year.
    January = 0,
    /// Second month of the year.
    February = 1,
    /// Third month of the year.
    March = 2,
    /// Fourth month of the year.
    April = 3,
    /// Fifth month of the year.
    May = 4,
    /// Sixth month of the year.
    June = 5,
    /// Seventh month of the year.
    July = 6,
    /// Eighth month of the year.
    August = 7,
    /// Ninth month of the year.
    September = 8,
    /// Tenth month of the year.
    October = 9,
    /// Eleventh month of the year.
    November = 10,
    /// Twelfth month of the year.
    December = 11,
}

impl ArrivalMonth {
    /// Returns the zero-based month ordinal (January = 0, December = 11).
    #[must_use]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Returns the one-based calendar month number (January = 1).
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Resolves a month name leniently, defaulting to January.
    ///
    /// Unrecognized or empty input never fails: the dataset is known to
    /// contain only the twelve full English names, so anything else is a
    /// data-quality problem that gets logged and mapped to [`Self::January`].
    /// Callers that want hard validation can use the strict `FromStr`
    /// implementation instead.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unrecognized arrival month {name:?}, defaulting to January");
            Self::January
        })
    }

    /// Returns all variants of this enum, in calendar order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }
}

/// One hotel-booking entry as consumed by the aggregation engine.
///
/// Records are produced once by ingestion and held read-only for the
/// session. The arrival date and visitor count are derived on demand,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// Four-digit arrival calendar year.
    pub arrival_year: i32,
    /// Arrival calendar month.
    pub arrival_month: ArrivalMonth,
    /// Day of month (1-31). Not validated against the month's length here;
    /// ingestion rejects rows whose reconstructed date does not exist.
    pub arrival_day: u32,
    /// Number of adult occupants.
    pub adults: u64,
    /// Number of child occupants.
    pub children: u64,
    /// Number of baby occupants.
    pub babies: u64,
    /// Free-form country identifier (e.g. "PRT", "USA").
    pub country: String,
}

impl BookingRecord {
    /// Reconstructs the arrival date from the split year/month/day fields.
    ///
    /// Returns `None` when the combination names a day the month does not
    /// have (e.g. February 30).
    #[must_use]
    pub fn arrival_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.arrival_year, self.arrival_month.number(), self.arrival_day)
    }

    /// Total visitors this booking brings: adults + children + babies.
    #[must_use]
    pub const fn visitor_count(&self) -> u64 {
        self.adults + self.children + self.babies
    }
}
