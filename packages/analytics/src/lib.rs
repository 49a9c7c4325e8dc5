#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation engine for the hotel bookings dashboard.
//!
//! Turns the flat ingested booking list into the three structures the
//! dashboard renders: a ranked country list, a per-day visitor time series,
//! and a totals summary. Everything here is synchronous, in-memory, and a
//! pure function of `(records, range)`; there is no incremental state
//! between recomputes.

pub mod aggregate;
pub mod dashboard;
