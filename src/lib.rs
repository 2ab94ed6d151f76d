//! Shift Compliance Engine for driver timecards.
//!
//! This crate turns raw timecard punches into logical shifts and checks each
//! shift against hours-of-service compliance rules: consecutive working days,
//! inter-shift rest, shift duration, and rolling 7-day cumulative hours.

#![warn(missing_docs)]

pub mod compliance;
pub mod error;
pub mod models;
pub mod report;
