//! Core data models for the Shift Compliance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod driver;
mod logical_shift;
mod punch;
mod report;

pub use driver::Driver;
pub use logical_shift::{
    ComplianceRule, ComplianceViolation, LogicalShift, RestBreak, Severity,
};
pub use punch::{RawPunch, TimecardRow};
pub use report::DriverReport;
