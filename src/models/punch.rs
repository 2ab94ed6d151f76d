//! Timecard punch models.
//!
//! This module defines the two forms a punch passes through: the raw
//! [`TimecardRow`] handed over by the ingestion collaborator (string time
//! fields on a 12-hour clock) and the resolved [`RawPunch`] the engine
//! operates on (absolute instants on a fixed UTC-equivalent calendar).

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the timecard source, as produced by the external CSV ingester.
///
/// Time fields are raw strings that still need resolution by the time
/// normalizer; identity fields are passed through unvalidated.
///
/// # Example
///
/// ```
/// use compliance_engine::models::TimecardRow;
/// use rust_decimal::Decimal;
///
/// let row = TimecardRow {
///     file_number: "000541".to_string(),
///     first_name: "Alex".to_string(),
///     last_name: "Rivera".to_string(),
///     company_code: "TRK".to_string(),
///     job_title: "Driver".to_string(),
///     department: "Linehaul".to_string(),
///     department_id: "041".to_string(),
///     pay_date: "11/13/2024".to_string(),
///     time_in: "10:58 PM".to_string(),
///     time_out: "11:45 PM".to_string(),
///     hours: Decimal::new(78, 2), // 0.78
/// };
/// assert_eq!(row.file_number, "000541");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardRow {
    /// The driver's unique file number.
    pub file_number: String,
    /// The driver's first name.
    #[serde(default)]
    pub first_name: String,
    /// The driver's last name.
    #[serde(default)]
    pub last_name: String,
    /// The company code the driver is payrolled under.
    #[serde(default)]
    pub company_code: String,
    /// The driver's job title description.
    #[serde(default)]
    pub job_title: String,
    /// The worked department description.
    #[serde(default)]
    pub department: String,
    /// The worked department identifier.
    #[serde(default)]
    pub department_id: String,
    /// The pay date in MM/DD/YYYY format.
    pub pay_date: String,
    /// The clock-in time, e.g. "10:58 PM".
    pub time_in: String,
    /// The clock-out time, e.g. "11:45 PM".
    pub time_out: String,
    /// The reported hours for the row (not recomputed from the times).
    pub hours: Decimal,
}

/// A resolved timecard punch: one time-in/time-out pair for one driver.
///
/// Instants live on a fixed UTC-equivalent calendar with no timezone
/// adjustment, so hour differences are pure subtraction. A punch is
/// immutable once resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPunch {
    /// The clock-in instant.
    pub time_in: NaiveDateTime,
    /// The clock-out instant.
    pub time_out: NaiveDateTime,
    /// Reported duration in hours; not necessarily `time_out - time_in`.
    pub duration_hours: Decimal,
    /// The calendar day the punch was reported against.
    pub shift_date: NaiveDate,
}
