//! Presentation formatting for compliance reports.
//!
//! This module renders the engine's reports into their human-readable form:
//! timestamps become `MM/DD/YYYY HH:MM` strings and duration-like fields are
//! rounded to 2 decimal places. Formatting is applied after orchestration
//! and never feeds back into the compliance logic, which always works on
//! full-precision values.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ComplianceViolation, DriverReport};

/// Renders an instant as `MM/DD/YYYY HH:MM` (24-hour clock).
///
/// # Examples
///
/// ```
/// use compliance_engine::report::format_date_time;
/// use chrono::NaiveDateTime;
///
/// let t = NaiveDateTime::parse_from_str("2024-11-13 22:58:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(format_date_time(t), "11/13/2024 22:58");
/// ```
pub fn format_date_time(time: NaiveDateTime) -> String {
    time.format("%m/%d/%Y %H:%M").to_string()
}

/// A raw punch rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedPunch {
    /// The clock-in instant, rendered.
    pub time_in: String,
    /// The clock-out instant, rendered.
    pub time_out: String,
    /// Reported duration in hours, rounded to 2 dp.
    pub duration_hours: Decimal,
    /// The reported shift date, rendered as MM/DD/YYYY.
    pub shift_date: String,
}

/// An absorbed break rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedBreak {
    /// The break's start instant, rendered.
    pub start_time: String,
    /// The break's end instant, rendered.
    pub end_time: String,
}

/// A logical shift rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedShift {
    /// The shift's clock-in instant, rendered.
    pub time_in: String,
    /// The shift's clock-out instant, rendered.
    pub time_out: String,
    /// Accumulated duration in hours, rounded to 2 dp.
    pub duration_hours: Decimal,
    /// Count of chained working days, including this shift.
    pub consecutive_days: u32,
    /// Rest since the previous shift in hours, rounded to 2 dp.
    pub rest_hours_from_last_shift: Decimal,
    /// Breaks absorbed into this shift, rendered.
    pub breaks: Vec<FormattedBreak>,
    /// Worked hours in the trailing 7 days (already stored at 2 dp).
    pub last_7_days_hours: Decimal,
    /// The shift's compliance findings, carried verbatim.
    pub compliance_violations: Vec<ComplianceViolation>,
    /// True if the violation list is empty.
    pub is_compliant: bool,
}

/// A driver report rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedDriverReport {
    /// The driver's unique file number.
    pub file_number: String,
    /// The driver's first name.
    pub first_name: String,
    /// The driver's last name.
    pub last_name: String,
    /// The company code the driver is payrolled under.
    pub company_code: String,
    /// The driver's job title description.
    pub job_title: String,
    /// The worked department description.
    pub department: String,
    /// The worked department identifier.
    pub department_id: String,
    /// The raw punches as ingested, rendered.
    pub original_shifts: Vec<FormattedPunch>,
    /// The annotated logical shifts, rendered.
    pub processed_shifts: Vec<FormattedShift>,
    /// True if any processed shift carries at least one violation.
    pub has_compliance_violations: bool,
}

/// Renders one driver report for display.
pub fn format_report(report: &DriverReport) -> FormattedDriverReport {
    let original_shifts = report
        .original_shifts
        .iter()
        .map(|punch| FormattedPunch {
            time_in: format_date_time(punch.time_in),
            time_out: format_date_time(punch.time_out),
            duration_hours: punch.duration_hours.round_dp(2),
            shift_date: punch.shift_date.format("%m/%d/%Y").to_string(),
        })
        .collect();

    let processed_shifts = report
        .processed_shifts
        .iter()
        .map(|shift| FormattedShift {
            time_in: format_date_time(shift.time_in),
            time_out: format_date_time(shift.time_out),
            duration_hours: shift.duration_hours.round_dp(2),
            consecutive_days: shift.consecutive_days,
            rest_hours_from_last_shift: shift.rest_hours_from_last_shift.round_dp(2),
            breaks: shift
                .breaks
                .iter()
                .map(|b| FormattedBreak {
                    start_time: format_date_time(b.start_time),
                    end_time: format_date_time(b.end_time),
                })
                .collect(),
            last_7_days_hours: shift.last_7_days_hours,
            compliance_violations: shift.compliance_violations.clone(),
            is_compliant: shift.is_compliant(),
        })
        .collect();

    FormattedDriverReport {
        file_number: report.file_number.clone(),
        first_name: report.first_name.clone(),
        last_name: report.last_name.clone(),
        company_code: report.company_code.clone(),
        job_title: report.job_title.clone(),
        department: report.department.clone(),
        department_id: report.department_id.clone(),
        original_shifts,
        processed_shifts,
        has_compliance_violations: report.has_compliance_violations,
    }
}

/// Renders a whole batch of driver reports for display.
pub fn format_reports(
    reports: &BTreeMap<String, DriverReport>,
) -> BTreeMap<String, FormattedDriverReport> {
    reports
        .iter()
        .map(|(file_number, report)| (file_number.clone(), format_report(report)))
        .collect()
}
