//! Report models for the Shift Compliance Engine.
//!
//! This module contains the [`DriverReport`] type: the per-driver output of
//! the batch orchestrator, combining identity fields, the untouched input
//! punches, and the fully annotated logical shifts.

use serde::{Deserialize, Serialize};

use super::{LogicalShift, RawPunch};

/// The complete compliance result for one driver.
///
/// `original_shifts` is the raw input, unmodified; `processed_shifts` is the
/// merged, aggregated, and evaluated view the compliance rules ran against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverReport {
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
    /// The raw punches as ingested, in their pre-merge form.
    pub original_shifts: Vec<RawPunch>,
    /// Logical shifts annotated with rolling hours and compliance findings.
    pub processed_shifts: Vec<LogicalShift>,
    /// True if any processed shift carries at least one violation.
    pub has_compliance_violations: bool,
}
