//! Driver model.
//!
//! This module defines the Driver struct: identity fields plus the punches
//! collected for that driver from the timecard source.

use serde::{Deserialize, Serialize};

use super::RawPunch;

/// A driver and the punches reported against their file number.
///
/// Identity fields are carried verbatim from the timecard source; the engine
/// does not validate them, and empty values flow through to the report
/// unchanged. Punches are stored in ingestion order and sorted by shift date
/// before processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
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
    /// The punches reported for this driver.
    #[serde(default)]
    pub punches: Vec<RawPunch>,
}
