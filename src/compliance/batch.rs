//! Batch orchestration.
//!
//! This module sequences the engine stages per driver: group timecard rows
//! by file number, merge punches into logical shifts, annotate rolling
//! hours, evaluate compliance, and assemble the per-driver reports. Drivers
//! share no state, so each pipeline is independent of the others.

use std::collections::BTreeMap;

use tracing::debug;

use crate::compliance::evaluator::evaluate_shift;
use crate::compliance::punch_time::{parse_pay_date, parse_punch_time};
use crate::compliance::rolling_hours::annotate_rolling_hours;
use crate::compliance::shift_merger::merge_shifts;
use crate::error::EngineResult;
use crate::models::{Driver, DriverReport, RawPunch, TimecardRow};

/// Groups timecard rows into drivers keyed by file number.
///
/// The first row seen for a file number supplies the identity fields;
/// identity fields are pass-through data and are not validated (empty
/// values flow to the report unchanged). Each row's time fields are
/// resolved through the time normalizer: rows whose time-in or time-out
/// cannot be parsed are dropped with a warning, while a malformed pay date
/// fails the whole batch.
pub fn group_rows(rows: &[TimecardRow]) -> EngineResult<BTreeMap<String, Driver>> {
    let mut drivers: BTreeMap<String, Driver> = BTreeMap::new();

    for row in rows {
        let driver = drivers
            .entry(row.file_number.clone())
            .or_insert_with(|| Driver {
                file_number: row.file_number.clone(),
                first_name: row.first_name.clone(),
                last_name: row.last_name.clone(),
                company_code: row.company_code.clone(),
                job_title: row.job_title.clone(),
                department: row.department.clone(),
                department_id: row.department_id.clone(),
                punches: Vec::new(),
            });

        let time_in = parse_punch_time(&row.pay_date, &row.time_in)?;
        let time_out = parse_punch_time(&row.pay_date, &row.time_out)?;

        // A punch with an unparseable side is excluded from shift
        // construction; the normalizer has already warned about it.
        if let (Some(time_in), Some(time_out)) = (time_in, time_out) {
            driver.punches.push(RawPunch {
                time_in,
                time_out,
                duration_hours: row.hours,
                shift_date: parse_pay_date(&row.pay_date)?,
            });
        }
    }

    Ok(drivers)
}

/// Runs the full per-driver pipeline and assembles the report.
///
/// A driver with zero punches yields an empty shift list and
/// `has_compliance_violations = false`.
pub fn process_driver(driver: &Driver) -> DriverReport {
    let merged = merge_shifts(&driver.punches);
    let annotated = annotate_rolling_hours(merged);
    let processed_shifts: Vec<_> = annotated.into_iter().map(evaluate_shift).collect();

    let has_compliance_violations = processed_shifts.iter().any(|s| !s.is_compliant());

    debug!(
        file_number = %driver.file_number,
        punches = driver.punches.len(),
        shifts = processed_shifts.len(),
        has_compliance_violations,
        "driver processed"
    );

    DriverReport {
        file_number: driver.file_number.clone(),
        first_name: driver.first_name.clone(),
        last_name: driver.last_name.clone(),
        company_code: driver.company_code.clone(),
        job_title: driver.job_title.clone(),
        department: driver.department.clone(),
        department_id: driver.department_id.clone(),
        original_shifts: driver.punches.clone(),
        processed_shifts,
        has_compliance_violations,
    }
}

/// Processes every driver in a batch independently.
pub fn process_batch(drivers: &BTreeMap<String, Driver>) -> BTreeMap<String, DriverReport> {
    drivers
        .iter()
        .map(|(file_number, driver)| (file_number.clone(), process_driver(driver)))
        .collect()
}

/// The end-to-end pipeline: group rows by driver, then process the batch.
///
/// # Examples
///
/// ```
/// use compliance_engine::compliance::process_timecard;
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
///     time_in: "8:00 AM".to_string(),
///     time_out: "4:00 PM".to_string(),
///     hours: Decimal::new(8, 0),
/// };
///
/// let reports = process_timecard(&[row]).unwrap();
/// let report = &reports["000541"];
/// assert_eq!(report.processed_shifts.len(), 1);
/// assert!(!report.has_compliance_violations);
/// ```
pub fn process_timecard(rows: &[TimecardRow]) -> EngineResult<BTreeMap<String, DriverReport>> {
    let drivers = group_rows(rows)?;
    Ok(process_batch(&drivers))
}
