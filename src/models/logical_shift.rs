//! Logical shift model and compliance finding types.
//!
//! A logical shift is the engine's derived unit of work: one or more raw
//! punches merged across short rest gaps, annotated with streak, rest,
//! rolling-hours, and compliance information.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rest gap absorbed into a logical shift during merging.
///
/// When two punches are close enough to be treated as one working shift, the
/// gap between them is recorded as a break rather than starting a new shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestBreak {
    /// When the break started (the earlier punch's time-out).
    pub start_time: NaiveDateTime,
    /// When the break ended (the later punch's time-in).
    pub end_time: NaiveDateTime,
}

/// The compliance rule a violation was raised under.
///
/// # Example
///
/// ```
/// use compliance_engine::models::ComplianceRule;
///
/// assert_eq!(ComplianceRule::RestHours.to_string(), "Rest Hours");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceRule {
    /// More than 5 chained working days without an extended rest.
    ConsecutiveDays,
    /// Less than 10 hours of rest since the previous logical shift.
    RestHours,
    /// Shift spans more than 14 hours from time-in to time-out.
    ShiftDuration,
    /// More than 60 worked hours in the trailing 7 days.
    SevenDayTotalHours,
}

impl std::fmt::Display for ComplianceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceRule::ConsecutiveDays => write!(f, "Consecutive Days"),
            ComplianceRule::RestHours => write!(f, "Rest Hours"),
            ComplianceRule::ShiftDuration => write!(f, "Shift Duration"),
            ComplianceRule::SevenDayTotalHours => write!(f, "7 Days Total Hours"),
        }
    }
}

/// The severity of a compliance violation.
///
/// Every rule in the current set reports [`Severity::High`]; the full
/// low/medium/high ladder is part of the report vocabulary so downstream
/// consumers can sort and filter findings without a schema change when
/// advisory rules are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational; no action required.
    Low,
    /// Should be reviewed.
    Medium,
    /// Regulatory breach; requires action.
    High,
}

/// A single compliance finding against a logical shift.
///
/// Violations are additive facts: once raised for a shift they are never
/// retracted, and a shift may carry several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceViolation {
    /// The rule that was breached.
    pub rule: ComplianceRule,
    /// Human-readable description embedding the offending value (2 dp).
    pub description: String,
    /// The severity of the breach.
    pub severity: Severity,
}

/// One logical shift for one driver, built by the shift merger and annotated
/// by the rolling-hours aggregator and the compliance evaluator.
///
/// Logical shifts for a driver are time-ordered and non-overlapping in
/// `time_in`. Each shift is owned exclusively by one driver and built once
/// per driver-processing pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalShift {
    /// The clock-in instant of the first merged punch.
    pub time_in: NaiveDateTime,
    /// The clock-out instant of the last merged punch.
    pub time_out: NaiveDateTime,
    /// Sum of the merged punches' reported durations, in hours.
    pub duration_hours: Decimal,
    /// Count of chained shifts separated by normal rest, including this one.
    pub consecutive_days: u32,
    /// Hours of rest since the previous logical shift. The first shift of a
    /// driver carries an assumed sentinel value (see the shift merger).
    pub rest_hours_from_last_shift: Decimal,
    /// Rest gaps absorbed during merging, in chronological order.
    pub breaks: Vec<RestBreak>,
    /// Worked hours in the trailing 7 days, rounded to 2 dp. Zero until the
    /// rolling-hours aggregator has annotated the shift.
    pub last_7_days_hours: Decimal,
    /// Findings from the compliance evaluator. Empty until evaluated.
    pub compliance_violations: Vec<ComplianceViolation>,
}

impl LogicalShift {
    /// Returns true if the shift carries no compliance violations.
    ///
    /// Derived from the violation list rather than stored, so re-running the
    /// evaluator can never leave the flag out of sync.
    pub fn is_compliant(&self) -> bool {
        self.compliance_violations.is_empty()
    }

    /// Returns the shift span in hours, recomputed from the timestamps.
    ///
    /// This is distinct from [`duration_hours`](Self::duration_hours), which
    /// accumulates the reported durations of the merged punches. The shift
    /// duration rule checks the wall-clock span, breaks included.
    pub fn span_hours(&self) -> Decimal {
        let minutes = (self.time_out - self.time_in).num_minutes();
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }
}
