//! Compliance rule evaluation.
//!
//! This module applies the fixed hours-of-service rule set to a single
//! logical shift. Evaluation is stateless and pure: every cross-shift fact
//! a rule needs (streak length, rest gap, rolling hours) has already been
//! computed onto the shift by the earlier pipeline stages.

use rust_decimal::Decimal;

use crate::models::{ComplianceRule, ComplianceViolation, LogicalShift, Severity};

/// Maximum chained working days before a violation.
pub const MAX_CONSECUTIVE_DAYS: u32 = 5;

/// Minimum rest between logical shifts, in hours.
pub const MIN_REST_HOURS: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Maximum wall-clock shift span, in hours.
pub const MAX_SHIFT_SPAN_HOURS: Decimal = Decimal::from_parts(14, 0, 0, false, 0);

/// Maximum worked hours in any trailing 7-day window.
pub const MAX_7_DAY_HOURS: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Checks a logical shift against the rule set and returns its violations.
///
/// Each rule is evaluated independently, so a shift may carry several
/// findings. Threshold comparisons use full-precision values; rounding to
/// 2 decimal places happens only inside the descriptions. The shift
/// duration rule recomputes the span from the timestamps rather than
/// trusting the accumulated reported duration.
pub fn check_shift(shift: &LogicalShift) -> Vec<ComplianceViolation> {
    let mut violations = Vec::new();

    if shift.consecutive_days > MAX_CONSECUTIVE_DAYS {
        violations.push(ComplianceViolation {
            rule: ComplianceRule::ConsecutiveDays,
            description: format!(
                "Exceeded maximum consecutive working days ({} > {})",
                shift.consecutive_days, MAX_CONSECUTIVE_DAYS
            ),
            severity: Severity::High,
        });
    }

    if shift.rest_hours_from_last_shift < MIN_REST_HOURS {
        violations.push(ComplianceViolation {
            rule: ComplianceRule::RestHours,
            description: format!(
                "Insufficient rest between shifts ({:.2} hours < {} hours)",
                shift.rest_hours_from_last_shift.round_dp(2),
                MIN_REST_HOURS
            ),
            severity: Severity::High,
        });
    }

    let span = shift.span_hours();
    if span > MAX_SHIFT_SPAN_HOURS {
        violations.push(ComplianceViolation {
            rule: ComplianceRule::ShiftDuration,
            description: format!(
                "Shift duration exceeds {} hours ({:.2} hours)",
                MAX_SHIFT_SPAN_HOURS,
                span.round_dp(2)
            ),
            severity: Severity::High,
        });
    }

    if shift.last_7_days_hours > MAX_7_DAY_HOURS {
        violations.push(ComplianceViolation {
            rule: ComplianceRule::SevenDayTotalHours,
            description: format!(
                "Total hours in last 7 days exceeds {} hours ({:.2} hours)",
                MAX_7_DAY_HOURS,
                shift.last_7_days_hours.round_dp(2)
            ),
            severity: Severity::High,
        });
    }

    violations
}

/// Evaluates a shift, replacing any previous findings with a fresh result.
///
/// Replacing rather than appending makes evaluation idempotent: re-running
/// the evaluator on an already-evaluated shift yields identical violations.
///
/// # Examples
///
/// ```
/// use compliance_engine::compliance::evaluate_shift;
/// use compliance_engine::models::LogicalShift;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let shift = LogicalShift {
///     time_in: parse("2024-11-13 08:00:00"),
///     time_out: parse("2024-11-13 16:00:00"),
///     duration_hours: Decimal::new(8, 0),
///     consecutive_days: 2,
///     rest_hours_from_last_shift: Decimal::new(16, 0),
///     breaks: vec![],
///     last_7_days_hours: Decimal::new(16, 0),
///     compliance_violations: vec![],
/// };
///
/// let evaluated = evaluate_shift(shift);
/// assert!(evaluated.is_compliant());
/// ```
pub fn evaluate_shift(mut shift: LogicalShift) -> LogicalShift {
    shift.compliance_violations = check_shift(&shift);
    shift
}
