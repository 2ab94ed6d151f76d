//! Shift merging logic.
//!
//! This module folds a driver's raw punches into logical shifts. Punches
//! separated by a short gap are data artifacts of punch granularity (lunch
//! breaks, clock hiccups) and belong to one working shift; gaps in the
//! normal-rest band chain consecutive working days; anything longer resets
//! the streak.

use rust_decimal::Decimal;

use crate::compliance::punch_time::rest_gap_hours;
use crate::models::{LogicalShift, RawPunch, RestBreak};

/// Gaps shorter than this merge into the previous logical shift (hours).
pub const MERGE_GAP_HOURS: Decimal = Decimal::from_parts(425, 0, 0, false, 2);

/// Gaps longer than this reset the consecutive-day streak (hours).
pub const EXTENDED_REST_HOURS: Decimal = Decimal::from_parts(34, 0, 0, false, 0);

/// Assumed rest before a driver's first shift of the batch (hours).
///
/// There is no prior shift to compare against, so the first shift carries
/// this sentinel instead of a computed gap. The value passes the 10-hour
/// rest rule by construction; whether a first shift should instead be exempt
/// from that rule is pending product clarification.
pub const FIRST_SHIFT_ASSUMED_REST_HOURS: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Merges a driver's raw punches into logical shifts.
///
/// Punches are stably sorted by shift date, then folded in order. For each
/// punch after the first, the rest gap `g` against the last logical shift's
/// time-out (guarded for midnight placeholders, see
/// [`rest_gap_hours`](crate::compliance::rest_gap_hours)) decides:
///
/// - `g < 4.25` — merge: the gap is recorded as a break, the shift's
///   time-out extends to this punch's time-out, and the punch's reported
///   duration is added to the shift's.
/// - `4.25 ≤ g ≤ 34` — continuation with rest: a new shift with
///   `consecutive_days` incremented and `rest_hours_from_last_shift = g`.
/// - `g > 34` — reset: a new shift with `consecutive_days = 1`.
///
/// The thresholds are fixed domain constants, not derived from data.
///
/// # Examples
///
/// ```
/// use compliance_engine::compliance::merge_shifts;
/// use compliance_engine::models::RawPunch;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let punches = vec![
///     RawPunch {
///         time_in: parse("2024-11-13 08:00:00"),
///         time_out: parse("2024-11-13 12:00:00"),
///         duration_hours: Decimal::new(4, 0),
///         shift_date: NaiveDate::from_ymd_opt(2024, 11, 13).unwrap(),
///     },
///     RawPunch {
///         time_in: parse("2024-11-13 14:00:00"),
///         time_out: parse("2024-11-13 18:00:00"),
///         duration_hours: Decimal::new(4, 0),
///         shift_date: NaiveDate::from_ymd_opt(2024, 11, 13).unwrap(),
///     },
/// ];
///
/// // A two-hour gap is a break within one logical shift.
/// let shifts = merge_shifts(&punches);
/// assert_eq!(shifts.len(), 1);
/// assert_eq!(shifts[0].breaks.len(), 1);
/// assert_eq!(shifts[0].duration_hours, Decimal::new(8, 0));
/// ```
pub fn merge_shifts(punches: &[RawPunch]) -> Vec<LogicalShift> {
    let mut sorted: Vec<&RawPunch> = punches.iter().collect();
    sorted.sort_by_key(|p| p.shift_date);

    let mut shifts: Vec<LogicalShift> = Vec::new();

    for punch in sorted {
        let Some(last) = shifts.last_mut() else {
            shifts.push(seed_shift(punch, 1, FIRST_SHIFT_ASSUMED_REST_HOURS));
            continue;
        };

        let gap = rest_gap_hours(punch.time_in, last.time_out);

        if gap < MERGE_GAP_HOURS {
            // Short break within one working shift: absorb the punch.
            last.breaks.push(RestBreak {
                start_time: last.time_out,
                end_time: punch.time_in,
            });
            last.time_out = punch.time_out;
            last.duration_hours += punch.duration_hours;
        } else if gap <= EXTENDED_REST_HOURS {
            // Normal rest: the consecutive-day streak continues.
            let streak = last.consecutive_days + 1;
            shifts.push(seed_shift(punch, streak, gap));
        } else {
            // Extended rest: a full rest cycle or more, streak resets.
            shifts.push(seed_shift(punch, 1, gap));
        }
    }

    shifts
}

/// Builds a fresh logical shift from a single punch.
fn seed_shift(punch: &RawPunch, consecutive_days: u32, rest_hours: Decimal) -> LogicalShift {
    LogicalShift {
        time_in: punch.time_in,
        time_out: punch.time_out,
        duration_hours: punch.duration_hours,
        consecutive_days,
        rest_hours_from_last_shift: rest_hours,
        breaks: Vec::new(),
        last_7_days_hours: Decimal::ZERO,
        compliance_violations: Vec::new(),
    }
}
