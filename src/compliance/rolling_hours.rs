//! Rolling 7-day hours aggregation.
//!
//! This module annotates each logical shift with the total hours the driver
//! worked in the trailing 7 days, using an amortized-O(n) sliding window:
//! each shift enters and leaves the window queue at most once.

use std::collections::VecDeque;

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::LogicalShift;

/// The trailing horizon of the rolling aggregate, in days.
pub const ROLLING_WINDOW_DAYS: i64 = 7;

/// Annotates each shift with the driver's trailing 7-day worked hours.
///
/// Shifts are stably sorted by time-in, then walked in order with a FIFO
/// window and a running duration sum. At each shift, queued shifts whose
/// time-out is strictly earlier than `time_in - 7 days` are evicted and
/// their durations subtracted; the current shift is then pushed and its
/// duration added. The running sum, rounded to 2 decimal places, becomes
/// the shift's `last_7_days_hours` (so a shift's own hours always count
/// toward its own window).
///
/// A pathologically long single shift can evict everything before it and
/// end up alone in its window; inputs are assumed non-overlapping and no
/// special handling is applied.
///
/// # Examples
///
/// ```
/// use compliance_engine::compliance::{annotate_rolling_hours, merge_shifts};
/// use compliance_engine::models::RawPunch;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let punches: Vec<RawPunch> = (13..=15)
///     .map(|day| RawPunch {
///         time_in: parse(&format!("2024-11-{day} 08:00:00")),
///         time_out: parse(&format!("2024-11-{day} 16:00:00")),
///         duration_hours: Decimal::new(8, 0),
///         shift_date: NaiveDate::from_ymd_opt(2024, 11, day).unwrap(),
///     })
///     .collect();
///
/// let shifts = annotate_rolling_hours(merge_shifts(&punches));
/// let totals: Vec<Decimal> = shifts.iter().map(|s| s.last_7_days_hours).collect();
/// assert_eq!(totals, vec![Decimal::new(8, 0), Decimal::new(16, 0), Decimal::new(24, 0)]);
/// ```
pub fn annotate_rolling_hours(mut shifts: Vec<LogicalShift>) -> Vec<LogicalShift> {
    shifts.sort_by_key(|s| s.time_in);

    // Window entries only need the eviction key and the amount to subtract.
    let mut window: VecDeque<(NaiveDateTime, Decimal)> = VecDeque::new();
    let mut running_total = Decimal::ZERO;

    for shift in &mut shifts {
        let window_start = shift.time_in - Duration::days(ROLLING_WINDOW_DAYS);

        while let Some(&(oldest_time_out, oldest_duration)) = window.front() {
            if oldest_time_out >= window_start {
                break;
            }
            running_total -= oldest_duration;
            window.pop_front();
        }

        window.push_back((shift.time_out, shift.duration_hours));
        running_total += shift.duration_hours;

        shift.last_7_days_hours = running_total.round_dp(2);
    }

    shifts
}
