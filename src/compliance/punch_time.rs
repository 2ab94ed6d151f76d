//! Punch time normalization.
//!
//! This module resolves the timecard source's (date, time-of-day) string
//! pairs into absolute instants on a fixed UTC-equivalent calendar, and
//! provides the midnight-handling primitives the rest of the engine builds
//! on. No local-timezone adjustment is ever applied: wall-clock values are
//! preserved verbatim, so hour differences are pure subtraction with no
//! daylight-saving artifacts.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// Parses a (date, time) string pair into an instant.
///
/// The date must be MM/DD/YYYY. The time must match `hh:mm[ ]?(AM|PM)?`
/// with a case-insensitive 12-hour marker; without a marker the hour is
/// read on a 24-hour clock.
///
/// # Returns
///
/// - `Ok(Some(instant))` on success.
/// - `Ok(None)` when either field is empty or the time token is malformed.
///   Malformed tokens are reported on the warning channel, never raised:
///   the offending punch is simply excluded from shift construction.
/// - `Err(EngineError::MalformedDate)` when the date cannot be parsed.
///   Dates order the merge pass, so this fails the whole batch.
///
/// # Examples
///
/// ```
/// use compliance_engine::compliance::parse_punch_time;
/// use chrono::{NaiveDate, Timelike};
///
/// let instant = parse_punch_time("11/13/2024", "10:58 PM").unwrap().unwrap();
/// assert_eq!(instant.date(), NaiveDate::from_ymd_opt(2024, 11, 13).unwrap());
/// assert_eq!((instant.hour(), instant.minute()), (22, 58));
///
/// // 12 AM is midnight, 12 PM is noon
/// let midnight = parse_punch_time("11/13/2024", "12:00 AM").unwrap().unwrap();
/// assert_eq!(midnight.hour(), 0);
/// let noon = parse_punch_time("11/13/2024", "12:00 pm").unwrap().unwrap();
/// assert_eq!(noon.hour(), 12);
///
/// // Malformed time tokens are dropped, not raised
/// assert!(parse_punch_time("11/13/2024", "late").unwrap().is_none());
/// ```
pub fn parse_punch_time(date_str: &str, time_str: &str) -> EngineResult<Option<NaiveDateTime>> {
    let date_str = date_str.trim();
    let time_str = time_str.trim();
    if date_str.is_empty() || time_str.is_empty() {
        return Ok(None);
    }

    let Some((hour, minute)) = parse_clock_token(time_str) else {
        warn!(time = %time_str, "invalid time format, punch dropped");
        return Ok(None);
    };

    let date = parse_pay_date(date_str)?;

    match date.and_hms_opt(hour, minute, 0) {
        Some(instant) => Ok(Some(instant)),
        None => {
            warn!(time = %time_str, "time of day out of range, punch dropped");
            Ok(None)
        }
    }
}

/// Parses an MM/DD/YYYY pay date.
pub fn parse_pay_date(date_str: &str) -> EngineResult<NaiveDate> {
    let malformed = || EngineError::MalformedDate {
        value: date_str.to_string(),
    };

    let mut parts = date_str.trim().splitn(3, '/');
    let month = parse_number(parts.next()).ok_or_else(malformed)?;
    let day = parse_number(parts.next()).ok_or_else(malformed)?;
    let year = parse_number(parts.next()).ok_or_else(malformed)?;

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(malformed)
}

/// Parses `hh:mm[ ]?(AM|PM)?` into a 24-hour (hour, minute) pair.
///
/// Returns `None` when the token does not match. Marker matching is
/// case-insensitive, per the timecard export's inconsistent casing.
fn parse_clock_token(time_str: &str) -> Option<(u32, u32)> {
    let token = time_str.to_ascii_uppercase();

    let (clock, marker) = if let Some(rest) = token.strip_suffix("AM") {
        (rest.trim_end(), Some(Marker::Am))
    } else if let Some(rest) = token.strip_suffix("PM") {
        (rest.trim_end(), Some(Marker::Pm))
    } else {
        (token.as_str(), None)
    };

    let (hour_part, minute_part) = clock.split_once(':')?;
    if hour_part.is_empty() || hour_part.len() > 2 || minute_part.len() != 2 {
        return None;
    }

    let mut hour = parse_number(Some(hour_part))?;
    let minute = parse_number(Some(minute_part))?;

    // 12-hour to 24-hour conversion
    match marker {
        Some(Marker::Pm) if hour != 12 => hour += 12,
        Some(Marker::Am) if hour == 12 => hour = 0,
        _ => {}
    }

    Some((hour, minute))
}

#[derive(Clone, Copy)]
enum Marker {
    Am,
    Pm,
}

/// Parses an all-digit field; rejects signs and embedded whitespace that
/// `u32::from_str` would otherwise accept.
fn parse_number(part: Option<&str>) -> Option<u32> {
    let part = part?;
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Returns true if the instant is exactly 00:00:00 of its day.
fn is_exact_midnight(t: NaiveDateTime) -> bool {
    t.hour() == 0 && t.minute() == 0 && t.second() == 0
}

/// Moves an exact-midnight instant to 23:59 of the previous day.
///
/// Timecard exports use 12:00 AM as a placeholder for "end of day", which
/// would otherwise land a closing punch on the wrong calendar day. Instants
/// not exactly at midnight are returned unchanged. Callers choose whether to
/// apply this; the shift merger stores punch times verbatim and relies on
/// [`rest_gap_hours`] for its midnight handling instead.
///
/// # Examples
///
/// ```
/// use compliance_engine::compliance::{adjust_midnight, parse_punch_time};
/// use chrono::{NaiveDate, Timelike};
///
/// let midnight = parse_punch_time("11/14/2024", "12:00 AM").unwrap().unwrap();
/// let adjusted = adjust_midnight(midnight);
/// assert_eq!(adjusted.date(), NaiveDate::from_ymd_opt(2024, 11, 13).unwrap());
/// assert_eq!((adjusted.hour(), adjusted.minute()), (23, 59));
/// ```
pub fn adjust_midnight(time: NaiveDateTime) -> NaiveDateTime {
    if is_exact_midnight(time) {
        time - Duration::minutes(1)
    } else {
        time
    }
}

/// Hours between a shift's time-in and the previous shift's time-out, with
/// the midnight guard.
///
/// When both instants are exactly midnight the gap is defined as zero: both
/// values are almost certainly default-time placeholders, and plain
/// subtraction would fabricate a 24-hour rest out of them. Otherwise the
/// result is the signed difference in hours at minute precision.
///
/// # Examples
///
/// ```
/// use compliance_engine::compliance::rest_gap_hours;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let out = NaiveDateTime::parse_from_str("2024-11-13 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let next_in = NaiveDateTime::parse_from_str("2024-11-14 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(rest_gap_hours(next_in, out), Decimal::new(16, 0));
/// ```
pub fn rest_gap_hours(current_time_in: NaiveDateTime, last_time_out: NaiveDateTime) -> Decimal {
    if is_exact_midnight(current_time_in) && is_exact_midnight(last_time_out) {
        return Decimal::ZERO;
    }

    let minutes = (current_time_in - last_time_out).num_minutes();
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}
