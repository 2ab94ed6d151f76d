//! Integration tests for the Shift Compliance Engine.
//!
//! This suite runs whole-pipeline scenarios through the public API:
//! - merge/continuation/reset gap bands end to end
//! - consecutive-day streaks and the rolling 7-day window
//! - the midnight placeholder guard
//! - per-punch drop vs whole-batch failure
//! - report formatting
//! - a property test comparing the sliding window against brute force

use chrono::{Duration, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use compliance_engine::compliance::{
    ROLLING_WINDOW_DAYS, annotate_rolling_hours, merge_shifts, process_timecard,
};
use compliance_engine::models::{ComplianceRule, LogicalShift, RawPunch, TimecardRow};
use compliance_engine::report::format_reports;

// =============================================================================
// Test Helpers
// =============================================================================

fn make_datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn row(file_number: &str, pay_date: &str, time_in: &str, time_out: &str, hours: &str) -> TimecardRow {
    TimecardRow {
        file_number: file_number.to_string(),
        first_name: "Alex".to_string(),
        last_name: "Rivera".to_string(),
        company_code: "TRK".to_string(),
        job_title: "Driver".to_string(),
        department: "Linehaul".to_string(),
        department_id: "041".to_string(),
        pay_date: pay_date.to_string(),
        time_in: time_in.to_string(),
        time_out: time_out.to_string(),
        hours: dec(hours),
    }
}

fn violated_rules(shift: &LogicalShift) -> Vec<ComplianceRule> {
    shift.compliance_violations.iter().map(|v| v.rule).collect()
}

// =============================================================================
// Scenario: two compliant days
// =============================================================================

#[test]
fn test_two_day_driver_is_compliant() {
    let rows = vec![
        row("000541", "11/13/2024", "8:00 AM", "4:00 PM", "8"),
        row("000541", "11/14/2024", "8:00 AM", "4:00 PM", "8"),
    ];

    let reports = process_timecard(&rows).unwrap();
    let report = &reports["000541"];

    assert_eq!(report.processed_shifts.len(), 2);

    let second = &report.processed_shifts[1];
    assert_eq!(second.consecutive_days, 2);
    assert_eq!(second.rest_hours_from_last_shift, dec("16"));
    assert_eq!(second.last_7_days_hours, dec("16"));

    assert!(report.processed_shifts.iter().all(|s| s.is_compliant()));
    assert!(!report.has_compliance_violations);
}

// =============================================================================
// Scenario: six consecutive 10-hour days, then a seventh
// =============================================================================

/// Builds `days` consecutive 10-hour shifts (08:00-18:00) with 14 hours of
/// rest between them, starting on 2024-11-11.
fn consecutive_ten_hour_days(days: u32) -> Vec<TimecardRow> {
    (0..days)
        .map(|i| {
            let date = format!("11/{}/2024", 11 + i);
            row("000541", &date, "8:00 AM", "6:00 PM", "10")
        })
        .collect()
}

#[test]
fn test_sixth_consecutive_day_flags_streak_but_not_rolling_hours() {
    let reports = process_timecard(&consecutive_ten_hour_days(6)).unwrap();
    let shifts = &reports["000541"].processed_shifts;

    assert_eq!(shifts.len(), 6);

    let sixth = &shifts[5];
    assert_eq!(sixth.consecutive_days, 6);
    // 6 * 10 = 60 hours, at the limit but not over it.
    assert_eq!(sixth.last_7_days_hours, dec("60"));
    assert_eq!(violated_rules(sixth), vec![ComplianceRule::ConsecutiveDays]);

    // The first five shifts are all still compliant.
    assert!(shifts[..5].iter().all(|s| s.is_compliant()));
}

#[test]
fn test_seventh_consecutive_day_adds_rolling_hours_violation() {
    let reports = process_timecard(&consecutive_ten_hour_days(7)).unwrap();
    let shifts = &reports["000541"].processed_shifts;

    let seventh = &shifts[6];
    assert_eq!(seventh.consecutive_days, 7);
    assert_eq!(seventh.last_7_days_hours, dec("70"));
    assert_eq!(
        violated_rules(seventh),
        vec![
            ComplianceRule::ConsecutiveDays,
            ComplianceRule::SevenDayTotalHours
        ]
    );
}

// =============================================================================
// Scenario: short gap merges into one logical shift
// =============================================================================

#[test]
fn test_two_punches_two_hours_apart_merge_with_one_break() {
    let rows = vec![
        row("000541", "11/13/2024", "8:00 AM", "12:00 PM", "4"),
        row("000541", "11/13/2024", "2:00 PM", "6:00 PM", "4"),
    ];

    let reports = process_timecard(&rows).unwrap();
    let report = &reports["000541"];

    assert_eq!(report.original_shifts.len(), 2);
    assert_eq!(report.processed_shifts.len(), 1);

    let shift = &report.processed_shifts[0];
    assert_eq!(shift.duration_hours, dec("8"));
    assert_eq!(shift.breaks.len(), 1);
    assert_eq!(shift.time_in, make_datetime("2024-11-13 08:00:00"));
    assert_eq!(shift.time_out, make_datetime("2024-11-13 18:00:00"));
    assert!(shift.is_compliant());
}

// =============================================================================
// Gap band boundaries through the full pipeline
// =============================================================================

#[test]
fn test_gap_of_exactly_34_hours_keeps_streak_end_to_end() {
    let rows = vec![
        row("000541", "11/13/2024", "8:00 AM", "2:00 PM", "6"),
        // 2 PM on the 13th to 12:00 AM on the 15th is exactly 34 hours.
        row("000541", "11/15/2024", "12:00 AM", "8:00 AM", "8"),
    ];

    let reports = process_timecard(&rows).unwrap();
    let shifts = &reports["000541"].processed_shifts;

    assert_eq!(shifts.len(), 2);
    assert_eq!(shifts[1].consecutive_days, 2);
    assert_eq!(shifts[1].rest_hours_from_last_shift, dec("34"));
}

#[test]
fn test_gap_over_34_hours_resets_streak_end_to_end() {
    let rows = vec![
        row("000541", "11/13/2024", "8:00 AM", "2:00 PM", "6"),
        row("000541", "11/15/2024", "12:01 AM", "8:00 AM", "8"),
    ];

    let reports = process_timecard(&rows).unwrap();
    let shifts = &reports["000541"].processed_shifts;

    assert_eq!(shifts[1].consecutive_days, 1);
}

// =============================================================================
// Midnight placeholder guard
// =============================================================================

#[test]
fn test_midnight_placeholder_rows_do_not_fabricate_rest() {
    // Both rows carry the 12:00 AM placeholder for in and out. Plain
    // subtraction would see 24-hour gaps; the guard makes them one shift.
    let rows = vec![
        row("000541", "11/13/2024", "12:00 AM", "12:00 AM", "8"),
        row("000541", "11/14/2024", "12:00 AM", "12:00 AM", "8"),
    ];

    let reports = process_timecard(&rows).unwrap();
    let report = &reports["000541"];

    assert_eq!(report.processed_shifts.len(), 1);
    assert_eq!(report.processed_shifts[0].duration_hours, dec("16"));
}

// =============================================================================
// Error handling
// =============================================================================

#[test]
fn test_bad_time_token_drops_punch_only() {
    let rows = vec![
        row("000541", "11/13/2024", "8:00 AM", "4:00 PM", "8"),
        row("000541", "11/14/2024", "around noon", "4:00 PM", "8"),
        row("000541", "11/15/2024", "8:00 AM", "4:00 PM", "8"),
    ];

    let reports = process_timecard(&rows).unwrap();
    let report = &reports["000541"];

    // The malformed middle punch vanishes; the rest still process.
    assert_eq!(report.original_shifts.len(), 2);
    assert_eq!(report.processed_shifts.len(), 2);
}

#[test]
fn test_bad_date_fails_whole_batch() {
    let rows = vec![
        row("000541", "11/13/2024", "8:00 AM", "4:00 PM", "8"),
        row("000546", "not a date", "8:00 AM", "4:00 PM", "8"),
    ];

    assert!(process_timecard(&rows).is_err());
}

#[test]
fn test_driver_with_only_bad_punches_yields_empty_compliant_report() {
    let rows = vec![row("000541", "11/13/2024", "???", "???", "8")];

    let reports = process_timecard(&rows).unwrap();
    let report = &reports["000541"];

    assert!(report.processed_shifts.is_empty());
    assert!(!report.has_compliance_violations);
    // Identity still flows through even with no usable punches.
    assert_eq!(report.first_name, "Alex");
}

// =============================================================================
// Report formatting
// =============================================================================

#[test]
fn test_formatted_batch_renders_dates_and_rounds() {
    let rows = vec![
        row("000541", "11/13/2024", "10:58 PM", "11:45 PM", "0.783"),
    ];

    let reports = process_timecard(&rows).unwrap();
    let formatted = format_reports(&reports);
    let report = &formatted["000541"];

    assert_eq!(report.original_shifts[0].time_in, "11/13/2024 22:58");
    assert_eq!(report.original_shifts[0].duration_hours, dec("0.78"));
    assert_eq!(report.processed_shifts[0].consecutive_days, 1);
    assert!(report.processed_shifts[0].is_compliant);
}

// =============================================================================
// Property: sliding window equals brute force
// =============================================================================

/// Builds a non-overlapping, time-ordered shift sequence from (gap, length)
/// minute pairs.
fn shifts_from_gaps(gaps_and_lengths: &[(i64, i64)]) -> Vec<LogicalShift> {
    let mut cursor = make_datetime("2024-01-01 00:00:00");
    let mut shifts = Vec::new();

    for &(gap_minutes, length_minutes) in gaps_and_lengths {
        let time_in = cursor + Duration::minutes(gap_minutes);
        let time_out = time_in + Duration::minutes(length_minutes);
        shifts.push(LogicalShift {
            time_in,
            time_out,
            duration_hours: Decimal::new(length_minutes, 0) / Decimal::new(60, 0),
            consecutive_days: 1,
            rest_hours_from_last_shift: dec("20"),
            breaks: vec![],
            last_7_days_hours: Decimal::ZERO,
            compliance_violations: vec![],
        });
        cursor = time_out;
    }

    shifts
}

proptest! {
    #[test]
    fn prop_rolling_hours_match_brute_force(
        gaps_and_lengths in prop::collection::vec((1i64..20_000, 1i64..1_440), 0..40)
    ) {
        let shifts = shifts_from_gaps(&gaps_and_lengths);
        let annotated = annotate_rolling_hours(shifts.clone());

        for (i, current) in annotated.iter().enumerate() {
            let window_start = current.time_in - Duration::days(ROLLING_WINDOW_DAYS);
            let expected: Decimal = shifts[..=i]
                .iter()
                .filter(|s| s.time_out >= window_start)
                .map(|s| s.duration_hours)
                .sum();
            prop_assert_eq!(current.last_7_days_hours, expected.round_dp(2));
        }
    }

    #[test]
    fn prop_merged_shifts_are_time_ordered_and_non_overlapping(
        gaps_and_lengths in prop::collection::vec((260i64..20_000, 1i64..800), 1..30)
    ) {
        // Gaps of at least 260 minutes keep every punch outside the merge
        // band, so each punch becomes its own logical shift.
        let punches: Vec<RawPunch> = shifts_from_gaps(&gaps_and_lengths)
            .into_iter()
            .map(|s| RawPunch {
                time_in: s.time_in,
                time_out: s.time_out,
                duration_hours: s.duration_hours,
                shift_date: s.time_in.date(),
            })
            .collect();

        let merged = merge_shifts(&punches);
        for pair in merged.windows(2) {
            prop_assert!(pair[0].time_in < pair[1].time_in);
            prop_assert!(pair[0].time_out <= pair[1].time_in);
        }
    }
}
