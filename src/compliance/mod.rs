//! The shift-compliance engine.
//!
//! This module contains the pipeline stages: punch time normalization,
//! shift merging with the rest-gap bands, the rolling 7-day hours
//! aggregator, the compliance rule evaluator, and the batch orchestrator
//! that sequences them per driver.

mod batch;
mod evaluator;
mod punch_time;
mod rolling_hours;
mod shift_merger;

pub use batch::{group_rows, process_batch, process_driver, process_timecard};
pub use evaluator::{
    MAX_7_DAY_HOURS, MAX_CONSECUTIVE_DAYS, MAX_SHIFT_SPAN_HOURS, MIN_REST_HOURS, check_shift,
    evaluate_shift,
};
pub use punch_time::{adjust_midnight, parse_pay_date, parse_punch_time, rest_gap_hours};
pub use rolling_hours::{ROLLING_WINDOW_DAYS, annotate_rolling_hours};
pub use shift_merger::{
    EXTENDED_REST_HOURS, FIRST_SHIFT_ASSUMED_REST_HOURS, MERGE_GAP_HOURS, merge_shifts,
};
