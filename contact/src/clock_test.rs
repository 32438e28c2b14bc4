use super::*;
use time::macros::datetime;

#[test]
fn format_timestamp_matches_en_us_locale_string() {
    assert_eq!(format_timestamp(datetime!(2025-07-04 15:04:05 UTC)), "7/4/2025, 3:04:05 PM");
}

#[test]
fn format_timestamp_handles_midnight_and_two_digit_fields() {
    assert_eq!(format_timestamp(datetime!(2026-10-14 00:09:30 UTC)), "10/14/2026, 12:09:30 AM");
}

#[test]
fn system_clock_produces_nonempty_label() {
    let label = SystemClock.now_label();
    assert!(label.contains('/'));
    assert!(label.ends_with("AM") || label.ends_with("PM"));
}
