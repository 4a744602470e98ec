use chrono::NaiveTime;
use scheduletools::config::{DurationStyle, FormatConfig};
use scheduletools::core::interval::{
    parse_bounds, parse_clock, parse_interval, parse_time_and_duration,
};

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn labels(interval: &str) -> (Option<String>, Option<String>) {
    parse_time_and_duration(interval, &FormatConfig::default())
}

#[test]
fn test_bare_hour_and_hour_minute_mix() {
    assert_eq!(
        labels("6 pm - 7:15 pm"),
        (Some("6:00 PM".into()), Some("1:15".into()))
    );
    assert_eq!(
        labels("6:00 pm - 7:00 pm"),
        (Some("6:00 PM".into()), Some("1:00".into()))
    );
    assert_eq!(
        labels("8:15 pm - 9:15 pm"),
        (Some("8:15 PM".into()), Some("1:00".into()))
    );
}

#[test]
fn test_midnight_rollover() {
    assert_eq!(
        labels("11 pm - 1 am"),
        (Some("11:00 PM".into()), Some("2:00".into()))
    );
    assert_eq!(
        labels("10:30 PM - 12:15 AM"),
        (Some("10:30 PM".into()), Some("1:45".into()))
    );
}

#[test]
fn test_twelve_am_is_midnight() {
    assert_eq!(parse_clock("12 am"), Some(hm(0, 0)));
    assert_eq!(parse_clock("12:30 am"), Some(hm(0, 30)));
    assert_eq!(parse_clock("12 pm"), Some(hm(12, 0)));
}

#[test]
fn test_case_and_spacing_are_tolerated() {
    assert_eq!(parse_bounds("  6 PM-7 PM "), Some((hm(18, 0), hm(19, 0))));
    assert_eq!(parse_bounds("6 pm -   7:30 Pm"), Some((hm(18, 0), hm(19, 30))));
}

#[test]
fn test_label_and_garbage_cells_are_rejected() {
    assert_eq!(labels("Time"), (None, None));
    assert_eq!(labels("Time - Slot"), (None, None));
    assert_eq!(labels(""), (None, None));
    assert_eq!(labels("   "), (None, None));
    assert_eq!(labels("6 pm"), (None, None));
    assert_eq!(labels("six - seven"), (None, None));
    assert_eq!(labels("18:00 - 19:00"), (None, None));
    assert_eq!(labels("6 pm - 7 pm - 8 pm"), (None, None));
}

#[test]
fn test_equal_bounds_have_zero_duration() {
    assert_eq!(
        labels("6 pm - 6:00 pm"),
        (Some("6:00 PM".into()), Some("0:00".into()))
    );
}

#[test]
fn test_morning_start_loses_leading_zero() {
    let slot = parse_interval("9 am - 10:30 am", &FormatConfig::default()).unwrap();
    assert_eq!(slot.start, hm(9, 0));
    assert_eq!(slot.duration_minutes, 90);
    assert_eq!(slot.start_label, "9:00 AM");
    assert_eq!(slot.duration_label, "1:30");
}

#[test]
fn test_configured_formats_are_applied() {
    let format = FormatConfig {
        time: "%H:%M".to_string(),
        duration: DurationStyle::PaddedHourMinutes,
        ..FormatConfig::default()
    };
    let slot = parse_interval("6 pm - 7:15 pm", &format).unwrap();
    assert_eq!(slot.start_label, "18:00");
    assert_eq!(slot.duration_label, "01:15");

    // 24h pattern: a morning start still loses its leading zero
    let slot = parse_interval("8 am - 9 am", &format).unwrap();
    assert_eq!(slot.start_label, "8:00");
}

#[test]
fn test_midnight_hour_keeps_a_digit_in_24h_pattern() {
    let format = FormatConfig {
        time: "%H:%M".to_string(),
        ..FormatConfig::default()
    };
    let slot = parse_interval("12:30 am - 1 am", &format).unwrap();
    assert_eq!(slot.start_label, "0:30");
    assert_eq!(slot.duration_label, "0:30");
}
