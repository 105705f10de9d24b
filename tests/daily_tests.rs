mod common;

use chulcheck::core::daily::build_daily_records;
use chulcheck::models::{DayStandard, DayStatus, Standards};
use common::event;

fn std_minutes() -> Standards {
    Standards::default()
}

#[test]
fn test_two_events_make_a_complete_day() {
    let events = vec![
        event("철수", "2025-10-06", "09:00", "[철수] [오전 9:00] 출근"),
        event("철수", "2025-10-06", "18:05", "[철수] [오후 6:05] 퇴근"),
    ];

    let records = build_daily_records(&events, &std_minutes());
    assert_eq!(records.len(), 1);

    let rec = &records[0];
    assert_eq!(rec.status, DayStatus::Complete);
    assert_eq!(rec.check_in_str(), "09:00");
    assert_eq!(rec.check_out_str(), "18:05");
    assert_eq!(rec.standard_minutes, 540);
    assert_eq!(rec.delta_minutes, Some(5));
}

#[test]
fn test_single_event_is_checkout_missing() {
    let events = vec![event("철수", "2025-10-07", "09:30", "출근합니다")];

    let records = build_daily_records(&events, &std_minutes());
    assert_eq!(records.len(), 1);

    let rec = &records[0];
    assert_eq!(rec.status, DayStatus::CheckoutMissing);
    assert_eq!(rec.check_in_str(), "09:30");
    assert_eq!(rec.check_out_str(), "--:--");
    assert_eq!(rec.delta_minutes, None);
}

#[test]
fn test_no_events_no_record() {
    let records = build_daily_records(&[], &std_minutes());
    assert!(records.is_empty());
}

#[test]
fn test_interval_ignores_event_labels() {
    // none of these lines says 출근 or 퇴근; min/max still define the interval
    let events = vec![
        event("철수", "2025-10-06", "10:00", "커피 타임"),
        event("철수", "2025-10-06", "08:50", "좋은 아침"),
        event("철수", "2025-10-06", "17:50", "먼저 갑니다"),
    ];

    let records = build_daily_records(&events, &std_minutes());
    let rec = &records[0];

    assert_eq!(rec.check_in_str(), "08:50");
    assert_eq!(rec.check_out_str(), "17:50");
    assert_eq!(rec.delta_minutes, Some(540 - 540));
}

#[test]
fn test_half_leave_marker_reduces_standard() {
    let events = vec![
        event("영희", "2025-10-08", "09:00", "오늘 반차입니다, 출근"),
        event("영희", "2025-10-08", "13:00", "퇴근할게요"),
    ];

    let records = build_daily_records(&events, &std_minutes());
    let rec = &records[0];

    assert_eq!(rec.standard, DayStandard::HalfLeave);
    assert_eq!(rec.standard_minutes, 240);
    assert_eq!(rec.delta_minutes, Some(0));
}

#[test]
fn test_quarter_leave_marker_wins_over_half() {
    // 반반차 on one event fixes the whole date even though another event
    // only matches 반차
    let events = vec![
        event("영희", "2025-10-09", "09:00", "반반차 씁니다"),
        event("영희", "2025-10-09", "16:00", "반차 얘기가 나왔던 날, 퇴근"),
    ];

    let records = build_daily_records(&events, &std_minutes());
    let rec = &records[0];

    assert_eq!(rec.standard, DayStandard::QuarterLeave);
    assert_eq!(rec.standard_minutes, 420);
    assert_eq!(rec.delta_minutes, Some(0));
}

#[test]
fn test_marker_split_by_spaces_still_counts() {
    let events = vec![
        event("영희", "2025-10-10", "09:00", "오늘 반 차 입니다"),
        event("영희", "2025-10-10", "13:00", "퇴근"),
    ];

    let records = build_daily_records(&events, &std_minutes());
    assert_eq!(records[0].standard, DayStandard::HalfLeave);
}

#[test]
fn test_marker_on_any_event_of_the_day() {
    let events = vec![
        event("철수", "2025-10-08", "09:00", "출근"),
        event("철수", "2025-10-08", "11:00", "오후 반반차 쓰겠습니다"),
        event("철수", "2025-10-08", "16:00", "퇴근"),
    ];

    let records = build_daily_records(&events, &std_minutes());
    assert_eq!(records[0].standard, DayStandard::QuarterLeave);
    assert_eq!(records[0].delta_minutes, Some(420 - 420));
}

#[test]
fn test_records_grouped_per_person() {
    let events = vec![
        event("철수", "2025-10-06", "09:00", "출근"),
        event("영희", "2025-10-06", "09:10", "출근"),
        event("철수", "2025-10-06", "18:00", "퇴근"),
        event("영희", "2025-10-06", "18:10", "퇴근"),
    ];

    let records = build_daily_records(&events, &std_minutes());
    assert_eq!(records.len(), 2);

    // ordered by person, then date
    assert_eq!(records[0].person, "영희");
    assert_eq!(records[1].person, "철수");
}

#[test]
fn test_status_from_event_count() {
    assert_eq!(DayStatus::from_event_count(0), DayStatus::InsufficientEvents);
    assert_eq!(DayStatus::from_event_count(1), DayStatus::CheckoutMissing);
    assert_eq!(DayStatus::from_event_count(2), DayStatus::Complete);
    assert_eq!(DayStatus::from_event_count(5), DayStatus::Complete);
}
