use chulcheck::core::classify::{LineClass, classify, convert_hour};
use chrono::{NaiveDate, Weekday};

#[test]
fn test_hour_conversion_rules() {
    // (PM, 12) stays 12, (AM, 12) becomes midnight
    assert_eq!(convert_hour(true, 12), 12);
    assert_eq!(convert_hour(false, 12), 0);
    // ordinary afternoon and morning hours
    assert_eq!(convert_hour(true, 7), 19);
    assert_eq!(convert_hour(false, 7), 7);
    assert_eq!(convert_hour(true, 1), 13);
    assert_eq!(convert_hour(false, 1), 1);
}

#[test]
fn test_date_header_line() {
    let line = "--------------- 2025년 10월 6일 월요일 ---------------";
    assert_eq!(
        classify(line),
        LineClass::DateHeader {
            date: NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
            weekday: Weekday::Mon,
        }
    );
}

#[test]
fn test_date_header_requires_five_dashes() {
    assert_eq!(classify("---- 2025년 10월 6일 월요일"), LineClass::NoMatch);

    let ok = classify("----- 2025년 10월 6일 월요일");
    assert!(matches!(ok, LineClass::DateHeader { .. }));
}

#[test]
fn test_date_header_impossible_date_is_noise() {
    assert_eq!(classify("----- 2025년 2월 30일 월요일"), LineClass::NoMatch);
}

#[test]
fn test_message_line_pm() {
    assert_eq!(
        classify("[철수] [오후 6:05] 퇴근"),
        LineClass::Message {
            person: "철수".to_string(),
            hour: 18,
            minute: 5,
        }
    );
}

#[test]
fn test_message_line_am() {
    assert_eq!(
        classify("[김영희] [오전 9:00] 출근"),
        LineClass::Message {
            person: "김영희".to_string(),
            hour: 9,
            minute: 0,
        }
    );
}

#[test]
fn test_message_midnight_and_noon() {
    assert_eq!(
        classify("[철수] [오전 12:10] 야근 끝"),
        LineClass::Message {
            person: "철수".to_string(),
            hour: 0,
            minute: 10,
        }
    );
    assert_eq!(
        classify("[철수] [오후 12:10] 점심"),
        LineClass::Message {
            person: "철수".to_string(),
            hour: 12,
            minute: 10,
        }
    );
}

#[test]
fn test_message_hour_out_of_range_is_noise() {
    assert_eq!(classify("[철수] [오전 0:10] x"), LineClass::NoMatch);
    assert_eq!(classify("[철수] [오후 13:10] x"), LineClass::NoMatch);
}

#[test]
fn test_noise_lines() {
    assert_eq!(classify(""), LineClass::NoMatch);
    assert_eq!(classify("철수님이 들어왔습니다."), LineClass::NoMatch);
    assert_eq!(classify("사진"), LineClass::NoMatch);
    assert_eq!(
        classify("저장한 날짜 : 2025년 10월 12일 오후 11:00"),
        LineClass::NoMatch
    );
}
