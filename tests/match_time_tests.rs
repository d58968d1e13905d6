use chrono::{Datelike, NaiveDate, Timelike};

use matchplan_lambda_rust::match_time::parse_match_time;

#[test]
fn parses_weekday_date_and_time() {
    let dt = parse_match_time("Sonntag 19.3.2017 - 11:00").expect("valid match time");
    assert_eq!(dt.year(), 2017);
    assert_eq!(dt.month(), 3);
    assert_eq!(dt.day(), 19);
    assert_eq!(dt.hour(), 11);
    assert_eq!(dt.minute(), 0);
    assert_eq!(dt.second(), 0);
}

#[test]
fn ignores_tokens_past_the_time() {
    let dt = parse_match_time("Samstag 01.04.2017 - 15:30 Uhr | Kreispokal").expect("valid match time");
    let expected = NaiveDate::from_ymd_opt(2017, 4, 1).unwrap().and_hms_opt(15, 30, 0).unwrap();
    assert_eq!(dt, expected);
}

#[test]
fn picks_tokens_by_position_not_content() {
    // Whatever sits at index 0 and 2 is not inspected
    let dt = parse_match_time("x 31.12.2018 y 23:59").expect("valid match time");
    let expected = NaiveDate::from_ymd_opt(2018, 12, 31).unwrap().and_hms_opt(23, 59, 0).unwrap();
    assert_eq!(dt, expected);
}

#[test]
fn missing_time_token_is_a_format_error() {
    let err = parse_match_time("Sonntag 19.03.2017").unwrap_err();
    assert!(err.is_format(), "error was: {}", err);
    assert!(!err.is_alignment());
}

#[test]
fn empty_input_is_a_format_error() {
    assert!(parse_match_time("").unwrap_err().is_format());
}

#[test]
fn incomplete_date_is_a_format_error() {
    let err = parse_match_time("Sonntag 19.03 - 11:00").unwrap_err();
    assert!(err.is_format());
    assert!(err.to_string().contains("19.03"), "error was: {}", err);
}

#[test]
fn incomplete_time_is_a_format_error() {
    assert!(parse_match_time("Sonntag 19.03.2017 - 11").unwrap_err().is_format());
}

#[test]
fn non_numeric_fields_are_format_errors() {
    assert!(parse_match_time("Sonntag xx.03.2017 - 11:00").unwrap_err().is_format());
    assert!(parse_match_time("Sonntag 19.03.2017 - 11:ab").unwrap_err().is_format());
}

#[test]
fn double_spaces_shift_positions_and_fail() {
    // Splitting is on single spaces, so an extra space moves the date out of index 1
    assert!(parse_match_time("Sonntag  19.03.2017 - 11:00").is_err());
}

#[test]
fn out_of_range_values_are_rejected() {
    assert!(parse_match_time("Sonntag 19.0.2017 - 11:00").unwrap_err().is_format());
    assert!(parse_match_time("Sonntag 19.13.2017 - 11:00").unwrap_err().is_format());
    assert!(parse_match_time("Sonntag 30.02.2017 - 11:00").unwrap_err().is_format());
    assert!(parse_match_time("Sonntag 19.03.2017 - 24:00").unwrap_err().is_format());
    assert!(parse_match_time("Sonntag 19.03.2017 - 11:60").unwrap_err().is_format());
}

#[test]
fn accepts_leap_day() {
    let dt = parse_match_time("Samstag 29.02.2020 - 14:00").expect("leap day");
    assert_eq!((dt.month(), dt.day()), (2, 29));
}
