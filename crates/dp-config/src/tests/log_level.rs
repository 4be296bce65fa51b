use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn given_known_levels_when_parsed_then_match() {
    assert_eq!(*LogLevel::from_str("off").unwrap(), LevelFilter::Off);
    assert_eq!(*LogLevel::from_str("error").unwrap(), LevelFilter::Error);
    assert_eq!(*LogLevel::from_str("warn").unwrap(), LevelFilter::Warn);
    assert_eq!(*LogLevel::from_str("info").unwrap(), LevelFilter::Info);
    assert_eq!(*LogLevel::from_str("debug").unwrap(), LevelFilter::Debug);
    assert_eq!(*LogLevel::from_str("trace").unwrap(), LevelFilter::Trace);
}

#[test]
fn given_mixed_case_when_parsed_then_case_insensitive() {
    assert_eq!(*LogLevel::from_str("DEBUG").unwrap(), LevelFilter::Debug);
}

#[test]
fn given_unknown_value_when_parsed_then_falls_back_to_info() {
    assert_eq!(*LogLevel::from_str("verbose").unwrap(), LevelFilter::Info);
}
