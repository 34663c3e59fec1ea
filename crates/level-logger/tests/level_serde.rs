//! Serde round-trips for `Level` (requires the `serde` feature).

use level_logger::Level;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, PartialEq, Serialize)]
struct LoggingSettings {
    level: Level,
}

#[test]
fn level_serializes_as_canonical_name() {
    assert_eq!(serde_json::to_string(&Level::WARN).unwrap(), "\"WARN\"");

    let settings = LoggingSettings { level: Level::DEBUG };
    assert_eq!(
        serde_json::to_string(&settings).unwrap(),
        r#"{"level":"DEBUG"}"#
    );
}

#[test]
fn level_deserializes_case_insensitively() {
    let settings: LoggingSettings = serde_json::from_str(r#"{"level":"error"}"#).unwrap();
    assert_eq!(settings.level, Level::ERROR);

    let level: Level = serde_json::from_str("\"Fatal\"").unwrap();
    assert_eq!(level, Level::FATAL);
}

#[test]
fn unknown_level_name_fails_to_deserialize() {
    let error = serde_json::from_str::<Level>("\"verbose\"").unwrap_err();
    assert!(error.to_string().contains("invalid log level"), "{error}");
}

#[test]
fn invalid_level_fails_to_serialize() {
    assert!(serde_json::to_string(&Level::from_raw(-1)).is_err());
}
