//! Serialization of the console configuration types.
#![cfg(feature = "serde")]

use logging::{ColorMode, Level, LevelFilter, LogConfig};

#[test]
fn log_config_round_trips_through_json() {
    let config = LogConfig::with_threshold(LevelFilter::Debug)
        .color(ColorMode::Never)
        .timestamps(false);
    let json = serde_json::to_string(&config).expect("serialize");
    assert_eq!(
        json,
        r#"{"threshold":"debug","color":"never","timestamps":false}"#
    );
    let back: LogConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, config);
}

#[test]
fn missing_fields_take_defaults_and_aliases_apply() {
    let config: LogConfig =
        serde_json::from_str(r#"{"level":"off","color":"on"}"#).expect("deserialize");
    assert_eq!(config.threshold, LevelFilter::None);
    assert_eq!(config.color, ColorMode::Always);
    assert!(config.timestamps);

    let config: LogConfig = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(config, LogConfig::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let result = serde_json::from_str::<LogConfig>(r#"{"volume":11}"#);
    assert!(result.is_err());
}

#[test]
fn unknown_level_names_are_rejected() {
    let result = serde_json::from_str::<LevelFilter>(r#""loud""#);
    assert!(result.is_err());
    let all: LevelFilter = serde_json::from_str(r#""all""#).expect("alias");
    assert_eq!(all, LevelFilter::Verbose);
}

#[test]
fn level_names_accept_every_spelling_the_parser_does() {
    for (name, expected) in [
        ("WARN", LevelFilter::Warn),
        ("warning", LevelFilter::Warn),
        ("dbg", LevelFilter::Debug),
        ("3", LevelFilter::Info),
        ("Info", LevelFilter::Info),
        (" vrb ", LevelFilter::Verbose),
        ("0", LevelFilter::None),
    ] {
        let json = format!(r#"{{"level":"{name}"}}"#);
        let config: LogConfig = serde_json::from_str(&json).expect(name);
        assert_eq!(config.threshold, expected, "{name}");
        assert_eq!(name.parse::<LevelFilter>(), Ok(expected), "{name}");
    }
}

#[test]
fn color_names_accept_every_spelling_the_parser_does() {
    for (name, expected) in [
        ("yes", ColorMode::Always),
        ("NO", ColorMode::Never),
        ("Auto", ColorMode::Auto),
    ] {
        let json = format!(r#"{{"color":"{name}"}}"#);
        let config: LogConfig = serde_json::from_str(&json).expect(name);
        assert_eq!(config.color, expected, "{name}");
    }
}

#[test]
fn single_levels_deserialize_through_the_parser() {
    let level: Level = serde_json::from_str(r#""ERR""#).expect("alias");
    assert_eq!(level, Level::Error);
    assert!(serde_json::from_str::<Level>(r#""none""#).is_err());
}
