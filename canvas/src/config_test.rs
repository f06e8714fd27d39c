#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{MAX_STARS, MAX_TRAIL_POINTS};

#[test]
fn defaults_match_landing_page() {
    let config = HeroConfig::default();
    assert_eq!(config.text, "ECHOSIGHT");
    assert_eq!(config.font_weight, 800);
    assert_eq!(config.gap, 5.0);
    assert_eq!(config.dot_size, [1.2, 2.2]);
    assert_eq!(config.spring, 0.12);
    assert_eq!(config.friction, 0.85);
    assert_eq!(config.mouse, ForceZone { radius: 110.0, strength: 18.0 });
    assert_eq!(config.burst, ForceZone { radius: 140.0, strength: 28.0 });
    assert_eq!(config.dpr_limit, 2.0);
    assert_eq!(config.colors.main.hex(), "#6cc7d8");
    assert_eq!(config.colors.o.hex(), "#e6e6e6");
}

#[test]
fn defaults_validate() {
    assert!(HeroConfig::default().validate().is_ok());
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = HeroConfig::from_json(r#"{ "text": "ECHO", "gap": 3 }"#).unwrap();
    assert_eq!(config.text, "ECHO");
    assert_eq!(config.gap, 3.0);
    assert_eq!(config.friction, 0.85);
    assert_eq!(config.colors, Palette::default());
}

#[test]
fn from_json_reads_camel_case_fields() {
    let raw = r##"{
        "fontWeight": 600,
        "letterSpacing": 4,
        "dotSize": [1, 3],
        "dprLimit": 3,
        "colors": { "main": "#fff", "o": "#000000" },
        "mouse": { "radius": 50, "strength": 5 }
    }"##;
    let config = HeroConfig::from_json(raw).unwrap();
    assert_eq!(config.font_weight, 600);
    assert_eq!(config.letter_spacing, 4.0);
    assert_eq!(config.dot_size, [1.0, 3.0]);
    assert_eq!(config.dpr_limit, 3.0);
    assert_eq!(config.colors.main, Rgb::new(255, 255, 255));
    assert_eq!(config.colors.o, Rgb::BLACK);
    assert_eq!(config.mouse.radius, 50.0);
}

#[test]
fn default_config_survives_json_round_trip() {
    let json = serde_json::to_string(&HeroConfig::default()).unwrap();
    assert!(json.contains("\"dprLimit\""));
    let back = HeroConfig::from_json(&json).unwrap();
    assert_eq!(back, HeroConfig::default());
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = HeroConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn from_json_rejects_bad_color() {
    let err = HeroConfig::from_json(r##"{ "colors": { "main": "teal", "o": "#fff" } }"##).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().contains("teal"));
}

#[test]
fn validate_rejects_friction_outside_unit_interval() {
    for friction in [0.0, 1.0, 1.5, -0.2] {
        let config = HeroConfig { friction, ..HeroConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Friction(_))), "friction {friction}");
    }
}

#[test]
fn validate_rejects_inverted_dot_size() {
    let config = HeroConfig { dot_size: [3.0, 1.0], ..HeroConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::DotSize { .. })));
}

#[test]
fn validate_accepts_fixed_dot_size() {
    let config = HeroConfig { dot_size: [2.0, 2.0], ..HeroConfig::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn validate_rejects_non_positive_gap() {
    let config = HeroConfig { gap: 0.0, ..HeroConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::Gap(_))));
}

#[test]
fn validate_rejects_dpr_limit_below_one() {
    let config = HeroConfig { dpr_limit: 0.5, ..HeroConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::DprLimit(_))));
}

#[test]
fn validate_rejects_negative_radius() {
    let config = HeroConfig { burst: ForceZone { radius: -1.0, strength: 1.0 }, ..HeroConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::Negative { field: "burst.radius", .. })));
}

#[test]
fn validate_rejects_non_finite_numbers() {
    let config = HeroConfig { spring: f64::NAN, ..HeroConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::NotFinite { field: "spring" })));
}

#[test]
fn accent_applies_only_to_final_o() {
    assert!(HeroConfig::is_accent(3, 4, 'O'));
    assert!(HeroConfig::is_accent(3, 4, 'o'));
    assert!(!HeroConfig::is_accent(2, 4, 'O'));
    assert!(!HeroConfig::is_accent(8, 9, 'T'));
}

#[test]
fn star_and_trail_defaults() {
    let stars = StarFieldConfig::default();
    assert_eq!(stars.count, 150);
    assert_eq!(stars.color.hex(), "#60a5fa");

    let trail = TrailConfig::default();
    assert_eq!(trail.max_points, 12);
    assert_eq!(trail.decay, 0.02);
    assert_eq!(trail.shrink, 0.98);
}

#[test]
fn trail_config_reads_camel_case() {
    let trail: TrailConfig = serde_json::from_str(r#"{ "maxPoints": 4 }"#).unwrap();
    assert_eq!(trail.max_points, 4);
    assert_eq!(trail.glow, 8.0);
}

#[test]
fn star_and_trail_defaults_validate() {
    assert!(StarFieldConfig::default().validate().is_ok());
    assert!(TrailConfig::default().validate().is_ok());
}

#[test]
fn star_count_is_capped() {
    let stars = StarFieldConfig { count: MAX_STARS + 1, ..StarFieldConfig::default() };
    assert!(matches!(stars.validate(), Err(ConfigError::TooMany { field: "stars.count", .. })));
    let stars = StarFieldConfig { count: MAX_STARS, ..StarFieldConfig::default() };
    assert!(stars.validate().is_ok());
}

#[test]
fn star_glow_must_be_finite_and_non_negative() {
    let stars = StarFieldConfig { glow: -1.0, ..StarFieldConfig::default() };
    assert!(matches!(stars.validate(), Err(ConfigError::Negative { field: "stars.glow", .. })));
    let stars = StarFieldConfig { glow: f64::NAN, ..StarFieldConfig::default() };
    assert!(matches!(stars.validate(), Err(ConfigError::NotFinite { field: "stars.glow" })));
}

#[test]
fn trail_length_is_capped() {
    let trail: TrailConfig = serde_json::from_str(r#"{ "maxPoints": 18446744073709551615 }"#).unwrap();
    assert!(matches!(trail.validate(), Err(ConfigError::TooMany { field: "trail.maxPoints", .. })));
    let trail = TrailConfig { max_points: MAX_TRAIL_POINTS, ..TrailConfig::default() };
    assert!(trail.validate().is_ok());
}

#[test]
fn trail_decay_must_let_points_expire() {
    for decay in [0.0, -0.5, 1.5] {
        let trail = TrailConfig { decay, ..TrailConfig::default() };
        assert!(
            matches!(trail.validate(), Err(ConfigError::UnitInterval { field: "trail.decay", .. })),
            "decay {decay}"
        );
    }
    let trail = TrailConfig { decay: 1.0, ..TrailConfig::default() };
    assert!(trail.validate().is_ok());
}

#[test]
fn trail_shrink_must_not_grow_points() {
    for shrink in [0.0, 1.01] {
        let trail = TrailConfig { shrink, ..TrailConfig::default() };
        assert!(
            matches!(trail.validate(), Err(ConfigError::UnitInterval { field: "trail.shrink", .. })),
            "shrink {shrink}"
        );
    }
    let trail = TrailConfig { shrink: f64::INFINITY, ..TrailConfig::default() };
    assert!(matches!(trail.validate(), Err(ConfigError::NotFinite { field: "trail.shrink" })));
}

#[test]
fn trail_glow_must_be_non_negative() {
    let trail = TrailConfig { glow: -2.0, ..TrailConfig::default() };
    assert!(matches!(trail.validate(), Err(ConfigError::Negative { field: "trail.glow", .. })));
}
