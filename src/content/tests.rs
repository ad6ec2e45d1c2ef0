//! Content domain: tests for tuning file parsing and validation.

use super::{MovementConfig, parse_movement_config, validate_movement_config};

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_full_config() {
    let ron = r#"(
        schema_version: 1,
        movement: (
            speed: 8.0,
            jump_force: 40.0,
            dash_speed: 25.0,
        ),
        jump_assist: (
            fall_multiplier: 3.0,
            low_jump_multiplier: 2.5,
        ),
        input: (
            sensitivity: 4.0,
            gravity: 5.0,
            snap: false,
        ),
        camera_shake: (
            duration: 0.25,
            seed: 42,
        ),
        world_gravity: 20.0,
    )"#;

    let config = parse_movement_config(ron, "test.ron").expect("config should parse");

    assert_eq!(config.schema_version, 1);
    assert_eq!(config.movement.speed, 8.0);
    assert_eq!(config.movement.jump_force, 40.0);
    assert_eq!(config.movement.dash_speed, 25.0);
    assert_eq!(config.jump_assist.fall_multiplier, 3.0);
    assert_eq!(config.jump_assist.low_jump_multiplier, 2.5);
    assert_eq!(config.input.sensitivity, 4.0);
    assert!(!config.input.snap);
    assert_eq!(config.camera_shake.duration, 0.25);
    assert_eq!(config.camera_shake.seed, 42);
    assert_eq!(config.world_gravity, 20.0);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let ron = "(movement: (speed: 12.0))";

    let config = parse_movement_config(ron, "partial.ron").expect("config should parse");
    let defaults = MovementConfig::default();

    assert_eq!(config.movement.speed, 12.0);
    assert_eq!(config.movement.jump_force, defaults.movement.jump_force);
    assert_eq!(config.movement.dash_time, defaults.movement.dash_time);
    assert_eq!(
        config.jump_assist.fall_multiplier,
        defaults.jump_assist.fall_multiplier
    );
    assert_eq!(config.world_gravity, defaults.world_gravity);
}

#[test]
fn test_empty_config_is_all_defaults() {
    let config = parse_movement_config("()", "empty.ron").expect("config should parse");
    assert_eq!(config.movement.speed, 10.0);
    assert_eq!(config.movement.jump_force, 50.0);
    assert_eq!(config.movement.base_gravity, 3.0);
    assert_eq!(config.schema_version, 1);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_movement_config("(movement: (speed: ", "broken.ron")
        .expect_err("truncated file should fail");

    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_wrong_value_type_is_rejected() {
    let result = parse_movement_config("(movement: (speed: \"fast\"))", "bad.ron");
    assert!(result.is_err());
}

#[test]
fn test_bundled_config_parses_and_validates() {
    let contents = include_str!("../../assets/data/movement.ron");
    let config = parse_movement_config(contents, "movement.ron").expect("bundled file parses");
    assert!(validate_movement_config(&config).is_empty());
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_config_is_valid() {
    assert!(validate_movement_config(&MovementConfig::default()).is_empty());
}

#[test]
fn test_validation_reports_each_bad_field() {
    let mut config = MovementConfig::default();
    config.movement.speed = 0.0;
    config.movement.input_deadzone = 1.5;
    config.jump_assist.fall_multiplier = 0.5;

    let errors = validate_movement_config(&config);

    assert_eq!(errors.len(), 3);
    assert!(errors.iter().any(|e| e.section == "movement" && e.field == "speed"));
    assert!(
        errors
            .iter()
            .any(|e| e.section == "movement" && e.field == "input_deadzone")
    );
    assert!(
        errors
            .iter()
            .any(|e| e.section == "jump_assist" && e.field == "fall_multiplier")
    );
}

#[test]
fn test_validation_rejects_nan() {
    let mut config = MovementConfig::default();
    config.movement.dash_speed = f32::NAN;

    let errors = validate_movement_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "dash_speed");
}

#[test]
fn test_validation_rejects_unbounded_durations() {
    let mut config = MovementConfig::default();
    config.movement.dash_time = f32::INFINITY;
    config.movement.ground_dash_time = f32::NAN;
    config.movement.wall_jump_disable_time = 1e30;
    config.movement.drag_ramp_time = -0.5;
    config.camera_shake.duration = f32::INFINITY;

    let errors = validate_movement_config(&config);

    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        [
            "wall_jump_disable_time",
            "dash_time",
            "ground_dash_time",
            "drag_ramp_time",
            "duration",
        ]
    );
}

#[test]
fn test_parsed_infinite_dash_time_fails_validation() {
    let config = parse_movement_config("(movement: (dash_time: inf))", "inf.ron")
        .expect("ron accepts inf");
    assert!(config.movement.dash_time.is_infinite());

    let errors = validate_movement_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "movement.dash_time = inf but must be in [0, 60]"
    );
}

#[test]
fn test_validation_rejects_nan_fall_threshold() {
    let mut config = MovementConfig::default();
    config.movement.fall_threshold = f32::NAN;

    let errors = validate_movement_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "fall_threshold");
}

#[test]
fn test_validation_error_display() {
    let mut config = MovementConfig::default();
    config.world_gravity = -1.0;

    let errors = validate_movement_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "world.world_gravity = -1 but must be >= 0"
    );
}

// -----------------------------------------------------------------------------
// Derived values
// -----------------------------------------------------------------------------

#[test]
fn test_jump_height_uses_scaled_gravity() {
    let config = MovementConfig::default();
    // 50^2 / (2 * 9.81 * 3)
    let height = config.movement.jump_height(config.world_gravity);
    assert!((height - 2500.0 / 58.86).abs() < 1e-3);
}

#[test]
fn test_jump_height_without_gravity_is_unbounded() {
    let config = MovementConfig::default();
    assert!(config.movement.jump_height(0.0).is_infinite());
}
