//! Range checks for loaded tuning values.

use super::data::MovementConfig;

/// A tuning value outside the range the controller can work with.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub value: f32,
    pub requirement: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} = {} but must be {}",
            self.section, self.field, self.value, self.requirement
        )
    }
}

/// Helper macro for checking a value against a predicate
macro_rules! check {
    ($errors:expr, $section:expr, $owner:expr, $field:ident, $requirement:expr, |$v:ident| $ok:expr) => {
        let $v = $owner.$field;
        if !($ok) {
            $errors.push(ValidationError {
                section: $section,
                field: stringify!($field),
                value: $v,
                requirement: $requirement,
            });
        }
    };
}

/// Upper bound for any duration in the tuning file, in seconds.
pub const MAX_DURATION_SECS: f32 = 60.0;

fn is_duration(v: f32) -> bool {
    (0.0..=MAX_DURATION_SECS).contains(&v)
}

/// Validate all tuning ranges.
/// Returns a list of validation errors, empty if every value is usable.
pub fn validate_movement_config(config: &MovementConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let m = &config.movement;
    check!(errors, "movement", m, speed, "> 0", |v| v > 0.0);
    check!(errors, "movement", m, jump_force, "> 0", |v| v > 0.0);
    check!(errors, "movement", m, slide_speed, ">= 0", |v| v >= 0.0);
    check!(errors, "movement", m, wall_jump_lerp, ">= 0", |v| v >= 0.0);
    check!(errors, "movement", m, dash_speed, "> 0", |v| v > 0.0);
    check!(errors, "movement", m, base_gravity, ">= 0", |v| v >= 0.0);
    check!(errors, "movement", m, input_deadzone, "in [0, 1)", |v| (0.0..1.0)
        .contains(&v));
    check!(errors, "movement", m, climb_deadzone, "in [0, 1)", |v| (0.0..1.0)
        .contains(&v));
    check!(errors, "movement", m, climb_up_multiplier, ">= 0", |v| v >= 0.0);
    check!(errors, "movement", m, fall_threshold, "finite", |v| v.is_finite());
    check!(errors, "movement", m, wall_jump_scale, "> 0", |v| v > 0.0);
    check!(errors, "movement", m, wall_jump_disable_time, "in [0, 60]", |v| is_duration(v));
    check!(errors, "movement", m, dash_time, "in [0, 60]", |v| is_duration(v));
    check!(errors, "movement", m, ground_dash_time, "in [0, 60]", |v| is_duration(v));
    check!(errors, "movement", m, dash_drag, ">= 0", |v| v >= 0.0);
    check!(errors, "movement", m, drag_ramp_time, "in [0, 60]", |v| is_duration(v));

    let j = &config.jump_assist;
    check!(errors, "jump_assist", j, fall_multiplier, ">= 1", |v| v >= 1.0);
    check!(errors, "jump_assist", j, low_jump_multiplier, ">= 1", |v| v >= 1.0);

    let i = &config.input;
    check!(errors, "input", i, sensitivity, "> 0", |v| v > 0.0);
    check!(errors, "input", i, gravity, "> 0", |v| v > 0.0);

    let s = &config.camera_shake;
    check!(errors, "camera_shake", s, duration, "in [0, 60]", |v| is_duration(v));
    check!(errors, "camera_shake", s, strength, ">= 0", |v| v >= 0.0);
    check!(errors, "camera_shake", s, vibrato, "in [0, 1000]", |v| (0.0..=1000.0)
        .contains(&v));
    check!(errors, "camera_shake", s, randomness, "in [0, 180]", |v| (0.0..=180.0)
        .contains(&v));

    check!(errors, "world", config, world_gravity, ">= 0", |v| v >= 0.0);

    errors
}
