//! Scalar helpers used by the collision code

/// Absolute value
pub fn abs(value: f32) -> f32 {
    if value < 0.0 {
        -value
    } else {
        value
    }
}

/// Return whichever argument has the smaller magnitude (ties keep `a`)
pub fn min_abs(a: f32, b: f32) -> f32 {
    if abs(b) < abs(a) {
        b
    } else {
        a
    }
}

/// Constrain `value` to `[-max, max]`
pub fn clamp_symmetric(value: f32, max: f32) -> f32 {
    if value >= max {
        max
    } else if value <= -max {
        -max
    } else {
        value
    }
}
