/// Degrees in a full circle.
pub const FULL_CIRCLE: f64 = 360.0;
/// Degrees in a half circle.
pub const HALF_CIRCLE: f64 = 180.0;

/// Reduces any finite heading to the compass range `[0, 360)`.
///
/// # Arguments
/// - `heading`: A heading in degrees, possibly negative or beyond one turn.
///
/// # Returns
/// - The equivalent heading in `[0, 360)`.
pub fn wrap_heading(heading: f64) -> f64 {
    let wrapped = heading.rem_euclid(FULL_CIRCLE);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= FULL_CIRCLE { 0.0 } else { wrapped }
}

/// Shortest signed angular error from `current` to `desired`.
///
/// Positive values mean the target lies to the right (clockwise) of the current heading.
///
/// # Arguments
/// - `desired`: The selected heading in degrees.
/// - `current`: The current aircraft heading in degrees.
///
/// # Returns
/// - The signed error in `(-180, 180]`.
pub fn heading_error(desired: f64, current: f64) -> f64 {
    let diff = wrap_heading(desired - current + FULL_CIRCLE);
    if diff > HALF_CIRCLE { diff - FULL_CIRCLE } else { diff }
}

/// Moves `value` towards `target` by at most `step`, snapping onto `target` once the
/// remaining distance is below one step.
pub fn step_towards(value: f64, target: f64, step: f64) -> f64 {
    if (value - target).abs() < step {
        target
    } else if value < target {
        value + step
    } else {
        value - step
    }
}

/// Linearly interpolates between `from` and `to`, `t` is clamped to `[0, 1]`.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    let r_t = t.clamp(0.0, 1.0);
    from + (to - from) * r_t
}
