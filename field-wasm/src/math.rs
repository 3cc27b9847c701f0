use crate::EPSILON;

pub fn length_2d(x: f32, y: f32) -> f32 {
    (x * x + y * y).sqrt()
}

pub fn rotate_about_y(x: f32, z: f32, sin: f32, cos: f32) -> (f32, f32) {
    (x * cos - z * sin, x * sin + z * cos)
}

pub fn damp_towards(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

pub fn shell_point(theta: f32, phi: f32, r: f32) -> (f32, f32, f32) {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    (
        r * sin_theta * cos_phi,
        r * sin_theta * sin_phi,
        r * cos_theta,
    )
}

pub fn clamp_finite(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if !value.is_finite() {
        return fallback;
    }
    value.clamp(min, max)
}

pub fn nearly_zero(value: f32) -> bool {
    value.abs() <= EPSILON
}
