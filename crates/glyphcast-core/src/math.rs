use glam::{Vec2, Vec3};

/// Lengths below this normalize to the zero vector.
pub const NORMALIZE_EPSILON: f32 = 0.0001;

/// Clamp `value` into `[min, max]`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite interpolation of `x` between two edges, 0 below `edge0` and 1 above `edge1`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Normalize, returning zero for near-zero vectors instead of NaN.
pub fn safe_normalize(v: Vec3) -> Vec3 {
    let length = v.length();
    if length < NORMALIZE_EPSILON {
        Vec3::ZERO
    } else {
        v / length
    }
}

/// Unit direction for a pitch (elevation) and yaw (heading), Z-up.
pub fn direction_from_angles(pitch: f32, yaw: f32) -> Vec3 {
    Vec3::new(
        pitch.cos() * yaw.cos(),
        pitch.cos() * yaw.sin(),
        pitch.sin(),
    )
}

/// Rotate a 2D vector counter-clockwise by `angle` radians.
pub fn rotate_2d(v: Vec2, angle: f32) -> Vec2 {
    let (sn, cs) = angle.sin_cos();
    Vec2::new(v.x * cs - v.y * sn, v.x * sn + v.y * cs)
}

/// Linear interpolation with `t` saturated to the endpoints.
pub fn lerp_clamped(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    if t <= 0.0 {
        a
    } else if t >= 1.0 {
        b
    } else {
        a + (b - a) * t
    }
}
