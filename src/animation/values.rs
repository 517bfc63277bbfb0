use glam::Vec3;

/// A value a segment can move between two endpoints.
pub trait Interpolatable: Copy {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        // Exact endpoints, so a finished segment lands on its target bit-for-bit
        if t >= 1.0 {
            return end;
        }
        start.lerp(end, t)
    }
}
