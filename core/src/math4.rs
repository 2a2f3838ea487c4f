//! 4-D vector math
//!
//! Paired-plane rotation and perspective projection for four-dimensional
//! geometry. The tesseract is the only consumer of the true 4-D pipeline;
//! other generators that want a "4-D feel" fake it with a scalar divisor and
//! are documented as doing so.

use glam::{Vec3, Vec4};

/// Floor for the perspective divisor, keeping the projection finite when a
/// vertex's w approaches the projection distance.
pub const PROJECTION_EPSILON: f32 = 1e-4;

/// Rotate `v` by `angle1` in the (x, w) plane and `angle2` in the (y, z)
/// plane.
///
/// The two planes share no axis, so the rotations commute and together form
/// a smooth double rotation. Norm-preserving.
#[inline]
pub fn rotate4(v: Vec4, angle1: f32, angle2: f32) -> Vec4 {
    let (s1, c1) = angle1.sin_cos();
    let (s2, c2) = angle2.sin_cos();
    Vec4::new(
        v.x * c1 - v.w * s1,
        v.y * c2 - v.z * s2,
        v.y * s2 + v.z * c2,
        v.x * s1 + v.w * c1,
    )
}

/// Perspective-project a 4-D point to 3-D.
///
/// Divides by `w_distance - v.w`, floored at [`PROJECTION_EPSILON`], then
/// scales. Callers keep `w_distance` clear of every vertex's w (the
/// tesseract oscillates it inside [3, 5] against |w| <= 2) so visible
/// geometry never rides the floor.
#[inline]
pub fn project4to3(v: Vec4, w_distance: f32, scale: f32) -> Vec3 {
    let d = (w_distance - v.w).max(PROJECTION_EPSILON);
    Vec3::new(v.x / d, v.y / d, v.z / d) * scale
}
