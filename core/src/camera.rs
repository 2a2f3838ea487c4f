//! Camera framing
//!
//! Bounding-box fit: derive a camera distance from a structure's extent and
//! the vertical field of view so any generated scene fills the frame,
//! whether it spans hundreds of units or tens of thousands. The viewing axis
//! is fixed +Z; orbiting afterwards is the host's business.

use glam::Vec3;

use crate::bounds::Aabb;
use crate::error::GenerateError;

/// Distance floor for degenerate (zero-volume or empty) bounding boxes.
pub const MIN_FIT_DISTANCE: f32 = 1.0;

/// A camera position plus the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    /// Distance from the camera to its target.
    pub fn distance(&self) -> f32 {
        (self.position - self.look_at).length()
    }
}

/// Frame `bounds` for a camera with vertical fov `fov_y` (radians) and a
/// padding factor (1.0 = extent exactly fills the frustum height).
///
/// The pose sits at `center + distance * +Z`, looking at the box center,
/// with `distance = (max_extent / 2) / tan(fov / 2) * padding`, floored at
/// [`MIN_FIT_DISTANCE`] so a degenerate box still yields a usable pose.
pub fn fit_view(bounds: &Aabb, fov_y: f32, padding: f32) -> Result<CameraPose, GenerateError> {
    if !fov_y.is_finite() || fov_y <= 0.0 || fov_y >= std::f32::consts::PI {
        return Err(GenerateError::invalid(
            "fov_y",
            format!("must be a finite angle in (0, pi) radians, got {fov_y}"),
        ));
    }
    if !padding.is_finite() || padding <= 0.0 {
        return Err(GenerateError::invalid(
            "padding",
            format!("must be finite and positive, got {padding}"),
        ));
    }

    let center = bounds.center();
    let half_extent = bounds.max_extent() * 0.5;
    let distance = (half_extent / (fov_y * 0.5).tan() * padding).max(MIN_FIT_DISTANCE);

    Ok(CameraPose {
        position: center + Vec3::new(0.0, 0.0, distance),
        look_at: center,
    })
}
