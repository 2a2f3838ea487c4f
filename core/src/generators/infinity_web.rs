//! Infinity Web: a batch of figure-eight and Lissajous curves
//!
//! Each curve flips a seeded coin between a polar-rose figure eight
//! (`r = sin(2*theta)`) and a general Lissajous form with random integer
//! frequency ratios, then rides a vertical wave and one fixed random 3-D
//! rotation for the whole curve. Size tapers along parametric progress.

use std::f32::consts::{PI, TAU};

use glam::{EulerRot, Quat, Vec3};

use crate::buffer::{GeometryBuffer, Uniforms};
use crate::color::hsl;
use crate::config::InfinityWebParams;
use crate::dimension::{Dimension, DimensionKind, FrameUpdate};
use crate::error::GenerateError;
use crate::rng::SeededRng;

use super::{require_count, require_positive};

/// Cloud buffer spin rates, rad/s.
const CLOUD_SPIN_Y: f32 = 0.048;
const CLOUD_SPIN_Z: f32 = 0.018;

impl InfinityWebParams {
    pub fn validate(&self) -> Result<(), GenerateError> {
        require_count("curves", self.curves, 1)?;
        require_count("points_per_curve", self.points_per_curve, 2)?;
        require_positive("base_radius", self.base_radius)?;
        require_positive("y_amplitude", self.y_amplitude)?;
        require_positive("size_min", self.size_min)?;
        if !self.size_max.is_finite() || self.size_max < self.size_min {
            return Err(GenerateError::invalid(
                "size_max",
                format!(
                    "must be finite and at least size_min ({} < {})",
                    self.size_max, self.size_min
                ),
            ));
        }
        require_positive("padding", self.padding)
    }
}

struct WebUpdate;

impl FrameUpdate for WebUpdate {
    fn update(
        &mut self,
        elapsed: f64,
        buffers: &mut [GeometryBuffer],
        uniforms: &mut Uniforms,
        _rotation: &mut Vec3,
    ) {
        let e = elapsed as f32;
        buffers[0].rotation.y = CLOUD_SPIN_Y * e;
        buffers[0].rotation.z = CLOUD_SPIN_Z * e;
        uniforms.time = e;
    }
}

pub fn generate(params: &InfinityWebParams, seed: u32) -> Result<Dimension, GenerateError> {
    params.validate()?;
    let mut rng = SeededRng::new(seed);

    let total = params.curves * params.points_per_curve;
    let mut positions = Vec::with_capacity(total);
    let mut colors = Vec::with_capacity(total);
    let mut sizes = Vec::with_capacity(total);

    for _ in 0..params.curves {
        // Draws per curve: form coin, x frequency, (y frequency for
        // Lissajous only), phase, euler xyz. The figure eight locks its y
        // frequency to 2x without consuming a draw.
        let is_eight = rng.next() < 0.6;
        let ax = 1 + (rng.next() * 3.0) as u32;
        let ay = if is_eight {
            2 * ax
        } else {
            1 + (rng.next() * 3.0) as u32
        };
        let phi = rng.next() * TAU;
        let orientation = Quat::from_euler(
            EulerRot::XYZ,
            rng.next() * PI,
            rng.next() * PI,
            rng.next() * PI,
        );

        for i in 0..params.points_per_curve {
            let t = i as f32 / (params.points_per_curve - 1) as f32;
            let theta = TAU * t;

            let (x, z) = if is_eight {
                let r = params.base_radius * (2.0 * theta).sin();
                (r * theta.cos(), r * theta.sin())
            } else {
                (
                    params.base_radius * (ax as f32 * theta + phi).sin(),
                    params.base_radius * (ay as f32 * theta).sin(),
                )
            };
            let y = (2.0 * theta + phi).sin() * params.y_amplitude * (0.3 + 0.7 * t);

            positions.push(orientation * Vec3::new(x, y, z));
            colors.push(hsl(0.78 - 0.05 * t, 1.0, 0.55 + 0.15 * (1.0 - t)));
            sizes.push(params.size_min + (params.size_max - params.size_min) * (1.0 - t));
        }
    }

    Ok(Dimension::new(
        DimensionKind::InfinityWeb,
        vec![GeometryBuffer::point_cloud(positions, colors, sizes)],
        Uniforms::default(),
        Some(Box::new(WebUpdate)),
    ))
}
