//! Stellar Vortex: logarithmic-spiral galaxy with an atom core
//!
//! Arms follow `r = a * e^(b*theta)` over five turns, phase-offset by pi per
//! arm, with seeded vertical wave and positional noise. A secondary family of
//! rotated tight spirals forms the dense core. Hue runs continuously along
//! each arm's parametric progress.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::buffer::{GeometryBuffer, Uniforms};
use crate::color::hsl;
use crate::config::StellarVortexParams;
use crate::dimension::{Dimension, DimensionKind, FrameUpdate};
use crate::error::GenerateError;
use crate::rng::SeededRng;

use super::{require_count, require_positive, require_spiral_bounded};

/// Extra whole-dimension Y spin on top of the base rate, rad/s.
const EXTRA_SPIN_RATE: f32 = 0.021;

impl StellarVortexParams {
    pub fn validate(&self) -> Result<(), GenerateError> {
        require_count("arms", self.arms, 1)?;
        require_count("points_per_arm", self.points_per_arm, 1)?;
        require_count("core_spirals", self.core_spirals, 1)?;
        require_count("points_per_core_spiral", self.points_per_core_spiral, 1)?;
        require_positive("galaxy_scale", self.galaxy_scale)?;
        require_positive("core_scale", self.core_scale)?;
        require_positive("spiral_a", self.spiral_a)?;
        if !self.spiral_b.is_finite() {
            return Err(GenerateError::invalid(
                "spiral_b",
                format!("must be finite, got {}", self.spiral_b),
            ));
        }
        require_spiral_bounded(
            "spiral_b",
            self.spiral_a as f64,
            self.spiral_b as f64,
            (10.0 + self.arms as f64) * PI as f64,
            self.galaxy_scale as f64,
        )?;
        require_positive("padding", self.padding)
    }
}

struct VortexUpdate;

impl FrameUpdate for VortexUpdate {
    fn update(
        &mut self,
        elapsed: f64,
        _buffers: &mut [GeometryBuffer],
        uniforms: &mut Uniforms,
        rotation: &mut Vec3,
    ) {
        rotation.y += EXTRA_SPIN_RATE * elapsed as f32;
        uniforms.time = elapsed as f32;
    }
}

pub fn generate(params: &StellarVortexParams, seed: u32) -> Result<Dimension, GenerateError> {
    params.validate()?;
    let mut rng = SeededRng::new(seed);

    let total = params.arms * params.points_per_arm
        + params.core_spirals * params.points_per_core_spiral;
    let mut positions = Vec::with_capacity(total);
    let mut colors = Vec::with_capacity(total);
    let mut sizes = Vec::with_capacity(total);

    // Arm pass. Draws per point: wave amplitude, noise x/y/z, two size terms.
    for arm in 0..params.arms {
        let phase = arm as f32 * PI;
        for i in 0..params.points_per_arm {
            let t = i as f32 / params.points_per_arm as f32;
            let theta = t * 10.0 * PI + phase;
            let r = params.spiral_a * (params.spiral_b * theta).exp();

            let mut x = theta.cos() * r * params.galaxy_scale;
            let mut z = theta.sin() * r * params.galaxy_scale;
            let mut y = (1.8 * theta).sin() * 800.0 * rng.next();
            x += rng.next_centered() * 110.0;
            y += rng.next_centered() * 80.0;
            z += rng.next_centered() * 110.0;

            positions.push(Vec3::new(x, y, z));
            colors.push(hsl(0.58 + 0.25 * t, 1.0, 0.55 + 0.1 * t));
            sizes.push(3.5 + 3.5 * rng.next() * (1.0 - t) + 1.5 * rng.next());
        }
    }

    // Core pass: tight spirals fanned around Y.
    for s in 0..params.core_spirals {
        let rot = s as f32 * TAU / params.core_spirals as f32;
        let (sin_rot, cos_rot) = rot.sin_cos();
        for i in 0..params.points_per_core_spiral {
            let t = i as f32 / params.points_per_core_spiral as f32;
            let theta = t * 6.0 * PI;
            let r = t * params.core_scale;

            let x = theta.cos() * r;
            let z = theta.sin() * r;
            let y = rng.next_centered() * 80.0;

            positions.push(Vec3::new(
                x * cos_rot - z * sin_rot,
                y,
                x * sin_rot + z * cos_rot,
            ));
            colors.push(hsl(
                s as f32 / params.core_spirals as f32 + 0.05 * (6.0 * t).sin(),
                0.85,
                0.65,
            ));
            sizes.push(6.0 + 8.0 * (1.0 - t) + 2.0 * rng.next());
        }
    }

    Ok(Dimension::new(
        DimensionKind::StellarVortex,
        vec![GeometryBuffer::point_cloud(positions, colors, sizes)],
        Uniforms::default(),
        Some(Box::new(VortexUpdate)),
    ))
}
