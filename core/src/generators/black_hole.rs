//! Black Hole: nested spiral-flower nebula with fake-4-D breathing
//!
//! Bundles of phase-offset log spirals fanned around Y. Each point carries a
//! synthetic w coordinate whose projective divisor bends the radius inward
//! and outward along the spiral, a cheap visual approximation of a 4-D
//! projection. It is deliberately not the true rotate4/project4to3 pipeline
//! the tesseract uses; the two solve different visual problems. The raw
//! divisor vanishes where sin(1.7*theta) = -1, so it is floored at the same
//! epsilon the true projection uses.
//!
//! The updater recolors the cloud sparsely (stride 20) from a hue basis
//! snapshotted at generation, keeping per-frame cost sub-linear in buffer
//! size and the tick a pure function of elapsed time.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::buffer::{GeometryBuffer, GeometryData, Uniforms};
use crate::color::hsl;
use crate::config::BlackHoleParams;
use crate::dimension::{Dimension, DimensionKind, FrameUpdate};
use crate::error::GenerateError;
use crate::math4::PROJECTION_EPSILON;
use crate::rng::SeededRng;

use super::{require_count, require_positive, require_spiral_bounded};

/// Extra whole-dimension Y spin, rad/s.
const EXTRA_SPIN_RATE: f32 = 0.027;
/// Cloud buffer spin rates, rad/s.
const CLOUD_SPIN_Y: f32 = 0.078;
const CLOUD_SPIN_Z: f32 = 0.036;
/// Recolor stride: one point in twenty per tick keeps the pass cheap.
pub const RECOLOR_STRIDE: usize = 20;
/// Hue cycles per second of elapsed time.
const HUE_RATE: f32 = 0.02;

impl BlackHoleParams {
    pub fn validate(&self) -> Result<(), GenerateError> {
        require_count("bundles", self.bundles, 1)?;
        require_count("spirals_per_bundle", self.spirals_per_bundle, 1)?;
        require_count("points_per_spiral", self.points_per_spiral, 2)?;
        require_positive("max_radius", self.max_radius)?;
        require_positive("radial_k", self.radial_k)?;
        require_positive("wave_height", self.wave_height)?;
        require_spiral_bounded(
            "radial_k",
            1.0,
            self.radial_k as f64,
            12.0 * PI as f64,
            self.max_radius as f64,
        )?;
        require_positive("padding", self.padding)
    }
}

struct BlackHoleUpdate {
    /// Generation-time red channel of every stride-touched point, in touch
    /// order. Recoloring from this basis instead of the live buffer makes
    /// the hue cycle independent of frame history.
    hue_basis: Vec<f32>,
}

impl FrameUpdate for BlackHoleUpdate {
    fn update(
        &mut self,
        elapsed: f64,
        buffers: &mut [GeometryBuffer],
        uniforms: &mut Uniforms,
        rotation: &mut Vec3,
    ) {
        let e = elapsed as f32;
        let hue_shift = (HUE_RATE * e).rem_euclid(1.0);

        let cloud = &mut buffers[0];
        if let GeometryData::PointCloud { colors, .. } = &mut cloud.data {
            for (basis, i) in self
                .hue_basis
                .iter()
                .zip((0..colors.len()).step_by(RECOLOR_STRIDE))
            {
                colors[i] = hsl((basis + hue_shift).rem_euclid(1.0), 1.0, 0.5);
            }
        }
        cloud.mark_colors_dirty();
        cloud.rotation.y = CLOUD_SPIN_Y * e;
        cloud.rotation.z = CLOUD_SPIN_Z * e;

        uniforms.time = e;
        rotation.y += EXTRA_SPIN_RATE * e;
    }
}

pub fn generate(params: &BlackHoleParams, seed: u32) -> Result<Dimension, GenerateError> {
    params.validate()?;
    let mut rng = SeededRng::new(seed);

    let total = params.bundles * params.spirals_per_bundle * params.points_per_spiral;
    let mut positions = Vec::with_capacity(total);
    let mut colors = Vec::with_capacity(total);
    let mut sizes = Vec::with_capacity(total);

    // Normalization puts the spiral's five-turn endpoint at max_radius.
    let r_norm = params.max_radius / (params.radial_k * 10.0 * PI).exp();
    let w_scale = params.max_radius * params.radial_k;

    for b in 0..params.bundles {
        let bundle_angle = b as f32 / params.bundles as f32 * TAU;
        for s in 0..params.spirals_per_bundle {
            // Draws per spiral: twist magnitude, twist sign, base hue.
            let mut twist = 0.6 + 0.4 * rng.next();
            if rng.next() < 0.5 {
                twist = -twist;
            }
            let hue_base = 0.55 + 0.1 * rng.next();
            let phase = s as f32 / params.spirals_per_bundle as f32 * TAU;

            for i in 0..params.points_per_spiral {
                let t = i as f32 / (params.points_per_spiral - 1) as f32;
                let theta = t * 10.0 * PI + phase;
                let r = (params.radial_k * theta).exp() * r_norm;

                // Fake 4-D: synthetic w, floored projective divisor.
                let w = (1.7 * theta).sin() * w_scale;
                let proj = 1.0 / (1.0 + w / w_scale).max(PROJECTION_EPSILON);

                positions.push(Vec3::new(
                    (theta + bundle_angle).cos() * r * proj,
                    (theta * twist).sin() * params.wave_height * (1.0 - t),
                    (theta + bundle_angle).sin() * r * proj,
                ));
                colors.push(hsl(hue_base + 0.2 * t, 1.0, 0.55 + 0.15 * (1.0 - t)));
                sizes.push(10.0 + 8.0 * (1.0 - t));
            }
        }
    }

    let hue_basis = (0..colors.len())
        .step_by(RECOLOR_STRIDE)
        .map(|i| colors[i].x)
        .collect();

    Ok(Dimension::new(
        DimensionKind::BlackHole,
        vec![GeometryBuffer::point_cloud(positions, colors, sizes)],
        Uniforms::default(),
        Some(Box::new(BlackHoleUpdate { hue_basis })),
    ))
}
