//! Ring of Chaos: instanced shape clusters on a jittered ring
//!
//! K cluster centers at evenly spaced ring angles plus seeded jitter; each
//! cluster scatters its objects with seeded position, scale, orientation, and
//! an HSL offset from the cluster's base color. The base shape round-robins
//! over cube/icosahedron/torus by RNG draw, so the three instanced buffers
//! split the total count however the seed deals them.

use std::f32::consts::TAU;

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::buffer::{BaseShape, GeometryBuffer, Uniforms};
use crate::color::{hsl, offset_hsl};
use crate::config::RingOfChaosParams;
use crate::dimension::{Dimension, DimensionKind};
use crate::error::GenerateError;
use crate::rng::SeededRng;

use super::{require_count, require_positive};

const SHAPES: [BaseShape; 3] = [BaseShape::Cube, BaseShape::Icosahedron, BaseShape::Torus];

impl RingOfChaosParams {
    pub fn validate(&self) -> Result<(), GenerateError> {
        require_count("clusters", self.clusters, 1)?;
        require_count("objects_per_cluster", self.objects_per_cluster, 1)?;
        require_positive("ring_radius", self.ring_radius)?;
        require_positive("cluster_spread", self.cluster_spread)?;
        require_positive("padding", self.padding)
    }
}

pub fn generate(params: &RingOfChaosParams, seed: u32) -> Result<Dimension, GenerateError> {
    params.validate()?;
    let mut rng = SeededRng::new(seed);

    let total = params.clusters * params.objects_per_cluster;
    let per_shape = total / SHAPES.len() + 1;
    let mut transforms: [Vec<Mat4>; 3] = std::array::from_fn(|_| Vec::with_capacity(per_shape));
    let mut colors: [Vec<Vec3>; 3] = std::array::from_fn(|_| Vec::with_capacity(per_shape));

    for c in 0..params.clusters {
        // Draw order per cluster: angle jitter, radius, height, saturation,
        // lightness. Reordering changes every seeded scene.
        let angle = c as f32 / params.clusters as f32 * TAU + rng.next_centered() * 0.2;
        let radius = params.ring_radius + rng.next_centered() * params.cluster_spread;
        let center = Vec3::new(
            angle.cos() * radius,
            rng.next_centered() * params.cluster_spread * 0.4,
            angle.sin() * radius,
        );
        let base_color = hsl(
            c as f32 / params.clusters as f32,
            0.7 + 0.3 * rng.next(),
            0.55 + 0.25 * rng.next(),
        );

        for _ in 0..params.objects_per_cluster {
            // Per object: shape, position xyz, scale, euler xyz, hsl offsets.
            let shape = ((rng.next() * SHAPES.len() as f32) as usize).min(SHAPES.len() - 1);
            let position = center
                + Vec3::new(rng.next_centered(), rng.next_centered(), rng.next_centered())
                    * params.cluster_spread;
            let scale = 8.0 + rng.next() * 140.0;
            let orientation = Quat::from_euler(
                EulerRot::XYZ,
                rng.next() * TAU,
                rng.next() * TAU,
                rng.next() * TAU,
            );
            let color = offset_hsl(
                base_color,
                rng.next_centered() * 0.05,
                rng.next_centered() * 0.12,
                rng.next_centered() * 0.12,
            );

            transforms[shape].push(Mat4::from_scale_rotation_translation(
                Vec3::splat(scale),
                orientation,
                position,
            ));
            colors[shape].push(color);
        }
    }

    let buffers = SHAPES
        .iter()
        .zip(transforms.into_iter().zip(colors))
        .map(|(&shape, (t, c))| GeometryBuffer::instanced_set(shape, t, c))
        .collect();

    Ok(Dimension::new(
        DimensionKind::RingOfChaos,
        buffers,
        Uniforms::default(),
        None,
    ))
}
