//! Pulsar: neutron star, beam cones, accretion disk, magnetic field arcs
//!
//! Static geometry throughout: the star sphere and two beam cones are single
//! instances, the disk is a seeded point cloud biased toward its inner edge,
//! and the field arcs are Catmull-Rom polylines fanned around Y. The updater
//! only drives the pulse/beam uniforms and rotation rates; positions are
//! never touched after generation.

use std::f32::consts::{PI, TAU};

use glam::{Mat4, Quat, Vec3};

use crate::buffer::{BaseShape, GeometryBuffer, Uniforms};
use crate::color::hsl;
use crate::config::PulsarParams;
use crate::curve::CatmullRom;
use crate::dimension::{Dimension, DimensionKind, FrameUpdate};
use crate::error::GenerateError;
use crate::rng::SeededRng;

use super::{require_count, require_positive};

/// Extra whole-dimension Y spin, rad/s. The star spins fast; it is a pulsar.
const EXTRA_SPIN_RATE: f32 = 1.92;
/// Disk buffer counter-rotation, rad/s.
const DISK_SPIN_RATE: f32 = -0.48;
/// Buffer index of the disk point cloud.
const DISK_BUFFER: usize = 2;
/// Sample divisions per field arc.
const ARC_DIVISIONS: usize = 80;

impl PulsarParams {
    pub fn validate(&self) -> Result<(), GenerateError> {
        require_positive("star_radius", self.star_radius)?;
        require_positive("beam_height", self.beam_height)?;
        require_positive("beam_radius", self.beam_radius)?;
        require_positive("disk_inner", self.disk_inner)?;
        require_positive("disk_outer", self.disk_outer)?;
        if self.disk_inner >= self.disk_outer {
            return Err(GenerateError::invalid(
                "disk_inner",
                format!(
                    "must be less than disk_outer ({} >= {})",
                    self.disk_inner, self.disk_outer
                ),
            ));
        }
        require_count("disk_points", self.disk_points, 1)?;
        require_count("field_arcs", self.field_arcs, 1)?;
        require_positive("padding", self.padding)
    }
}

struct PulsarUpdate;

impl FrameUpdate for PulsarUpdate {
    fn update(
        &mut self,
        elapsed: f64,
        buffers: &mut [GeometryBuffer],
        uniforms: &mut Uniforms,
        rotation: &mut Vec3,
    ) {
        let e = elapsed as f32;
        uniforms.pulse = 1.15 + 0.25 * (2.0 * e).sin();
        uniforms.beam_opacity = 0.45 + 0.2 * (2.0 * e).sin();
        uniforms.time = e;
        rotation.y += EXTRA_SPIN_RATE * e;
        buffers[DISK_BUFFER].rotation.y = DISK_SPIN_RATE * e;
    }
}

pub fn generate(params: &PulsarParams, seed: u32) -> Result<Dimension, GenerateError> {
    params.validate()?;
    let mut rng = SeededRng::new(seed);

    // Star core: one sphere instance.
    let star = GeometryBuffer::instanced_set(
        BaseShape::Sphere,
        vec![Mat4::from_scale(Vec3::splat(params.star_radius))],
        vec![hsl(0.6, 0.5, 0.8)],
    );

    // Beam cones, apexes at the star, opening up and down.
    let beam_scale = Vec3::new(params.beam_radius, params.beam_height, params.beam_radius);
    let beam_color = hsl(0.58, 1.0, 0.83);
    let beams = GeometryBuffer::instanced_set(
        BaseShape::Cone,
        vec![
            Mat4::from_scale(beam_scale),
            Mat4::from_scale_rotation_translation(beam_scale, Quat::from_rotation_x(PI), Vec3::ZERO),
        ],
        vec![beam_color, beam_color],
    );

    // Accretion disk. Draws per point: radius, angle, thickness, hue, size.
    // The 1.4 power bias piles density against the inner edge.
    let mut positions = Vec::with_capacity(params.disk_points);
    let mut colors = Vec::with_capacity(params.disk_points);
    let mut sizes = Vec::with_capacity(params.disk_points);
    for _ in 0..params.disk_points {
        let bias = rng.next().powf(1.4);
        let r = params.disk_inner + (params.disk_outer - params.disk_inner) * bias;
        let angle = rng.next() * TAU;
        positions.push(Vec3::new(
            angle.cos() * r,
            rng.next_centered() * 40.0,
            angle.sin() * r,
        ));
        colors.push(hsl(0.58 + 0.05 * rng.next(), 0.9, 0.58));
        sizes.push(2.8 + 2.5 * rng.next());
    }
    let disk = GeometryBuffer::point_cloud(positions, colors, sizes);

    // Magnetic field arcs: one spline, fanned copies baked into endpoints.
    let curve = CatmullRom::new(vec![
        Vec3::new(0.0, 0.0, params.disk_outer * 1.2),
        Vec3::new(0.0, params.star_radius * 5.0, 0.0),
        Vec3::new(0.0, -params.star_radius * 5.0, 0.0),
        Vec3::new(0.0, 0.0, -params.disk_outer * 1.2),
    ])?;
    let samples = curve.sample_points(ARC_DIVISIONS);

    let endpoint_count = params.field_arcs * ARC_DIVISIONS * 2;
    let mut arc_positions = Vec::with_capacity(endpoint_count);
    let mut arc_colors = Vec::with_capacity(endpoint_count);
    for i in 0..params.field_arcs {
        let offset = i as f32 / params.field_arcs as f32;
        let (sin_rot, cos_rot) = (offset * TAU).sin_cos();
        let spin = |p: Vec3| Vec3::new(p.x * cos_rot + p.z * sin_rot, p.y, -p.x * sin_rot + p.z * cos_rot);
        let color = hsl(0.55 + 0.1 * offset, 1.0, 0.6);
        for pair in samples.windows(2) {
            arc_positions.push(spin(pair[0]));
            arc_positions.push(spin(pair[1]));
            arc_colors.push(color);
            arc_colors.push(color);
        }
    }
    let arcs = GeometryBuffer::line_segments(arc_positions, arc_colors);

    Ok(Dimension::new(
        DimensionKind::Pulsar,
        vec![star, beams, disk, arcs],
        Uniforms::default(),
        Some(Box::new(PulsarUpdate)),
    ))
}
