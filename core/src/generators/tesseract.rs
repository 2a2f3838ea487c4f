//! Tesseract: 4-cube wireframe, re-projected every frame
//!
//! The only dimension on the true 4-D pipeline. Generation writes the t = 0
//! projection and the static per-edge hue ramp; every tick double-rotates all
//! 16 vertices, projects them with a time-oscillating w-distance, and
//! rewrites the whole endpoint buffer. The oscillation band keeps the
//! perspective divisor well clear of the epsilon floor.

use glam::Vec3;

use crate::buffer::{GeometryBuffer, GeometryData, Uniforms};
use crate::color::hsl;
use crate::config::TesseractParams;
use crate::dimension::{Dimension, DimensionKind, FrameUpdate};
use crate::error::GenerateError;
use crate::hypercube::{EDGE_COUNT, HypercubeGraph};
use crate::math4::{PROJECTION_EPSILON, project4to3, rotate4};

use super::require_positive;

/// Wireframe buffer Y spin, rad/s (buffer rotation, on top of the base spin).
const WIRE_SPIN_RATE: f32 = 0.072;

impl TesseractParams {
    pub fn validate(&self) -> Result<(), GenerateError> {
        require_positive("projection_scale", self.projection_scale)?;
        require_positive("w_amplitude", self.w_amplitude)?;
        if !self.w_midpoint.is_finite()
            || self.w_midpoint - self.w_amplitude <= 1.0 + PROJECTION_EPSILON
        {
            return Err(GenerateError::invalid(
                "w_midpoint",
                format!(
                    "w_midpoint - w_amplitude must exceed the vertex |w| of 1 \
                     (got {} - {})",
                    self.w_midpoint, self.w_amplitude
                ),
            ));
        }
        require_positive("padding", self.padding)
    }
}

struct TesseractUpdate {
    graph: HypercubeGraph,
    scale: f32,
    w_midpoint: f32,
    w_amplitude: f32,
}

impl TesseractUpdate {
    /// Write the projection at animation time `t` into `positions`.
    fn project_at(&self, t: f32, positions: &mut [Vec3]) {
        let w_distance = self.w_midpoint + (0.8 * t).sin() * self.w_amplitude;
        for (idx, &(a, b)) in self.graph.edges().iter().enumerate() {
            for (slot, vert) in [(2 * idx, a), (2 * idx + 1, b)] {
                let rotated = rotate4(self.graph.vertices()[vert], t, 0.6 * t);
                positions[slot] = project4to3(rotated, w_distance, self.scale);
            }
        }
    }
}

impl FrameUpdate for TesseractUpdate {
    fn update(
        &mut self,
        elapsed: f64,
        buffers: &mut [GeometryBuffer],
        _uniforms: &mut Uniforms,
        _rotation: &mut Vec3,
    ) {
        let t = 0.4 * elapsed as f32;
        let wire = &mut buffers[0];
        if let GeometryData::LineSegments { positions, .. } = &mut wire.data {
            self.project_at(t, positions);
        }
        wire.mark_positions_dirty();
        wire.rotation.y = WIRE_SPIN_RATE * elapsed as f32;
    }
}

pub fn generate(params: &TesseractParams, _seed: u32) -> Result<Dimension, GenerateError> {
    params.validate()?;
    let graph = HypercubeGraph::new();

    let updater = TesseractUpdate {
        graph,
        scale: params.projection_scale,
        w_midpoint: params.w_midpoint,
        w_amplitude: params.w_amplitude,
    };

    let mut positions = vec![Vec3::ZERO; 2 * EDGE_COUNT];
    updater.project_at(0.0, &mut positions);

    let mut colors = Vec::with_capacity(2 * EDGE_COUNT);
    for idx in 0..EDGE_COUNT {
        let color = hsl(idx as f32 / EDGE_COUNT as f32, 1.0, 0.58);
        colors.push(color);
        colors.push(color);
    }

    Ok(Dimension::new(
        DimensionKind::Tesseract,
        vec![GeometryBuffer::line_segments(positions, colors)],
        Uniforms::default(),
        Some(Box::new(updater)),
    ))
}
