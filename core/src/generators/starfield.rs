//! Starfield backdrop
//!
//! A persistent shell of background stars, uniform over the ball via the
//! cube-root radius and `acos(2v - 1)` polar draws. It lives outside the
//! dimension lifecycle: the host keeps one across every generate/clear and
//! spins it at the base rate itself.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::bounds::Aabb;
use crate::buffer::GeometryBuffer;
use crate::color::hsl;
use crate::config::StarfieldParams;
use crate::dimension::BASE_SPIN_RATE;
use crate::error::GenerateError;
use crate::rng::SeededRng;

use super::{require_count, require_positive};

const STAR_SIZE: f32 = 2.5;

impl StarfieldParams {
    pub fn validate(&self) -> Result<(), GenerateError> {
        require_count("count", self.count, 1)?;
        require_positive("radius", self.radius)
    }
}

/// The backdrop shell: one point cloud and its own slow spin.
#[derive(Debug)]
pub struct Starfield {
    pub buffer: GeometryBuffer,
    pub spin_rate: f32,
}

impl Starfield {
    /// Advance the shell's spin to `elapsed` seconds.
    pub fn tick(&mut self, elapsed: f64) {
        self.buffer.rotation.y = self.spin_rate * elapsed as f32;
    }

    pub fn bounds(&self) -> Aabb {
        let mut bounds = Aabb::EMPTY;
        self.buffer.grow_bounds(&mut bounds);
        bounds
    }
}

pub fn generate(params: &StarfieldParams, seed: u32) -> Result<Starfield, GenerateError> {
    params.validate()?;
    let mut rng = SeededRng::new(seed);

    let mut positions = Vec::with_capacity(params.count);
    let mut colors = Vec::with_capacity(params.count);

    // Draws per star: radius, theta, phi, hue, lightness.
    for _ in 0..params.count {
        let r = params.radius * rng.next().cbrt();
        let theta = TAU * rng.next();
        let phi = (2.0 * rng.next() - 1.0).acos();
        positions.push(Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        ));
        colors.push(hsl(0.55 + 0.1 * rng.next(), 0.6, 0.6 + 0.4 * rng.next()));
    }
    let sizes = vec![STAR_SIZE; params.count];

    Ok(Starfield {
        buffer: GeometryBuffer::point_cloud(positions, colors, sizes),
        spin_rate: BASE_SPIN_RATE,
    })
}
