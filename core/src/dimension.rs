//! Active dimension structures
//!
//! A `Dimension` is one generated scene: its geometry buffers, bounding box,
//! shader uniforms, rotation state, and the optional per-frame updater that
//! animates it. Updaters receive elapsed time as an argument and recompute
//! state as an absolute function of it, so ticking twice at the same time is
//! idempotent and any frame is reproducible in isolation.

use glam::Vec3;

use crate::bounds::Aabb;
use crate::buffer::{GeometryBuffer, Uniforms};
use crate::camera::CameraPose;

/// Whole-structure Y spin applied to every active dimension (and the
/// starfield backdrop), radians per second.
pub const BASE_SPIN_RATE: f32 = 0.0054;

/// The six generatable dimension kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionKind {
    RingOfChaos,
    StellarVortex,
    Tesseract,
    Pulsar,
    BlackHole,
    InfinityWeb,
}

impl DimensionKind {
    pub const ALL: [DimensionKind; 6] = [
        DimensionKind::RingOfChaos,
        DimensionKind::StellarVortex,
        DimensionKind::Tesseract,
        DimensionKind::Pulsar,
        DimensionKind::BlackHole,
        DimensionKind::InfinityWeb,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::RingOfChaos => "ring_of_chaos",
            Self::StellarVortex => "stellar_vortex",
            Self::Tesseract => "tesseract",
            Self::Pulsar => "pulsar",
            Self::BlackHole => "black_hole",
            Self::InfinityWeb => "infinity_web",
        }
    }
}

/// Per-frame update hook attached to a dimension by its generator.
///
/// Implementations hold copied constants and buffer indices only, never
/// references into the dimension; mutation rights are explicit in the
/// `update` signature. `rotation` arrives with the base spin already applied
/// for this tick; updaters with an extra whole-structure rate add to it.
pub trait FrameUpdate: Send {
    fn update(
        &mut self,
        elapsed: f64,
        buffers: &mut [GeometryBuffer],
        uniforms: &mut Uniforms,
        rotation: &mut Vec3,
    );
}

/// One generated structure, alive until cleared or replaced.
pub struct Dimension {
    pub kind: DimensionKind,
    pub buffers: Vec<GeometryBuffer>,
    pub bounds: Aabb,
    /// Whole-structure Euler rotation, recomputed every tick.
    pub rotation: Vec3,
    /// Base Y spin in rad/s; see [`BASE_SPIN_RATE`].
    pub spin_rate: f32,
    pub uniforms: Uniforms,
    /// Camera pose framing this structure, filled in by the controller.
    pub initial_view: Option<CameraPose>,
    updater: Option<Box<dyn FrameUpdate>>,
}

impl Dimension {
    /// Assemble a dimension from generator output. Bounds are computed from
    /// the buffers' generation-time state.
    pub fn new(
        kind: DimensionKind,
        buffers: Vec<GeometryBuffer>,
        uniforms: Uniforms,
        updater: Option<Box<dyn FrameUpdate>>,
    ) -> Self {
        let mut bounds = Aabb::EMPTY;
        for buffer in &buffers {
            buffer.grow_bounds(&mut bounds);
        }
        Self {
            kind,
            buffers,
            bounds,
            rotation: Vec3::ZERO,
            spin_rate: BASE_SPIN_RATE,
            uniforms,
            initial_view: None,
            updater,
        }
    }

    /// Advance to `elapsed` seconds: apply the base spin, then the updater.
    pub fn tick(&mut self, elapsed: f64) {
        self.rotation.y = self.spin_rate * elapsed as f32;
        if let Some(mut updater) = self.updater.take() {
            updater.update(
                elapsed,
                &mut self.buffers,
                &mut self.uniforms,
                &mut self.rotation,
            );
            self.updater = Some(updater);
        }
    }

    pub fn has_updater(&self) -> bool {
        self.updater.is_some()
    }

    /// Total element count across buffers (points, instances, endpoints).
    pub fn element_count(&self) -> usize {
        self.buffers.iter().map(|b| b.element_count()).sum()
    }
}

impl std::fmt::Debug for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dimension")
            .field("kind", &self.kind)
            .field("buffers", &self.buffers.len())
            .field("elements", &self.element_count())
            .field("bounds", &self.bounds)
            .field("has_updater", &self.has_updater())
            .finish()
    }
}
