//! Voidscape core - procedural dimension generation and scene lifecycle
//!
//! Generates large parametric 3-D structures ("dimensions": a shape-cluster
//! ring, a spiral galaxy, a projected tesseract, a pulsar, a black-hole
//! nebula, a Lissajous web) from seeded parameters, and drives their
//! swap-in/swap-out lifecycle with per-frame updates. Rendering, windowing,
//! input, and audio are out of scope: the crate hands plain buffers to an
//! external renderer and expects only an elapsed-time value back each frame.
//!
//! # Architecture
//!
//! - [`SeededRng`] - deterministic Mulberry32 stream; a seed is a scene.
//! - [`generators`] - one pure function per dimension kind.
//! - [`GeometryBuffer`] - point clouds, instanced sets, line segments, with
//!   per-buffer dirty flags for renderer re-upload.
//! - [`DimensionController`] - the `Empty`/`Active` lifecycle state machine,
//!   teardown-before-construct.
//! - [`fit_view`] - bounding-box camera framing applied to every scene.

pub mod bounds;
pub mod buffer;
pub mod camera;
pub mod color;
pub mod config;
pub mod controller;
pub mod curve;
pub mod dimension;
pub mod error;
pub mod generators;
pub mod hypercube;
pub mod math4;
pub mod rng;

pub use bounds::Aabb;
pub use buffer::{BaseShape, GeometryBuffer, GeometryData, Uniforms};
pub use camera::{CameraPose, fit_view};
pub use config::{ConfigPreset, DimensionConfig};
pub use controller::{DimensionController, NoopReleaser, ResourceReleaser};
pub use dimension::{Dimension, DimensionKind, FrameUpdate};
pub use error::{GenerateError, TeardownError};
pub use generators::starfield::Starfield;
pub use rng::SeededRng;
