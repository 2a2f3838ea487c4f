//! Procedural dimension generators
//!
//! One module per dimension kind plus the starfield backdrop. Every
//! generator follows the same shape: validate parameters up front, size the
//! output arrays exactly, fill them in one or two nested passes from a
//! [`SeededRng`](crate::rng::SeededRng) owned by the call, and attach an
//! updater only if the dimension animates beyond the base spin. The draw
//! order against the RNG is load-bearing: it is what makes a seed reproduce
//! a scene bit-for-bit, so refactors must not reorder draws.

pub mod black_hole;
pub mod infinity_web;
pub mod pulsar;
pub mod ring_of_chaos;
pub mod starfield;
pub mod stellar_vortex;
pub mod tesseract;


use crate::config::DimensionConfig;
use crate::dimension::{Dimension, DimensionKind};
use crate::error::GenerateError;

/// Generate `kind` from its parameter block in `config`.
pub fn generate(
    kind: DimensionKind,
    config: &DimensionConfig,
    seed: u32,
) -> Result<Dimension, GenerateError> {
    match kind {
        DimensionKind::RingOfChaos => ring_of_chaos::generate(&config.ring_of_chaos, seed),
        DimensionKind::StellarVortex => stellar_vortex::generate(&config.stellar_vortex, seed),
        DimensionKind::Tesseract => tesseract::generate(&config.tesseract, seed),
        DimensionKind::Pulsar => pulsar::generate(&config.pulsar, seed),
        DimensionKind::BlackHole => black_hole::generate(&config.black_hole, seed),
        DimensionKind::InfinityWeb => infinity_web::generate(&config.infinity_web, seed),
    }
}

/// Validate the parameters `generate` would use, without generating.
/// The controller calls this before tearing anything down.
pub fn validate(kind: DimensionKind, config: &DimensionConfig) -> Result<(), GenerateError> {
    match kind {
        DimensionKind::RingOfChaos => config.ring_of_chaos.validate(),
        DimensionKind::StellarVortex => config.stellar_vortex.validate(),
        DimensionKind::Tesseract => config.tesseract.validate(),
        DimensionKind::Pulsar => config.pulsar.validate(),
        DimensionKind::BlackHole => config.black_hole.validate(),
        DimensionKind::InfinityWeb => config.infinity_web.validate(),
    }
}

pub(crate) fn require_count(
    name: &'static str,
    value: usize,
    min: usize,
) -> Result<(), GenerateError> {
    if value < min {
        return Err(GenerateError::invalid(
            name,
            format!("must be at least {min}, got {value}"),
        ));
    }
    Ok(())
}

pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<(), GenerateError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GenerateError::invalid(
            name,
            format!("must be finite and positive, got {value}"),
        ));
    }
    Ok(())
}

/// Check that a log-spiral `a * e^(b * theta)` stays finite over the span of
/// angles a generator will sweep, scale factor included. The fill loops
/// evaluate the exponential in f32, so both the bare growth factor and the
/// scaled peak are held to f32 range; an f64-only check would admit decay
/// constants that saturate `exp` to infinity mid-fill.
pub(crate) fn require_spiral_bounded(
    name: &'static str,
    a: f64,
    b: f64,
    max_theta: f64,
    scale: f64,
) -> Result<(), GenerateError> {
    let growth = (b * max_theta).exp();
    let peak = a * growth * scale;
    if !(growth as f32).is_finite() || !(peak as f32).is_finite() {
        return Err(GenerateError::invalid(
            name,
            format!("spiral radius overflows over the swept angle range (peak {peak})"),
        ));
    }
    Ok(())
}
