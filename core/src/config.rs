//! Generator and camera configuration
//!
//! Every generator parameter lives here rather than as a hard-coded constant:
//! the source material shipped with two divergent parameterizations of the
//! ring and vortex scenes, so which one runs is a configuration choice, not a
//! code fork. Defaults are the later, larger variant; [`ConfigPreset::Classic`]
//! restores the earlier one. Files are TOML with unknown keys rejected, so a
//! typoed field fails loudly instead of silently falling back to a default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::dimension::DimensionKind;
use crate::error::GenerateError;

/// Failure while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Named parameter sets resolving the divergent source variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigPreset {
    /// The later, larger parameterization. This is the default.
    Vast,
    /// The earlier variant: smaller ring and vortex scenes.
    Classic,
}

/// All generator parameters plus camera framing, one section per dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct DimensionConfig {
    pub camera: CameraConfig,
    pub ring_of_chaos: RingOfChaosParams,
    pub stellar_vortex: StellarVortexParams,
    pub tesseract: TesseractParams,
    pub pulsar: PulsarParams,
    pub black_hole: BlackHoleParams,
    pub infinity_web: InfinityWebParams,
    pub starfield: StarfieldParams,
}

impl DimensionConfig {
    /// Config for a named preset.
    pub fn preset(preset: ConfigPreset) -> Self {
        let mut config = Self::default();
        if preset == ConfigPreset::Classic {
            config.ring_of_chaos.clusters = 12;
            config.ring_of_chaos.objects_per_cluster = 300;
            config.ring_of_chaos.ring_radius = 5000.0;
            config.ring_of_chaos.cluster_spread = 9000.0;
            config.stellar_vortex.arms = 4;
            config.stellar_vortex.points_per_arm = 45_000;
            config.stellar_vortex.core_spirals = 5;
            config.stellar_vortex.points_per_core_spiral = 900;
            config.stellar_vortex.galaxy_scale = 1200.0;
            config.stellar_vortex.core_scale = 300.0;
        }
        config
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded dimension config");
        Ok(config)
    }

    /// Framing padding for `kind`.
    pub fn padding_for(&self, kind: DimensionKind) -> f32 {
        match kind {
            DimensionKind::RingOfChaos => self.ring_of_chaos.padding,
            DimensionKind::StellarVortex => self.stellar_vortex.padding,
            DimensionKind::Tesseract => self.tesseract.padding,
            DimensionKind::Pulsar => self.pulsar.padding,
            DimensionKind::BlackHole => self.black_hole.padding,
            DimensionKind::InfinityWeb => self.infinity_web.padding,
        }
    }

    /// Validate every section, camera included.
    pub fn validate(&self) -> Result<(), GenerateError> {
        self.camera.validate()?;
        self.ring_of_chaos.validate()?;
        self.stellar_vortex.validate()?;
        self.tesseract.validate()?;
        self.pulsar.validate()?;
        self.black_hole.validate()?;
        self.infinity_web.validate()?;
        self.starfield.validate()
    }
}

/// Camera framing inputs shared by every dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
}

impl CameraConfig {
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if !self.fov_degrees.is_finite() || self.fov_degrees <= 0.0 || self.fov_degrees >= 180.0 {
            return Err(GenerateError::invalid(
                "fov_degrees",
                format!("must be in (0, 180), got {}", self.fov_degrees),
            ));
        }
        Ok(())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { fov_degrees: 70.0 }
    }
}

/// Ring of instanced shape clusters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingOfChaosParams {
    pub clusters: usize,
    pub objects_per_cluster: usize,
    pub ring_radius: f32,
    pub cluster_spread: f32,
    pub padding: f32,
}

impl Default for RingOfChaosParams {
    fn default() -> Self {
        Self {
            clusters: 18,
            objects_per_cluster: 400,
            ring_radius: 6500.0,
            cluster_spread: 15_100.0,
            padding: 1.8,
        }
    }
}

/// Logarithmic-spiral galaxy with an atom-like core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StellarVortexParams {
    pub arms: usize,
    pub points_per_arm: usize,
    pub core_spirals: usize,
    pub points_per_core_spiral: usize,
    pub galaxy_scale: f32,
    pub core_scale: f32,
    /// Log-spiral `r = a * e^(b*theta)` coefficient `a`.
    pub spiral_a: f32,
    /// Log-spiral decay constant `b`.
    pub spiral_b: f32,
    pub padding: f32,
}

impl Default for StellarVortexParams {
    fn default() -> Self {
        Self {
            arms: 6,
            points_per_arm: 60_000,
            core_spirals: 15,
            points_per_core_spiral: 1200,
            galaxy_scale: 1600.0,
            core_scale: 420.0,
            spiral_a: 0.55,
            spiral_b: 0.19,
            padding: 2.6,
        }
    }
}

/// 4-cube wireframe projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TesseractParams {
    pub projection_scale: f32,
    /// Center of the oscillating 4-D projection distance.
    pub w_midpoint: f32,
    /// Oscillation amplitude around the midpoint.
    pub w_amplitude: f32,
    pub padding: f32,
}

impl Default for TesseractParams {
    fn default() -> Self {
        Self {
            projection_scale: 900.0,
            w_midpoint: 4.0,
            w_amplitude: 1.0,
            padding: 2.2,
        }
    }
}

/// Neutron star with beam cones, accretion disk, and field arcs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PulsarParams {
    pub star_radius: f32,
    pub beam_height: f32,
    pub beam_radius: f32,
    pub disk_inner: f32,
    pub disk_outer: f32,
    pub disk_points: usize,
    pub field_arcs: usize,
    pub padding: f32,
}

impl Default for PulsarParams {
    fn default() -> Self {
        Self {
            star_radius: 250.0,
            beam_height: 1.6e6,
            beam_radius: 138_000.0,
            disk_inner: 900.0,
            disk_outer: 2600.0,
            disk_points: 48_000,
            field_arcs: 20,
            padding: 4.0,
        }
    }
}

/// Spiral-flower nebula with the fake-4-D breathing divisor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlackHoleParams {
    pub bundles: usize,
    pub spirals_per_bundle: usize,
    pub points_per_spiral: usize,
    pub max_radius: f32,
    /// Log-spiral decay constant; also scales the synthetic w coordinate.
    pub radial_k: f32,
    pub wave_height: f32,
    pub padding: f32,
}

impl Default for BlackHoleParams {
    fn default() -> Self {
        Self {
            bundles: 16,
            spirals_per_bundle: 14,
            points_per_spiral: 2600,
            max_radius: 80_000.0,
            radial_k: 0.22,
            wave_height: 9600.0,
            padding: 3.2,
        }
    }
}

/// Batch of figure-eight / Lissajous curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InfinityWebParams {
    pub curves: usize,
    pub points_per_curve: usize,
    pub base_radius: f32,
    pub y_amplitude: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub padding: f32,
}

impl Default for InfinityWebParams {
    fn default() -> Self {
        Self {
            curves: 18,
            points_per_curve: 26_000,
            base_radius: 17_800.0,
            y_amplitude: 9000.0,
            size_min: 9.0,
            size_max: 74.0,
            padding: 2.8,
        }
    }
}

/// Persistent background star shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarfieldParams {
    pub count: usize,
    pub radius: f32,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            count: 200_000,
            radius: 200_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_constants() {
        let config = DimensionConfig::default();
        assert_eq!(config.camera.fov_degrees, 70.0);
        assert_eq!(config.ring_of_chaos.clusters, 18);
        assert_eq!(config.ring_of_chaos.objects_per_cluster, 400);
        assert_eq!(config.stellar_vortex.arms, 6);
        assert_eq!(config.stellar_vortex.points_per_arm, 60_000);
        assert_eq!(config.tesseract.w_midpoint, 4.0);
        assert_eq!(config.pulsar.disk_points, 48_000);
        assert_eq!(config.black_hole.bundles, 16);
        assert_eq!(config.infinity_web.curves, 18);
        assert_eq!(config.starfield.count, 200_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_classic_preset_differs_only_in_ring_and_vortex() {
        let vast = DimensionConfig::preset(ConfigPreset::Vast);
        let classic = DimensionConfig::preset(ConfigPreset::Classic);
        assert_eq!(vast, DimensionConfig::default());

        assert_eq!(classic.ring_of_chaos.clusters, 12);
        assert_eq!(classic.ring_of_chaos.objects_per_cluster, 300);
        assert_eq!(classic.stellar_vortex.arms, 4);
        assert_eq!(classic.stellar_vortex.core_spirals, 5);
        // Spiral coefficients are shared between the variants.
        assert_eq!(classic.stellar_vortex.spiral_a, vast.stellar_vortex.spiral_a);
        assert_eq!(classic.stellar_vortex.spiral_b, vast.stellar_vortex.spiral_b);
        // Untouched sections are identical.
        assert_eq!(classic.tesseract, vast.tesseract);
        assert_eq!(classic.pulsar, vast.pulsar);
        assert_eq!(classic.black_hole, vast.black_hole);
        assert_eq!(classic.infinity_web, vast.infinity_web);
        assert_eq!(classic.starfield, vast.starfield);
        assert!(classic.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DimensionConfig::preset(ConfigPreset::Classic);
        let text = toml::to_string_pretty(&config).unwrap();
        let back: DimensionConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: DimensionConfig = toml::from_str(
            "[ring_of_chaos]\nclusters = 3\n\n[camera]\nfov_degrees = 50.0\n",
        )
        .unwrap();
        assert_eq!(config.ring_of_chaos.clusters, 3);
        assert_eq!(
            config.ring_of_chaos.ring_radius,
            RingOfChaosParams::default().ring_radius
        );
        assert_eq!(config.camera.fov_degrees, 50.0);
        assert_eq!(config.pulsar, PulsarParams::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(toml::from_str::<DimensionConfig>("[ring_of_chaos]\nclustres = 3\n").is_err());
        assert!(toml::from_str::<DimensionConfig>("[ring_of_chaso]\nclusters = 3\n").is_err());
    }

    #[test]
    fn test_fov_validation() {
        let mut config = DimensionConfig::default();
        config.camera.fov_degrees = 0.0;
        assert!(config.validate().is_err());
        config.camera.fov_degrees = 180.0;
        assert!(config.validate().is_err());
        config.camera.fov_degrees = f32::NAN;
        assert!(config.validate().is_err());
    }
}
