//! Dimension lifecycle controller
//!
//! Owns at most one active dimension and walks it through
//! validate -> teardown -> construct -> frame. The ordering is the point:
//! parameter validation runs before anything is torn down, so a bad request
//! cannot destroy the current scene, and the previous dimension is released
//! before the replacement allocates, so peak memory is bounded by one scene
//! plus change. Renderer-side teardown goes through the [`ResourceReleaser`]
//! seam; a failed release is logged and never blocks the transition.

use tracing::{info, warn};

use crate::camera::fit_view;
use crate::config::DimensionConfig;
use crate::dimension::{Dimension, DimensionKind};
use crate::error::{GenerateError, TeardownError};
use crate::generators;

/// Renderer hook for freeing GPU twins of a dimension's buffers.
///
/// Called exactly once per dimension, strictly before any replacement is
/// generated. The default [`NoopReleaser`] suits hosts whose buffer handles
/// drop cleanly on their own.
pub trait ResourceReleaser {
    fn release(&mut self, dimension: &Dimension) -> Result<(), TeardownError>;
}

/// Releaser for hosts with nothing to free.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReleaser;

impl ResourceReleaser for NoopReleaser {
    fn release(&mut self, _dimension: &Dimension) -> Result<(), TeardownError> {
        Ok(())
    }
}

/// The scene lifecycle state machine: `Empty` or holding one [`Dimension`].
///
/// Lives for the process lifetime; `Empty` is both the initial state and
/// re-enterable via [`clear`](Self::clear).
pub struct DimensionController<R: ResourceReleaser = NoopReleaser> {
    config: DimensionConfig,
    releaser: R,
    current: Option<Dimension>,
}

impl DimensionController<NoopReleaser> {
    pub fn new(config: DimensionConfig) -> Self {
        Self::with_releaser(config, NoopReleaser)
    }
}

impl<R: ResourceReleaser> DimensionController<R> {
    pub fn with_releaser(config: DimensionConfig, releaser: R) -> Self {
        Self {
            config,
            releaser,
            current: None,
        }
    }

    /// Generate `kind` from `seed`, replacing any active dimension.
    ///
    /// Validation failures leave the current dimension active and untouched.
    /// A generation failure after validation leaves the controller `Empty`
    /// (the old scene is already gone by then).
    pub fn generate(
        &mut self,
        kind: DimensionKind,
        seed: u32,
    ) -> Result<&Dimension, GenerateError> {
        if let Err(e) = self.config.camera.validate().and_then(|_| generators::validate(kind, &self.config)) {
            warn!(kind = kind.name(), error = %e, "rejected generate request");
            return Err(e);
        }

        self.teardown();

        let mut dimension = match generators::generate(kind, &self.config, seed) {
            Ok(d) => d,
            Err(e) => {
                warn!(kind = kind.name(), error = %e, "generation failed");
                return Err(e);
            }
        };
        dimension.initial_view = Some(fit_view(
            &dimension.bounds,
            self.config.camera.fov_radians(),
            self.config.padding_for(kind),
        )?);

        info!(
            kind = kind.name(),
            seed,
            buffers = dimension.buffers.len(),
            elements = dimension.element_count(),
            "dimension active"
        );
        Ok(self.current.insert(dimension))
    }

    /// Drop the active dimension, if any. Idempotent on `Empty`.
    pub fn clear(&mut self) {
        self.teardown();
    }

    /// Advance the active dimension to `elapsed` seconds. No-op on `Empty`.
    pub fn tick(&mut self, elapsed: f64) {
        if let Some(dimension) = &mut self.current {
            dimension.tick(elapsed);
        }
    }

    pub fn current(&self) -> Option<&Dimension> {
        self.current.as_ref()
    }

    /// Mutable access for the renderer's take-style dirty flag reads.
    pub fn current_mut(&mut self) -> Option<&mut Dimension> {
        self.current.as_mut()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn config(&self) -> &DimensionConfig {
        &self.config
    }

    pub fn releaser(&self) -> &R {
        &self.releaser
    }

    /// Release and drop the current dimension. Release failures are logged
    /// and do not stop the transition.
    fn teardown(&mut self) {
        if let Some(dimension) = self.current.take() {
            if let Err(e) = self.releaser.release(&dimension) {
                warn!(kind = dimension.kind.name(), error = %e, "resource teardown failed");
            }
            info!(kind = dimension.kind.name(), "dimension cleared");
        }
    }
}
