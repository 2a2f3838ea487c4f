//! Error types
//!
//! Generation fails fast: a bad parameter or a degenerate computation is
//! reported before any structure becomes active, never as NaN buffers handed
//! to a renderer. Teardown failures are the one soft spot: they are logged
//! and the lifecycle proceeds, since a leaked renderer handle must not stop
//! the next scene from loading.

use thiserror::Error;

/// Failure while validating parameters or generating a dimension.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// An out-of-range generator input: zero counts, negative or non-finite
    /// radii, inverted ranges. Checked before any allocation.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// A projection or framing computation would divide by a near-zero
    /// value. The built-in paths guard these with epsilon floors, so this
    /// surfaces only through direct misuse of the low-level math.
    #[error("numeric degeneracy in {context}")]
    NumericDegeneracy { context: &'static str },
}

impl GenerateError {
    /// Shorthand for an [`GenerateError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// An external resource releaser failed to free renderer-side resources.
///
/// Never fatal: the controller logs it and completes the transition anyway.
#[derive(Debug, Error)]
#[error("resource teardown failed: {detail}")]
pub struct TeardownError {
    pub detail: String,
}

impl TeardownError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
