//! Axis-aligned bounding boxes
//!
//! Grown point-by-point while generators fill buffers, then handed to camera
//! framing. An empty box (no points yet) is a valid state and detectable.

use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// The empty box: includes nothing, unions as identity.
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    /// Box spanning `min` to `max`.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point of `iter`.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        let mut bounds = Self::EMPTY;
        for p in iter {
            bounds.include(p);
        }
        bounds
    }

    /// True when nothing has been included yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Grow to contain `point`.
    #[inline]
    pub fn include(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow to contain the sphere at `center` with `radius`.
    #[inline]
    pub fn include_sphere(&mut self, center: Vec3, radius: f32) {
        self.min = self.min.min(center - Vec3::splat(radius));
        self.max = self.max.max(center + Vec3::splat(radius));
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Box center; origin for an empty box.
    pub fn center(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            (self.min + self.max) * 0.5
        }
    }

    /// Extent along each axis; zero for an empty box.
    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Largest single-axis extent.
    pub fn max_extent(&self) -> f32 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}
