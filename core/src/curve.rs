//! Catmull-Rom curve sampling
//!
//! Open uniform Catmull-Rom splines through a handful of control points,
//! sampled into polylines. The pulsar's magnetic-field arcs are the consumer:
//! four control points swept into 80-segment lines.

use glam::Vec3;

use crate::error::GenerateError;

/// Open Catmull-Rom spline through `points`, uniform parameterization.
///
/// End tangents come from phantom points mirrored across the terminal
/// control points, so the sampled curve interpolates both ends.
#[derive(Debug, Clone)]
pub struct CatmullRom {
    points: Vec<Vec3>,
}

impl CatmullRom {
    /// At least two control points are required.
    pub fn new(points: Vec<Vec3>) -> Result<Self, GenerateError> {
        if points.len() < 2 {
            return Err(GenerateError::InvalidParameter {
                name: "control_points",
                reason: format!("need at least 2 control points, got {}", points.len()),
            });
        }
        Ok(Self { points })
    }

    /// Point at global parameter `t` in [0, 1] across the whole chain.
    pub fn point_at(&self, t: f32) -> Vec3 {
        let segments = self.points.len() - 1;
        let scaled = t.clamp(0.0, 1.0) * segments as f32;
        let seg = (scaled as usize).min(segments - 1);
        let local = scaled - seg as f32;

        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        let p0 = if seg == 0 {
            p1 + (p1 - p2)
        } else {
            self.points[seg - 1]
        };
        let p3 = if seg + 2 < self.points.len() {
            self.points[seg + 2]
        } else {
            p2 + (p2 - p1)
        };

        catmull_rom(p0, p1, p2, p3, local)
    }

    /// Sample `divisions + 1` points evenly in parameter, both ends included.
    pub fn sample_points(&self, divisions: usize) -> Vec<Vec3> {
        (0..=divisions)
            .map(|i| self.point_at(i as f32 / divisions as f32))
            .collect()
    }
}

/// Cubic Catmull-Rom basis on one segment, `t` in [0, 1] between `p1`/`p2`.
#[inline]
fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc_controls() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 3120.0),
            Vec3::new(0.0, 1250.0, 0.0),
            Vec3::new(0.0, -1250.0, 0.0),
            Vec3::new(0.0, 0.0, -3120.0),
        ]
    }

    #[test]
    fn test_rejects_degenerate_input() {
        assert!(CatmullRom::new(vec![]).is_err());
        assert!(CatmullRom::new(vec![Vec3::ZERO]).is_err());
        assert!(CatmullRom::new(vec![Vec3::ZERO, Vec3::ONE]).is_ok());
    }

    #[test]
    fn test_sample_count() {
        let curve = CatmullRom::new(arc_controls()).unwrap();
        assert_eq!(curve.sample_points(80).len(), 81);
    }

    #[test]
    fn test_interpolates_endpoints() {
        let controls = arc_controls();
        let curve = CatmullRom::new(controls.clone()).unwrap();
        let samples = curve.sample_points(80);
        assert!((samples[0] - controls[0]).length() < 1e-3);
        assert!((samples[80] - controls[3]).length() < 1e-3);
    }

    #[test]
    fn test_passes_through_interior_controls() {
        let controls = arc_controls();
        let curve = CatmullRom::new(controls.clone()).unwrap();
        // Three segments: interior controls sit at t = 1/3 and 2/3.
        assert!((curve.point_at(1.0 / 3.0) - controls[1]).length() < 1e-2);
        assert!((curve.point_at(2.0 / 3.0) - controls[2]).length() < 1e-2);
    }

    #[test]
    fn test_arc_symmetry() {
        // The arc control set is antisymmetric in y and z; samples mirror.
        let curve = CatmullRom::new(arc_controls()).unwrap();
        for i in 0..=40 {
            let a = curve.point_at(i as f32 / 80.0);
            let b = curve.point_at((80 - i) as f32 / 80.0);
            assert!((a.y + b.y).abs() < 0.5, "y not mirrored at step {i}");
            assert!((a.z + b.z).abs() < 0.5, "z not mirrored at step {i}");
        }
    }

    #[test]
    fn test_straight_line_stays_straight() {
        let curve = CatmullRom::new(vec![
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ])
        .unwrap();
        for p in curve.sample_points(16) {
            assert!(p.y.abs() < 1e-5 && p.z.abs() < 1e-5);
        }
    }
}
