//! Geometry buffers
//!
//! Plain-data containers handed from generators to the renderer: point
//! clouds, instanced shape sets, and line segment soups. All parallel arrays
//! in one buffer share an element count fixed at generation; a buffer is
//! never resized in place, only replaced. Dirty flags tell the renderer
//! which arrays an updater touched since the last upload.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::bounds::Aabb;

/// Base shapes an [`GeometryData::InstancedSet`] instances. The renderer
/// owns the meshes; shape plus per-instance transform fully determines
/// world-space geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseShape {
    /// Unit cube.
    Cube,
    /// Icosahedron, circumradius 0.8.
    Icosahedron,
    /// Torus, ring radius 0.8, tube radius 0.25.
    Torus,
    /// Cone of unit base radius and unit height, apex at the origin,
    /// opening toward -Y.
    Cone,
    /// Unit sphere.
    Sphere,
}

impl BaseShape {
    pub fn name(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Icosahedron => "icosahedron",
            Self::Torus => "torus",
            Self::Cone => "cone",
            Self::Sphere => "sphere",
        }
    }

    /// Radius of the shape's bounding sphere at unit scale.
    pub fn bound_radius(self) -> f32 {
        match self {
            Self::Cube => 0.866_025_4,
            Self::Icosahedron => 0.8,
            Self::Torus => 1.05,
            Self::Cone => std::f32::consts::SQRT_2,
            Self::Sphere => 1.0,
        }
    }
}

/// The payload of one geometry buffer.
#[derive(Debug, Clone)]
pub enum GeometryData {
    /// Independent points with per-point color and size.
    PointCloud {
        positions: Vec<Vec3>,
        colors: Vec<Vec3>,
        sizes: Vec<f32>,
    },
    /// Many copies of one base shape, one transform and color per copy.
    InstancedSet {
        shape: BaseShape,
        transforms: Vec<Mat4>,
        colors: Vec<Vec3>,
    },
    /// Line soup: flat endpoint list, two entries per segment, colors per
    /// endpoint.
    LineSegments {
        positions: Vec<Vec3>,
        colors: Vec<Vec3>,
    },
}

/// One renderable buffer: payload plus its own rotation and dirty flags.
///
/// `rotation` is the Euler rotation the renderer applies to this buffer on
/// top of the whole-dimension rotation; a few updaters spin individual
/// buffers at their own rate (the pulsar disk counter-rotates, for one).
#[derive(Debug, Clone)]
pub struct GeometryBuffer {
    pub data: GeometryData,
    pub rotation: Vec3,
    positions_dirty: bool,
    colors_dirty: bool,
}

impl GeometryBuffer {
    /// Point cloud buffer. Panics if the parallel arrays disagree in length;
    /// generators size them from the same counts.
    pub fn point_cloud(positions: Vec<Vec3>, colors: Vec<Vec3>, sizes: Vec<f32>) -> Self {
        assert_eq!(positions.len(), colors.len());
        assert_eq!(positions.len(), sizes.len());
        Self::from_data(GeometryData::PointCloud {
            positions,
            colors,
            sizes,
        })
    }

    /// Instanced set buffer. Panics if transforms and colors disagree.
    pub fn instanced_set(shape: BaseShape, transforms: Vec<Mat4>, colors: Vec<Vec3>) -> Self {
        assert_eq!(transforms.len(), colors.len());
        Self::from_data(GeometryData::InstancedSet {
            shape,
            transforms,
            colors,
        })
    }

    /// Line segment buffer. Panics on mismatched arrays or an odd endpoint
    /// count.
    pub fn line_segments(positions: Vec<Vec3>, colors: Vec<Vec3>) -> Self {
        assert_eq!(positions.len(), colors.len());
        assert_eq!(positions.len() % 2, 0, "segments need two endpoints each");
        Self::from_data(GeometryData::LineSegments { positions, colors })
    }

    fn from_data(data: GeometryData) -> Self {
        // Fresh buffers are fully dirty: the renderer has uploaded nothing.
        Self {
            data,
            rotation: Vec3::ZERO,
            positions_dirty: true,
            colors_dirty: true,
        }
    }

    /// Element count: points, instances, or line endpoints.
    pub fn element_count(&self) -> usize {
        match &self.data {
            GeometryData::PointCloud { positions, .. } => positions.len(),
            GeometryData::InstancedSet { transforms, .. } => transforms.len(),
            GeometryData::LineSegments { positions, .. } => positions.len(),
        }
    }

    /// Short tag for logs and stats output.
    pub fn kind_name(&self) -> &'static str {
        match &self.data {
            GeometryData::PointCloud { .. } => "point_cloud",
            GeometryData::InstancedSet { .. } => "instanced_set",
            GeometryData::LineSegments { .. } => "line_segments",
        }
    }

    pub fn mark_positions_dirty(&mut self) {
        self.positions_dirty = true;
    }

    pub fn mark_colors_dirty(&mut self) {
        self.colors_dirty = true;
    }

    pub fn positions_dirty(&self) -> bool {
        self.positions_dirty
    }

    pub fn colors_dirty(&self) -> bool {
        self.colors_dirty
    }

    /// Read-and-clear the positions flag; the renderer calls this when it
    /// re-uploads.
    pub fn take_positions_dirty(&mut self) -> bool {
        std::mem::take(&mut self.positions_dirty)
    }

    /// Read-and-clear the colors flag.
    pub fn take_colors_dirty(&mut self) -> bool {
        std::mem::take(&mut self.colors_dirty)
    }

    /// Grow `bounds` to contain this buffer's geometry. Instances count as
    /// spheres: translation plus the shape's bounding radius at the
    /// transform's largest axis scale.
    pub fn grow_bounds(&self, bounds: &mut Aabb) {
        match &self.data {
            GeometryData::PointCloud { positions, .. }
            | GeometryData::LineSegments { positions, .. } => {
                for &p in positions {
                    bounds.include(p);
                }
            }
            GeometryData::InstancedSet { shape, transforms, .. } => {
                for m in transforms {
                    let center = m.w_axis.truncate();
                    let scale = m
                        .x_axis
                        .truncate()
                        .length()
                        .max(m.y_axis.truncate().length())
                        .max(m.z_axis.truncate().length());
                    bounds.include_sphere(center, scale * shape.bound_radius());
                }
            }
        }
    }

    /// Positions as raw bytes for upload; `None` for instanced sets.
    pub fn position_bytes(&self) -> Option<&[u8]> {
        match &self.data {
            GeometryData::PointCloud { positions, .. }
            | GeometryData::LineSegments { positions, .. } => {
                Some(bytemuck::cast_slice(positions))
            }
            GeometryData::InstancedSet { .. } => None,
        }
    }

    /// Colors as raw bytes for upload.
    pub fn color_bytes(&self) -> &[u8] {
        match &self.data {
            GeometryData::PointCloud { colors, .. }
            | GeometryData::InstancedSet { colors, .. }
            | GeometryData::LineSegments { colors, .. } => bytemuck::cast_slice(colors),
        }
    }

    /// Instance transforms as raw bytes; `None` for non-instanced buffers.
    pub fn transform_bytes(&self) -> Option<&[u8]> {
        match &self.data {
            GeometryData::InstancedSet { transforms, .. } => {
                Some(bytemuck::cast_slice(transforms))
            }
            _ => None,
        }
    }

    /// Point sizes as raw bytes; `None` outside point clouds.
    pub fn size_bytes(&self) -> Option<&[u8]> {
        match &self.data {
            GeometryData::PointCloud { sizes, .. } => Some(bytemuck::cast_slice(sizes)),
            _ => None,
        }
    }
}

/// Scalar shader inputs the updaters drive each tick.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Uniforms {
    /// Elapsed seconds, for point-shader twinkle.
    pub time: f32,
    /// Pulsar core emissive intensity.
    pub pulse: f32,
    /// Pulsar beam-cone opacity.
    pub beam_opacity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_counts() {
        let buf = GeometryBuffer::point_cloud(
            vec![Vec3::ZERO; 10],
            vec![Vec3::ONE; 10],
            vec![1.0; 10],
        );
        assert_eq!(buf.element_count(), 10);
        assert_eq!(buf.kind_name(), "point_cloud");
    }

    #[test]
    #[should_panic]
    fn test_mismatched_arrays_panic() {
        let _ = GeometryBuffer::point_cloud(vec![Vec3::ZERO; 10], vec![Vec3::ONE; 9], vec![1.0; 10]);
    }

    #[test]
    #[should_panic]
    fn test_odd_endpoints_panic() {
        let _ = GeometryBuffer::line_segments(vec![Vec3::ZERO; 3], vec![Vec3::ONE; 3]);
    }

    #[test]
    fn test_fresh_buffer_is_dirty() {
        let mut buf = GeometryBuffer::line_segments(vec![Vec3::ZERO; 4], vec![Vec3::ONE; 4]);
        assert!(buf.positions_dirty() && buf.colors_dirty());
        assert!(buf.take_positions_dirty());
        assert!(!buf.take_positions_dirty(), "take clears the flag");
        assert!(buf.take_colors_dirty());
        buf.mark_positions_dirty();
        assert!(buf.positions_dirty());
        assert!(!buf.colors_dirty());
    }

    #[test]
    fn test_grow_bounds_points() {
        let buf = GeometryBuffer::point_cloud(
            vec![Vec3::new(-5.0, 0.0, 0.0), Vec3::new(5.0, 2.0, -1.0)],
            vec![Vec3::ONE; 2],
            vec![1.0; 2],
        );
        let mut bounds = Aabb::EMPTY;
        buf.grow_bounds(&mut bounds);
        assert_eq!(bounds.min, Vec3::new(-5.0, 0.0, -1.0));
        assert_eq!(bounds.max, Vec3::new(5.0, 2.0, 0.0));
    }

    #[test]
    fn test_grow_bounds_instances_include_scale() {
        let transform = Mat4::from_scale_rotation_translation(
            Vec3::splat(10.0),
            glam::Quat::IDENTITY,
            Vec3::new(100.0, 0.0, 0.0),
        );
        let buf = GeometryBuffer::instanced_set(BaseShape::Sphere, vec![transform], vec![Vec3::ONE]);
        let mut bounds = Aabb::EMPTY;
        buf.grow_bounds(&mut bounds);
        assert_eq!(bounds.max.x, 110.0);
        assert_eq!(bounds.min.x, 90.0);
    }

    #[test]
    fn test_byte_views() {
        let buf = GeometryBuffer::point_cloud(
            vec![Vec3::ZERO; 4],
            vec![Vec3::ONE; 4],
            vec![2.0; 4],
        );
        assert_eq!(buf.position_bytes().unwrap().len(), 4 * 12);
        assert_eq!(buf.color_bytes().len(), 4 * 12);
        assert_eq!(buf.size_bytes().unwrap().len(), 4 * 4);
        assert!(buf.transform_bytes().is_none());

        let inst =
            GeometryBuffer::instanced_set(BaseShape::Cube, vec![Mat4::IDENTITY], vec![Vec3::ONE]);
        assert_eq!(inst.transform_bytes().unwrap().len(), 64);
        assert!(inst.position_bytes().is_none());
    }
}
