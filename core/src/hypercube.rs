//! 4-cube combinatorial structure
//!
//! The tesseract wireframe: 16 vertices at {-1, 1}^4 and the 32 edges
//! between vertices differing in exactly one coordinate. Closed and static;
//! no parameters reach it.

use glam::Vec4;

/// Number of vertices of a 4-cube.
pub const VERTEX_COUNT: usize = 16;
/// Number of edges of a 4-cube.
pub const EDGE_COUNT: usize = 32;

/// Precomputed vertex and edge lists of the unit 4-cube.
#[derive(Debug, Clone)]
pub struct HypercubeGraph {
    vertices: Vec<Vec4>,
    edges: Vec<(usize, usize)>,
}

impl HypercubeGraph {
    /// Build the graph: vertex `i` takes coordinate `k` from bit `k` of `i`
    /// (set = +1, clear = -1); edges join Hamming-distance-1 pairs in
    /// ascending `(a, b)` order.
    pub fn new() -> Self {
        let vertices: Vec<Vec4> = (0..VERTEX_COUNT)
            .map(|i| {
                Vec4::new(
                    if i & 1 != 0 { 1.0 } else { -1.0 },
                    if i & 2 != 0 { 1.0 } else { -1.0 },
                    if i & 4 != 0 { 1.0 } else { -1.0 },
                    if i & 8 != 0 { 1.0 } else { -1.0 },
                )
            })
            .collect();

        let mut edges = Vec::with_capacity(EDGE_COUNT);
        for a in 0..VERTEX_COUNT {
            for b in (a + 1)..VERTEX_COUNT {
                if (a ^ b).count_ones() == 1 {
                    edges.push((a, b));
                }
            }
        }

        Self { vertices, edges }
    }

    /// The 16 vertices as 4-D points.
    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    /// The 32 edges as vertex index pairs.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

impl Default for HypercubeGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_and_edge_counts() {
        let graph = HypercubeGraph::new();
        assert_eq!(graph.vertices().len(), VERTEX_COUNT);
        assert_eq!(graph.edges().len(), EDGE_COUNT);
    }

    #[test]
    fn test_vertices_on_unit_4cube() {
        let graph = HypercubeGraph::new();
        for v in graph.vertices() {
            for c in v.to_array() {
                assert!(c == 1.0 || c == -1.0);
            }
        }
        // All sign patterns distinct.
        for a in 0..VERTEX_COUNT {
            for b in (a + 1)..VERTEX_COUNT {
                assert_ne!(graph.vertices()[a], graph.vertices()[b]);
            }
        }
    }

    #[test]
    fn test_edges_are_hamming_distance_one() {
        let graph = HypercubeGraph::new();
        for &(a, b) in graph.edges() {
            let va = graph.vertices()[a].to_array();
            let vb = graph.vertices()[b].to_array();
            let differing = va.iter().zip(vb.iter()).filter(|(x, y)| x != y).count();
            assert_eq!(differing, 1, "edge ({a}, {b}) differs in {differing} coords");
        }
    }

    #[test]
    fn test_every_vertex_has_degree_four() {
        let graph = HypercubeGraph::new();
        let mut degree = [0usize; VERTEX_COUNT];
        for &(a, b) in graph.edges() {
            degree[a] += 1;
            degree[b] += 1;
        }
        assert!(degree.iter().all(|&d| d == 4));
    }
}
