//! Cube geometry
//!
//! Every entity in the maze is drawn as the same wireframe cube: 8 corners
//! at ±1 on each axis, joined by 12 edges.

use macroquad::math::Vec3;

/// Cube corners relative to its center
pub const CUBE_VERTICES: [[f32; 3]; 8] = [
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
];

/// Pairs of indices into [`CUBE_VERTICES`]
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// World-space line segments of a cube centered at `center`
pub fn cube_edges(center: Vec3) -> [(Vec3, Vec3); 12] {
    let corner = |i: usize| Vec3::from_array(CUBE_VERTICES[i]) + center;
    CUBE_EDGES.map(|(a, b)| (corner(a), corner(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_translated() {
        let center = Vec3::new(3.0, 0.0, -10.0);
        for (a, b) in cube_edges(center) {
            assert!((a - center).abs().max_element() <= 1.0);
            assert!((b - center).abs().max_element() <= 1.0);

            // A cube edge's midpoint sits where two faces meet; a face
            // diagonal's midpoint sits in the middle of one face
            let mid = (a + b) * 0.5 - center;
            let on_faces = [mid.x, mid.y, mid.z].iter().filter(|c| c.abs() == 1.0).count();
            assert_eq!(on_faces, 2, "edge {:?}-{:?} is not a cube edge", a, b);
        }
    }

    #[test]
    fn test_all_twelve_edges_are_distinct() {
        let mut seen: Vec<(usize, usize)> = CUBE_EDGES
            .iter()
            .map(|&(a, b)| (a.min(b), a.max(b)))
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_every_edge_is_axis_aligned() {
        for (a, b) in cube_edges(Vec3::ZERO) {
            let d = (b - a).abs();
            let changed = [d.x, d.y, d.z].iter().filter(|c| **c > 0.0).count();
            assert_eq!(changed, 1);
            assert_eq!(a.distance(b), 2.0);
        }
    }

    #[test]
    fn test_each_vertex_has_three_edges() {
        let mut degree = [0; 8];
        for (a, b) in CUBE_EDGES {
            degree[a] += 1;
            degree[b] += 1;
        }
        assert_eq!(degree, [3; 8]);
    }
}
