/// Wireframe geometry: homogeneous vertices plus edge topology
use crate::matrix::Mat4x8;

/// Number of corners on the cube.
pub const CUBE_VERTICES: usize = 8;

/// Number of edges on the cube.
pub const CUBE_EDGES: usize = 12;

/// A line segment between two vertex columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

/// A wireframe of homogeneous points (one per column) and the edges joining them
#[derive(Debug, Clone)]
pub struct Wireframe {
    pub vertices: Mat4x8,
    pub edges: [Edge; CUBE_EDGES],
}

impl Wireframe {
    /// Cube of side length 2 centered on the origin.
    ///
    /// Corner `i` sits at x = ±1 by bit 0, y = ±1 by bit 1 and z = ±1 by
    /// bit 2 of `i`.
    pub fn cube() -> Self {
        #[rustfmt::skip]
        let vertices = Mat4x8::from_row_slice(&[
            -1.0,  1.0, -1.0,  1.0, -1.0,  1.0, -1.0,  1.0,
            -1.0, -1.0,  1.0,  1.0, -1.0, -1.0,  1.0,  1.0,
            -1.0, -1.0, -1.0, -1.0,  1.0,  1.0,  1.0,  1.0,
             1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0,
        ]);

        let edges = [
            // Front face
            Edge::new(0, 1),
            Edge::new(1, 3),
            Edge::new(3, 2),
            Edge::new(2, 0),
            // Back face
            Edge::new(4, 5),
            Edge::new(5, 7),
            Edge::new(7, 6),
            Edge::new(6, 4),
            // Connecting edges
            Edge::new(0, 4),
            Edge::new(1, 5),
            Edge::new(2, 6),
            Edge::new(3, 7),
        ];

        Self { vertices, edges }
    }
}

impl Default for Wireframe {
    fn default() -> Self {
        Self::cube()
    }
}
