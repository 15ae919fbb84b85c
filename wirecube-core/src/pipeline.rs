/// Per-frame transform composition
use crate::matrix::{self, Mat4, Mat4x8};
use crate::projection::Viewport;
use crate::transform::{Spin, Transform};

/// Scratch buffers for one animation, allocated once and rewritten every frame.
///
/// Each frame builds `view · Ry · Rx · Rz` and applies it to the vertex set.
/// The multiply never writes into one of its own operands, so the running
/// product is copied into `working` before the next factor is folded in.
pub struct Pipeline {
    spin: Spin,
    view: Mat4,
    rotation: Mat4,
    transform: Mat4,
    working: Mat4,
    output: Mat4x8,
}

impl Pipeline {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_spin(viewport, Spin::tumble())
    }

    pub fn with_spin(viewport: Viewport, spin: Spin) -> Self {
        Self {
            spin,
            view: viewport.view_matrix(),
            rotation: Mat4::identity(),
            transform: Mat4::identity(),
            working: Mat4::identity(),
            output: Mat4x8::zeros(),
        }
    }

    /// Transform `vertices` for frame tick `t` and return the screen-space
    /// result (row 0 = x, row 1 = y).
    pub fn advance(&mut self, t: u64, vertices: &Mat4x8) -> &Mat4x8 {
        let (ax, ay, az) = self.spin.angles_at(t);

        Transform::rotation_into(&mut self.rotation, 0.0, 1.0, 0.0, ay);
        matrix::multiply(&mut self.transform, &self.view, &self.rotation);
        matrix::copy(&mut self.working, &self.transform);

        Transform::rotation_into(&mut self.rotation, 1.0, 0.0, 0.0, ax);
        matrix::multiply(&mut self.transform, &self.working, &self.rotation);
        matrix::copy(&mut self.working, &self.transform);

        Transform::rotation_into(&mut self.rotation, 0.0, 0.0, 1.0, az);
        matrix::multiply(&mut self.transform, &self.working, &self.rotation);

        matrix::multiply(&mut self.output, &self.transform, vertices);
        &self.output
    }

    /// Composite transform of the most recent frame
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// Screen-space vertices of the most recent frame
    pub fn output(&self) -> &Mat4x8 {
        &self.output
    }
}
