/// Axis-angle rotations and the fixed tumbling rates of the cube
use crate::matrix::Mat4;

/// Angular velocity around each axis, in radians per frame tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Spin {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The tumbling rates the animation uses.
    pub fn tumble() -> Self {
        Self {
            x: 0.033,
            y: 0.01,
            z: 0.021,
        }
    }

    /// Angles `(x, y, z)` reached at frame tick `t`
    pub fn angles_at(&self, t: u64) -> (f32, f32, f32) {
        let t = t as f32;
        (t * self.x, t * self.y, t * self.z)
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::tumble()
    }
}

/// Transform builder for homogeneous rotations
pub struct Transform;

impl Transform {
    /// Write the rotation of `angle` radians about the unit axis `(x, y, z)`
    /// into `m`.
    ///
    /// This is Rodrigues' formula `I cos θ + a aᵗ (1 − cos θ) + [a]ₓ sin θ`
    /// in the upper 3×3; the last row and column are set to `[0, 0, 0, 1]`.
    /// The axis is not normalized here.
    pub fn rotation_into(m: &mut Mat4, x: f32, y: f32, z: f32, angle: f32) {
        let (s, c) = angle.sin_cos();
        let oc = 1.0 - c;

        let xxoc = x * x * oc;
        let yyoc = y * y * oc;
        let zzoc = z * z * oc;

        m[(0, 0)] = c + xxoc;
        m[(0, 1)] = x * y * oc - z * s;
        m[(0, 2)] = x * z * oc + y * s;
        m[(0, 3)] = 0.0;

        m[(1, 0)] = y * x * oc + z * s;
        m[(1, 1)] = c + yyoc;
        m[(1, 2)] = y * z * oc - x * s;
        m[(1, 3)] = 0.0;

        m[(2, 0)] = z * x * oc - y * s;
        m[(2, 1)] = z * y * oc + x * s;
        m[(2, 2)] = c + zzoc;
        m[(2, 3)] = 0.0;

        m[(3, 0)] = 0.0;
        m[(3, 1)] = 0.0;
        m[(3, 2)] = 0.0;
        m[(3, 3)] = 1.0;
    }

    /// Allocate-and-return variant of [`Transform::rotation_into`].
    pub fn rotation(x: f32, y: f32, z: f32, angle: f32) -> Mat4 {
        let mut m = Mat4::zeros();
        Self::rotation_into(&mut m, x, y, z, angle);
        m
    }
}
