/// Screen placement of the cube
use crate::matrix::Mat4;

/// Fixed forward offset carried in the depth row of the view matrix.
pub const DEPTH_OFFSET: f32 = 5.0;

/// Fraction of the shorter terminal dimension used as the cube's half-extent.
const SCALE_DIVISOR: f32 = 6.0;

/// Terminal dimensions in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: u16,
    pub columns: u16,
}

impl Viewport {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self { rows, columns }
    }

    /// Half-extent of the unrotated cube in cells
    pub fn scale(&self) -> f32 {
        f32::from(self.rows.min(self.columns)) / SCALE_DIVISOR
    }

    /// Screen cell the cube's origin maps to, as `(x, y)`
    pub fn center(&self) -> (f32, f32) {
        (
            f32::from(self.columns / 2),
            f32::from(self.rows / 2),
        )
    }

    /// Scale and translation from cube space into terminal cells.
    ///
    /// Orthographic with an offset: depth is scaled and shifted by
    /// [`DEPTH_OFFSET`] but never divides x or y.
    pub fn view_matrix(&self) -> Mat4 {
        let s = self.scale();
        let (cx, cy) = self.center();

        #[rustfmt::skip]
        let view = Mat4::new(
            s,   0.0, 0.0, cx,
            0.0, s,   0.0, cy,
            0.0, 0.0, s,   DEPTH_OFFSET,
            0.0, 0.0, 0.0, 1.0,
        );
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector4;

    #[test]
    fn test_scale_uses_shorter_side() {
        assert!((Viewport::new(24, 80).scale() - 4.0).abs() < 1e-6);
        assert!((Viewport::new(120, 30).scale() - 5.0).abs() < 1e-6);
        assert!((Viewport::new(25, 80).scale() - 25.0 / 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_center_uses_whole_cells() {
        assert_eq!(Viewport::new(24, 80).center(), (40.0, 12.0));
        assert_eq!(Viewport::new(25, 81).center(), (40.0, 12.0));
    }

    #[test]
    fn test_view_maps_origin_to_center() {
        let view = Viewport::new(24, 80).view_matrix();
        let p = view * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(p, Vector4::new(40.0, 12.0, DEPTH_OFFSET, 1.0));
    }

    #[test]
    fn test_view_scales_corners() {
        let view = Viewport::new(24, 80).view_matrix();
        let p = view * Vector4::new(1.0, -1.0, 1.0, 1.0);
        assert!((p - Vector4::new(44.0, 8.0, 9.0, 1.0)).norm() < 1e-6);
    }
}
