/// Fixed-shape matrix primitives used by the per-frame pipeline
///
/// Shapes live in the type, so an incompatible multiply or copy does not
/// compile. Every operation writes into caller-owned storage; nothing here
/// allocates.
use nalgebra::SMatrix;

/// Width of the unrolled block in the inner product loop.
const UNROLL: usize = 4;

/// 4×4 homogeneous transform.
pub type Mat4 = SMatrix<f32, 4, 4>;

/// Eight homogeneous points stored as columns.
pub type Mat4x8 = SMatrix<f32, 4, 8>;

/// Dense product `out = a · b`.
///
/// `out` is borrowed mutably while `a` and `b` are shared borrows, so the
/// destination can never be one of the operands.
pub fn multiply<const R: usize, const K: usize, const C: usize>(
    out: &mut SMatrix<f32, R, C>,
    a: &SMatrix<f32, R, K>,
    b: &SMatrix<f32, K, C>,
) {
    let blocked = K - K % UNROLL;

    for r in 0..R {
        for c in 0..C {
            let mut sum = 0.0;

            let mut i = 0;
            while i < blocked {
                sum += a[(r, i)] * b[(i, c)];
                sum += a[(r, i + 1)] * b[(i + 1, c)];
                sum += a[(r, i + 2)] * b[(i + 2, c)];
                sum += a[(r, i + 3)] * b[(i + 3, c)];
                i += UNROLL;
            }
            for i in blocked..K {
                sum += a[(r, i)] * b[(i, c)];
            }

            out[(r, c)] = sum;
        }
    }
}

/// Element-wise copy between matrices of the same shape.
pub fn copy<const R: usize, const C: usize>(
    dest: &mut SMatrix<f32, R, C>,
    source: &SMatrix<f32, R, C>,
) {
    dest.copy_from(source);
}

/// Copy the flat storage of `source` into `dest` when the shapes differ but
/// the element counts agree.
///
/// # Panics
///
/// Panics if `R1 * C1 != R2 * C2`.
pub fn copy_reshaped<const R1: usize, const C1: usize, const R2: usize, const C2: usize>(
    dest: &mut SMatrix<f32, R1, C1>,
    source: &SMatrix<f32, R2, C2>,
) {
    assert_eq!(
        R1 * C1,
        R2 * C2,
        "reshaping copy needs equal element counts"
    );
    dest.as_mut_slice().copy_from_slice(source.as_slice());
}
