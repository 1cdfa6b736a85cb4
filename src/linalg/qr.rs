use crate::linalg::givens::{qr_givens_with_cutoff, QR_EPSILON};
use crate::matrix::aliases::Matrix3;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Full rotation `(c, s)` from a half-angle pair.
#[inline]
fn double_angle<T: FloatScalar>(ch: T, sh: T) -> (T, T) {
    (T::one() - T::lit(2.0) * sh * sh, T::lit(2.0) * ch * sh)
}

/// Rotate rows `p` and `k` of `r` in place:
/// `row_p ← c·row_p + s·row_k`, `row_k ← −s·row_p + c·row_k`.
fn rotate_rows<T: FloatScalar>(r: &mut Matrix3<T>, p: usize, k: usize, c: T, s: T) {
    for j in 0..3 {
        let (rp, rk) = (r[(p, j)], r[(k, j)]);
        r[(p, j)] = c * rp + s * rk;
        r[(k, j)] = -s * rp + c * rk;
    }
}

/// Eliminate `r[(k, col)]` against the pivot `r[(p, col)]`.
/// Returns the `(c, s)` of the applied rotation.
fn eliminate<T: FloatScalar>(
    r: &mut Matrix3<T>,
    p: usize,
    k: usize,
    col: usize,
    eps: T,
) -> (T, T) {
    let (ch, sh) = qr_givens_with_cutoff(r[(p, col)], r[(k, col)], eps);
    let (c, s) = double_angle(ch, sh);
    rotate_rows(r, p, k, c, s);
    (c, s)
}

/// QR decomposition of a 3×3 matrix by three Givens rotations.
///
/// `B = Q·R` with `Q` a proper rotation (`det Q = +1`) and `R` upper
/// triangular. The eliminations run in the order `(1,0)`, `(2,0)`,
/// `(2,1)`; `Q` is assembled in closed form from the three rotation
/// pairs rather than by multiplying them out.
///
/// `R[0,0]` and `R[1,1]` come out non-negative; `R[2,2]` carries the sign
/// of `det B`. Pairs whose radius is at most `1e-6` are left unrotated,
/// so their below-diagonal entry stays as it was.
///
/// # Example
///
/// ```
/// use svd3::Matrix3;
/// use svd3::linalg::QrDecomposition3;
///
/// let b = Matrix3::new([[12.0_f64, -51.0, 4.0], [6.0, 167.0, -68.0], [-4.0, 24.0, -41.0]]);
/// let qr = QrDecomposition3::new(&b);
/// let r = qr.r();
/// assert!(r[(1, 0)].abs() < 1e-12);
/// assert!(r[(2, 0)].abs() < 1e-12);
/// assert!(r[(2, 1)].abs() < 1e-12);
/// assert!((qr.q() * r - b).frobenius_norm() < 1e-10);
/// assert!((qr.det() - b.det()).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QrDecomposition3<T> {
    q: Matrix3<T>,
    r: Matrix3<T>,
}

impl<T: FloatScalar> QrDecomposition3<T> {
    /// Decompose `b`. Never fails.
    pub fn new(b: &Matrix3<T>) -> Self {
        Self::with_cutoff(b, T::lit(QR_EPSILON))
    }

    /// Decompose `b`, leaving pairs with radius at most `eps` unrotated.
    pub(crate) fn with_cutoff(b: &Matrix3<T>, eps: T) -> Self {
        let mut r = *b;
        let (a1, b1) = eliminate(&mut r, 0, 1, 0, eps);
        let (a2, b2) = eliminate(&mut r, 0, 2, 0, eps);
        let (a3, b3) = eliminate(&mut r, 1, 2, 1, eps);

        // Q = G1ᵀ·G2ᵀ·G3ᵀ, expanded
        let q = Matrix::new([
            [a1 * a2, -b1 * a3 - a1 * b2 * b3, b1 * b3 - a1 * b2 * a3],
            [b1 * a2, a1 * a3 - b1 * b2 * b3, -a1 * b3 - b1 * b2 * a3],
            [b2, a2 * b3, a2 * a3],
        ]);

        Self { q, r }
    }

    /// The orthonormal factor `Q`.
    #[inline]
    pub fn q(&self) -> &Matrix3<T> {
        &self.q
    }

    /// The upper-triangular factor `R`.
    #[inline]
    pub fn r(&self) -> &Matrix3<T> {
        &self.r
    }

    /// Determinant of the decomposed matrix, `R[0,0]·R[1,1]·R[2,2]`.
    pub fn det(&self) -> T {
        self.r[(0, 0)] * self.r[(1, 1)] * self.r[(2, 2)]
    }

    /// Consume into `(Q, R)`.
    pub fn into_parts(self) -> (Matrix3<T>, Matrix3<T>) {
        (self.q, self.r)
    }
}

/// Givens QR decomposition. Returns `(Q, R)`; see [`QrDecomposition3`].
pub fn qr_decomposition<T: FloatScalar>(b: &Matrix3<T>) -> (Matrix3<T>, Matrix3<T>) {
    QrDecomposition3::new(b).into_parts()
}

impl<T: FloatScalar> Matrix3<T> {
    /// Givens QR decomposition. See [`QrDecomposition3`].
    ///
    /// ```
    /// use svd3::Matrix3;
    /// let a = Matrix3::new([[0.0_f64, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    /// let qr = a.givens_qr();
    /// assert!((qr.det() + 1.0).abs() < 1e-12);
    /// ```
    pub fn givens_qr(&self) -> QrDecomposition3<T> {
        QrDecomposition3::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!(
            (a - b).abs() < tol,
            "{}: {} vs {} (diff {})",
            msg,
            a,
            b,
            (a - b).abs()
        );
    }

    fn check_qr(b: &Matrix3<f64>, tol: f64) {
        let qr = QrDecomposition3::new(b);
        let (q, r) = (qr.q(), qr.r());
        let scale = b.frobenius_norm().max(1.0);
        assert!(
            (*q * *r - *b).frobenius_norm() < tol * scale,
            "Q·R != B for\n{}",
            b
        );
        assert!(q.orthonormality_error() < tol, "Q not orthonormal");
        assert_near(q.det(), 1.0, tol, "det Q");
        for (i, j) in [(1, 0), (2, 0), (2, 1)] {
            assert!(r[(i, j)].abs() < tol * scale, "R[{},{}] = {}", i, j, r[(i, j)]);
        }
        assert!(r[(0, 0)] >= 0.0);
        assert!(r[(1, 1)] >= 0.0);
    }

    #[test]
    fn general() {
        check_qr(
            &Matrix3::new([[12.0, -51.0, 4.0], [6.0, 167.0, -68.0], [-4.0, 24.0, -41.0]]),
            1e-13,
        );
        check_qr(
            &Matrix3::new([[-1.0, 2.0, 0.5], [0.3, -4.0, 2.0], [2.0, 1.0, -3.0]]),
            1e-13,
        );
    }

    #[test]
    fn negative_pivots() {
        check_qr(
            &Matrix3::new([[-2.0, 1.0, 0.0], [-1.0, -3.0, 1.0], [-0.5, 2.0, -1.0]]),
            1e-13,
        );
        check_qr(&Matrix3::from_diag(&crate::Vector3::from_array([-1.0, -2.0, -3.0])), 1e-14);
    }

    #[test]
    fn closed_form_matches_product() {
        let b = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
        let mut r = b;
        let mut product = Matrix3::<f64>::eye();
        for (p, k, col) in [(0, 1, 0), (0, 2, 0), (1, 2, 1)] {
            let (c, s) = eliminate(&mut r, p, k, col, QR_EPSILON);
            let mut g = Matrix3::eye();
            g[(p, p)] = c;
            g[(p, k)] = s;
            g[(k, p)] = -s;
            g[(k, k)] = c;
            product = product * g.transpose();
        }
        let (q, _) = qr_decomposition(&b);
        assert!((q - product).frobenius_norm() < 1e-14);
    }

    #[test]
    fn det_sign() {
        let b = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
        let qr = b.givens_qr();
        assert_near(qr.det(), b.det(), 1e-12, "det");
        assert!(qr.r()[(2, 2)] < 0.0);
    }

    #[test]
    fn already_triangular() {
        let b = Matrix3::new([[2.0, 1.0, -1.0], [0.0, 3.0, 4.0], [0.0, 0.0, 5.0]]);
        let (q, r) = qr_decomposition(&b);
        assert!((q - Matrix3::eye()).frobenius_norm() < 1e-15);
        assert!((r - b).frobenius_norm() < 1e-14);
    }

    #[test]
    fn zero_matrix() {
        let (q, r) = qr_decomposition(&Matrix3::<f64>::zeros());
        assert_eq!(q, Matrix3::eye());
        assert_eq!(r, Matrix3::zeros());
    }

    #[test]
    fn rank_deficient() {
        // third row = row0 + row1
        check_qr(
            &Matrix3::new([[1.0, 2.0, 3.0], [-1.0, 0.5, 2.0], [0.0, 2.5, 5.0]]),
            1e-13,
        );
        // rank one
        check_qr(
            &Matrix3::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [-1.0, -2.0, -3.0]]),
            1e-13,
        );
    }

    #[test]
    fn cutoff_governs_small_input() {
        let b = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]) * 1e-8;
        let scale = b.frobenius_norm();

        // every pair is below the default radius: nothing rotates
        let (q, r) = qr_decomposition(&b);
        assert_eq!(q, Matrix3::eye());
        assert_eq!(r, b);

        let qr = QrDecomposition3::with_cutoff(&b, f64::EPSILON);
        let (q, r) = (qr.q(), qr.r());
        assert!((*q * *r - b).frobenius_norm() < 1e-14 * scale);
        assert!(q.orthonormality_error() < 1e-14);
        for (i, j) in [(1, 0), (2, 0), (2, 1)] {
            assert!(r[(i, j)].abs() < 1e-14 * scale, "R[{},{}] = {}", i, j, r[(i, j)]);
        }
    }

    #[test]
    fn f32_roundtrip() {
        let b = Matrix3::new([[12.0_f32, -51.0, 4.0], [6.0, 167.0, -68.0], [-4.0, 24.0, -41.0]]);
        let qr = b.givens_qr();
        let rel = (*qr.q() * *qr.r() - b).frobenius_norm() / b.frobenius_norm();
        assert!(rel < 1e-6);
        assert!(qr.q().orthonormality_error() < 1e-6);
    }
}
