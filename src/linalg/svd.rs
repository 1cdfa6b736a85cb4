use crate::linalg::jacobi::{JacobiSettings, SymmetricEigen3};
use crate::linalg::qr::QrDecomposition3;
use crate::linalg::LinalgError;
use crate::matrix::aliases::{Matrix3, Vector3};
use crate::traits::FloatScalar;

/// Swap columns `i` and `j` with a sign flip: `(c_i, c_j) ← (c_j, −c_i)`.
/// A quarter turn in the `(i, j)` plane, so the determinant is unchanged.
fn signed_swap<T: FloatScalar>(m: &mut Matrix3<T>, i: usize, j: usize) {
    let (ci, cj) = (m.col(i), m.col(j));
    m.set_col(i, &cj);
    m.set_col(j, &(-ci));
}

/// Order the columns of `b` by descending squared norm, permuting `v`
/// alongside.
///
/// Uses a three-comparator network `(0,1)`, `(0,2)`, `(1,2)` of signed
/// swaps, so `det v` is preserved and `b·vᵀ` is unchanged.
///
/// ```
/// use svd3::Matrix3;
/// use svd3::linalg::sort_singular_values;
///
/// let b = Matrix3::new([[1.0_f64, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 2.0]]);
/// let (b2, v2) = sort_singular_values(&b, &Matrix3::eye());
/// assert_eq!(b2.col(0).norm(), 3.0);
/// assert_eq!(b2.col(1).norm(), 2.0);
/// assert_eq!(v2.det(), 1.0);
/// ```
pub fn sort_singular_values<T: FloatScalar>(
    b: &Matrix3<T>,
    v: &Matrix3<T>,
) -> (Matrix3<T>, Matrix3<T>) {
    let (mut b, mut v) = (*b, *v);
    let mut rho1 = b.col(0).norm_squared();
    let mut rho2 = b.col(1).norm_squared();
    let mut rho3 = b.col(2).norm_squared();

    if rho1 < rho2 {
        signed_swap(&mut b, 0, 1);
        signed_swap(&mut v, 0, 1);
        core::mem::swap(&mut rho1, &mut rho2);
    }
    if rho1 < rho3 {
        signed_swap(&mut b, 0, 2);
        signed_swap(&mut v, 0, 2);
        core::mem::swap(&mut rho1, &mut rho3);
    }
    if rho2 < rho3 {
        signed_swap(&mut b, 1, 2);
        signed_swap(&mut v, 1, 2);
    }
    (b, v)
}

/// Singular value decomposition of a 3×3 matrix.
///
/// `A = U·S·Vᵀ` with `S = diag(σ₀, σ₁, σ₂)`, `σ₀ ≥ σ₁ ≥ σ₂ ≥ 0`, `V` a
/// proper rotation and `U` orthonormal with `det U = sign(det A)`.
///
/// Computed by Jacobi eigenanalysis of `AᵀA` for `V`, sorting the columns
/// of `B = A·V`, and a Givens QR of `B` for `U` and the singular values.
/// Negative diagonal entries of `R` are moved into `U` by flipping the
/// matching column.
///
/// `A` is first divided by its largest absolute entry, and the QR rotates
/// every pair above machine epsilon of that normalized scale. The result
/// is therefore the same, up to rounding, for `A` and `k·A`.
///
/// # Example
///
/// ```
/// use svd3::Matrix3;
/// use svd3::linalg::Svd3;
///
/// let a = Matrix3::new([[2.0_f64, 0.0, 1.0], [0.0, -3.0, 0.0], [1.0, 0.0, 2.0]]);
/// let svd = Svd3::new(&a);
/// let s = svd.singular_values();
/// assert!((s[0] - 3.0).abs() < 1e-12);
/// assert!((s[1] - 3.0).abs() < 1e-12);
/// assert!((s[2] - 1.0).abs() < 1e-12);
/// assert!((svd.reconstruct() - a).frobenius_norm() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Svd3<T> {
    u: Matrix3<T>,
    sigma: Vector3<T>,
    v: Matrix3<T>,
}

impl<T: FloatScalar> Svd3<T> {
    /// Decompose with [`JacobiSettings::default`]. Never fails; non-finite
    /// input propagates into the factors.
    pub fn new(a: &Matrix3<T>) -> Self {
        Self::with_settings(a, &JacobiSettings::default())
    }

    /// Decompose with an explicit Jacobi schedule.
    pub fn with_settings(a: &Matrix3<T>, settings: &JacobiSettings<T>) -> Self {
        Self::decompose(a, settings).0
    }

    /// Checked decomposition with default settings.
    pub fn try_new(a: &Matrix3<T>) -> Result<Self, LinalgError> {
        Self::try_with_settings(a, &JacobiSettings::default())
    }

    /// Checked decomposition.
    ///
    /// Returns `Err(NonFinite)` for NaN or infinite entries and
    /// `Err(ConvergenceFailure)` when the eigenanalysis of `AᵀA` ends above
    /// `settings.tolerance`.
    pub fn try_with_settings(
        a: &Matrix3<T>,
        settings: &JacobiSettings<T>,
    ) -> Result<Self, LinalgError> {
        if !a.is_finite() {
            return Err(LinalgError::NonFinite);
        }
        let (svd, eig) = Self::decompose(a, settings);
        if !eig.converged() {
            return Err(LinalgError::ConvergenceFailure);
        }
        Ok(svd)
    }

    fn decompose(a: &Matrix3<T>, settings: &JacobiSettings<T>) -> (Self, SymmetricEigen3<T>) {
        // work on A / max|a_ij| so the QR cut-off is relative to A
        let scale = a.max_abs();
        let a = if scale > T::zero() {
            *a * (T::one() / scale)
        } else {
            *a
        };

        let ata = a.transpose() * a;
        let eig = SymmetricEigen3::with_settings(&ata, settings);

        let b = a * eig.eigenvectors();
        let (b, v) = sort_singular_values(&b, &eig.eigenvectors());
        let (mut u, r) = QrDecomposition3::with_cutoff(&b, T::epsilon()).into_parts();

        let mut sigma = r.diag();
        for k in 0..3 {
            if sigma[k] < T::zero() {
                sigma[k] = -sigma[k];
                let flipped = -u.col(k);
                u.set_col(k, &flipped);
            }
        }
        if scale > T::zero() {
            sigma = sigma * scale;
        }

        (Self { u, sigma, v }, eig)
    }

    /// Left singular vectors (columns).
    #[inline]
    pub fn u(&self) -> &Matrix3<T> {
        &self.u
    }

    /// Right singular vectors (columns).
    #[inline]
    pub fn v(&self) -> &Matrix3<T> {
        &self.v
    }

    #[inline]
    pub fn vt(&self) -> Matrix3<T> {
        self.v.transpose()
    }

    /// Diagonal singular value matrix `S`.
    pub fn s(&self) -> Matrix3<T> {
        Matrix3::from_diag(&self.sigma)
    }

    /// Singular values, descending.
    #[inline]
    pub fn singular_values(&self) -> [T; 3] {
        [self.sigma[0], self.sigma[1], self.sigma[2]]
    }

    /// Number of singular values above `tol`.
    pub fn rank(&self, tol: T) -> usize {
        self.singular_values().iter().filter(|&&s| s > tol).count()
    }

    /// `σ₀ / σ₂`; infinite for singular input, NaN for the zero matrix.
    pub fn condition_number(&self) -> T {
        self.sigma[0] / self.sigma[2]
    }

    /// Moore–Penrose pseudo-inverse `V·S⁺·Uᵀ`, treating singular values at
    /// or below `tol` as zero.
    ///
    /// ```
    /// use svd3::Matrix3;
    /// let a = Matrix3::new([[4.0_f64, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.5]]);
    /// let p = a.svd3().pseudo_inverse(1e-12);
    /// assert!((p[(0, 0)] - 0.25).abs() < 1e-12);
    /// assert!(p[(1, 1)].abs() < 1e-12);
    /// assert!((p[(2, 2)] - 2.0).abs() < 1e-12);
    /// ```
    pub fn pseudo_inverse(&self, tol: T) -> Matrix3<T> {
        let mut inv = Vector3::zeros();
        for k in 0..3 {
            if self.sigma[k] > tol {
                inv[k] = T::one() / self.sigma[k];
            }
        }
        self.v * Matrix3::from_diag(&inv) * self.u.transpose()
    }

    /// `U·S·Vᵀ`.
    pub fn reconstruct(&self) -> Matrix3<T> {
        self.u * self.s() * self.v.transpose()
    }

    /// Consume into `(U, S, V)`.
    pub fn into_parts(self) -> (Matrix3<T>, Matrix3<T>, Matrix3<T>) {
        let s = self.s();
        (self.u, s, self.v)
    }
}

/// Singular value decomposition. Returns `(U, S, V)` with `A ≈ U·S·Vᵀ`;
/// see [`Svd3`].
///
/// ```
/// use svd3::Matrix3;
/// use svd3::linalg::svd;
///
/// let a = Matrix3::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
/// let (u, s, v) = svd(&a);
/// assert!((u * s * v.transpose() - a).frobenius_norm() < 1e-12);
/// assert!(s[(0, 0)] >= s[(1, 1)] && s[(1, 1)] >= s[(2, 2)]);
/// ```
pub fn svd<T: FloatScalar>(a: &Matrix3<T>) -> (Matrix3<T>, Matrix3<T>, Matrix3<T>) {
    Svd3::new(a).into_parts()
}

impl<T: FloatScalar> Matrix3<T> {
    /// Singular value decomposition with default settings. See [`Svd3`].
    pub fn svd3(&self) -> Svd3<T> {
        Svd3::new(self)
    }
}
