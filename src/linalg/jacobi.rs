use crate::linalg::givens::approximate_givens;
use crate::matrix::aliases::Matrix3;
use crate::quaternion::{Axis, Quaternion};
use crate::traits::FloatScalar;
use crate::Matrix;

/// Sweep budget and stopping rule for [`SymmetricEigen3`].
///
/// `sweeps` full sweeps (three rotations each) always run. Further sweeps
/// run while the off-diagonal Frobenius norm exceeds
/// `tolerance · ‖M‖_F`, up to `max_sweeps` in total.
///
/// ```
/// use svd3::linalg::JacobiSettings;
/// let s = JacobiSettings::<f64>::default();
/// assert_eq!((s.sweeps, s.max_sweeps), (4, 10));
///
/// let tight = JacobiSettings { max_sweeps: 20, ..JacobiSettings::<f64>::default() };
/// assert_eq!(tight.sweeps, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JacobiSettings<T> {
    /// Sweeps that always run.
    pub sweeps: usize,
    /// Upper bound on sweeps, including the unconditional ones.
    pub max_sweeps: usize,
    /// Off-diagonal residual target, relative to `‖M‖_F`.
    pub tolerance: T,
}

impl<T: FloatScalar> Default for JacobiSettings<T> {
    fn default() -> Self {
        Self {
            sweeps: 4,
            max_sweeps: 10,
            tolerance: T::lit(8.0) * T::epsilon(),
        }
    }
}

impl<T: FloatScalar> JacobiSettings<T> {
    /// Exactly `sweeps` sweeps, no residual test.
    ///
    /// `fixed(4)` is the classic fixed-cost schedule of twelve rotations.
    pub fn fixed(sweeps: usize) -> Self {
        Self {
            sweeps,
            max_sweeps: sweeps,
            ..Self::default()
        }
    }
}

// ── Working storage ──────────────────────────────────────────────────

/// Lower triangle of a symmetric 3×3 matrix, relabeled in place as the
/// active 2×2 block moves around during a sweep.
#[derive(Debug, Clone, Copy)]
struct SymmetricEntries<T> {
    s11: T,
    s21: T,
    s22: T,
    s31: T,
    s32: T,
    s33: T,
}

impl<T: FloatScalar> SymmetricEntries<T> {
    fn from_lower(m: &Matrix3<T>) -> Self {
        Self {
            s11: m[(0, 0)],
            s21: m[(1, 0)],
            s22: m[(1, 1)],
            s31: m[(2, 0)],
            s32: m[(2, 1)],
            s33: m[(2, 2)],
        }
    }

    fn to_matrix(self) -> Matrix3<T> {
        Matrix::new([
            [self.s11, self.s21, self.s31],
            [self.s21, self.s22, self.s32],
            [self.s31, self.s32, self.s33],
        ])
    }

    fn off_diagonal_norm(&self) -> T {
        let sum = self.s21 * self.s21 + self.s31 * self.s31 + self.s32 * self.s32;
        (T::lit(2.0) * sum).sqrt()
    }

    /// Conjugate the (1,2) block by the rotation `[[a, -b], [b, a]]`, then
    /// relabel so the next plane of the cycle becomes the (1,2) block.
    fn rotate(&mut self, a: T, b: T) {
        let Self {
            s11,
            s21,
            s22,
            s31,
            s32,
            s33,
        } = *self;

        let r11 = a * (a * s11 + b * s21) + b * (a * s21 + b * s22);
        let r21 = a * (-b * s11 + a * s21) + b * (-b * s21 + a * s22);
        let r22 = -b * (-b * s11 + a * s21) + a * (-b * s21 + a * s22);
        let r31 = a * s31 + b * s32;
        let r32 = -b * s31 + a * s32;

        // indices (1, 2, 3) → (3, 1, 2)
        *self = Self {
            s11: r22,
            s21: r32,
            s22: s33,
            s31: r21,
            s32: r31,
            s33: r11,
        };
    }
}

// Axis of the accumulated rotation for each step of a sweep. The
// relabeling in `rotate` walks the planes (x,y), (y,z), (z,x).
const SWEEP_AXES: [Axis; 3] = [Axis::Z, Axis::X, Axis::Y];

/// One sweep: three approximate Givens rotations, one per off-diagonal
/// pair. Leaves the entries in their original labeling.
fn sweep<T: FloatScalar>(s: &mut SymmetricEntries<T>, q: &mut Quaternion<T>) {
    for axis in SWEEP_AXES {
        let (ch, sh) = approximate_givens(s.s11, s.s21, s.s22);
        let scale = ch * ch + sh * sh;
        let a = (ch * ch - sh * sh) / scale;
        let b = T::lit(2.0) * sh * ch / scale;

        *q = q.compose_axis_rotation(axis, ch, sh);
        s.rotate(a, b);
    }
}

// ── SymmetricEigen3 ──────────────────────────────────────────────────

/// Jacobi eigenanalysis of a symmetric 3×3 matrix.
///
/// Diagonalizes `M` by cyclic approximate Givens rotations, accumulating
/// the net rotation as a quaternion `q` so that `M' ≈ Rᵀ·M·R` with
/// `R = q.to_rotation_matrix()`. Only the lower triangle of `M` is read.
///
/// Eigenvalues come out in the order the rotations leave them, unsorted.
///
/// # Example
///
/// ```
/// use svd3::Matrix3;
/// use svd3::linalg::SymmetricEigen3;
///
/// let m = Matrix3::new([
///     [2.0_f64, 1.0, 0.0],
///     [1.0, 2.0, 0.0],
///     [0.0, 0.0, 5.0],
/// ]);
/// let eig = SymmetricEigen3::new(&m);
/// let mut ev = eig.eigenvalues();
/// ev.sort_by(|a, b| a.partial_cmp(b).unwrap());
/// assert!((ev[0] - 1.0).abs() < 1e-12);
/// assert!((ev[1] - 3.0).abs() < 1e-12);
/// assert!((ev[2] - 5.0).abs() < 1e-12);
/// assert!(eig.converged());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SymmetricEigen3<T> {
    diagonalized: Matrix3<T>,
    quaternion: Quaternion<T>,
    sweeps: usize,
    off_diagonal_norm: T,
    converged: bool,
}

impl<T: FloatScalar> SymmetricEigen3<T> {
    /// Decompose with [`JacobiSettings::default`].
    pub fn new(m: &Matrix3<T>) -> Self {
        Self::with_settings(m, &JacobiSettings::default())
    }

    /// Decompose with an explicit sweep schedule.
    ///
    /// Never fails. NaN input runs to `max_sweeps` and reports
    /// `converged() == false`.
    pub fn with_settings(m: &Matrix3<T>, settings: &JacobiSettings<T>) -> Self {
        let mut s = SymmetricEntries::from_lower(m);
        let mut q = Quaternion::identity();
        let threshold = settings.tolerance * s.to_matrix().frobenius_norm();
        // false for NaN, so non-finite input keeps sweeping to the cap
        let settled = |s: &SymmetricEntries<T>| s.off_diagonal_norm() <= threshold;

        let mut sweeps = 0;
        while sweeps < settings.sweeps {
            sweep(&mut s, &mut q);
            sweeps += 1;
        }
        while sweeps < settings.max_sweeps && !settled(&s) {
            sweep(&mut s, &mut q);
            sweeps += 1;
        }

        let off_diagonal_norm = s.off_diagonal_norm();
        Self {
            diagonalized: s.to_matrix(),
            quaternion: q,
            sweeps,
            off_diagonal_norm,
            converged: settled(&s),
        }
    }

    /// Diagonal of `M'`.
    pub fn eigenvalues(&self) -> [T; 3] {
        let d = &self.diagonalized;
        [d[(0, 0)], d[(1, 1)], d[(2, 2)]]
    }

    /// Rotation matrix `R`; column `k` is the eigenvector of `eigenvalues()[k]`.
    pub fn eigenvectors(&self) -> Matrix3<T> {
        self.quaternion.to_rotation_matrix()
    }

    /// Accumulated rotation.
    #[inline]
    pub fn quaternion(&self) -> Quaternion<T> {
        self.quaternion
    }

    /// The rotated matrix `M' ≈ Rᵀ·M·R`, including its residual off-diagonal.
    #[inline]
    pub fn diagonalized(&self) -> &Matrix3<T> {
        &self.diagonalized
    }

    /// Number of sweeps performed.
    #[inline]
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    /// Frobenius norm of the off-diagonal part of `M'`.
    #[inline]
    pub fn off_diagonal_norm(&self) -> T {
        self.off_diagonal_norm
    }

    /// Whether the residual met `tolerance · ‖M‖_F`.
    #[inline]
    pub fn converged(&self) -> bool {
        self.converged
    }
}

/// Approximately diagonalize a symmetric matrix.
///
/// Returns `(M', q)` with `M' ≈ Rᵀ·M·R`, `R` the rotation of `q`.
///
/// Uses [`JacobiSettings::default`]: four sweeps, then more (up to ten)
/// until the off-diagonal residual settles. This is not a fixed twelve-step
/// schedule; for exactly four sweeps use
/// `SymmetricEigen3::with_settings(m, &JacobiSettings::fixed(4))`.
pub fn jacobi_eigenanalysis<T: FloatScalar>(m: &Matrix3<T>) -> (Matrix3<T>, Quaternion<T>) {
    let eig = SymmetricEigen3::new(m);
    (eig.diagonalized, eig.quaternion)
}

impl<T: FloatScalar> Matrix3<T> {
    /// Jacobi eigenanalysis with default settings. See [`SymmetricEigen3`].
    ///
    /// ```
    /// use svd3::Matrix3;
    /// let m = Matrix3::new([[4.0_f64, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 9.0]]);
    /// let eig = m.jacobi_eigen();
    /// assert_eq!(eig.eigenvalues(), [4.0, 1.0, 9.0]);
    /// ```
    pub fn jacobi_eigen(&self) -> SymmetricEigen3<T> {
        SymmetricEigen3::new(self)
    }
}
