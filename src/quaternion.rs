use core::ops::Mul;

use crate::matrix::aliases::{Matrix3, Vector3};
use crate::traits::FloatScalar;
use crate::Matrix;

/// Coordinate axis, used to name the imaginary component a planar
/// rotation acts about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The next axis in cyclic order `X → Y → Z → X`.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::Z,
            Axis::Z => Axis::X,
        }
    }
}

/// Quaternion for 3D rotations.
///
/// Scalar-first convention: `[w, x, y, z]` where `w` is the scalar part
/// and `(x, y, z)` is the vector part. Rotations are represented by unit
/// quaternions; `q` and `-q` encode the same rotation.
///
/// ```
/// use svd3::{Quaternion, Vector3};
/// use core::f64::consts::FRAC_PI_2;
///
/// let q = Quaternion::from_axis_angle(Vector3::from_array([0.0, 0.0, 1.0]), FRAC_PI_2);
/// let r = q.to_rotation_matrix();
/// // x axis maps onto y
/// assert!((r[(1, 0)] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Identity quaternion (no rotation).
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// Rotation by `angle` radians about a unit `axis`.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let (s, c) = (angle * T::lit(0.5)).sin_cos();
        Self::new(c, axis[0] * s, axis[1] * s, axis[2] * s)
    }
}

// ── Components ───────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Imaginary component along `axis`.
    #[inline]
    pub fn component(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[inline]
    fn component_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Right-multiply by the planar rotation `ch + sh·e_axis`.
    ///
    /// Equivalent to `self * Quaternion::new(ch, sh·e_axis)` but touches
    /// only the components the sparse factor affects. With `k = axis`,
    /// `i = k.next()`, `j = i.next()`:
    ///
    /// ```text
    /// w'   = w·ch − v_k·sh
    /// v_k' = v_k·ch + w·sh
    /// v_i' = v_i·ch + v_j·sh
    /// v_j' = v_j·ch − v_i·sh
    /// ```
    ///
    /// ```
    /// use svd3::quaternion::{Axis, Quaternion};
    /// let q = Quaternion::new(0.9_f64, 0.1, -0.3, 0.2);
    /// let (ch, sh) = (0.8, 0.6);
    /// let fast = q.compose_axis_rotation(Axis::Y, ch, sh);
    /// let full = q * Quaternion::new(ch, 0.0, sh, 0.0);
    /// assert!((fast.w - full.w).abs() < 1e-15);
    /// assert!((fast.x - full.x).abs() < 1e-15);
    /// ```
    pub fn compose_axis_rotation(&self, axis: Axis, ch: T, sh: T) -> Self {
        let i = axis.next();
        let j = i.next();
        let (vk, vi, vj) = (self.component(axis), self.component(i), self.component(j));

        let mut out = *self;
        out.w = self.w * ch - vk * sh;
        *out.component_mut(axis) = vk * ch + self.w * sh;
        *out.component_mut(i) = vi * ch + vj * sh;
        *out.component_mut(j) = vj * ch - vi * sh;
        out
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Rotation matrix of a unit quaternion.
    ///
    /// The columns are the images of the coordinate axes. No
    /// normalization is applied; a non-unit quaternion yields a scaled,
    /// non-orthogonal matrix.
    pub fn to_rotation_matrix(&self) -> Matrix3<T> {
        let two = T::lit(2.0);
        let one = T::one();
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Matrix::new([
            [one - two * (yy + zz), two * (xy - wz), two * (xz + wy)],
            [two * (xy + wz), one - two * (xx + zz), two * (yz - wx)],
            [two * (xz - wy), two * (yz + wx), one - two * (xx + yy)],
        ])
    }
}

// ── Operators ────────────────────────────────────────────────────────

// Hamilton product
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        (*self).mul(*rhs)
    }
}

impl<T: core::fmt::Display> core::fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({} + {}i + {}j + {}k)", self.w, self.x, self.y, self.z)
    }
}
