use crate::matrix::aliases::Matrix3;
use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// Extract the diagonal as a vector.
    pub fn diag(&self) -> Vector<T, N> {
        let mut v = Vector::zeros();
        for i in 0..N {
            v[i] = self[(i, i)];
        }
        v
    }

    /// Create a diagonal matrix from a vector.
    pub fn from_diag(v: &Vector<T, N>) -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m[(i, i)] = v[i];
        }
        m
    }
}

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Frobenius distance of `AᵀA` from the identity.
    ///
    /// Zero (up to rounding) exactly when the columns are orthonormal.
    pub fn orthonormality_error(&self) -> T {
        (self.transpose() * *self - Self::eye()).frobenius_norm()
    }
}

impl<T: Scalar> Matrix3<T> {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// ```
    /// use svd3::Matrix3;
    /// let a = Matrix3::new([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, -1.0]]);
    /// assert_eq!(a.det(), -6.0);
    /// ```
    pub fn det(&self) -> T {
        let m = self;
        m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
            - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
            + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
    }
}
