use core::fmt::{self, Write as _};

use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use svd3::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::eye());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self
    where
        T: Copy + Default,
    {
        let mut data = [[T::default(); M]; N];
        for (j, column) in data.iter_mut().enumerate() {
            for (i, entry) in column.iter_mut().enumerate() {
                *entry = f(i, j);
            }
        }
        Self { data }
    }
}

// ── Columns ─────────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Extract column `j` as a row vector.
    ///
    /// ```
    /// use svd3::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let c = m.col(1);
    /// assert_eq!(c[0], 2.0);
    /// assert_eq!(c[1], 4.0);
    /// ```
    #[inline]
    pub fn col(&self, j: usize) -> Vector<T, M> {
        Vector::from_array(self.data[j])
    }

    /// Set column `j` from a row vector.
    #[inline]
    pub fn set_col(&mut self, j: usize, v: &Vector<T, M>) {
        for i in 0..M {
            self.data[j][i] = v[i];
        }
    }
}

impl<T: FloatScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// `true` when no entry is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().flatten().all(|x| x.is_finite())
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Max width per column for alignment
        let mut widths = [0usize; N];
        for (j, width) in widths.iter_mut().enumerate() {
            for i in 0..M {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)]));
                *width = (*width).max(w);
            }
        }

        for i in 0..M {
            write!(f, "│")?;
            for (j, width) in widths.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = *width)?;
            }
            write!(f, "│")?;
            if i + 1 < M {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Counts characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn() {
        let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| if i == j { 1.0 } else { 0.0 });
        assert_eq!(m, Matrix::eye());
        let r: Matrix<f64, 2, 3> = Matrix::from_fn(|i, j| (10 * i + j) as f64);
        assert_eq!(r[(1, 2)], 12.0);
    }

    #[test]
    fn col_access() {
        let mut m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let c1 = m.col(1);
        assert_eq!(c1[0], 2.0);
        assert_eq!(c1[1], 5.0);

        m.set_col(2, &Vector::from_array([7.0, 8.0]));
        assert_eq!(m[(0, 2)], 7.0);
        assert_eq!(m[(1, 2)], 8.0);
    }

    #[test]
    fn finiteness() {
        let mut m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        assert!(m.is_finite());
        m[(1, 0)] = f64::NAN;
        assert!(!m.is_finite());
        m[(1, 0)] = f64::NEG_INFINITY;
        assert!(!m.is_finite());
    }

    #[test]
    fn display_alignment() {
        let m = Matrix::new([[1, 100], [1000, 2]]);
        let s = format!("{}", m);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }
}
