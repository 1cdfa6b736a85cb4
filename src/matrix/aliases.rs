//! Type aliases for the sizes the decompositions work with.

use crate::matrix::vector::Vector;
use crate::Matrix;

/// 3×3 matrix, the operand and result type of every decomposition.
pub type Matrix3<T> = Matrix<T, 3, 3>;

/// A 3-element row vector.
pub type Vector3<T> = Vector<T, 3>;
