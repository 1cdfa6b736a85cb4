use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by everything that needs `sqrt`, `abs`, trigonometry or
/// ordered comparisons: quaternions, norms, and all decompositions.
/// The decompositions are written once against this trait and run at
/// either `f32` or `f64` width.
pub trait FloatScalar: Scalar + Float {
    /// Convert an `f64` literal into `Self`.
    ///
    /// Infallible for `f32` and `f64`; used for algorithm constants.
    #[inline]
    fn lit(x: f64) -> Self {
        <Self as num_traits::NumCast>::from(x).unwrap_or_else(Self::nan)
    }
}

impl<T: Scalar + Float> FloatScalar for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic_half<T: FloatScalar>() -> T {
        T::lit(0.5)
    }

    #[test]
    fn literal_conversion() {
        assert_eq!(generic_half::<f64>(), 0.5);
        assert_eq!(generic_half::<f32>(), 0.5_f32);
        assert_eq!(f32::lit(1e-6), 1e-6_f32);
    }

    #[test]
    fn integers_are_scalars() {
        fn zero<T: Scalar>() -> T {
            T::zero()
        }
        assert_eq!(zero::<i32>(), 0);
        assert_eq!(zero::<u8>(), 0);
    }
}
