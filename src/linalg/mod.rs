//! 3×3 decompositions: Givens rotations, Jacobi eigenanalysis, QR and SVD.
//!
//! Every routine works on stack values and is total over finite input.
//! The free functions return plain tuples; the `*3` structs wrap the same
//! results with accessors and derived quantities.

pub(crate) mod givens;
pub(crate) mod jacobi;
pub(crate) mod qr;
pub(crate) mod svd;

pub use givens::{approximate_givens, qr_givens};
pub use jacobi::{jacobi_eigenanalysis, JacobiSettings, SymmetricEigen3};
pub use qr::{qr_decomposition, QrDecomposition3};
pub use svd::{sort_singular_values, svd, Svd3};

/// Errors from the checked decomposition entry points.
///
/// The plain functions never fail; [`Svd3::try_new`] and
/// [`Svd3::try_with_settings`] validate their input and result.
///
/// ```
/// use svd3::Matrix3;
/// use svd3::linalg::{LinalgError, Svd3};
///
/// let mut a = Matrix3::<f64>::eye();
/// a[(1, 2)] = f64::NAN;
/// assert_eq!(Svd3::try_new(&a).unwrap_err(), LinalgError::NonFinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Input contains NaN or an infinity.
    NonFinite,
    /// Jacobi sweeps ran out before the off-diagonal residual met the tolerance.
    ConvergenceFailure,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::NonFinite => write!(f, "matrix contains non-finite entries"),
            LinalgError::ConvergenceFailure => {
                write!(f, "jacobi sweeps did not reach the requested tolerance")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            format!("{}", LinalgError::NonFinite),
            "matrix contains non-finite entries"
        );
        assert!(format!("{}", LinalgError::ConvergenceFailure).contains("tolerance"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn error_is_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(LinalgError::ConvergenceFailure);
        assert!(e.source().is_none());
    }
}
