//! # svd3
//!
//! Branch-light 3×3 singular value decomposition, no-std compatible, no heap
//! allocation. Built from a Jacobi eigenanalysis with approximate Givens
//! rotations, a closed-form three-rotation QR, and an orientation-preserving
//! column sort.
//!
//! ## Quick start
//!
//! ```
//! use svd3::Matrix3;
//!
//! let a = Matrix3::new([
//!     [2.0_f64, 1.0, -1.0],
//!     [-3.0, -1.0, 2.0],
//!     [-2.0, 1.0, 2.0],
//! ]);
//! let svd = a.svd3();
//! let s = svd.singular_values();
//! assert!(s[0] >= s[1] && s[1] >= s[2] && s[2] >= 0.0);
//! assert!((svd.reconstruct() - a).frobenius_norm() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`linalg`] — The decompositions. Free functions [`linalg::svd`],
//!   [`linalg::qr_decomposition`], [`linalg::jacobi_eigenanalysis`] return
//!   plain tuples; [`linalg::Svd3`], [`linalg::QrDecomposition3`] and
//!   [`linalg::SymmetricEigen3`] wrap the same results with accessors.
//!   The building blocks [`linalg::approximate_givens`],
//!   [`linalg::qr_givens`] and [`linalg::sort_singular_values`] are public.
//!
//! - [`matrix`] — Fixed-size `Matrix<T, M, N>` with const-generic
//!   dimensions and column-major storage. [`Vector<T, N>`] is a 1-row
//!   matrix; [`Matrix3`] and [`Vector3`] are the sizes the decompositions
//!   use.
//!
//! - [`quaternion`] — Scalar-first `[w, x, y, z]` quaternion. Hamilton
//!   product, conversion to rotation matrices, and the sparse per-axis
//!   composition the Jacobi sweeps accumulate with.
//!
//! - [`traits`] — [`Scalar`] for all matrix elements, [`FloatScalar`] for
//!   `f32` / `f64`. Every decomposition is generic over `FloatScalar`.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm; `std::error::Error` for `LinalgError` |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod linalg;
pub mod matrix;
pub mod quaternion;
pub mod traits;

pub use matrix::aliases::{Matrix3, Vector3};
pub use matrix::vector::Vector;
pub use matrix::Matrix;
pub use quaternion::Quaternion;
pub use traits::{FloatScalar, Scalar};
