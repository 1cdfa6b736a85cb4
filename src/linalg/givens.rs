use crate::traits::FloatScalar;

// 3 + 2√2: the stability threshold for the approximate rotation
const GAMMA: f64 = 5.828_427_124_746_19;
// cos(π/8), sin(π/8): half-angle pair of a 45° rotation
const C_STAR: f64 = 0.923_879_532_511_286_7;
const S_STAR: f64 = 0.382_683_432_365_089_8;

/// Radius below which [`qr_givens`] treats its pair as already reduced.
pub(crate) const QR_EPSILON: f64 = 1e-6;

/// Approximate half-angle Givens rotation for the symmetric block
/// `[[a11, a12], [a12, a22]]`.
///
/// Returns a normalized pair `(ch, sh)`. The full rotation it encodes,
/// `c = ch² − sh²`, `s = 2·ch·sh`, nearly annihilates `a12`. When the
/// diagonal difference is too small relative to `a12` for a stable
/// estimate, the fixed 45° pair `(cos π/8, sin π/8)` is returned. An
/// already diagonal block with equal diagonal entries yields `(1, 0)`.
///
/// ```
/// use svd3::linalg::approximate_givens;
/// let (ch, sh) = approximate_givens(3.0_f64, 0.0, 1.0);
/// assert_eq!((ch, sh), (1.0, 0.0));
/// let (ch, sh) = approximate_givens(2.0_f64, 1.0, 2.0);
/// assert!((ch * ch + sh * sh - 1.0).abs() < 1e-15);
/// ```
#[inline]
pub fn approximate_givens<T: FloatScalar>(a11: T, a12: T, a22: T) -> (T, T) {
    let ch = T::lit(2.0) * (a11 - a22);
    let sh = a12;

    if ch == T::zero() && sh == T::zero() {
        return (T::one(), T::zero());
    }

    if T::lit(GAMMA) * sh * sh < ch * ch {
        let w = T::one() / (ch * ch + sh * sh).sqrt();
        (ch * w, sh * w)
    } else {
        (T::lit(C_STAR), T::lit(S_STAR))
    }
}

/// Exact half-angle Givens rotation that annihilates `a2` in `(a1, a2)`.
///
/// Returns a normalized pair `(ch, sh)`; applying
/// `[[c, s], [−s, c]]` with `c = 1 − 2·sh²`, `s = 2·ch·sh` to the column
/// `(a1, a2)` gives `(ρ, 0)` with `ρ = √(a1² + a2²)` non-negative.
/// Pairs with `ρ ≤ 1e-6` are left unrotated.
///
/// ```
/// use svd3::linalg::qr_givens;
/// let (ch, sh) = qr_givens(3.0_f64, 4.0);
/// let (c, s) = (1.0 - 2.0 * sh * sh, 2.0 * ch * sh);
/// assert!((c * 3.0 + s * 4.0 - 5.0).abs() < 1e-14);
/// assert!((-s * 3.0 + c * 4.0).abs() < 1e-14);
/// ```
#[inline]
pub fn qr_givens<T: FloatScalar>(a1: T, a2: T) -> (T, T) {
    qr_givens_with_cutoff(a1, a2, T::lit(QR_EPSILON))
}

/// [`qr_givens`] with an explicit radius cut-off `eps`.
#[inline]
pub(crate) fn qr_givens_with_cutoff<T: FloatScalar>(a1: T, a2: T, eps: T) -> (T, T) {
    let rho = (a1 * a1 + a2 * a2).sqrt();

    let mut sh = if rho > eps { a2 } else { T::zero() };
    let mut ch = a1.abs() + rho.max(eps);
    let w = T::one() / (ch * ch + sh * sh).sqrt();
    ch = ch * w;
    sh = sh * w;

    if a1 < T::zero() {
        core::mem::swap(&mut ch, &mut sh);
    }
    (ch, sh)
}
