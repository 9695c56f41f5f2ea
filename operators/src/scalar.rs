//! Scalar operators and their backward functions.
//!
//! Every function here takes plain scalars and returns a scalar (or a
//! `bool` for comparisons). Differentiable operators whose derivative
//! is not just a sign flip or a pass-through come with a `*_back`
//! companion:
//!
//! | Forward | Backward `f_back(a, d)` |
//! |---------|--------------------------|
//! | `log(a)` | `d / a` |
//! | `inv(a)` | `-d / a²` |
//! | `relu(a)` | `d` if `a > 0` else `0` |
//! | `sigmoid(a)` | `d · σ(a) · (1 - σ(a))` |
//! | `exp(a)` | `d · eᵃ` |
//!
//! Backward functions take the **original input** `a`, never the
//! forward output, and return `upstream · f′(a)`. The tape that calls
//! them is responsible for saving `a` during the forward pass.
//!
//! # Example
//!
//! ```
//! use operators::scalar::{inv, inv_back, is_close, log, log_back};
//!
//! let a = 4.0;
//! assert_eq!(log_back(a, 2.0).unwrap(), 0.5);
//! assert_eq!(inv_back(a, 1.0).unwrap(), -0.0625);
//! assert!(is_close(inv(inv(a).unwrap()).unwrap(), a));
//! assert!(log(0.0).is_err());
//! ```

use num_traits::{Float, NumCast};

use crate::error::{OperatorError, OperatorResult};

/// Tolerance used by [`is_close`].
///
/// Deliberately loose: it is meant for approximate comparisons in
/// tests, not for precise control flow.
pub const IS_CLOSE_TOLERANCE: f64 = 1e-2;

/// Converts an `f64` constant into `T`.
fn lit<T: Float>(x: f64) -> T {
    <T as NumCast>::from(x).unwrap_or_else(T::nan)
}

/// Widens `a` to `f64` for error reporting.
fn widen<T: Float>(a: T) -> f64 {
    a.to_f64().unwrap_or(f64::NAN)
}

/// Records a failed call and hands the error back.
fn fail<T>(err: OperatorError) -> OperatorResult<T> {
    debug_log!("{} rejected its input: {}", err.op(), err);
    Err(err)
}

/// Returns `a * b`.
#[inline]
pub fn mul<T: Float>(a: T, b: T) -> T {
    a * b
}

/// Returns `a` unchanged.
#[inline]
pub fn id<T: Float>(a: T) -> T {
    a
}

/// Returns `a + b`.
#[inline]
pub fn add<T: Float>(a: T, b: T) -> T {
    a + b
}

/// Returns `-a`.
#[inline]
pub fn neg<T: Float>(a: T) -> T {
    -a
}

/// Strict less-than.
#[inline]
pub fn lt<T: Float>(a: T, b: T) -> bool {
    a < b
}

/// Exact equality. Use [`is_close`] for approximate comparison.
#[inline]
pub fn eq<T: Float>(a: T, b: T) -> bool {
    a == b
}

/// Returns `a` if `b < a`, else `b`.
///
/// Ties resolve to `b`, which only matters for signed zeros:
///
/// ```
/// use operators::scalar::max;
///
/// assert_eq!(max(1.0, 2.0), 2.0);
/// assert!(max(0.0_f64, -0.0).is_sign_negative());
/// ```
#[inline]
pub fn max<T: Float>(a: T, b: T) -> T {
    if lt(b, a) {
        a
    } else {
        b
    }
}

/// `|a - b| < 1e-2`.
#[inline]
pub fn is_close<T: Float>(a: T, b: T) -> bool {
    is_close_within(a, b, lit(IS_CLOSE_TOLERANCE))
}

/// `|a - b| < tol`.
#[inline]
pub fn is_close_within<T: Float>(a: T, b: T, tol: T) -> bool {
    (a - b).abs() < tol
}

/// The logistic sigmoid `1 / (1 + e⁻ᵃ)`, in `[0, 1]`.
///
/// Moderate inputs land strictly inside `(0, 1)`. At `f64` the result
/// saturates to exactly `1` for `a ≳ 37` and to `0` for `a ≲ -745`.
///
/// The formula is picked by the sign of `a` so that the exponential
/// never overflows:
///
/// - `a >= 0`: `1 / (1 + e⁻ᵃ)`
/// - `a < 0`: `eᵃ / (1 + eᵃ)`
///
/// ```
/// use operators::scalar::sigmoid;
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert!(sigmoid(-800.0_f64).is_finite());
/// assert!(sigmoid(800.0_f64) <= 1.0);
/// ```
pub fn sigmoid<T: Float>(a: T) -> T {
    if a >= T::zero() {
        T::one() / (T::one() + (-a).exp())
    } else {
        let e = a.exp();
        e / (T::one() + e)
    }
}

/// `max(0, a)`.
#[inline]
pub fn relu<T: Float>(a: T) -> T {
    max(T::zero(), a)
}

/// Natural logarithm.
///
/// # Errors
///
/// [`OperatorError::Domain`] when `a <= 0`. NaN propagates.
pub fn log<T: Float>(a: T) -> OperatorResult<T> {
    if a <= T::zero() {
        return fail(OperatorError::Domain {
            op: "log",
            value: widen(a),
        });
    }
    Ok(a.ln())
}

/// `eᵃ`.
#[inline]
pub fn exp<T: Float>(a: T) -> T {
    a.exp()
}

/// Backward of [`log`]: `upstream / a`.
///
/// # Errors
///
/// [`OperatorError::DivisionByZero`] when `a == 0`.
pub fn log_back<T: Float>(a: T, upstream: T) -> OperatorResult<T> {
    if a == T::zero() {
        return fail(OperatorError::DivisionByZero { op: "log_back" });
    }
    Ok(upstream / a)
}

/// Reciprocal `1 / a`.
///
/// # Errors
///
/// [`OperatorError::DivisionByZero`] when `a == 0` (either sign).
pub fn inv<T: Float>(a: T) -> OperatorResult<T> {
    if a == T::zero() {
        return fail(OperatorError::DivisionByZero { op: "inv" });
    }
    Ok(T::one() / a)
}

/// Backward of [`inv`]: `-upstream / a²`.
///
/// # Errors
///
/// [`OperatorError::DivisionByZero`] when `a²` is zero, which
/// includes inputs so small that squaring them underflows.
pub fn inv_back<T: Float>(a: T, upstream: T) -> OperatorResult<T> {
    let sq = a * a;
    if sq == T::zero() {
        return fail(OperatorError::DivisionByZero { op: "inv_back" });
    }
    Ok(-upstream / sq)
}

/// Backward of [`relu`]: `upstream` if `a > 0`, else `0`.
///
/// The subgradient at `a == 0` is taken to be `0`.
#[inline]
pub fn relu_back<T: Float>(a: T, upstream: T) -> T {
    if a > T::zero() {
        upstream
    } else {
        T::zero()
    }
}

/// Backward of [`sigmoid`]: `upstream · σ(a) · (1 - σ(a))`.
pub fn sigmoid_back<T: Float>(a: T, upstream: T) -> T {
    let s = sigmoid(a);
    upstream * s * (T::one() - s)
}

/// Backward of [`exp`]: `upstream · eᵃ`.
#[inline]
pub fn exp_back<T: Float>(a: T, upstream: T) -> T {
    upstream * a.exp()
}
