//! Forward/backward pairs for differentiable unary operators.
//!
//! A [`Differentiable`] bundles an operator's forward function with
//! its backward function so a tape can record *which* operator ran
//! and replay the matching derivative later. Both halves are plain
//! `fn` pointers: the record is `Copy`, has no state, and can be
//! shared freely between threads.
//!
//! # Example
//!
//! ```
//! use operators::pair::Differentiable;
//!
//! let op = Differentiable::<f64>::inv();
//!
//! // Forward pass: the tape saves the input.
//! let a = 2.0;
//! let y = op.forward(a).unwrap();
//! assert_eq!(y, 0.5);
//!
//! // Reverse pass: replay the saved input with an upstream gradient.
//! let grad = op.backward(a, 1.0).unwrap();
//! assert_eq!(grad, -0.25);
//! ```

use num_traits::Float;

use crate::error::OperatorResult;
use crate::scalar;

/// Signature of a forward function.
pub type Forward<T> = fn(T) -> OperatorResult<T>;

/// Signature of a backward function: `(original_input, upstream) -> downstream`.
pub type Backward<T> = fn(T, T) -> OperatorResult<T>;

/// A named unary operator together with its backward function.
///
/// The backward half assumes the same forward formula produced the
/// output, and must satisfy `backward(a, d) == d · f′(a)`.
#[derive(Clone, Copy, Debug)]
pub struct Differentiable<T> {
    name: &'static str,
    forward: Forward<T>,
    backward: Backward<T>,
}

impl<T: Float> Differentiable<T> {
    /// Pair up an arbitrary forward and backward function.
    pub fn new(name: &'static str, forward: Forward<T>, backward: Backward<T>) -> Self {
        Self {
            name,
            forward,
            backward,
        }
    }

    /// Natural logarithm.
    pub fn log() -> Self {
        Self::new("log", scalar::log, scalar::log_back)
    }

    /// Reciprocal.
    pub fn inv() -> Self {
        Self::new("inv", scalar::inv, scalar::inv_back)
    }

    /// Rectified linear unit.
    pub fn relu() -> Self {
        Self::new(
            "relu",
            |a| Ok(scalar::relu(a)),
            |a, d| Ok(scalar::relu_back(a, d)),
        )
    }

    /// Logistic sigmoid.
    pub fn sigmoid() -> Self {
        Self::new(
            "sigmoid",
            |a| Ok(scalar::sigmoid(a)),
            |a, d| Ok(scalar::sigmoid_back(a, d)),
        )
    }

    /// Exponential.
    pub fn exp() -> Self {
        Self::new(
            "exp",
            |a| Ok(scalar::exp(a)),
            |a, d| Ok(scalar::exp_back(a, d)),
        )
    }

    /// Every built-in pair.
    pub fn all() -> [Self; 5] {
        [
            Self::log(),
            Self::inv(),
            Self::relu(),
            Self::sigmoid(),
            Self::exp(),
        ]
    }

    /// The operator's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate the operator at `a`.
    pub fn forward(&self, a: T) -> OperatorResult<T> {
        (self.forward)(a)
    }

    /// Local gradient at the original input `a`, scaled by `upstream`.
    pub fn backward(&self, a: T, upstream: T) -> OperatorResult<T> {
        (self.backward)(a, upstream)
    }

    /// Run both halves at once, returning `(output, downstream_gradient)`.
    ///
    /// The forward error, if any, is reported before the backward
    /// function is tried.
    pub fn forward_backward(&self, a: T, upstream: T) -> OperatorResult<(T, T)> {
        let y = self.forward(a)?;
        let g = self.backward(a, upstream)?;
        Ok((y, g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OperatorError;
    use crate::scalar::is_close_within;

    #[test]
    fn names_are_distinct() {
        let names: Vec<_> = Differentiable::<f64>::all().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["log", "inv", "relu", "sigmoid", "exp"]);
    }

    #[test]
    fn log_pair_matches_scalar_functions() {
        let op = Differentiable::log();
        assert_eq!(op.forward(1.0).unwrap(), 0.0);
        assert_eq!(op.backward(4.0, 2.0).unwrap(), 0.5);
    }

    #[test]
    fn relu_pair_zero_subgradient() {
        let op = Differentiable::relu();
        assert_eq!(op.forward_backward(0.0, 7.0).unwrap(), (0.0, 0.0));
        assert_eq!(op.forward_backward(3.0, 7.0).unwrap(), (3.0, 7.0));
    }

    #[test]
    fn forward_error_short_circuits() {
        let op = Differentiable::log();
        assert_eq!(
            op.forward_backward(-1.0, 1.0),
            Err(OperatorError::Domain {
                op: "log",
                value: -1.0
            })
        );
    }

    #[test]
    fn every_pair_obeys_chain_rule() {
        // backward(a, d) == d * backward(a, 1)
        for op in Differentiable::<f64>::all() {
            for a in [0.3, 1.0, 2.5] {
                let unit = op.backward(a, 1.0).unwrap();
                let scaled = op.backward(a, -3.0).unwrap();
                assert!(
                    is_close_within(scaled, -3.0 * unit, 1e-12),
                    "{} at {}",
                    op.name(),
                    a
                );
            }
        }
    }

    #[test]
    fn custom_pair() {
        let square = Differentiable::new("square", |a: f64| Ok(a * a), |a, d| Ok(2.0 * a * d));
        assert_eq!(square.forward_backward(3.0, 1.0).unwrap(), (9.0, 6.0));
        assert_eq!(square.name(), "square");
    }
}
