//! Numeric monoids over floating-point scalars.
//!
//! A bare `f64` does not say which operation a fold should use, so
//! each operation gets a newtype that carries its own identity:
//!
//! | Wrapper | `combine` | `empty` |
//! |---------|-----------|---------|
//! | [`Sum`] | `a + b` | `0` |
//! | [`Product`] | `a * b` | `1` |
//! | [`Max`] | `a` if `b < a` else `b` | `-∞` |
//!
//! # Example
//!
//! ```
//! use algebra_core::{Max, Monoid};
//!
//! let m = Max::concat([3.0, -1.0, 7.5].map(Max));
//! assert_eq!(m.get(), 7.5);
//! ```

use num_traits::Float;

use crate::{Monoid, Semigroup};

// combine = +

/// Floats under addition.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Sum<T>(pub T);

impl<T: Float> Semigroup for Sum<T> {
    fn combine(&self, other: &Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<T: Float> Monoid for Sum<T> {
    fn empty() -> Self {
        Sum(T::zero())
    }
}

// combine = *

/// Floats under multiplication.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Product<T>(pub T);

impl<T: Float> Semigroup for Product<T> {
    fn combine(&self, other: &Self) -> Self {
        Product(self.0 * other.0)
    }
}

impl<T: Float> Monoid for Product<T> {
    fn empty() -> Self {
        Product(T::one())
    }
}

// combine = max

/// Floats under maximum. Ties resolve to the right operand.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Max<T>(pub T);

impl<T: Float> Semigroup for Max<T> {
    fn combine(&self, other: &Self) -> Self {
        if other.0 < self.0 {
            *self
        } else {
            *other
        }
    }
}

impl<T: Float> Monoid for Max<T> {
    fn empty() -> Self {
        Max(T::neg_infinity())
    }
}

macro_rules! impl_unwrap {
    ( $( $W:ident ),+ ) => {
        $(
            impl<T: Copy> $W<T> {
                /// The wrapped scalar.
                pub fn get(self) -> T {
                    self.0
                }
            }
        )+
    }
}

impl_unwrap!(Sum, Product, Max);
