#![deny(missing_docs)]
//! # algebra-core — Semigroups and monoids for numeric folds
//!
//! **Part of the [operators workspace](../index.html)**
//!
//! This crate provides the algebraic vocabulary used when reducing
//! sequences of scalars:
//!
//! - [`Semigroup`]: associative binary operation
//! - [`Monoid`]: semigroup with identity element
//!
//! and the numeric wrappers that pick an operation for a float type:
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`
//! - [`Max`]: maximum, identity `-∞`
//!
//! A fold that starts from [`Monoid::empty`] is always defined, even
//! on an empty sequence, and yields the right answer for each
//! operation: the empty sum is `0` and the empty product is `1`.
//!
//! ## Quick start
//!
//! ```rust
//! use algebra_core::{Monoid, Product, Semigroup, Sum};
//!
//! let xs = [2.0, 3.0, 4.0];
//!
//! let total = Sum::concat(xs.iter().copied().map(Sum));
//! assert_eq!(total, Sum(9.0));
//!
//! let product = Product::concat(xs.iter().copied().map(Product));
//! assert_eq!(product, Product(24.0));
//!
//! // Empty folds land on the identity.
//! assert_eq!(Product::<f64>::concat(std::iter::empty()), Product(1.0));
//! assert_eq!(Sum(1.5).combine(&Sum::empty()), Sum(1.5));
//! ```

/// Float newtypes selecting an operation: [`Sum`], [`Product`], [`Max`].
pub mod numeric;

pub use numeric::{Max, Product, Sum};

/// A **semigroup**: a type with an associative binary operation.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
///
/// # Example
///
/// ```rust
/// use algebra_core::{Max, Semigroup};
///
/// let x = Max(3.0);
/// let y = Max(5.0);
/// let z = Max(2.0);
/// assert_eq!(x.combine(&y).combine(&z), x.combine(&y.combine(&z)));
/// ```
pub trait Semigroup: Sized {
    /// Combine two elements associatively.
    fn combine(&self, other: &Self) -> Self;
}

/// A **monoid**: a semigroup with an identity element.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - **Left identity**: `empty().combine(a) == a`
/// - **Right identity**: `a.combine(empty()) == a`
///
/// # Example
///
/// ```rust
/// use algebra_core::{Monoid, Product, Semigroup};
///
/// let x = Product(3.0);
/// let y = Product(5.0);
/// assert_eq!(x.combine(&y), Product(15.0));
/// assert_eq!(Product::empty().combine(&x), x);
/// assert_eq!(x.combine(&Product::empty()), x);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Fold an iterator using combine, starting from empty.
    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .fold(Self::empty(), |acc, x| acc.combine(&x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semigroup_combine_works() {
        let x = Sum(3.0);
        let y = Sum(5.0);
        assert_eq!(x.combine(&y), Sum(8.0));
    }

    #[test]
    fn semigroup_is_associative() {
        let x = Product(2.0);
        let y = Product(3.0);
        let z = Product(4.0);
        assert_eq!(x.combine(&y).combine(&z), x.combine(&y.combine(&z)));
    }

    #[test]
    fn monoid_concat_empty_is_identity() {
        let empty: Vec<Product<f64>> = vec![];
        assert_eq!(Product::concat(empty), Product::empty());
        assert_eq!(Product::<f64>::empty(), Product(1.0));
    }
}
