//! Lazy, order-preserving sequence combinators.
//!
//! - [`map`]: apply a function to each element
//! - [`zip_with`]: pair up two sequences, stopping at the shorter
//! - [`reduce`]: left fold seeded by the first element
//! - [`fold`]: left fold seeded by an explicit identity
//! - [`concat`]: fold a sequence of [`Monoid`] values from `empty()`
//!
//! `map` and `zip_with` return adaptors that do no work until pulled.
//! Each pull advances the source by one element, so they are safe on
//! infinite sources as long as the consumer stops. An adaptor is
//! `Clone` (and so restartable from its current position) exactly
//! when its source is.
//!
//! # Example
//!
//! ```
//! use operators::functional::{map, reduce, zip_with};
//!
//! let squares: Vec<u64> = map(|x: u64| x * x, 1..).take(3).collect();
//! assert_eq!(squares, [1, 4, 9]);
//!
//! let pairs: Vec<_> = zip_with([1.0, 2.0, 3.0], [10.0, 20.0]).collect();
//! assert_eq!(pairs, [(1.0, 10.0), (2.0, 20.0)]);
//!
//! assert_eq!(reduce(|a, b| a - b, [10.0, 1.0, 2.0]), 7.0);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use algebra_core::Monoid;
use num_traits::Zero;

/// Lazily applies `f` to every element of `seq`.
///
/// Same length and order as `seq`. Nothing is evaluated until the
/// returned iterator is pulled.
pub fn map<I, F, B>(f: F, seq: I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    Map {
        iter: seq.into_iter(),
        f,
    }
}

/// Lazily pairs `a[i]` with `b[i]`.
///
/// Stops as soon as either input is exhausted; unequal lengths are
/// truncated, not padded and not an error. When `a` yields an element
/// but `b` does not, that element of `a` has already been consumed.
pub fn zip_with<A, B>(a: A, b: B) -> ZipWith<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    ZipWith {
        a: a.into_iter(),
        b: b.into_iter(),
    }
}

/// Left-to-right fold with no explicit seed.
///
/// The first element is the initial accumulator and `f(acc, next)` is
/// applied for every element after it. An empty sequence yields
/// `T::zero()`.
///
/// Returning zero on empty input is right for sums and wrong for
/// products; use [`fold`] or [`concat`] to supply the identity.
///
/// ```
/// use operators::functional::reduce;
///
/// assert_eq!(reduce(|a: f64, b| a * b, [2.0, 3.0]), 6.0);
/// assert_eq!(reduce(|a: f64, b| a * b, []), 0.0);
/// ```
pub fn reduce<T, F, I>(f: F, seq: I) -> T
where
    T: Zero,
    F: FnMut(T, T) -> T,
    I: IntoIterator<Item = T>,
{
    match seq.into_iter().reduce(f) {
        Some(acc) => acc,
        None => {
            debug_log!("reduce: empty sequence, returning zero");
            T::zero()
        }
    }
}

/// Left-to-right fold starting from `identity`.
///
/// An empty sequence yields `identity`.
pub fn fold<T, F, I>(f: F, identity: T, seq: I) -> T
where
    F: FnMut(T, T) -> T,
    I: IntoIterator<Item = T>,
{
    seq.into_iter().fold(identity, f)
}

/// Combine a sequence of monoid values, starting from [`Monoid::empty`].
pub fn concat<M, I>(seq: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    M::concat(seq)
}

/// Iterator returned by [`map`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
    iter: I,
    f: F,
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("iter", &self.iter).finish()
    }
}

impl<B, I, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        self.iter.next().map(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<B, I, F> ExactSizeIterator for Map<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> B,
{
}

impl<B, I, F> FusedIterator for Map<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> B,
{
}

/// Iterator returned by [`zip_with`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipWith<A, B> {
    a: A,
    b: B,
}

impl<A: Iterator, B: Iterator> Iterator for ZipWith<A, B> {
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.a.next()?;
        let y = self.b.next()?;
        Some((x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lo, a_hi) = self.a.size_hint();
        let (b_lo, b_hi) = self.b.size_hint();
        let hi = match (a_hi, b_hi) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (Some(x), None) | (None, Some(x)) => Some(x),
            (None, None) => None,
        };
        (a_lo.min(b_lo), hi)
    }
}

impl<A: ExactSizeIterator, B: ExactSizeIterator> ExactSizeIterator for ZipWith<A, B> {}

impl<A: FusedIterator, B: FusedIterator> FusedIterator for ZipWith<A, B> {}
