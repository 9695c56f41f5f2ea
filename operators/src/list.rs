//! Elementwise list operations built from the combinators.
//!
//! None of these loop by hand: each routes a scalar operator from
//! [`crate::scalar`] through [`crate::functional`].

use algebra_core::{Max, Monoid, Product, Sum};
use num_traits::Float;

use crate::functional::{concat, map, reduce, zip_with, Map, ZipWith};
use crate::scalar::{add, mul, neg};

/// Negate every element. Lazy.
pub fn neg_list<T, I>(seq: I) -> Map<I::IntoIter, fn(T) -> T>
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    map(neg as fn(T) -> T, seq)
}

/// Elementwise `a[i] + b[i]`, truncated to the shorter input. Lazy.
///
/// ```
/// use operators::list::add_lists;
///
/// let v: Vec<f64> = add_lists([1.0, 2.0, 3.0], [10.0, 20.0, 30.0]).collect();
/// assert_eq!(v, [11.0, 22.0, 33.0]);
/// ```
#[allow(clippy::type_complexity)]
pub fn add_lists<T, A, B>(a: A, b: B) -> Map<ZipWith<A::IntoIter, B::IntoIter>, fn((T, T)) -> T>
where
    T: Float,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    fn add_pair<T: Float>((x, y): (T, T)) -> T {
        add(x, y)
    }
    map(add_pair as fn((T, T)) -> T, zip_with(a, b))
}

/// Sum of all elements. `sum([]) == 0`.
pub fn sum<T, I>(seq: I) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    reduce(add, seq)
}

/// Product of all elements.
///
/// This uses the seedless [`reduce`], so the empty product is `0`,
/// not `1`. Use [`prod_from_identity`] when an empty input is possible.
///
/// ```
/// use operators::list::{prod, prod_from_identity};
///
/// assert_eq!(prod([2.0, 3.0, 4.0]), 24.0);
/// assert_eq!(prod(Vec::<f64>::new()), 0.0);
/// assert_eq!(prod_from_identity(Vec::<f64>::new()), 1.0);
/// ```
pub fn prod<T, I>(seq: I) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    reduce(mul, seq)
}

/// Sum folded from the additive identity. Same as [`sum`] on every input.
pub fn sum_from_identity<T, I>(seq: I) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    concat::<Sum<T>, _>(map(Sum, seq)).get()
}

/// Product folded from the multiplicative identity: the empty product is `1`.
pub fn prod_from_identity<T, I>(seq: I) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    concat::<Product<T>, _>(map(Product, seq)).get()
}

/// Largest element, or `-∞` for an empty input.
pub fn max_list<T, I>(seq: I) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    Max::concat(map(Max, seq)).get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::is_close;

    #[test]
    fn neg_list_negates_each() {
        let v: Vec<f64> = neg_list([1.0, -2.0, 0.5]).collect();
        assert_eq!(v, [-1.0, 2.0, -0.5]);
    }

    #[test]
    fn neg_list_twice_is_identity() {
        let xs = vec![1.0, -2.0, 0.5];
        let v: Vec<f64> = neg_list(neg_list(xs.clone())).collect();
        assert_eq!(v, xs);
    }

    #[test]
    fn add_lists_pairs_positions() {
        let v: Vec<f64> = add_lists([1.0, 2.0, 3.0], [10.0, 20.0, 30.0]).collect();
        assert_eq!(v, [11.0, 22.0, 33.0]);
    }

    #[test]
    fn add_lists_truncates() {
        let v: Vec<f64> = add_lists(vec![1.0, 2.0, 3.0], vec![10.0]).collect();
        assert_eq!(v, [11.0]);
        assert_eq!(add_lists(vec![1.0, 2.0], Vec::<f64>::new()).count(), 0);
    }

    #[test]
    fn add_lists_is_lazy_over_infinite_inputs() {
        let ones = std::iter::repeat(1.0_f64);
        let v: Vec<f64> = add_lists(ones, [1.0, 2.0]).collect();
        assert_eq!(v, [2.0, 3.0]);
    }

    #[test]
    fn sum_basic_and_empty() {
        assert_eq!(sum([1.0, 2.0, 3.0]), 6.0);
        assert_eq!(sum(Vec::<f64>::new()), 0.0);
        assert_eq!(sum([-4.5]), -4.5);
    }

    #[test]
    fn prod_basic_and_empty() {
        assert_eq!(prod([2.0, 3.0, 4.0]), 24.0);
        // Seedless reduce: the empty product comes out as 0.
        assert_eq!(prod(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn identity_folds_agree_on_non_empty() {
        let xs = [1.5, -2.0, 4.0];
        assert_eq!(sum_from_identity(xs), sum(xs));
        assert_eq!(prod_from_identity(xs), prod(xs));
    }

    #[test]
    fn identity_folds_on_empty() {
        assert_eq!(sum_from_identity(Vec::<f64>::new()), 0.0);
        assert_eq!(prod_from_identity(Vec::<f64>::new()), 1.0);
    }

    #[test]
    fn empty_folds_yield_monoid_identities() {
        let none = Vec::<f64>::new;
        assert_eq!(sum_from_identity(none()), Sum::<f64>::empty().get());
        assert_eq!(prod_from_identity(none()), Product::<f64>::empty().get());
        assert_eq!(max_list(none()), Max::<f64>::empty().get());
    }

    #[test]
    fn max_list_picks_largest() {
        assert_eq!(max_list([1.0, 7.0, -3.0]), 7.0);
        assert_eq!(max_list(Vec::<f32>::new()), f32::NEG_INFINITY);
    }

    #[test]
    fn sum_of_composed_lists() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [0.1, 0.2, 0.3];
        let total = sum(add_lists(neg_list(xs), ys));
        assert!(is_close(total, -5.4));
    }

    #[test]
    fn works_at_f32() {
        let v: Vec<f32> = add_lists([1.0_f32, 2.0], [0.5, 0.5]).collect();
        assert_eq!(v, [1.5, 2.5]);
        assert_eq!(prod([2.0_f32, 2.5]), 5.0);
    }
}
