//! Scalar operators and sequence combinators for reverse-mode
//! automatic differentiation.
//!
//! **Part of the [operators workspace](../index.html)**
//!
//! This crate is the primitive layer an autodiff tape is built on:
//!
//! - [`scalar`]: arithmetic, comparison and transcendental operators,
//!   plus backward functions (`log_back`, `inv_back`, `relu_back`, ...)
//! - [`pair`]: [`Differentiable`] records tying each forward function
//!   to its backward function
//! - [`functional`]: lazy [`map`](functional::map) and
//!   [`zip_with`](functional::zip_with), and the folds
//!   [`reduce`](functional::reduce) / [`fold`](functional::fold)
//! - [`list`]: `neg_list`, `add_lists`, `sum`, `prod` composed from the
//!   two layers above
//!
//! Everything is a pure function over `T: num_traits::Float`; there
//! is no shared state, so every item here is safe to call from any
//! number of threads.
//!
//! # Backward functions
//!
//! A backward function takes the **original input** and an upstream
//! gradient and returns `upstream · f′(input)`:
//!
//! ```
//! use operators::scalar::{log, log_back, relu_back};
//!
//! let a = 2.0;
//! let _y = log(a).unwrap();              // forward; the tape saves `a`
//! let g = log_back(a, 3.0).unwrap();     // reverse: 3 · (1/2)
//! assert_eq!(g, 1.5);
//!
//! assert_eq!(relu_back(0.0, 5.0), 0.0);  // subgradient 0 at the kink
//! ```
//!
//! # Lists without loops
//!
//! ```
//! use operators::list::{add_lists, neg_list, prod, sum};
//!
//! let v: Vec<f64> = add_lists([1.0, 2.0, 3.0], [10.0, 20.0]).collect();
//! assert_eq!(v, [11.0, 22.0]);                // truncated to the shorter
//!
//! assert_eq!(sum(neg_list([1.0, 2.0, 3.0])), -6.0);
//! assert_eq!(prod([2.0, 3.0, 4.0]), 24.0);
//! ```
//!
//! # Errors
//!
//! `log`, `inv`, `log_back` and `inv_back` return
//! [`OperatorResult`]; mapping them over a sequence yields results
//! that collect into a single `Result`:
//!
//! ```
//! use operators::functional::map;
//! use operators::{scalar, OperatorError, OperatorResult};
//!
//! let ok: OperatorResult<Vec<f64>> = map(scalar::inv, [1.0, 2.0, 4.0]).collect();
//! assert_eq!(ok.unwrap(), [1.0, 0.5, 0.25]);
//!
//! let bad: OperatorResult<Vec<f64>> = map(scalar::inv, [1.0, 0.0]).collect();
//! assert_eq!(bad, Err(OperatorError::DivisionByZero { op: "inv" }));
//! ```
//!
//! # Features
//!
//! - **`logging`** *(enabled by default)*: emit `log` records at
//!   `debug` level when an operator hits a domain error and when a
//!   seedless reduction runs over an empty sequence.

macro_rules! debug_log {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::debug!($($arg)+);
    };
}

pub mod error;
pub mod functional;
pub mod list;
pub mod pair;
pub mod scalar;

pub use error::{OperatorError, OperatorResult};
pub use functional::{concat, fold, map, reduce, zip_with};
pub use list::{add_lists, neg_list, prod, prod_from_identity, sum, sum_from_identity};
pub use pair::Differentiable;
