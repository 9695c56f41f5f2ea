//! Example: elementwise list operations without explicit loops.
//!
//! Run with: `cargo run --example list_ops`

use operators::functional::{fold, map, reduce, zip_with};
use operators::list::{add_lists, max_list, neg_list, prod, prod_from_identity, sum};
use operators::scalar::{mul, relu, sigmoid};

fn main() {
    let _ = env_logger::try_init();

    let xs = vec![1.0, -2.0, 3.0, -4.0];
    let ys = vec![10.0, 20.0, 30.0];

    println!("=== Combinators ===\n");
    println!("  xs                = {:?}", xs);
    println!("  ys                = {:?}", ys);
    println!(
        "  map(relu, xs)     = {:?}",
        map(relu, xs.clone()).collect::<Vec<f64>>()
    );
    println!(
        "  map(sigmoid, xs)  = {:?}",
        map(sigmoid, xs.clone()).collect::<Vec<f64>>()
    );
    println!(
        "  zip_with(xs, ys)  = {:?}  (shorter wins)",
        zip_with(xs.clone(), ys.clone()).collect::<Vec<_>>()
    );
    println!(
        "  reduce(-, xs)     = {}",
        reduce(|a, b| a - b, xs.clone())
    );

    println!("\n=== List operators ===\n");
    println!(
        "  neg_list(xs)      = {:?}",
        neg_list(xs.clone()).collect::<Vec<f64>>()
    );
    println!(
        "  add_lists(xs, ys) = {:?}",
        add_lists(xs.clone(), ys.clone()).collect::<Vec<f64>>()
    );
    println!("  sum(xs)           = {}", sum(xs.clone()));
    println!("  prod(xs)          = {}", prod(xs.clone()));
    println!("  max_list(xs)      = {}", max_list(xs.clone()));

    println!("\n=== Empty input ===\n");
    let empty: Vec<f64> = Vec::new();
    println!("  sum([])                = {}", sum(empty.clone()));
    println!("  prod([])               = {}  (seedless reduce)", prod(empty.clone()));
    println!("  prod_from_identity([]) = {}", prod_from_identity(empty.clone()));
    println!("  fold(mul, 1, [])       = {}", fold(mul, 1.0, empty));

    println!("\n=== Lazy over an infinite source ===\n");
    let halves = std::iter::successors(Some(1.0_f64), |x| Some(x / 2.0));
    let first: Vec<f64> = map(sigmoid, halves).take(4).collect();
    println!("  sigmoid(1, 1/2, 1/4, 1/8) = {:?}", first);
}
